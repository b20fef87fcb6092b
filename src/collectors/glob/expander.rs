use std::collections::HashSet;
use std::io;
use std::path::PathBuf;

use log::debug;
use tokio_util::sync::CancellationToken;

use crate::collectors::glob::helpers::split_pattern;
use crate::collectors::glob::walker::GlobWalker;
use crate::error::PatternEvaluationError;

/// Files matched by one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub pattern: String,
    /// Whether the pattern was absolute; decides how logical paths are derived
    pub is_absolute: bool,
    /// Absolute paths in traversal order, without repeats
    pub matches: Vec<PathBuf>,
}

/// Expands glob patterns against the filesystem
#[derive(Debug, Clone)]
pub struct GlobExpander {
    root: Option<PathBuf>,
    follow_symlinks: bool,
}

impl GlobExpander {
    /// Create an expander for relative patterns anchored at `root`.
    ///
    /// With no root, only absolute patterns can be evaluated.
    pub fn new(root: Option<PathBuf>, follow_symlinks: bool) -> Self {
        GlobExpander {
            root,
            follow_symlinks,
        }
    }

    /// Expand a single pattern into the regular files it matches
    pub fn expand(
        &self,
        pattern: &str,
        cancel: &CancellationToken,
    ) -> Result<Expansion, PatternEvaluationError> {
        let root = self.root.clone().unwrap_or_default();
        let split = split_pattern(pattern, &root)?;

        if !split.is_absolute && self.root.is_none() {
            return Err(PatternEvaluationError::UnreadableRoot {
                path: PathBuf::from("."),
                source: io::Error::new(io::ErrorKind::NotFound, "working directory is unavailable"),
            });
        }

        debug!(
            "Expanding {:?} from {} (follow symlinks: {})",
            pattern,
            split.base.display(),
            self.follow_symlinks
        );

        let walker = GlobWalker::new(pattern, &split.segments, self.follow_symlinks, cancel);
        let found = walker.walk(&split.base, &split.anchor)?;

        // Overlapping `**` segments can reach the same path twice
        let mut seen = HashSet::new();
        let matches: Vec<PathBuf> = found
            .into_iter()
            .filter(|path| seen.insert(path.clone()))
            .collect();

        debug!("Pattern {:?} matched {} files", pattern, matches.len());

        Ok(Expansion {
            pattern: pattern.to_string(),
            is_absolute: split.is_absolute,
            matches,
        })
    }
}
