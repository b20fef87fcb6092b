use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::constants::{PATTERN_DELIMITER, RECURSIVE_WILDCARD};
use crate::error::PatternEvaluationError;

/// Split a `;`-delimited pattern list, dropping blank entries and keeping order
pub fn parse_patterns(paths: &str) -> Vec<String> {
    paths
        .split(PATTERN_DELIMITER)
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check if a path segment contains glob metacharacters
pub fn has_wildcard(segment: &str) -> bool {
    segment.contains(['*', '?', '['])
}

/// One path component of a pattern, after the literal base
#[derive(Debug, Clone)]
pub enum Segment {
    /// Matched by name, no directory listing needed
    Literal(OsString),
    /// Matched against each entry of a directory
    Wildcard(Pattern),
    /// `**`: zero or more directory levels
    Recursive,
    /// `..` after a wildcard, resolved lexically against the matched directory
    Parent,
}

/// A pattern split into the directory where walking starts and the
/// segments that still have to be matched below it
#[derive(Debug, Clone)]
pub struct SplitPattern {
    pub base: PathBuf,
    /// Where the walk is anchored: the collection root for relative
    /// patterns, the literal prefix itself for absolute ones. Directories
    /// between the anchor and the base obey the symlink policy.
    pub anchor: PathBuf,
    pub segments: Vec<Segment>,
    pub is_absolute: bool,
}

/// Split a pattern into its literal base and remaining segments.
///
/// Relative patterns are anchored at `root`. Leading wildcard-free
/// components are folded into the base so the walker never lists
/// directories it could address by name.
pub fn split_pattern(pattern: &str, root: &Path) -> Result<SplitPattern, PatternEvaluationError> {
    let pattern_path = Path::new(pattern);
    let is_absolute = pattern_path.has_root();

    let mut base = if is_absolute {
        PathBuf::new()
    } else {
        root.to_path_buf()
    };
    let mut anchor = base.clone();
    let mut segments = Vec::new();

    for component in pattern_path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => base.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir if segments.is_empty() => {
                base.pop();
                if !base.starts_with(&anchor) {
                    anchor = base.clone();
                }
            }
            Component::ParentDir => segments.push(Segment::Parent),
            Component::Normal(name) => {
                let segment = match name.to_str() {
                    Some(RECURSIVE_WILDCARD) => Segment::Recursive,
                    Some(text) if has_wildcard(text) => {
                        Segment::Wildcard(Pattern::new(text).map_err(|e| {
                            PatternEvaluationError::InvalidPattern {
                                pattern: pattern.to_string(),
                                message: e.msg.to_string(),
                            }
                        })?)
                    }
                    _ => Segment::Literal(name.to_os_string()),
                };

                match segment {
                    Segment::Literal(name) if segments.is_empty() => base.push(name),
                    other => segments.push(other),
                }
            }
        }
    }

    if is_absolute {
        anchor = base.clone();
    }

    Ok(SplitPattern {
        base,
        anchor,
        segments,
        is_absolute,
    })
}

/// Match options for single path segments.
///
/// Case folding follows the host default: insensitive on Windows and macOS.
pub fn segment_match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(any(windows, target_os = "macos")),
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}
