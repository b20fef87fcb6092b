use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::collectors::glob::helpers::{segment_match_options, Segment};
use crate::error::PatternEvaluationError;

/// What a directory entry means to the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    /// Emitted when it is the last segment's match
    File,
    /// Descended into
    Directory,
    /// Broken links, sockets, devices, symlinked directories when not following
    Other,
}

/// Directory walker that matches pattern segments level by level
pub struct GlobWalker<'a> {
    pattern: &'a str,
    segments: &'a [Segment],
    follow_symlinks: bool,
    options: MatchOptions,
    cancel: &'a CancellationToken,
}

impl<'a> GlobWalker<'a> {
    /// Create a new glob walker
    pub fn new(
        pattern: &'a str,
        segments: &'a [Segment],
        follow_symlinks: bool,
        cancel: &'a CancellationToken,
    ) -> Self {
        GlobWalker {
            pattern,
            segments,
            follow_symlinks,
            options: segment_match_options(),
            cancel,
        }
    }

    /// Walk from `base` and collect matching files in traversal order.
    ///
    /// `anchor` is the directory the base was reached from; the literal
    /// components between the two obey the same symlink policy as
    /// matched entries.
    pub fn walk(&self, base: &Path, anchor: &Path) -> Result<Vec<PathBuf>, PatternEvaluationError> {
        let mut results = Vec::new();

        if self.crosses_symlinked_dir(anchor, base) {
            return Ok(results);
        }

        // Purely literal pattern: the base itself is the only candidate
        if self.segments.is_empty() {
            if self.classify(base) == EntryKind::File {
                results.push(base.to_path_buf());
            }
            return Ok(results);
        }

        match fs::metadata(base) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => {
                debug!("Pattern base is not a directory: {}", base.display());
                return Ok(results);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Pattern base does not exist: {}", base.display());
                return Ok(results);
            }
            Err(e) => {
                return Err(PatternEvaluationError::UnreadableRoot {
                    path: base.to_path_buf(),
                    source: e,
                })
            }
        }

        // Probe the base so permission problems surface as evaluation errors
        fs::read_dir(base).map_err(|e| PatternEvaluationError::UnreadableRoot {
            path: base.to_path_buf(),
            source: e,
        })?;

        let mut branch = Vec::new();
        if self.follow_symlinks {
            if let Ok(identity) = fs::canonicalize(base) {
                branch.push(identity);
            }
        }

        self.walk_segments(base, self.segments, &mut branch, &mut results)?;
        Ok(results)
    }

    /// Match `segments` below `dir`, appending files to `results`
    fn walk_segments(
        &self,
        dir: &Path,
        segments: &[Segment],
        branch: &mut Vec<PathBuf>,
        results: &mut Vec<PathBuf>,
    ) -> Result<(), PatternEvaluationError> {
        if self.cancel.is_cancelled() {
            return Err(PatternEvaluationError::Cancelled {
                pattern: self.pattern.to_string(),
            });
        }

        let Some((segment, rest)) = segments.split_first() else {
            return Ok(());
        };

        match segment {
            Segment::Literal(name) => {
                let path = dir.join(name);
                self.visit(&path, self.classify(&path), rest, branch, results)?;
            }
            Segment::Wildcard(pattern) => {
                for (name, path) in self.list_dir(dir) {
                    if pattern.matches_with(&name.to_string_lossy(), self.options) {
                        let kind = self.classify(&path);
                        self.visit(&path, kind, rest, branch, results)?;
                    }
                }
            }
            Segment::Parent => {
                // `dir` was reached by name, so its lexical parent is where we came from
                let parent = dir.parent().unwrap_or(dir).to_path_buf();
                let left = if self.follow_symlinks { branch.pop() } else { None };
                let result = self.walk_segments(&parent, rest, branch, results);
                if let Some(identity) = left {
                    branch.push(identity);
                }
                result?;
            }
            Segment::Recursive => {
                let entries = self.list_dir(dir);

                // Zero levels: the rest of the pattern applies right here
                if rest.is_empty() {
                    for (_, path) in &entries {
                        if self.classify(path) == EntryKind::File {
                            results.push(path.clone());
                        }
                    }
                } else {
                    self.walk_segments(dir, rest, branch, results)?;
                }

                for (_, path) in entries {
                    if self.classify(&path) == EntryKind::Directory {
                        self.descend(&path, segments, branch, results)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle one entry matched by a literal or wildcard segment
    fn visit(
        &self,
        path: &Path,
        kind: EntryKind,
        rest: &[Segment],
        branch: &mut Vec<PathBuf>,
        results: &mut Vec<PathBuf>,
    ) -> Result<(), PatternEvaluationError> {
        match kind {
            EntryKind::File if rest.is_empty() => results.push(path.to_path_buf()),
            EntryKind::Directory if !rest.is_empty() => {
                self.descend(path, rest, branch, results)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Enter a directory, refusing to revisit one already on this branch
    fn descend(
        &self,
        dir: &Path,
        segments: &[Segment],
        branch: &mut Vec<PathBuf>,
        results: &mut Vec<PathBuf>,
    ) -> Result<(), PatternEvaluationError> {
        if !self.follow_symlinks {
            return self.walk_segments(dir, segments, branch, results);
        }

        let identity = match fs::canonicalize(dir) {
            Ok(identity) => identity,
            Err(e) => {
                debug!("Skipping unresolvable directory {}: {}", dir.display(), e);
                return Ok(());
            }
        };

        if branch.contains(&identity) {
            debug!(
                "Not descending into {}: already visited as {}",
                dir.display(),
                identity.display()
            );
            return Ok(());
        }

        branch.push(identity);
        let result = self.walk_segments(dir, segments, branch, results);
        branch.pop();
        result
    }

    /// Whether reaching `base` from `anchor` passes through a symlinked
    /// directory that must not be entered
    fn crosses_symlinked_dir(&self, anchor: &Path, base: &Path) -> bool {
        if self.follow_symlinks {
            return false;
        }
        let Ok(below) = base.strip_prefix(anchor) else {
            return false;
        };

        let mut components: Vec<_> = below.components().collect();
        // For a literal-only pattern the last component is the candidate file
        if self.segments.is_empty() {
            components.pop();
        }

        let mut current = anchor.to_path_buf();
        for component in components {
            current.push(component);
            match fs::symlink_metadata(&current) {
                Ok(metadata) if metadata.file_type().is_symlink() => {
                    debug!(
                        "Not descending into symlinked directory {} for {:?}",
                        current.display(),
                        self.pattern
                    );
                    return true;
                }
                Ok(_) => {}
                // Missing or unreadable components are reported by the walk itself
                Err(_) => return false,
            }
        }
        false
    }

    /// Directory entries sorted by name. Unreadable directories are skipped.
    fn list_dir(&self, dir: &Path) -> Vec<(OsString, PathBuf)> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Skipping unreadable directory {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut listed: Vec<(OsString, PathBuf)> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some((entry.file_name(), entry.path())),
                Err(e) => {
                    debug!("Failed to read entry in {}: {}", dir.display(), e);
                    None
                }
            })
            .collect();
        listed.sort_by(|a, b| a.0.cmp(&b.0));
        listed
    }

    /// Classify a path according to the symlink policy
    fn classify(&self, path: &Path) -> EntryKind {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(_) => return EntryKind::Other,
        };

        if !metadata.file_type().is_symlink() {
            return kind_of(&metadata);
        }

        // Symlinks are resolved for the leaf check in both modes,
        // but only followed into directories when asked to
        match fs::metadata(path) {
            Ok(target) if target.is_file() => EntryKind::File,
            Ok(target) if target.is_dir() && self.follow_symlinks => EntryKind::Directory,
            Ok(_) => EntryKind::Other,
            Err(e) => {
                debug!("Skipping broken symlink {}: {}", path.display(), e);
                EntryKind::Other
            }
        }
    }
}

fn kind_of(metadata: &fs::Metadata) -> EntryKind {
    if metadata.is_file() {
        EntryKind::File
    } else if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Other
    }
}
