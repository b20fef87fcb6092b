//! Collapses repeated matches into one artifact per logical path.

use std::collections::HashSet;

use log::debug;

use crate::models::PendingArtifact;

/// Keeps the first artifact seen for each logical path.
///
/// Keys on the logical path string only: two symlinks resolving to the
/// same file are two artifacts because their logical paths differ.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
    artifacts: Vec<PendingArtifact>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artifact, returning false if its logical path was already taken
    pub fn push(&mut self, artifact: PendingArtifact) -> bool {
        if !self.seen.insert(artifact.path.clone()) {
            debug!(
                "Skipping duplicate artifact {} matched by {:?}",
                artifact.path, artifact.glob_path
            );
            return false;
        }
        self.artifacts.push(artifact);
        true
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Unique artifacts in first-seen order
    pub fn into_artifacts(self) -> Vec<PendingArtifact> {
        self.artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn pending(path: &str, absolute: &str, glob: &str) -> PendingArtifact {
        PendingArtifact {
            path: path.to_string(),
            absolute_path: PathBuf::from(absolute),
            glob_path: glob.to_string(),
        }
    }

    #[test]
    fn test_first_pattern_wins() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.push(pending("folder/Commando.jpg", "/w/folder/Commando.jpg", "**/*.jpg")));
        assert!(!dedup.push(pending(
            "folder/Commando.jpg",
            "/w/folder/Commando.jpg",
            "folder/Commando.jpg"
        )));

        let artifacts = dedup.into_artifacts();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].glob_path, "**/*.jpg");
    }

    #[test]
    fn test_same_target_different_logical_paths_are_kept() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.push(pending("links/terminator/t2.jpg", "/w/links/terminator/t2.jpg", "**/*.jpg")));
        assert!(dedup.push(pending("links/folder-link/t2.jpg", "/w/links/folder-link/t2.jpg", "**/*.jpg")));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn test_order_is_first_seen() {
        let mut dedup = Deduplicator::new();
        for path in ["c", "a", "c", "b", "a"] {
            dedup.push(pending(path, path, "*"));
        }
        let paths: Vec<_> = dedup.into_artifacts().into_iter().map(|a| a.path).collect();
        assert_eq!(paths, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty() {
        let dedup = Deduplicator::new();
        assert!(dedup.is_empty());
        assert!(dedup.into_artifacts().is_empty());
    }
}
