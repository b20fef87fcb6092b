use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What to do when a matched file cannot be read while checksumming
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReadErrorPolicy {
    /// Fail the whole collection, naming the offending path
    #[default]
    Abort,
    /// Log a warning and leave the artifact out of the result
    Skip,
}

/// Settings consumed by the artifact collector
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ArtifactUploaderConfig {
    /// Semicolon-delimited glob patterns
    #[serde(default)]
    pub paths: String,

    /// Descend into symlinked directories while expanding `**`
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Directory relative patterns are resolved against.
    /// Defaults to the process working directory.
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub read_error_policy: ReadErrorPolicy,
}

impl ArtifactUploaderConfig {
    pub fn new(paths: impl Into<String>) -> Self {
        Self {
            paths: paths.into(),
            ..Default::default()
        }
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_read_error_policy(mut self, policy: ReadErrorPolicy) -> Self {
        self.read_error_policy = policy;
        self
    }

    /// Resolve the collection root, falling back to the current directory
    pub fn resolve_root(&self) -> io::Result<PathBuf> {
        match &self.root {
            Some(root) if root.is_absolute() => Ok(root.clone()),
            Some(root) => Ok(std::env::current_dir()?.join(root)),
            None => std::env::current_dir(),
        }
    }
}
