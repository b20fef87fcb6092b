//! Error types for artifact collection.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole `collect` call
#[derive(Debug, Error)]
pub enum CollectError {
    /// A matched file could not be opened or fully read while checksumming
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The caller cancelled the collection
    #[error("Artifact collection was cancelled")]
    Cancelled,

    /// A worker task panicked or was aborted
    #[error("Collection worker failed: {0}")]
    Internal(String),
}

impl CollectError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CollectError::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CollectError::Cancelled)
    }
}

/// A single pattern could not be evaluated. Never fatal to a collection.
#[derive(Debug, Error)]
pub enum PatternEvaluationError {
    #[error("Invalid glob pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to read directory {path}: {source}")]
    UnreadableRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Expansion of {pattern:?} was cancelled")]
    Cancelled { pattern: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_read_error_names_path() {
        let err = CollectError::file_read(
            "/work/out/report.xml",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/work/out/report.xml"));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_cancelled() {
        assert!(CollectError::Cancelled.is_cancelled());
    }
}
