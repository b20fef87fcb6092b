//! # artifact-collector
//!
//! Artifact discovery and preparation for CI build agents.
//!
//! ## Overview
//!
//! Given the `;`-delimited glob patterns a build job declares, the collector
//! finds every matching regular file, removes repeated matches, and computes
//! size, SHA-1 and SHA-256 of each file in a single read. The resulting
//! descriptors are what the upload step reports to the build API.
//!
//! ## Features
//!
//! - **Recursive globs**: `**` spans zero or more directories, `*` and `?`
//!   stay within one path segment
//! - **Symlink policy**: symlinked directories are optionally followed, with
//!   cycle detection on canonical directory identity
//! - **Stable names**: the `normalised-upload-paths` experiment reports
//!   forward-slash paths on every platform
//! - **Parallel work**: expansion and checksumming run on a bounded pool
//!   while results keep their declaration order
//! - **Cancellation**: an in-flight collection stops when its token fires
//!
//! ## Usage
//!
//! ```no_run
//! use artifact_collector::collectors::collector::ArtifactCollector;
//! use artifact_collector::config::{ArtifactUploaderConfig, Experiments};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ArtifactUploaderConfig::new("coverage/**/*.xml;build.log")
//!     .with_follow_symlinks(true);
//!
//! let mut experiments = Experiments::new();
//! experiments.enable("normalised-upload-paths");
//!
//! let artifacts = ArtifactCollector::new(config)
//!     .collect(&experiments, &CancellationToken::new())
//!     .await?;
//!
//! for artifact in &artifacts {
//!     println!("{} {} {}", artifact.path, artifact.file_size, artifact.sha256sum);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: Artifact descriptors and intermediate records
//! - [`collectors`]: Pattern parsing, glob expansion, dedup and orchestration
//! - [`config`]: Typed configuration and experiment flags
//! - [`utils`]: Checksums, path normalization and summaries
//! - [`logging`]: Logger setup from typed settings
//! - [`error`]: Error types
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models and structures used throughout the application
pub mod models;

/// Artifact discovery, deduplication and checksumming
pub mod collectors;

/// Utility functions for hashing, path handling and reporting
pub mod utils;

/// Configuration management and experiment flags
pub mod config;

/// Logger initialisation
pub mod logging;

/// Error types returned by collection
pub mod error;

/// Application constants and configuration values
pub mod constants;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
