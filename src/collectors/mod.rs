//! Artifact discovery and preparation.
//!
//! This module turns a list of glob patterns into checksummed artifact
//! descriptors. Each stage is kept separate so it can be tested alone.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        ArtifactCollector::collect       │
//! ├─────────────────────────────────────────┤
//! │  Pattern parser   (`;` split, ordered)  │
//! ├─────────────────────────────────────────┤
//! │  Glob expander    (per pattern, pooled) │
//! ├─────────────────────────────────────────┤
//! │  Path normalizer → Deduplicator         │
//! ├─────────────────────────────────────────┤
//! │  Checksums        (per file, pooled)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use artifact_collector::collectors::collector::ArtifactCollector;
//! use artifact_collector::config::{ArtifactUploaderConfig, Experiments};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ArtifactUploaderConfig::new("dist/**/*.tar.gz;logs/*.log");
//! let collector = ArtifactCollector::new(config);
//!
//! let artifacts = collector
//!     .collect(&Experiments::new(), &CancellationToken::new())
//!     .await?;
//!
//! println!("Collected {} artifacts", artifacts.len());
//! # Ok(())
//! # }
//! ```

/// Orchestration of the whole collection pipeline
pub mod collector;

/// Glob pattern parsing and filesystem expansion
pub mod glob;

/// Logical-path deduplication
pub mod dedup;
