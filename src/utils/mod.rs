//! Utility functions for artifact preparation.
//!
//! ## Components
//!
//! - **Hashing**: single-pass SHA-1 + SHA-256 + size calculation
//! - **Paths**: logical path derivation and separator normalization
//! - **Summary**: collection summary and reporting
//!
//! ## Common Use Cases
//!
//! ### Generating File Checksums
//!
//! ```no_run
//! use artifact_collector::utils::hash::checksum_file;
//! use std::path::Path;
//! use tokio_util::sync::CancellationToken;
//!
//! # fn example() -> anyhow::Result<()> {
//! let checksum = checksum_file(Path::new("dist/app.tar.gz"), &CancellationToken::new())?;
//! println!("{} bytes, sha1 {}, sha256 {}", checksum.size, checksum.sha1, checksum.sha256);
//! # Ok(())
//! # }
//! ```

/// Collection summary generation and reporting
pub mod summary;

/// Cryptographic hash calculation utilities
pub mod hash;

/// Logical path derivation and normalization
pub mod path;
