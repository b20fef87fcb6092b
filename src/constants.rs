//! Global constants for the artifact collector.
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make configuration changes easier.

// Memory and buffer size constants
/// Default buffer size for checksum reads (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

// Concurrency constants
/// Upper bound on concurrent expansion and checksum workers
pub const MAX_CONCURRENT_WORKERS: usize = 32;

/// Worker pool size: twice the CPU count, capped to keep file descriptors in check
pub fn worker_pool_size() -> usize {
    std::cmp::min(num_cpus::get() * 2, MAX_CONCURRENT_WORKERS)
}

// Pattern constants
/// Delimiter between glob patterns in the `paths` setting
pub const PATTERN_DELIMITER: char = ';';

/// Segment that matches zero or more directory levels
pub const RECURSIVE_WILDCARD: &str = "**";

// Experiment names
/// Rewrites logical artifact paths to forward-slash form on every platform
pub const EXPERIMENT_NORMALISED_UPLOAD_PATHS: &str = "normalised-upload-paths";
