use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use serde_json::json;
use uuid::Uuid;

use crate::models::ArtifactDescriptor;

/// Create a JSON summary of a collection.
///
/// The summary lists every descriptor in result order alongside the totals
/// the upload step reports back to the build.
///
/// # Example Output
///
/// ```json
/// {
///   "collection_id": "550e8400-e29b-41d4-a716-446655440000",
///   "hostname": "build-agent-07",
///   "collection_timestamp": "2024-01-15T14:30:52+00:00",
///   "artifact_count": 2,
///   "total_bytes": 412,
///   "artifacts": [...]
/// }
/// ```
pub fn create_collection_summary(hostname: &str, artifacts: &[ArtifactDescriptor]) -> Result<String> {
    let total_bytes: u64 = artifacts.iter().map(|a| a.file_size).sum();

    let summary = json!({
        "collection_id": Uuid::new_v4().to_string(),
        "hostname": hostname,
        "collection_timestamp": Utc::now().to_rfc3339(),
        "artifact_count": artifacts.len(),
        "total_bytes": total_bytes,
        "artifacts": artifacts,
    });

    serde_json::to_string_pretty(&summary).context("Failed to serialize collection summary")
}

/// Write the collection summary to `path`
pub fn write_collection_summary(
    path: &Path,
    hostname: &str,
    artifacts: &[ArtifactDescriptor],
) -> Result<()> {
    let summary = create_collection_summary(hostname, artifacts)?;
    fs::write(path, summary)
        .context(format!("Failed to write summary to {}", path.display()))?;

    info!("Collection summary written to {}", path.display());
    Ok(())
}
