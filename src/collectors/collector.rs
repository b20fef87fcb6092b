use std::path::PathBuf;
use std::sync::Arc;

use futures::future;
use log::{debug, info, warn};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::collectors::dedup::Deduplicator;
use crate::collectors::glob::{parse_patterns, Expansion, GlobExpander};
use crate::config::{ArtifactUploaderConfig, FeatureFlags, ReadErrorPolicy};
use crate::constants::{worker_pool_size, EXPERIMENT_NORMALISED_UPLOAD_PATHS};
use crate::error::{CollectError, PatternEvaluationError};
use crate::models::{ArtifactDescriptor, FileChecksum, PendingArtifact};
use crate::utils::hash::checksum_file;
use crate::utils::path::{logical_path, normalize};

/// Discovers, deduplicates and checksums the artifacts named by a config
#[derive(Debug, Clone)]
pub struct ArtifactCollector {
    config: ArtifactUploaderConfig,
}

impl ArtifactCollector {
    /// Create a new artifact collector
    pub fn new(config: ArtifactUploaderConfig) -> Self {
        ArtifactCollector { config }
    }

    /// Collect artifacts for every configured pattern.
    ///
    /// Returns descriptors ordered by pattern declaration, then match order.
    /// Patterns that cannot be evaluated contribute nothing. Unreadable
    /// matches fail the call unless the read error policy is `Skip`.
    pub async fn collect(
        &self,
        flags: &dyn FeatureFlags,
        cancel: &CancellationToken,
    ) -> Result<Vec<ArtifactDescriptor>, CollectError> {
        let patterns = parse_patterns(&self.config.paths);
        if patterns.is_empty() {
            debug!("No artifact patterns configured");
            return Ok(Vec::new());
        }

        let root = match self.config.resolve_root() {
            Ok(root) => Some(root),
            Err(e) => {
                warn!("Failed to resolve collection root: {}", e);
                None
            }
        };
        let use_forward_slash = flags.is_enabled(EXPERIMENT_NORMALISED_UPLOAD_PATHS);

        info!(
            "Searching for artifacts matching {} pattern(s) (follow symlinks: {})",
            patterns.len(),
            self.config.follow_symlinks
        );

        let expansions = self.expand_all(&patterns, root.clone(), cancel).await?;

        let mut dedup = Deduplicator::new();
        for expansion in expansions {
            for absolute_path in expansion.matches {
                let logical = logical_path(&absolute_path, root.as_deref(), expansion.is_absolute);
                dedup.push(PendingArtifact {
                    path: normalize(&logical, use_forward_slash),
                    absolute_path,
                    glob_path: expansion.pattern.clone(),
                });
            }
        }

        if dedup.is_empty() {
            info!("No artifacts matched");
            return Ok(Vec::new());
        }

        let pending = dedup.into_artifacts();
        info!("Found {} artifact(s), calculating checksums", pending.len());

        let descriptors = self.checksum_all(pending, cancel).await?;
        info!("Prepared {} artifact(s) for upload", descriptors.len());
        Ok(descriptors)
    }

    /// Expand patterns concurrently, keeping results in declaration order
    async fn expand_all(
        &self,
        patterns: &[String],
        root: Option<PathBuf>,
        cancel: &CancellationToken,
    ) -> Result<Vec<Expansion>, CollectError> {
        let semaphore = Arc::new(Semaphore::new(worker_pool_size()));
        let expander = Arc::new(GlobExpander::new(root, self.config.follow_symlinks));

        let futures = patterns.iter().map(|pattern| {
            let semaphore = Arc::clone(&semaphore);
            let expander = Arc::clone(&expander);
            let pattern = pattern.clone();
            let cancel = cancel.clone();

            async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| CollectError::Internal(e.to_string()))?;

                tokio::task::spawn_blocking(move || expander.expand(&pattern, &cancel))
                    .await
                    .map_err(|e| CollectError::Internal(e.to_string()))
            }
        });

        let results = tokio::select! {
            results = future::join_all(futures) => results,
            _ = cancel.cancelled() => return Err(CollectError::Cancelled),
        };

        let mut expansions = Vec::with_capacity(results.len());
        for (pattern, result) in patterns.iter().zip(results) {
            match result? {
                Ok(expansion) => expansions.push(expansion),
                Err(PatternEvaluationError::Cancelled { .. }) => return Err(CollectError::Cancelled),
                Err(e) => warn!("Skipping pattern {:?}: {}", pattern, e),
            }
        }

        if cancel.is_cancelled() {
            return Err(CollectError::Cancelled);
        }
        Ok(expansions)
    }

    /// Checksum files concurrently, writing results into their original slots
    async fn checksum_all(
        &self,
        pending: Vec<PendingArtifact>,
        cancel: &CancellationToken,
    ) -> Result<Vec<ArtifactDescriptor>, CollectError> {
        let policy = self.config.read_error_policy;
        let semaphore = Arc::new(Semaphore::new(worker_pool_size()));
        // Cancelled on the first fatal read error so siblings stop early
        let abort = cancel.child_token();

        let futures = pending.iter().map(|artifact| {
            let semaphore = Arc::clone(&semaphore);
            let path = artifact.absolute_path.clone();
            let abort = abort.clone();

            async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| CollectError::Internal(e.to_string()))?;

                let worker_cancel = abort.clone();
                let result = tokio::task::spawn_blocking(move || checksum_file(&path, &worker_cancel))
                    .await
                    .map_err(|e| CollectError::Internal(e.to_string()))?;

                if policy == ReadErrorPolicy::Abort {
                    if let Err(CollectError::FileRead { .. }) = &result {
                        abort.cancel();
                    }
                }
                result
            }
        });

        let results: Vec<Result<FileChecksum, CollectError>> = tokio::select! {
            results = future::join_all(futures) => results,
            _ = cancel.cancelled() => return Err(CollectError::Cancelled),
        };

        if cancel.is_cancelled() {
            return Err(CollectError::Cancelled);
        }

        let mut descriptors = Vec::with_capacity(pending.len());
        let mut first_failure = None;
        let mut aborted = false;

        for (artifact, result) in pending.into_iter().zip(results) {
            match result {
                Ok(checksum) => descriptors.push(artifact.into_descriptor(checksum)),
                Err(e @ CollectError::FileRead { .. }) => match policy {
                    ReadErrorPolicy::Skip => {
                        warn!("Skipping unreadable artifact {}: {}", artifact.path, e);
                    }
                    ReadErrorPolicy::Abort => {
                        first_failure.get_or_insert(e);
                    }
                },
                // A sibling's read failure stopped this one
                Err(CollectError::Cancelled) => aborted = true,
                Err(e) => return Err(e),
            }
        }

        if let Some(e) = first_failure {
            return Err(e);
        }
        if aborted {
            return Err(CollectError::Cancelled);
        }
        Ok(descriptors)
    }
}
