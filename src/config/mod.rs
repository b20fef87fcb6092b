// Re-export all items from the submodules
mod agent_config;
mod experiments;
mod uploader_config;

// Re-export uploader config
pub use uploader_config::{ArtifactUploaderConfig, ReadErrorPolicy};

// Re-export experiment flags
pub use experiments::{Experiments, FeatureFlags, KNOWN_EXPERIMENTS};

// Re-export command config
pub use agent_config::{AgentConfig, LoggingConfig};
