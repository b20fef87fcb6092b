use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};

use crate::config::experiments::Experiments;
use crate::config::uploader_config::ArtifactUploaderConfig;

/// Logging settings, read as typed fields rather than looked up by name
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Synonym for `log_level: debug`; takes precedence over `log_level`
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub no_color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            debug: false,
            no_color: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Parse `log_level` into a filter. `notice` maps to `Info`.
    pub fn parse_level(&self) -> Result<LevelFilter> {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LevelFilter::Debug),
            "trace" => Ok(LevelFilter::Trace),
            "info" | "notice" | "" => Ok(LevelFilter::Info),
            "warn" | "warning" => Ok(LevelFilter::Warn),
            "error" | "fatal" => Ok(LevelFilter::Error),
            "off" => Ok(LevelFilter::Off),
            other => Err(anyhow::anyhow!("Unknown log level: {}", other)),
        }
    }
}

/// Everything the `artifact-collect` command reads from a config file
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AgentConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub experiments: Experiments,

    #[serde(default)]
    pub artifacts: ArtifactUploaderConfig,
}

impl AgentConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: AgentConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
