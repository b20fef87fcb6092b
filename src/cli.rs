use clap::Parser;
use std::path::PathBuf;

use crate::config::{AgentConfig, ReadErrorPolicy};

/// Command-line arguments for the artifact-collect tool.
///
/// Flags given here override the matching values from `--config`.
#[derive(Parser, Debug)]
#[clap(
    name = "artifact-collect",
    about = "Find, deduplicate and checksum build artifacts"
)]
pub struct Args {
    /// Semicolon-delimited glob patterns, e.g. "dist/**/*;logs/*.log"
    #[clap(long)]
    pub paths: Option<String>,

    /// Follow symlinked directories while expanding `**`
    #[clap(long)]
    pub follow_symlinks: bool,

    /// Directory relative patterns are resolved against (default: working directory)
    #[clap(long)]
    pub root: Option<PathBuf>,

    /// Enable an experiment, e.g. normalised-upload-paths (repeatable)
    #[clap(long = "experiment")]
    pub experiments: Vec<String>,

    /// Leave out unreadable matches instead of failing the collection
    #[clap(long)]
    pub skip_unreadable: bool,

    /// YAML configuration file
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Write a JSON collection summary to this file
    #[clap(long)]
    pub summary: Option<PathBuf>,

    /// Log level: debug, info, warn, error
    #[clap(long)]
    pub log_level: Option<String>,

    /// Enable debug logging. Takes precedence over --log-level
    #[clap(short, long, alias = "verbose")]
    pub debug: bool,

    /// Don't show colors in logging
    #[clap(long)]
    pub no_color: bool,
}

impl Args {
    /// Layer command-line flags over a loaded configuration
    pub fn apply_to(&self, config: &mut AgentConfig) {
        if let Some(paths) = &self.paths {
            config.artifacts.paths = paths.clone();
        }
        if self.follow_symlinks {
            config.artifacts.follow_symlinks = true;
        }
        if let Some(root) = &self.root {
            config.artifacts.root = Some(root.clone());
        }
        if self.skip_unreadable {
            config.artifacts.read_error_policy = ReadErrorPolicy::Skip;
        }
        for name in &self.experiments {
            config.experiments.enable(name);
        }
        if let Some(level) = &self.log_level {
            config.logging.log_level = level.clone();
        }
        if self.debug {
            config.logging.debug = true;
        }
        if self.no_color {
            config.logging.no_color = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureFlags;

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from([
            "artifact-collect",
            "--paths",
            "out/**/*.xml",
            "--follow-symlinks",
            "--experiment",
            "normalised-upload-paths",
            "--skip-unreadable",
            "--debug",
        ]);

        let mut config = AgentConfig::default();
        config.artifacts.paths = "ignored/*".to_string();
        args.apply_to(&mut config);

        assert_eq!(config.artifacts.paths, "out/**/*.xml");
        assert!(config.artifacts.follow_symlinks);
        assert_eq!(config.artifacts.read_error_policy, ReadErrorPolicy::Skip);
        assert!(config.experiments.is_enabled("normalised-upload-paths"));
        assert!(config.logging.debug);
    }

    #[test]
    fn test_args_keep_config_values_when_absent() {
        let args = Args::parse_from(["artifact-collect"]);

        let mut config = AgentConfig::default();
        config.artifacts.paths = "dist/*".to_string();
        config.artifacts.follow_symlinks = true;
        args.apply_to(&mut config);

        assert_eq!(config.artifacts.paths, "dist/*");
        assert!(config.artifacts.follow_symlinks);
        assert_eq!(config.artifacts.read_error_policy, ReadErrorPolicy::Abort);
    }
}
