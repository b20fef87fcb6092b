//! Logger setup driven by [`LoggingConfig`].

use anyhow::{Context, Result};
use log::{warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::config::LoggingConfig;

/// Pick the log level. `debug` wins over `log_level`; an unparsable level
/// falls back to `Info` and the parse error is handed back for reporting.
pub fn resolve_level(config: &LoggingConfig) -> (LevelFilter, Option<anyhow::Error>) {
    if config.debug {
        return (LevelFilter::Debug, None);
    }
    match config.parse_level() {
        Ok(level) => (level, None),
        Err(e) => (LevelFilter::Info, Some(e)),
    }
}

pub fn color_choice(config: &LoggingConfig) -> ColorChoice {
    if config.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

/// Initialize terminal logging
pub fn initialize_logging(config: &LoggingConfig) -> Result<()> {
    let (level, level_error) = resolve_level(config);

    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        color_choice(config),
    )
    .context("Failed to initialize logger")?;

    if let Some(e) = level_error {
        warn!("Error when setting log level: {}. Defaulting log level to info", e);
    }
    Ok(())
}
