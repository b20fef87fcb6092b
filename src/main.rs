use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use artifact_collector::cli::Args;
use artifact_collector::collectors::collector::ArtifactCollector;
use artifact_collector::config::AgentConfig;
use artifact_collector::logging::initialize_logging;
use artifact_collector::models::ArtifactDescriptor;
use artifact_collector::utils::summary;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Load configuration and layer flags on top
    let config = load_config(&args)?;

    // Initialize logging
    initialize_logging(&config.logging)?;

    info!("Starting artifact collection");

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    let artifacts = runtime.block_on(run_collection(&config))?;

    // Print descriptors for the upload step
    print_artifacts(&artifacts)?;

    // Write collection summary
    if let Some(path) = &args.summary {
        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "unknown".to_string());
        summary::write_collection_summary(path, &hostname, &artifacts)?;
    }

    info!("Artifact collection completed successfully");
    Ok(())
}

/// Load the YAML config if one was given, then apply command-line overrides
fn load_config(args: &Args) -> Result<AgentConfig> {
    let mut config = match &args.config {
        Some(path) => AgentConfig::from_yaml_file(path)?,
        None => AgentConfig::default(),
    };
    args.apply_to(&mut config);
    Ok(config)
}

/// Run one collection, cancelling it on Ctrl-C
async fn run_collection(config: &AgentConfig) -> Result<Vec<ArtifactDescriptor>> {
    let cancel = CancellationToken::new();

    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling artifact collection");
            signal_cancel.cancel();
        }
    });

    let collector = ArtifactCollector::new(config.artifacts.clone());
    let artifacts = collector
        .collect(&config.experiments, &cancel)
        .await
        .context("Artifact collection failed")?;

    Ok(artifacts)
}

fn print_artifacts(artifacts: &[ArtifactDescriptor]) -> Result<()> {
    let json = serde_json::to_string_pretty(artifacts)
        .context("Failed to serialize artifact descriptors")?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json).context("Failed to write artifact descriptors")?;
    Ok(())
}
