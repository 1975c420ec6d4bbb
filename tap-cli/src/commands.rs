use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use tap_config::TapConfig;
use tap_engine::{MonitorRuntime, TapError};
use tap_telemetry::MetricsRecorder;

/// RunSafe Tap network traffic monitor
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the monitor (placeholder heartbeat until capture lands)
    Run(RunArgs),
    /// Load and validate the configuration, then exit
    CheckConfig(CheckConfigArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Configuration file to load instead of the default lookup
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CheckConfigArgs {
    /// Configuration file to check instead of the default lookup
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Outermost frame: every fault is logged exactly once, then propagated so
/// the process exits with a non-zero status.
pub async fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let result = match cli.command {
        Commands::Run(args) => run_monitor(args).await,
        Commands::CheckConfig(args) => check_config(args).await,
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Error in RunSafe Tap: {e}");
            Err(e)
        }
    }
}

async fn run_monitor(args: RunArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = load_config(args.config.as_deref())?;
    let runtime = MonitorRuntime::new(config, MetricsRecorder::new());
    runtime.run().await?;
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<TapConfig, TapError> {
    let config = match path {
        Some(path) => TapConfig::load_from_path(path)?,
        None => TapConfig::load()?,
    };
    Ok(config)
}

async fn check_config(args: CheckConfigArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = match &args.config {
        Some(path) => TapConfig::load_from_path(path)
            .with_context(|| format!("checking {}", path.display()))?,
        None => TapConfig::load().context("checking default configuration")?,
    };

    info!("Configuration OK");
    info!("Database URL configured: {}", config.database.url);
    Ok(())
}
