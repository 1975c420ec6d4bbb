//! ## tap-cli
//! **RunSafe Tap entrypoint**
//!
//! Network traffic monitor for the audit pipeline. Monitoring proper lands
//! in a later stage; today the process announces itself, reads its database
//! URL from the environment, and heartbeats on a fixed cadence.
//!
//! ### Expectations:
//! - POSIX-compliant argument parsing
//! - Logger installed before configuration loads
//! - Exit code 0 on interrupt, non-zero on any propagated fault

use clap::Parser;
use tap_telemetry::EventLogger;

mod commands;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    EventLogger::init()?;
    let cli = Cli::parse();
    commands::run_command(cli).await
}
