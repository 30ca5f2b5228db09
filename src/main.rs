//! Contact Book - Main entry point
//!
//! Runs one interactive session over stdin/stdout. Logging goes to
//! stderr so stdout stays clean for command replies.

use anyhow::Result;
use contact_book::{Config, ReplSession};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only; RUST_LOG overrides LOG_LEVEL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting contact book session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ReplSession::new(stdin.lock(), stdout.lock(), config.prompt.clone());
    session.run()?;

    info!("Contact book session complete");
    Ok(())
}
