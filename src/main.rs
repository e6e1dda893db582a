//! Contact Assistant - Main entry point
//!
//! Loads the configuration and the persisted address book, runs the
//! interactive loop, and persists the book again on the way out.

use anyhow::Result;
use contact_assistant::{repl, storage, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting the transcript)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact assistant with data file: {}",
        config.data_file.display()
    );

    // A missing snapshot starts an empty book; anything else aborts startup
    // rather than silently dropping data that exists on disk.
    let mut book = match storage::load(&config.data_file) {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    repl::run(&mut book, &config)?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
