//! Address Book - Main entry point
//!
//! Runs the interactive contact directory on the terminal, persisting the
//! book to the configured file after every change.

use address_book::{Config, ConsoleUi, JsonFileStore, Session};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only to keep prompts on stdout readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.book_path.display(), "Opening address book");

    let store = JsonFileStore::new(&config.book_path);
    let mut session = match Session::open(store, ConsoleUi::stdio(), config.page_size) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    session.run()?;

    info!("Address book closed");
    Ok(())
}
