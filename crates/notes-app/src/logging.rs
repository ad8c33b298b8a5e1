//! Tracing setup
//!
//! The terminal is owned by the renderer, so log lines go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global subscriber
///
/// `RUST_LOG` overrides the configured filter. Without a usable log file
/// events are discarded; only a bad filter is an error.
pub fn init(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .with_context(|| format!("Invalid log filter '{}'", config.log.filter))?;

    let Some(path) = config.log_file() else {
        return Ok(());
    };
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            // Printed before the alternate screen is entered, so it stays visible
            eprintln!("Warning: logging disabled: {:#}", e);
            return Ok(());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::debug!(path = %path.display(), "logging initialised");
    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
