//! File logging setup.
//!
//! The terminal belongs to the TUI, so log records go to a file under the
//! user's cache directory. Everything else in the crate logs through the
//! `log` macros and stays silent until [`init`] installs the dispatcher.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

/// Install the global logger described by `config`.
///
/// Does nothing when logging is disabled. Fails if a logger is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = config.level_filter()?;
    let log_path = get_log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let log_file =
        fern::log_file(&log_path).with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(log_file)
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    log::info!("Logging to {} at level {}", log_path.display(), level);
    Ok(())
}

/// Location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join("feedback-fab").join("feedback-fab.log"))
}
