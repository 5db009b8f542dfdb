//! Process-wide logging through the `log` facade.
//!
//! Output goes to stderr or to a file, formatted with a UTC timestamp. The
//! global logger can only be installed once per process; later calls to
//! [`init`] are no-ops.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use once_cell::sync::OnceCell;

use crate::config::LoggingConfig;

static INSTALLED: OnceCell<LevelFilter> = OnceCell::new();

/// Parse a level name such as "info" or "DEBUG".
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim()).map_err(|_| anyhow::anyhow!("unknown level '{}'", level))
}

/// Install the global logger described by `config`.
///
/// Returns `true` when this call installed it, `false` when logging is
/// disabled or a logger was already installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }
    if INSTALLED.get().is_some() {
        return Ok(false);
    }

    let level = parse_level(&config.level)?;
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn);

    let dispatch = match &config.file {
        Some(path) => dispatch.chain(open_log_file(path)?),
        None => dispatch.chain(std::io::stderr()),
    };

    let mut installed = false;
    INSTALLED.get_or_try_init(|| -> Result<LevelFilter> {
        dispatch.apply().context("Failed to install logger")?;
        installed = true;
        Ok(level)
    })?;
    Ok(installed)
}

/// Level the installed logger was configured with, if any.
pub fn installed_level() -> Option<LevelFilter> {
    INSTALLED.get().copied()
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))
}
