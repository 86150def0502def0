use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::config::LOG_ENV_VAR;

/// Installs a file logger when the log variable is set. The terminal is
/// owned by the game, so nothing is ever logged to stdout.
pub fn init() -> Result<()> {
    let path = match std::env::var_os(LOG_ENV_VAR) {
        Some(path) if !path.is_empty() => path,
        _ => return Ok(()),
    };

    let file = File::create(&path).with_context(|| format!("Error creating log file {:?}", path))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file).context("Error installing logger")?;
    Ok(())
}
