//! File logging
//!
//! The game owns the terminal, so log records go to a file or nowhere.

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Install a logger writing to `path` at `level`
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("Failed to install logger")?;
    log::info!("logging to {} at {}", path.display(), level);
    Ok(())
}

/// Parse a level name such as `info` or `DEBUG`
pub fn parse_level(name: &str) -> Result<LevelFilter> {
    name.parse::<LevelFilter>()
        .map_err(|_| anyhow::anyhow!("unknown log level '{name}'"))
}
