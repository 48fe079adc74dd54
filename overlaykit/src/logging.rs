//! File logging setup.

use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("a logger is already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Send `log` output to a file. Terminal overlays own stdout, so the log goes
/// elsewhere.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LogInitError> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    log::debug!("[logging] file logger installed at level {level}");
    Ok(())
}
