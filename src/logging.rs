//! Log file setup.
//!
//! The TUI owns stdout, so `tracing` output is written to a file instead.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use crate::Result;

/// Opens `path` for appending, creating it and missing parent directories.
///
/// # Errors
///
/// Returns [`TokenScopeError::Io`](crate::TokenScopeError::Io) if the
/// file cannot be created.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Installs the global `tracing` subscriber, writing plain-text logs to
/// `path`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init_logging(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| crate::TokenScopeError::Io(format!("failed to install logger: {e}")))?;
    Ok(())
}
