//! File logging setup for hosts.
//!
//! The crate itself only emits through the `log` macros. Hosts that draw to
//! the terminal can route those records to a file instead:
//!
//! ```no_run
//! use account_grid::logging;
//! use log::LevelFilter;
//!
//! logging::init_file_logger("account-grid.log", LevelFilter::Debug)?;
//! # Ok::<(), account_grid::error::LoggingError>(())
//! ```

use std::fs::OpenOptions;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::LoggingError;

/// Installs a global logger writing records at `level` and above to `path`.
///
/// The file is truncated once the logger is installed. Fails if the file
/// cannot be opened or a logger is already installed; in that case the file
/// is left as it was.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let handle = file.try_clone()?;
    WriteLogger::init(level, Config::default(), file)?;
    handle.set_len(0)?;
    log::debug!("File logger installed at {:?}", level);
    Ok(())
}
