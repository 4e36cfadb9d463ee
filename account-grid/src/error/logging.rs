//! LoggingError for logger setup

/// Error installing the file logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be created.
    #[error("Failed to create log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger is already installed.
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}
