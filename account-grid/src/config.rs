//! Table configuration

use std::time::Duration;

/// Configuration for an [`AccountTable`](crate::AccountTable).
///
/// Controls how long fetched records are cached and the text of the
/// notifications emitted by submits.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use account_grid::TableConfig;
///
/// let config = TableConfig::default()
///     .with_row_ttl(Duration::from_secs(60))
///     .with_success_message("Accounts saved");
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// TTL for the cached record set.
    ///
    /// Default: 5 minutes
    pub row_ttl: Duration,

    /// Title of the notification emitted when a batch is accepted.
    ///
    /// Default: "Success"
    pub success_title: String,

    /// Message of the notification emitted when a batch is accepted.
    ///
    /// Default: "Account(s) updated"
    pub success_message: String,

    /// Title of the notification emitted when a submit or the reload after it
    /// fails. The message is the collaborator's.
    ///
    /// Default: "Error updating or refreshing records"
    pub error_title: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_ttl: Duration::from_secs(300), // 5 minutes
            success_title: "Success".to_string(),
            success_message: "Account(s) updated".to_string(),
            error_title: "Error updating or refreshing records".to_string(),
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row TTL.
    pub fn with_row_ttl(mut self, ttl: Duration) -> Self {
        self.row_ttl = ttl;
        self
    }

    /// Sets the success notification title.
    pub fn with_success_title(mut self, title: impl Into<String>) -> Self {
        self.success_title = title.into();
        self
    }

    /// Sets the success notification message.
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Sets the error notification title.
    pub fn with_error_title(mut self, title: impl Into<String>) -> Self {
        self.error_title = title.into();
        self
    }

    /// Creates a config with no caching: every load fetches.
    pub fn no_cache() -> Self {
        Self {
            row_ttl: Duration::ZERO,
            ..Self::default()
        }
    }
}
