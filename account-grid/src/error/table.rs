//! Table-level error type

use super::FieldError;
use super::RemoteError;
use crate::source::Ack;

/// Errors returned by [`AccountTable`](crate::AccountTable) operations.
///
/// Remote failures are already reflected in the table state (and, for
/// submits, in a notification) by the time one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The record source failed to return rows. The row set was cleared.
    #[error("Failed to fetch records: {0}")]
    Fetch(RemoteError),

    /// The record source rejected the batch. Drafts were kept.
    #[error("Failed to submit edits: {0}")]
    Submit(RemoteError),

    /// The batch was accepted but the reload afterwards failed.
    ///
    /// The edits are committed remotely; the displayed rows are stale and the
    /// drafts were kept.
    #[error("Edits saved but reloading records failed: {source}")]
    ReloadAfterSubmit {
        /// Acknowledgement of the accepted batch.
        ack: Ack,
        /// The reload failure.
        source: RemoteError,
    },

    /// A submit is already running.
    #[error("A submit is already in progress")]
    SubmitInFlight,

    /// Field lookup error.
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl Error {
    /// Returns the remote failure behind this error, if any.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Fetch(e) | Self::Submit(e) => Some(e),
            Self::ReloadAfterSubmit { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Returns `true` if the edits reached the record source.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::ReloadAfterSubmit { .. })
    }
}
