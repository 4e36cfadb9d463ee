//! Record source seam
//!
//! The table reaches its records through a [`RecordSource`]: one operation to
//! fetch the current records and one to submit a batch of edits. Transport is
//! the implementation's business; the table treats both calls as opaque.

mod memory;

pub use memory::*;

use async_trait::async_trait;

use crate::draft::FieldEdit;
use crate::error::RemoteError;
use crate::model::SourceRecord;

/// Acknowledgement of an accepted batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    /// Number of records the source updated.
    pub updated: usize,
    /// Optional message from the source.
    pub message: Option<String>,
}

impl Ack {
    /// Creates an acknowledgement for `updated` records.
    pub fn new(updated: usize) -> Self {
        Self {
            updated,
            message: None,
        }
    }

    /// Attaches a message from the source.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Trait for the remote owner of the account records.
///
/// # Example
///
/// ```ignore
/// struct ApexSource { /* http client */ }
///
/// #[async_trait]
/// impl RecordSource for ApexSource {
///     async fn fetch_rows(&self) -> Result<Vec<SourceRecord>, RemoteError> {
///         // GET the records, deserialize into SourceRecord
///     }
///
///     async fn submit_edits(&self, edits: Vec<FieldEdit>) -> Result<Ack, RemoteError> {
///         // POST the batch, map the error body with RemoteError::from_body
///     }
/// }
/// ```
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Returns the authoritative current records, in display order.
    async fn fetch_rows(&self) -> Result<Vec<SourceRecord>, RemoteError>;

    /// Applies a batch of edits.
    ///
    /// The batch is all-or-nothing: implementations either accept every edit
    /// or return one error for the whole batch.
    async fn submit_edits(&self, edits: Vec<FieldEdit>) -> Result<Ack, RemoteError>;
}
