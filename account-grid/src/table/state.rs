//! Table state.

use crate::draft::DraftEdits;
use crate::error::RemoteError;
use crate::model::Row;
use crate::sort::SortState;

/// Where a submit is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// No submit running.
    #[default]
    Idle,
    /// The batch is with the record source.
    Submitting,
    /// The batch was accepted and the rows are being reloaded.
    Reloading,
}

/// State owned by an [`AccountTable`](super::AccountTable).
///
/// Handed to the `on_state_change` listener after every change. Either `rows`
/// holds the last load or `error` holds its failure, never both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    /// Rows in display order.
    pub rows: Vec<Row>,
    /// Failure of the last load.
    pub error: Option<RemoteError>,
    /// Edits not yet accepted by the record source.
    pub drafts: DraftEdits,
    /// Ordering applied to `rows`, if any.
    pub sort: Option<SortState>,
    /// Submit cycle phase.
    pub phase: SubmitPhase,
    /// Rows in load order.
    pub(crate) loaded: Vec<Row>,
}

impl TableState {
    /// Replaces the row set with a fresh load. Clears the error and the sort.
    pub(crate) fn show_loaded(&mut self, rows: Vec<Row>) {
        self.rows = rows.clone();
        self.loaded = rows;
        self.error = None;
        self.sort = None;
    }

    /// Records a failed load. Clears the row set and the sort.
    pub(crate) fn show_error(&mut self, error: RemoteError) {
        self.rows.clear();
        self.loaded.clear();
        self.error = Some(error);
        self.sort = None;
    }

    /// Restores load order.
    pub(crate) fn reset_sort(&mut self) {
        self.rows = self.loaded.clone();
        self.sort = None;
    }

    /// Returns `true` while a submit is running.
    pub fn is_submitting(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }
}
