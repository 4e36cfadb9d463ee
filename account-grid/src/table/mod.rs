//! Account table view-model.
//!
//! [`AccountTable`] ties the three parts of the table together:
//! - Loading rows from the record source through the row cache
//! - Sorting the displayed rows by a field
//! - Collecting inline edits and submitting them as one batch
//!
//! The host supplies a [`TableContext`] with the record source, a notifier and
//! an optional state listener, calls [`AccountTable::mount`] from its mount
//! hook, and re-renders from the [`TableState`] it is handed on every change.
//!
//! # Example
//!
//! ```ignore
//! use account_grid::prelude::*;
//!
//! let context = TableContext::new(InMemorySource::new(records))
//!     .notifier(|n: Notification| show_toast(n))
//!     .on_state_change(|state: &TableState| render(state));
//! let table = AccountTable::new(context);
//!
//! table.mount().await?;
//! table.sort(Field::OwnerName, SortDirection::Descending);
//! table.record_edit(id, Field::Phone, "555-1234");
//! table.submit().await?;
//! ```

mod loader;
mod state;
mod submit;

pub use state::{SubmitPhase, TableState};

use std::sync::{Arc, PoisonError, RwLock};

use uuid::Uuid;

use crate::config::TableConfig;
use crate::draft::{DraftEdit, DraftEdits};
use crate::error::{Error, RemoteError};
use crate::model::{ACCOUNT_COLUMNS, Column, Field, Row, Value, project};
use crate::notify::{LogNotifier, Notification, Notifier};
use crate::response::Response;
use crate::sort::{SortDirection, SortState, sort_rows};
use crate::source::RecordSource;

use loader::Loader;

/// Callback invoked with the new state after every change.
pub type StateListener = Arc<dyn Fn(&TableState) + Send + Sync>;

/// The host-provided collaborators of a table.
///
/// Replaces implicit platform state: everything the table reaches outside
/// itself goes through here, so it can run without a live host.
#[derive(Clone)]
pub struct TableContext {
    source: Arc<dyn RecordSource>,
    notifier: Arc<dyn Notifier>,
    on_state_change: Option<StateListener>,
}

impl TableContext {
    /// Creates a context around a record source. Notifications go to the log
    /// until a notifier is set.
    pub fn new(source: impl RecordSource + 'static) -> Self {
        Self::shared(Arc::new(source))
    }

    /// Creates a context around a shared record source.
    pub fn shared(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            notifier: Arc::new(LogNotifier),
            on_state_change: None,
        }
    }

    /// Sets the notification sink.
    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Sets the state change listener.
    pub fn on_state_change(mut self, listener: impl Fn(&TableState) + Send + Sync + 'static) -> Self {
        self.on_state_change = Some(Arc::new(listener));
        self
    }

    fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }
}

/// Editable, sortable account table bound to a record source.
///
/// Cheap to clone; clones share the same state. State is only locked for
/// short synchronous sections, never across an `.await`.
#[derive(Clone)]
pub struct AccountTable {
    inner: Arc<TableInner>,
}

struct TableInner {
    context: TableContext,
    config: TableConfig,
    columns: &'static [Column],
    loader: Loader,
    state: RwLock<TableState>,
}

impl AccountTable {
    /// Creates a table with the default configuration.
    pub fn new(context: TableContext) -> Self {
        Self::with_config(context, TableConfig::default())
    }

    /// Creates a table with the given configuration.
    pub fn with_config(context: TableContext, config: TableConfig) -> Self {
        let loader = Loader::new(context.source.clone(), config.row_ttl);
        Self {
            inner: Arc::new(TableInner {
                context,
                config,
                columns: &ACCOUNT_COLUMNS,
                loader,
                state: RwLock::new(TableState::default()),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// Returns the column descriptors.
    pub fn columns(&self) -> &'static [Column] {
        self.inner.columns
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.inner.config
    }

    /// Returns a copy of the whole state.
    pub fn snapshot(&self) -> TableState {
        self.read(TableState::clone)
    }

    /// Returns the displayed rows.
    pub fn rows(&self) -> Vec<Row> {
        self.read(|state| state.rows.clone())
    }

    /// Returns the displayed rows with pending drafts applied.
    pub fn rows_with_drafts(&self) -> Vec<Row> {
        self.read(|state| state.drafts.overlay(&state.rows))
    }

    /// Returns the failure of the last load, if it failed.
    pub fn error(&self) -> Option<RemoteError> {
        self.read(|state| state.error.clone())
    }

    /// Returns all pending drafts.
    pub fn drafts(&self) -> DraftEdits {
        self.read(|state| state.drafts.clone())
    }

    /// Returns the pending draft for a row.
    pub fn draft_for(&self, id: Uuid) -> Option<DraftEdit> {
        self.read(|state| state.drafts.get(id).cloned())
    }

    /// Returns the current ordering, if the rows are sorted.
    pub fn sort_state(&self) -> Option<SortState> {
        self.read(|state| state.sort)
    }

    /// Returns the submit phase.
    pub fn phase(&self) -> SubmitPhase {
        self.read(|state| state.phase)
    }

    /// Returns `true` while a submit is running. Hosts disable their save
    /// action while this holds.
    pub fn is_submitting(&self) -> bool {
        self.read(TableState::is_submitting)
    }

    // -------------------------------------------------------------------------
    // Loader
    // -------------------------------------------------------------------------

    /// Performs the initial load. Call from the host's mount hook.
    pub async fn mount(&self) -> Result<Response<Vec<Row>>, Error> {
        log::debug!("Mounting account table");
        self.load().await
    }

    /// Loads rows, from the cache when it is warm.
    ///
    /// Replaces the displayed rows and resets the sort. On failure the rows
    /// are cleared and the error kept in the state.
    pub async fn load(&self) -> Result<Response<Vec<Row>>, Error> {
        self.reload().await.map_err(Error::Fetch)
    }

    /// Drops the cache and loads from the record source.
    pub async fn refresh(&self) -> Result<Response<Vec<Row>>, Error> {
        self.invalidate().await;
        self.load().await
    }

    /// Drops the cached records so the next load fetches.
    pub async fn invalidate(&self) {
        self.inner.loader.invalidate().await;
    }

    async fn reload(&self) -> Result<Response<Vec<Row>>, RemoteError> {
        match self.inner.loader.fetch().await {
            Ok(response) => {
                let response = response.map(|records| project(&records));
                let rows = response.data().clone();
                log::debug!(
                    "Loaded {} row(s) (cached: {})",
                    rows.len(),
                    response.is_cached()
                );
                self.update(|state| state.show_loaded(rows));
                Ok(response)
            }
            Err(err) => {
                log::warn!("Failed to fetch records: {}", err);
                self.update(|state| state.show_error(err.clone()));
                Err(err)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Sorter
    // -------------------------------------------------------------------------

    /// Sorts the displayed rows and returns the new order.
    pub fn sort(&self, field: Field, direction: SortDirection) -> Vec<Row> {
        log::debug!("Sorting by {} {}", field, direction.as_str());
        self.update(|state| {
            let sorted = sort_rows(&state.rows, field, direction);
            state.rows = sorted.clone();
            state.sort = Some(SortState { field, direction });
            sorted
        })
    }

    /// Sorts by field and direction names as a host reports them
    /// (`"OwnerName"`, `"desc"`).
    pub fn sort_by_name(&self, field: &str, direction: &str) -> Result<Vec<Row>, Error> {
        let field: Field = field.parse()?;
        let direction: SortDirection = direction.parse()?;
        Ok(self.sort(field, direction))
    }

    /// Restores the order of the last load.
    pub fn reset_sort(&self) {
        self.update(TableState::reset_sort);
    }

    // -------------------------------------------------------------------------
    // Editor
    // -------------------------------------------------------------------------

    /// Records an inline edit. Never fails and never calls the source.
    pub fn record_edit(&self, id: Uuid, field: Field, value: impl Into<Value>) {
        let value = value.into();
        self.update(|state| state.drafts.record(id, field, value));
    }

    /// Discards every pending draft.
    pub fn cancel_edits(&self) {
        self.update(|state| state.drafts.clear());
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn read<R>(&self, f: impl FnOnce(&TableState) -> R) -> R {
        let state = self.inner.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Applies `f` to the state, then hands the new state to the listener.
    fn update<R>(&self, f: impl FnOnce(&mut TableState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.inner.state.write().unwrap_or_else(PoisonError::into_inner);
            let result = f(&mut state);
            let snapshot = self.inner.context.on_state_change.as_ref().map(|_| state.clone());
            (result, snapshot)
        };
        if let (Some(listener), Some(snapshot)) = (&self.inner.context.on_state_change, snapshot) {
            listener(&snapshot);
        }
        result
    }

    fn notify(&self, notification: Notification) {
        self.inner.context.notify(notification);
    }
}
