//! Editable, sortable account table
//!
//! A view-model for a table of account records: it loads rows from a
//! [`RecordSource`](source::RecordSource), sorts them by any field, collects
//! inline edits as drafts and submits them as one batch.

pub mod cache;
pub mod draft;
pub mod error;
pub mod logging;
pub mod model;
pub mod notify;
pub mod response;
pub mod sort;
pub mod source;

mod config;
mod table;

pub use config::TableConfig;
pub use response::CacheStatus;
pub use response::Response;
pub use table::*;

pub mod prelude {
    pub use crate::config::TableConfig;
    pub use crate::draft::{DraftEdit, DraftEdits, FieldEdit};
    pub use crate::error::{Error, FieldError, RemoteError, RowError};
    pub use crate::model::types::{Money, OwnerReference};
    pub use crate::model::{ACCOUNT_COLUMNS, Column, ColumnType, Field, Row, SourceRecord, Value};
    pub use crate::notify::{LogNotifier, Notification, Notifier, Severity};
    pub use crate::response::{CacheStatus, Response};
    pub use crate::sort::{SortDirection, SortState, sort_rows};
    pub use crate::source::{Ack, InMemorySource, RecordSource};
    pub use crate::table::{AccountTable, StateListener, SubmitPhase, TableContext, TableState};
}
