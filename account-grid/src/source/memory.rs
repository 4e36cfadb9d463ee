//! In-memory record source

use std::collections::BTreeSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Ack;
use super::RecordSource;
use crate::draft::FieldEdit;
use crate::error::RemoteError;
use crate::error::RowError;
use crate::model::Field;
use crate::model::SourceRecord;
use crate::model::types::OwnerReference;

/// A record source backed by an in-process record list.
///
/// Batches are applied atomically: every edit is checked first, and any
/// rejection fails the whole batch with an aggregate error and leaves the
/// records untouched.
///
/// # Example
///
/// ```
/// use account_grid::model::SourceRecord;
/// use account_grid::source::InMemorySource;
/// use uuid::Uuid;
///
/// let source = InMemorySource::new(vec![
///     SourceRecord::new(Uuid::new_v4()).name("Contoso"),
/// ]);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySource {
    records: RwLock<Vec<SourceRecord>>,
}

impl InMemorySource {
    /// Creates a source holding `records` in display order.
    pub fn new(records: Vec<SourceRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Parses a JSON array of records in the source's shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Returns a copy of the current records.
    pub async fn records(&self) -> Vec<SourceRecord> {
        self.records.read().await.clone()
    }

    /// Appends a record.
    pub async fn insert(&self, record: SourceRecord) {
        self.records.write().await.push(record);
    }

    fn check(records: &[SourceRecord], edit: &FieldEdit) -> Option<RowError> {
        if !records.iter().any(|record| record.id == edit.id) {
            return Some(RowError::new(edit.id, "Record not found"));
        }
        if edit.field.is_derived() {
            return Some(RowError::for_field(edit.id, edit.field, "Field is read-only"));
        }
        match edit.field {
            Field::AnnualRevenue => edit
                .value
                .to_money()
                .err()
                .map(|e| RowError::for_field(edit.id, edit.field, e.to_string())),
            _ => None,
        }
    }

    fn apply(record: &mut SourceRecord, edit: &FieldEdit) {
        match edit.field {
            Field::Name => record.name = edit.value.to_text(),
            Field::OwnerName => {
                let id = record.owner.as_ref().and_then(|owner| owner.id);
                record.owner = Some(OwnerReference {
                    id,
                    name: edit.value.to_text(),
                });
            }
            Field::Phone => record.phone = edit.value.to_text(),
            Field::Website => record.website = edit.value.to_text(),
            Field::AnnualRevenue => {
                if let Ok(revenue) = edit.value.to_money() {
                    record.annual_revenue = revenue;
                }
            }
            Field::NavigationTarget => {}
        }
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn fetch_rows(&self) -> Result<Vec<SourceRecord>, RemoteError> {
        Ok(self.records.read().await.clone())
    }

    async fn submit_edits(&self, edits: Vec<FieldEdit>) -> Result<Ack, RemoteError> {
        let mut records = self.records.write().await;

        let rejected: Vec<RowError> = edits
            .iter()
            .filter_map(|edit| Self::check(&records, edit))
            .collect();
        if !rejected.is_empty() {
            log::warn!("Rejecting batch of {} edit(s): {} invalid", edits.len(), rejected.len());
            return Err(RemoteError::aggregate(rejected));
        }

        let mut updated = BTreeSet::new();
        for edit in &edits {
            if let Some(record) = records.iter_mut().find(|record| record.id == edit.id) {
                Self::apply(record, edit);
                updated.insert(edit.id);
            }
        }

        log::debug!("Applied {} edit(s) to {} record(s)", edits.len(), updated.len());
        Ok(Ack::new(updated.len()).with_message(format!("{} edit(s) applied", edits.len())))
    }
}
