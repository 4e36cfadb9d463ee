//! Display row projected from a source record

use serde::Serialize;
use uuid::Uuid;

use super::Field;
use super::SourceRecord;
use super::Value;
use super::types::Money;

/// A flattened, display-ready projection of one [`SourceRecord`].
///
/// `navigation_target` and `owner_name` are derived during projection. An
/// absent owner, or an owner without a name, projects to `owner_name = None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Record identifier, stable across reloads.
    pub id: Uuid,
    /// Account name.
    pub name: Option<String>,
    /// Link path to the record, `"/" + id`.
    pub navigation_target: String,
    /// Display name of the owning user.
    pub owner_name: Option<String>,
    /// Main phone number.
    pub phone: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Annual revenue.
    pub annual_revenue: Option<Money>,
}

impl Row {
    /// Returns the link path for a record ID.
    pub fn navigation_target_for(id: Uuid) -> String {
        format!("/{}", id)
    }

    /// Reads a field through its accessor.
    pub fn get(&self, field: Field) -> Value {
        field.accessor().read(self)
    }
}

impl From<&SourceRecord> for Row {
    fn from(record: &SourceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            navigation_target: Row::navigation_target_for(record.id),
            owner_name: record.owner_name().map(str::to_string),
            phone: record.phone.clone(),
            website: record.website.clone(),
            annual_revenue: record.annual_revenue,
        }
    }
}

/// Projects source records into rows, keeping their order.
pub fn project(records: &[SourceRecord]) -> Vec<Row> {
    records.iter().map(Row::from).collect()
}
