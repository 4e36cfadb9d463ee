//! Pending inline edits

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::model::Field;
use crate::model::Row;
use crate::model::Value;

/// Unsaved field changes for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftEdit {
    /// The edited row.
    pub id: Uuid,
    /// New values by field. Sparse: only edited fields appear.
    pub changes: BTreeMap<Field, Value>,
}

impl DraftEdit {
    /// Creates an empty draft for a row.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            changes: BTreeMap::new(),
        }
    }

    /// Returns the pending value for `field`.
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.changes.get(&field)
    }

    /// Applies the changes to `row` through the field setters.
    pub fn apply_to(&self, row: &mut Row) {
        for (field, value) in &self.changes {
            field.accessor().write(row, value);
        }
    }
}

/// One field of a draft in the flat form sent to the record source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEdit {
    /// The edited row.
    #[serde(rename = "Id")]
    pub id: Uuid,
    /// The edited field.
    pub field: Field,
    /// The new value, passed through unchanged.
    pub value: Value,
}

/// All drafts accumulated since the last successful submit.
///
/// Keyed by row ID; a later edit to the same field replaces the earlier one.
///
/// # Example
///
/// ```
/// use account_grid::draft::DraftEdits;
/// use account_grid::model::{Field, Value};
/// use uuid::Uuid;
///
/// let id = Uuid::new_v4();
/// let mut drafts = DraftEdits::new();
/// drafts.record(id, Field::Phone, "555-1234");
/// drafts.record(id, Field::Phone, "555-9999");
///
/// assert_eq!(drafts.value(id, Field::Phone), Some(&Value::from("555-9999")));
/// assert_eq!(drafts.to_batch().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftEdits {
    rows: BTreeMap<Uuid, DraftEdit>,
}

impl DraftEdits {
    /// Creates an empty draft set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one field change into the drafts.
    pub fn record(&mut self, id: Uuid, field: Field, value: impl Into<Value>) {
        self.rows
            .entry(id)
            .or_insert_with(|| DraftEdit::new(id))
            .changes
            .insert(field, value.into());
    }

    /// Returns the draft for a row.
    pub fn get(&self, id: Uuid) -> Option<&DraftEdit> {
        self.rows.get(&id)
    }

    /// Returns the pending value for one cell.
    pub fn value(&self, id: Uuid, field: Field) -> Option<&Value> {
        self.rows.get(&id).and_then(|draft| draft.get(field))
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows with pending changes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Iterates drafts in row ID order.
    pub fn iter(&self) -> impl Iterator<Item = &DraftEdit> {
        self.rows.values()
    }

    /// Discards every draft.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Flattens the drafts into the batch sent to the record source.
    ///
    /// Ordered by row ID, then by field.
    pub fn to_batch(&self) -> Vec<FieldEdit> {
        self.rows
            .values()
            .flat_map(|draft| {
                draft.changes.iter().map(|(field, value)| FieldEdit {
                    id: draft.id,
                    field: *field,
                    value: value.clone(),
                })
            })
            .collect()
    }

    /// Removes the changes that were part of `submitted`.
    ///
    /// A cell edited again after the snapshot was taken holds a different
    /// value and is kept.
    pub fn discard_submitted(&mut self, submitted: &DraftEdits) {
        for draft in submitted.iter() {
            let Some(current) = self.rows.get_mut(&draft.id) else {
                continue;
            };
            for (field, value) in &draft.changes {
                if current.changes.get(field) == Some(value) {
                    current.changes.remove(field);
                }
            }
            if current.changes.is_empty() {
                self.rows.remove(&draft.id);
            }
        }
    }

    /// Returns copies of `rows` with the pending changes applied.
    pub fn overlay(&self, rows: &[Row]) -> Vec<Row> {
        rows.iter()
            .map(|row| {
                let mut row = row.clone();
                if let Some(draft) = self.rows.get(&row.id) {
                    draft.apply_to(&mut row);
                }
                row
            })
            .collect()
    }
}
