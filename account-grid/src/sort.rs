//! Client-side row sorting

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::FieldError;
use crate::model::Field;
use crate::model::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the short name used by hosts (`"asc"` / `"desc"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(FieldError::invalid_direction(s)),
        }
    }
}

/// The field and direction the displayed rows are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: Field,
    pub direction: SortDirection,
}

/// Returns `rows` ordered by `field`, leaving the input untouched.
///
/// Values are compared as text: each value is stringified with
/// [`Value::sort_key`](crate::model::Value::sort_key), so empty, null and zero
/// values compare equal to each other and before any non-empty text, and
/// numbers order lexicographically. The sort is stable in both directions;
/// rows with equal keys keep their relative order.
///
/// # Example
///
/// ```
/// use account_grid::model::{Field, Row, SourceRecord};
/// use account_grid::sort::{SortDirection, sort_rows};
/// use uuid::Uuid;
///
/// let rows: Vec<Row> = ["B", "A", ""]
///     .iter()
///     .map(|owner| Row::from(&SourceRecord::new(Uuid::new_v4()).owner(*owner)))
///     .collect();
///
/// let sorted = sort_rows(&rows, Field::OwnerName, SortDirection::Ascending);
/// let owners: Vec<_> = sorted.iter().map(|r| r.owner_name.clone().unwrap()).collect();
/// assert_eq!(owners, ["", "A", "B"]);
/// ```
pub fn sort_rows(rows: &[Row], field: Field, direction: SortDirection) -> Vec<Row> {
    let accessor = field.accessor();

    let mut keyed: Vec<(String, Row)> = rows
        .iter()
        .map(|row| (accessor.read(row).sort_key(), row.clone()))
        .collect();

    keyed.sort_by(|(x, _), (y, _)| compare(x, y, direction));

    keyed.into_iter().map(|(_, row)| row).collect()
}

fn compare(x: &str, y: &str, direction: SortDirection) -> Ordering {
    let ordering = x.cmp(y);
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
