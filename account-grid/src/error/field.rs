//! FieldError for field names and field values

/// Error type for field lookups and conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// No row field has the given name.
    #[error("Unknown field '{field}'")]
    Unknown { field: String },

    /// The sort direction is neither ascending nor descending.
    #[error("Invalid sort direction '{direction}': expected 'asc' or 'desc'")]
    InvalidDirection { direction: String },

    /// The value has no monetary reading.
    #[error("'{value}' is not a monetary amount")]
    NotMonetary { value: String },
}

impl FieldError {
    /// Creates a new unknown field error.
    pub fn unknown(field: impl Into<String>) -> Self {
        Self::Unknown {
            field: field.into(),
        }
    }

    /// Creates a new invalid direction error.
    pub fn invalid_direction(direction: impl Into<String>) -> Self {
        Self::InvalidDirection {
            direction: direction.into(),
        }
    }

    /// Creates a new not-monetary error.
    pub fn not_monetary(value: impl Into<String>) -> Self {
        Self::NotMonetary {
            value: value.into(),
        }
    }
}
