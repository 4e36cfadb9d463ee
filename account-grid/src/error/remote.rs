//! Errors reported by the record source

use serde_json::Value as Json;
use uuid::Uuid;

use crate::model::Field;

/// A failure reported by a remote collaborator (fetch or update).
///
/// `message` is what the user sees in the error notification. When the
/// source rejects individual rows of a batch, the row errors are folded into
/// one aggregate error; the batch as a whole counts as failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    /// Human-readable error message.
    pub message: String,
    /// Source-specific error code, if available.
    pub code: Option<String>,
    /// Per-row rejections that caused this error.
    pub row_errors: Vec<RowError>,
}

impl RemoteError {
    /// Creates a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            row_errors: Vec::new(),
        }
    }

    /// Folds per-row rejections into a single error.
    pub fn aggregate(row_errors: Vec<RowError>) -> Self {
        let message = match row_errors.as_slice() {
            [] => "Update rejected".to_string(),
            [only] => only.to_string(),
            all => format!(
                "{} record(s) rejected: {}",
                all.len(),
                all.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ")
            ),
        };
        Self {
            message,
            code: None,
            row_errors,
        }
    }

    /// Builds an error from a JSON error body.
    ///
    /// Understands a bare string, `{"message": ..}`, a `{"body": ..}` wrapper,
    /// `pageErrors` and `fieldErrors` lists, and arrays of any of these. Several
    /// messages are joined with `", "`.
    pub fn from_body(body: &Json) -> Self {
        let mut messages = Vec::new();
        collect_messages(body, &mut messages);
        messages.dedup();

        let message = if messages.is_empty() {
            "Unknown error".to_string()
        } else {
            messages.join(", ")
        };

        let code = body
            .get("errorCode")
            .or_else(|| body.get("body").and_then(|b| b.get("errorCode")))
            .and_then(Json::as_str)
            .map(str::to_string);

        Self {
            message,
            code,
            row_errors: Vec::new(),
        }
    }
}

fn collect_messages(body: &Json, out: &mut Vec<String>) {
    match body {
        Json::String(s) if !s.is_empty() => out.push(s.clone()),
        Json::Array(items) => items.iter().for_each(|item| collect_messages(item, out)),
        Json::Object(map) => {
            if let Some(inner) = map.get("body") {
                collect_messages(inner, out);
            }
            if let Some(message) = map
                .get("message")
                .and_then(Json::as_str)
                .filter(|m| !m.is_empty())
            {
                out.push(message.to_string());
            }
            if let Some(page_errors) = map.get("pageErrors") {
                collect_messages(page_errors, out);
            }
            if let Some(Json::Object(fields)) = map.get("fieldErrors") {
                fields.values().for_each(|errors| collect_messages(errors, out));
            }
        }
        _ => {}
    }
}

/// A rejection of one row in a submitted batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// The rejected row.
    pub id: Uuid,
    /// The offending field, if the rejection is field-specific.
    pub field: Option<Field>,
    /// Human-readable reason.
    pub message: String,
}

impl RowError {
    /// Creates a row-level rejection.
    pub fn new(id: Uuid, message: impl Into<String>) -> Self {
        Self {
            id,
            field: None,
            message: message.into(),
        }
    }

    /// Creates a field-level rejection.
    pub fn for_field(id: Uuid, field: Field, message: impl Into<String>) -> Self {
        Self {
            id,
            field: Some(field),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "{} ({}): {}", self.id, field, self.message)
        } else {
            write!(f, "{}: {}", self.id, self.message)
        }
    }
}
