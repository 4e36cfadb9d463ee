//! Owner reference type for the account owner lookup

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A reference to the user owning a record, as returned by the source.
///
/// Only the display name is used by the table. The identifier is kept when
/// the source provides it.
///
/// # Example
///
/// ```
/// use account_grid::model::types::OwnerReference;
///
/// let owner = OwnerReference::named("Ada Lovelace");
/// assert_eq!(owner.display_name(), Some("Ada Lovelace"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerReference {
    /// The unique identifier of the owning user, if provided.
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// The display name of the owner, if provided.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl OwnerReference {
    /// Creates an owner reference carrying only a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Returns the display name, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
