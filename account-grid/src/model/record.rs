//! Account record as returned by the record source

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::types::Money;
use super::types::OwnerReference;

/// An account record from the record source.
///
/// This is the authoritative shape the source returns: scalar fields plus a
/// nested owner reference. Every scalar may be null and the owner may be
/// absent altogether.
///
/// # Example
///
/// ```
/// use account_grid::model::SourceRecord;
/// use uuid::Uuid;
///
/// let record = SourceRecord::new(Uuid::new_v4())
///     .name("Contoso")
///     .phone("555-0100")
///     .owner("Ada Lovelace");
///
/// assert_eq!(record.owner_name(), Some("Ada Lovelace"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// The unique identifier of the record.
    #[serde(rename = "Id")]
    pub id: Uuid,

    /// Account name.
    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    /// Main phone number.
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,

    /// Website URL.
    #[serde(rename = "Website", default)]
    pub website: Option<String>,

    /// Annual revenue.
    #[serde(rename = "AnnualRevenue", default)]
    pub annual_revenue: Option<Money>,

    /// The owning user.
    #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerReference>,
}

impl SourceRecord {
    /// Creates a record with the given ID and every other field empty.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            name: None,
            phone: None,
            website: None,
            annual_revenue: None,
            owner: None,
        }
    }

    /// Sets the account name (builder pattern).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the phone number (builder pattern).
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the website (builder pattern).
    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Sets the annual revenue (builder pattern).
    pub fn annual_revenue(mut self, revenue: impl Into<Money>) -> Self {
        self.annual_revenue = Some(revenue.into());
        self
    }

    /// Sets the owner to a reference carrying only a name (builder pattern).
    pub fn owner(mut self, name: impl Into<String>) -> Self {
        self.owner = Some(OwnerReference::named(name));
        self
    }

    /// Returns the owner's display name, if the owner and its name are present.
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().and_then(OwnerReference::display_name)
    }
}
