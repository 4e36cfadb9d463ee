//! Typed field identifiers and accessors

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::Row;
use super::Value;
use crate::error::FieldError;

/// A field of a [`Row`].
///
/// Fields are addressed by this enum rather than by name, and each resolves
/// to a [`FieldAccessor`]. Host code that only has the API name (for example
/// from a column header event) parses it with [`Field::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Account name.
    Name,
    /// Derived link path, `"/" + id`.
    #[serde(rename = "accountIdForURL")]
    NavigationTarget,
    /// Display name of the owning user.
    OwnerName,
    /// Main phone number.
    Phone,
    /// Website URL.
    Website,
    /// Annual revenue.
    AnnualRevenue,
}

impl Field {
    /// All fields, in column order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::NavigationTarget,
        Field::OwnerName,
        Field::Phone,
        Field::Website,
        Field::AnnualRevenue,
    ];

    /// Returns the API name used by the record source and the host.
    pub const fn api_name(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::NavigationTarget => "accountIdForURL",
            Field::OwnerName => "OwnerName",
            Field::Phone => "Phone",
            Field::Website => "Website",
            Field::AnnualRevenue => "AnnualRevenue",
        }
    }

    /// Returns `true` if the field is computed from other fields.
    pub const fn is_derived(self) -> bool {
        matches!(self, Field::NavigationTarget)
    }

    /// Resolves the accessor pair for this field.
    pub const fn accessor(self) -> FieldAccessor {
        match self {
            Field::Name => FieldAccessor {
                get: get_name,
                set: Some(set_name),
            },
            Field::NavigationTarget => FieldAccessor {
                get: get_navigation_target,
                set: None,
            },
            Field::OwnerName => FieldAccessor {
                get: get_owner_name,
                set: Some(set_owner_name),
            },
            Field::Phone => FieldAccessor {
                get: get_phone,
                set: Some(set_phone),
            },
            Field::Website => FieldAccessor {
                get: get_website,
                set: Some(set_website),
            },
            Field::AnnualRevenue => FieldAccessor {
                get: get_annual_revenue,
                set: Some(set_annual_revenue),
            },
        }
    }
}

fn get_name(row: &Row) -> Value {
    Value::from(row.name.clone())
}

fn set_name(row: &mut Row, value: &Value) {
    row.name = value.to_text();
}

fn get_navigation_target(row: &Row) -> Value {
    Value::from(row.navigation_target.clone())
}

fn get_owner_name(row: &Row) -> Value {
    Value::from(row.owner_name.clone())
}

fn set_owner_name(row: &mut Row, value: &Value) {
    row.owner_name = value.to_text();
}

fn get_phone(row: &Row) -> Value {
    Value::from(row.phone.clone())
}

fn set_phone(row: &mut Row, value: &Value) {
    row.phone = value.to_text();
}

fn get_website(row: &Row) -> Value {
    Value::from(row.website.clone())
}

fn set_website(row: &mut Row, value: &Value) {
    row.website = value.to_text();
}

fn get_annual_revenue(row: &Row) -> Value {
    Value::from(row.annual_revenue)
}

fn set_annual_revenue(row: &mut Row, value: &Value) {
    if let Ok(revenue) = value.to_money() {
        row.annual_revenue = revenue;
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.api_name() == s)
            .ok_or_else(|| FieldError::unknown(s))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_name())
    }
}

/// Reads and writes one field of a [`Row`].
///
/// `set` is `None` for derived fields. A setter that cannot represent the
/// given value (such as non-numeric revenue) leaves the row unchanged.
#[derive(Debug, Clone, Copy)]
pub struct FieldAccessor {
    /// Returns the field's current value.
    pub get: fn(&Row) -> Value,
    /// Writes a new value into the field.
    pub set: Option<fn(&mut Row, &Value)>,
}

impl FieldAccessor {
    /// Reads the field from `row`.
    pub fn read(&self, row: &Row) -> Value {
        (self.get)(row)
    }

    /// Writes `value` into `row`. Returns `false` if the field is read-only.
    pub fn write(&self, row: &mut Row, value: &Value) -> bool {
        match self.set {
            Some(set) => {
                set(row, value);
                true
            }
            None => false,
        }
    }
}
