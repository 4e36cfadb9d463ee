//! Value enum for cell values

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::types::Money;
use crate::error::FieldError;

/// A dynamic cell value.
///
/// Values read from a [`Row`](super::Row) through a field accessor, and values
/// entered by the user as drafts, are carried as `Value`. Drafts pass values
/// through to the record source unchanged; the table never validates them.
///
/// # Example
///
/// ```
/// use account_grid::model::Value;
///
/// let phone = Value::from("555-1234");
/// let employees = Value::from(42i64);
/// let empty = Value::Null;
///
/// assert_eq!(phone.sort_key(), "555-1234");
/// assert_eq!(empty.sort_key(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// String value.
    String(String),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// Monetary value.
    Money(Money),
}

impl Value {
    /// Returns `true` for null, `false`, zero and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::String(s) => s.is_empty(),
            Value::Decimal(d) => d.is_zero(),
            Value::Money(m) => m.is_zero(),
        }
    }

    /// Returns the string form used for sorting.
    ///
    /// Falsy values become the empty string. Numbers are rendered without
    /// trailing fractional zeros and compare as text, so `"900"` sorts after
    /// `"1000"`.
    pub fn sort_key(&self) -> String {
        if self.is_falsy() {
            return String::new();
        }
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Decimal(d) => d.normalize().to_string(),
            Value::Money(m) => m.plain(),
        }
    }

    /// Converts the value to optional text. Null becomes `None`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Converts the value to money.
    ///
    /// Returns `Ok(None)` for null and for blank strings, and an error when
    /// the value has no monetary reading.
    pub fn to_money(&self) -> Result<Option<Money>, FieldError> {
        match self {
            Value::Null => Ok(None),
            Value::Int(n) => Ok(Some(Money::from_int(*n))),
            Value::Decimal(d) => Ok(Some(Money::new(*d))),
            Value::Money(m) => Ok(Some(*m)),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s
                .trim()
                .parse::<Decimal>()
                .map(|d| Some(Money::new(d)))
                .map_err(|_| FieldError::not_monetary(s.as_str())),
            Value::Bool(b) => Err(FieldError::not_monetary(b.to_string())),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Money> for Value {
    fn from(v: Money) -> Self {
        Value::Money(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Money(m) => write!(f, "{}", m),
        }
    }
}
