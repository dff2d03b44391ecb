//! Typed field values and their JSON forms.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};

/// Date rendering used in output documents.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Datetime rendering used in output documents (UTC, second precision).
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One converted field value.
///
/// `Null` marks a value a nullable column failed to convert. It is still a
/// present field: the record carries the label with an explicit JSON null.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Null,
}

impl TypedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Serialize for TypedValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Text(value) => serializer.serialize_str(value),
            Self::Date(value) => serializer.collect_str(&value.format(DATE_FORMAT)),
            Self::DateTime(value) => serializer.collect_str(&value.format(DATETIME_FORMAT)),
            Self::Null => serializer.serialize_none(),
        }
    }
}
