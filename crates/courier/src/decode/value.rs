//! Decoded argument values.

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value as JsonValue};

use super::descriptor::PrimitiveKind;

/// A decoded primitive scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Text.
    String(String),
}

impl PrimitiveValue {
    /// Kind of the stored scalar.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Int(_) => PrimitiveKind::Int,
            Self::Float(_) => PrimitiveKind::Float,
            Self::Bool(_) => PrimitiveKind::Bool,
            Self::String(_) => PrimitiveKind::String,
        }
    }

    fn to_json(&self) -> JsonValue {
        match self {
            Self::Int(value) => JsonValue::from(*value),
            Self::Float(value) => Number::from_f64(*value).map_or(JsonValue::Null, JsonValue::Number),
            Self::Bool(value) => JsonValue::Bool(*value),
            Self::String(value) => JsonValue::String(value.clone()),
        }
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PrimitiveValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for PrimitiveValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A decoded structured record.
///
/// Fields appear in the order declared by the record's descriptor and every
/// declared field is present: fields absent from the payload carry their
/// declared default.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: String,
    fields: Vec<(String, PrimitiveValue)>,
}

impl Record {
    pub(crate) const fn new(name: String, fields: Vec<(String, PrimitiveValue)>) -> Self {
        Self { name, fields }
    }

    /// Record type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field value by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&PrimitiveValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Integer field value.
    #[must_use]
    pub fn int(&self, field: &str) -> Option<i64> {
        match self.get(field) {
            Some(PrimitiveValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Floating point field value.
    #[must_use]
    pub fn float(&self, field: &str) -> Option<f64> {
        match self.get(field) {
            Some(PrimitiveValue::Float(value)) => Some(*value),
            _ => None,
        }
    }

    /// Boolean field value.
    #[must_use]
    pub fn bool(&self, field: &str) -> Option<bool> {
        match self.get(field) {
            Some(PrimitiveValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// String field value.
    #[must_use]
    pub fn string(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(PrimitiveValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PrimitiveValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the record declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the record as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let map: Map<String, JsonValue> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        JsonValue::Object(map)
    }

    /// Deserialises the record into a caller-defined type.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `T` does not accept the record's
    /// fields.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.to_json())
    }
}

/// A decoded argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Text.
    String(String),
    /// Structured record.
    Record(Record),
}

impl Value {
    /// Name of the value's type: a primitive name or the record name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Int(_) => PrimitiveKind::Int.as_str(),
            Self::Float(_) => PrimitiveKind::Float.as_str(),
            Self::Bool(_) => PrimitiveKind::Bool.as_str(),
            Self::String(_) => PrimitiveKind::String.as_str(),
            Self::Record(record) => record.name(),
        }
    }

    /// Integer payload, if this is an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Floating point payload, if this is a float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Boolean payload, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// String payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Record payload, if this is a record.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<PrimitiveValue> for Value {
    fn from(value: PrimitiveValue) -> Self {
        match value {
            PrimitiveValue::Int(inner) => Self::Int(inner),
            PrimitiveValue::Float(inner) => Self::Float(inner),
            PrimitiveValue::Bool(inner) => Self::Bool(inner),
            PrimitiveValue::String(inner) => Self::String(inner),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}
