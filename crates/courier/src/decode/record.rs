//! Structured record decoding.
//!
//! A record payload is a JSON object literal. Fields are matched by name
//! against the record descriptor: unknown payload fields are ignored, and
//! absent or `null` fields take the declared default.

use serde_json::{Map, Value as JsonValue};

use super::descriptor::{FieldDescriptor, PrimitiveKind, RecordDescriptor};
use super::errors::DecodeError;
use super::value::{PrimitiveValue, Record, Value};

pub(super) fn decode_record(raw: &str, descriptor: &RecordDescriptor) -> Result<Value, DecodeError> {
    let object = parse_object(raw, descriptor)?;
    let fields = descriptor
        .fields()
        .iter()
        .map(|field| {
            resolve_field(&object, field)
                .map(|value| (field.name().to_owned(), value))
                .map_err(|message| DecodeError::structure_parse(descriptor.name(), raw, message))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Record(Record::new(descriptor.name().to_owned(), fields)))
}

fn parse_object(
    raw: &str,
    descriptor: &RecordDescriptor,
) -> Result<Map<String, JsonValue>, DecodeError> {
    let parsed: JsonValue = serde_json::from_str(raw)
        .map_err(|error| DecodeError::structure_parse(descriptor.name(), raw, error.to_string()))?;
    match parsed {
        JsonValue::Object(object) => Ok(object),
        other => Err(DecodeError::structure_parse(
            descriptor.name(),
            raw,
            format!("expected a JSON object, found {}", json_type_name(&other)),
        )),
    }
}

fn resolve_field(
    object: &Map<String, JsonValue>,
    field: &FieldDescriptor,
) -> Result<PrimitiveValue, String> {
    match object.get(field.name()) {
        None | Some(JsonValue::Null) => Ok(field.default_value().clone()),
        Some(value) => coerce(value, field.kind()).ok_or_else(|| {
            format!(
                "field '{}' expects {}, found {}",
                field.name(),
                field.kind(),
                json_type_name(value)
            )
        }),
    }
}

/// Converts a JSON value into the declared primitive kind.
///
/// Integers widen to floats; floats never narrow to integers.
fn coerce(value: &JsonValue, kind: PrimitiveKind) -> Option<PrimitiveValue> {
    match kind {
        PrimitiveKind::Int => value.as_i64().map(PrimitiveValue::Int),
        PrimitiveKind::Float => value.as_f64().map(PrimitiveValue::Float),
        PrimitiveKind::Bool => value.as_bool().map(PrimitiveValue::Bool),
        PrimitiveKind::String => value
            .as_str()
            .map(|text| PrimitiveValue::String(text.to_owned())),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(number) if number.is_f64() => "a fractional number",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
