//! Primitive scalar decoding.

use super::descriptor::PrimitiveKind;
use super::errors::DecodeError;
use super::value::Value;

/// Removes one matching pair of surrounding quote characters.
///
/// Both `"` and `'` are recognised; mismatched or lone quotes are left in place.
fn strip_quotes(text: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            text.strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(text)
}

pub(super) fn decode_primitive(raw: &str, kind: PrimitiveKind) -> Result<Value, DecodeError> {
    match kind {
        PrimitiveKind::Int => decode_int(raw),
        PrimitiveKind::Float => decode_float(raw),
        PrimitiveKind::Bool => decode_bool(raw),
        PrimitiveKind::String => Ok(Value::String(strip_quotes(raw).to_owned())),
    }
}

fn decode_int(raw: &str) -> Result<Value, DecodeError> {
    strip_quotes(raw.trim())
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|error| DecodeError::number_format(PrimitiveKind::Int.as_str(), raw, error.to_string()))
}

fn decode_float(raw: &str) -> Result<Value, DecodeError> {
    strip_quotes(raw.trim())
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|error| {
            DecodeError::number_format(PrimitiveKind::Float.as_str(), raw, error.to_string())
        })
}

fn decode_bool(raw: &str) -> Result<Value, DecodeError> {
    match strip_quotes(raw.trim()).to_ascii_lowercase().as_str() {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ => Err(DecodeError::bool_format(
            PrimitiveKind::Bool.as_str(),
            raw,
            "expected 'true' or 'false'",
        )),
    }
}
