//! Rust-typed handler parameters.
//!
//! [`Parameter`] ties a Rust type to the [`TypeDescriptor`] the dispatcher
//! decodes into, so typed handlers can be registered without spelling out
//! their signature by hand.

use crate::decode::{TypeDescriptor, Value};

use super::errors::HandlerError;

/// A Rust type that can be received as a handler argument.
///
/// Implemented for `i64`, `f64`, `bool` and `String`. Structured caller types
/// implement it by describing their fields and converting from the decoded
/// [`crate::decode::Record`]:
///
/// ```
/// use courier::decode::{RecordDescriptor, TypeDescriptor, Value};
/// use courier::handler::Parameter;
///
/// #[derive(serde::Deserialize)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl Parameter for Point {
///     fn descriptor() -> TypeDescriptor {
///         TypeDescriptor::record(RecordDescriptor::new("Point").field("x", 0.0).field("y", 0.0))
///     }
///
///     fn from_value(value: Value) -> Result<Self, String> {
///         match value {
///             Value::Record(record) => record.deserialize().map_err(|e| e.to_string()),
///             other => Err(format!("expected Point, found {}", other.type_name())),
///         }
///     }
/// }
/// ```
pub trait Parameter: Sized {
    /// Descriptor the dispatcher decodes the payload against.
    fn descriptor() -> TypeDescriptor;

    /// Converts the decoded value into `Self`.
    ///
    /// # Errors
    ///
    /// Returns a description of the mismatch when `value` has the wrong shape.
    fn from_value(value: Value) -> Result<Self, String>;
}

pub(super) fn convert<T: Parameter>(position: usize, value: Value) -> Result<T, HandlerError> {
    let expected = T::descriptor();
    T::from_value(value)
        .map_err(|message| HandlerError::conversion(position, expected.type_name(), message))
}

fn mismatch(expected: &str, found: &Value) -> String {
    format!("expected {expected}, found {}", found.type_name())
}

impl Parameter for i64 {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::int()
    }

    fn from_value(value: Value) -> Result<Self, String> {
        value.as_int().ok_or_else(|| mismatch("int", &value))
    }
}

impl Parameter for f64 {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::float()
    }

    fn from_value(value: Value) -> Result<Self, String> {
        value.as_float().ok_or_else(|| mismatch("float", &value))
    }
}

impl Parameter for bool {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::bool()
    }

    fn from_value(value: Value) -> Result<Self, String> {
        value.as_bool().ok_or_else(|| mismatch("bool", &value))
    }
}

impl Parameter for String {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::string()
    }

    fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::String(text) => Ok(text),
            other => Err(mismatch("string", &other)),
        }
    }
}
