//! Type-directed payload decoding.
//!
//! A payload is the still-encoded text of one argument. Payloads are not
//! self-describing: the target shape always comes from the handler's declared
//! [`TypeDescriptor`], so the same text `"1"` decodes to an integer, a float,
//! or a string depending on who asks.
//!
//! [`StandardDecoder`] implements the built-in rules:
//!
//! - **int / float**: trim, strip one pair of surrounding quotes, parse.
//! - **bool**: trim, strip quotes, lowercase, accept `true` / `false`.
//! - **string**: unwrap one pair of surrounding quotes, otherwise verbatim.
//! - **record**: parse a JSON object and resolve each declared field by name.
//!
//! Alternative decoders plug into the dispatcher through [`PayloadDecoder`].

mod descriptor;
mod errors;
mod primitive;
mod record;
mod value;

pub use self::descriptor::{FieldDescriptor, PrimitiveKind, RecordDescriptor, TypeDescriptor};
pub use self::errors::DecodeError;
pub use self::value::{PrimitiveValue, Record, Value};

/// Decodes one payload into a value of the requested shape.
pub trait PayloadDecoder: Send + Sync {
    /// Decodes `raw` against `target`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] describing why `raw` does not denote a value
    /// of `target`. Implementations must not fail any other way.
    fn decode(&self, raw: &str, target: &TypeDescriptor) -> Result<Value, DecodeError>;
}

/// The built-in decoder for primitives and flat JSON records.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDecoder;

impl StandardDecoder {
    /// Creates a standard decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PayloadDecoder for StandardDecoder {
    fn decode(&self, raw: &str, target: &TypeDescriptor) -> Result<Value, DecodeError> {
        match target {
            TypeDescriptor::Primitive(kind) => primitive::decode_primitive(raw, *kind),
            TypeDescriptor::Record(descriptor) => record::decode_record(raw, descriptor),
        }
    }
}

impl<T> PayloadDecoder for &T
where
    T: PayloadDecoder + ?Sized,
{
    fn decode(&self, raw: &str, target: &TypeDescriptor) -> Result<Value, DecodeError> {
        (**self).decode(raw, target)
    }
}
