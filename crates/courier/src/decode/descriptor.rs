//! Type descriptors naming the shape a payload must decode into.

use std::fmt;

use super::value::PrimitiveValue;

/// Primitive parameter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Signed 64-bit integer.
    Int,
    /// 64-bit floating point number.
    Float,
    /// Boolean literal.
    Bool,
    /// Text.
    String,
}

impl PrimitiveKind {
    /// Returns the canonical lower-case type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named field of a structured record together with its default value.
///
/// The default also fixes the field's kind: a field declared with
/// `PrimitiveValue::Float(0.0)` only accepts JSON numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    name: String,
    default: PrimitiveValue,
}

impl FieldDescriptor {
    /// Creates a field descriptor.
    pub fn new(name: impl Into<String>, default: impl Into<PrimitiveValue>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
        }
    }

    /// Field name as it appears in the payload object.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared kind of the field.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        self.default.kind()
    }

    /// Value used when the payload omits the field.
    #[must_use]
    pub const fn default_value(&self) -> &PrimitiveValue {
        &self.default
    }
}

/// Shape of a structured record: a name and an ordered set of primitive fields.
///
/// # Example
///
/// ```
/// use courier::decode::{PrimitiveKind, RecordDescriptor};
///
/// let point = RecordDescriptor::new("Point")
///     .field("x", 0.0)
///     .field("y", 0.0)
///     .field("z", 0.0);
/// assert_eq!(point.fields().len(), 3);
/// assert_eq!(point.field_named("y").map(|f| f.kind()), Some(PrimitiveKind::Float));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDescriptor {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    /// Creates a record descriptor with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field, replacing any earlier field declared with the same name.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, default: impl Into<PrimitiveValue>) -> Self {
        let descriptor = FieldDescriptor::new(name, default);
        match self
            .fields
            .iter_mut()
            .find(|existing| existing.name == descriptor.name)
        {
            Some(existing) => *existing = descriptor,
            None => self.fields.push(descriptor),
        }
        self
    }

    /// Record type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field_named(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Target shape for decoding one payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// A primitive scalar.
    Primitive(PrimitiveKind),
    /// A flat record of named primitive fields.
    Record(RecordDescriptor),
}

impl TypeDescriptor {
    /// Integer descriptor.
    #[must_use]
    pub const fn int() -> Self {
        Self::Primitive(PrimitiveKind::Int)
    }

    /// Floating point descriptor.
    #[must_use]
    pub const fn float() -> Self {
        Self::Primitive(PrimitiveKind::Float)
    }

    /// Boolean descriptor.
    #[must_use]
    pub const fn bool() -> Self {
        Self::Primitive(PrimitiveKind::Bool)
    }

    /// String descriptor.
    #[must_use]
    pub const fn string() -> Self {
        Self::Primitive(PrimitiveKind::String)
    }

    /// Structured record descriptor.
    #[must_use]
    pub const fn record(descriptor: RecordDescriptor) -> Self {
        Self::Record(descriptor)
    }

    /// Name used in diagnostics: the primitive name or the record name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Primitive(kind) => kind.as_str(),
            Self::Record(record) => record.name(),
        }
    }
}

impl From<PrimitiveKind> for TypeDescriptor {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

impl From<RecordDescriptor> for TypeDescriptor {
    fn from(record: RecordDescriptor) -> Self {
        Self::Record(record)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
