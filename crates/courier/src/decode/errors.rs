//! Errors raised while decoding a payload into its declared type.

use thiserror::Error;

/// Payload decoding failures.
///
/// Every variant carries the target type name, the raw payload exactly as
/// received, and the underlying parser message. The rendered message leaves
/// the payload out; callers that show it should truncate it first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is not a number of the requested kind.
    #[error("invalid {target}: {message}")]
    NumberFormat {
        /// Target type name.
        target: String,
        /// Raw payload text.
        payload: String,
        /// Parser message.
        message: String,
    },

    /// The payload is not `true` or `false`.
    #[error("invalid {target}: {message}")]
    BoolFormat {
        /// Target type name.
        target: String,
        /// Raw payload text.
        payload: String,
        /// Parser message.
        message: String,
    },

    /// The payload is not a JSON object matching the record's field kinds.
    #[error("invalid {target} object: {message}")]
    StructureParse {
        /// Target record name.
        target: String,
        /// Raw payload text.
        payload: String,
        /// Parser message.
        message: String,
    },
}

impl DecodeError {
    /// Creates a number format error.
    pub fn number_format(
        target: impl Into<String>,
        payload: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::NumberFormat {
            target: target.into(),
            payload: payload.into(),
            message: message.into(),
        }
    }

    /// Creates a boolean format error.
    pub fn bool_format(
        target: impl Into<String>,
        payload: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::BoolFormat {
            target: target.into(),
            payload: payload.into(),
            message: message.into(),
        }
    }

    /// Creates a structure parse error.
    pub fn structure_parse(
        target: impl Into<String>,
        payload: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::StructureParse {
            target: target.into(),
            payload: payload.into(),
            message: message.into(),
        }
    }

    /// Target type name.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::NumberFormat { target, .. }
            | Self::BoolFormat { target, .. }
            | Self::StructureParse { target, .. } => target,
        }
    }

    /// Raw payload that failed to decode.
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            Self::NumberFormat { payload, .. }
            | Self::BoolFormat { payload, .. }
            | Self::StructureParse { payload, .. } => payload,
        }
    }

    /// Underlying parser message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NumberFormat { message, .. }
            | Self::BoolFormat { message, .. }
            | Self::StructureParse { message, .. } => message,
        }
    }
}
