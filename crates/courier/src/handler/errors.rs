//! Failures raised by handler bodies.

use std::any::Any;
use std::error::Error as StdError;

use thiserror::Error;

/// Boxed error type accepted as a handler failure source.
pub type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors reported by a handler while it runs.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The handler body reported a failure.
    #[error("{message}")]
    Failed {
        /// Human-readable failure description.
        message: String,
        /// Optional underlying error.
        #[source]
        source: Option<BoxedError>,
    },

    /// A decoded argument could not be converted into the handler's Rust type.
    #[error("argument {position} could not be converted to {expected}: {message}")]
    Conversion {
        /// Zero-based argument position.
        position: usize,
        /// Expected Rust-side type.
        expected: String,
        /// Conversion failure description.
        message: String,
    },

    /// The handler panicked; the panic was contained by the dispatcher.
    #[error("handler panicked: {message}")]
    Panicked {
        /// Panic payload rendered as text.
        message: String,
    },
}

impl HandlerError {
    /// Creates a failure with a message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a failure wrapping an underlying error.
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxedError>) -> Self {
        Self::Failed {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Creates a conversion failure.
    pub fn conversion(
        position: usize,
        expected: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Conversion {
            position,
            expected: expected.into(),
            message: message.into(),
        }
    }

    /// Creates a panic report from a payload captured by `catch_unwind`.
    #[must_use]
    pub fn panicked(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_owned());
        Self::Panicked { message }
    }
}
