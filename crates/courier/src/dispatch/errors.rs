//! Error types for dispatch failures.
//!
//! Each variant maps to one failure mode of the dispatch pipeline and carries
//! the command name when it is known, so callers can report failures without
//! parsing messages.

use std::fmt;

use thiserror::Error;

use crate::decode::{DecodeError, TypeDescriptor};
use crate::handler::HandlerError;

use super::envelope::ArgumentSlot;

/// Errors surfaced by [`super::Dispatcher::dispatch`].
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The message is empty or only whitespace.
    #[error("message is empty")]
    EmptyMessage,

    /// The message is not shaped like a JSON object or array.
    #[error("malformed JSON: {preview}")]
    MalformedJson {
        /// Truncated message text.
        preview: String,
    },

    /// The message could not be parsed into an envelope.
    #[error("invalid envelope: {message}")]
    EnvelopeParse {
        /// Parser message.
        message: String,
        /// Underlying JSON error, when the parser produced one.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The envelope names no command.
    #[error("command name is missing")]
    MissingCommandName,

    /// The envelope names a command that is not registered.
    #[error("command '{command}' is not registered")]
    UnknownCommand {
        /// Requested command.
        command: String,
    },

    /// The registered handler declares an arity the dispatcher cannot serve.
    #[error("command '{command}' declares {arity} parameters; at most 2 are supported")]
    UnsupportedArity {
        /// Command name.
        command: String,
        /// Declared parameter count.
        arity: usize,
    },

    /// A declared parameter has no payload in the envelope.
    #[error("command '{command}' expects a value in '{slot}'")]
    MissingArgument {
        /// Command name.
        command: String,
        /// Envelope field that was absent or empty.
        slot: ArgumentSlot,
    },

    /// A payload does not decode to the declared parameter type.
    #[error("command '{command}': cannot decode '{slot}' as {target} from '{payload}': {source}")]
    ArgumentDecode {
        /// Command name.
        command: String,
        /// Envelope field holding the payload.
        slot: ArgumentSlot,
        /// Declared parameter type name.
        target: String,
        /// Raw payload, truncated for display.
        payload: String,
        /// Decoder failure.
        #[source]
        source: DecodeError,
    },

    /// The handler body failed or panicked.
    #[error("command '{command}' failed: {source}")]
    HandlerExecution {
        /// Command name.
        command: String,
        /// Handler failure.
        #[source]
        source: HandlerError,
    },
}

/// Discriminant of a [`DispatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`DispatchError::EmptyMessage`].
    EmptyMessage,
    /// See [`DispatchError::MalformedJson`].
    MalformedJson,
    /// See [`DispatchError::EnvelopeParse`].
    EnvelopeParse,
    /// See [`DispatchError::MissingCommandName`].
    MissingCommandName,
    /// See [`DispatchError::UnknownCommand`].
    UnknownCommand,
    /// See [`DispatchError::UnsupportedArity`].
    UnsupportedArity,
    /// See [`DispatchError::MissingArgument`].
    MissingArgument,
    /// See [`DispatchError::ArgumentDecode`].
    ArgumentDecode,
    /// See [`DispatchError::HandlerExecution`].
    HandlerExecution,
}

impl ErrorKind {
    /// Stable snake-case identifier used in structured logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyMessage => "empty_message",
            Self::MalformedJson => "malformed_json",
            Self::EnvelopeParse => "envelope_parse",
            Self::MissingCommandName => "missing_command_name",
            Self::UnknownCommand => "unknown_command",
            Self::UnsupportedArity => "unsupported_arity",
            Self::MissingArgument => "missing_argument",
            Self::ArgumentDecode => "argument_decode",
            Self::HandlerExecution => "handler_execution",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DispatchError {
    /// Returns the failure kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyMessage => ErrorKind::EmptyMessage,
            Self::MalformedJson { .. } => ErrorKind::MalformedJson,
            Self::EnvelopeParse { .. } => ErrorKind::EnvelopeParse,
            Self::MissingCommandName => ErrorKind::MissingCommandName,
            Self::UnknownCommand { .. } => ErrorKind::UnknownCommand,
            Self::UnsupportedArity { .. } => ErrorKind::UnsupportedArity,
            Self::MissingArgument { .. } => ErrorKind::MissingArgument,
            Self::ArgumentDecode { .. } => ErrorKind::ArgumentDecode,
            Self::HandlerExecution { .. } => ErrorKind::HandlerExecution,
        }
    }

    /// Command name, when the failure happened after the envelope named one.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::EmptyMessage
            | Self::MalformedJson { .. }
            | Self::EnvelopeParse { .. }
            | Self::MissingCommandName => None,
            Self::UnknownCommand { command }
            | Self::UnsupportedArity { command, .. }
            | Self::MissingArgument { command, .. }
            | Self::ArgumentDecode { command, .. }
            | Self::HandlerExecution { command, .. } => Some(command),
        }
    }

    /// Returns `true` for failures caused by the handler rather than the input.
    #[must_use]
    pub const fn is_handler_failure(&self) -> bool {
        matches!(self, Self::HandlerExecution { .. })
    }

    /// Creates a malformed JSON error showing a preview of the message.
    pub fn malformed(text: &str, preview_chars: usize) -> Self {
        Self::MalformedJson {
            preview: preview(text, preview_chars),
        }
    }

    /// Creates an envelope parse error from a serde error.
    pub fn from_json_error(source: serde_json::Error) -> Self {
        Self::EnvelopeParse {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Creates an envelope parse error with a custom message.
    pub fn envelope_parse(message: impl Into<String>) -> Self {
        Self::EnvelopeParse {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an unknown command error.
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Creates an unsupported arity error.
    pub fn unsupported_arity(command: impl Into<String>, arity: usize) -> Self {
        Self::UnsupportedArity {
            command: command.into(),
            arity,
        }
    }

    /// Creates a missing argument error.
    pub fn missing_argument(command: impl Into<String>, slot: ArgumentSlot) -> Self {
        Self::MissingArgument {
            command: command.into(),
            slot,
        }
    }

    /// Creates an argument decode error, truncating the payload for display.
    pub fn argument_decode(
        command: impl Into<String>,
        slot: ArgumentSlot,
        target: &TypeDescriptor,
        source: DecodeError,
        preview_chars: usize,
    ) -> Self {
        Self::ArgumentDecode {
            command: command.into(),
            slot,
            target: target.type_name().to_owned(),
            payload: preview(source.payload(), preview_chars),
            source,
        }
    }

    /// Creates a handler execution error.
    pub fn handler_execution(command: impl Into<String>, source: HandlerError) -> Self {
        Self::HandlerExecution {
            command: command.into(),
            source,
        }
    }
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with `…`.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", text.get(..cut).unwrap_or(text)),
        None => text.to_owned(),
    }
}
