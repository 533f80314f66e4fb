//! Errors raised by registry operations.

use thiserror::Error;

/// Registry failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The command name is empty or whitespace.
    #[error("command name must not be empty")]
    InvalidName,

    /// No handler is registered under the name.
    #[error("command '{name}' is not registered")]
    UnknownCommand {
        /// Name that was looked up.
        name: String,
    },

    /// A handler declared more parameters than the dispatcher supports.
    #[error("handlers accept at most {max} parameters, {arity} declared", max = crate::handler::MAX_ARITY)]
    UnsupportedArity {
        /// Declared parameter count.
        arity: usize,
    },
}

impl RegistryError {
    /// Creates an unknown command error.
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }
}
