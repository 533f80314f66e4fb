//! Command registry: the name to handler table.
//!
//! The [`CommandRegistry`] is constructed explicitly by the embedding
//! application and shared (typically as `Arc<CommandRegistry>`) with the
//! dispatcher. One mutex guards the whole table; it is held only for the
//! duration of a single map operation. [`CommandRegistry::lookup`] hands out
//! an `Arc<Handler>` so handlers always run after the lock is released and
//! may themselves register or unregister commands.
//!
//! Re-registering a name replaces the earlier handler. That is reported as a
//! warning (both as [`Registration::Replaced`] and as a `tracing` event) rather
//! than an error.

mod errors;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::handler::Handler;

pub use self::errors::RegistryError;

/// Tracing target for registry operations.
pub(crate) const REGISTRY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::registry");

/// Outcome of a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The name was not previously registered.
    Inserted,
    /// An existing handler under the same name was replaced.
    Replaced,
}

impl Registration {
    /// Returns `true` when an earlier handler was overwritten.
    #[must_use]
    pub const fn replaced(self) -> bool {
        matches!(self, Self::Replaced)
    }
}

/// Table of registered command handlers.
///
/// # Example
///
/// ```
/// use courier::handler::Handler;
/// use courier::registry::{CommandRegistry, Registration};
///
/// let registry = CommandRegistry::new();
/// let first = registry
///     .register("ShowStatus", Handler::nullary(|| Ok(())))
///     .expect("valid name");
/// assert_eq!(first, Registration::Inserted);
/// assert_eq!(registry.len(), 1);
/// assert!(registry.lookup("ShowStatus").is_ok());
/// ```
#[derive(Debug, Default)]
pub struct CommandRegistry {
    handlers: Mutex<HashMap<String, Arc<Handler>>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, replacing any earlier handler.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] if `name` is empty or only
    /// whitespace; the table is left untouched.
    pub fn register(
        &self,
        name: impl Into<String>,
        handler: Handler,
    ) -> Result<Registration, RegistryError> {
        let command: String = name.into();
        if command.trim().is_empty() {
            return Err(RegistryError::InvalidName);
        }

        let signature = handler.signature().to_string();
        let previous = self.table().insert(command.clone(), Arc::new(handler));
        if previous.is_some() {
            warn!(
                target: REGISTRY_TARGET,
                command = %command,
                "command already registered; replacing previous handler"
            );
        }
        info!(
            target: REGISTRY_TARGET,
            command = %command,
            signature = %signature,
            "registered command"
        );

        Ok(if previous.is_some() {
            Registration::Replaced
        } else {
            Registration::Inserted
        })
    }

    /// Returns the handler registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownCommand`] when nothing is registered
    /// under `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<Handler>, RegistryError> {
        self.table()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::unknown_command(name))
    }

    /// Returns `true` when a handler is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table().contains_key(name)
    }

    /// Removes the handler registered under `name`.
    ///
    /// Returns whether a handler was removed. Removing an unknown name is not
    /// an error.
    pub fn unregister(&self, name: &str) -> bool {
        let removed = self.table().remove(name).is_some();
        if removed {
            info!(target: REGISTRY_TARGET, command = name, "unregistered command");
        } else {
            debug!(
                target: REGISTRY_TARGET,
                command = name,
                "unregister ignored; command was not registered"
            );
        }
        removed
    }

    /// Removes every handler.
    pub fn clear(&self) {
        let removed = {
            let mut table = self.table();
            let count = table.len();
            table.clear();
            count
        };
        info!(target: REGISTRY_TARGET, removed, "cleared all commands");
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table().len()
    }

    /// Returns `true` when no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    /// Registered command names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.table().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Locks the table.
    ///
    /// Every mutation is a single map call, so a poisoned lock still guards a
    /// consistent table and is recovered rather than propagated.
    fn table(&self) -> MutexGuard<'_, HashMap<String, Arc<Handler>>> {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
