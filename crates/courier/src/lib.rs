//! In-process command dispatch for JSON messages.
//!
//! Applications register named handlers with a declared parameter signature
//! of at most two types. Incoming JSON envelopes name a command and carry its
//! arguments as encoded payload strings; the dispatcher looks the command up,
//! decodes each payload against the declared type, and invokes the handler.
//!
//! ```
//! use std::sync::Arc;
//!
//! use courier::dispatch::Dispatcher;
//! use courier::handler::{Handler, HandlerError};
//! use courier::registry::CommandRegistry;
//!
//! let registry = Arc::new(CommandRegistry::new());
//! registry
//!     .register(
//!         "AwardPoints",
//!         Handler::unary(|points: i64| {
//!             if points < 0 {
//!                 return Err(HandlerError::failed("points must not be negative"));
//!             }
//!             Ok(())
//!         }),
//!     )
//!     .expect("valid name");
//!
//! let dispatcher = Dispatcher::new(Arc::clone(&registry));
//! let outcome = dispatcher
//!     .dispatch(r#"{"command":"AwardPoints","parameters":"100"}"#)
//!     .expect("dispatch");
//! assert_eq!(outcome.arity(), 1);
//! assert!(dispatcher.dispatch(r#"{"command":"AwardPoints","parameters":"-1"}"#).is_err());
//! ```
//!
//! Every failure is a structured [`dispatch::DispatchError`]; no failure leaves
//! the registry or dispatcher unusable. [`bootstrap_with`] wires configuration
//! from [`courier_config`] and structured `tracing` output around a fresh
//! registry.

mod bootstrap;
pub mod decode;
pub mod dispatch;
pub mod handler;
pub mod registry;
pub mod telemetry;

pub use bootstrap::{
    BootstrapError, ConfigLoader, Courier, StaticConfigLoader, SystemConfigLoader, bootstrap_with,
};
pub use dispatch::{DispatchError, DispatchReporter, Dispatcher, StructuredDispatchReporter};
pub use handler::{Handler, HandlerError};
pub use registry::{CommandRegistry, Registration, RegistryError};
pub use telemetry::{TelemetryError, TelemetryHandle};

#[cfg(test)]
mod tests;
