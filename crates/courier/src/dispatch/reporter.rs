//! Structured reporting of dispatch outcomes.

use std::sync::Arc;

use super::dispatcher::{DISPATCH_TARGET, Dispatched};
use super::errors::DispatchError;

/// Observer notified once per dispatched message.
///
/// Reports accompany the `Result` returned by
/// [`super::Dispatcher::dispatch`]; they never replace it.
pub trait DispatchReporter: Send + Sync {
    /// Invoked after a handler completes successfully.
    fn command_dispatched(&self, outcome: &Dispatched);

    /// Invoked when any pipeline step fails.
    fn command_failed(&self, error: &DispatchError);
}

impl<T> DispatchReporter for Arc<T>
where
    T: DispatchReporter + ?Sized,
{
    fn command_dispatched(&self, outcome: &Dispatched) {
        (**self).command_dispatched(outcome);
    }

    fn command_failed(&self, error: &DispatchError) {
        (**self).command_failed(error);
    }
}

/// Default reporter that records outcomes using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredDispatchReporter;

impl StructuredDispatchReporter {
    /// Builds a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DispatchReporter for StructuredDispatchReporter {
    fn command_dispatched(&self, outcome: &Dispatched) {
        tracing::info!(
            target: DISPATCH_TARGET,
            event = "command_dispatched",
            command = outcome.command(),
            arity = outcome.arity(),
            "command dispatched"
        );
    }

    fn command_failed(&self, error: &DispatchError) {
        if error.is_handler_failure() {
            tracing::error!(
                target: DISPATCH_TARGET,
                event = "command_failed",
                kind = %error.kind(),
                command = error.command(),
                error = %error,
                "command handler failed"
            );
        } else {
            tracing::warn!(
                target: DISPATCH_TARGET,
                event = "command_rejected",
                kind = %error.kind(),
                command = error.command(),
                error = %error,
                "command rejected"
            );
        }
    }
}
