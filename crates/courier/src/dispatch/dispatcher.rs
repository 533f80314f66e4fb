//! The dispatch pipeline.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::debug;

use courier_config::DEFAULT_PAYLOAD_PREVIEW_CHARS;

use crate::decode::{PayloadDecoder, StandardDecoder};
use crate::handler::{Arguments, Handler, HandlerError};
use crate::registry::CommandRegistry;

use super::envelope::{ArgumentSlot, Envelope};
use super::errors::DispatchError;
use super::reporter::{DispatchReporter, StructuredDispatchReporter};

/// Tracing target for dispatch events.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Summary of a successfully dispatched message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    command: String,
    arity: usize,
}

impl Dispatched {
    /// Name of the command that ran.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Number of arguments passed to the handler.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }
}

/// Routes envelopes to handlers held in a [`CommandRegistry`].
///
/// Each call to [`Dispatcher::dispatch`] processes one message in isolation:
/// parse, look up, decode every argument, then invoke. The registry lock is
/// released before the handler runs, so handlers may themselves register or
/// unregister commands.
pub struct Dispatcher<D = StandardDecoder> {
    registry: Arc<CommandRegistry>,
    decoder: D,
    reporter: Arc<dyn DispatchReporter>,
    preview_chars: usize,
}

impl Dispatcher<StandardDecoder> {
    /// Creates a dispatcher with the standard decoder and tracing reporter.
    #[must_use]
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self::with_decoder(registry, StandardDecoder::new())
    }
}

impl<D: PayloadDecoder> Dispatcher<D> {
    /// Creates a dispatcher using a custom payload decoder.
    pub fn with_decoder(registry: Arc<CommandRegistry>, decoder: D) -> Self {
        Self {
            registry,
            decoder,
            reporter: Arc::new(StructuredDispatchReporter::new()),
            preview_chars: DEFAULT_PAYLOAD_PREVIEW_CHARS,
        }
    }

    /// Replaces the outcome reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn DispatchReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Sets how many characters of a payload error messages repeat back.
    ///
    /// Values below one are raised to one.
    #[must_use]
    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars.max(1);
        self
    }

    /// The registry this dispatcher reads from.
    #[must_use]
    pub const fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// Processes one raw message.
    ///
    /// The outcome is also passed to the configured [`DispatchReporter`].
    ///
    /// # Errors
    ///
    /// Returns the first [`DispatchError`] raised by the pipeline. No handler
    /// runs unless every argument decoded successfully.
    pub fn dispatch(&self, raw: &str) -> Result<Dispatched, DispatchError> {
        let outcome = self.run(raw);
        match &outcome {
            Ok(dispatched) => self.reporter.command_dispatched(dispatched),
            Err(error) => self.reporter.command_failed(error),
        }
        outcome
    }

    fn run(&self, raw: &str) -> Result<Dispatched, DispatchError> {
        let envelope = Envelope::parse(raw, self.preview_chars)?;
        let command = envelope.command_name()?;
        let handler = self
            .registry
            .lookup(command)
            .map_err(|_| DispatchError::unknown_command(command))?;

        let arguments = self.decode_arguments(command, &handler, &envelope)?;
        debug!(
            target: DISPATCH_TARGET,
            command,
            arity = arguments.len(),
            "invoking handler"
        );
        invoke(command, &handler, arguments)?;

        Ok(Dispatched {
            command: command.to_owned(),
            arity: handler.arity(),
        })
    }

    fn decode_arguments(
        &self,
        command: &str,
        handler: &Handler,
        envelope: &Envelope,
    ) -> Result<Arguments, DispatchError> {
        let slots = ArgumentSlot::for_arity(handler.arity())
            .ok_or_else(|| DispatchError::unsupported_arity(command, handler.arity()))?;

        let payloads = slots
            .iter()
            .map(|&slot| {
                envelope
                    .payload(slot)
                    .filter(|payload| !payload.is_empty())
                    .map(|payload| (slot, payload))
                    .ok_or_else(|| DispatchError::missing_argument(command, slot))
            })
            .collect::<Result<Vec<_>, _>>()?;

        payloads
            .into_iter()
            .zip(handler.signature())
            .map(|((slot, payload), target)| {
                debug!(
                    target: DISPATCH_TARGET,
                    command,
                    %slot,
                    expected = target.type_name(),
                    "decoding argument"
                );
                self.decoder.decode(payload, target).map_err(|source| {
                    DispatchError::argument_decode(command, slot, target, source, self.preview_chars)
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Arguments::new)
    }
}

impl<D> std::fmt::Debug for Dispatcher<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("preview_chars", &self.preview_chars)
            .finish_non_exhaustive()
    }
}

/// Runs the handler, turning failures and panics into dispatch errors.
fn invoke(command: &str, handler: &Handler, arguments: Arguments) -> Result<(), DispatchError> {
    match panic::catch_unwind(AssertUnwindSafe(|| handler.invoke(arguments))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(source)) => Err(DispatchError::handler_execution(command, source)),
        Err(payload) => Err(DispatchError::handler_execution(
            command,
            HandlerError::panicked(payload.as_ref()),
        )),
    }
}
