//! Test double for [`DispatchReporter`] that records outcomes for assertions.

use std::sync::Mutex;

use crate::dispatch::{DispatchError, DispatchReporter, Dispatched, ErrorKind};

/// Dispatch outcomes tracked during scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    /// A command ran to completion.
    Dispatched {
        /// Command name.
        command: String,
        /// Number of arguments passed.
        arity: usize,
    },
    /// A message was rejected or its handler failed.
    Failed {
        /// Failure kind.
        kind: ErrorKind,
        /// Command name, when known.
        command: Option<String>,
    },
}

/// Records dispatch events for assertions.
#[derive(Debug, Default)]
pub struct RecordingDispatchReporter {
    events: Mutex<Vec<DispatchEvent>>,
}

impl RecordingDispatchReporter {
    /// Captures a copy of the recorded events.
    pub fn events(&self) -> Vec<DispatchEvent> {
        self.events
            .lock()
            .expect("dispatch reporter mutex poisoned")
            .clone()
    }

    /// Number of recorded failures.
    pub fn failures(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, DispatchEvent::Failed { .. }))
            .count()
    }

    fn record(&self, event: DispatchEvent) {
        self.events
            .lock()
            .expect("dispatch reporter mutex poisoned")
            .push(event);
    }
}

impl DispatchReporter for RecordingDispatchReporter {
    fn command_dispatched(&self, outcome: &Dispatched) {
        self.record(DispatchEvent::Dispatched {
            command: outcome.command().to_owned(),
            arity: outcome.arity(),
        });
    }

    fn command_failed(&self, error: &DispatchError) {
        self.record(DispatchEvent::Failed {
            kind: error.kind(),
            command: error.command().map(str::to_owned),
        });
    }
}
