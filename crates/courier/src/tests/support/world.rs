//! Scenario world shared across the behavioural suites.

use std::cell::RefCell;
use std::sync::Arc;

use courier_config::Config;

use crate::bootstrap::{
    BootstrapError, ConfigLoader, Courier, StaticConfigLoader, bootstrap_with,
};
use crate::dispatch::{DispatchError, Dispatched, Dispatcher};
use crate::registry::{CommandRegistry, Registration, RegistryError};

use super::commands::{self, CallLog};
use super::reporter::RecordingDispatchReporter;

/// Registry, dispatcher and recorded outcomes for one scenario.
pub struct CourierWorld {
    registry: Arc<CommandRegistry>,
    dispatcher: Dispatcher,
    loader: Box<dyn ConfigLoader>,
    courier: Option<Courier>,
    bootstrap_error: Option<BootstrapError>,
    pub reporter: Arc<RecordingDispatchReporter>,
    pub log: CallLog,
    pub outcome: Option<Result<Dispatched, DispatchError>>,
    pub registration: Option<Result<Registration, RegistryError>>,
    pub removed: Option<bool>,
}

impl CourierWorld {
    /// Builds a world with an empty registry and a recording reporter.
    pub fn new() -> Self {
        let registry = Arc::new(CommandRegistry::new());
        let reporter = Arc::new(RecordingDispatchReporter::default());
        let dispatcher = Dispatcher::new(Arc::clone(&registry)).with_reporter(reporter.clone());
        Self {
            registry,
            dispatcher,
            loader: Box::new(StaticConfigLoader::new(Config::default())),
            courier: None,
            bootstrap_error: None,
            reporter,
            log: CallLog::default(),
            outcome: None,
            registration: None,
            removed: None,
        }
    }

    /// Registry used by the active dispatcher.
    pub fn registry(&self) -> &CommandRegistry {
        self.courier
            .as_ref()
            .map_or(&*self.registry, |courier| &**courier.registry())
    }

    /// Registers the demo command set.
    pub fn register_demo_commands(&self) {
        commands::register_demo_commands(self.registry(), &self.log);
    }

    /// Registers a nullary command logging `label` when run.
    pub fn register_labelled(&mut self, name: &str, label: &str) {
        let handler = commands::labelled(&self.log, label);
        self.registration = Some(self.registry().register(name, handler));
    }

    /// Dispatches a raw message through the active dispatcher.
    pub fn dispatch(&mut self, message: &str) {
        let dispatcher = self
            .courier
            .as_ref()
            .map_or(&self.dispatcher, Courier::dispatcher);
        self.outcome = Some(dispatcher.dispatch(message));
    }

    /// Installs the loader used by [`Self::bootstrap`].
    pub fn use_loader(&mut self, loader: impl ConfigLoader + 'static) {
        self.loader = Box::new(loader);
    }

    /// Runs the bootstrap sequence with the recording reporter.
    pub fn bootstrap(&mut self) {
        match bootstrap_with(&*self.loader, self.reporter.clone()) {
            Ok(courier) => self.courier = Some(courier),
            Err(error) => self.bootstrap_error = Some(error),
        }
    }

    /// The bootstrapped courier, if bootstrap succeeded.
    pub fn courier(&self) -> Option<&Courier> {
        self.courier.as_ref()
    }

    /// The bootstrap error, if bootstrap failed.
    pub fn bootstrap_error(&self) -> Option<&BootstrapError> {
        self.bootstrap_error.as_ref()
    }

    /// Snapshot of the handler call log.
    pub fn calls(&self) -> Vec<String> {
        self.log.lock().expect("call log mutex poisoned").clone()
    }
}

impl Default for CourierWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Default test world fixture.
pub fn world() -> RefCell<CourierWorld> {
    RefCell::new(CourierWorld::new())
}
