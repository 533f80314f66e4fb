//! Wiring of configuration, telemetry, registry and dispatcher.

use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;
use tracing::info;

use courier_config::Config;

use crate::dispatch::{DispatchError, DispatchReporter, Dispatched, Dispatcher};
use crate::handler::Handler;
use crate::registry::{CommandRegistry, Registration, RegistryError};
use crate::telemetry::{self, TelemetryError, TelemetryHandle};

const BOOTSTRAP_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::bootstrap");

/// Source of the resolved configuration.
pub trait ConfigLoader: Send + Sync {
    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns the loader error when a layer cannot be read or merged.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that delegates to [`Config::load`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Loader returning a fixed configuration.
#[derive(Debug, Default, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Wraps an already resolved configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
}

/// A configured registry and dispatcher pair.
///
/// The embedding application owns this value and passes it, or the shared
/// registry, to whatever registers or dispatches commands.
#[derive(Debug)]
pub struct Courier {
    config: Config,
    registry: Arc<CommandRegistry>,
    dispatcher: Dispatcher,
    telemetry: TelemetryHandle,
}

impl Courier {
    /// Accessor for the resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Shared registry the dispatcher reads from.
    #[must_use]
    pub const fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// The configured dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Accessor for the telemetry handle.
    #[must_use]
    pub const fn telemetry(&self) -> TelemetryHandle {
        self.telemetry
    }

    /// Registers a handler. See [`CommandRegistry::register`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] for blank names.
    pub fn register(
        &self,
        name: impl Into<String>,
        handler: Handler,
    ) -> Result<Registration, RegistryError> {
        self.registry.register(name, handler)
    }

    /// Dispatches one raw message. See [`Dispatcher::dispatch`].
    ///
    /// # Errors
    ///
    /// Returns the [`DispatchError`] raised by the pipeline.
    pub fn dispatch(&self, raw: &str) -> Result<Dispatched, DispatchError> {
        self.dispatcher.dispatch(raw)
    }
}

/// Loads configuration, initialises telemetry and builds a [`Courier`].
///
/// `reporter` receives every dispatch outcome.
///
/// # Errors
///
/// Returns [`BootstrapError`] when configuration or telemetry fails.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn DispatchReporter>,
) -> Result<Courier, BootstrapError> {
    let config = loader
        .load()
        .map_err(|source| BootstrapError::Configuration { source })?;
    let telemetry = telemetry::initialise(&config)
        .map_err(|source| BootstrapError::Telemetry { source })?;

    let registry = Arc::new(CommandRegistry::new());
    let dispatcher = Dispatcher::new(Arc::clone(&registry))
        .with_reporter(reporter)
        .with_preview_chars(config.payload_preview_chars());

    info!(
        target: BOOTSTRAP_TARGET,
        log_filter = config.log_filter(),
        log_format = %config.log_format(),
        payload_preview_chars = config.payload_preview_chars(),
        "courier ready"
    );

    Ok(Courier {
        config,
        registry,
        dispatcher,
        telemetry,
    })
}
