//! Structured telemetry initialisation for embedding applications.
//!
//! Registry and dispatch events are emitted under the `courier::registry` and
//! `courier::dispatch` targets, so a filter such as
//! `warn,courier::dispatch=debug` isolates per-message tracing.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use courier_config::{Config, LogFormat};

/// Format of the subscriber installed by the first successful call.
static INSTALLED_FORMAT: OnceCell<LogFormat> = OnceCell::new();

/// Proof that the global subscriber is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryHandle {
    format: LogFormat,
}

impl TelemetryHandle {
    /// Output format of the installed subscriber.
    ///
    /// This is the format of the first configuration passed to
    /// [`initialise`], which may differ from later ones.
    #[must_use]
    pub const fn format(self) -> LogFormat {
        self.format
    }
}

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured log filter expression does not parse.
    #[error("invalid log filter '{filter}': {message}")]
    Filter {
        /// Filter expression as configured.
        filter: String,
        /// Parser message.
        message: String,
    },
    /// Another global subscriber was installed first.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Installs the global tracing subscriber on first use.
///
/// Later calls return a handle for the already installed subscriber without
/// touching the global state.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter expression and
/// [`TelemetryError::Subscriber`] when a subscriber from elsewhere is already
/// installed.
///
/// # Examples
///
/// ```rust
/// use courier::telemetry;
/// use courier_config::{Config, LogFormat};
///
/// # fn main() -> Result<(), courier::telemetry::TelemetryError> {
/// let first = telemetry::initialise(&Config::default())?;
/// let compact = Config {
///     log_format: LogFormat::Compact,
///     ..Config::default()
/// };
/// let second = telemetry::initialise(&compact)?;
/// assert_eq!(second.format(), first.format());
/// # Ok(())
/// # }
/// ```
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    INSTALLED_FORMAT
        .get_or_try_init(|| install_subscriber(config))
        .map(|format| TelemetryHandle { format: *format })
}

fn parse_filter(expression: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(expression).map_err(|error| TelemetryError::Filter {
        filter: expression.to_owned(),
        message: error.to_string(),
    })
}

fn install_subscriber(config: &Config) -> Result<LogFormat, TelemetryError> {
    let filter = parse_filter(config.log_filter())?;
    let format = config.log_format();

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let subscriber: Box<dyn Subscriber + Send + Sync> = match format {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(format)
}
