//! Shared configuration for embedding the courier command dispatcher.
//!
//! Configuration is layered by `ortho_config`: built-in defaults, then an
//! optional configuration file, then `COURIER_*` environment variables, and
//! finally command-line flags. Only ambient concerns live here (logging and
//! diagnostic presentation); command registration is always done in code by
//! the embedding application.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_PAYLOAD_PREVIEW_CHARS, default_log_filter,
    default_log_filter_string, default_log_format, default_payload_preview_chars,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved dispatcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "COURIER")]
pub struct Config {
    /// `tracing` filter expression applied to emitted events.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log lines.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Number of characters of a raw payload echoed back in dispatch errors.
    #[ortho_config(default = DEFAULT_PAYLOAD_PREVIEW_CHARS)]
    pub payload_preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            payload_preview_chars: default_payload_preview_chars(),
        }
    }
}

impl Config {
    /// Filter expression handed to the tracing subscriber.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Output format for the tracing subscriber.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Maximum number of payload characters shown in diagnostics.
    ///
    /// A configured value of zero is raised to one so truncated previews still
    /// identify the payload.
    #[must_use]
    pub const fn payload_preview_chars(&self) -> usize {
        if self.payload_preview_chars == 0 {
            1
        } else {
            self.payload_preview_chars
        }
    }
}
