//! Default values shared by the configuration layer and its callers.

use crate::logging::LogFormat;

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default number of characters of a raw payload echoed in diagnostics.
pub const DEFAULT_PAYLOAD_PREVIEW_CHARS: usize = 64;

/// Default log filter expression.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default payload preview length for diagnostics.
#[must_use]
pub const fn default_payload_preview_chars() -> usize {
    DEFAULT_PAYLOAD_PREVIEW_CHARS
}
