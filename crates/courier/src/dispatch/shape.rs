//! Shallow shape check applied before envelope parsing.

/// Returns `true` when `text` looks like a JSON object or array.
///
/// Only the outermost delimiters are inspected after trimming whitespace.
/// Passing this check does not guarantee the text parses.
#[must_use]
pub fn is_plausible_json_root(text: &str) -> bool {
    let trimmed = text.trim();
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}
