//! Envelope parsing for the dispatch pipeline.
//!
//! An envelope is a flat JSON object naming the command and carrying up to
//! two still-encoded payload strings:
//!
//! ```json
//! {"command": "AwardPoints", "param1": "\"alice\"", "param2": "25"}
//! ```
//!
//! Unknown fields are ignored. Payload fields must be JSON strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::errors::DispatchError;
use super::shape::is_plausible_json_root;

/// Envelope field holding a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentSlot {
    /// `parameters`, used by one-argument commands.
    Parameters,
    /// `param1`, the first argument of two-argument commands.
    Param1,
    /// `param2`, the second argument of two-argument commands.
    Param2,
}

impl ArgumentSlot {
    /// Slots read for a handler of the given arity, in argument order.
    ///
    /// Returns `None` for arities the envelope cannot carry.
    #[must_use]
    pub const fn for_arity(arity: usize) -> Option<&'static [Self]> {
        match arity {
            0 => Some(&[]),
            1 => Some(&[Self::Parameters]),
            2 => Some(&[Self::Param1, Self::Param2]),
            _ => None,
        }
    }

    /// Wire name of the field.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Parameters => "parameters",
            Self::Param1 => "param1",
            Self::Param2 => "param2",
        }
    }
}

impl fmt::Display for ArgumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A parsed command envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    param1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    param2: Option<String>,
}

impl Envelope {
    /// Creates an envelope for a command with no payloads.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            ..Self::default()
        }
    }

    /// Sets the single-argument payload.
    #[must_use]
    pub fn with_parameters(mut self, payload: impl Into<String>) -> Self {
        self.parameters = Some(payload.into());
        self
    }

    /// Sets both two-argument payloads.
    #[must_use]
    pub fn with_params(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.param1 = Some(first.into());
        self.param2 = Some(second.into());
        self
    }

    /// Serializes the envelope to its wire form.
    ///
    /// # Errors
    ///
    /// Returns the serializer error. With string-only fields this does not
    /// happen in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses raw message text into an envelope.
    ///
    /// Applies, in order: the emptiness check, the shape check, and the JSON
    /// parse. `preview_chars` bounds how much of the message a
    /// [`DispatchError::MalformedJson`] repeats back.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::EmptyMessage`],
    /// [`DispatchError::MalformedJson`], or [`DispatchError::EnvelopeParse`].
    pub fn parse(text: &str, preview_chars: usize) -> Result<Self, DispatchError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DispatchError::EmptyMessage);
        }
        if !is_plausible_json_root(trimmed) {
            return Err(DispatchError::malformed(trimmed, preview_chars));
        }

        let root: JsonValue = serde_json::from_str(trimmed).map_err(DispatchError::from_json_error)?;
        if !root.is_object() {
            return Err(DispatchError::envelope_parse("envelope root must be a JSON object"));
        }
        serde_json::from_value(root).map_err(DispatchError::from_json_error)
    }

    /// Returns the command name, or an empty string when absent.
    #[must_use]
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or_default()
    }

    /// Returns the command name after checking it is present.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingCommandName`] when the name is absent,
    /// empty, or only whitespace.
    pub fn command_name(&self) -> Result<&str, DispatchError> {
        let name = self.command();
        if name.trim().is_empty() {
            return Err(DispatchError::MissingCommandName);
        }
        Ok(name)
    }

    /// Returns the payload held in `slot`, if any.
    #[must_use]
    pub fn payload(&self, slot: ArgumentSlot) -> Option<&str> {
        match slot {
            ArgumentSlot::Parameters => self.parameters.as_deref(),
            ArgumentSlot::Param1 => self.param1.as_deref(),
            ArgumentSlot::Param2 => self.param2.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::dispatch::ErrorKind;

    const PREVIEW: usize = 64;

    #[test]
    fn parses_command_only() {
        let envelope = Envelope::parse(r#"{"command":"ShowStatus"}"#, PREVIEW).expect("parse");
        assert_eq!(envelope.command(), "ShowStatus");
        assert_eq!(envelope.payload(ArgumentSlot::Parameters), None);
    }

    #[test]
    fn parses_all_payload_slots() {
        let text = r#"{"command":"X","parameters":"1","param1":"\"a\"","param2":"true"}"#;
        let envelope = Envelope::parse(text, PREVIEW).expect("parse");
        assert_eq!(envelope.payload(ArgumentSlot::Parameters), Some("1"));
        assert_eq!(envelope.payload(ArgumentSlot::Param1), Some("\"a\""));
        assert_eq!(envelope.payload(ArgumentSlot::Param2), Some("true"));
    }

    #[test]
    fn ignores_unknown_fields() {
        let text = r#"{"command":"X","sender":"client-7","priority":3}"#;
        let envelope = Envelope::parse(text, PREVIEW).expect("parse");
        assert_eq!(envelope.command(), "X");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let envelope = Envelope::parse("  {\"command\":\"X\"}\n", PREVIEW).expect("parse");
        assert_eq!(envelope.command(), "X");
    }

    #[rstest]
    #[case::empty("", ErrorKind::EmptyMessage)]
    #[case::whitespace(" \n\t", ErrorKind::EmptyMessage)]
    #[case::bare_word("hello", ErrorKind::MalformedJson)]
    #[case::unterminated("{\"command\":", ErrorKind::MalformedJson)]
    #[case::broken_object("{command: X}", ErrorKind::EnvelopeParse)]
    #[case::array_root("[\"X\"]", ErrorKind::EnvelopeParse)]
    #[case::numeric_payload("{\"command\":\"X\",\"parameters\":5}", ErrorKind::EnvelopeParse)]
    #[case::numeric_command("{\"command\":7}", ErrorKind::EnvelopeParse)]
    fn rejects_invalid_messages(#[case] text: &str, #[case] expected: ErrorKind) {
        let error = Envelope::parse(text, PREVIEW).expect_err("message should be rejected");
        assert_eq!(error.kind(), expected);
    }

    #[rstest]
    #[case::absent("{}")]
    #[case::null("{\"command\":null}")]
    #[case::empty("{\"command\":\"\"}")]
    #[case::blank("{\"command\":\"   \"}")]
    fn reports_missing_command_name(#[case] text: &str) {
        let envelope = Envelope::parse(text, PREVIEW).expect("parse");
        let error = envelope.command_name().expect_err("name should be missing");
        assert_eq!(error.kind(), ErrorKind::MissingCommandName);
    }

    #[test]
    fn malformed_preview_is_truncated() {
        let text = "x".repeat(100);
        let error = Envelope::parse(&text, 8).expect_err("malformed");
        let DispatchError::MalformedJson { preview } = error else {
            panic!("expected MalformedJson, got {error:?}");
        };
        assert_eq!(preview, "xxxxxxxx…");
    }

    #[test]
    fn builder_output_parses_back() {
        let json = Envelope::new("AwardPoints")
            .with_params("\"alice\"", "25")
            .to_json()
            .expect("serialize");
        let envelope = Envelope::parse(&json, PREVIEW).expect("parse");
        assert_eq!(envelope.command(), "AwardPoints");
        assert_eq!(envelope.payload(ArgumentSlot::Param1), Some("\"alice\""));
        assert_eq!(envelope.payload(ArgumentSlot::Param2), Some("25"));
        assert_eq!(envelope.payload(ArgumentSlot::Parameters), None);
    }

    #[test]
    fn builder_omits_absent_fields() {
        let json = Envelope::new("ShowStatus").to_json().expect("serialize");
        assert_eq!(json, r#"{"command":"ShowStatus"}"#);
    }

    #[rstest]
    #[case::nullary(0, &[])]
    #[case::unary(1, &[ArgumentSlot::Parameters])]
    #[case::binary(2, &[ArgumentSlot::Param1, ArgumentSlot::Param2])]
    fn slots_follow_arity(#[case] arity: usize, #[case] expected: &[ArgumentSlot]) {
        assert_eq!(ArgumentSlot::for_arity(arity), Some(expected));
    }

    #[test]
    fn no_slots_beyond_two_arguments() {
        assert_eq!(ArgumentSlot::for_arity(3), None);
    }
}
