//! Pluggable text adapters: parse text into a `Value`, render a `Value`
//! back to text.
//!
//! The adapter is a capability handed in by the caller, not process-wide
//! state, so the merge stays testable against a fake and the text format
//! stays swappable.

use serde_json::Value;

use crate::error::AdapterError;

/// Conversion between a textual representation and the `Value` tree.
///
/// `parse` must fail with a descriptive [`AdapterError`] on malformed input
/// rather than produce `Null`. `serialize` is the inverse of `parse` for any
/// value that `parse` can produce; original formatting and key order need
/// not survive the round trip. Rendering is infallible: every `Value` has a
/// textual form.
pub trait TextAdapter {
    /// Parse text into a value tree.
    fn parse(&self, text: &str) -> Result<Value, AdapterError>;

    /// Render a value tree back to text.
    fn serialize(&self, value: &Value) -> String;
}

/// The serde_json-backed [`TextAdapter`].
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonAdapter {
    pretty: bool,
}

impl JsonAdapter {
    /// Adapter producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter producing indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl TextAdapter for JsonAdapter {
    fn parse(&self, text: &str) -> Result<Value, AdapterError> {
        serde_json::from_str(text).map_err(|e| AdapterError::Malformed(e.to_string()))
    }

    fn serialize(&self, value: &Value) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        // Rendering a `Value` cannot fail: keys are always strings.
        rendered.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_well_formed_json() {
        let adapter = JsonAdapter::new();
        assert_eq!(
            adapter.parse(r#"{"a": [1, null, "x"]}"#).unwrap(),
            json!({"a": [1, null, "x"]}),
        );
    }

    #[test]
    fn literal_null_text_parses_to_null_value() {
        // "null" is well-formed JSON; only non-JSON text is an error.
        let adapter = JsonAdapter::new();
        assert_eq!(adapter.parse("null").unwrap(), Value::Null);
    }

    #[test]
    fn malformed_input_is_an_error_not_null() {
        let adapter = JsonAdapter::new();
        let err = adapter.parse("{not json").unwrap_err();
        assert!(matches!(err, AdapterError::Malformed(_)));
    }

    #[test]
    fn empty_input_is_an_error_not_null() {
        let adapter = JsonAdapter::new();
        assert!(adapter.parse("").is_err());
        assert!(adapter.parse("   ").is_err());
    }

    #[test]
    fn round_trip_preserves_value() {
        let adapter = JsonAdapter::new();
        let value = json!({"b": 1, "a": [true, null], "c": "text"});
        let reparsed = adapter.parse(&adapter.serialize(&value)).unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn pretty_output_round_trips_too() {
        let adapter = JsonAdapter::pretty();
        let value = json!({"nested": {"list": [1, 2, 3]}});
        let text = adapter.serialize(&value);
        assert!(text.contains('\n'));
        assert_eq!(adapter.parse(&text).unwrap(), value);
    }
}
