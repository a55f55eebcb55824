//! Text-in, text-out merge: parse both sides, merge, render the result.

use tracing::debug;

use serde_json::Value;

use crate::adapter::{JsonAdapter, TextAdapter};
use crate::error::{ParseError, Side, TextResult};

/// Merge two pieces of structured text through the given adapter.
///
/// Parses both inputs, merges the resulting trees with
/// [`jom_merge::merge`], and renders the merged tree back to text.
/// Fails with a [`ParseError`] naming the offending side if either input
/// is malformed; the merge step itself cannot fail.
pub fn merge_text(
    adapter: &dyn TextAdapter,
    source_text: &str,
    target_text: &str,
) -> TextResult<String> {
    let source = parse_side(adapter, Side::Source, source_text)?;
    let target = parse_side(adapter, Side::Target, target_text)?;

    debug!(
        source_kind = kind_name(&source),
        target_kind = kind_name(&target),
        "merging parsed inputs"
    );
    let merged = jom_merge::merge(&source, &target);

    Ok(adapter.serialize(&merged))
}

/// [`merge_text`] with the default compact [`JsonAdapter`].
///
/// # Examples
///
/// ```
/// let merged = jom_text::merge_json_text(
///     r#"{"name": "json-merge-src"}"#,
///     r#"{"name": "json-merge-target"}"#,
/// ).unwrap();
/// assert_eq!(merged, r#"{"name":"json-merge-src"}"#);
/// ```
pub fn merge_json_text(source_text: &str, target_text: &str) -> TextResult<String> {
    merge_text(&JsonAdapter::new(), source_text, target_text)
}

fn parse_side(adapter: &dyn TextAdapter, side: Side, text: &str) -> TextResult<Value> {
    debug!(%side, len = text.len(), "parsing merge input");
    adapter
        .parse(text)
        .map_err(|cause| ParseError { side, cause })
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
