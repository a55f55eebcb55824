//! Recursive structural merge of two JSON values.
//!
//! The two inputs are conventionally called *source* and *target*: source
//! values win wherever the two sides disagree in kind, and target fills in
//! whatever source leaves absent (null) or unmentioned (missing keys).

use serde_json::{Map, Value};

/// Merge two JSON values into one.
///
/// Both inputs are borrowed and never mutated; the result is freshly owned.
/// The merge is total: every pairing of value kinds produces a result.
///
/// When both sides are the same composite kind the merge recurses; in every
/// other pairing one side is kept whole:
///
/// | Src \ Target | Scalar | Array | Object |
/// |--------------|--------|-------|--------|
/// | Scalar       | Src    | Src   | Src    |
/// | Array        | Src    | Merge | Src    |
/// | Object       | Src    | Src   | Merge  |
///
/// Scalar covers booleans, numbers, and strings. A null source is the one
/// exception to source bias: it yields the target unchanged, whatever the
/// target's kind. In particular `merge(Null, Null)` is `Null`, since the
/// null-source rule fires before the generic fallback.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let source = json!({"level1": {"key1": "Src"}});
/// let target = json!({"level1": {"key1": "target", "level2": {"key2": "value2"}}});
/// assert_eq!(
///     jom_merge::merge(&source, &target),
///     json!({"level1": {"key1": "Src", "level2": {"key2": "value2"}}}),
/// );
/// ```
pub fn merge(source: &Value, target: &Value) -> Value {
    match (source, target) {
        (Value::Object(src), Value::Object(tgt)) => Value::Object(merge_objects(src, tgt)),
        (Value::Array(src), Value::Array(tgt)) => Value::Array(merge_arrays(src, tgt)),
        (Value::Null, _) => target.clone(),
        _ => source.clone(),
    }
}

/// Merge two JSON objects into their key union.
///
/// Keys present on both sides recurse through [`merge`]; keys present on
/// only one side are carried over unchanged. No key is ever dropped.
/// Result ordering is source keys first (in source order), then the
/// target-only keys (in target order).
pub fn merge_objects(
    source: &Map<String, Value>,
    target: &Map<String, Value>,
) -> Map<String, Value> {
    let mut result = Map::new();

    for (key, src_value) in source {
        match target.get(key) {
            Some(tgt_value) => {
                result.insert(key.clone(), merge(src_value, tgt_value));
            }
            None => {
                result.insert(key.clone(), src_value.clone());
            }
        }
    }

    // Keys the source side never mentioned.
    for (key, tgt_value) in target {
        if !result.contains_key(key) {
            result.insert(key.clone(), tgt_value.clone());
        }
    }

    result
}

/// Merge two JSON arrays by concatenation.
///
/// Source elements first, then target elements, in their original order.
/// No element-wise merge and no de-duplication: the result length is always
/// the sum of the input lengths.
pub fn merge_arrays(source: &[Value], target: &[Value]) -> Vec<Value> {
    let mut result = Vec::with_capacity(source.len() + target.len());
    result.extend_from_slice(source);
    result.extend_from_slice(target);
    result
}
