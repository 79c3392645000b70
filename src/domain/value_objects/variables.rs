//! Template variables
//!
//! Variables are an open, string-keyed map of JSON-compatible values so
//! they round-trip through the lockfile untouched.

use std::collections::BTreeMap;

/// Variable map passed to the template renderer
pub type Variables = BTreeMap<String, serde_json::Value>;

/// Overlay `overrides` onto `base`, returning the merged map.
pub fn merge_variables(base: &Variables, overrides: &Variables) -> Variables {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Parse a `key=value` assignment; `true`/`false`/numbers become typed values.
pub fn parse_assignment(raw: &str) -> Option<(String, serde_json::Value)> {
    let (key, value) = raw.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = value.trim();
    let parsed = match value {
        "true" => serde_json::Value::Bool(true),
        "false" => serde_json::Value::Bool(false),
        _ => match value.parse::<i64>() {
            Ok(n) => serde_json::Value::from(n),
            Err(_) => serde_json::Value::String(value.to_string()),
        },
    };
    Some((key.to_string(), parsed))
}
