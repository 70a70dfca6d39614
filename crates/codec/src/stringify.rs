//! Canonical encoding of parsed values back to query pairs
//!
//! The output is deterministic and diff-friendly: keys always appear in
//! schema declaration order, fields equal to their declared default are
//! suppressed entirely, and each value renders through its canonical
//! `Display` form (the inverse of coercion).

use crate::query::join_query;
use urlstate_core::ParsedValue;

/// Encode a value as ordered `(key, text)` pairs
///
/// A field is omitted when it is unset or when its value equals the
/// field's declared default under kind-appropriate equality; everything
/// else renders canonically. Output order equals schema declaration order
/// regardless of how the value was assembled.
pub fn stringify(value: &ParsedValue) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (spec, slot) in value.iter() {
        match slot {
            None => {}
            Some(v) if spec.default_value() == Some(v) => {}
            Some(v) => pairs.push((spec.key().to_string(), v.to_string())),
        }
    }
    pairs
}

/// Encode a value straight to a query-string fragment
///
/// Form-urlencoded, without a leading `?` — the caller attaches delimiters.
/// Returns an empty string when every field is unset or at its default.
pub fn query_string(value: &ParsedValue) -> String {
    join_query(&stringify(value))
}
