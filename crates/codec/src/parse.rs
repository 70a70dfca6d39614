//! Total, tolerant decoding of raw query pairs
//!
//! Parsing never fails and never panics: the URL is semi-trusted,
//! user-editable input, and a corrupt or hand-edited query string must
//! degrade gracefully instead of breaking navigation. Every per-field
//! problem — missing value, malformed number, out-of-set choice, bad date —
//! resolves to the field's default or to unset, and is visible only as a
//! `trace`-level event.

use crate::coerce::coerce;
use crate::query::split_query;
use std::sync::Arc;
use urlstate_core::{ParsedValue, RawParams, Schema};

/// Decode raw pairs into a schema-conformant value
///
/// Per field, in declaration order: look up the key (last occurrence wins),
/// coerce to the declared kind, and on absence or coercion failure fall
/// back to the declared default, else leave the field unset. Keys not
/// declared in the schema are ignored entirely.
pub fn parse(schema: &Arc<Schema>, raw: &RawParams) -> ParsedValue {
    let mut slots = Vec::with_capacity(schema.len());
    for spec in schema.fields() {
        let coerced = raw.get(spec.key()).and_then(|text| {
            let value = coerce(spec.kind(), text);
            if value.is_none() {
                tracing::trace!(
                    target: "urlstate::parse",
                    key = spec.key(),
                    kind = spec.kind().name(),
                    raw = text,
                    "value failed coercion, treating as absent"
                );
            }
            value
        });
        let resolved = coerced.or_else(|| spec.default_value().cloned());
        if resolved.is_none() && spec.is_required() {
            tracing::trace!(
                target: "urlstate::parse",
                key = spec.key(),
                "required field absent with no default, left unset"
            );
        }
        slots.push(resolved);
    }
    ParsedValue::from_slots(schema, slots)
}

/// Decode straight from a query-string fragment
///
/// Splits with [`split_query`] (percent- and plus-decoding included), then
/// parses. A leading `?` is tolerated.
pub fn parse_query(schema: &Arc<Schema>, query: &str) -> ParsedValue {
    parse(schema, &split_query(query))
}
