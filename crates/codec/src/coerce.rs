//! Per-kind coercion from query text to typed values
//!
//! Coercion is the parser's inner step: one textual value against one
//! declared kind. Failure is expressed as `None`, never as an error —
//! at the sequence level that absence falls back to the field's default or
//! leaves the field unset.

use urlstate_core::{DateValue, FieldKind, FieldValue};

/// Coerce one textual value to a field's kind
///
/// Rules per kind:
/// - text: accepted verbatim; coercion cannot fail
/// - number: must parse as a finite decimal (`NaN`/`inf` rejected)
/// - bool: exactly `true` or `false`
/// - choice: case-sensitive member of the allowed set
/// - date: ISO-8601 calendar date or RFC 3339 date-time
pub fn coerce(kind: &FieldKind, text: &str) -> Option<FieldValue> {
    match kind {
        FieldKind::Text => Some(FieldValue::Text(text.to_string())),
        FieldKind::Number => text
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(FieldValue::Number),
        FieldKind::Bool => match text {
            "true" => Some(FieldValue::Bool(true)),
            "false" => Some(FieldValue::Bool(false)),
            _ => None,
        },
        FieldKind::Choice(allowed) => allowed
            .iter()
            .any(|a| a == text)
            .then(|| FieldValue::Choice(text.to_string())),
        FieldKind::Date => DateValue::parse(text).map(FieldValue::Date),
    }
}
