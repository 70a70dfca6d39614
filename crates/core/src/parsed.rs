//! Schema-conformant parsed values and partial overrides
//!
//! This module defines:
//! - ParsedValue: a fully conformant decoded value (the parser's output)
//! - ParamPatch: partial overrides applied field-by-field when building links
//!
//! ## Conformance
//!
//! A `ParsedValue` carries its `Arc<Schema>` and one optional slot per
//! declared field: no extra keys, no kind mismatches, ever. Instances are
//! immutable — the update API returns new values instead of mutating in
//! place, so any instance can be shared freely across threads.

use crate::error::ValueError;
use crate::schema::{FieldSpec, Schema};
use crate::value::{DateValue, FieldValue};
use std::sync::Arc;

/// A typed value decoded from (or destined for) a query string
///
/// Always fully conforms to its schema. Obtained from a parser, from
/// [`ParsedValue::defaults`], or by functional update of another instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue {
    schema: Arc<Schema>,
    slots: Vec<Option<FieldValue>>,
}

impl ParsedValue {
    /// A value with every field at its declared default (unset otherwise)
    pub fn defaults(schema: &Arc<Schema>) -> Self {
        let slots = schema
            .fields()
            .iter()
            .map(|spec| spec.default_value().cloned())
            .collect();
        ParsedValue {
            schema: Arc::clone(schema),
            slots,
        }
    }

    /// Assemble a value from per-field slots in declaration order
    ///
    /// Tolerant by policy: slots that do not conform to their field's kind
    /// degrade to unset, and the slot list is truncated or padded to the
    /// schema's length. Conforming input passes through unchanged.
    pub fn from_slots(schema: &Arc<Schema>, slots: Vec<Option<FieldValue>>) -> Self {
        let mut iter = slots.into_iter();
        let slots = schema
            .fields()
            .iter()
            .map(|spec| {
                iter.next()
                    .flatten()
                    .filter(|value| spec.kind().matches(value))
            })
            .collect();
        ParsedValue {
            schema: Arc::clone(schema),
            slots,
        }
    }

    /// The schema this value conforms to
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// The value for a key, if set
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.schema
            .index_of(key)
            .and_then(|idx| self.slots[idx].as_ref())
    }

    /// Whether the field is set (explicitly or via its default)
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Text value for a key
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    /// Number value for a key
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FieldValue::as_number)
    }

    /// Boolean value for a key
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FieldValue::as_bool)
    }

    /// Choice value for a key
    pub fn choice(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_choice)
    }

    /// Date value for a key
    pub fn date(&self, key: &str) -> Option<DateValue> {
        self.get(key).and_then(FieldValue::as_date)
    }

    /// Iterate fields with their slots, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&FieldSpec, Option<&FieldValue>)> {
        self.schema
            .fields()
            .iter()
            .zip(self.slots.iter().map(Option::as_ref))
    }

    /// Functional update: a new value with `key` set
    ///
    /// Fails with [`ValueError`] when the key is unknown or the value does
    /// not match the field's declared kind.
    pub fn with(&self, key: &str, value: impl Into<FieldValue>) -> Result<Self, ValueError> {
        let idx = self
            .schema
            .index_of(key)
            .ok_or_else(|| ValueError::UnknownKey(key.to_string()))?;
        let value = value.into();
        let spec = &self.schema.fields()[idx];
        if !spec.kind().matches(&value) {
            return Err(ValueError::KindMismatch {
                key: key.to_string(),
                expected: spec.kind().name(),
                actual: value.kind_name(),
            });
        }
        let mut next = self.clone();
        next.slots[idx] = Some(value);
        Ok(next)
    }

    /// Functional update: a new value with `key` unset
    pub fn without(&self, key: &str) -> Result<Self, ValueError> {
        let idx = self
            .schema
            .index_of(key)
            .ok_or_else(|| ValueError::UnknownKey(key.to_string()))?;
        let mut next = self.clone();
        next.slots[idx] = None;
        Ok(next)
    }

    /// Export set fields as a JSON object for rendering layers
    ///
    /// Numbers become JSON numbers, bools become JSON booleans, everything
    /// else becomes its canonical string. Unset fields are omitted.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (spec, slot) in self.iter() {
            let Some(value) = slot else { continue };
            let json = match value {
                FieldValue::Number(n) => serde_json::Number::from_f64(*n)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
                FieldValue::Bool(b) => serde_json::Value::Bool(*b),
                other => serde_json::Value::String(other.to_string()),
            };
            map.insert(spec.key().to_string(), json);
        }
        serde_json::Value::Object(map)
    }
}

/// Partial overrides for link building
///
/// An ordered list of `set`/`clear` entries applied field-by-field over a
/// base value; later entries for the same key win. Built with the chained
/// builder style:
///
/// ```
/// use urlstate_core::ParamPatch;
///
/// let patch = ParamPatch::new().set("page", 2.0).clear("industry");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamPatch {
    entries: Vec<(String, Option<FieldValue>)>,
}

impl ParamPatch {
    /// An empty patch (applies as identity)
    pub fn new() -> Self {
        ParamPatch::default()
    }

    /// Override a field with a value (builder)
    pub fn set(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.entries.push((key.into(), Some(value.into())));
        self
    }

    /// Clear a field to unset (builder)
    pub fn clear(mut self, key: impl Into<String>) -> Self {
        self.entries.push((key.into(), None));
        self
    }

    /// Whether the patch has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply over a base value, producing a new value
    ///
    /// Entries apply in order. Fails with [`ValueError`] on unknown keys or
    /// kind mismatches — overrides come from code, not from URLs, so they
    /// get strict treatment.
    pub fn apply(&self, base: &ParsedValue) -> Result<ParsedValue, ValueError> {
        let mut out = base.clone();
        for (key, entry) in &self.entries {
            out = match entry {
                Some(value) => out.with(key, value.clone())?,
                None => out.without(key)?,
            };
        }
        Ok(out)
    }
}
