//! Field values and their canonical textual form
//!
//! This module defines:
//! - FieldValue: one typed value of a declared kind
//! - DateValue: a calendar date or an RFC 3339 instant
//!
//! ## Canonical Rendering
//!
//! `Display` is the single source of truth for how a value appears in a
//! query string:
//!
//! - numbers render as the shortest decimal that parses back to the same
//!   value (no trailing zeros beyond input precision)
//! - bools render as the same `true`/`false` literals accepted on input
//! - dates render as `YYYY-MM-DD` (calendar date) or RFC 3339 (instant)
//! - text and choice render verbatim
//!
//! Rendering then re-parsing any conforming value yields an equal value.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date-kind parameter value
///
/// Query parameters carry either a bare calendar date (`2024-01-15`) or a
/// full RFC 3339 instant (`2024-01-15T10:00:00+00:00`); the two forms stay
/// distinct so each renders back in the shape it arrived in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum DateValue {
    /// Calendar date without time of day
    Day(NaiveDate),
    /// RFC 3339 date-time with offset
    Instant(DateTime<FixedOffset>),
}

impl DateValue {
    /// Parse a date value from its textual form
    ///
    /// Accepts an ISO-8601 calendar date or an RFC 3339 date-time.
    /// Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        if text.contains('T') || text.contains('t') {
            DateTime::parse_from_rfc3339(text).ok().map(DateValue::Instant)
        } else {
            text.parse::<NaiveDate>().ok().map(DateValue::Day)
        }
    }
}

// Instant equality compares instant AND offset, so value equality coincides
// with canonical-string equality. chrono's derived equality would call
// 10:00:00+00:00 and 11:00:00+01:00 equal even though they render apart.
impl PartialEq for DateValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DateValue::Day(a), DateValue::Day(b)) => a == b,
            (DateValue::Instant(a), DateValue::Instant(b)) => {
                a == b && a.offset() == b.offset()
            }
            _ => false,
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DateValue::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

/// One typed query-parameter value
///
/// Every value belongs to exactly one [`FieldKind`](crate::FieldKind);
/// values of different kinds are never equal, even when their textual forms
/// coincide (`Text("true") != Bool(true)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Free-form text
    Text(String),
    /// Finite decimal number
    Number(f64),
    /// Boolean
    Bool(bool),
    /// Member of a choice field's allowed set
    Choice(String),
    /// Calendar date or instant
    Date(DateValue),
}

impl FieldValue {
    /// Short kind name (for error messages and diagnostics)
    pub const fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Bool(_) => "bool",
            FieldValue::Choice(_) => "choice",
            FieldValue::Date(_) => "date",
        }
    }

    /// Get as `&str` if this is a Text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as `f64` if this is a Number value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as `bool` if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as `&str` if this is a Choice value
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            FieldValue::Choice(s) => Some(s),
            _ => None,
        }
    }

    /// Get as [`DateValue`] if this is a Date value
    pub fn as_date(&self) -> Option<DateValue> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    /// Canonical textual rendering (the inverse of per-kind coercion)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Date(d) => write!(f, "{}", d),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(DateValue::Day(d))
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        FieldValue::Date(DateValue::Instant(dt))
    }
}

impl From<DateValue> for FieldValue {
    fn from(d: DateValue) -> Self {
        FieldValue::Date(d)
    }
}
