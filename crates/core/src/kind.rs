//! Field kind enumeration
//!
//! Every query parameter declares exactly one kind, and all coercion logic
//! matches exhaustively over this enum — adding a kind forces every match
//! site to handle it.
//!
//! ## The Five Kinds
//!
//! | Kind | Textual form | Coercion failure possible |
//! |--------|---------------------------------|---------------------------|
//! | Text | verbatim | no |
//! | Number | finite decimal | yes |
//! | Bool | `true` / `false` | yes |
//! | Choice | member of a fixed literal set | yes |
//! | Date | `YYYY-MM-DD` or RFC 3339 | yes |

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// The kind of a single query parameter
///
/// Kinds are never equal across variants: a number is not a piece of text
/// that happens to contain digits, and a choice is not interchangeable with
/// free-form text. Membership for `Choice` is case-sensitive exact match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free-form text, accepted verbatim
    Text,

    /// Finite decimal number
    ///
    /// Non-finite values (NaN, infinities) have no canonical textual form
    /// and are rejected everywhere.
    Number,

    /// Boolean, written exactly `true` or `false`
    Bool,

    /// One literal out of a fixed, non-empty allowed set
    Choice(Vec<String>),

    /// ISO-8601 calendar date or RFC 3339 date-time
    Date,
}

impl FieldKind {
    /// Short kind name (for error messages and diagnostics)
    pub const fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Bool => "bool",
            FieldKind::Choice(_) => "choice",
            FieldKind::Date => "date",
        }
    }

    /// The allowed literal set, for choice kinds
    pub fn choices(&self) -> Option<&[String]> {
        match self {
            FieldKind::Choice(allowed) => Some(allowed),
            _ => None,
        }
    }

    /// Check whether a value conforms to this kind
    ///
    /// Conformance is strict: kinds never match across variants, a choice
    /// value must be a member of the allowed set, and a number must be
    /// finite.
    pub fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (FieldKind::Text, FieldValue::Text(_)) => true,
            (FieldKind::Number, FieldValue::Number(n)) => n.is_finite(),
            (FieldKind::Bool, FieldValue::Bool(_)) => true,
            (FieldKind::Choice(allowed), FieldValue::Choice(v)) => {
                allowed.iter().any(|a| a == v)
            }
            (FieldKind::Date, FieldValue::Date(_)) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
