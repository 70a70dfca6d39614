//! Error types for query-parameter contracts
//!
//! Two failure families exist, and only two:
//!
//! - [`SchemaError`]: a structurally invalid schema, raised at construction
//!   time. This is a development-time defect; once a [`Schema`](crate::Schema)
//!   exists, no operation over it can fail this way.
//! - [`ValueError`]: misuse of the programmatic update API (unknown key,
//!   wrong kind). Parsing never produces it — malformed URL input degrades
//!   per field instead of erroring.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use thiserror::Error;

/// Result type alias for schema construction
pub type Result<T> = std::result::Result<T, SchemaError>;

/// A structurally invalid schema definition
///
/// Raised only while constructing a [`Schema`](crate::Schema). Never expected
/// at runtime: a schema that constructed once will construct forever.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields declare the same key
    #[error("duplicate field key: {0}")]
    DuplicateKey(String),

    /// A choice field declares no allowed values
    #[error("choice field '{key}' declares no allowed values")]
    EmptyChoices {
        /// Key of the offending field
        key: String,
    },

    /// A declared default does not match the field's kind
    #[error("default for field '{key}' does not match its kind: expected {expected}, got {actual}")]
    DefaultKindMismatch {
        /// Key of the offending field
        key: String,
        /// Name of the declared kind
        expected: &'static str,
        /// Name of the default value's kind
        actual: &'static str,
    },

    /// A choice field's default is outside its allowed set
    #[error("default '{value}' for choice field '{key}' is not among its allowed values")]
    DefaultNotAllowed {
        /// Key of the offending field
        key: String,
        /// The rejected default
        value: String,
    },
}

/// Misuse of the programmatic value-update API
///
/// Raised by functional updates ([`ParsedValue::with`](crate::ParsedValue::with),
/// [`ParsedValue::without`](crate::ParsedValue::without)) and patch
/// application. Parsing is total and never returns this.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The key does not exist in the schema
    #[error("unknown field key: {0}")]
    UnknownKey(String),

    /// The supplied value does not match the field's declared kind
    #[error("value for field '{key}' does not match its kind: expected {expected}, got {actual}")]
    KindMismatch {
        /// Key of the offending field
        key: String,
        /// Name of the declared kind
        expected: &'static str,
        /// Name of the supplied value's kind
        actual: &'static str,
    },
}
