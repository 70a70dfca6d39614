//! Core types for urlstate
//!
//! This crate defines the data model for query-parameter contracts:
//! - FieldKind: closed set of parameter kinds (text, number, bool, choice, date)
//! - FieldValue / DateValue: one typed value of a declared kind
//! - FieldSpec / Schema: immutable, ordered, validated parameter schemas
//! - RawParams: unvalidated (key, text) pairs extracted from a query string
//! - ParsedValue: fully schema-conformant decoded structure
//! - ParamPatch: partial overrides applied when building links
//! - SchemaError / ValueError: error type hierarchy
//!
//! Everything here is pure and immutable: schemas are constructed once and
//! shared behind `Arc`, parsed values are replaced rather than mutated, and
//! no type performs I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod kind;
pub mod parsed;
pub mod raw;
pub mod schema;
pub mod value;

pub use error::{Result, SchemaError, ValueError};
pub use kind::FieldKind;
pub use parsed::{ParamPatch, ParsedValue};
pub use raw::RawParams;
pub use schema::{FieldSpec, Schema};
pub use value::{DateValue, FieldValue};
