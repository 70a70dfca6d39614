//! Public API for urlstate
//!
//! This crate binds the data model and codec into the surface pages
//! actually consume:
//!
//! - [`Contract`]: one schema bound to parse/stringify/link operations
//! - [`LocationStore`]: the explicit current-location capability
//! - [`LiveQuery`]: the contract applied live to the current location
//! - [`build_link`]: base path + canonical query concatenation
//!
//! The data model (`urlstate-core`) and codec (`urlstate-codec`) are
//! re-exported so downstream crates depend on this crate alone.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod link;
pub mod live;
pub mod location;

pub use contract::Contract;
pub use link::build_link;
pub use live::LiveQuery;
pub use location::{LocationStore, LocationSubscription};

// Re-export the data model and codec at this crate's root
pub use urlstate_codec::{coerce, join_query, parse, parse_query, query_string, split_query, stringify};
pub use urlstate_core::{
    DateValue, FieldKind, FieldSpec, FieldValue, ParamPatch, ParsedValue, RawParams, Result,
    Schema, SchemaError, ValueError,
};
