//! Parser and serializer for query-parameter contracts
//!
//! The two halves of the textual contract over `urlstate-core` types:
//!
//! - [`parse`] / [`parse_query`]: raw pairs → schema-conformant value.
//!   Total and tolerant — malformed input degrades per field, never errors.
//! - [`stringify`] / [`query_string`]: value → canonical ordered pairs /
//!   query fragment, schema-ordered and default-suppressed.
//! - [`split_query`] / [`join_query`]: the form-urlencoded text boundary.
//!
//! Round trip: for any value produced by [`parse`], parsing its canonical
//! query string yields an equal value again.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coerce;
pub mod parse;
pub mod query;
pub mod stringify;

pub use coerce::coerce;
pub use parse::{parse, parse_query};
pub use query::{join_query, split_query};
pub use stringify::{query_string, stringify};
