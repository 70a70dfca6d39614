//! urlstate - typed, round-trip-stable query-parameter contracts
//!
//! urlstate turns one declarative schema per page into a validating parser,
//! a canonical serializer, a live accessor over the current URL, and a
//! link builder — so listing filters, search state, and pagination live in
//! the URL without any page hand-rolling string code.
//!
//! # Quick Start
//!
//! ```
//! use urlstate::{Contract, FieldSpec, FieldValue, LocationStore, ParamPatch};
//!
//! let contract = Contract::new(vec![
//!     FieldSpec::text("industry"),
//!     FieldSpec::choice("date", ["All time", "Last 7 days", "This month"])
//!         .with_default(FieldValue::Choice("All time".into())),
//!     FieldSpec::number("page").with_default(1.0),
//! ])?;
//!
//! // URL -> typed value (total: malformed input degrades per field)
//! let value = contract.parse_query("industry=ai&date=Last+7+days");
//! assert_eq!(value.text("industry"), Some("ai"));
//!
//! // typed value -> canonical URL (schema-ordered, defaults suppressed)
//! assert_eq!(contract.query_string(&value), "industry=ai&date=Last+7+days");
//!
//! // live accessor + link builder
//! let location = LocationStore::new();
//! let live = contract.bind(location.clone());
//! location.set_search("industry=ai");
//! let next_page = live.build_link("/listings", &ParamPatch::new().set("page", 2.0))?;
//! assert_eq!(next_page, "/listings?industry=ai&page=2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Design
//!
//! Parsing is tolerant by design: the URL is semi-trusted, user-editable
//! input, so per-field failures fall back to defaults instead of erroring.
//! Serialization is canonical: declaration-ordered, default-suppressed,
//! deterministic. The only hard failure in the system is constructing a
//! structurally invalid schema.

// Re-export the public API from urlstate-api
pub use urlstate_api::*;
