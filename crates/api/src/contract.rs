//! One schema, bound once, used everywhere
//!
//! A [`Contract`] ties a validated schema to the parser, serializer, and
//! link builder so call sites never pass the schema around explicitly.
//! Pages define their contract once at module load and share it.

use crate::link::build_link;
use crate::live::LiveQuery;
use crate::location::LocationStore;
use std::sync::Arc;
use urlstate_core::{
    FieldSpec, ParamPatch, ParsedValue, RawParams, Schema, SchemaError, ValueError,
};

/// A query-parameter contract bound to one schema
///
/// Cheap to clone (the schema is shared behind `Arc`). The only fallible
/// step is construction, which propagates [`SchemaError`] from schema
/// validation; every bound operation afterwards is total or strictly
/// typed.
///
/// ```
/// use urlstate_api::Contract;
/// use urlstate_core::{FieldSpec, FieldValue};
///
/// let contract = Contract::new(vec![
///     FieldSpec::text("industry"),
///     FieldSpec::choice("date", ["All time", "Last 7 days"])
///         .with_default(FieldValue::Choice("All time".into())),
/// ])?;
///
/// let value = contract.parse_query("industry=ai&date=Last+7+days");
/// assert_eq!(contract.query_string(&value), "industry=ai&date=Last+7+days");
/// # Ok::<(), urlstate_core::SchemaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Contract {
    schema: Arc<Schema>,
}

impl Contract {
    /// Define a contract from field specifications
    ///
    /// Fails only if the schema itself is structurally invalid.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        Ok(Contract::from_schema(Schema::new(fields)?))
    }

    /// Wrap an already-validated schema
    pub fn from_schema(schema: Schema) -> Self {
        Contract {
            schema: Arc::new(schema),
        }
    }

    /// The bound schema
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// A value with every field at its declared default
    pub fn defaults(&self) -> ParsedValue {
        ParsedValue::defaults(&self.schema)
    }

    /// Parse raw pairs against the bound schema (total, tolerant)
    pub fn parse(&self, raw: &RawParams) -> ParsedValue {
        urlstate_codec::parse(&self.schema, raw)
    }

    /// Parse a query-string fragment against the bound schema
    pub fn parse_query(&self, query: &str) -> ParsedValue {
        urlstate_codec::parse_query(&self.schema, query)
    }

    /// Canonical ordered pairs for a value of this contract
    pub fn stringify(&self, value: &ParsedValue) -> Vec<(String, String)> {
        urlstate_codec::stringify(value)
    }

    /// Canonical query-string fragment for a value of this contract
    pub fn query_string(&self, value: &ParsedValue) -> String {
        urlstate_codec::query_string(value)
    }

    /// Build a link over the contract's defaults
    ///
    /// For call sites without a location context: effective value =
    /// defaults with `patch` applied, rendered as `base_path?query` (the
    /// `?` is omitted when the query is empty). Use
    /// [`LiveQuery::build_link`] to merge over the current URL instead.
    pub fn build_link(&self, base_path: &str, patch: &ParamPatch) -> Result<String, ValueError> {
        Ok(build_link(base_path, &patch.apply(&self.defaults())?))
    }

    /// Bind this contract to a location, yielding a live accessor
    pub fn bind(&self, location: Arc<LocationStore>) -> LiveQuery {
        LiveQuery::new(self.clone(), location)
    }
}
