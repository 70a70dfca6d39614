//! Schema definition: field specifications and validated schemas
//!
//! A [`Schema`] is an immutable, ordered set of [`FieldSpec`]s describing
//! one page's query-parameter contract. Declaration order defines canonical
//! serialization order. Schemas are constructed once (typically at module
//! load, behind a `Lazy`/`Arc`) and never mutated.
//!
//! Construction is the only place structural invalidity can surface:
//! duplicate keys, empty choice sets, and defaults that do not satisfy
//! their field's kind are rejected with [`SchemaError`].

use crate::error::{Result, SchemaError};
use crate::kind::FieldKind;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One field in a schema: key, kind, optionality, and default
///
/// Built with the kind-specific constructors and chained builders:
///
/// ```
/// use urlstate_core::{FieldSpec, FieldValue};
///
/// let industry = FieldSpec::text("industry");
/// let page = FieldSpec::number("page").with_default(1.0);
/// let date = FieldSpec::choice("date", ["All time", "Last 7 days"])
///     .with_default(FieldValue::Choice("All time".into()));
/// let q = FieldSpec::text("q").required();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    key: String,
    kind: FieldKind,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<FieldValue>,
}

impl FieldSpec {
    /// Create a field with an explicit kind
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        FieldSpec {
            key: key.into(),
            kind,
            required: false,
            default: None,
        }
    }

    /// Free-form text field
    pub fn text(key: impl Into<String>) -> Self {
        FieldSpec::new(key, FieldKind::Text)
    }

    /// Finite decimal number field
    pub fn number(key: impl Into<String>) -> Self {
        FieldSpec::new(key, FieldKind::Number)
    }

    /// Boolean field (`true` / `false`)
    pub fn boolean(key: impl Into<String>) -> Self {
        FieldSpec::new(key, FieldKind::Bool)
    }

    /// Choice field over a fixed literal set
    pub fn choice(
        key: impl Into<String>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        FieldSpec::new(
            key,
            FieldKind::Choice(allowed.into_iter().map(Into::into).collect()),
        )
    }

    /// Calendar-date / date-time field
    pub fn date(key: impl Into<String>) -> Self {
        FieldSpec::new(key, FieldKind::Date)
    }

    /// Mark the field required (builder)
    ///
    /// Parsing stays total either way: a required field that is absent and
    /// has no default parses as unset, exactly like an optional one. The
    /// flag records intent and is surfaced via [`FieldSpec::is_required`].
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a default value (builder)
    ///
    /// The default must satisfy the field's kind; this is checked when the
    /// schema is constructed, not here. Choice defaults are spelled
    /// explicitly: `.with_default(FieldValue::Choice("All time".into()))`.
    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// The query-parameter name
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The declared kind
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Whether the field was declared required
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The declared default, if any
    pub fn default_value(&self) -> Option<&FieldValue> {
        self.default.as_ref()
    }
}

/// An immutable, ordered, validated query-parameter schema
///
/// Field declaration order is canonical: serialization always emits keys in
/// this order regardless of how a value was assembled. Lookup by key is
/// O(1) through an index built at construction.
///
/// Serialization round-trips through the field list; deserialization runs
/// the same validation as [`Schema::new`], so an invalid schema can never
/// enter the process through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldSpec>", into = "Vec<FieldSpec>")]
pub struct Schema {
    fields: Vec<FieldSpec>,
    by_key: HashMap<String, usize>,
}

impl Schema {
    /// Construct a schema from field specifications, in declaration order
    ///
    /// Fails with [`SchemaError`] if any key is duplicated, a choice field
    /// has an empty allowed set, or a declared default does not satisfy its
    /// field's kind (including choice membership).
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self> {
        let mut by_key = HashMap::with_capacity(fields.len());
        for (idx, spec) in fields.iter().enumerate() {
            if by_key.insert(spec.key().to_string(), idx).is_some() {
                return Err(SchemaError::DuplicateKey(spec.key().to_string()));
            }
            if let FieldKind::Choice(allowed) = spec.kind() {
                if allowed.is_empty() {
                    return Err(SchemaError::EmptyChoices {
                        key: spec.key().to_string(),
                    });
                }
            }
            if let Some(default) = spec.default_value() {
                if !spec.kind().matches(default) {
                    return Err(match (spec.kind(), default) {
                        (FieldKind::Choice(_), FieldValue::Choice(value)) => {
                            SchemaError::DefaultNotAllowed {
                                key: spec.key().to_string(),
                                value: value.clone(),
                            }
                        }
                        _ => SchemaError::DefaultKindMismatch {
                            key: spec.key().to_string(),
                            expected: spec.kind().name(),
                            actual: default.kind_name(),
                        },
                    });
                }
            }
        }
        Ok(Schema { fields, by_key })
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by key
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.index_of(key).map(|idx| &self.fields[idx])
    }

    /// Declaration-order position of a key
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    /// Whether the schema declares the key
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Vec<FieldSpec>> for Schema {
    type Error = SchemaError;

    fn try_from(fields: Vec<FieldSpec>) -> Result<Self> {
        Schema::new(fields)
    }
}

impl From<Schema> for Vec<FieldSpec> {
    fn from(schema: Schema) -> Self {
        schema.fields
    }
}
