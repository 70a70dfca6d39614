//! Raw, unvalidated query pairs
//!
//! [`RawParams`] is the parser's input: the ordered `(key, value)` pairs
//! already split out of a URL's query string by the hosting layer. Nothing
//! here is trusted — duplicate keys, unknown keys, and malformed values are
//! all representable and all legal.

use serde::{Deserialize, Serialize};

/// Ordered, unvalidated `(key, value)` pairs from a query string
///
/// Duplicates are preserved; lookup resolves them with last-occurrence-wins,
/// matching how browsers and servers overwrite repeated parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParams {
    pairs: Vec<(String, String)>,
}

impl RawParams {
    /// Create an empty pair list
    pub fn new() -> Self {
        RawParams::default()
    }

    /// Build from an ordered sequence of pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        RawParams {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Append a pair, preserving order and duplicates
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Textual value for a key; the last occurrence wins
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate pairs in original order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs (duplicates counted)
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(String, String)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        RawParams {
            pairs: iter.into_iter().collect(),
        }
    }
}
