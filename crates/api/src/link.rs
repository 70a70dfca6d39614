//! Rendering a value as a navigable link

use urlstate_core::ParsedValue;

/// Concatenate a base path with a value's canonical query
///
/// `base_path?query`, with the `?` omitted entirely when the canonical
/// query is empty (every field unset or at its default).
pub fn build_link(base_path: &str, value: &ParsedValue) -> String {
    let query = urlstate_codec::query_string(value);
    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{query}")
    }
}
