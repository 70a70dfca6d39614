//! Query-string splitting and joining
//!
//! The boundary between pair lists and `&`-separated text. Both directions
//! use form-urlencoding (`application/x-www-form-urlencoded`): percent
//! escapes plus `+` for spaces, which is what anchors and form submissions
//! produce.

use url::form_urlencoded;
use urlstate_core::RawParams;

/// Split a query-string fragment into ordered raw pairs
///
/// Percent- and plus-decodes keys and values. Tolerant of anything:
/// a leading `?`, empty segments, missing `=`, and malformed escapes all
/// produce pairs (or nothing) rather than errors.
pub fn split_query(query: &str) -> RawParams {
    let trimmed = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(trimmed.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Join ordered pairs into a query-string fragment
///
/// Form-urlencodes keys and values (spaces become `+`). No leading `?` or
/// `&` — the caller attaches delimiters. Empty input yields an empty
/// string.
pub fn join_query(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
