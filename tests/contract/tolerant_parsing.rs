//! Parsing is total: garbage in, conformant value out
//!
//! The URL is semi-trusted, user-editable input. Nothing a user types into
//! the address bar may break navigation: per-field failures degrade to
//! default/unset, unknown keys vanish, and the parser never errors.

use crate::common::LISTING;
use urlstate::RawParams;

fn assert_conformant(query: &str) {
    let v = LISTING.parse_query(query);
    for (spec, slot) in v.iter() {
        if let Some(value) = slot {
            assert!(
                spec.kind().matches(value),
                "field {} conforms for input {query:?}",
                spec.key()
            );
        }
    }
}

#[test]
fn never_fails_on_garbage() {
    for query in [
        "",
        "?",
        "&",
        "&&&&",
        "=",
        "==",
        "=&=",
        "a",
        "%",
        "%%",
        "%zz",
        "page",
        "page=",
        "page==2",
        "=value",
        "q=%E2%28%A1",
        "\u{0}=\u{0}",
        "page=9999999999999999999999999999999",
        "page=0x10",
        "since=0000-00-00",
        "date=",
        "subscribe=TRUE",
    ] {
        assert_conformant(query);
    }
}

#[test]
fn malformed_number_uses_default() {
    let v = LISTING.parse_query("page=two");
    assert_eq!(v.number("page"), Some(1.0));
}

#[test]
fn overflowing_number_still_finite() {
    // f64 parses huge literals to infinity; non-finite is rejected and the
    // default takes over.
    let v = LISTING.parse_query("page=1e999");
    assert_eq!(v.number("page"), Some(1.0));
}

#[test]
fn malformed_bool_uses_default() {
    for bad in ["TRUE", "True", "1", "yes", "on", ""] {
        let v = LISTING.parse_query(&format!("subscribe={bad}"));
        assert_eq!(v.boolean("subscribe"), Some(false), "subscribe={bad}");
    }
}

#[test]
fn malformed_date_left_unset() {
    for bad in ["tomorrow", "2024-13-01", "2024-01-32", "15/01/2024", "T", ""] {
        let v = LISTING.parse_query(&format!("since={bad}"));
        assert!(!v.is_set("since"), "since={bad}");
    }
}

#[test]
fn out_of_set_choice_uses_default() {
    let v = LISTING.parse_query("date=Yesterday");
    assert_eq!(v.choice("date"), Some("All time"));
}

#[test]
fn choice_membership_is_case_sensitive() {
    let v = LISTING.parse_query("date=last+7+days");
    assert_eq!(v.choice("date"), Some("All time"));
}

#[test]
fn required_field_absent_parses_unset() {
    let v = LISTING.parse_query("industry=ai");
    assert!(!v.is_set("q"));
}

#[test]
fn unknown_keys_are_invisible() {
    let noisy = LISTING.parse_query("utm_source=mail&industry=ai&fbclid=xyz&ref=home");
    let clean = LISTING.parse_query("industry=ai");
    assert_eq!(noisy, clean);
}

#[test]
fn unknown_keys_only_is_same_as_empty() {
    let noisy = LISTING.parse_query("utm_source=mail&fbclid=xyz");
    let clean = LISTING.parse_query("");
    assert_eq!(noisy, clean);
}

#[test]
fn duplicate_keys_last_occurrence_wins() {
    let raw = RawParams::from_pairs([("industry", "ai"), ("industry", "fintech")]);
    let v = LISTING.parse(&raw);
    assert_eq!(v.text("industry"), Some("fintech"));
}

#[test]
fn one_bad_field_does_not_poison_the_rest() {
    let v = LISTING.parse_query("industry=ai&page=junk&subscribe=true&date=nope&q=rust");
    assert_eq!(v.text("industry"), Some("ai"));
    assert_eq!(v.number("page"), Some(1.0));
    assert_eq!(v.boolean("subscribe"), Some(true));
    assert_eq!(v.choice("date"), Some("All time"));
    assert_eq!(v.text("q"), Some("rust"));
}
