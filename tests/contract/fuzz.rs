//! Property-based fuzzing of the parse/stringify contract

use crate::common::LISTING;
use proptest::prelude::*;
use urlstate::{FieldValue, ParsedValue, RawParams};

/// Keys the schema knows about plus arbitrary noise
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("industry".to_string()),
        Just("date".to_string()),
        Just("page".to_string()),
        Just("subscribe".to_string()),
        Just("since".to_string()),
        Just("q".to_string()),
        "[a-zA-Z0-9_%=&?]{0,12}",
    ]
}

/// Plausible and implausible textual values
fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ai".to_string()),
        Just("Last 7 days".to_string()),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("2024-01-15".to_string()),
        Just("2024-01-15T10:00:00Z".to_string()),
        "-?[0-9]{1,10}(\\.[0-9]{1,4})?",
        ".{0,24}",
    ]
}

fn arb_raw() -> impl Strategy<Value = RawParams> {
    prop::collection::vec((arb_key(), arb_value()), 0..16)
        .prop_map(RawParams::from_pairs)
}

/// A generated value that genuinely conforms to the listing schema
fn arb_parsed() -> impl Strategy<Value = ParsedValue> {
    (
        prop::option::of(".{0,16}"),
        prop::option::of(0usize..3),
        prop::option::of(-1000i32..1000),
        prop::option::of(any::<bool>()),
        prop::option::of(0u32..3650),
        prop::option::of(".{0,16}"),
    )
        .prop_map(|(industry, date, page, subscribe, day_offset, q)| {
            let choices = ["All time", "Last 7 days", "This month"];
            let mut v = LISTING.defaults();
            if let Some(s) = industry {
                v = v.with("industry", s.as_str()).unwrap();
            }
            if let Some(i) = date {
                v = v.with("date", FieldValue::Choice(choices[i].into())).unwrap();
            }
            if let Some(n) = page {
                v = v.with("page", f64::from(n)).unwrap();
            }
            if let Some(b) = subscribe {
                v = v.with("subscribe", b).unwrap();
            }
            if let Some(d) = day_offset {
                let day = chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(u64::from(d)))
                    .unwrap();
                v = v.with("since", day).unwrap();
            }
            if let Some(s) = q {
                v = v.with("q", s.as_str()).unwrap();
            }
            v
        })
}

proptest! {
    /// Parsing any raw pairs is total and yields a conformant value.
    #[test]
    fn parse_is_total_and_conformant(raw in arb_raw()) {
        let v = LISTING.parse(&raw);
        for (spec, slot) in v.iter() {
            if let Some(value) = slot {
                prop_assert!(spec.kind().matches(value), "field {} conforms", spec.key());
            }
        }
    }

    /// Unknown keys never influence the result.
    #[test]
    fn unknown_keys_removable(raw in arb_raw()) {
        let v = LISTING.parse(&raw);
        let filtered: RawParams = raw
            .iter()
            .filter(|(k, _)| LISTING.schema().contains(k))
            .map(|(k, val)| (k.to_string(), val.to_string()))
            .collect();
        prop_assert_eq!(LISTING.parse(&filtered), v);
    }

    /// Whatever parse produced, stringify/parse brings it back unchanged.
    #[test]
    fn parse_output_roundtrips(raw in arb_raw()) {
        let v = LISTING.parse(&raw);
        let pairs: RawParams = LISTING.stringify(&v).into_iter().collect();
        prop_assert_eq!(LISTING.parse(&pairs), v);
    }

    /// Conforming values survive the full textual trip, encoding included.
    #[test]
    fn constructed_values_roundtrip_through_text(v in arb_parsed()) {
        let query = LISTING.query_string(&v);
        prop_assert_eq!(LISTING.parse_query(&query), v);
    }

    /// Stringify is idempotent across a parse.
    #[test]
    fn stringify_idempotent(raw in arb_raw()) {
        let v = LISTING.parse(&raw);
        let once = LISTING.query_string(&v);
        let again = LISTING.query_string(&LISTING.parse_query(&once));
        prop_assert_eq!(once, again);
    }
}
