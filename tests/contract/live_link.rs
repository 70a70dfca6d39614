//! Live accessor and link builder over a shared location

use crate::common::LISTING;
use parking_lot::Mutex;
use std::sync::Arc;
use urlstate::{LocationStore, ParamPatch};

#[test]
fn current_is_defaults_before_any_navigation() {
    let live = LISTING.bind(LocationStore::new());
    let v = live.current();
    assert_eq!(v, LISTING.defaults());
    assert_eq!(v.choice("date"), Some("All time"));
}

#[test]
fn current_reparses_after_each_navigation() {
    let location = LocationStore::new();
    let live = LISTING.bind(Arc::clone(&location));

    location.set_search("industry=ai&page=2");
    assert_eq!(live.current().number("page"), Some(2.0));

    location.set_search("industry=fintech");
    let v = live.current();
    assert_eq!(v.text("industry"), Some("fintech"));
    assert_eq!(v.number("page"), Some(1.0));
}

#[test]
fn subscription_observes_every_change_in_order() {
    let location = LocationStore::new();
    let live = LISTING.bind(Arc::clone(&location));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = live.subscribe(move |v| sink.lock().push(LISTING.query_string(&v)));

    location.set_search("industry=ai");
    location.set_search("industry=ai&page=2");
    location.set_search("garbage=%%%");

    assert_eq!(
        *seen.lock(),
        vec![
            "industry=ai".to_string(),
            "industry=ai&page=2".to_string(),
            String::new(),
        ]
    );
}

#[test]
fn dropped_subscription_stops_observing() {
    let location = LocationStore::new();
    let live = LISTING.bind(Arc::clone(&location));

    let count = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&count);
    let sub = live.subscribe(move |_| *sink.lock() += 1);

    location.set_search("page=2");
    drop(sub);
    location.set_search("page=3");

    assert_eq!(*count.lock(), 1);
}

#[test]
fn two_contracts_can_share_one_location() {
    let other = urlstate::Contract::new(vec![urlstate::FieldSpec::text("tab")]).unwrap();
    let location = LocationStore::new();
    let listing = LISTING.bind(Arc::clone(&location));
    let tabs = other.bind(Arc::clone(&location));

    location.set_search("industry=ai&tab=pricing");
    assert_eq!(listing.current().text("industry"), Some("ai"));
    assert_eq!(tabs.current().text("tab"), Some("pricing"));
}

#[test]
fn build_link_merges_overrides_over_current() {
    let location = LocationStore::new();
    let live = LISTING.bind(Arc::clone(&location));
    location.set_search("industry=ai&date=Last+7+days&page=2");

    let link = live
        .build_link("/listings", &ParamPatch::new().set("page", 3.0))
        .unwrap();
    assert_eq!(link, "/listings?industry=ai&date=Last+7+days&page=3");
}

#[test]
fn build_link_does_not_mutate_location() {
    let location = LocationStore::new();
    let live = LISTING.bind(Arc::clone(&location));
    location.set_search("industry=ai");

    let _ = live
        .build_link("/listings", &ParamPatch::new().set("page", 9.0))
        .unwrap();
    assert_eq!(location.search(), Some("industry=ai".to_string()));
    assert_eq!(live.current().number("page"), Some(1.0));
}

#[test]
fn build_link_clearing_and_defaults_vanish_from_link() {
    let location = LocationStore::new();
    let live = LISTING.bind(Arc::clone(&location));
    location.set_search("industry=ai&page=5");

    let link = live
        .build_link(
            "/listings",
            &ParamPatch::new().clear("industry").set("page", 1.0),
        )
        .unwrap();
    assert_eq!(link, "/listings");
}

#[test]
fn build_link_without_location_merges_over_defaults() {
    let live = LISTING.bind(LocationStore::new());
    let link = live
        .build_link("/listings", &ParamPatch::new().set("industry", "ai"))
        .unwrap();
    assert_eq!(link, "/listings?industry=ai");
}
