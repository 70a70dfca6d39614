//! Live accessor: the contract applied to the current location
//!
//! A [`LiveQuery`] is a [`Contract`](crate::Contract) bound to a
//! [`LocationStore`]. Reads re-parse the store's current search text;
//! subscriptions re-parse on every change and hand the observer a fresh,
//! fully conformant value. No blocking, no timers, no network — the only
//! trigger is the hosting layer's `set_search`.

use crate::contract::Contract;
use crate::link::build_link;
use crate::location::{LocationStore, LocationSubscription};
use std::sync::Arc;
use urlstate_core::{ParamPatch, ParsedValue, ValueError};

/// Read-only live view of the current location through one contract
#[derive(Debug, Clone)]
pub struct LiveQuery {
    contract: Contract,
    location: Arc<LocationStore>,
}

impl LiveQuery {
    pub(crate) fn new(contract: Contract, location: Arc<LocationStore>) -> Self {
        LiveQuery { contract, location }
    }

    /// The bound contract
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// The bound location store
    pub fn location(&self) -> &Arc<LocationStore> {
        &self.location
    }

    /// The value decoded from the current location
    ///
    /// Re-parses on every call. Before any location exists, returns the
    /// contract's full-default value instead of failing — non-interactive
    /// rendering sees the same shape as everything else.
    pub fn current(&self) -> ParsedValue {
        match self.location.search() {
            Some(text) => self.contract.parse_query(&text),
            None => self.contract.defaults(),
        }
    }

    /// Observe every location change as a freshly parsed value
    ///
    /// The callback runs synchronously on the navigating thread with the
    /// new value; intermediate states are never observable. Dropping the
    /// returned guard unregisters the observer.
    pub fn subscribe(
        &self,
        callback: impl Fn(ParsedValue) + Send + Sync + 'static,
    ) -> LocationSubscription {
        let contract = self.contract.clone();
        self.location.watch(Box::new(move |text| {
            callback(contract.parse_query(text));
        }))
    }

    /// Build a link merging overrides over the current value
    ///
    /// Effective value = [`current`](Self::current) with `patch` applied
    /// field-by-field, rendered as `base_path?query` (the `?` is omitted
    /// when the canonical query is empty). Pure: the location itself is
    /// never touched.
    pub fn build_link(&self, base_path: &str, patch: &ParamPatch) -> Result<String, ValueError> {
        Ok(build_link(base_path, &patch.apply(&self.current())?))
    }
}
