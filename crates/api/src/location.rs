//! The current-location capability
//!
//! Pages do not reach into ambient global state to learn the current URL;
//! they hold a [`LocationStore`] handed to them by the hosting layer. The
//! store carries the current search text and a listener registry, and the
//! hosting layer drives it by calling [`LocationStore::set_search`] on
//! every navigation. Tests drive it the same way, injecting search text
//! directly instead of mutating any global.
//!
//! ## Notification semantics
//!
//! `set_search` swaps the text and then invokes every registered listener
//! synchronously, on the caller's thread, with the freshly swapped text —
//! observers never see a half-updated store. Listeners must not register
//! or drop subscriptions from inside the callback.

use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

type Listener = Box<dyn Fn(&str) + Send + Sync>;

/// Read-only view of the current location's search text, plus change
/// notification
///
/// Before the first [`set_search`](LocationStore::set_search) call no
/// location exists — [`search`](LocationStore::search) returns `None`, and
/// accessors bound to the store fall back to schema defaults
/// (non-interactive rendering).
pub struct LocationStore {
    search: RwLock<Option<String>>,
    listeners: Mutex<BTreeMap<u64, Listener>>,
    next_id: AtomicU64,
    // Handed to subscriptions so guards can unregister without keeping the
    // store alive.
    self_weak: Weak<LocationStore>,
}

impl LocationStore {
    /// Create a store with no location yet
    pub fn new() -> Arc<Self> {
        Arc::new_cyclic(|self_weak| LocationStore {
            search: RwLock::new(None),
            listeners: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(0),
            self_weak: self_weak.clone(),
        })
    }

    /// The current search text, if a location exists
    pub fn search(&self) -> Option<String> {
        self.search.read().clone()
    }

    /// Replace the search text and notify listeners synchronously
    ///
    /// A leading `?` is tolerated downstream; store whatever the hosting
    /// layer hands over.
    pub fn set_search(&self, text: impl Into<String>) {
        let text = text.into();
        *self.search.write() = Some(text.clone());
        tracing::debug!(
            target: "urlstate::location",
            search = %text,
            "location search changed"
        );
        let listeners = self.listeners.lock();
        for listener in listeners.values() {
            listener(&text);
        }
    }

    /// Register a listener for search-text changes
    ///
    /// Invoked with the new text on every [`set_search`](Self::set_search).
    /// The returned guard unregisters on drop; hold it for as long as the
    /// subscription should live.
    pub fn watch(&self, listener: Listener) -> LocationSubscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().insert(id, listener);
        tracing::debug!(target: "urlstate::location", id, "listener registered");
        LocationSubscription {
            store: self.self_weak.clone(),
            id,
        }
    }

    fn unwatch(&self, id: u64) {
        self.listeners.lock().remove(&id);
        tracing::debug!(target: "urlstate::location", id, "listener removed");
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl std::fmt::Debug for LocationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationStore")
            .field("search", &*self.search.read())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

/// Guard for a registered location listener
///
/// Dropping the guard unregisters the listener. Holds only a weak
/// reference, so an outstanding subscription does not keep the store alive.
#[must_use = "dropping the subscription immediately unregisters the listener"]
pub struct LocationSubscription {
    store: Weak<LocationStore>,
    id: u64,
}

impl Drop for LocationSubscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.unwatch(self.id);
        }
    }
}

impl std::fmt::Debug for LocationSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationSubscription")
            .field("id", &self.id)
            .finish()
    }
}
