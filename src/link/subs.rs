//! # Subscription registry.
//!
//! Maps canonical characteristic keys to active notification handlers.
//! Pure bookkeeping: mutation assumes the caller holds the connection's
//! exclusive lock, lookup assumes at least the shared lock; the structure
//! has no concurrency control of its own.

use std::collections::HashMap;

use crate::gatt::Characteristic;
use crate::handlers::HandlerRef;

/// One active subscription entry.
pub(crate) struct Subscription {
    handler: HandlerRef,
    characteristic: Characteristic,
}

impl Subscription {
    /// The installed handler.
    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }

    /// Back-reference to the characteristic this entry serves.
    #[allow(dead_code)]
    pub fn characteristic(&self) -> &Characteristic {
        &self.characteristic
    }
}

/// Registry of active subscriptions, keyed by canonical uuid.
#[derive(Default)]
pub(crate) struct Subscriptions {
    entries: HashMap<String, Subscription>,
}

impl Subscriptions {
    /// Installs a handler for `key`, replacing any existing one.
    ///
    /// Quietly overwriting an existing handler (rather than erroring)
    /// preserves backwards compatibility.
    pub fn insert(&mut self, key: String, characteristic: Characteristic, handler: HandlerRef) {
        self.entries.insert(
            key,
            Subscription {
                handler,
                characteristic,
            },
        );
    }

    /// Removes the entry for `key`. Safe no-op when absent.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Looks up the active subscription for `key`.
    pub fn get(&self, key: &str) -> Option<&Subscription> {
        self.entries.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::HandlerFn;
    use std::sync::Arc;

    fn noop_handler() -> HandlerRef {
        HandlerFn::arc(|_value: Vec<u8>| async {})
    }

    #[test]
    fn test_insert_then_get() {
        let mut subs = Subscriptions::default();
        let chr = Characteristic::new("2a37").with_value_handle(0x0012);
        subs.insert(chr.key(), chr.clone(), noop_handler());

        let entry = subs.get("2a37").unwrap();
        assert_eq!(entry.characteristic().uuid(), "2a37");
        assert_eq!(entry.characteristic().value_handle(), Some(0x0012));
    }

    #[test]
    fn test_reinsert_silently_replaces_handler() {
        let mut subs = Subscriptions::default();
        let chr = Characteristic::new("2a37");

        let first = noop_handler();
        let second = noop_handler();
        subs.insert(chr.key(), chr.clone(), Arc::clone(&first));
        subs.insert(chr.key(), chr.clone(), Arc::clone(&second));

        let active = subs.get("2a37").unwrap().handler();
        assert!(Arc::ptr_eq(active, &second));
        assert!(!Arc::ptr_eq(active, &first));
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut subs = Subscriptions::default();
        subs.remove("2a37");
        assert!(subs.get("2a37").is_none());
    }

    #[test]
    fn test_remove_clears_entry() {
        let mut subs = Subscriptions::default();
        let chr = Characteristic::new("2a37");
        subs.insert(chr.key(), chr, noop_handler());

        subs.remove("2a37");
        assert!(subs.get("2a37").is_none());
    }
}
