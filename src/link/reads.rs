//! # Pending-read registry.
//!
//! One entry per characteristic with a synchronous read in flight. The one
//! business rule lives here: arming a second read on a key whose slot is
//! still armed fails with [`LinkError::DuplicateRead`] — enforced at insert
//! time, not post-hoc.
//!
//! This is a bookkeeping structure, not a concurrency primitive: mutation
//! assumes the caller holds the connection's exclusive lock, delivery
//! assumes at least the shared lock. The delivery path works under the
//! shared lock because each entry hides its single-use sender behind a
//! small interior slot that is emptied on delivery.
//!
//! ## Rules
//! - `arm` on an armed key → `DuplicateRead`
//! - `arm` on a spent key (value already delivered) → fresh channel
//! - `disarm` on an absent key → no-op
//! - disconnection never closes an outstanding channel; abandonment is the
//!   caller's fan-in responsibility (see
//!   [`Connection::read_response`](crate::Connection::read_response))

use std::collections::HashMap;

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::LinkError;
use crate::events::ValueEvent;

/// Single-use delivery slot for one in-flight read.
///
/// The sender is taken out on delivery, so a delivered entry stays in the
/// map but no longer counts as armed.
struct ReadSlot {
    tx: Mutex<Option<oneshot::Sender<ValueEvent>>>,
}

impl ReadSlot {
    fn new(tx: oneshot::Sender<ValueEvent>) -> Self {
        Self {
            tx: Mutex::new(Some(tx)),
        }
    }

    /// True while the slot still holds its sender.
    fn is_armed(&self) -> bool {
        self.tx.lock().is_some()
    }

    /// Delivers the event, consuming the sender. Returns `false` if the
    /// slot was already spent or the receiver was dropped.
    fn deliver(&self, event: ValueEvent) -> bool {
        match self.tx.lock().take() {
            Some(tx) => tx.send(event).is_ok(),
            None => false,
        }
    }
}

/// Registry of in-flight synchronous reads, keyed by canonical uuid.
#[derive(Default)]
pub(crate) struct PendingReads {
    slots: HashMap<String, ReadSlot>,
}

impl PendingReads {
    /// Arms a read for `key` and returns the receiving half of its
    /// delivery channel.
    ///
    /// Fails with [`LinkError::DuplicateRead`] if a read is already armed
    /// for that key. A spent slot (value delivered) is replaced.
    pub fn arm(&mut self, key: &str) -> Result<oneshot::Receiver<ValueEvent>, LinkError> {
        if self.slots.get(key).is_some_and(ReadSlot::is_armed) {
            return Err(LinkError::DuplicateRead {
                uuid: key.to_string(),
            });
        }

        let (tx, rx) = oneshot::channel();
        self.slots.insert(key.to_string(), ReadSlot::new(tx));
        Ok(rx)
    }

    /// Removes any entry for `key`. Safe no-op when absent.
    pub fn disarm(&mut self, key: &str) {
        self.slots.remove(key);
    }

    /// Delivers `event` to the read armed for `key`, if any.
    ///
    /// Returns `true` when a waiter was unblocked.
    pub fn deliver(&self, key: &str, event: ValueEvent) -> bool {
        match self.slots.get(key) {
            Some(slot) => slot.deliver(event),
            None => false,
        }
    }

    /// True while a read is armed (not yet delivered) for `key`.
    pub fn is_armed(&self, key: &str) -> bool {
        self.slots.get(key).is_some_and(ReadSlot::is_armed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_arm_on_same_key_fails() {
        let mut reads = PendingReads::default();
        let _rx = reads.arm("2a37").unwrap();

        let err = reads.arm("2a37").unwrap_err();
        assert_eq!(err.as_label(), "duplicate_read");
        assert!(err.as_message().contains("2a37"));
    }

    #[test]
    fn test_arm_after_disarm_succeeds() {
        let mut reads = PendingReads::default();
        let _rx = reads.arm("2a37").unwrap();
        reads.disarm("2a37");
        assert!(reads.arm("2a37").is_ok());
    }

    #[test]
    fn test_arm_after_delivery_succeeds() {
        let mut reads = PendingReads::default();
        let mut rx = reads.arm("2a37").unwrap();

        assert!(reads.deliver("2a37", ValueEvent::new("2a37", vec![1])));
        assert_eq!(rx.try_recv().unwrap().value(), &[1]);
        assert!(!reads.is_armed("2a37"));

        assert!(reads.arm("2a37").is_ok());
    }

    #[test]
    fn test_deliver_without_entry_is_false() {
        let reads = PendingReads::default();
        assert!(!reads.deliver("2a38", ValueEvent::new("2a38", vec![])));
    }

    #[test]
    fn test_deliver_twice_only_first_counts() {
        let mut reads = PendingReads::default();
        let _rx = reads.arm("2a37").unwrap();

        assert!(reads.deliver("2a37", ValueEvent::new("2a37", vec![1])));
        assert!(!reads.deliver("2a37", ValueEvent::new("2a37", vec![2])));
    }

    #[test]
    fn test_deliver_to_dropped_receiver_is_false() {
        let mut reads = PendingReads::default();
        let rx = reads.arm("2a37").unwrap();
        drop(rx);

        assert!(!reads.deliver("2a37", ValueEvent::new("2a37", vec![1])));
    }

    #[test]
    fn test_disarm_absent_key_is_noop() {
        let mut reads = PendingReads::default();
        reads.disarm("2a37");
        assert!(!reads.is_armed("2a37"));
    }
}
