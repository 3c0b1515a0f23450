//! # One-shot disconnection signal.
//!
//! [`DisconnectSignal`] is a binary {pending, fired} completion primitive:
//! it becomes permanently fired exactly once, every waiter observes the
//! same transition, and waiting after the fact returns immediately. It
//! carries no payload — disconnection is an event, not an error value.
//!
//! The signal is fired by the connection's background disconnect waiter,
//! never by [`Connection::terminate`](crate::Connection::terminate)
//! directly: teardown *triggers* the transport sequence that ends in the
//! signal, which keeps "physical disconnect detected" decoupled from
//! "public signal observed".

use tokio_util::sync::CancellationToken;

/// Broadcast-once completion signal for link teardown.
///
/// Cheap to clone; all clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct DisconnectSignal {
    token: CancellationToken,
}

impl DisconnectSignal {
    /// Creates a signal in the pending state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the signal. Safe to call multiple times; only the first call
    /// has effect.
    pub fn fire(&self) {
        self.token.cancel();
    }

    /// Waits until the signal fires. Returns immediately if it already has.
    ///
    /// Safe to call concurrently from many waiters; all of them observe the
    /// firing.
    pub async fn wait(&self) {
        self.token.cancelled().await;
    }

    /// Returns `true` once the signal has fired.
    pub fn is_fired(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_returns_immediately_after_fire() {
        let signal = DisconnectSignal::new();
        assert!(!signal.is_fired());

        signal.fire();
        assert!(signal.is_fired());
        signal.wait().await;
    }

    #[tokio::test]
    async fn test_fire_is_idempotent() {
        let signal = DisconnectSignal::new();
        signal.fire();
        signal.fire();
        assert!(signal.is_fired());
        signal.wait().await;
    }

    #[tokio::test]
    async fn test_all_concurrent_waiters_observe_firing() {
        let signal = DisconnectSignal::new();

        let mut waiters = Vec::new();
        for _ in 0..8 {
            let s = signal.clone();
            waiters.push(tokio::spawn(async move { s.wait().await }));
        }

        signal.fire();
        for w in waiters {
            w.await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let signal = DisconnectSignal::new();
        let clone = signal.clone();

        clone.fire();
        assert!(signal.is_fired());
        signal.wait().await;
    }
}
