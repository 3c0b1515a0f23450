//! # Connection aggregate and event dispatcher.
//!
//! [`Connection`] owns everything scoped to one link: addressing, the
//! negotiated MTUs, the pending-read and subscription registries, the
//! disconnection signal, and the transport handle. One shared/exclusive
//! lock serializes every registry mutation against every dispatch lookup.
//!
//! ## Architecture
//! ```text
//! transport ── dispatch_event(ev) ──► Connection
//!                                       │  shared lock
//!                                       ├─► PendingReads.deliver ──► oneshot ──► blocked reader
//!                                       ├─► Subscriptions.get ──► handler.on_value(current)
//!                                       └─► neither? log, move on
//!
//! transport ── closed() ──► background waiter ──► DisconnectSignal.fire()
//! ```
//!
//! ## Locking
//! - `register_read` / `unregister_read` / `subscribe` / `unsubscribe` /
//!   `set_tx_mtu` take the exclusive lock.
//! - `dispatch_event` / `tx_mtu` take the shared lock: dispatches for
//!   different characteristics proceed concurrently, but never race a
//!   registry mutation.
//! - The receive MTU sits outside the lock (atomic): set once during
//!   setup, before concurrent use begins.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{oneshot, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::error::LinkError;
use crate::events::{DispatchOutcome, ValueEvent};
use crate::gatt::{canonical_uuid, Characteristic};
use crate::handlers::HandlerRef;
use crate::link::config::LinkConfig;
use crate::link::reads::PendingReads;
use crate::link::signal::DisconnectSignal;
use crate::link::subs::Subscriptions;
use crate::link::transport::TransportRef;

/// State guarded by the per-connection shared/exclusive lock.
struct LinkState {
    tx_mtu: usize,
    reads: PendingReads,
    subs: Subscriptions,
}

/// A single logical connection to a remote BLE device.
///
/// Constructed once per link; destroyed when the transport handle is
/// released. After the disconnection signal fires, registered consumers
/// stop receiving events (the transport stops producing them), though
/// unregistration remains safe.
pub struct Connection {
    addr: Arc<str>,
    rx_mtu: AtomicUsize,
    cancel: Mutex<Option<CancellationToken>>,
    state: RwLock<LinkState>,
    disconnect: DisconnectSignal,
    transport: TransportRef,
    teardown_started: AtomicBool,
}

impl Connection {
    /// Creates a connection over `transport` and starts its background
    /// disconnect waiter.
    ///
    /// The waiter blocks on [`Transport::closed`](crate::Transport::closed)
    /// and fires the disconnection signal exactly once when it resolves;
    /// this guarantees the signal fires even if nobody is dispatching
    /// events at that moment, and the task exits as soon as it has fired.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(transport: TransportRef, config: LinkConfig) -> Arc<Self> {
        let tx_mtu = transport
            .max_write_len()
            .saturating_sub(config.write_overhead);

        let conn = Arc::new(Self {
            addr: transport.peer_address().into(),
            rx_mtu: AtomicUsize::new(config.rx_mtu),
            cancel: Mutex::new(None),
            state: RwLock::new(LinkState {
                tx_mtu,
                reads: PendingReads::default(),
                subs: Subscriptions::default(),
            }),
            disconnect: DisconnectSignal::new(),
            transport,
            teardown_started: AtomicBool::new(false),
        });

        let signal = conn.disconnect.clone();
        let transport = Arc::clone(&conn.transport);
        tokio::spawn(async move {
            transport.closed().await;
            signal.fire();
        });

        conn
    }

    /// Stable remote identifier, constant for the connection's lifetime.
    pub fn address(&self) -> &str {
        &self.addr
    }

    /// Current receive-side MTU.
    pub fn rx_mtu(&self) -> usize {
        self.rx_mtu.load(Ordering::Relaxed)
    }

    /// Sets the receive-side MTU.
    ///
    /// Assumed to be called only during link setup, by a single writer,
    /// before concurrent use begins; it deliberately bypasses the
    /// connection lock.
    pub fn set_rx_mtu(&self, mtu: usize) {
        self.rx_mtu.store(mtu, Ordering::Relaxed);
    }

    /// Current transmit-side MTU.
    pub async fn tx_mtu(&self) -> usize {
        self.state.read().await.tx_mtu
    }

    /// Sets the transmit-side MTU under the exclusive lock.
    ///
    /// May be called at any time (the peer can renegotiate); concurrent
    /// readers observe either the old or the new value, never a torn one.
    pub async fn set_tx_mtu(&self, mtu: usize) {
        self.state.write().await.tx_mtu = mtu;
    }

    /// Returns the advisory cancellation handle bound to this connection,
    /// if any.
    pub fn cancellation(&self) -> Option<CancellationToken> {
        self.cancel.lock().clone()
    }

    /// Binds an external cancellation handle for the lifetime of
    /// outstanding operations on this connection.
    ///
    /// Set-once-by-owner semantics: nothing here prevents a second bind,
    /// callers must not race two of them. The core never acts on the
    /// token itself; it only stores it for fan-in waits (see
    /// [`read_response`](Connection::read_response)).
    pub fn bind_cancellation(&self, token: CancellationToken) {
        *self.cancel.lock() = Some(token);
    }

    /// The disconnection signal for this link.
    pub fn disconnected(&self) -> DisconnectSignal {
        self.disconnect.clone()
    }

    /// Initiates teardown of the underlying transport handle. Idempotent.
    ///
    /// Does not itself fire the disconnection signal; the transport's
    /// disconnect notification drives that, through the background waiter.
    pub fn terminate(&self) {
        if !self.teardown_started.swap(true, Ordering::SeqCst) {
            self.transport.shutdown();
        }
    }

    /// Arms a synchronous read on `characteristic` and returns the
    /// single-use channel its value will arrive on.
    ///
    /// Fails with [`LinkError::DuplicateRead`] while a read is already
    /// pending for the same characteristic; reads on one attribute must be
    /// serialized by the caller. Call
    /// [`unregister_read`](Connection::unregister_read) afterwards
    /// regardless of outcome.
    pub async fn register_read(
        &self,
        characteristic: &Characteristic,
    ) -> Result<oneshot::Receiver<ValueEvent>, LinkError> {
        let key = characteristic.key();
        self.state.write().await.reads.arm(&key)
    }

    /// Removes any pending-read entry for `characteristic`. Safe no-op
    /// when none exists.
    pub async fn unregister_read(&self, characteristic: &Characteristic) {
        let key = characteristic.key();
        self.state.write().await.reads.disarm(&key);
    }

    /// Installs `handler` as the notification consumer for
    /// `characteristic`, replacing any existing one. Never fails.
    ///
    /// Replacement is silent: re-subscribing quietly overwrites the prior
    /// handler instead of erroring, for backwards compatibility.
    pub async fn subscribe(&self, characteristic: &Characteristic, handler: HandlerRef) {
        let key = characteristic.key();
        self.state
            .write()
            .await
            .subs
            .insert(key, characteristic.clone(), handler);
    }

    /// Removes the subscription for `characteristic`. Safe no-op when
    /// absent.
    pub async fn unsubscribe(&self, characteristic: &Characteristic) {
        let key = characteristic.key();
        self.state.write().await.subs.remove(&key);
    }

    /// Routes one incoming event to its consumers.
    ///
    /// Called by the transport layer once per received characteristic
    /// event. Under the shared lock, both lookups are attempted
    /// unconditionally: a pending read and an active subscription on the
    /// same characteristic are both served from the same event. The
    /// subscription handler is invoked with the characteristic's current
    /// payload, fetched through `current_value`, and runs on this calling
    /// context.
    ///
    /// Never returns an error: an event nobody claims is recorded as a
    /// diagnostic and dropped, and must not disturb subsequent dispatches.
    pub async fn dispatch_event<F>(&self, event: ValueEvent, current_value: F) -> DispatchOutcome
    where
        F: FnOnce() -> Vec<u8>,
    {
        let key = canonical_uuid(event.uuid());
        let state = self.state.read().await;

        let read_claimed = state.reads.deliver(&key, event);

        let sub_claimed = match state.subs.get(&key) {
            Some(entry) => {
                entry.handler().on_value(&current_value()).await;
                true
            }
            None => false,
        };

        let outcome = DispatchOutcome::from_claims(read_claimed, sub_claimed);
        if outcome.is_claimed() {
            trace!(uuid = %key, outcome = outcome.as_label(), "dispatched value event");
        } else {
            debug!(uuid = %key, "received characteristic event without corresponding request");
        }
        outcome
    }

    /// Fan-in wait for a pending read: the delivery channel, the
    /// disconnection signal, and the bound cancellation handle.
    ///
    /// Returns `None` when the read was abandoned (disconnect, cancel, or
    /// the entry was unregistered out from under the channel). The channel
    /// itself is never closed by disconnection; this helper is the
    /// caller-side composition of the three waits. Callers still
    /// [`unregister_read`](Connection::unregister_read) afterwards.
    pub async fn read_response(&self, rx: oneshot::Receiver<ValueEvent>) -> Option<ValueEvent> {
        let cancel = self.cancellation().unwrap_or_default();
        tokio::select! {
            res = rx => res.ok(),
            _ = self.disconnect.wait() => None,
            _ = cancel.cancelled() => None,
        }
    }
}
