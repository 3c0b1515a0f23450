//! # Transport collaborator seam.
//!
//! The connection core does not talk to the OS Bluetooth stack itself. It
//! is fed by a transport layer that decodes characteristic events and calls
//! [`Connection::dispatch_event`](crate::Connection::dispatch_event), and
//! it calls back into that layer through the narrow [`Transport`] trait:
//! addressing, the write-side MTU seed, teardown, and the one-shot
//! disconnect notification the background waiter blocks on.
//!
//! Request primitives (issue read, issue write, enable notifications) live
//! in the same external layer and are intentionally not part of this seam;
//! the core only bookkeeps their consumer side.

use async_trait::async_trait;
use std::sync::Arc;

/// Handle to the underlying link, owned by the connection.
///
/// Implementations wrap an OS stack binding (or a test double). The one
/// hard requirement: [`closed`](Transport::closed) must eventually resolve
/// after the link drops — including on forced teardown — or the
/// connection's background waiter never exits.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Stable identifier of the remote device, constant for the link's
    /// lifetime.
    fn peer_address(&self) -> String;

    /// Maximum payload the link accepts in a single write command,
    /// before protocol overhead is subtracted.
    fn max_write_len(&self) -> usize;

    /// Resolves once the physical link has dropped. Called exactly once,
    /// by the connection's background disconnect waiter.
    async fn closed(&self);

    /// Triggers teardown of the link. Must tolerate repeated calls.
    fn shutdown(&self);
}

/// Shared handle to a transport.
pub type TransportRef = Arc<dyn Transport>;
