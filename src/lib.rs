//! # gattlink
//!
//! **gattlink** is the connection core of a BLE client stack: it manages a
//! single logical link to a remote device and demultiplexes the
//! heterogeneous, interleaved, UUID-addressed events arriving on that one
//! stream — read completions, value-change notifications, disconnection —
//! onto independent logical consumers.
//!
//! Discovery, GATT table construction, over-the-air request encoding and
//! OS stack bindings are external collaborators: they hand this crate
//! pre-decoded events and expose the request primitives it bookkeeps for.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!                 ┌────────────────────────────────────────────────┐
//!  OS stack ────► │  transport layer (collaborator, out of scope)  │
//!                 └───────┬───────────────────────────┬────────────┘
//!                         │ dispatch_event(ev)        │ closed()
//!                         ▼                           ▼
//! ┌───────────────────────────────────────┐   ┌──────────────────┐
//! │  Connection (one per link)            │   │ background waiter│
//! │  - PendingReads (one read per uuid)   │   └────────┬─────────┘
//! │  - Subscriptions (insert-or-replace)  │            ▼
//! │  - rx/tx MTU bookkeeping              │    DisconnectSignal
//! │  - shared/exclusive lock              │    (fires exactly once,
//! └───────┬───────────────────┬───────────┘     every waiter sees it)
//!         │ oneshot delivery  │ handler.on_value(current)
//!         ▼                   ▼
//!   blocked reader      NotificationHandler
//! ```
//!
//! ### Concurrency
//! - One shared/exclusive lock per connection: dispatch lookups take it
//!   shared (dispatches run concurrently with each other), registrations
//!   take it exclusive. A dispatch never races a registry mutation.
//! - The background disconnect waiter is the only long-lived task per
//!   connection; it exits the moment the signal fires.
//! - Both consumer kinds are served independently: a characteristic with a
//!   pending read *and* an active subscription gets both satisfied from the
//!   same event.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//!
//! use gattlink::{
//!     Characteristic, Connection, HandlerFn, LinkConfig, LinkError, Transport, ValueEvent,
//! };
//!
//! struct StackLink {
//!     dropped: CancellationToken,
//! }
//!
//! #[async_trait]
//! impl Transport for StackLink {
//!     fn peer_address(&self) -> String {
//!         "aa:bb:cc:dd:ee:ff".into()
//!     }
//!     fn max_write_len(&self) -> usize {
//!         185
//!     }
//!     async fn closed(&self) {
//!         self.dropped.cancelled().await
//!     }
//!     fn shutdown(&self) {
//!         self.dropped.cancel()
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), LinkError> {
//!     let link = Arc::new(StackLink { dropped: CancellationToken::new() });
//!     let conn = Connection::new(link, LinkConfig::default());
//!
//!     // Long-lived subscription: the transport layer enables notifications
//!     // over the air; this crate routes each event to the handler.
//!     let heart_rate = Characteristic::new("2a37");
//!     conn.subscribe(
//!         &heart_rate,
//!         HandlerFn::arc(|value: Vec<u8>| async move {
//!             println!("notification: {value:?}");
//!         }),
//!     )
//!     .await;
//!
//!     // Synchronous read: arm the delivery channel, let the transport
//!     // issue the request, then fan-in on delivery/disconnect/cancel.
//!     let rx = conn.register_read(&heart_rate).await?;
//!     // ... transport issues the read; the response arrives as an event:
//!     conn.dispatch_event(ValueEvent::new("2a37", vec![0x06, 0x48]), || vec![0x06, 0x48])
//!         .await;
//!     let value = conn.read_response(rx).await;
//!     conn.unregister_read(&heart_rate).await;
//!     println!("read: {value:?}");
//!
//!     conn.terminate();
//!     conn.disconnected().wait().await;
//!     Ok(())
//! }
//! ```

mod error;
mod events;
mod gatt;
mod handlers;
mod link;

// ---- Public re-exports ----

pub use error::LinkError;
pub use events::{DispatchOutcome, ValueEvent};
pub use gatt::{canonical_uuid, Characteristic};
pub use handlers::{HandlerFn, HandlerRef, NotificationHandler};
pub use link::{
    Connection, DisconnectSignal, LinkConfig, Transport, TransportRef, DEFAULT_ATT_MTU,
    WRITE_CMD_OVERHEAD,
};
