//! Connection core: per-link state and lifecycle.
//!
//! This module contains the connection aggregate and its collaborators.
//! The public API is [`Connection`] plus the seams it is built from:
//!
//! Internal modules:
//! - [`connection`]: the aggregate and the event dispatcher;
//! - [`reads`]: pending-read registry (one in-flight read per characteristic);
//! - [`subs`]: subscription registry (insert-or-replace notification handlers);
//! - [`signal`]: one-shot broadcast disconnection signal;
//! - [`transport`]: collaborator trait for the underlying link;
//! - [`config`]: MTU seeding.

mod config;
mod connection;
mod reads;
mod signal;
mod subs;
mod transport;

pub use config::{LinkConfig, DEFAULT_ATT_MTU, WRITE_CMD_OVERHEAD};
pub use connection::Connection;
pub use signal::DisconnectSignal;
pub use transport::{Transport, TransportRef};
