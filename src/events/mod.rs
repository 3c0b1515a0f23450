//! # Event data model.
//!
//! This module groups the types that flow through the dispatcher:
//! - [`ValueEvent`] - one pre-decoded characteristic event from the transport
//! - [`DispatchOutcome`] - who claimed the event (read, subscription, both, nobody)
//!
//! ## Quick reference
//! - **Producer**: the transport layer, once per received value event.
//! - **Consumers**: the pending-read channel returned by
//!   [`Connection::register_read`](crate::Connection::register_read) and the
//!   handler installed via [`Connection::subscribe`](crate::Connection::subscribe).

mod event;
mod outcome;

pub use event::ValueEvent;
pub use outcome::DispatchOutcome;
