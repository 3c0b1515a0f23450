//! # Incoming characteristic value events.
//!
//! A [`ValueEvent`] is the pre-decoded unit the transport layer hands to
//! [`Connection::dispatch_event`](crate::Connection::dispatch_event): the
//! characteristic identifier, the raw payload, and (when the stack exposes
//! one) the device-level attribute handle. Events are transient — they
//! exist only while being dispatched, or until the pending-read caller
//! consumes them off its channel.
//!
//! # Example
//! ```rust
//! use gattlink::ValueEvent;
//!
//! let ev = ValueEvent::new("2a37", vec![0x06, 0x48]).with_handle(0x0012);
//!
//! assert_eq!(ev.uuid(), "2a37");
//! assert_eq!(ev.value(), &[0x06, 0x48]);
//! assert_eq!(ev.handle(), Some(0x0012));
//! ```

use std::sync::Arc;

/// A single characteristic value event from the transport.
///
/// - `uuid`: identifier in whatever spelling the stack produced
/// - `value`: raw payload bytes (not interpreted by this crate)
/// - `handle`: device-level attribute handle, when applicable
#[derive(Clone, Debug)]
pub struct ValueEvent {
    uuid: Arc<str>,
    value: Vec<u8>,
    handle: Option<u16>,
}

impl ValueEvent {
    /// Creates an event for the given characteristic and payload.
    pub fn new(uuid: impl Into<Arc<str>>, value: Vec<u8>) -> Self {
        Self {
            uuid: uuid.into(),
            value,
            handle: None,
        }
    }

    /// Attaches the device-level attribute handle.
    #[inline]
    pub fn with_handle(mut self, handle: u16) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Characteristic identifier as delivered by the transport.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Raw payload bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Consumes the event and returns the payload.
    pub fn into_value(self) -> Vec<u8> {
        self.value
    }

    /// Device-level attribute handle, if the stack supplied one.
    pub fn handle(&self) -> Option<u16> {
        self.handle
    }
}
