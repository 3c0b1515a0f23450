//! # Core notification handler trait
//!
//! `NotificationHandler` is the extension point for consuming value-change
//! notifications on a subscribed characteristic. Handlers are installed via
//! [`Connection::subscribe`](crate::Connection::subscribe) and invoked by
//! the dispatcher, one call per incoming event.
//!
//! ## Contract
//! - Handlers run **on the dispatcher's calling context**. A handler that
//!   blocks indefinitely stalls delivery of subsequent events on that
//!   connection; offload slow work to a queue or spawned task.
//! - Handlers receive the characteristic's current payload, not the raw
//!   event. Payload bytes are not interpreted by this crate.

use async_trait::async_trait;
use std::sync::Arc;

/// Contract for notification subscribers.
///
/// Called from the connection's dispatch context. Implementations should
/// return promptly (prefer handing data off over processing it in place).
#[async_trait]
pub trait NotificationHandler: Send + Sync + 'static {
    /// Handle one value-change notification.
    ///
    /// # Parameters
    /// - `value`: the characteristic's current payload bytes
    async fn on_value(&self, value: &[u8]);
}

/// Shared handle to a notification handler.
pub type HandlerRef = Arc<dyn NotificationHandler>;
