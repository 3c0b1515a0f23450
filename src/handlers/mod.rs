//! # Notification handlers.
//!
//! This module provides the consumer-side seam for subscriptions:
//! - [`NotificationHandler`] - trait for value-change consumers
//! - [`HandlerFn`] - closure-based handler implementation
//! - [`HandlerRef`] - shared reference to a handler (`Arc<dyn NotificationHandler>`)
//!
//! ## Implementing custom handlers
//! ```rust
//! use gattlink::NotificationHandler;
//! use async_trait::async_trait;
//!
//! struct HeartRateSink;
//!
//! #[async_trait]
//! impl NotificationHandler for HeartRateSink {
//!     async fn on_value(&self, value: &[u8]) {
//!         // decode flags + bpm, push to a channel...
//!         let _ = value;
//!     }
//! }
//! ```

mod handler;
mod handler_fn;

pub use handler::{HandlerRef, NotificationHandler};
pub use handler_fn::HandlerFn;
