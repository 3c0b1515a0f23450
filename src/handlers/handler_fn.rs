//! # Function-backed notification handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(Vec<u8>) -> Fut`, producing a fresh
//! future per notification. Shared state across invocations goes through an
//! explicit `Arc<...>` inside the closure; there is no hidden mutation.
//!
//! ## Example
//! ```rust
//! use gattlink::{HandlerFn, HandlerRef};
//!
//! let handler: HandlerRef = HandlerFn::arc(|value: Vec<u8>| async move {
//!     // hand the payload off, update a gauge, etc.
//!     let _ = value;
//! });
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::handlers::handler::NotificationHandler;

/// Function-backed notification handler.
///
/// Wraps a closure that creates a new future per delivered value.
#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a
    /// [`HandlerRef`](crate::HandlerRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> NotificationHandler for HandlerFn<F>
where
    F: Fn(Vec<u8>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn on_value(&self, value: &[u8]) {
        (self.f)(value.to_vec()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_handler_fn_invokes_closure_per_value() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let handler = HandlerFn::new(move |value: Vec<u8>| {
            let seen = Arc::clone(&seen);
            async move {
                assert_eq!(value, vec![0x01, 0x02]);
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        handler.on_value(&[0x01, 0x02]).await;
        handler.on_value(&[0x01, 0x02]).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
