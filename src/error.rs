//! Error types used by the connection core.
//!
//! The surface is deliberately small: registry mutations are the only
//! operations that can fail, and the only business rule they enforce is
//! "one in-flight read per characteristic". The dispatcher never returns
//! errors (it has no caller to report to — it runs on the transport's event
//! context and degrades to logging); disconnection is a signal transition,
//! not an error value.

use thiserror::Error;

/// # Errors produced by connection registry operations.
///
/// Returned synchronously to the direct caller of the mutating operation.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum LinkError {
    /// A read is already pending for this characteristic. Reads on one
    /// attribute must be serialized by the caller.
    #[error("cannot read from the same attribute twice: uuid={uuid}")]
    DuplicateRead {
        /// Canonical identifier of the characteristic.
        uuid: String,
    },
}

impl LinkError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use gattlink::LinkError;
    ///
    /// let err = LinkError::DuplicateRead { uuid: "2a37".into() };
    /// assert_eq!(err.as_label(), "duplicate_read");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            LinkError::DuplicateRead { .. } => "duplicate_read",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            LinkError::DuplicateRead { uuid } => {
                format!("read already pending for {uuid}")
            }
        }
    }
}
