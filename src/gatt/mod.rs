//! # GATT addressing: identifiers and characteristic descriptors.
//!
//! This module provides the two addressing concerns of the crate:
//! - [`canonical_uuid`] - the single canonical spelling used as registry key
//! - [`Characteristic`] - descriptor handed around by callers
//!
//! Canonicalization is the only "encoding" concern in this crate and must be
//! applied consistently by registration and dispatch, or lookups miss.

mod characteristic;
mod uuid;

pub use characteristic::Characteristic;
pub use uuid::canonical_uuid;
