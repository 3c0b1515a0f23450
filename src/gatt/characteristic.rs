//! # Remote characteristic descriptor.
//!
//! [`Characteristic`] is the handle callers use to address registry
//! operations on a [`Connection`](crate::Connection). It carries the
//! identifier in whatever spelling the discovery layer produced; the
//! canonical registry key is derived on demand via
//! [`key`](Characteristic::key).

use std::sync::Arc;

use crate::gatt::uuid::canonical_uuid;

/// Descriptor for a characteristic on the remote device.
///
/// Built by the discovery layer (out of scope for this crate) and handed to
/// registration calls. Subscription entries keep a clone as the
/// back-reference to the attribute they serve.
#[derive(Clone, Debug)]
pub struct Characteristic {
    uuid: Arc<str>,
    value_handle: Option<u16>,
}

impl Characteristic {
    /// Creates a descriptor for the given identifier.
    pub fn new(uuid: impl Into<Arc<str>>) -> Self {
        Self {
            uuid: uuid.into(),
            value_handle: None,
        }
    }

    /// Attaches the device-level value handle, when the stack exposes one.
    #[inline]
    pub fn with_value_handle(mut self, handle: u16) -> Self {
        self.value_handle = Some(handle);
        self
    }

    /// Identifier as supplied by the discovery layer.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Device-level value handle, if known.
    pub fn value_handle(&self) -> Option<u16> {
        self.value_handle
    }

    /// Canonical registry key for this characteristic.
    pub fn key(&self) -> String {
        canonical_uuid(&self.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_canonical() {
        let chr = Characteristic::new("2A37");
        assert_eq!(chr.key(), "2a37");
        assert_eq!(chr.uuid(), "2A37");
    }

    #[test]
    fn test_value_handle_round_trip() {
        let chr = Characteristic::new("2a37").with_value_handle(0x0012);
        assert_eq!(chr.value_handle(), Some(0x0012));
        assert_eq!(Characteristic::new("2a37").value_handle(), None);
    }
}
