//! # Link configuration.
//!
//! [`LinkConfig`] seeds the per-connection MTU bookkeeping. The receive MTU
//! starts at the ATT default and is raised by the setup layer once
//! negotiation completes; the transmit MTU is derived from the transport's
//! reported maximum write length minus the write-command overhead.
//!
//! # Example
//! ```rust
//! use gattlink::{LinkConfig, DEFAULT_ATT_MTU};
//!
//! let cfg = LinkConfig::default();
//! assert_eq!(cfg.rx_mtu, DEFAULT_ATT_MTU);
//! assert_eq!(cfg.write_overhead, 3);
//! ```

/// Default ATT MTU before negotiation.
pub const DEFAULT_ATT_MTU: usize = 23;

/// Bytes of a write command consumed by the opcode and attribute handle.
pub const WRITE_CMD_OVERHEAD: usize = 3;

/// Per-connection configuration.
///
/// Controls the initial MTU bookkeeping; everything else about the link is
/// derived from the transport at construction time.
#[derive(Clone, Copy, Debug)]
pub struct LinkConfig {
    /// Initial receive-side MTU.
    pub rx_mtu: usize,
    /// Overhead subtracted from the transport's maximum write length to
    /// obtain the transmit MTU.
    pub write_overhead: usize,
}

impl Default for LinkConfig {
    /// Provides a default configuration:
    /// - `rx_mtu = 23` (ATT default)
    /// - `write_overhead = 3` (write-command opcode + handle)
    fn default() -> Self {
        Self {
            rx_mtu: DEFAULT_ATT_MTU,
            write_overhead: WRITE_CMD_OVERHEAD,
        }
    }
}
