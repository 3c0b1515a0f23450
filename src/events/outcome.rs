//! # Dispatch outcome classification.
//!
//! Every event pushed through the dispatcher is claimed by zero, one, or
//! two consumers: a pending synchronous read, a notification subscription,
//! both, or neither. [`DispatchOutcome`] tags which, so callers (and tests)
//! can observe the routing decision. The production path only acts on the
//! unclaimed case, which is logged and otherwise ignored.

/// Who claimed a dispatched event.
///
/// A characteristic may have a synchronous read outstanding and a
/// subscription active at the same time; both are served from one event,
/// yielding [`DispatchOutcome::Both`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No registry entry matched; diagnostic-only, never an error.
    Unclaimed,
    /// Delivered to a pending read only.
    ReadOnly,
    /// Invoked a subscription handler only.
    SubscriptionOnly,
    /// Served a pending read and a subscription from the same event.
    Both,
}

impl DispatchOutcome {
    /// Combines the two independent lookup results into an outcome.
    pub(crate) fn from_claims(read: bool, subscription: bool) -> Self {
        match (read, subscription) {
            (false, false) => DispatchOutcome::Unclaimed,
            (true, false) => DispatchOutcome::ReadOnly,
            (false, true) => DispatchOutcome::SubscriptionOnly,
            (true, true) => DispatchOutcome::Both,
        }
    }

    /// Returns `true` unless no consumer matched the event.
    pub fn is_claimed(&self) -> bool {
        !matches!(self, DispatchOutcome::Unclaimed)
    }

    /// Short stable label (snake_case) for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchOutcome::Unclaimed => "unclaimed",
            DispatchOutcome::ReadOnly => "read_only",
            DispatchOutcome::SubscriptionOnly => "subscription_only",
            DispatchOutcome::Both => "both",
        }
    }
}
