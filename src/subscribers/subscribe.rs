//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for observing fault-set changes. Each
//! subscriber is invoked synchronously by the
//! [`SubscriberSet`](crate::SubscriberSet) on the thread that performed the
//! mutation, with the full post-mutation snapshot.
//!
//! ## Contract
//! - Implementations run inside the mutating call; keep them cheap.
//! - Implementations must **not** mutate the registry they observe
//!   (re-entrant mutation during notification is not guarded).
//! - A panic inside a subscriber is caught and logged; other subscribers
//!   still receive the notification.

/// Contract for fault-set subscribers.
///
/// Called once per registry mutation with the values currently active, in
/// insertion order. An empty slice means the last fault was just removed.
pub trait Subscribe<T>: Send + Sync + 'static {
    /// Handle one change of the observed fault set.
    fn on_change(&self, faults: &[T]);

    /// Human-readable name (for logs/diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
