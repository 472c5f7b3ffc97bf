//! # SubscriberSet: synchronous fan-out over multiple subscribers
//!
//! [`SubscriberSet`] distributes each fault-set snapshot to multiple
//! subscribers on the mutating thread, in registration order.
//!
//! ## What it guarantees
//! - Delivery order follows registration order.
//! - Panics inside subscribers are caught and logged (isolation): one
//!   misbehaving subscriber never starves the others.
//! - `remove` by id deletes exactly one registration; unknown ids no-op.
//!
//! ## What it does **not** guarantee
//! - No deferral or batching: `emit` runs every subscriber before returning.
//! - No re-entrancy protection: subscribers must not mutate the registry
//!   that is notifying them.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::Subscribe;

/// Opaque identity of one subscription, issued by [`SubscriberSet::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Slot<T> {
    id: SubscriptionId,
    subscriber: Arc<dyn Subscribe<T>>,
}

struct Registrations<T> {
    slots: Vec<Slot<T>>,
    next_id: u64,
}

/// Ordered collection of subscribers with synchronous fan-out.
pub struct SubscriberSet<T> {
    registrations: Mutex<Registrations<T>>,
}

impl<T: 'static> SubscriberSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            registrations: Mutex::new(Registrations {
                slots: Vec::new(),
                next_id: 0,
            }),
        }
    }

    /// Registers a subscriber and returns its subscription id.
    pub fn add(&self, subscriber: Arc<dyn Subscribe<T>>) -> SubscriptionId {
        let mut regs = self.lock();
        let id = SubscriptionId(regs.next_id);
        regs.next_id += 1;
        regs.slots.push(Slot { id, subscriber });
        id
    }

    /// Removes the subscription with the given id. No-op for unknown ids.
    pub fn remove(&self, id: SubscriptionId) {
        self.lock().slots.retain(|slot| slot.id != id);
    }

    /// Fans one snapshot out to all subscribers (synchronous).
    ///
    /// The registration lock is released before any subscriber runs, so a
    /// subscriber may inspect the set (or the registry) without deadlocking.
    /// A panicking subscriber is isolated: the panic is caught, logged with
    /// the subscriber's name, and delivery continues.
    pub fn emit(&self, faults: &[T]) {
        let subscribers: Vec<Arc<dyn Subscribe<T>>> = {
            let regs = self.lock();
            regs.slots.iter().map(|s| Arc::clone(&s.subscriber)).collect()
        };

        for subscriber in subscribers {
            let result = catch_unwind(AssertUnwindSafe(|| subscriber.on_change(faults)));
            if result.is_err() {
                tracing::error!(
                    subscriber = subscriber.name(),
                    "subscriber panicked during fault notification"
                );
            }
        }
    }

    /// True if there are no subscribers.
    pub fn is_empty(&self) -> bool {
        self.lock().slots.is_empty()
    }

    /// Number of subscribers.
    pub fn len(&self) -> usize {
        self.lock().slots.len()
    }

    fn lock(&self) -> MutexGuard<'_, Registrations<T>> {
        self.registrations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: 'static> Default for SubscriberSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
