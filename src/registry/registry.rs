//! # Fault registry - the authoritative collection of active faults.
//!
//! [`FaultRegistry`] holds the ordered set of fault entries for one scope and
//! pushes the post-mutation snapshot to every subscriber whenever it changes.
//!
//! ## Architecture
//! ```text
//! Emitter 1 ──┐                                 ┌──► Consumer (transform)
//! Emitter 2 ──┼── append/remove ──► FaultRegistry ──► SubscriberSet::emit
//! Emitter N ──┘                    (Mutex<entries>) └──► LogWriter, ...
//! ```
//!
//! ## Rules
//! - **Insertion order**: entries always reflect activation order, never
//!   value order. `append` goes to the tail, unconditionally.
//! - **Identity removal**: `remove` matches the handle, never the value, so
//!   equal-valued entries from different emitters cannot cross-remove.
//! - **Idempotent removal**: removing an absent handle is a silent no-op.
//! - **Synchronous push**: every successful mutation emits the new snapshot
//!   to all subscribers before the mutating call returns. The entries lock
//!   is released first, so subscribers observe a consistent snapshot and may
//!   call `snapshot()` themselves without deadlocking.
//! - **Re-entrancy**: subscribers must not mutate the registry from inside a
//!   notification; that path is not guarded.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::subscribers::{Subscribe, SubscriberSet, SubscriptionId};

use super::entry::{EntryHandle, FaultEntry};

/// Ordered, scope-bound collection of active fault values.
///
/// One registry exists per established scope (see
/// [`ScopeContext::establish`](crate::ScopeContext::establish)). All
/// operations serialize behind a single mutex, so the registry is `Send +
/// Sync` for `Send + Sync` payloads and the ordering invariants hold on
/// multithreaded hosts too.
///
/// Duplicate values are allowed; entries are addressed by the
/// [`EntryHandle`] returned at insertion, never by value equality.
pub struct FaultRegistry<T> {
    inner: Mutex<Inner<T>>,
    subscribers: SubscriberSet<T>,
}

struct Inner<T> {
    entries: Vec<FaultEntry<T>>,
    next_id: u64,
}

impl<T> Inner<T>
where
    T: Clone,
{
    fn values(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.value.clone()).collect()
    }
}

impl<T: 'static> FaultRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty registry with space reserved for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: Vec::with_capacity(capacity),
                next_id: 0,
            }),
            subscribers: SubscriberSet::new(),
        }
    }

    /// Registers a subscriber to be notified of every mutation.
    ///
    /// The subscriber receives the full post-mutation snapshot each time,
    /// in registration order relative to other subscribers.
    pub fn subscribe(&self, subscriber: Arc<dyn Subscribe<T>>) -> SubscriptionId {
        self.subscribers.add(subscriber)
    }

    /// Removes a previously registered subscriber. No-op for unknown ids.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.remove(id);
    }

    // Poisoning is recovered by extracting the inner value: registry state
    // stays valid across a subscriber panic because mutation completes before
    // notification starts.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> FaultRegistry<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Appends a fault value at the tail of the collection.
    ///
    /// Always succeeds; duplicate values are never rejected. Returns the
    /// opaque handle by which exactly this entry can later be removed.
    ///
    /// Notifies all subscribers with the post-append snapshot.
    pub fn append(&self, value: T) -> EntryHandle {
        let (handle, snapshot) = {
            let mut inner = self.lock();
            let handle = EntryHandle::new(inner.next_id);
            inner.next_id += 1;
            inner.entries.push(FaultEntry { id: handle, value });
            (handle, inner.values())
        };
        self.subscribers.emit(&snapshot);
        handle
    }

    /// Removes the entry identified by `handle`.
    ///
    /// Matches by identity only: an equal-valued entry registered by a
    /// different caller is never touched. Removing a handle that is no
    /// longer present is a silent no-op and notifies nobody, which makes
    /// repeated teardown safe.
    pub fn remove(&self, handle: EntryHandle) {
        let snapshot = {
            let mut inner = self.lock();
            let before = inner.entries.len();
            inner.entries.retain(|e| e.id != handle);
            if inner.entries.len() == before {
                return;
            }
            inner.values()
        };
        self.subscribers.emit(&snapshot);
    }

    /// Returns the current fault values in insertion order.
    ///
    /// The returned vector is decoupled from the live collection: later
    /// mutation does not retroactively change an already-taken snapshot.
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().values()
    }

    /// Number of currently active entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// True if no faults are currently registered.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }
}

impl<T: 'static> Default for FaultRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for FaultRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaultRegistry")
            .field("entries", &self.lock().entries.len())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSubscriber(AtomicUsize);

    impl Subscribe<&'static str> for CountingSubscriber {
        fn on_change(&self, _faults: &[&'static str]) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let registry = FaultRegistry::new();
        registry.append("a");
        registry.append("b");
        registry.append("c");
        assert_eq!(registry.snapshot(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_values_are_allowed() {
        let registry = FaultRegistry::new();
        registry.append("x");
        registry.append("x");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_matches_identity_not_value() {
        let registry = FaultRegistry::new();
        let first = registry.append("x");
        let _second = registry.append("x");
        registry.remove(first);
        assert_eq!(registry.snapshot(), vec!["x"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let registry = FaultRegistry::new();
        let handle = registry.append("a");
        registry.append("b");
        registry.remove(handle);
        registry.remove(handle);
        assert_eq!(registry.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_remove_unknown_handle_notifies_nobody() {
        let registry = FaultRegistry::new();
        let handle = registry.append("a");
        registry.remove(handle);

        let counter = Arc::new(CountingSubscriber(AtomicUsize::new(0)));
        registry.subscribe(counter.clone());
        registry.remove(handle);
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_snapshot_is_decoupled_from_later_mutation() {
        let registry = FaultRegistry::new();
        registry.append("a");
        let snapshot = registry.snapshot();
        registry.append("b");
        assert_eq!(snapshot, vec!["a"]);
        assert_eq!(registry.snapshot(), vec!["a", "b"]);
    }

    #[test]
    fn test_every_mutation_notifies_subscribers() {
        let registry = FaultRegistry::new();
        let counter = Arc::new(CountingSubscriber(AtomicUsize::new(0)));
        registry.subscribe(counter.clone());

        let handle = registry.append("a");
        registry.append("b");
        registry.remove(handle);
        assert_eq!(counter.0.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_debug_output_reports_entry_count() {
        let registry = FaultRegistry::new();
        registry.append("a");
        registry.append("b");

        let rendered = format!("{registry:?}");
        assert!(rendered.contains("FaultRegistry"));
        assert!(rendered.contains("entries: 2"));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let registry = FaultRegistry::new();
        let counter = Arc::new(CountingSubscriber(AtomicUsize::new(0)));
        let id = registry.subscribe(counter.clone());

        registry.append("a");
        registry.unsubscribe(id);
        registry.append("b");
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }
}
