//! # Consumer - snapshot-and-transform projection of the fault set.
//!
//! A [`Consumer`] subscribes to the scope's registry and re-runs a
//! caller-supplied transform on every mutation, keeping the latest rendered
//! result available through [`Consumer::output`].
//!
//! ## Empty gate
//! The transform is never invoked on an empty collection; the output becomes
//! `None` instead. Consumers building "no fault" presentation therefore do
//! not need an empty-input branch inside the transform.
//!
//! ## Rules
//! - The transform runs synchronously inside the mutating call; keep it
//!   cheap and pure.
//! - The transform must not mutate the registry it observes.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::ScopeError;
use crate::registry::FaultRegistry;
use crate::subscribers::{Subscribe, SubscriptionId};

use super::scope::ScopeContext;

/// Read-side participant: projects the live fault set into a rendered result.
///
/// Attaching evaluates once against the current snapshot, so
/// [`Consumer::output`] is immediately meaningful; afterwards every registry
/// mutation re-evaluates it. Dropping the consumer unsubscribes it.
pub struct Consumer<T, R>
where
    T: 'static,
{
    registry: Arc<FaultRegistry<T>>,
    cell: Arc<Cell<T, R>>,
    subscription: SubscriptionId,
}

/// Shared state between the consumer handle and its registry subscription.
struct Cell<T, R> {
    transform: Box<dyn Fn(&[T]) -> R + Send + Sync>,
    output: Mutex<Option<R>>,
}

impl<T, R> Subscribe<T> for Cell<T, R>
where
    T: Clone + Send + Sync + 'static,
    R: Send + 'static,
{
    fn on_change(&self, faults: &[T]) {
        let next = if faults.is_empty() {
            None
        } else {
            Some((self.transform)(faults))
        };
        *self.output.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    fn name(&self) -> &'static str {
        "consumer"
    }
}

impl<T, R> Consumer<T, R>
where
    T: Clone + Send + Sync + 'static,
    R: Send + 'static,
{
    /// Attaches a consumer with the given transform to the scope's registry.
    ///
    /// Fails with [`ScopeError::ScopeNotEstablished`] if the context has no
    /// registry. The transform receives the full ordered sequence of current
    /// fault values and is only called when that sequence is non-empty.
    pub fn attach<F>(ctx: &ScopeContext<T>, transform: F) -> Result<Self, ScopeError>
    where
        F: Fn(&[T]) -> R + Send + Sync + 'static,
    {
        let registry = Arc::clone(ctx.registry()?);
        let cell = Arc::new(Cell {
            transform: Box::new(transform),
            output: Mutex::new(None),
        });
        let subscription = registry.subscribe(Arc::clone(&cell) as Arc<dyn Subscribe<T>>);
        // Initial evaluation, after subscribing, against a fresh snapshot.
        cell.on_change(&registry.snapshot());
        Ok(Self {
            registry,
            cell,
            subscription,
        })
    }

    /// Latest rendered result.
    ///
    /// `None` is the "no faults" result: either nothing has ever been
    /// registered or the last fault has been removed since.
    pub fn output(&self) -> Option<R>
    where
        R: Clone,
    {
        self.cell
            .output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T, R> Drop for Consumer<T, R>
where
    T: 'static,
{
    fn drop(&mut self) {
        self.registry.unsubscribe(self.subscription);
    }
}

impl<T, R> fmt::Debug for Consumer<T, R>
where
    T: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emitter::Emitter;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_attach_outside_scope_fails() {
        let ctx: ScopeContext<String> = ScopeContext::detached();
        let err = Consumer::attach(&ctx, |faults: &[String]| faults.len()).unwrap_err();
        assert_eq!(err, ScopeError::ScopeNotEstablished);
    }

    #[test]
    fn test_transform_is_gated_on_empty_collection() {
        let ctx: ScopeContext<&'static str> = ScopeContext::establish();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let consumer = Consumer::attach(&ctx, move |faults: &[&'static str]| {
            seen.fetch_add(1, Ordering::SeqCst);
            faults.len()
        })
        .unwrap();

        // Nothing registered: transform never invoked, output absent.
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(consumer.output().is_none());

        let _emitter = Emitter::mount(&ctx, "first").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(consumer.output(), Some(1));
    }

    #[test]
    fn test_transform_sees_values_in_insertion_order() {
        let ctx: ScopeContext<&'static str> = ScopeContext::establish();
        let consumer =
            Consumer::attach(&ctx, |faults: &[&'static str]| faults.join(", ")).unwrap();

        let _a = Emitter::mount(&ctx, "a").unwrap();
        let _b = Emitter::mount(&ctx, "b").unwrap();
        let _c = Emitter::mount(&ctx, "c").unwrap();
        assert_eq!(consumer.output().as_deref(), Some("a, b, c"));
    }

    #[test]
    fn test_attach_after_mutations_sees_current_state() {
        let ctx: ScopeContext<&'static str> = ScopeContext::establish();
        let _existing = Emitter::mount(&ctx, "already here").unwrap();

        let consumer = Consumer::attach(&ctx, |faults: &[&'static str]| faults.len()).unwrap();
        assert_eq!(consumer.output(), Some(1));
    }

    #[test]
    fn test_end_to_end_disk_full_scenario() {
        let ctx: ScopeContext<String> = ScopeContext::establish();
        let consumer =
            Consumer::attach(&ctx, |faults: &[String]| faults.to_vec()).unwrap();

        let mut emitter = Emitter::mount(&ctx, "disk full".to_string()).unwrap();
        assert_eq!(consumer.output(), Some(vec!["disk full".to_string()]));

        emitter.unmount();
        assert_eq!(consumer.output(), None);
    }

    #[test]
    fn test_dropped_consumer_stops_observing() {
        let ctx: ScopeContext<&'static str> = ScopeContext::establish();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let consumer = Consumer::attach(&ctx, move |_faults: &[&'static str]| {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        drop(consumer);

        let _emitter = Emitter::mount(&ctx, "late").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_debug_output_names_the_consumer() {
        let ctx: ScopeContext<&'static str> = ScopeContext::establish();
        let consumer = Consumer::attach(&ctx, |faults: &[&'static str]| faults.len()).unwrap();
        assert!(format!("{consumer:?}").contains("Consumer"));
    }

    #[test]
    fn test_two_consumers_both_reevaluate() {
        let ctx: ScopeContext<&'static str> = ScopeContext::establish();
        let first = Consumer::attach(&ctx, |faults: &[&'static str]| faults.len()).unwrap();
        let second = Consumer::attach(&ctx, |faults: &[&'static str]| faults.len()).unwrap();

        let _emitter = Emitter::mount(&ctx, "shared").unwrap();
        assert_eq!(first.output(), Some(1));
        assert_eq!(second.output(), Some(1));
    }
}
