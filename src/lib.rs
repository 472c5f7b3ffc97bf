//! # faultscope
//!
//! **faultscope** is a small library for scoped fault aggregation: nested
//! components register fault values into an ordered collection owned by an
//! enclosing scope, and read-side components observe the live set of
//! outstanding faults to render a derived result.
//!
//! It collects and exposes currently-active fault values; it does not catch,
//! classify, retry, or suppress anything. Interpretation of the values is
//! entirely up to the consuming transform.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Emitter #1  │   │  Emitter #2  │   │  Emitter #N  │
//!     │ (fault value)│   │ (fault value)│   │ (fault value)│
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ append/remove    │                  │
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  FaultRegistry (one per established ScopeContext)             │
//! │  - ordered entries, identity-addressed (EntryHandle)          │
//! │  - SubscriberSet (synchronous fan-out on every mutation)      │
//! └──────────────────────────────┬────────────────────────────────┘
//!                                │ emit(post-mutation snapshot)
//!                  ┌─────────────┼─────────────┐
//!                  ▼             ▼             ▼
//!             Consumer #1   Consumer #2    LogWriter
//!             (transform)   (transform)   ("logging")
//! ```
//!
//! ### Lifecycle
//! ```text
//! ScopeContext::establish() ──► fresh FaultRegistry
//!
//! Emitter::mount(ctx, value)
//!   ├─► registry.append(value) ──► retains EntryHandle
//!   ├─► set_value(same)  ──► no-op
//!   ├─► set_value(other) ──► remove(old) + append(new)   (moves to tail)
//!   └─► unmount() / drop ──► remove(handle), idempotent
//!
//! Consumer::attach(ctx, transform)
//!   ├─► subscribes to the registry, evaluates once immediately
//!   ├─► on each mutation: empty snapshot ──► output = None
//!   │                     non-empty      ──► output = Some(transform(&values))
//!   └─► drop ──► unsubscribes
//! ```
//!
//! ## Guarantees
//! | Area          | Description                                                       | Key types               |
//! |---------------|-------------------------------------------------------------------|-------------------------|
//! | **Ordering**  | Entries reflect activation order; value changes move to the tail. | [`FaultRegistry`]       |
//! | **Identity**  | Removal is by handle, never by value equality.                    | [`EntryHandle`]         |
//! | **Cleanup**   | Entry released on every exit path, teardown idempotent.           | [`Emitter`]             |
//! | **Empty gate**| Transform never invoked on an empty collection.                   | [`Consumer`]            |
//! | **Isolation** | Independent scopes never share state; no global singleton.        | [`ScopeContext`]        |
//! | **Errors**    | Use outside an established scope fails at construction time.      | [`ScopeError`]          |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] subscriber
//!   _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use faultscope::{Consumer, Emitter, ScopeContext};
//!
//! fn main() -> Result<(), faultscope::ScopeError> {
//!     // One registry per scope, passed explicitly to descendants.
//!     let scope: ScopeContext<String> = ScopeContext::establish();
//!
//!     // The transform only runs while at least one fault is active.
//!     let banner = Consumer::attach(&scope, |faults: &[String]| faults.join("; "))?;
//!     assert!(banner.output().is_none());
//!
//!     let mut disk = Emitter::mount(&scope, "disk full".to_string())?;
//!     assert_eq!(banner.output().as_deref(), Some("disk full"));
//!
//!     // Replacing the value moves the entry to the tail of the order.
//!     disk.set_value("disk read-only".to_string());
//!     assert_eq!(banner.output().as_deref(), Some("disk read-only"));
//!
//!     // Unmounting (or dropping) the emitter releases its entry.
//!     disk.unmount();
//!     assert!(banner.output().is_none());
//!     Ok(())
//! }
//! ```

mod core;
mod error;
mod registry;
mod subscribers;

// ---- Public re-exports ----

pub use core::{Consumer, Emitter, ScopeContext};
pub use error::ScopeError;
pub use registry::{EntryHandle, FaultRegistry};
pub use subscribers::{Subscribe, SubscriberSet, SubscriptionId};

// Optional: expose a simple built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
