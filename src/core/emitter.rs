//! # Emitter - scoped fault registration guard.
//!
//! An [`Emitter`] translates "a fault value exists in this scope" into an
//! append/remove sequence against the scope's registry. It tracks exactly
//! one live entry at a time and releases it on every exit path: explicit
//! [`Emitter::unmount`], value replacement, or `Drop` (including drop during
//! panic unwind).
//!
//! ## Lifecycle
//! ```text
//! mount(value) ──► Registered ── set_value(same) ──► Registered (no-op)
//!                      │    └── set_value(other) ──► Registered (new tail entry)
//!                      └──── unmount() / drop ─────► Unregistered
//! ```
//!
//! ## Rules
//! - At most one live entry per emitter at any time.
//! - Value replacement never updates in place: the old entry is removed and
//!   a brand-new entry is appended at the tail, so the fault moves to the
//!   end of the order.
//! - Replacement with an equal value (by `PartialEq`) is a no-op: no
//!   duplicate append, no flicker removal/re-add.
//! - Teardown is idempotent; a second `unmount` removes nothing further.

use std::fmt;
use std::sync::Arc;

use crate::error::ScopeError;
use crate::registry::{EntryHandle, FaultRegistry};

use super::scope::ScopeContext;

/// Scoped registration handle for one fault value.
///
/// Holds the identity of its own current entry only; removal therefore can
/// never touch a different emitter's entry, even one holding an equal value.
pub struct Emitter<T>
where
    T: Clone + Send + Sync + 'static,
{
    registry: Arc<FaultRegistry<T>>,
    handle: Option<EntryHandle>,
    value: T,
}

impl<T> Emitter<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Registers `value` in the scope's registry and returns the live guard.
    ///
    /// Fails with [`ScopeError::ScopeNotEstablished`] before any registry
    /// mutation if the context has no registry.
    pub fn mount(ctx: &ScopeContext<T>, value: T) -> Result<Self, ScopeError> {
        let registry = Arc::clone(ctx.registry()?);
        let handle = registry.append(value.clone());
        Ok(Self {
            registry,
            handle: Some(handle),
            value,
        })
    }

    /// Removes this emitter's entry from the registry.
    ///
    /// Idempotent: calling it on an already-unmounted emitter is a no-op.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.registry.remove(handle);
        }
    }

    /// True while this emitter holds a live entry.
    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    /// The value this emitter currently stands for.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Emitter<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Replaces the emitted fault value.
    ///
    /// - Mounted with an equal value: no-op.
    /// - Otherwise: the old entry (if any) is removed and a new entry is
    ///   appended at the tail. An unmounted emitter re-enters the mounted
    ///   state with a brand-new entry.
    pub fn set_value(&mut self, value: T) {
        if self.handle.is_some() && value == self.value {
            return;
        }
        if let Some(old) = self.handle.take() {
            self.registry.remove(old);
        }
        self.handle = Some(self.registry.append(value.clone()));
        self.value = value;
    }
}

impl<T> Drop for Emitter<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<T> fmt::Debug for Emitter<T>
where
    T: fmt::Debug + Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("handle", &self.handle)
            .field("value", &self.value)
            .finish()
    }
}
