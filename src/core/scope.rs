//! # Scope establishment and registry resolution.
//!
//! A [`ScopeContext`] is the explicit stand-in for ambient scope lookup:
//! instead of a hidden global, the context carrying the registry is injected
//! top-down into every component that needs it. Cloning a context hands the
//! same registry to a descendant; two calls to [`ScopeContext::establish`]
//! create fully independent scopes.

use std::sync::Arc;

use crate::error::ScopeError;
use crate::registry::FaultRegistry;

/// Handle to the (possibly absent) fault registry of one scope.
///
/// - [`ScopeContext::establish`] creates a context owning a fresh registry.
/// - [`ScopeContext::detached`] models code running outside any established
///   scope; resolving the registry there fails with
///   [`ScopeError::ScopeNotEstablished`].
///
/// The context is cheap to clone; clones share the same registry.
pub struct ScopeContext<T> {
    registry: Option<Arc<FaultRegistry<T>>>,
}

impl<T: 'static> ScopeContext<T> {
    /// Establishes a new scope with its own empty registry.
    pub fn establish() -> Self {
        Self {
            registry: Some(Arc::new(FaultRegistry::new())),
        }
    }

    /// Creates a context with no registry established.
    ///
    /// Components constructed against it fail loudly instead of silently
    /// dropping faults.
    pub fn detached() -> Self {
        Self { registry: None }
    }

    /// Resolves the nearest enclosing registry.
    pub fn registry(&self) -> Result<&Arc<FaultRegistry<T>>, ScopeError> {
        self.registry.as_ref().ok_or(ScopeError::ScopeNotEstablished)
    }

    /// True if a registry has been established in this scope.
    pub fn is_established(&self) -> bool {
        self.registry.is_some()
    }
}

impl<T> Clone for ScopeContext<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_context_has_no_registry() {
        let ctx: ScopeContext<String> = ScopeContext::detached();
        assert!(!ctx.is_established());
        assert_eq!(ctx.registry().unwrap_err(), ScopeError::ScopeNotEstablished);
    }

    #[test]
    fn test_clones_share_one_registry() {
        let parent: ScopeContext<&'static str> = ScopeContext::establish();
        let child = parent.clone();

        parent.registry().unwrap().append("a");
        assert_eq!(child.registry().unwrap().snapshot(), vec!["a"]);
    }

    #[test]
    fn test_established_scopes_are_isolated() {
        let left: ScopeContext<&'static str> = ScopeContext::establish();
        let right: ScopeContext<&'static str> = ScopeContext::establish();

        left.registry().unwrap().append("only-left");
        assert!(right.registry().unwrap().is_empty());
    }
}
