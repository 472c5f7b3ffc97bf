//! Error types used by the faultscope core.
//!
//! There is deliberately a single error condition: every registry operation
//! is total once a registry exists, so the only thing that can go wrong is
//! using a scope-dependent component outside any established scope.

use thiserror::Error;

/// # Errors produced by scope resolution.
///
/// Raised when a component that needs a fault registry (an
/// [`Emitter`](crate::Emitter) or [`Consumer`](crate::Consumer)) is
/// constructed against a context in which no registry has been established.
///
/// This is programmer misuse, not a runtime condition: it is surfaced at
/// construction time and is never retried or recovered, because continuing
/// would silently drop faults.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeError {
    /// No fault registry has been established in the calling scope.
    #[error("no fault registry has been established in the calling scope")]
    ScopeNotEstablished,
}

impl ScopeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use faultscope::ScopeError;
    ///
    /// assert_eq!(ScopeError::ScopeNotEstablished.as_label(), "scope_not_established");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ScopeError::ScopeNotEstablished => "scope_not_established",
        }
    }
}
