//! Lifecycle core: scope establishment, registration and projection.
//!
//! The public API of the crate lives here:
//! - [`scope`]: explicit scope context carrying the registry top-down;
//! - [`emitter`]: RAII guard appending one fault entry per activation and
//!   guaranteeing its removal on every exit path;
//! - [`consumer`]: push-driven snapshot-and-transform projection.

mod consumer;
mod emitter;
mod scope;

pub use consumer::Consumer;
pub use emitter::Emitter;
pub use scope::ScopeContext;
