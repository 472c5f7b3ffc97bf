//! Fault registry: data model and authoritative collection.
//!
//! This module groups the entry **data model** and the **registry** that
//! owns the ordered collection of active faults for one scope.
//!
//! ## Contents
//! - [`EntryHandle`] opaque identity of one registration
//! - [`FaultRegistry`] ordered collection with push-based change notification
//!
//! ## Quick reference
//! - **Writers**: [`Emitter`](crate::Emitter) via `append`/`remove`.
//! - **Readers**: [`Consumer`](crate::Consumer) via `snapshot` and the
//!   subscriber callbacks fanned out by
//!   [`SubscriberSet`](crate::SubscriberSet).

mod entry;
#[allow(clippy::module_inception)]
mod registry;

pub use entry::EntryHandle;
pub use registry::FaultRegistry;
