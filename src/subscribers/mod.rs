//! # Fault-set subscribers.
//!
//! This module provides the [`Subscribe`] trait and the [`SubscriberSet`]
//! fan-out used by [`FaultRegistry`](crate::FaultRegistry) to push each
//! post-mutation snapshot to its observers.
//!
//! ## Architecture
//! ```text
//! Notification flow:
//!   FaultRegistry ── emit(&[T]) ──► SubscriberSet ──► Subscribe::on_change
//!                                        │
//!                                   ┌────┴────┬──────────┐
//!                                   ▼         ▼          ▼
//!                                Consumer  LogWriter   Custom
//! ```
//!
//! ## Implementing custom subscribers
//! ```
//! use faultscope::Subscribe;
//!
//! struct FaultCounter;
//!
//! impl Subscribe<String> for FaultCounter {
//!     fn on_change(&self, faults: &[String]) {
//!         // update a gauge, ring a bell, ...
//!         let _ = faults.len();
//!     }
//! }
//! ```

#[cfg(feature = "logging")]
mod log;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use set::{SubscriberSet, SubscriptionId};
pub use subscribe::Subscribe;
