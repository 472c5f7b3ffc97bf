//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] reports fault-set transitions through `tracing`. This is
//! primarily useful for development, debugging, and examples.
//!
//! ## Output
//! ```text
//! INFO active faults changed count=2 values=["disk full", "net down"]
//! INFO all faults cleared
//! ```

use std::fmt::Debug;

use super::Subscribe;

/// Built-in subscriber that logs every fault-set change.
///
/// Enabled via the `logging` feature. Not intended for production use -
/// implement a custom [`Subscribe`] for structured reporting that fits your
/// host.
pub struct LogWriter;

impl<T> Subscribe<T> for LogWriter
where
    T: Debug + Send + Sync + 'static,
{
    fn on_change(&self, faults: &[T]) {
        if faults.is_empty() {
            tracing::info!("all faults cleared");
        } else {
            tracing::info!(count = faults.len(), values = ?faults, "active faults changed");
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
