//! Fault entries and their identity handles.
//!
//! An entry's identity is a monotonically increasing slot id, never a value
//! key. Two entries holding equal fault values stay distinguishable, and a
//! handle can only ever remove the entry it was issued for.

/// Opaque identity of one registered fault entry.
///
/// Issued by [`FaultRegistry::append`](crate::FaultRegistry::append) and
/// consumed by [`FaultRegistry::remove`](crate::FaultRegistry::remove).
/// Handles are unique per registry for its lifetime; ids are never reused,
/// so a stale handle is a guaranteed no-op rather than an accidental removal
/// of somebody else's entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle(u64);

impl EntryHandle {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// One active registration: an identity paired with its fault payload.
#[derive(Debug, Clone)]
pub(crate) struct FaultEntry<T> {
    pub(crate) id: EntryHandle,
    pub(crate) value: T,
}
