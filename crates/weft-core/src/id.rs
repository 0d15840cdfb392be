//! Strongly-typed instance identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`SpaceInstanceId`] allocation.
static SPACE_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a function-space object.
///
/// Allocated from a monotonic atomic counter via [`SpaceInstanceId::next`].
/// Two distinct space instances always have different IDs, even if they
/// have identical descriptors. The form algebra compares instance IDs to
/// decide whether two expressions live on the same space before allowing
/// them to be combined.
///
/// A vector space hands out stable child handles for its scalar component
/// spaces, so repeated component extraction compares equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpaceInstanceId(u64);

impl SpaceInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(SPACE_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SpaceInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_unique() {
        let a = SpaceInstanceId::next();
        let b = SpaceInstanceId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn copy_preserves_identity() {
        let a = SpaceInstanceId::next();
        let b = a;
        assert_eq!(a, b);
    }
}
