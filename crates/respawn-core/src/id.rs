//! Strongly-typed identifiers for pools and pooled instances.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`PoolId`] allocation.
static POOL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-pool identifier.
///
/// Allocated from a monotonic atomic counter via [`PoolId::next`] when a
/// pool is constructed. Two pools never share an ID within a process, even
/// if one is dropped and another is built for the same kind. Every
/// [`InstanceId`] carries the ID of the pool that produced it, which lets
/// a pool reject foreign handles and lets the registry find the owning
/// pool without scanning active sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolId(u64);

impl PoolId {
    /// Allocate a fresh, unique pool ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process.
    pub fn next() -> Self {
        Self(POOL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to one pooled instance.
///
/// Encodes the owning pool and the instance's slot in that pool's slot
/// table. Slots are never removed while the pool lives, so a handle keeps
/// naming the same instance for the pool's whole lifetime; whether the
/// instance is currently on loan is a question for the pool
/// (`Pool::is_active`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct InstanceId {
    pool: PoolId,
    slot: u32,
}

impl InstanceId {
    /// Create a handle. Only pools should mint these.
    pub fn new(pool: PoolId, slot: u32) -> Self {
        Self { pool, slot }
    }

    /// The pool that produced this instance.
    pub fn pool(self) -> PoolId {
        self.pool
    }

    /// Slot index within the owning pool.
    pub fn slot(self) -> u32 {
        self.slot
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pool, self.slot)
    }
}
