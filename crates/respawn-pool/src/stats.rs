//! Pool usage counters.

/// Snapshot of a pool's occupancy and cumulative activity.
///
/// `active` and `inactive` are current sizes; everything else counts
/// events since the pool was constructed. Pre-populated instances count
/// toward `instances_created` but not toward `growth_events`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Instances currently on loan.
    pub active: usize,
    /// Instances currently available for reuse.
    pub inactive: usize,
    /// Successful acquires.
    pub acquires: u64,
    /// Successful releases.
    pub releases: u64,
    /// Single instances created because an acquire found nothing inactive.
    pub on_demand_creations: u64,
    /// Completed growth batches.
    pub growth_events: u64,
    /// Every instance the factory produced for this pool.
    pub instances_created: u64,
}

impl PoolStats {
    /// Total tracked instances.
    pub fn total(&self) -> usize {
        self.active + self.inactive
    }

    /// Fraction of acquires served without creating an instance.
    ///
    /// Returns `None` before the first acquire.
    pub fn reuse_ratio(&self) -> Option<f64> {
        if self.acquires == 0 {
            return None;
        }
        let reused = self.acquires.saturating_sub(self.on_demand_creations);
        Some(reused as f64 / self.acquires as f64)
    }
}
