//! Pool configuration parameters.

use respawn_core::ConfigError;

/// Configuration for a single-kind pool.
///
/// Controls eager pre-population, batch growth, and an optional instance
/// ceiling. Validated at construction; immutable after the pool is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Instances created eagerly when the pool is constructed.
    ///
    /// These go straight into the inactive set and never fire lifecycle
    /// hooks. Default: 0.
    pub pre_populate: usize,

    /// Instances created in one growth event, when an acquire leaves the
    /// inactive set empty.
    ///
    /// Zero disables batch growth; the pool then only creates single
    /// instances on demand. Default: 0.
    pub growth_batch: usize,

    /// Upper bound on tracked instances (active + inactive).
    ///
    /// `None` means unbounded. Batch growth is clipped to the remaining
    /// headroom; an acquire with no inactive instance and no headroom
    /// fails with `CapacityExceeded`. Default: `None`.
    pub max_instances: Option<usize>,
}

impl PoolConfig {
    /// Default pre-population count.
    pub const DEFAULT_PRE_POPULATE: usize = 0;

    /// Default growth batch size.
    pub const DEFAULT_GROWTH_BATCH: usize = 0;

    /// Create an unbounded config with the given counts.
    pub fn new(pre_populate: usize, growth_batch: usize) -> Self {
        Self {
            pre_populate,
            growth_batch,
            max_instances: None,
        }
    }

    /// Build a config from signed counts, as loaded from an external
    /// configuration layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeCount`] if either count is negative.
    pub fn from_signed(pre_populate: i64, growth_batch: i64) -> Result<Self, ConfigError> {
        Ok(Self::new(
            non_negative("pre_populate", pre_populate)?,
            non_negative("growth_batch", growth_batch)?,
        ))
    }

    /// Set an instance ceiling.
    pub fn with_max_instances(mut self, max_instances: usize) -> Self {
        self.max_instances = Some(max_instances);
        self
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroCapacity`] if `max_instances` is `Some(0)`.
    /// - [`ConfigError::PrePopulateExceedsCapacity`] if `pre_populate`
    ///   is above the ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max_instances) = self.max_instances {
            if max_instances == 0 {
                return Err(ConfigError::ZeroCapacity);
            }
            if self.pre_populate > max_instances {
                return Err(ConfigError::PrePopulateExceedsCapacity {
                    pre_populate: self.pre_populate,
                    max_instances,
                });
            }
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRE_POPULATE, Self::DEFAULT_GROWTH_BATCH)
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<usize, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeCount { name, value });
    }
    usize::try_from(value).map_err(|_| ConfigError::NegativeCount { name, value })
}
