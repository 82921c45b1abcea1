//! Startup pool definitions.

use respawn_core::ConfigError;
use respawn_pool::PoolConfig;

/// One pool to create when a registry starts up.
///
/// Counts are signed because they usually arrive from an external
/// configuration layer that does not enforce non-negativity; they are
/// checked by [`config`](PoolSetup::config) before any pool is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolSetup<K> {
    /// Kind the pool produces.
    pub kind: K,
    /// Instances created eagerly at startup.
    pub pre_populate_amount: i64,
    /// Instances created per growth event.
    pub auto_populate_amount: i64,
}

impl<K> PoolSetup<K> {
    /// Describe a pool.
    pub fn new(kind: K, pre_populate_amount: i64, auto_populate_amount: i64) -> Self {
        Self {
            kind,
            pre_populate_amount,
            auto_populate_amount,
        }
    }

    /// Convert the counts into a validated [`PoolConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeCount`] for a negative amount.
    pub fn config(&self) -> Result<PoolConfig, ConfigError> {
        let config = PoolConfig::from_signed(self.pre_populate_amount, self.auto_populate_amount)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_maps_amounts() {
        let setup = PoolSetup::new("bullet", 16, 4);
        assert_eq!(setup.config().unwrap(), PoolConfig::new(16, 4));
    }

    #[test]
    fn negative_auto_populate_rejected() {
        let setup = PoolSetup::new("bullet", 16, -4);
        assert_eq!(
            setup.config(),
            Err(ConfigError::NegativeCount {
                name: "growth_batch",
                value: -4,
            })
        );
    }
}
