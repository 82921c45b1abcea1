//! Error types for the Respawn object pool.
//!
//! Organized by origin: the instance factory (external collaborator),
//! pool configuration, and pool operations. Registry errors live in
//! `respawn-registry` and wrap these.

use std::error::Error;
use std::fmt;

use crate::id::InstanceId;

/// Errors reported by an [`InstanceFactory`](crate::InstanceFactory).
///
/// The pool never interprets these beyond wrapping them in
/// [`PoolError::Factory`]; they are always propagated to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactoryError {
    /// The factory has no capacity left to produce instances.
    Exhausted {
        /// Number of instances the factory produced before running out.
        created: usize,
    },
    /// Construction failed for a factory-specific reason.
    Failed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { created } => {
                write!(f, "factory exhausted after creating {created} instances")
            }
            Self::Failed { reason } => write!(f, "instance construction failed: {reason}"),
        }
    }
}

impl Error for FactoryError {}

/// Which creation path was running when a factory error surfaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrowthPhase {
    /// Eager creation at pool construction.
    PrePopulate,
    /// Single instance created to satisfy an acquire on an empty pool.
    OnDemand,
    /// Batch created after an acquire left the inactive set empty.
    GrowthBatch,
}

impl fmt::Display for GrowthPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrePopulate => write!(f, "pre-population"),
            Self::OnDemand => write!(f, "on-demand creation"),
            Self::GrowthBatch => write!(f, "growth batch"),
        }
    }
}

/// Invalid pool configuration, rejected before any instance is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A count loaded from external configuration was negative.
    NegativeCount {
        /// Which setting carried the value.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// `max_instances` was set to zero; such a pool could never hand
    /// anything out.
    ZeroCapacity,
    /// Pre-population asks for more instances than the pool may hold.
    PrePopulateExceedsCapacity {
        /// Requested pre-population count.
        pre_populate: usize,
        /// Configured instance ceiling.
        max_instances: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCount { name, value } => {
                write!(f, "{name} must be non-negative, got {value}")
            }
            Self::ZeroCapacity => write!(f, "max_instances must be at least 1"),
            Self::PrePopulateExceedsCapacity {
                pre_populate,
                max_instances,
            } => {
                write!(
                    f,
                    "pre_populate {pre_populate} exceeds max_instances {max_instances}"
                )
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from pool construction, acquire, and release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The instance factory failed while the pool was creating instances.
    Factory {
        /// Creation path that was running.
        phase: GrowthPhase,
        /// The underlying factory error.
        source: FactoryError,
    },
    /// Release was called with a handle this pool does not list as active:
    /// it belongs to another pool, or it is already inactive.
    NotOwned {
        /// The rejected handle.
        instance: InstanceId,
    },
    /// The pool is at its `max_instances` ceiling with nothing inactive.
    CapacityExceeded {
        /// The configured ceiling.
        capacity: usize,
    },
    /// Configuration was rejected at construction.
    Config(ConfigError),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factory { phase, source } => write!(f, "{phase} failed: {source}"),
            Self::NotOwned { instance } => {
                write!(f, "instance {instance} is not active in this pool")
            }
            Self::CapacityExceeded { capacity } => {
                write!(f, "pool capacity of {capacity} instances exhausted")
            }
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for PoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Factory { source, .. } => Some(source),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for PoolError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
