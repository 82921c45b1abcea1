//! Registry error types.

use std::error::Error;
use std::fmt;

use respawn_core::{ConfigError, FactoryError, PoolError};

/// Errors from registry operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The routed pool operation failed.
    Pool(PoolError),
    /// A pool setup entry was rejected before any pool was built.
    Config(ConfigError),
    /// A pool is already registered for this kind.
    DuplicateKind {
        /// Debug rendering of the kind.
        kind: String,
    },
    /// Unpooled fallback creation failed.
    Fallback(FactoryError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool(e) => write!(f, "pool: {e}"),
            Self::Config(e) => write!(f, "pool setup: {e}"),
            Self::DuplicateKind { kind } => {
                write!(f, "a pool is already registered for kind {kind}")
            }
            Self::Fallback(e) => write!(f, "unpooled fallback: {e}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pool(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Fallback(e) => Some(e),
            Self::DuplicateKind { .. } => None,
        }
    }
}

impl From<PoolError> for RegistryError {
    fn from(e: PoolError) -> Self {
        Self::Pool(e)
    }
}

impl From<ConfigError> for RegistryError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
