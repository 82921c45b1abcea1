//! Core types and traits for the Respawn object pool.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by the pool and the registry: handle IDs,
//! the error taxonomy, and the collaborator traits a host environment
//! implements (instance factory, poolable instance, lifecycle hook).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod factory;
pub mod id;
pub mod traits;

pub use error::{ConfigError, FactoryError, GrowthPhase, PoolError};
pub use factory::FnFactory;
pub use id::{InstanceId, PoolId};
pub use traits::{InstanceFactory, LifecycleHook, Poolable};
