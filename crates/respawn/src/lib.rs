//! Respawn: object pooling for spawn-heavy simulations and games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Respawn sub-crates. Most users only need `respawn` as a dependency.
//!
//! # Quick start
//!
//! ```rust
//! use respawn::prelude::*;
//!
//! const BULLET: u8 = 0;
//!
//! struct Bullet { x: f32, y: f32, live: bool }
//!
//! impl Poolable for Bullet {
//!     type Placement = (f32, f32);
//!     fn place(&mut self, (x, y): (f32, f32)) {
//!         self.x = x;
//!         self.y = y;
//!         self.live = true;
//!     }
//!     fn reset(&mut self) { self.live = false; }
//! }
//!
//! let factory = FnFactory::new(|_kind: &u8| {
//!     Ok::<_, FactoryError>(Bullet { x: 0.0, y: 0.0, live: false })
//! });
//!
//! // Four bullets up front, two more whenever the pool runs dry.
//! let mut registry = PoolRegistry::new(factory);
//! registry.setup([PoolSetup::new(BULLET, 4, 2)]).unwrap();
//!
//! let shot = registry.acquire_by_kind(&BULLET, (1.0, 2.0)).unwrap();
//! let id = shot.pooled_id().unwrap();
//! assert!(registry.get(id).unwrap().live);
//!
//! registry.release(id).unwrap();
//! assert!(registry.get(id).is_none());
//! assert_eq!(registry.pool(&BULLET).unwrap().inactive_count(), 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `respawn-core` | IDs, errors, collaborator traits |
//! | [`pool`] | `respawn-pool` | Single-kind pool, config, hooks, stats |
//! | [`registry`] | `respawn-registry` | Kind-keyed registry and startup setup |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`respawn-core`).
///
/// Contains [`types::InstanceId`], the error taxonomy, and the traits a
/// host implements ([`types::Poolable`], [`types::InstanceFactory`],
/// [`types::LifecycleHook`]).
pub use respawn_core as types;

/// The single-kind pool (`respawn-pool`).
pub use respawn_pool as pool;

/// Kind → pool routing (`respawn-registry`).
///
/// Pools for several kinds behind one [`registry::PoolRegistry`], with
/// unpooled fallback for kinds that have none.
pub use respawn_registry as registry;

/// Common imports for typical Respawn usage.
///
/// ```rust
/// use respawn::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use respawn_core::{
        FnFactory, InstanceFactory, InstanceId, LifecycleHook, PoolId, Poolable,
    };

    // Errors
    pub use respawn_core::{ConfigError, FactoryError, GrowthPhase, PoolError};

    // Pool
    pub use respawn_pool::{OnActivated, OnDeactivated, Pool, PoolBuilder, PoolConfig, PoolStats};

    // Registry
    pub use respawn_registry::{PoolRegistry, PoolSetup, RegistryError, Spawned};
}
