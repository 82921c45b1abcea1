//! Kind-keyed registry of Respawn pools.
//!
//! [`PoolRegistry`] maps object kinds to [`Pool`](respawn_pool::Pool)s and
//! routes spawn/despawn calls to them. Kinds without a pool fall back to
//! direct creation and destruction through the registry's own factory.
//! The registry is an ordinary value: construct it, pass it where it is
//! needed, drop it when its pools should go away.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod setup;

pub use error::RegistryError;
pub use registry::{PoolRegistry, Spawned};
pub use setup::PoolSetup;
