//! Single-kind object pool for Respawn.
//!
//! A [`Pool`] recycles instances of one object kind instead of creating
//! and destroying them on every spawn. It keeps two disjoint collections,
//! active (on loan to a caller) and inactive (ready for reuse), and grows
//! in batches when an acquire drains the inactive set.
//!
//! # Architecture
//!
//! ```text
//! Pool<F: InstanceFactory>
//! ├── PoolConfig (pre-populate, growth batch, optional ceiling)
//! ├── F (instance factory, owned)
//! ├── SlotTable<F::Instance>
//! │   ├── Slot[] (instance + state tag with back-reference position)
//! │   ├── active: Vec<slot>
//! │   └── inactive: Vec<slot> (LIFO, tail is the head)
//! └── LifecycleNotifier<F::Instance> (ordered hook list)
//! ```
//!
//! # Acquire
//!
//! 1. Take the inactive head, or create one instance on demand.
//! 2. Apply placement.
//! 3. If the inactive set is now empty, create `growth_batch` more.
//! 4. Fire `on_activated` hooks, return the [`InstanceId`](respawn_core::InstanceId).
//!
//! All operations take `&mut self`; a pool is not internally synchronized.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod notify;
pub mod pool;
mod slot;
pub mod stats;

pub use config::PoolConfig;
pub use notify::{LifecycleNotifier, OnActivated, OnDeactivated};
pub use pool::{Placement, Pool, PoolBuilder};
pub use stats::PoolStats;
