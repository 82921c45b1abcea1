//! Kind → pool routing.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use respawn_core::{InstanceFactory, InstanceId, PoolError, PoolId, Poolable};
use respawn_pool::{Placement, Pool, PoolConfig, PoolStats};
use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::setup::PoolSetup;

/// Result of [`PoolRegistry::acquire_by_kind`].
///
/// Pooled instances stay inside their pool and are reached through the
/// handle; unpooled instances are handed to the caller outright.
#[derive(Debug, PartialEq)]
pub enum Spawned<T> {
    /// Acquired from the pool registered for the kind.
    Pooled(InstanceId),
    /// Created directly by the fallback factory; no pool tracks it.
    Unpooled(T),
}

impl<T> Spawned<T> {
    /// The pool handle, if this instance is pooled.
    pub fn pooled_id(&self) -> Option<InstanceId> {
        match self {
            Self::Pooled(id) => Some(*id),
            Self::Unpooled(_) => None,
        }
    }

    /// Whether this instance came from a pool.
    pub fn is_pooled(&self) -> bool {
        matches!(self, Self::Pooled(_))
    }

    /// The owned instance, if this instance is unpooled.
    pub fn into_unpooled(self) -> Option<T> {
        match self {
            Self::Pooled(_) => None,
            Self::Unpooled(instance) => Some(instance),
        }
    }
}

/// Registry of pools keyed by kind.
///
/// Owns one pool per kind plus a fallback factory used for kinds that
/// have no pool. Pools are kept in registration order. Pooled handles
/// are routed back to their pool through the [`PoolId`] they carry, so
/// release never scans active sets.
///
/// Release policy: a pooled handle whose pool is not registered here,
/// or is not active in its pool, is rejected with
/// [`PoolError::NotOwned`]. Only [`Spawned::Unpooled`] instances are
/// passed to the fallback factory for destruction.
pub struct PoolRegistry<F: InstanceFactory> {
    fallback: F,
    pools: IndexMap<F::Kind, Pool<F>>,
    owners: IndexMap<PoolId, F::Kind>,
}

impl<F> PoolRegistry<F>
where
    F: InstanceFactory,
    F::Kind: Clone + Eq + Hash + Debug,
{
    /// Create an empty registry.
    pub fn new(fallback: F) -> Self {
        Self {
            fallback,
            pools: IndexMap::new(),
            owners: IndexMap::new(),
        }
    }

    /// Register a pool under its own kind.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKind`] if the kind already has a
    /// pool. The rejected pool is dropped.
    pub fn register_pool(&mut self, pool: Pool<F>) -> Result<&mut Pool<F>, RegistryError> {
        let kind = pool.kind().clone();
        if self.pools.contains_key(&kind) {
            return Err(duplicate(&kind));
        }
        debug!(pool = %pool.id(), kind = ?kind, "pool registered");
        self.owners.insert(pool.id(), kind.clone());
        let (index, _) = self.pools.insert_full(kind, pool);
        Ok(&mut self.pools[index])
    }

    /// Build a pool from a clone of the fallback factory and register it.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateKind`], checked before anything is
    ///   created.
    /// - [`RegistryError::Pool`] if construction fails.
    pub fn create_pool(
        &mut self,
        kind: F::Kind,
        config: PoolConfig,
    ) -> Result<&mut Pool<F>, RegistryError>
    where
        F: Clone,
    {
        if self.pools.contains_key(&kind) {
            return Err(duplicate(&kind));
        }
        let pool = Pool::new(self.fallback.clone(), kind, config)?;
        self.register_pool(pool)
    }

    /// Create the startup pools described by `setups`, in order.
    ///
    /// Every entry is validated before the first pool is built, so a bad
    /// count anywhere leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Config`] for a negative amount.
    /// - [`RegistryError::DuplicateKind`] if a kind repeats or is already
    ///   registered. Pools created earlier in the same call stay registered.
    /// - [`RegistryError::Pool`] if pre-population fails.
    pub fn setup<I>(&mut self, setups: I) -> Result<(), RegistryError>
    where
        F: Clone,
        I: IntoIterator<Item = PoolSetup<F::Kind>>,
    {
        let mut validated = Vec::new();
        for setup in setups {
            let config = setup.config()?;
            validated.push((config, setup.kind));
        }

        for (config, kind) in validated {
            self.create_pool(kind, config)?;
        }
        Ok(())
    }

    /// Remove and return the pool for `kind`.
    ///
    /// Outstanding handles from that pool are no longer routable.
    /// Dropping the returned pool hands its instances to its factory's
    /// `destroy`.
    pub fn unregister(&mut self, kind: &F::Kind) -> Option<Pool<F>> {
        let pool = self.pools.shift_remove(kind)?;
        self.owners.shift_remove(&pool.id());
        debug!(pool = %pool.id(), kind = ?kind, "pool unregistered");
        Some(pool)
    }

    /// Acquire an instance of `kind`.
    ///
    /// Uses the registered pool if there is one. Otherwise creates an
    /// instance through the fallback factory, applies `placement`, and
    /// returns it unpooled; no lifecycle hooks fire for it.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Pool`] if the pool's acquire fails.
    /// - [`RegistryError::Fallback`] if unpooled creation fails.
    pub fn acquire_by_kind(
        &mut self,
        kind: &F::Kind,
        placement: Placement<F>,
    ) -> Result<Spawned<F::Instance>, RegistryError> {
        if let Some(pool) = self.pools.get_mut(kind) {
            return Ok(Spawned::Pooled(pool.acquire(placement)?));
        }

        debug!(kind = ?kind, "no pool registered, creating unpooled instance");
        let mut instance = self
            .fallback
            .create(kind)
            .map_err(RegistryError::Fallback)?;
        instance.place(placement);
        Ok(Spawned::Unpooled(instance))
    }

    /// Give back something obtained from [`acquire_by_kind`](Self::acquire_by_kind).
    ///
    /// Pooled handles are released to their owning pool; unpooled
    /// instances are destroyed by the fallback factory.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Pool`] wrapping [`PoolError::NotOwned`] if
    /// a pooled handle has no registered owner or is not active there.
    pub fn release_by_instance(
        &mut self,
        spawned: Spawned<F::Instance>,
    ) -> Result<(), RegistryError> {
        match spawned {
            Spawned::Pooled(id) => self.release(id),
            Spawned::Unpooled(instance) => {
                debug!("destroying unpooled instance");
                self.fallback.destroy(instance);
                Ok(())
            }
        }
    }

    /// Release a pooled handle to its owning pool.
    ///
    /// # Errors
    ///
    /// Same as [`release_by_instance`](Self::release_by_instance) for
    /// pooled handles.
    pub fn release(&mut self, id: InstanceId) -> Result<(), RegistryError> {
        match self.owning_pool_mut(id) {
            Some(pool) => Ok(pool.release(id)?),
            None => {
                warn!(instance = %id, "release rejected: no registered pool owns this instance");
                Err(PoolError::NotOwned { instance: id }.into())
            }
        }
    }

    /// The pool registered for `kind`.
    pub fn pool(&self, kind: &F::Kind) -> Option<&Pool<F>> {
        self.pools.get(kind)
    }

    /// Mutable access to the pool registered for `kind`.
    pub fn pool_mut(&mut self, kind: &F::Kind) -> Option<&mut Pool<F>> {
        self.pools.get_mut(kind)
    }

    /// The registered pool that produced `id`.
    pub fn owning_pool(&self, id: InstanceId) -> Option<&Pool<F>> {
        let kind = self.owners.get(&id.pool())?;
        self.pools.get(kind)
    }

    /// Mutable access to the registered pool that produced `id`.
    pub fn owning_pool_mut(&mut self, id: InstanceId) -> Option<&mut Pool<F>> {
        let kind = self.owners.get(&id.pool())?;
        self.pools.get_mut(kind)
    }

    /// Borrow an active pooled instance.
    pub fn get(&self, id: InstanceId) -> Option<&F::Instance> {
        self.owning_pool(id)?.get(id)
    }

    /// Mutably borrow an active pooled instance.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut F::Instance> {
        self.owning_pool_mut(id)?.get_mut(id)
    }

    /// Whether `kind` has a registered pool.
    pub fn contains_kind(&self, kind: &F::Kind) -> bool {
        self.pools.contains_key(kind)
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &F::Kind> {
        self.pools.keys()
    }

    /// Per-kind pool statistics, in registration order.
    pub fn stats(&self) -> impl Iterator<Item = (&F::Kind, PoolStats)> {
        self.pools.iter().map(|(kind, pool)| (kind, pool.stats()))
    }

    /// Number of registered pools.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether no pools are registered.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// The factory used for unpooled kinds.
    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

fn duplicate<K: Debug>(kind: &K) -> RegistryError {
    RegistryError::DuplicateKind {
        kind: format!("{kind:?}"),
    }
}
