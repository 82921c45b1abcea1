//! Collaborator traits implemented by the host environment.

use crate::error::FactoryError;
use crate::id::InstanceId;

/// An object that can be recycled by a pool.
///
/// `place` re-initializes an instance for a new loan (position,
/// orientation, or whatever the kind needs). `reset` clears transient
/// state when the instance goes back to the inactive set and is where
/// an instance detaches from whatever it was attached to while active.
pub trait Poolable {
    /// Kind-specific re-initialization arguments passed to acquire.
    type Placement;

    /// Apply placement arguments to an instance about to go on loan.
    fn place(&mut self, placement: Self::Placement);

    /// Clear transient state on release. Defaults to doing nothing.
    fn reset(&mut self) {}
}

/// Produces fresh instances of a kind on demand.
///
/// Owned by the pool (or by the registry, for unpooled fallback). The
/// pool only calls it; idempotence and cost are factory-specific.
pub trait InstanceFactory {
    /// Identity or template describing what to build.
    type Kind;
    /// The instance type produced.
    type Instance: Poolable;

    /// Build one new instance of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] if construction cannot complete.
    fn create(&mut self, kind: &Self::Kind) -> Result<Self::Instance, FactoryError>;

    /// Dispose of an instance that leaves pool management.
    ///
    /// Called for unpooled instances released through a registry and for
    /// every tracked instance when a pool is dropped or destroyed.
    /// Defaults to drop.
    fn destroy(&mut self, instance: Self::Instance) {
        drop(instance);
    }
}

/// Observer of pooled instance lifecycle transitions.
///
/// Both methods default to no-ops, so a hook implements only the
/// transitions it cares about. Hooks run synchronously in registration
/// order, after the pool has committed the transition and before the
/// triggering call returns.
pub trait LifecycleHook<T> {
    /// Called after `instance` moved from inactive to active.
    fn on_activated(&mut self, _id: InstanceId, _instance: &mut T) {}

    /// Called after `instance` moved from active to inactive.
    fn on_deactivated(&mut self, _id: InstanceId, _instance: &mut T) {}
}
