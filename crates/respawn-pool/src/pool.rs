//! The single-kind pool.
//!
//! [`Pool`] services acquire and release for one object kind under the
//! growth policy in [`PoolConfig`], and drives lifecycle notifications at
//! the committed transition points. See the crate docs for the acquire
//! sequence.

use respawn_core::{
    GrowthPhase, InstanceFactory, InstanceId, LifecycleHook, PoolError, PoolId, Poolable,
};
use tracing::{debug, trace, warn};

use crate::config::PoolConfig;
use crate::notify::LifecycleNotifier;
use crate::slot::{SlotState, SlotTable};
use crate::stats::PoolStats;

/// Placement arguments accepted by [`Pool::acquire`] for factory `F`.
pub type Placement<F> = <<F as InstanceFactory>::Instance as Poolable>::Placement;

#[derive(Clone, Copy, Debug, Default)]
struct Counters {
    acquires: u64,
    releases: u64,
    on_demand_creations: u64,
    growth_events: u64,
    instances_created: u64,
}

/// Recycling pool for instances of one kind.
///
/// Instances are owned by the pool for its whole lifetime. Callers hold
/// [`InstanceId`] handles and reach the instance through
/// [`get`](Pool::get) / [`get_mut`](Pool::get_mut) while it is active.
///
/// Release policy is strict: releasing a handle that is not currently
/// active in this pool returns [`PoolError::NotOwned`] and leaves both
/// sets untouched.
///
/// Dropping the pool hands every tracked instance, active or not, to the
/// factory's `destroy`.
pub struct Pool<F: InstanceFactory> {
    id: PoolId,
    kind: F::Kind,
    config: PoolConfig,
    factory: F,
    slots: SlotTable<F::Instance>,
    hooks: LifecycleNotifier<F::Instance>,
    counters: Counters,
}

impl<F: InstanceFactory> Pool<F> {
    /// Build a pool and pre-populate it.
    ///
    /// Creates `config.pre_populate` instances into the inactive set
    /// without firing any hooks.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Config`] if `config` fails validation; no instance
    ///   is created.
    /// - [`PoolError::Factory`] with [`GrowthPhase::PrePopulate`] if the
    ///   factory fails during pre-population. Instances created before
    ///   the failure are handed to the factory's `destroy`.
    ///
    /// # Panics
    ///
    /// Panics if the pool would track more than `u32::MAX` instances.
    pub fn new(factory: F, kind: F::Kind, config: PoolConfig) -> Result<Self, PoolError> {
        Self::with_hooks(factory, kind, config, LifecycleNotifier::new())
    }

    /// Start building a pool with hooks registered before pre-population.
    pub fn builder(factory: F, kind: F::Kind) -> PoolBuilder<F> {
        PoolBuilder {
            factory,
            kind,
            config: PoolConfig::default(),
            hooks: LifecycleNotifier::new(),
        }
    }

    fn with_hooks(
        factory: F,
        kind: F::Kind,
        config: PoolConfig,
        hooks: LifecycleNotifier<F::Instance>,
    ) -> Result<Self, PoolError> {
        config.validate()?;

        let mut pool = Self {
            id: PoolId::next(),
            kind,
            slots: SlotTable::with_capacity(config.pre_populate),
            config,
            factory,
            hooks,
            counters: Counters::default(),
        };
        pool.create_batch(pool.config.pre_populate, GrowthPhase::PrePopulate)?;

        debug!(
            pool = %pool.id,
            pre_populate = pool.config.pre_populate,
            growth_batch = pool.config.growth_batch,
            max_instances = ?pool.config.max_instances,
            "pool constructed"
        );
        Ok(pool)
    }

    /// Take an instance out of the pool and place it.
    ///
    /// Reuses the inactive head if there is one, otherwise creates one
    /// instance on demand. If the inactive set is empty once the selected
    /// instance is active, a growth batch of `growth_batch` instances is
    /// created. `on_activated` hooks fire last, before this returns.
    ///
    /// # Errors
    ///
    /// - [`PoolError::CapacityExceeded`] if nothing is inactive and the
    ///   pool is at `max_instances`. The pool is unchanged.
    /// - [`PoolError::Factory`] with [`GrowthPhase::OnDemand`] if on-demand
    ///   creation fails. The pool is unchanged.
    /// - [`PoolError::Factory`] with [`GrowthPhase::GrowthBatch`] if the
    ///   growth batch fails part-way. Instances created before the failure
    ///   stay inactive, and the selected instance is reset and returned to
    ///   the inactive set without firing hooks.
    ///
    /// # Panics
    ///
    /// Panics if growth would take the pool past `u32::MAX` instances.
    pub fn acquire(&mut self, placement: Placement<F>) -> Result<InstanceId, PoolError> {
        let slot = match self.slots.activate_next() {
            Some(slot) => slot,
            None => self.create_on_demand()?,
        };
        self.slots.instance_mut(slot).place(placement);

        if self.slots.inactive_len() == 0 {
            if let Err(err) = self.grow() {
                self.slots.deactivate(slot);
                self.slots.instance_mut(slot).reset();
                debug!(
                    pool = %self.id,
                    slot,
                    inactive = self.slots.inactive_len(),
                    "growth batch failed, acquire rolled back"
                );
                return Err(err);
            }
        }

        let id = InstanceId::new(self.id, slot);
        self.counters.acquires += 1;
        trace!(pool = %self.id, instance = %id, active = self.slots.active_len(), "acquired");
        self.hooks
            .notify_activated(id, self.slots.instance_mut(slot));
        Ok(id)
    }

    /// Return an active instance to the pool.
    ///
    /// Moves it to the inactive set, resets it, then fires
    /// `on_deactivated` hooks.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::NotOwned`] if `id` came from another pool or
    /// is not currently active here. Nothing changes in that case.
    pub fn release(&mut self, id: InstanceId) -> Result<(), PoolError> {
        if id.pool() != self.id || !self.slots.deactivate(id.slot()) {
            warn!(pool = %self.id, instance = %id, "release rejected: instance not active in this pool");
            return Err(PoolError::NotOwned { instance: id });
        }

        let instance = self.slots.instance_mut(id.slot());
        instance.reset();
        self.counters.releases += 1;
        trace!(pool = %self.id, instance = %id, "released");
        self.hooks.notify_deactivated(id, instance);
        Ok(())
    }

    /// This pool's unique ID.
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// The kind this pool produces.
    pub fn kind(&self) -> &F::Kind {
        &self.kind
    }

    /// Configuration the pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Instances created per growth event.
    pub fn growth_batch(&self) -> usize {
        self.config.growth_batch
    }

    /// Number of instances on loan.
    pub fn active_count(&self) -> usize {
        self.slots.active_len()
    }

    /// Number of instances available for reuse.
    pub fn inactive_count(&self) -> usize {
        self.slots.inactive_len()
    }

    /// Total tracked instances.
    pub fn total_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether `id` is currently on loan from this pool.
    pub fn is_active(&self, id: InstanceId) -> bool {
        self.state(id).is_some_and(SlotState::is_active)
    }

    /// Whether `id` names an instance tracked by this pool, active or not.
    pub fn owns(&self, id: InstanceId) -> bool {
        self.state(id).is_some()
    }

    /// Borrow an active instance.
    ///
    /// Returns `None` for inactive or foreign handles: a caller only has
    /// custody of an instance while it is on loan.
    pub fn get(&self, id: InstanceId) -> Option<&F::Instance> {
        if !self.is_active(id) {
            return None;
        }
        self.slots.get(id.slot())
    }

    /// Mutably borrow an active instance.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut F::Instance> {
        if !self.is_active(id) {
            return None;
        }
        self.slots.get_mut(id.slot())
    }

    /// Handles of all active instances. Order is unspecified.
    pub fn active_ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.slots
            .active_slots()
            .iter()
            .map(move |&slot| InstanceId::new(self.id, slot))
    }

    /// Handles of all inactive instances, next-to-be-reused last.
    pub fn inactive_ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.slots
            .inactive_slots()
            .iter()
            .map(move |&slot| InstanceId::new(self.id, slot))
    }

    /// Active instances with their handles. Order is unspecified.
    pub fn iter_active(&self) -> impl Iterator<Item = (InstanceId, &F::Instance)> + '_ {
        self.slots
            .active_slots()
            .iter()
            .map(move |&slot| (InstanceId::new(self.id, slot), self.slots.instance(slot)))
    }

    /// Register a lifecycle hook. Fires after previously registered hooks.
    pub fn add_hook(&mut self, hook: impl LifecycleHook<F::Instance> + 'static) {
        self.hooks.register(hook);
    }

    /// The hooks registered for this pool.
    pub fn hooks_mut(&mut self) -> &mut LifecycleNotifier<F::Instance> {
        &mut self.hooks
    }

    /// The factory backing this pool.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Occupancy and cumulative activity.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            active: self.slots.active_len(),
            inactive: self.slots.inactive_len(),
            acquires: self.counters.acquires,
            releases: self.counters.releases,
            on_demand_creations: self.counters.on_demand_creations,
            growth_events: self.counters.growth_events,
            instances_created: self.counters.instances_created,
        }
    }

    /// Tear the pool down, handing every tracked instance, active or
    /// not, to the factory's `destroy`.
    ///
    /// Dropping a pool does the same; this only makes the point of
    /// teardown explicit.
    pub fn destroy(self) {
        drop(self);
    }

    fn dispose(&mut self) {
        let slots = std::mem::take(&mut self.slots);
        let count = slots.len();
        for instance in slots.into_instances() {
            self.factory.destroy(instance);
        }
        debug!(pool = %self.id, destroyed = count, "pool destroyed");
    }

    fn state(&self, id: InstanceId) -> Option<SlotState> {
        if id.pool() != self.id {
            return None;
        }
        self.slots.state(id.slot())
    }

    /// Instances that may still be created before the ceiling.
    fn headroom(&self) -> Option<usize> {
        self.config
            .max_instances
            .map(|max| max.saturating_sub(self.slots.len()))
    }

    fn create_on_demand(&mut self) -> Result<u32, PoolError> {
        if let Some(capacity) = self.config.max_instances {
            if self.slots.len() >= capacity {
                debug!(pool = %self.id, capacity, "acquire refused, pool at capacity");
                return Err(PoolError::CapacityExceeded { capacity });
            }
        }
        let instance = self
            .factory
            .create(&self.kind)
            .map_err(|source| PoolError::Factory {
                phase: GrowthPhase::OnDemand,
                source,
            })?;
        self.counters.instances_created += 1;
        self.counters.on_demand_creations += 1;
        let slot = self.slots.push_active(instance);
        debug!(pool = %self.id, total = self.slots.len(), "inactive set empty, created instance on demand");
        Ok(slot)
    }

    fn grow(&mut self) -> Result<(), PoolError> {
        let requested = self.config.growth_batch;
        let amount = self
            .headroom()
            .map_or(requested, |room| requested.min(room));
        if amount < requested {
            debug!(pool = %self.id, requested, amount, "growth batch clipped by max_instances");
        }
        if amount == 0 {
            return Ok(());
        }
        self.create_batch(amount, GrowthPhase::GrowthBatch)?;
        self.counters.growth_events += 1;
        debug!(pool = %self.id, amount, total = self.slots.len(), "pool grew");
        Ok(())
    }

    /// Create `amount` instances into the inactive set.
    ///
    /// Each instance is tracked as soon as it exists, so a failure
    /// part-way keeps everything created so far.
    fn create_batch(&mut self, amount: usize, phase: GrowthPhase) -> Result<(), PoolError> {
        for _ in 0..amount {
            let instance = self
                .factory
                .create(&self.kind)
                .map_err(|source| PoolError::Factory { phase, source })?;
            self.slots.push_inactive(instance);
            self.counters.instances_created += 1;
        }
        Ok(())
    }
}

impl<F: InstanceFactory> Drop for Pool<F> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Builder for [`Pool`].
///
/// Hooks added here are in place before pre-population; pre-population
/// never fires them, but registering them up front keeps construction
/// in one expression.
pub struct PoolBuilder<F: InstanceFactory> {
    factory: F,
    kind: F::Kind,
    config: PoolConfig,
    hooks: LifecycleNotifier<F::Instance>,
}

impl<F: InstanceFactory> PoolBuilder<F> {
    /// Instances to create at construction (default: 0).
    pub fn pre_populate(mut self, count: usize) -> Self {
        self.config.pre_populate = count;
        self
    }

    /// Instances per growth event (default: 0).
    pub fn growth_batch(mut self, count: usize) -> Self {
        self.config.growth_batch = count;
        self
    }

    /// Instance ceiling (default: unbounded).
    pub fn max_instances(mut self, max: usize) -> Self {
        self.config.max_instances = Some(max);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: PoolConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a lifecycle hook.
    pub fn hook(mut self, hook: impl LifecycleHook<F::Instance> + 'static) -> Self {
        self.hooks.register(hook);
        self
    }

    /// Validate the configuration and build the pool.
    ///
    /// # Errors
    ///
    /// Same as [`Pool::new`].
    ///
    /// # Panics
    ///
    /// Same as [`Pool::new`].
    pub fn build(self) -> Result<Pool<F>, PoolError> {
        Pool::with_hooks(self.factory, self.kind, self.config, self.hooks)
    }
}

#[cfg(test)]
mod tests {
    use respawn_core::{ConfigError, FactoryError};
    use respawn_test_utils::{
        hook_log, CountingFactory, HookEvent, Placement as At, RecordingHook, WidgetKind,
    };

    use super::*;

    fn widget_pool(pre_populate: usize, growth_batch: usize) -> Pool<CountingFactory> {
        Pool::new(
            CountingFactory::new(),
            WidgetKind::Widget,
            PoolConfig::new(pre_populate, growth_batch),
        )
        .unwrap()
    }

    #[test]
    fn construct_pre_populates_inactive() {
        let pool = widget_pool(3, 2);
        assert_eq!(pool.inactive_count(), 3);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.factory().created(), 3);
        pool.slots.assert_consistent();
    }

    #[test]
    fn third_acquire_triggers_growth_batch() {
        let mut pool = widget_pool(3, 2);
        for _ in 0..3 {
            pool.acquire(At::default()).unwrap();
        }
        assert_eq!(pool.active_count(), 3);
        assert_eq!(pool.inactive_count(), 2);
        assert_eq!(pool.total_count(), 5);
        assert_eq!(pool.stats().growth_events, 1);
        pool.slots.assert_consistent();
    }

    #[test]
    fn release_moves_instance_back() {
        let mut pool = widget_pool(3, 2);
        let ids: Vec<_> = (0..3).map(|_| pool.acquire(At::default()).unwrap()).collect();
        pool.release(ids[1]).unwrap();
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.inactive_count(), 3);
        assert!(!pool.is_active(ids[1]));
        assert!(pool.owns(ids[1]));
        pool.slots.assert_consistent();
    }

    #[test]
    fn empty_pool_with_zero_batch_creates_one_on_demand() {
        let mut pool = widget_pool(0, 0);
        let id = pool.acquire(At::default()).unwrap();
        assert!(pool.is_active(id));
        assert_eq!(pool.active_count(), 1);
        assert_eq!(pool.inactive_count(), 0);
        let stats = pool.stats();
        assert_eq!(stats.on_demand_creations, 1);
        assert_eq!(stats.growth_events, 0);
        assert_eq!(stats.instances_created, 1);
    }

    #[test]
    fn release_of_foreign_handle_is_rejected() {
        let mut pool = widget_pool(2, 1);
        let mut other = widget_pool(2, 1);
        let foreign = other.acquire(At::default()).unwrap();

        assert_eq!(
            pool.release(foreign),
            Err(PoolError::NotOwned { instance: foreign })
        );
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.inactive_count(), 2);
        pool.slots.assert_consistent();
    }

    #[test]
    fn double_release_is_rejected() {
        let mut pool = widget_pool(1, 1);
        let id = pool.acquire(At::default()).unwrap();
        pool.release(id).unwrap();
        let before = pool.stats();
        assert_eq!(pool.release(id), Err(PoolError::NotOwned { instance: id }));
        assert_eq!(pool.stats(), before);
    }

    #[test]
    fn on_demand_and_growth_fire_in_same_acquire() {
        let mut pool = widget_pool(0, 4);
        pool.acquire(At::default()).unwrap();
        let stats = pool.stats();
        assert_eq!(stats.on_demand_creations, 1);
        assert_eq!(stats.growth_events, 1);
        assert_eq!(pool.inactive_count(), 4);
        assert_eq!(pool.total_count(), 5);
    }

    #[test]
    fn acquire_reuses_most_recently_released() {
        let mut pool = widget_pool(4, 1);
        let a = pool.acquire(At::default()).unwrap();
        let b = pool.acquire(At::default()).unwrap();
        pool.release(a).unwrap();
        pool.release(b).unwrap();
        assert_eq!(pool.acquire(At::default()).unwrap(), b);
        assert_eq!(pool.acquire(At::default()).unwrap(), a);
    }

    #[test]
    fn placement_applied_and_reset_on_release() {
        let mut pool = widget_pool(1, 0);
        let id = pool.acquire(At::at(3.0, 4.0)).unwrap();
        {
            let widget = pool.get(id).unwrap();
            assert_eq!(widget.position, [3.0, 4.0]);
            assert!(widget.enabled);
        }
        pool.release(id).unwrap();
        assert!(pool.get(id).is_none());
        let id = pool.acquire(At::at(-1.0, 2.0)).unwrap();
        let widget = pool.get(id).unwrap();
        assert_eq!(widget.position, [-1.0, 2.0]);
        assert_eq!(widget.placements, 2);
        assert_eq!(widget.resets, 1);
    }

    #[test]
    fn get_mut_only_for_active() {
        let mut pool = widget_pool(2, 0);
        let id = pool.acquire(At::default()).unwrap();
        pool.get_mut(id).unwrap().heading = 1.5;
        assert_eq!(pool.get(id).unwrap().heading, 1.5);
        let inactive = pool.inactive_ids().next().unwrap();
        assert!(pool.get_mut(inactive).is_none());
    }

    #[test]
    fn invalid_config_creates_nothing() {
        let factory = CountingFactory::new();
        let probe = factory.clone();
        let result = Pool::new(
            factory,
            WidgetKind::Widget,
            PoolConfig::new(3, 1).with_max_instances(2),
        );
        assert!(matches!(
            result,
            Err(PoolError::Config(ConfigError::PrePopulateExceedsCapacity { .. }))
        ));
        assert_eq!(probe.created(), 0);
    }

    #[test]
    fn pre_populate_failure_propagates() {
        let factory = CountingFactory::with_limit(2);
        let probe = factory.clone();
        let result = Pool::new(factory, WidgetKind::Widget, PoolConfig::new(5, 0));
        assert_eq!(
            result.err(),
            Some(PoolError::Factory {
                phase: GrowthPhase::PrePopulate,
                source: FactoryError::Exhausted { created: 2 },
            })
        );
        // The two that were built go back through the factory.
        assert_eq!(probe.created(), 2);
        assert_eq!(probe.destroyed(), vec![1, 2]);
    }

    #[test]
    fn on_demand_failure_leaves_pool_unchanged() {
        let factory = CountingFactory::with_limit(0);
        let mut pool = Pool::new(factory, WidgetKind::Widget, PoolConfig::new(0, 3)).unwrap();
        let err = pool.acquire(At::default()).unwrap_err();
        assert!(matches!(
            err,
            PoolError::Factory {
                phase: GrowthPhase::OnDemand,
                ..
            }
        ));
        assert_eq!(pool.total_count(), 0);
        assert_eq!(pool.stats().acquires, 0);
    }

    #[test]
    fn partial_growth_keeps_created_and_rolls_back_selected() {
        // One pre-populated, then room for two more before the factory runs dry.
        let factory = CountingFactory::with_limit(3);
        let log = hook_log();
        let mut pool = Pool::builder(factory, WidgetKind::Widget)
            .pre_populate(1)
            .growth_batch(4)
            .hook(RecordingHook::new("h", log.clone()))
            .build()
            .unwrap();

        let err = pool.acquire(At::default()).unwrap_err();
        assert!(matches!(
            err,
            PoolError::Factory {
                phase: GrowthPhase::GrowthBatch,
                ..
            }
        ));
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.inactive_count(), 3);
        assert!(log.borrow().is_empty());
        for id in pool.inactive_ids() {
            assert!(pool.owns(id));
        }
        pool.slots.assert_consistent();
    }

    #[test]
    fn capacity_clips_growth_and_refuses_excess() {
        let mut pool = Pool::builder(CountingFactory::new(), WidgetKind::Widget)
            .pre_populate(1)
            .growth_batch(10)
            .max_instances(3)
            .build()
            .unwrap();

        pool.acquire(At::default()).unwrap();
        assert_eq!(pool.total_count(), 3);
        pool.acquire(At::default()).unwrap();
        pool.acquire(At::default()).unwrap();
        assert_eq!(
            pool.acquire(At::default()),
            Err(PoolError::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(pool.active_count(), 3);
        assert_eq!(pool.total_count(), 3);
    }

    #[test]
    fn hooks_fire_after_commit_in_call_order() {
        let log = hook_log();
        let mut pool = Pool::builder(CountingFactory::new(), WidgetKind::Widget)
            .pre_populate(2)
            .growth_batch(1)
            .hook(RecordingHook::new("a", log.clone()))
            .hook(RecordingHook::new("b", log.clone()))
            .build()
            .unwrap();
        assert!(log.borrow().is_empty());

        let first = pool.acquire(At::default()).unwrap();
        pool.release(first).unwrap();

        let events = log.borrow();
        let hooks: Vec<_> = events
            .iter()
            .map(|e| match e {
                HookEvent::Activated { hook, .. } => ("on", *hook),
                HookEvent::Deactivated { hook, .. } => ("off", *hook),
            })
            .collect();
        assert_eq!(hooks, vec![("on", "a"), ("on", "b"), ("off", "a"), ("off", "b")]);
        assert!(events.iter().all(|e| e.id() == first));
    }

    #[test]
    fn destroy_hands_every_instance_to_factory() {
        let mut pool = widget_pool(2, 1);
        let probe = pool.factory().clone();
        pool.acquire(At::default()).unwrap();
        let total = pool.total_count();
        pool.destroy();
        assert_eq!(probe.destroyed().len(), total);
    }

    #[test]
    fn drop_hands_every_instance_to_factory() {
        let factory = CountingFactory::new();
        let probe = factory.clone();
        {
            let mut pool = Pool::new(factory, WidgetKind::Widget, PoolConfig::new(3, 0)).unwrap();
            pool.acquire(At::default()).unwrap();
            assert!(probe.destroyed().is_empty());
        }
        let mut destroyed = probe.destroyed();
        destroyed.sort_unstable();
        assert_eq!(destroyed, vec![1, 2, 3]);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn partition_and_conservation_hold(
                pre in 0usize..6,
                batch in 0usize..4,
                ops in proptest::collection::vec((any::<bool>(), 0usize..16), 1..120),
            ) {
                let mut pool = widget_pool(pre, batch);
                let mut held: Vec<InstanceId> = Vec::new();
                let mut last_total = pool.total_count();

                for (acquire, pick) in ops {
                    if acquire || held.is_empty() {
                        let before = pool.stats();
                        let id = pool.acquire(At::default()).unwrap();
                        let after = pool.stats();
                        held.push(id);
                        // Growth fires exactly when the acquire drained the inactive set.
                        let drained = before.inactive <= 1;
                        let grew = after.growth_events > before.growth_events;
                        prop_assert_eq!(grew, drained && batch > 0);
                    } else {
                        let id = held.swap_remove(pick % held.len());
                        pool.release(id).unwrap();
                    }

                    pool.slots.assert_consistent();
                    prop_assert!(pool.total_count() >= last_total);
                    last_total = pool.total_count();
                    prop_assert_eq!(pool.active_count(), held.len());
                    for id in &held {
                        prop_assert!(pool.is_active(*id));
                    }
                }
            }
        }
    }
}
