//! Integration test: registry startup, routing, and release policy.
//!
//! Builds a registry from startup setups the way a host would at scene
//! load, then spawns and despawns across pooled and unpooled kinds.

use respawn_core::{ConfigError, PoolError};
use respawn_registry::{PoolRegistry, PoolSetup, RegistryError, Spawned};
use respawn_test_utils::{hook_log, CountingFactory, Placement, RecordingHook, WidgetKind};

fn startup_registry() -> PoolRegistry<CountingFactory> {
    let mut registry = PoolRegistry::new(CountingFactory::new());
    registry
        .setup([
            PoolSetup::new(WidgetKind::Widget, 3, 2),
            PoolSetup::new(WidgetKind::Gadget, 0, 4),
        ])
        .unwrap();
    registry
}

#[test]
fn setup_pre_populates_in_order() {
    let registry = startup_registry();
    let kinds: Vec<_> = registry.kinds().copied().collect();
    assert_eq!(kinds, vec![WidgetKind::Widget, WidgetKind::Gadget]);
    assert_eq!(registry.pool(&WidgetKind::Widget).unwrap().inactive_count(), 3);
    assert_eq!(registry.pool(&WidgetKind::Gadget).unwrap().inactive_count(), 0);
    // Pools build from clones of the fallback, which share its counters.
    assert_eq!(registry.fallback().created(), 3);
}

#[test]
fn negative_setup_rejects_everything() {
    let mut registry = PoolRegistry::new(CountingFactory::new());
    let err = registry
        .setup([
            PoolSetup::new(WidgetKind::Widget, 3, 2),
            PoolSetup::new(WidgetKind::Gadget, -1, 4),
        ])
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::Config(ConfigError::NegativeCount {
            name: "pre_populate",
            value: -1,
        })
    );
    assert!(registry.is_empty());
    assert_eq!(registry.fallback().created(), 0);
}

#[test]
fn repeated_kind_in_setup_is_rejected() {
    let mut registry = PoolRegistry::new(CountingFactory::new());
    let err = registry
        .setup([
            PoolSetup::new(WidgetKind::Widget, 1, 0),
            PoolSetup::new(WidgetKind::Widget, 1, 0),
        ])
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateKind { .. }));
    assert_eq!(registry.len(), 1);
}

#[test]
fn spawn_and_despawn_across_kinds() {
    let mut registry = startup_registry();
    let log = hook_log();
    registry
        .pool_mut(&WidgetKind::Widget)
        .unwrap()
        .add_hook(RecordingHook::new("widget", log.clone()));

    let widget = registry
        .acquire_by_kind(&WidgetKind::Widget, Placement::at(1.0, 0.0))
        .unwrap();
    let gadget = registry
        .acquire_by_kind(&WidgetKind::Gadget, Placement::at(2.0, 0.0))
        .unwrap();
    let sprocket = registry
        .acquire_by_kind(&WidgetKind::Sprocket, Placement::at(3.0, 0.0))
        .unwrap();

    assert!(widget.is_pooled());
    assert!(gadget.is_pooled());
    assert!(matches!(sprocket, Spawned::Unpooled(_)));
    assert_eq!(log.borrow().len(), 1);

    let widget_id = widget.pooled_id().unwrap();
    let gadget_id = gadget.pooled_id().unwrap();
    assert_eq!(
        registry.owning_pool(gadget_id).unwrap().kind(),
        &WidgetKind::Gadget
    );

    registry.release_by_instance(widget).unwrap();
    registry.release_by_instance(gadget).unwrap();
    registry.release_by_instance(sprocket).unwrap();

    assert_eq!(log.borrow().len(), 2);
    assert!(!registry.pool(&WidgetKind::Widget).unwrap().is_active(widget_id));
    assert!(!registry.pool(&WidgetKind::Gadget).unwrap().is_active(gadget_id));
    assert_eq!(registry.fallback().destroyed().len(), 1);
}

#[test]
fn double_despawn_is_not_owned() {
    let mut registry = startup_registry();
    let id = registry
        .acquire_by_kind(&WidgetKind::Widget, Placement::default())
        .unwrap()
        .pooled_id()
        .unwrap();
    registry.release(id).unwrap();
    assert_eq!(
        registry.release(id),
        Err(RegistryError::Pool(PoolError::NotOwned { instance: id }))
    );
    assert!(registry.fallback().destroyed().is_empty());
}

#[test]
fn stats_report_every_pool() {
    let mut registry = startup_registry();
    for _ in 0..3 {
        registry
            .acquire_by_kind(&WidgetKind::Widget, Placement::default())
            .unwrap();
    }
    let stats: Vec<_> = registry.stats().collect();
    assert_eq!(stats.len(), 2);
    let (kind, widget_stats) = &stats[0];
    assert_eq!(**kind, WidgetKind::Widget);
    assert_eq!(widget_stats.active, 3);
    assert_eq!(widget_stats.inactive, 2);
    assert_eq!(widget_stats.growth_events, 1);
}
