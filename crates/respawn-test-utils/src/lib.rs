//! Test utilities and mock collaborators for Respawn development.
//!
//! Provides a [`Widget`] instance type, factories that count or run out
//! ([`CountingFactory`]), and a [`RecordingHook`] that logs lifecycle
//! notifications into a shared [`HookLog`] for ordering assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use respawn_core::{FactoryError, InstanceFactory, InstanceId, LifecycleHook, Poolable};

/// Kinds of test objects. Stands in for a prefab or template handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetKind {
    Widget,
    Gadget,
    Sprocket,
}

/// Placement arguments for [`Widget`]: a 2D position and a heading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub position: [f32; 2],
    pub heading: f32,
}

impl Placement {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: [x, y],
            heading: 0.0,
        }
    }
}

/// A pooled test object that records what the pool did to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub kind: WidgetKind,
    /// 1-based creation order within the factory that built it.
    pub serial: u64,
    pub position: [f32; 2],
    pub heading: f32,
    pub enabled: bool,
    pub placements: u32,
    pub resets: u32,
}

impl Widget {
    pub fn new(kind: WidgetKind, serial: u64) -> Self {
        Self {
            kind,
            serial,
            position: [0.0, 0.0],
            heading: 0.0,
            enabled: false,
            placements: 0,
            resets: 0,
        }
    }
}

impl Poolable for Widget {
    type Placement = Placement;

    fn place(&mut self, placement: Placement) {
        self.position = placement.position;
        self.heading = placement.heading;
        self.enabled = true;
        self.placements += 1;
    }

    fn reset(&mut self) {
        self.enabled = false;
        self.resets += 1;
    }
}

#[derive(Debug, Default)]
struct FactoryCounters {
    created: Cell<u64>,
    destroyed: RefCell<Vec<u64>>,
    limit: Cell<Option<u64>>,
}

/// Factory producing [`Widget`]s with sequential serials.
///
/// Clones share counters and the creation limit, so a test can keep a
/// clone for inspection after moving the original into a pool. Once
/// `limit` instances have been created, further `create` calls fail
/// with [`FactoryError::Exhausted`].
#[derive(Clone, Debug, Default)]
pub struct CountingFactory {
    counters: Rc<FactoryCounters>,
}

impl CountingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory that fails after `limit` successful creations.
    pub fn with_limit(limit: u64) -> Self {
        let factory = Self::new();
        factory.set_limit(Some(limit));
        factory
    }

    /// Change the creation limit for this factory and all its clones.
    pub fn set_limit(&self, limit: Option<u64>) {
        self.counters.limit.set(limit);
    }

    /// Total instances created so far.
    pub fn created(&self) -> u64 {
        self.counters.created.get()
    }

    /// Serials of destroyed instances, in destruction order.
    pub fn destroyed(&self) -> Vec<u64> {
        self.counters.destroyed.borrow().clone()
    }
}

impl InstanceFactory for CountingFactory {
    type Kind = WidgetKind;
    type Instance = Widget;

    fn create(&mut self, kind: &WidgetKind) -> Result<Widget, FactoryError> {
        let created = self.counters.created.get();
        if let Some(limit) = self.counters.limit.get() {
            if created >= limit {
                return Err(FactoryError::Exhausted {
                    created: created as usize,
                });
            }
        }
        let serial = created + 1;
        self.counters.created.set(serial);
        Ok(Widget::new(*kind, serial))
    }

    fn destroy(&mut self, instance: Widget) {
        self.counters.destroyed.borrow_mut().push(instance.serial);
    }
}

/// A lifecycle notification as seen by a [`RecordingHook`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HookEvent {
    Activated {
        hook: &'static str,
        id: InstanceId,
        serial: u64,
    },
    Deactivated {
        hook: &'static str,
        id: InstanceId,
        serial: u64,
    },
}

impl HookEvent {
    pub fn id(&self) -> InstanceId {
        match self {
            Self::Activated { id, .. } | Self::Deactivated { id, .. } => *id,
        }
    }

    pub fn is_activated(&self) -> bool {
        matches!(self, Self::Activated { .. })
    }
}

/// Shared, append-only log of hook events.
pub type HookLog = Rc<RefCell<Vec<HookEvent>>>;

/// Create an empty [`HookLog`].
pub fn hook_log() -> HookLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Hook that appends every notification to a shared log.
///
/// The `name` tags each event so tests with several hooks can check
/// registration-order dispatch.
pub struct RecordingHook {
    name: &'static str,
    log: HookLog,
}

impl RecordingHook {
    pub fn new(name: &'static str, log: HookLog) -> Self {
        Self { name, log }
    }
}

impl LifecycleHook<Widget> for RecordingHook {
    fn on_activated(&mut self, id: InstanceId, instance: &mut Widget) {
        self.log.borrow_mut().push(HookEvent::Activated {
            hook: self.name,
            id,
            serial: instance.serial,
        });
    }

    fn on_deactivated(&mut self, id: InstanceId, instance: &mut Widget) {
        self.log.borrow_mut().push(HookEvent::Deactivated {
            hook: self.name,
            id,
            serial: instance.serial,
        });
    }
}
