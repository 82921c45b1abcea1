//! Lifecycle notification dispatch.
//!
//! [`LifecycleNotifier`] holds the hooks registered for one kind and
//! dispatches activation/deactivation events to them in registration
//! order. The pool calls it only after a transition has been committed,
//! so a hook cannot observe (or leave behind) a half-updated partition.

use std::fmt;

use respawn_core::{InstanceId, LifecycleHook};
use smallvec::SmallVec;

/// Ordered list of lifecycle hooks for one kind.
pub struct LifecycleNotifier<T> {
    hooks: SmallVec<[Box<dyn LifecycleHook<T>>; 2]>,
}

impl<T> LifecycleNotifier<T> {
    /// Create a notifier with no hooks.
    pub fn new() -> Self {
        Self {
            hooks: SmallVec::new(),
        }
    }

    /// Append a hook. Hooks fire in the order they were registered.
    pub fn register(&mut self, hook: impl LifecycleHook<T> + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Dispatch `on_activated` to every hook.
    pub fn notify_activated(&mut self, id: InstanceId, instance: &mut T) {
        for hook in &mut self.hooks {
            hook.on_activated(id, instance);
        }
    }

    /// Dispatch `on_deactivated` to every hook.
    pub fn notify_deactivated(&mut self, id: InstanceId, instance: &mut T) {
        for hook in &mut self.hooks {
            hook.on_deactivated(id, instance);
        }
    }
}

impl<T> Default for LifecycleNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LifecycleNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleNotifier")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

/// Hook that runs a closure on activation only.
pub struct OnActivated<F>(pub F);

impl<T, F> LifecycleHook<T> for OnActivated<F>
where
    F: FnMut(InstanceId, &mut T),
{
    fn on_activated(&mut self, id: InstanceId, instance: &mut T) {
        (self.0)(id, instance);
    }
}

/// Hook that runs a closure on deactivation only.
pub struct OnDeactivated<F>(pub F);

impl<T, F> LifecycleHook<T> for OnDeactivated<F>
where
    F: FnMut(InstanceId, &mut T),
{
    fn on_deactivated(&mut self, id: InstanceId, instance: &mut T) {
        (self.0)(id, instance);
    }
}
