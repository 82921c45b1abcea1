//! Closure adapter for [`InstanceFactory`].

use std::fmt;
use std::marker::PhantomData;

use crate::error::FactoryError;
use crate::traits::{InstanceFactory, Poolable};

/// An [`InstanceFactory`] backed by a closure.
///
/// ```rust
/// use respawn_core::{FactoryError, FnFactory, InstanceFactory, Poolable};
///
/// struct Bullet { x: f32 }
/// impl Poolable for Bullet {
///     type Placement = f32;
///     fn place(&mut self, x: f32) { self.x = x; }
/// }
///
/// let mut factory = FnFactory::new(|_kind: &u32| Ok::<_, FactoryError>(Bullet { x: 0.0 }));
/// let bullet = factory.create(&1).unwrap();
/// assert_eq!(bullet.x, 0.0);
/// ```
pub struct FnFactory<K, T, F> {
    create: F,
    _marker: PhantomData<fn(&K) -> T>,
}

impl<K, T, F> FnFactory<K, T, F>
where
    F: FnMut(&K) -> Result<T, FactoryError>,
{
    /// Wrap a creation closure.
    pub fn new(create: F) -> Self {
        Self {
            create,
            _marker: PhantomData,
        }
    }
}

impl<K, T, F> InstanceFactory for FnFactory<K, T, F>
where
    T: Poolable,
    F: FnMut(&K) -> Result<T, FactoryError>,
{
    type Kind = K;
    type Instance = T;

    fn create(&mut self, kind: &K) -> Result<T, FactoryError> {
        (self.create)(kind)
    }
}

impl<K, T, F: Clone> Clone for FnFactory<K, T, F> {
    fn clone(&self) -> Self {
        Self {
            create: self.create.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K, T, F> fmt::Debug for FnFactory<K, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFactory").finish_non_exhaustive()
    }
}
