//! Keyed pool of idle rendered-element instances.

use smallvec::SmallVec;

use crate::collections::map::HashMap;
use crate::{RenderInstance, ReuseKey};

/// Inline capacity for the per-key idle list. The number of concurrently
/// idle instances for one content type is bounded by how many leave the
/// viewport in a single pass, which is small.
type IdleVec = SmallVec<[Box<dyn RenderInstance>; 4]>;

/// Pool of previously created rendered instances, keyed by [`ReuseKey`].
///
/// `pop` and `push` transfer ownership: an instance is either idle in the
/// pool or exclusively held by one presentation-state entry, never both.
/// That makes the no-aliasing rule structural rather than a convention.
/// There is no eviction policy; growth is naturally bounded by the number
/// of distinct (key, concurrently-visible-count) combinations, which the
/// viewport bounds.
#[derive(Default)]
pub struct ReusePool {
    idle: HashMap<ReuseKey, IdleVec>,
}

impl ReusePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an idle instance for `key`, or invokes `factory` to create a
    /// fresh one.
    ///
    /// Two pops without an intervening push always yield distinct instances.
    pub fn pop(
        &mut self,
        key: ReuseKey,
        factory: impl FnOnce() -> Box<dyn RenderInstance>,
    ) -> Box<dyn RenderInstance> {
        match self.idle.get_mut(&key).and_then(SmallVec::pop) {
            Some(instance) => instance,
            None => {
                log::trace!("reuse pool miss for {}; creating instance", key.name());
                factory()
            }
        }
    }

    /// Returns an instance to the idle pool under `key`, making it eligible
    /// for a future `pop` with the same key.
    ///
    /// Pushing an instance that is already idle in the pool would alias one
    /// instance to two logical elements; that is a contract violation, not a
    /// runtime condition.
    pub fn push(&mut self, key: ReuseKey, instance: Box<dyn RenderInstance>) {
        let idle = self.idle.entry(key).or_default();

        debug_assert!(
            !idle.iter().any(|existing| data_ptr(existing.as_ref()) == data_ptr(instance.as_ref())),
            "instance double-pushed into the reuse pool under {}",
            key.name()
        );

        idle.push(instance);
    }

    /// Borrows an instance for the duration of `f`, then returns it to the
    /// pool: the measurement borrow.
    pub fn use_with<R>(
        &mut self,
        key: ReuseKey,
        factory: impl FnOnce() -> Box<dyn RenderInstance>,
        f: impl FnOnce(&mut dyn RenderInstance) -> R,
    ) -> R {
        let mut instance = self.pop(key, factory);
        let result = f(instance.as_mut());
        self.push(key, instance);
        result
    }

    /// Number of idle instances currently pooled under `key`.
    pub fn idle_count(&self, key: ReuseKey) -> usize {
        self.idle.get(&key).map_or(0, SmallVec::len)
    }
}

fn data_ptr(instance: &dyn RenderInstance) -> *const () {
    instance as *const dyn RenderInstance as *const ()
}
