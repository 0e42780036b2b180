//! The long-lived state entry behind one item, header, or footer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use roster_layout::{ItemWidth, LayoutDirection, Rect, Size, SizeKey, Sizing};

use crate::collections::map::HashMap;
use crate::{AnyElement, ApplyReason, Identifier, RenderInstance, ReusePool};

/// Identity-keyed state for a single content element.
///
/// Created when an identifier first appears in a reconciliation pass and
/// destroyed when it disappears; in between, its content is replaced in
/// place so the entry object itself survives every update. External
/// observers (in-flight animations, selection) depend on that continuity,
/// which is why entries are handed out as [`Rc`] handles: pointer identity
/// is the observable guarantee.
pub struct ElementState {
    model: RefCell<Box<dyn AnyElement>>,

    /// Measured sizes keyed by the full measurement input tuple. A
    /// populated entry never changes value; it can only be dropped wholesale
    /// by an equivalence mismatch or an explicit reset.
    cached_sizes: RefCell<HashMap<SizeKey, Size>>,

    /// Observable count of cache invalidations, for callers (and tests)
    /// tracking re-measurement churn.
    cache_resets: Cell<usize>,

    /// The live rendered instance while this element is on screen.
    visible: RefCell<Option<Box<dyn RenderInstance>>>,
}

impl ElementState {
    pub(crate) fn new(model: Box<dyn AnyElement>) -> Rc<Self> {
        Rc::new(Self {
            model: RefCell::new(model),
            cached_sizes: RefCell::new(HashMap::default()),
            cache_resets: Cell::new(0),
            visible: RefCell::new(None),
        })
    }

    pub fn identifier(&self) -> Identifier {
        self.model.borrow().identifier()
    }

    pub fn sizing(&self) -> Sizing {
        self.model.borrow().sizing()
    }

    pub fn width(&self) -> ItemWidth {
        self.model.borrow().width()
    }

    /// Number of times the size cache has been invalidated.
    pub fn cache_reset_count(&self) -> usize {
        self.cache_resets.get()
    }

    /// Number of currently cached measurements.
    pub fn cached_size_count(&self) -> usize {
        self.cached_sizes.borrow().len()
    }

    /// True while a rendered instance is attached.
    pub fn is_visible(&self) -> bool {
        self.visible.borrow().is_some()
    }

    /// Replaces the held content with the next update's value.
    ///
    /// Compares equivalence fingerprints first: on mismatch the measured-size
    /// cache is dropped. Either way the new model replaces the old, and a
    /// currently attached instance receives the new content immediately (the
    /// push-through update) so on-screen elements never wait for a layout
    /// pass.
    pub(crate) fn set_new(&self, new: Box<dyn AnyElement>) {
        let equivalent = self.model.borrow().any_is_equivalent(new.as_ref());

        *self.model.borrow_mut() = new;

        if !equivalent {
            self.reset_cached_sizes();
        }

        let model = self.model.borrow();
        if let Some(instance) = self.visible.borrow_mut().as_deref_mut() {
            model.apply_to_any(instance, ApplyReason::WasUpdated);
        }
    }

    /// Drops every cached measurement.
    pub fn reset_cached_sizes(&self) {
        self.cached_sizes.borrow_mut().clear();
        self.cache_resets.set(self.cache_resets.get() + 1);
    }

    /// Measures this element under `constraint`, consulting the cache first.
    ///
    /// Zero-area constraints short-circuit to zero without touching an
    /// instance or the cache. Strategies that need a rendered instance
    /// measure on the attached one when visible, otherwise borrow one from
    /// the pool for the duration of the call.
    pub fn size(
        &self,
        constraint: Size,
        direction: LayoutDirection,
        default_size: Size,
        pool: &mut ReusePool,
    ) -> Size {
        if constraint.is_empty() {
            return Size::ZERO;
        }

        let model = self.model.borrow();
        let sizing = model.sizing();

        if let Some(size) = sizing.resolved_without_instance(default_size) {
            return size;
        }

        let key = SizeKey::new(constraint, direction, sizing);
        if let Some(size) = self.cached_sizes.borrow().get(&key) {
            return *size;
        }

        let measured = {
            let mut visible = self.visible.borrow_mut();
            match visible.as_deref_mut() {
                Some(instance) => {
                    sizing.measure(instance.as_measurable(), constraint, direction, default_size)
                }
                None => pool.use_with(
                    model.reuse_key(),
                    || model.new_any_instance(Rect::from_size(constraint)),
                    |instance| {
                        model.apply_to_any(instance, ApplyReason::Measurement);
                        sizing.measure(
                            instance.as_measurable(),
                            constraint,
                            direction,
                            default_size,
                        )
                    },
                ),
            }
        };

        let measured = if measured.width.is_finite() && measured.height.is_finite() {
            measured
        } else {
            log::warn!(
                "non-finite measured size {measured:?} for {:?}; falling back to the default size",
                model.identifier()
            );
            default_size.ceiled()
        };

        self.cached_sizes.borrow_mut().insert(key, measured);
        measured
    }

    /// Attaches a rendered instance for display, pulling one from the pool
    /// and applying current content to it.
    ///
    /// The renderer calls this when the element enters the viewport.
    pub fn will_display(&self, pool: &mut ReusePool, frame: Rect) {
        debug_assert!(
            !self.is_visible(),
            "entry {:?} already holds a visible instance",
            self.identifier()
        );

        let model = self.model.borrow();
        let mut instance = pool.pop(model.reuse_key(), || model.new_any_instance(frame));

        model.apply_to_any(instance.as_mut(), ApplyReason::WillDisplay);
        *self.visible.borrow_mut() = Some(instance);
    }

    /// Runs `f` against the attached instance, if any.
    pub fn with_visible_instance<R>(
        &self,
        f: impl FnOnce(&mut dyn RenderInstance) -> R,
    ) -> Option<R> {
        self.visible.borrow_mut().as_deref_mut().map(f)
    }

    /// Detaches the attached instance, if any, returning it to the pool.
    ///
    /// The renderer calls this when the element leaves the viewport; it also
    /// runs when an entry is destroyed by reconciliation.
    pub fn did_end_display(&self, pool: &mut ReusePool) {
        if let Some(instance) = self.visible.borrow_mut().take() {
            pool.push(self.model.borrow().reuse_key(), instance);
        }
    }

    /// Tears the entry down ahead of destruction.
    pub(crate) fn teardown(&self, pool: &mut ReusePool) {
        self.did_end_display(pool);
    }
}
