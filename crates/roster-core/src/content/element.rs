//! Typed content wrappers and their type-erased form.
//!
//! Concrete content types implement [`ListContent`]; the engine itself is
//! written entirely against the object-safe [`AnyElement`] erasure, so the
//! state store, pool, and layout builder never see a concrete type.

use std::any::Any;
use std::hash::Hash;

use roster_layout::{ItemWidth, Rect, Sizing};

use crate::{ApplyReason, Identifier, RenderInstance, ReuseKey};

/// The capability set a concrete content type brings to the list: produce a
/// rendered instance, push a payload into one, and report equivalence.
pub trait ListContent: 'static {
    /// The rendered-instance type this content creates and populates.
    type Instance: RenderInstance;

    /// Creates a fresh, usable instance given a bounding hint.
    ///
    /// Invoked by the reuse pool on a cache miss; never called while a
    /// compatible idle instance exists.
    fn new_instance(frame: Rect) -> Self::Instance;

    /// Pushes this content value into an instance.
    fn apply(&self, instance: &mut Self::Instance, reason: ApplyReason);

    /// The equivalence fingerprint: structural comparison of payload.
    ///
    /// Distinct from identifier equality. When a reconciliation pass replaces
    /// an element's content and this reports `false` against the old value,
    /// the element's cached measurements are invalidated. Must be total and
    /// side-effect-free; an implementation that reports `true` for observably
    /// different payloads yields a stale cached size, never a crash.
    fn is_equivalent(&self, other: &Self) -> bool;

    /// Key under which instances of this content type pool.
    fn reuse_key() -> ReuseKey
    where
        Self: Sized,
    {
        ReuseKey::of::<Self>()
    }
}

/// An item within a section.
pub struct Item<C: ListContent> {
    pub identifier: Identifier,
    pub content: C,
    pub sizing: Sizing,
    pub width: ItemWidth,
}

impl<C: ListContent> Item<C> {
    /// Creates an item with default sizing and inherited width.
    pub fn new(key: impl Hash, content: C) -> Self {
        Self {
            identifier: Identifier::of::<C>(key),
            content,
            sizing: Sizing::Default,
            width: ItemWidth::Default,
        }
    }

    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn with_width(mut self, width: ItemWidth) -> Self {
        self.width = width;
        self
    }
}

/// Header or footer content for the list or for one section.
pub struct HeaderFooter<C: ListContent> {
    pub identifier: Identifier,
    pub content: C,
    pub sizing: Sizing,
    pub width: ItemWidth,
}

impl<C: ListContent> HeaderFooter<C> {
    pub fn new(key: impl Hash, content: C) -> Self {
        Self {
            identifier: Identifier::of::<C>(key),
            content,
            sizing: Sizing::Default,
            width: ItemWidth::Default,
        }
    }

    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn with_width(mut self, width: ItemWidth) -> Self {
        self.width = width;
        self
    }
}

/// Object-safe erasure over [`Item`] and [`HeaderFooter`].
///
/// The engine dispatches every per-element operation through this vtable;
/// concrete content types only ever appear at the two downcast seams
/// (equivalence and instance application).
pub trait AnyElement {
    fn identifier(&self) -> Identifier;

    fn sizing(&self) -> Sizing;

    fn width(&self) -> ItemWidth;

    fn reuse_key(&self) -> ReuseKey;

    /// Structural equivalence against another erased element. Elements of
    /// different concrete types are never equivalent.
    fn any_is_equivalent(&self, other: &dyn AnyElement) -> bool;

    /// Creates a fresh rendered instance for this element's content type.
    fn new_any_instance(&self, frame: Rect) -> Box<dyn RenderInstance>;

    /// Applies this element's content to an instance of its content type.
    fn apply_to_any(&self, instance: &mut dyn RenderInstance, reason: ApplyReason);

    fn as_any(&self) -> &dyn Any;
}

impl<C: ListContent> AnyElement for Item<C> {
    fn identifier(&self) -> Identifier {
        self.identifier
    }

    fn sizing(&self) -> Sizing {
        self.sizing
    }

    fn width(&self) -> ItemWidth {
        self.width
    }

    fn reuse_key(&self) -> ReuseKey {
        C::reuse_key()
    }

    fn any_is_equivalent(&self, other: &dyn AnyElement) -> bool {
        match other.as_any().downcast_ref::<Item<C>>() {
            Some(other) => self.content.is_equivalent(&other.content),
            None => false,
        }
    }

    fn new_any_instance(&self, frame: Rect) -> Box<dyn RenderInstance> {
        Box::new(C::new_instance(frame))
    }

    fn apply_to_any(&self, instance: &mut dyn RenderInstance, reason: ApplyReason) {
        let instance = instance
            .as_any_mut()
            .downcast_mut::<C::Instance>()
            .unwrap_or_else(|| {
                panic!(
                    "instance of the wrong type handed to {:?}; the pool keys by content type",
                    self.identifier
                )
            });

        self.content.apply(instance, reason);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<C: ListContent> AnyElement for HeaderFooter<C> {
    fn identifier(&self) -> Identifier {
        self.identifier
    }

    fn sizing(&self) -> Sizing {
        self.sizing
    }

    fn width(&self) -> ItemWidth {
        self.width
    }

    fn reuse_key(&self) -> ReuseKey {
        C::reuse_key()
    }

    fn any_is_equivalent(&self, other: &dyn AnyElement) -> bool {
        match other.as_any().downcast_ref::<HeaderFooter<C>>() {
            Some(other) => self.content.is_equivalent(&other.content),
            None => false,
        }
    }

    fn new_any_instance(&self, frame: Rect) -> Box<dyn RenderInstance> {
        Box::new(C::new_instance(frame))
    }

    fn apply_to_any(&self, instance: &mut dyn RenderInstance, reason: ApplyReason) {
        let instance = instance
            .as_any_mut()
            .downcast_mut::<C::Instance>()
            .unwrap_or_else(|| {
                panic!(
                    "instance of the wrong type handed to {:?}; the pool keys by content type",
                    self.identifier
                )
            });

        self.content.apply(instance, reason);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
