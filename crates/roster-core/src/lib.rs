//! Presentation-state engine for virtualized, diffable list views.
//!
//! A list is described declaratively as a [`Content`] value: sections
//! containing items, plus optional header and footer content, each element
//! carrying a stable [`Identifier`] and a [`Sizing`](roster_layout::Sizing)
//! strategy. The engine keeps a long-lived [`PresentationState`] that is
//! reconciled against each new `Content`, preserving per-element state
//! objects across updates, caching measured sizes, and recycling rendered
//! instances through a [`ReusePool`]. A layout pass over the store produces
//! a [`ListLayoutAttributes`] tree of frames for an external renderer.
//!
//! Everything here is single-threaded and synchronous: entries are `Rc`
//! handles with interior mutability, and a rendered instance is either idle
//! in the pool or exclusively owned by one entry.

pub mod collections;
pub mod hash;

mod appearance;
mod behavior;
mod content;
mod instance;
mod layout;
mod pool;
mod state;

pub use appearance::*;
pub use behavior::*;
pub use content::*;
pub use instance::*;
pub use layout::*;
pub use pool::*;
pub use state::*;

pub mod prelude {
    pub use crate::appearance::{Appearance, LayoutValues};
    pub use crate::behavior::{Behavior, Underflow, UnderflowAlignment};
    pub use crate::content::{Content, HeaderFooter, Identifier, Item, ListContent, Section};
    pub use crate::instance::{ApplyReason, RenderInstance, ReuseKey};
    pub use crate::layout::{layout_attributes, ListLayoutAttributes};
    pub use crate::pool::ReusePool;
    pub use crate::state::PresentationState;
    pub use roster_layout::prelude::*;
}
