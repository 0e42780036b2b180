//! Sizing & layout contracts for Roster
//!
//! Pure math and policy types shared by the presentation-state engine:
//! geometry primitives, the layout direction, sizing strategies with their
//! axis clamps, cross-axis width resolution, and the [`Measurable`] contract
//! a rendered element exposes for measurement. Nothing in this crate holds
//! state or touches a rendered instance beyond the `Measurable` seam.

mod direction;
mod geometry;
mod measurable;
mod sizing;
mod width;

pub use direction::*;
pub use geometry::*;
pub use measurable::*;
pub use sizing::*;
pub use width::*;

pub mod prelude {
    pub use crate::direction::LayoutDirection;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::measurable::Measurable;
    pub use crate::sizing::{Constraint, ConstraintAxis, ConstraintValue, SizeKey, Sizing};
    pub use crate::width::{CustomWidth, HorizontalPadding, ItemWidth, WidthConstraint};
}

#[cfg(test)]
mod tests;
