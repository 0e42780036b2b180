//! The primary stacking axis of a list and its transposition helpers.

use crate::{Point, Rect, Size};

/// The axis along which sections and items are stacked.
///
/// Vertical lists stack top to bottom with the cross axis running left to
/// right; horizontal lists are the transposed equivalent. All layout code is
/// written against main/cross extents so the same pass handles both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Main axis: top to bottom. Cross axis: left to right.
    Vertical,

    /// Main axis: left to right. Cross axis: top to bottom.
    Horizontal,
}

impl LayoutDirection {
    /// Returns true if this is the vertical direction.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, LayoutDirection::Vertical)
    }

    /// Returns true if this is the horizontal direction.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, LayoutDirection::Horizontal)
    }

    /// The extent of `size` along the stacking axis.
    #[inline]
    pub fn main_extent(self, size: Size) -> f32 {
        match self {
            LayoutDirection::Vertical => size.height,
            LayoutDirection::Horizontal => size.width,
        }
    }

    /// The extent of `size` across the stacking axis.
    #[inline]
    pub fn cross_extent(self, size: Size) -> f32 {
        match self {
            LayoutDirection::Vertical => size.width,
            LayoutDirection::Horizontal => size.height,
        }
    }

    /// Builds a [`Size`] from main/cross extents.
    #[inline]
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            LayoutDirection::Vertical => Size::new(cross, main),
            LayoutDirection::Horizontal => Size::new(main, cross),
        }
    }

    /// Builds a [`Point`] from main/cross coordinates.
    #[inline]
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            LayoutDirection::Vertical => Point::new(cross, main),
            LayoutDirection::Horizontal => Point::new(main, cross),
        }
    }

    /// Builds a [`Rect`] from a main/cross origin and main/cross extents.
    #[inline]
    pub fn rect(self, main: f32, cross: f32, main_extent: f32, cross_extent: f32) -> Rect {
        Rect::from_origin_size(
            self.point(main, cross),
            self.size(main_extent, cross_extent),
        )
    }

    /// Translates `rect` by `amount` along the stacking axis.
    #[inline]
    pub fn translate(self, rect: Rect, amount: f32) -> Rect {
        match self {
            LayoutDirection::Vertical => rect.translate(0.0, amount),
            LayoutDirection::Horizontal => rect.translate(amount, 0.0),
        }
    }
}
