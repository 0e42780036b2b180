//! The measurement contract a rendered element exposes to the sizing engine.

use crate::{LayoutDirection, Size};

/// Measurement face of a rendered-element instance.
///
/// The engine never knows what an instance actually is; it only asks for the
/// instance's preferred size under an available extent. Implementations must
/// be pure for a given applied content value: the same available size yields
/// the same answer, which is what makes the per-entry size cache sound.
pub trait Measurable {
    /// The natural size of the element given the available extent.
    ///
    /// Used by the `ThatFits` sizing strategies. The returned size may exceed
    /// `available`; axis clamps are applied by the caller, not here.
    fn size_that_fits(&self, available: Size) -> Size;

    /// The constraint-solved size of the element.
    ///
    /// Used by the `Autolayout` sizing strategies. The layout-direction axis
    /// of `available` is required; the cross axis is a relaxed preference the
    /// implementation may exceed.
    fn size_fitting(&self, available: Size, direction: LayoutDirection) -> Size;
}
