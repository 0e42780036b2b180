//! Read-only appearance configuration consumed by the layout pass.

use roster_layout::{EdgeInsets, LayoutDirection, Size, WidthConstraint};

/// How the list lays itself out: the stacking direction plus the metric
/// defaults every element falls back to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub direction: LayoutDirection,
    pub layout: LayoutValues,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::Vertical,
            layout: LayoutValues::default(),
        }
    }
}

/// Metric defaults for the layout pass.
///
/// All spacing defaults to zero; callers opt into breathing room. The
/// default sizes are what `Sizing::Default` elements resolve to and what
/// `.default`-valued clamp bounds defer to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutValues {
    /// Insets applied around the entire content.
    pub padding: EdgeInsets,

    /// Constraint on the list-level default cross-axis width.
    pub width: WidthConstraint,

    /// Fallback size for items.
    pub default_item_size: Size,

    /// Fallback size for headers and footers.
    pub default_header_footer_size: Size,

    /// Spacing between consecutive items within a section.
    pub item_spacing: f32,

    /// Spacing between consecutive sections.
    pub inter_section_spacing: f32,

    /// Spacing between the list header and the first section.
    pub list_header_to_first_section_spacing: f32,

    /// Spacing between the last section and the list footer.
    pub last_section_to_footer_spacing: f32,
}

impl Default for LayoutValues {
    fn default() -> Self {
        Self {
            padding: EdgeInsets::ZERO,
            width: WidthConstraint::NoConstraint,
            default_item_size: Size::ZERO,
            default_header_footer_size: Size::ZERO,
            item_spacing: 0.0,
            inter_section_spacing: 0.0,
            list_header_to_first_section_spacing: 0.0,
            last_section_to_footer_spacing: 0.0,
        }
    }
}
