//! Cross-axis width resolution for items, headers, and footers.
//!
//! Stacking only decides where an element sits along the layout direction.
//! How wide it is across that axis, and where that width sits inside the
//! available extent, is resolved here. "Width" always means the cross-axis
//! extent; a horizontal list resolves its vertical extent through the same
//! types.

/// Constraint on a resolved cross-axis width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WidthConstraint {
    /// The available width passes through unchanged.
    NoConstraint,

    /// The width is exactly the given value.
    Fixed(f32),

    /// The width is at most the given value.
    AtMost(f32),
}

impl WidthConstraint {
    pub fn clamp(&self, value: f32) -> f32 {
        match *self {
            WidthConstraint::NoConstraint => value,
            WidthConstraint::Fixed(fixed) => fixed,
            WidthConstraint::AtMost(maximum) => value.min(maximum),
        }
    }
}

/// Leading/trailing padding applied when resolving a custom width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HorizontalPadding {
    pub left: f32,
    pub right: f32,
}

impl HorizontalPadding {
    pub const ZERO: HorizontalPadding = HorizontalPadding {
        left: 0.0,
        right: 0.0,
    };

    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            right: value,
        }
    }

    pub fn sum(&self) -> f32 {
        self.left + self.right
    }
}

/// Cross-axis alignment of a resolved width inside the available extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossAxisAlignment {
    /// Align to the leading edge, inset by the leading padding.
    Start,

    /// Center within the full available extent, rounded to a whole unit.
    Center,

    /// Align to the trailing edge, inset by the trailing padding.
    End,
}

impl CrossAxisAlignment {
    /// Computes the cross-axis origin for a resolved width.
    pub fn origin(&self, available: f32, width: f32, padding: HorizontalPadding) -> f32 {
        match self {
            CrossAxisAlignment::Start => padding.left,
            CrossAxisAlignment::Center => ((available - width) / 2.0).round(),
            CrossAxisAlignment::End => available - width - padding.right,
        }
    }
}

/// How an item, header, or footer resolves its cross-axis width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemWidth {
    /// Inherit the parent's width: the list default width, centered.
    Default,

    /// Fill the full available cross-axis extent.
    Fill,

    /// An explicit width computed from padding, a constraint, and an
    /// alignment.
    Custom(CustomWidth),
}

impl Default for ItemWidth {
    fn default() -> Self {
        ItemWidth::Default
    }
}

impl ItemWidth {
    /// Merges this width with its parent's: `Default` inherits the parent,
    /// anything explicit wins.
    pub fn merge(self, parent: ItemWidth) -> ItemWidth {
        match self {
            ItemWidth::Default => parent,
            ItemWidth::Fill | ItemWidth::Custom(_) => self,
        }
    }

    /// Resolves the final cross-axis origin and width.
    ///
    /// `available` is the full cross-axis extent of the viewport;
    /// `default_width` is the list-level default already clamped by the
    /// appearance's width constraint.
    pub fn position(self, available: f32, default_width: f32) -> WidthPosition {
        match self {
            ItemWidth::Default => WidthPosition {
                origin: ((available - default_width) / 2.0).round(),
                width: default_width,
            },
            ItemWidth::Fill => WidthPosition {
                origin: 0.0,
                width: available,
            },
            ItemWidth::Custom(custom) => custom.position(available),
        }
    }
}

/// An explicit cross-axis width: padded, constrained, then aligned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CustomWidth {
    pub padding: HorizontalPadding,
    pub width: WidthConstraint,
    pub alignment: CrossAxisAlignment,
}

impl Default for CustomWidth {
    fn default() -> Self {
        Self {
            padding: HorizontalPadding::ZERO,
            width: WidthConstraint::NoConstraint,
            alignment: CrossAxisAlignment::Center,
        }
    }
}

impl CustomWidth {
    pub fn new(
        padding: HorizontalPadding,
        width: WidthConstraint,
        alignment: CrossAxisAlignment,
    ) -> Self {
        Self {
            padding,
            width,
            alignment,
        }
    }

    pub fn position(&self, available: f32) -> WidthPosition {
        let width = resolved_width(available, self.padding, self.width);

        WidthPosition {
            origin: self.alignment.origin(available, width, self.padding),
            width,
        }
    }
}

/// A resolved cross-axis placement: origin plus width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthPosition {
    pub origin: f32,
    pub width: f32,
}

/// Clamps the padded available extent through a width constraint.
pub fn resolved_width(
    available: f32,
    padding: HorizontalPadding,
    constraint: WidthConstraint,
) -> f32 {
    constraint.clamp((available - padding.sum()).max(0.0))
}
