//! Sizing strategies, axis clamps, and the size-cache key.
//!
//! A [`Sizing`] value describes how one header, footer, or item resolves its
//! measured size. Measurement is pure given a [`Measurable`] instance, and
//! every returned dimension is rounded up to the next whole unit.

use std::hash::{Hash, Hasher};

use crate::{LayoutDirection, Measurable, Size};

/// Controls how a header, footer, or item in a list is sized.
#[derive(Clone, Copy, Debug)]
pub enum Sizing {
    /// The caller-supplied default size is used verbatim. Not dynamic at all.
    Default,

    /// Fixes the size to the absolute value passed in.
    ///
    /// Both a width and a height are carried, but a standard list only reads
    /// the extent along its layout direction. The other axis exists for
    /// custom layouts such as grids.
    Fixed { width: f32, height: f32 },

    /// Sizes the element from its natural size ([`Measurable::size_that_fits`]).
    ThatFits,

    /// Natural size, clamped per axis by the given constraint.
    ThatFitsWith(Constraint),

    /// Sizes the element from its constraint-solved size
    /// ([`Measurable::size_fitting`]), with the layout-direction axis
    /// required and the cross axis relaxed.
    Autolayout,

    /// Constraint-solved size, clamped per axis by the given constraint.
    AutolayoutWith(Constraint),
}

impl Sizing {
    /// Resolves strategies that never touch a rendered instance.
    ///
    /// Returns `Some` for `Default` and `Fixed`; the sizing engine uses this
    /// to skip the pool borrow entirely.
    pub fn resolved_without_instance(&self, default_size: Size) -> Option<Size> {
        match *self {
            Sizing::Default => Some(default_size.ceiled()),
            Sizing::Fixed { width, height } => Some(Size::new(width, height).ceiled()),
            _ => None,
        }
    }

    /// Measures the given instance with the provided options.
    ///
    /// The returned value is ceiled to round up to the next full unit.
    pub fn measure(
        &self,
        instance: &dyn Measurable,
        constraint: Size,
        direction: LayoutDirection,
        default_size: Size,
    ) -> Size {
        let value = match *self {
            Sizing::Default => default_size,

            Sizing::Fixed { width, height } => Size::new(width, height),

            Sizing::ThatFits => {
                return Sizing::ThatFitsWith(Constraint::NO_CONSTRAINT).measure(
                    instance,
                    constraint,
                    direction,
                    default_size,
                )
            }

            Sizing::ThatFitsWith(clamp) => {
                let size = instance.size_that_fits(constraint);
                clamp.clamp(size, default_size)
            }

            Sizing::Autolayout => {
                return Sizing::AutolayoutWith(Constraint::NO_CONSTRAINT).measure(
                    instance,
                    constraint,
                    direction,
                    default_size,
                )
            }

            Sizing::AutolayoutWith(clamp) => {
                let size = instance.size_fitting(constraint, direction);
                clamp.clamp(size, default_size)
            }
        };

        value.ceiled()
    }

    fn hash_discriminant(&self) -> u8 {
        match self {
            Sizing::Default => 0,
            Sizing::Fixed { .. } => 1,
            Sizing::ThatFits => 2,
            Sizing::ThatFitsWith(_) => 3,
            Sizing::Autolayout => 4,
            Sizing::AutolayoutWith(_) => 5,
        }
    }
}

// Sizing participates in the structural SizeKey, so equality and hashing go
// through bit patterns rather than float comparison. Constraints are
// validated at construction time; NaN never reaches a key.
impl PartialEq for Sizing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Sizing::Default, Sizing::Default) => true,
            (
                Sizing::Fixed { width: w1, height: h1 },
                Sizing::Fixed { width: w2, height: h2 },
            ) => w1.to_bits() == w2.to_bits() && h1.to_bits() == h2.to_bits(),
            (Sizing::ThatFits, Sizing::ThatFits) => true,
            (Sizing::ThatFitsWith(c1), Sizing::ThatFitsWith(c2)) => c1 == c2,
            (Sizing::Autolayout, Sizing::Autolayout) => true,
            (Sizing::AutolayoutWith(c1), Sizing::AutolayoutWith(c2)) => c1 == c2,
            _ => false,
        }
    }
}

impl Eq for Sizing {}

impl Hash for Sizing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.hash_discriminant());
        match self {
            Sizing::Default | Sizing::ThatFits | Sizing::Autolayout => {}
            Sizing::Fixed { width, height } => {
                state.write_u32(width.to_bits());
                state.write_u32(height.to_bits());
            }
            Sizing::ThatFitsWith(c) | Sizing::AutolayoutWith(c) => c.hash(state),
        }
    }
}

/// Per-axis clamp applied to a measured size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub width: ConstraintAxis,
    pub height: ConstraintAxis,
}

impl Constraint {
    pub const NO_CONSTRAINT: Constraint = Constraint {
        width: ConstraintAxis::NoConstraint,
        height: ConstraintAxis::NoConstraint,
    };

    /// Applies the same rule to both axes.
    pub const fn uniform(axis: ConstraintAxis) -> Self {
        Self {
            width: axis,
            height: axis,
        }
    }

    pub const fn new(width: ConstraintAxis, height: ConstraintAxis) -> Self {
        Self { width, height }
    }

    /// Clamps a measured size, resolving `.default` values against
    /// `default_size`.
    pub fn clamp(&self, value: Size, default_size: Size) -> Size {
        Size::new(
            self.width.clamp(value.width, default_size.width),
            self.height.clamp(value.height, default_size.height),
        )
    }
}

/// A single axis rule within a [`Constraint`].
#[derive(Clone, Copy, Debug)]
pub enum ConstraintAxis {
    /// The measured value passes through unchanged.
    NoConstraint,

    /// The measured value is at least the given minimum.
    AtLeast(ConstraintValue),

    /// The measured value is at most the given maximum.
    AtMost(f32),

    /// The measured value is clamped into `[minimum, maximum]`.
    Within(ConstraintValue, f32),
}

impl ConstraintAxis {
    /// Clamps one dimension, resolving `.default` minimums against
    /// `default_value`.
    pub fn clamp(&self, value: f32, default_value: f32) -> f32 {
        match *self {
            ConstraintAxis::NoConstraint => value,
            ConstraintAxis::AtLeast(minimum) => value.max(minimum.value(default_value)),
            ConstraintAxis::AtMost(maximum) => value.min(maximum),
            ConstraintAxis::Within(minimum, maximum) => {
                value.min(maximum).max(minimum.value(default_value))
            }
        }
    }
}

impl PartialEq for ConstraintAxis {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConstraintAxis::NoConstraint, ConstraintAxis::NoConstraint) => true,
            (ConstraintAxis::AtLeast(a), ConstraintAxis::AtLeast(b)) => a == b,
            (ConstraintAxis::AtMost(a), ConstraintAxis::AtMost(b)) => a.to_bits() == b.to_bits(),
            (ConstraintAxis::Within(a, max_a), ConstraintAxis::Within(b, max_b)) => {
                a == b && max_a.to_bits() == max_b.to_bits()
            }
            _ => false,
        }
    }
}

impl Eq for ConstraintAxis {}

impl Hash for ConstraintAxis {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ConstraintAxis::NoConstraint => state.write_u8(0),
            ConstraintAxis::AtLeast(v) => {
                state.write_u8(1);
                v.hash(state);
            }
            ConstraintAxis::AtMost(max) => {
                state.write_u8(2);
                state.write_u32(max.to_bits());
            }
            ConstraintAxis::Within(v, max) => {
                state.write_u8(3);
                v.hash(state);
                state.write_u32(max.to_bits());
            }
        }
    }
}

/// A clamp bound: either a fixed number or "the caller-supplied default".
#[derive(Clone, Copy, Debug)]
pub enum ConstraintValue {
    /// Deferred to the default size supplied at measurement time.
    Default,

    /// A fixed bound.
    Fixed(f32),
}

impl ConstraintValue {
    /// Resolves the bound against the caller-supplied default.
    pub fn value(&self, default_value: f32) -> f32 {
        match *self {
            ConstraintValue::Default => default_value,
            ConstraintValue::Fixed(fixed) => fixed,
        }
    }
}

impl PartialEq for ConstraintValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConstraintValue::Default, ConstraintValue::Default) => true,
            (ConstraintValue::Fixed(a), ConstraintValue::Fixed(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for ConstraintValue {}

impl Hash for ConstraintValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ConstraintValue::Default => state.write_u8(0),
            ConstraintValue::Fixed(v) => {
                state.write_u8(1);
                state.write_u32(v.to_bits());
            }
        }
    }
}

/// Structural key for the per-entry measured-size cache.
///
/// Two measurement requests with equal keys must yield the same result, so
/// the key is the full tuple of inputs that can change the answer: the
/// available size, the layout direction, and the sizing strategy. Dimensions
/// are stored as bit patterns; floats are not `Hash`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SizeKey {
    width: u32,
    height: u32,
    direction: LayoutDirection,
    sizing: Sizing,
}

impl SizeKey {
    pub fn new(constraint: Size, direction: LayoutDirection, sizing: Sizing) -> Self {
        Self {
            width: constraint.width.to_bits(),
            height: constraint.height.to_bits(),
            direction,
            sizing,
        }
    }
}
