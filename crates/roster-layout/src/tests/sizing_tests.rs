use crate::{
    Constraint, ConstraintAxis, ConstraintValue, LayoutDirection, Measurable, Size, SizeKey,
    Sizing,
};

/// Measurable stub that reports a fixed natural size regardless of the
/// available extent.
struct FixedNatural(Size);

impl Measurable for FixedNatural {
    fn size_that_fits(&self, _available: Size) -> Size {
        self.0
    }

    fn size_fitting(&self, _available: Size, _direction: LayoutDirection) -> Size {
        self.0
    }
}

const CONSTRAINT: Size = Size {
    width: 320.0,
    height: 1000.0,
};

const DEFAULT_SIZE: Size = Size {
    width: 320.0,
    height: 50.0,
};

fn measure(sizing: Sizing, natural: Size) -> Size {
    sizing.measure(
        &FixedNatural(natural),
        CONSTRAINT,
        LayoutDirection::Vertical,
        DEFAULT_SIZE,
    )
}

#[test]
fn default_returns_default_size() {
    assert_eq!(measure(Sizing::Default, Size::new(999.0, 999.0)), DEFAULT_SIZE);
}

#[test]
fn fixed_returns_literal_size() {
    let size = measure(
        Sizing::Fixed {
            width: 0.0,
            height: 44.0,
        },
        Size::new(999.0, 999.0),
    );
    assert_eq!(size, Size::new(0.0, 44.0));
}

#[test]
fn that_fits_is_that_fits_with_no_constraint() {
    let natural = Size::new(120.0, 80.0);
    assert_eq!(
        measure(Sizing::ThatFits, natural),
        measure(Sizing::ThatFitsWith(Constraint::NO_CONSTRAINT), natural),
    );
}

#[test]
fn within_clamps_both_directions() {
    let clamp = Sizing::ThatFitsWith(Constraint::uniform(ConstraintAxis::Within(
        ConstraintValue::Fixed(50.0),
        200.0,
    )));

    assert_eq!(measure(clamp, Size::new(10.0, 10.0)), Size::new(50.0, 50.0));
    assert_eq!(
        measure(clamp, Size::new(300.0, 300.0)),
        Size::new(200.0, 200.0)
    );
    assert_eq!(
        measure(clamp, Size::new(120.0, 120.0)),
        Size::new(120.0, 120.0)
    );
}

#[test]
fn at_least_default_resolves_against_default_size() {
    let clamp = Sizing::ThatFitsWith(Constraint::new(
        ConstraintAxis::NoConstraint,
        ConstraintAxis::AtLeast(ConstraintValue::Default),
    ));

    // Natural height 10 is below the default height 50.
    let size = measure(clamp, Size::new(100.0, 10.0));
    assert_eq!(size.height, DEFAULT_SIZE.height);
}

#[test]
fn at_most_passes_smaller_values_through() {
    let clamp = Sizing::AutolayoutWith(Constraint::uniform(ConstraintAxis::AtMost(200.0)));
    assert_eq!(
        measure(clamp, Size::new(120.0, 40.0)),
        Size::new(120.0, 40.0)
    );
}

#[test]
fn measured_sizes_are_ceiled_up() {
    let size = measure(Sizing::ThatFits, Size::new(10.2, 10.01));
    assert_eq!(size, Size::new(11.0, 11.0));
}

#[test]
fn fixed_and_default_skip_the_instance() {
    assert_eq!(
        Sizing::Default.resolved_without_instance(DEFAULT_SIZE),
        Some(DEFAULT_SIZE)
    );
    assert_eq!(
        Sizing::Fixed {
            width: 10.0,
            height: 44.0
        }
        .resolved_without_instance(DEFAULT_SIZE),
        Some(Size::new(10.0, 44.0))
    );
    assert_eq!(Sizing::ThatFits.resolved_without_instance(DEFAULT_SIZE), None);
    assert_eq!(
        Sizing::Autolayout.resolved_without_instance(DEFAULT_SIZE),
        None
    );
}

#[test]
fn size_keys_are_structural() {
    let a = SizeKey::new(CONSTRAINT, LayoutDirection::Vertical, Sizing::ThatFits);
    let b = SizeKey::new(CONSTRAINT, LayoutDirection::Vertical, Sizing::ThatFits);
    assert_eq!(a, b);

    // Any field change produces a distinct key.
    assert_ne!(
        a,
        SizeKey::new(CONSTRAINT, LayoutDirection::Horizontal, Sizing::ThatFits)
    );
    assert_ne!(
        a,
        SizeKey::new(
            Size::new(321.0, 1000.0),
            LayoutDirection::Vertical,
            Sizing::ThatFits
        )
    );
    assert_ne!(
        a,
        SizeKey::new(CONSTRAINT, LayoutDirection::Vertical, Sizing::Autolayout)
    );
}

#[test]
fn equal_sizings_with_equal_constraints_compare_equal() {
    let clamp = Constraint::uniform(ConstraintAxis::Within(ConstraintValue::Default, 180.0));
    assert_eq!(Sizing::ThatFitsWith(clamp), Sizing::ThatFitsWith(clamp));
    assert_ne!(Sizing::ThatFitsWith(clamp), Sizing::AutolayoutWith(clamp));
}
