use crate::{
    CrossAxisAlignment, CustomWidth, HorizontalPadding, ItemWidth, WidthConstraint, WidthPosition,
};

#[test]
fn default_centers_the_default_width() {
    let position = ItemWidth::Default.position(320.0, 280.0);
    assert_eq!(
        position,
        WidthPosition {
            origin: 20.0,
            width: 280.0
        }
    );
}

#[test]
fn fill_takes_the_full_extent() {
    let position = ItemWidth::Fill.position(320.0, 280.0);
    assert_eq!(
        position,
        WidthPosition {
            origin: 0.0,
            width: 320.0
        }
    );
}

#[test]
fn merge_inherits_only_for_default() {
    let custom = ItemWidth::Custom(CustomWidth::default());

    assert_eq!(ItemWidth::Default.merge(ItemWidth::Fill), ItemWidth::Fill);
    assert_eq!(ItemWidth::Fill.merge(custom), ItemWidth::Fill);
    assert_eq!(custom.merge(ItemWidth::Fill), custom);
}

#[test]
fn custom_start_alignment_insets_by_leading_padding() {
    let width = CustomWidth::new(
        HorizontalPadding::new(10.0, 20.0),
        WidthConstraint::NoConstraint,
        CrossAxisAlignment::Start,
    );

    // 320 available - 30 padding = 290 wide, at the leading padding.
    assert_eq!(
        width.position(320.0),
        WidthPosition {
            origin: 10.0,
            width: 290.0
        }
    );
}

#[test]
fn custom_end_alignment_insets_by_trailing_padding() {
    let width = CustomWidth::new(
        HorizontalPadding::new(0.0, 20.0),
        WidthConstraint::AtMost(100.0),
        CrossAxisAlignment::End,
    );

    assert_eq!(
        width.position(320.0),
        WidthPosition {
            origin: 200.0,
            width: 100.0
        }
    );
}

#[test]
fn custom_center_alignment_rounds_the_origin() {
    let width = CustomWidth::new(
        HorizontalPadding::ZERO,
        WidthConstraint::Fixed(101.0),
        CrossAxisAlignment::Center,
    );

    // (320 - 101) / 2 = 109.5, rounded.
    assert_eq!(width.position(320.0).origin, 110.0);
}

#[test]
fn fixed_width_constraint_overrides_available() {
    assert_eq!(WidthConstraint::Fixed(64.0).clamp(320.0), 64.0);
    assert_eq!(WidthConstraint::AtMost(64.0).clamp(320.0), 64.0);
    assert_eq!(WidthConstraint::AtMost(64.0).clamp(32.0), 32.0);
    assert_eq!(WidthConstraint::NoConstraint.clamp(320.0), 320.0);
}

#[test]
fn padded_width_never_goes_negative() {
    let width = CustomWidth::new(
        HorizontalPadding::uniform(300.0),
        WidthConstraint::NoConstraint,
        CrossAxisAlignment::Start,
    );

    assert_eq!(width.position(320.0).width, 0.0);
}
