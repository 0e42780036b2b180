//! Derives the frames of every visible element from the current state.
//!
//! The attributes tree is rebuilt in full on every call; nothing here is
//! cached or incrementally mutated. Cost is linear in the number of
//! elements the state store holds, which virtualization already bounds.

use roster_layout::{ItemWidth, LayoutDirection, Rect, Size};

use crate::{Appearance, Behavior, ElementState, PresentationState, ReusePool};

/// Frames for everything the list presents, in content coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListLayoutAttributes {
    pub content_size: Size,

    pub header: Option<SupplementaryAttributes>,
    pub footer: Option<SupplementaryAttributes>,
    pub overscroll_footer: Option<SupplementaryAttributes>,

    pub sections: Vec<SectionAttributes>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SupplementaryAttributes {
    pub frame: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionAttributes {
    /// Encloses the section's header, items, and footer at full content
    /// width.
    pub frame: Rect,

    pub header: Option<SupplementaryAttributes>,
    pub footer: Option<SupplementaryAttributes>,
    pub items: Vec<ItemAttributes>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemAttributes {
    pub frame: Rect,
}

/// Builds the layout attributes tree for the current state.
///
/// Walks header, sections, and footer in order, stacking along the layout
/// direction; cross-axis placement resolves per element through its
/// [`ItemWidth`]. After placement, an underflow correction from the
/// behavior shifts the content as a whole.
pub fn layout_attributes(
    state: &PresentationState,
    viewport: Size,
    appearance: &Appearance,
    behavior: &Behavior,
    pool: &mut ReusePool,
) -> ListLayoutAttributes {
    let direction = appearance.direction;
    let layout = appearance.layout;

    let viewport_main = direction.main_extent(viewport);
    let viewport_cross = direction.cross_extent(viewport);

    let (main_leading, main_trailing) = match direction {
        LayoutDirection::Vertical => (layout.padding.top, layout.padding.bottom),
        LayoutDirection::Horizontal => (layout.padding.left, layout.padding.right),
    };
    let (cross_leading, cross_trailing) = match direction {
        LayoutDirection::Vertical => (layout.padding.left, layout.padding.right),
        LayoutDirection::Horizontal => (layout.padding.top, layout.padding.bottom),
    };

    let available_cross = (viewport_cross - cross_leading - cross_trailing).max(0.0);

    let mut pass = LayoutPass {
        direction,
        viewport_cross,
        default_width: layout.width.clamp(available_cross),
        pool,
    };

    let has_sections = !state.sections().is_empty();
    let mut offset = main_leading;

    let header = state.header().map(|entry| {
        let (frame, main) = pass.place(
            entry,
            ItemWidth::Default,
            offset,
            layout.default_header_footer_size,
        );
        offset += main;
        if has_sections {
            offset += layout.list_header_to_first_section_spacing;
        }
        SupplementaryAttributes { frame }
    });

    let section_count = state.sections().len();
    let mut sections = Vec::with_capacity(section_count);

    for (index, section) in state.sections().iter().enumerate() {
        let section_start = offset;
        let section_width = section.width();

        let section_header = section.header().map(|entry| {
            let (frame, main) = pass.place(
                entry,
                section_width,
                offset,
                layout.default_header_footer_size,
            );
            offset += main;
            SupplementaryAttributes { frame }
        });

        let item_count = section.items().len();
        let mut items = Vec::with_capacity(item_count);

        for (item_index, entry) in section.items().iter().enumerate() {
            let (frame, main) =
                pass.place(entry, section_width, offset, layout.default_item_size);
            offset += main;
            if item_index + 1 < item_count {
                offset += layout.item_spacing;
            }
            items.push(ItemAttributes { frame });
        }

        let section_footer = section.footer().map(|entry| {
            let (frame, main) = pass.place(
                entry,
                section_width,
                offset,
                layout.default_header_footer_size,
            );
            offset += main;
            SupplementaryAttributes { frame }
        });

        sections.push(SectionAttributes {
            frame: direction.rect(
                section_start,
                cross_leading,
                offset - section_start,
                available_cross,
            ),
            header: section_header,
            footer: section_footer,
            items,
        });

        if index + 1 < section_count {
            offset += layout.inter_section_spacing;
        }
    }

    let footer = state.footer().map(|entry| {
        if has_sections {
            offset += layout.last_section_to_footer_spacing;
        }
        let (frame, main) = pass.place(
            entry,
            ItemWidth::Default,
            offset,
            layout.default_header_footer_size,
        );
        offset += main;
        SupplementaryAttributes { frame }
    });

    let content_main = offset + main_trailing;

    // A single correction computed once from total content vs. viewport,
    // applied uniformly. Sections always shift; the list header and footer
    // follow only when the behavior says so.
    let shift = behavior
        .underflow
        .alignment
        .offset_for(content_main, viewport_main);

    let mut tree = ListLayoutAttributes {
        content_size: direction.size(content_main, viewport_cross),
        header,
        footer,
        overscroll_footer: None,
        sections,
    };

    if shift != 0.0 {
        for section in &mut tree.sections {
            shift_section(section, direction, shift);
        }

        if behavior.underflow.shifts_supplementaries {
            if let Some(header) = &mut tree.header {
                header.frame = direction.translate(header.frame, shift);
            }
            if let Some(footer) = &mut tree.footer {
                footer.frame = direction.translate(footer.frame, shift);
            }
        }
    }

    // The overscroll footer sits past whichever ends last, content or
    // viewport, and never participates in the underflow shift.
    tree.overscroll_footer = state.overscroll_footer().map(|entry| {
        let (frame, _) = pass.place(
            entry,
            ItemWidth::Default,
            content_main.max(viewport_main),
            layout.default_header_footer_size,
        );
        SupplementaryAttributes { frame }
    });

    tree
}

/// Shared context for one layout pass.
struct LayoutPass<'a> {
    direction: LayoutDirection,
    viewport_cross: f32,
    default_width: f32,
    pool: &'a mut ReusePool,
}

impl LayoutPass<'_> {
    /// Resolves one element's cross-axis position, measures it, and returns
    /// its frame plus main-axis extent.
    fn place(
        &mut self,
        entry: &ElementState,
        parent_width: ItemWidth,
        offset: f32,
        default_size: Size,
    ) -> (Rect, f32) {
        let position = entry
            .width()
            .merge(parent_width)
            .position(self.viewport_cross, self.default_width);

        let constraint = self.direction.size(f32::INFINITY, position.width);
        let size = entry.size(constraint, self.direction, default_size, self.pool);
        let main = self.direction.main_extent(size);

        (
            self.direction
                .rect(offset, position.origin, main, position.width),
            main,
        )
    }
}

fn shift_section(section: &mut SectionAttributes, direction: LayoutDirection, amount: f32) {
    section.frame = direction.translate(section.frame, amount);

    if let Some(header) = &mut section.header {
        header.frame = direction.translate(header.frame, amount);
    }
    if let Some(footer) = &mut section.footer {
        footer.frame = direction.translate(footer.frame, amount);
    }
    for item in &mut section.items {
        item.frame = direction.translate(item.frame, amount);
    }
}
