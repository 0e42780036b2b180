//! The declarative content model: what the list should show.
//!
//! A [`Content`] value is an immutable-per-update description. It owns no
//! rendered instances and no measurement state; reconciling it into a
//! [`PresentationState`](crate::PresentationState) is what gives elements a
//! lifetime across updates.

mod element;
mod identifier;
mod section;

pub use element::*;
pub use identifier::*;
pub use section::*;

/// Everything a list should present: optional list-level header, footer,
/// and overscroll footer, plus the ordered sections.
#[derive(Default)]
pub struct Content {
    pub header: Option<Box<dyn AnyElement>>,
    pub footer: Option<Box<dyn AnyElement>>,

    /// Supplementary pinned past the end of the content, visible only when
    /// the list is pulled beyond its bounds.
    pub overscroll_footer: Option<Box<dyn AnyElement>>,

    pub sections: Vec<Section>,
}

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header<C: ListContent>(mut self, header: HeaderFooter<C>) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    pub fn with_footer<C: ListContent>(mut self, footer: HeaderFooter<C>) -> Self {
        self.footer = Some(Box::new(footer));
        self
    }

    pub fn with_overscroll_footer<C: ListContent>(mut self, footer: HeaderFooter<C>) -> Self {
        self.overscroll_footer = Some(Box::new(footer));
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// True when there is nothing to present at all.
    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.footer.is_none()
            && self.overscroll_footer.is_none()
            && self.sections.iter().all(Section::is_empty)
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
