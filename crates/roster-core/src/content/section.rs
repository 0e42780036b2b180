//! One ordered run of items with optional header and footer.

use std::hash::Hash;

use roster_layout::ItemWidth;

use crate::{AnyElement, HeaderFooter, Identifier, Item, ListContent};

/// An ordered sequence of items plus optional header/footer content.
///
/// Sections carry their own identifier, unique among the sections of one
/// [`Content`](crate::Content). Item identifiers are unique within their
/// section.
pub struct Section {
    pub identifier: Identifier,

    /// Default cross-axis width for everything in the section; individual
    /// elements merge their own width into this one.
    pub width: ItemWidth,

    pub header: Option<Box<dyn AnyElement>>,
    pub footer: Option<Box<dyn AnyElement>>,
    pub items: Vec<Box<dyn AnyElement>>,
}

impl Section {
    pub fn new(key: impl Hash) -> Self {
        Self {
            identifier: Identifier::of::<Section>(key),
            width: ItemWidth::Default,
            header: None,
            footer: None,
            items: Vec::new(),
        }
    }

    pub fn with_width(mut self, width: ItemWidth) -> Self {
        self.width = width;
        self
    }

    pub fn with_header<C: ListContent>(mut self, header: HeaderFooter<C>) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    pub fn with_footer<C: ListContent>(mut self, footer: HeaderFooter<C>) -> Self {
        self.footer = Some(Box::new(footer));
        self
    }

    pub fn with_item<C: ListContent>(mut self, item: Item<C>) -> Self {
        self.items.push(Box::new(item));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
