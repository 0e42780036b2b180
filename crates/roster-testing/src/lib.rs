//! Testing utilities and harness for Roster.
//!
//! Provides instrumented content types whose rendered instances record
//! every apply, plus a thread-local count of factory invocations so tests
//! can assert on pool behavior without reaching into the engine.

use std::cell::{Cell, RefCell};

use roster_core::{ApplyReason, Content, Item, ListContent, Section};
use roster_layout::{LayoutDirection, Measurable, Rect, Size, Sizing};

thread_local! {
    static CREATED_INSTANCES: Cell<usize> = Cell::new(0);
}

/// Number of rendered instances created since the last
/// [`reset_instance_count`]. Counts factory invocations, not pool pops.
pub fn created_instance_count() -> usize {
    CREATED_INSTANCES.with(Cell::get)
}

pub fn reset_instance_count() {
    CREATED_INSTANCES.with(|count| count.set(0));
}

fn record_created_instance() {
    CREATED_INSTANCES.with(|count| count.set(count.get() + 1));
}

/// Content with a payload value and a configurable natural size.
///
/// Equivalence is structural equality of the whole value, so two contents
/// with the same `value` and natural size are equivalent.
#[derive(Clone, Debug, PartialEq)]
pub struct TestContent {
    pub value: u64,
    pub natural_size: Size,
}

impl TestContent {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            natural_size: Size::new(100.0, 40.0),
        }
    }

    pub fn with_natural_size(mut self, natural_size: Size) -> Self {
        self.natural_size = natural_size;
        self
    }
}

/// Instance produced for [`TestContent`]; reports the natural size of the
/// last content applied to it and records every apply.
#[derive(Default)]
pub struct TestInstance {
    pub natural_size: Cell<Size>,
    pub applied: RefCell<Vec<(u64, ApplyReason)>>,
}

impl Measurable for TestInstance {
    fn size_that_fits(&self, _available: Size) -> Size {
        self.natural_size.get()
    }

    fn size_fitting(&self, _available: Size, _direction: LayoutDirection) -> Size {
        self.natural_size.get()
    }
}

impl ListContent for TestContent {
    type Instance = TestInstance;

    fn new_instance(_frame: Rect) -> TestInstance {
        record_created_instance();
        TestInstance::default()
    }

    fn apply(&self, instance: &mut TestInstance, reason: ApplyReason) {
        instance.natural_size.set(self.natural_size);
        instance.applied.borrow_mut().push((self.value, reason));
    }

    fn is_equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

/// A second content type, for tests that need distinct reuse keys. Shares
/// [`TestInstance`] so the only difference from [`TestContent`] is the
/// pooling key.
#[derive(Clone, Debug, PartialEq)]
pub struct AltContent(pub u64);

impl ListContent for AltContent {
    type Instance = TestInstance;

    fn new_instance(_frame: Rect) -> TestInstance {
        record_created_instance();
        TestInstance::default()
    }

    fn apply(&self, instance: &mut TestInstance, reason: ApplyReason) {
        instance.natural_size.set(Size::ZERO);
        instance.applied.borrow_mut().push((self.0, reason));
    }

    fn is_equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

/// An item keyed and valued by the same number, with default sizing.
pub fn item(key: u64) -> Item<TestContent> {
    Item::new(key, TestContent::new(key))
}

/// An item with a fixed main-axis height.
pub fn fixed_item(key: u64, height: f32) -> Item<TestContent> {
    Item::new(key, TestContent::new(key)).with_sizing(Sizing::Fixed {
        width: 0.0,
        height,
    })
}

/// A section holding the given items.
pub fn section(key: u64, items: impl IntoIterator<Item = Item<TestContent>>) -> Section {
    let mut section = Section::new(key);
    for item in items {
        section = section.with_item(item);
    }
    section
}

/// Content consisting of one section per group of items.
pub fn content(sections: impl IntoIterator<Item = Section>) -> Content {
    let mut content = Content::new();
    for section in sections {
        content = content.with_section(section);
    }
    content
}
