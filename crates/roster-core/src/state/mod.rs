//! The identity-keyed store that outlives every content update.

mod entry;

pub use entry::*;

use std::rc::Rc;

use indexmap::IndexMap;
use roster_layout::ItemWidth;

use crate::collections::map::HashSet;
use crate::{AnyElement, Content, Identifier, ReusePool, Section};

/// Long-lived presentation state for one list.
///
/// Holds one [`ElementState`] per item/header/footer, keyed by identifier.
/// [`reconcile`](Self::reconcile) diffs a new [`Content`] against the
/// current state in O(n): surviving identifiers keep their entry object,
/// new identifiers get fresh entries, and vanished identifiers are torn
/// down with their rendered instances returned to the pool.
#[derive(Default)]
pub struct PresentationState {
    header: Option<Rc<ElementState>>,
    footer: Option<Rc<ElementState>>,
    overscroll_footer: Option<Rc<ElementState>>,
    sections: Vec<SectionState>,
}

/// Reconciliation tallies for the trace log.
#[derive(Default)]
struct ReconcileStats {
    created: usize,
    updated: usize,
    removed: usize,
}

impl PresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> Option<&Rc<ElementState>> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&Rc<ElementState>> {
        self.footer.as_ref()
    }

    pub fn overscroll_footer(&self) -> Option<&Rc<ElementState>> {
        self.overscroll_footer.as_ref()
    }

    pub fn sections(&self) -> &[SectionState] {
        &self.sections
    }

    /// Total number of item entries across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Replaces the presented content, preserving entry identity.
    ///
    /// Duplicate section identifiers, or duplicate item identifiers within
    /// one section, are a programming error in the caller's content and
    /// abort the pass.
    pub fn reconcile(&mut self, content: Content, pool: &mut ReusePool) {
        let mut stats = ReconcileStats::default();

        self.header = reconcile_slot(self.header.take(), content.header, pool, &mut stats);
        self.footer = reconcile_slot(self.footer.take(), content.footer, pool, &mut stats);
        self.overscroll_footer = reconcile_slot(
            self.overscroll_footer.take(),
            content.overscroll_footer,
            pool,
            &mut stats,
        );

        // Drain-and-rebuild: surviving sections move across by identifier,
        // leftovers tear down in their old order.
        let mut old: IndexMap<Identifier, SectionState> = self
            .sections
            .drain(..)
            .map(|section| (section.identifier, section))
            .collect();

        let mut seen = HashSet::default();
        let mut sections = Vec::with_capacity(content.sections.len());

        for section in content.sections {
            if !seen.insert(section.identifier) {
                panic!("duplicate section identifier {:?}", section.identifier);
            }

            match old.swap_remove(&section.identifier) {
                Some(mut existing) => {
                    existing.update(section, pool, &mut stats);
                    stats.updated += 1;
                    sections.push(existing);
                }
                None => {
                    stats.created += 1;
                    sections.push(SectionState::new(section, &mut stats));
                }
            }
        }

        for (_, removed) in old {
            removed.teardown(pool);
            stats.removed += 1;
        }

        self.sections = sections;

        log::trace!(
            "reconciled list content: {} created, {} updated, {} removed",
            stats.created,
            stats.updated,
            stats.removed
        );
    }
}

/// State for one section: its own identity plus the entries it owns.
pub struct SectionState {
    identifier: Identifier,
    width: ItemWidth,
    header: Option<Rc<ElementState>>,
    footer: Option<Rc<ElementState>>,
    items: Vec<Rc<ElementState>>,
}

impl SectionState {
    fn new(section: Section, stats: &mut ReconcileStats) -> Self {
        let identifier = section.identifier;

        let mut create = |model: Option<Box<dyn AnyElement>>| {
            model.map(|model| {
                stats.created += 1;
                ElementState::new(model)
            })
        };

        let header = create(section.header);
        let footer = create(section.footer);

        let mut seen = HashSet::default();
        let mut items = Vec::with_capacity(section.items.len());

        for model in section.items {
            assert_unique_item(&mut seen, model.identifier(), identifier);
            stats.created += 1;
            items.push(ElementState::new(model));
        }

        Self {
            identifier,
            width: section.width,
            header,
            footer,
            items,
        }
    }

    pub fn identifier(&self) -> Identifier {
        self.identifier
    }

    pub fn width(&self) -> ItemWidth {
        self.width
    }

    pub fn header(&self) -> Option<&Rc<ElementState>> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&Rc<ElementState>> {
        self.footer.as_ref()
    }

    pub fn items(&self) -> &[Rc<ElementState>] {
        &self.items
    }

    fn update(&mut self, section: Section, pool: &mut ReusePool, stats: &mut ReconcileStats) {
        self.width = section.width;
        self.header = reconcile_slot(self.header.take(), section.header, pool, stats);
        self.footer = reconcile_slot(self.footer.take(), section.footer, pool, stats);

        let mut old: IndexMap<Identifier, Rc<ElementState>> = self
            .items
            .drain(..)
            .map(|entry| (entry.identifier(), entry))
            .collect();

        let mut seen = HashSet::default();
        let mut items = Vec::with_capacity(section.items.len());

        for model in section.items {
            let identifier = model.identifier();
            assert_unique_item(&mut seen, identifier, self.identifier);

            match old.swap_remove(&identifier) {
                Some(entry) => {
                    entry.set_new(model);
                    stats.updated += 1;
                    items.push(entry);
                }
                None => {
                    stats.created += 1;
                    items.push(ElementState::new(model));
                }
            }
        }

        for (_, removed) in old {
            removed.teardown(pool);
            stats.removed += 1;
        }

        self.items = items;
    }

    fn teardown(self, pool: &mut ReusePool) {
        if let Some(header) = &self.header {
            header.teardown(pool);
        }
        if let Some(footer) = &self.footer {
            footer.teardown(pool);
        }
        for item in &self.items {
            item.teardown(pool);
        }
    }
}

fn assert_unique_item(seen: &mut HashSet<Identifier>, item: Identifier, section: Identifier) {
    if !seen.insert(item) {
        panic!("duplicate item identifier {item:?} in section {section:?}");
    }
}

/// Reconciles one supplementary slot (list or section header/footer).
///
/// The entry survives only when old and new share an identifier; a changed
/// identifier is a different logical element, torn down and recreated.
fn reconcile_slot(
    old: Option<Rc<ElementState>>,
    new: Option<Box<dyn AnyElement>>,
    pool: &mut ReusePool,
    stats: &mut ReconcileStats,
) -> Option<Rc<ElementState>> {
    match (old, new) {
        (Some(entry), Some(model)) if entry.identifier() == model.identifier() => {
            entry.set_new(model);
            stats.updated += 1;
            Some(entry)
        }
        (old, new) => {
            if let Some(entry) = old {
                entry.teardown(pool);
                stats.removed += 1;
            }
            new.map(|model| {
                stats.created += 1;
                ElementState::new(model)
            })
        }
    }
}
