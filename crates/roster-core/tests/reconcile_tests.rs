use std::rc::Rc;

use roster_layout::Rect;
use roster_testing::{content, item, section, AltContent, TestContent, TestInstance};

use roster_core::{
    ApplyReason, Content, HeaderFooter, Item, PresentationState, ReuseKey, ReusePool, Section,
};

fn reconciled(state: &mut PresentationState, pool: &mut ReusePool, items: &[u64]) {
    let items = items.iter().map(|&key| item(key));
    state.reconcile(content([section(1, items)]), pool);
}

#[test]
fn reconciling_identical_content_preserves_entry_identity() {
    let mut state = PresentationState::new();
    let mut pool = ReusePool::new();

    reconciled(&mut state, &mut pool, &[1, 2, 3]);

    let before: Vec<_> = state.sections()[0].items().to_vec();

    reconciled(&mut state, &mut pool, &[1, 2, 3]);

    let after = state.sections()[0].items();
    assert_eq!(after.len(), 3);
    for (old, new) in before.iter().zip(after) {
        assert!(Rc::ptr_eq(old, new), "entry object must survive the update");
        assert_eq!(new.cache_reset_count(), 0, "equivalent content must not invalidate");
    }
}

#[test]
fn reordering_preserves_entries_and_follows_new_order() {
    let mut state = PresentationState::new();
    let mut pool = ReusePool::new();

    reconciled(&mut state, &mut pool, &[1, 2, 3]);
    let first = Rc::clone(&state.sections()[0].items()[0]);

    reconciled(&mut state, &mut pool, &[3, 2, 1]);

    let items = state.sections()[0].items();
    assert!(Rc::ptr_eq(&items[2], &first));
    let keys: Vec<_> = items.iter().map(|e| e.identifier()).collect();
    assert_eq!(keys[0], first_identifier(3));
    assert_eq!(keys[2], first_identifier(1));
}

fn first_identifier(key: u64) -> roster_core::Identifier {
    roster_core::Identifier::of::<TestContent>(key)
}

#[test]
fn changed_payload_invalidates_the_size_cache() {
    let mut state = PresentationState::new();
    let mut pool = ReusePool::new();

    state.reconcile(
        content([section(1, [Item::new(7u64, TestContent::new(1))])]),
        &mut pool,
    );
    let entry = Rc::clone(&state.sections()[0].items()[0]);
    assert_eq!(entry.cache_reset_count(), 0);

    // Same identifier, different payload.
    state.reconcile(
        content([section(1, [Item::new(7u64, TestContent::new(2))])]),
        &mut pool,
    );
    assert!(Rc::ptr_eq(&entry, &state.sections()[0].items()[0]));
    assert_eq!(entry.cache_reset_count(), 1);

    // Same identifier, same payload.
    state.reconcile(
        content([section(1, [Item::new(7u64, TestContent::new(2))])]),
        &mut pool,
    );
    assert_eq!(entry.cache_reset_count(), 1);
}

#[test]
fn removed_entries_are_destroyed_and_release_their_instance_once() {
    let mut state = PresentationState::new();
    let mut pool = ReusePool::new();

    reconciled(&mut state, &mut pool, &[1, 2]);

    // B becomes visible.
    let b = Rc::clone(&state.sections()[0].items()[1]);
    b.will_display(&mut pool, Rect::ZERO);
    assert!(b.is_visible());
    assert_eq!(pool.idle_count(ReuseKey::of::<TestContent>()), 0);

    reconciled(&mut state, &mut pool, &[1]);

    assert_eq!(state.sections()[0].items().len(), 1);
    assert!(!b.is_visible(), "destroyed entry must detach its instance");
    assert_eq!(
        pool.idle_count(ReuseKey::of::<TestContent>()),
        1,
        "the released instance lands in the pool exactly once"
    );
}

#[test]
fn removed_sections_tear_down_all_their_entries() {
    let mut state = PresentationState::new();
    let mut pool = ReusePool::new();

    let two_sections = content([section(1, [item(1)]), section(2, [item(1)])]);
    state.reconcile(two_sections, &mut pool);

    state.sections()[1].items()[0].will_display(&mut pool, Rect::ZERO);

    state.reconcile(content([section(1, [item(1)])]), &mut pool);

    assert_eq!(state.sections().len(), 1);
    assert_eq!(pool.idle_count(ReuseKey::of::<TestContent>()), 1);
}

#[test]
fn visible_entries_receive_the_new_content_immediately() {
    let mut state = PresentationState::new();
    let mut pool = ReusePool::new();

    state.reconcile(
        content([section(1, [Item::new(7u64, TestContent::new(1))])]),
        &mut pool,
    );
    let entry = Rc::clone(&state.sections()[0].items()[0]);
    entry.will_display(&mut pool, Rect::ZERO);

    state.reconcile(
        content([section(1, [Item::new(7u64, TestContent::new(2))])]),
        &mut pool,
    );

    let last_applied = entry
        .with_visible_instance(|instance| {
            let instance = instance.as_any().downcast_ref::<TestInstance>().unwrap();
            instance.applied.borrow().last().copied()
        })
        .flatten()
        .expect("entry must still hold its instance");

    assert_eq!(last_applied, (2, ApplyReason::WasUpdated));
}

#[test]
fn header_slot_survives_only_while_the_identifier_matches() {
    let mut state = PresentationState::new();
    let mut pool = ReusePool::new();

    let with_header = |value: u64| {
        Content::new().with_header(HeaderFooter::new(10u64, TestContent::new(value)))
    };

    state.reconcile(with_header(1), &mut pool);
    let header = Rc::clone(state.header().unwrap());

    state.reconcile(with_header(2), &mut pool);
    assert!(Rc::ptr_eq(&header, state.header().unwrap()));
    assert_eq!(header.cache_reset_count(), 1);

    // A different identifier is a different logical element.
    state.reconcile(
        Content::new().with_header(HeaderFooter::new(11u64, TestContent::new(2))),
        &mut pool,
    );
    assert!(!Rc::ptr_eq(&header, state.header().unwrap()));

    state.reconcile(Content::new(), &mut pool);
    assert!(state.header().is_none());
}

#[test]
fn items_of_distinct_content_types_coexist_in_one_section() {
    let mut state = PresentationState::new();
    let mut pool = ReusePool::new();

    let mixed = Content::new().with_section(
        Section::new(1u64)
            .with_item(Item::new(1u64, TestContent::new(1)))
            .with_item(Item::new(1u64, AltContent(1))),
    );

    // Same key, different content types: identifiers are scoped by type.
    state.reconcile(mixed, &mut pool);
    assert_eq!(state.sections()[0].items().len(), 2);
}

#[test]
#[should_panic(expected = "duplicate section identifier")]
fn duplicate_section_identifiers_abort() {
    let mut state = PresentationState::new();
    let mut pool = ReusePool::new();

    state.reconcile(content([section(1, [item(1)]), section(1, [item(2)])]), &mut pool);
}

#[test]
#[should_panic(expected = "duplicate item identifier")]
fn duplicate_item_identifiers_within_a_section_abort() {
    let mut state = PresentationState::new();
    let mut pool = ReusePool::new();

    state.reconcile(content([section(1, [item(5), item(5)])]), &mut pool);
}
