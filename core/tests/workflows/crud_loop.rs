// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Store round trips through add, update, move and delete.

use slotcal_core::{
    CalendarError, EventDraft, EventId, EventPatch, EventStore, Priority, RangePolicy,
    SequentialIdGenerator,
};

use crate::common::{assert_event_matches_draft, assert_titles, at, test_event_draft};

fn store() -> EventStore<SequentialIdGenerator> {
    EventStore::with_generator(SequentialIdGenerator::default())
}

#[test]
fn crud_add_then_read_returns_one_new_record() {
    // Arrange
    let mut store = store();
    store.add(test_event_draft("Existing")).unwrap();
    let mut draft = EventDraft::new("Standup", at(17, 10, 0), at(17, 10, 15));
    draft.location = Some("Room 4".to_string());
    draft.priority = Some(Priority::Low);

    // Act
    let id = store.add(draft.clone()).unwrap().id.clone();

    // Assert
    assert_eq!(store.len(), 2);
    let matching: Vec<_> = store.events().iter().filter(|e| e.id == id).collect();
    assert_eq!(matching.len(), 1);
    assert_event_matches_draft(matching[0], &draft);
}

#[test]
fn crud_add_then_delete_restores_the_list() {
    // Arrange
    let mut store = store();
    store.add(test_event_draft("Existing")).unwrap();
    let before = store.events().to_vec();

    // Act
    let id = store
        .add(EventDraft::new("Standup", at(17, 10, 0), at(17, 10, 15)))
        .unwrap()
        .id
        .clone();
    let removed = store.delete(&id);

    // Assert
    assert!(removed.is_some());
    assert_eq!(store.events(), before.as_slice());
}

#[test]
fn crud_update_leaves_other_records_alone() {
    // Arrange
    let mut store = store();
    let a = store.add(test_event_draft("A")).unwrap().id.clone();
    let b = store.add(test_event_draft("B")).unwrap().clone();

    // Act
    let patch = EventPatch {
        title: Some("A, revised".to_string()),
        location: Some(Some("Online".to_string())),
        ..Default::default()
    };
    store.update(&a, &patch).unwrap();

    // Assert
    let updated = store.get(&a).unwrap();
    assert_eq!(updated.title, "A, revised");
    assert_eq!(updated.location.as_deref(), Some("Online"));
    assert_eq!(updated.start, at(17, 10, 0));
    assert_eq!(store.get(&b.id), Some(&b));
}

#[test]
fn crud_unknown_ids_are_silent_noops() {
    // Arrange
    let mut store = store();
    store.add(test_event_draft("A")).unwrap();
    let before = store.events().to_vec();
    let missing = EventId::from("missing");

    // Act
    let updated = store
        .update(&missing, &EventPatch::reschedule(at(18, 9, 0), at(18, 10, 0)))
        .map(|found| found.cloned());
    let deleted = store.delete(&missing);

    // Assert
    assert_eq!(updated, Ok(None));
    assert!(deleted.is_none());
    assert_eq!(store.events(), before.as_slice());
}

#[test]
fn crud_overlapping_events_are_allowed() {
    // Arrange
    let mut store = store();

    // Act
    store.add(test_event_draft("A")).unwrap();
    store.add(test_event_draft("B")).unwrap();

    // Assert
    assert_titles(&store, &["A", "B"]);
    assert_eq!(store.between(at(17, 10, 30), at(17, 10, 45)).count(), 2);
}

#[test]
fn crud_range_policy_decides_inverted_events() {
    // Arrange
    let inverted = EventDraft::new("Backwards", at(17, 11, 0), at(17, 10, 0));
    let mut strict = store();
    let mut lenient = store().with_policy(RangePolicy::Lenient);

    // Act
    let strict_result = strict.add(inverted.clone());
    let lenient_result = lenient.add(inverted);

    // Assert
    assert!(matches!(
        strict_result,
        Err(CalendarError::InvalidRange { .. })
    ));
    assert!(strict.is_empty());
    assert!(lenient_result.is_ok());
    assert_eq!(lenient.len(), 1);
}

#[test]
fn crud_move_keeps_identity() {
    // Arrange
    let mut store = store();
    let id = store.add(test_event_draft("A")).unwrap().id.clone();

    // Act
    store.move_event(&id, at(20, 15, 0), at(20, 16, 0)).unwrap();

    // Assert
    assert_eq!(store.len(), 1);
    let moved = store.get(&id).unwrap();
    assert_eq!((moved.start, moved.end), (at(20, 15, 0), at(20, 16, 0)));
    assert_eq!(moved.title, "A");
}
