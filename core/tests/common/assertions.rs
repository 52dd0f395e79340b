// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use slotcal_core::{CalendarEvent, EventDraft, EventStore, IdGenerator};

/// Asserts that an event carries every field of a draft.
///
/// # Panics
///
/// Panics if any field doesn't match the expected value.
pub fn assert_event_matches_draft(event: &CalendarEvent, draft: &EventDraft) {
    assert_eq!(event.title, draft.title, "Title mismatch");
    assert_eq!(event.start, draft.start, "Start mismatch");
    assert_eq!(event.end, draft.end, "End mismatch");
    assert_eq!(event.all_day, draft.all_day, "All-day flag mismatch");
    assert_eq!(event.description, draft.description, "Description mismatch");
    assert_eq!(event.location, draft.location, "Location mismatch");
    assert_eq!(event.priority, draft.priority, "Priority mismatch");
}

/// Asserts the titles of the stored events, in store order.
///
/// # Example
///
/// ```ignore
/// assert_titles(session.store(), &["Team Meeting", "Project Workshop"]);
/// ```
pub fn assert_titles<G: IdGenerator>(store: &EventStore<G>, titles: &[&str]) {
    let actual: Vec<_> = store.events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(actual, titles, "Stored titles mismatch");
}
