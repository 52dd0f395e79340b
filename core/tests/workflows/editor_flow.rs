// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The surface, editor and store loop as driven through a session.

use slotcal_core::{
    CalendarError, EditorMode, EventId, Grid, Preset, SessionOutcome, SurfaceEvent, TimeSlot,
};

use crate::common::{assert_titles, at, test_session};

#[test]
fn editor_flow_select_fill_submit() {
    // Arrange
    let mut session = test_session(Preset::Planner);
    let slot = TimeSlot::new(at(17, 10, 0), at(17, 10, 15));

    // Act
    session.handle(SurfaceEvent::SelectSlot(slot)).unwrap();
    let form = session.editor_mut().form_mut().unwrap();
    assert_eq!(form.start_time, "10:00");
    assert_eq!(form.end_time, "10:15");
    form.title = "Standup".to_string();
    let outcome = session.submit_editor().unwrap();

    // Assert
    assert_eq!(outcome, SessionOutcome::Created(EventId::from("1000")));
    assert!(!session.editor().is_open());
    assert!(session.editor().selected_slot().is_none());
    assert_titles(
        session.store(),
        &["Team Meeting", "Project Workshop", "Standup"],
    );

    // Assert - the new event is on the grid
    let Grid::Time(grid) = session.grid() else {
        panic!("expected a time grid");
    };
    let monday = grid.columns.iter().find(|c| c.date == at(17, 0, 0).date()).unwrap();
    assert!(monday.timed.iter().any(|s| s.event.title == "Standup"));
}

#[test]
fn editor_flow_empty_title_changes_nothing() {
    // Arrange
    let mut session = test_session(Preset::Planner);
    session
        .handle(SurfaceEvent::SelectSlot(TimeSlot::new(
            at(17, 10, 0),
            at(17, 10, 15),
        )))
        .unwrap();
    let before = session.store().events().to_vec();

    // Act
    let outcome = session.submit_editor().unwrap();

    // Assert
    assert_eq!(outcome, SessionOutcome::Ignored);
    assert!(session.editor().is_open());
    assert_eq!(session.store().events(), before.as_slice());
}

#[test]
fn editor_flow_malformed_time_keeps_editor_open() {
    // Arrange
    let mut session = test_session(Preset::Planner);
    session.new_event();
    let form = session.editor_mut().form_mut().unwrap();
    form.title = "Lunch".to_string();
    form.end_time = "twelve".to_string();

    // Act
    let result = session.submit_editor();

    // Assert
    assert_eq!(result, Err(CalendarError::InvalidTime("twelve".to_string())));
    assert!(session.editor().is_open());
    assert_eq!(session.store().len(), 2);
}

#[test]
fn editor_flow_edit_then_delete() {
    // Arrange
    let mut session = test_session(Preset::Planner);
    let id = EventId::from("1");

    // Act - open on click
    session.handle(SurfaceEvent::ClickEvent(id.clone())).unwrap();

    // Assert - prefilled in edit mode
    assert_eq!(session.editor().mode(), Some(&EditorMode::Edit(id.clone())));
    let form = session.editor().form().unwrap();
    assert_eq!(form.title, "Team Meeting");
    assert_eq!(form.start_time, "10:00");
    assert_eq!(form.end_time, "11:30");

    // Act - ask, then confirm
    let request = session.request_delete().unwrap();
    let outcome = session.confirm_delete();

    // Assert
    assert_eq!(
        request.prompt(),
        "Are you sure you want to delete \"Team Meeting\" event?"
    );
    assert_eq!(outcome, SessionOutcome::Deleted(id.clone()));
    assert!(!session.editor().is_open());
    assert!(session.store().get(&id).is_none());
}

#[test]
fn editor_flow_delete_is_not_offered_when_creating() {
    // Arrange
    let mut session = test_session(Preset::Planner);
    session.new_event();

    // Act
    let result = session.request_delete();

    // Assert
    assert_eq!(result, Err(CalendarError::DeleteUnavailable));
    assert!(session.pending_delete().is_none());
    assert_eq!(session.store().len(), 2);
}

#[test]
fn editor_flow_close_discards_the_form() {
    // Arrange
    let mut session = test_session(Preset::Planner);
    session.handle(SurfaceEvent::ClickEvent(EventId::from("2"))).unwrap();
    session.editor_mut().form_mut().unwrap().title = "Changed".to_string();

    // Act
    session.close_editor();

    // Assert
    assert!(!session.editor().is_open());
    assert_titles(session.store(), &["Team Meeting", "Project Workshop"]);
}

#[test]
fn editor_flow_agenda_drag_without_editor() {
    // Arrange
    let mut session = test_session(Preset::Agenda);
    let lunch = EventId::from("3");

    // Act
    let clicked = session.handle(SurfaceEvent::ClickEvent(lunch.clone())).unwrap();
    let moved = session
        .handle(SurfaceEvent::DropEvent {
            id: lunch.clone(),
            start: at(19, 12, 30),
            end: at(19, 13, 30),
        })
        .unwrap();

    // Assert
    assert_eq!(clicked, SessionOutcome::Ignored);
    assert_eq!(moved, SessionOutcome::Moved(lunch.clone()));
    assert_eq!(session.store().get(&lunch).unwrap().start, at(19, 12, 30));
}
