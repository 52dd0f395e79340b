// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Sessions built from TOML configuration.

use slotcal_core::{
    CalendarError, Config, EventId, Grid, Preset, RangePolicy, SequentialIdGenerator, Session,
    ViewKind,
};

use crate::common::{assert_titles, at, date, test_session_with};

#[test]
fn config_driven_events_replace_seeds() {
    // Arrange
    let config: Config = toml::from_str(
        r#"
preset = "planner"

[[events]]
id = "standup"
title = "Standup"
start = "2024-06-17T10:00:00"
end = "2024-06-17T10:15:00"

[[events]]
title = "Retro"
start = "2024-06-21T16:00:00"
end = "2024-06-21T17:00:00"
description = "Sprint retrospective"
"#,
    )
    .unwrap();

    // Act
    let session = test_session_with(&config);

    // Assert
    assert_titles(session.store(), &["Standup", "Retro"]);
    assert!(session.store().get(&EventId::from("standup")).is_some());
    assert!(session.store().get(&EventId::from("1000")).is_some());
}

#[test]
fn config_driven_slot_and_view() {
    // Arrange
    let config: Config = toml::from_str(
        r#"
preset = "agenda"
slot_duration = "1h"
agenda_days = 2
"#,
    )
    .unwrap();

    // Act
    let session = test_session_with(&config);

    // Assert
    assert_eq!(session.view().kind(), ViewKind::Agenda);
    assert_eq!(session.view().anchor(), date(18));
    let Grid::Time(grid) = session.grid() else {
        panic!("expected a time grid");
    };
    assert_eq!(grid.columns.len(), 2);
    assert_eq!(grid.slots.len(), 24);
    assert_eq!(grid.columns[0].timed.len(), 4);
}

#[test]
fn config_driven_lenient_policy() {
    // Arrange
    let config: Config = toml::from_str(
        r#"
range_policy = "lenient"

[[events]]
title = "Marker"
start = "2024-06-17T10:00:00"
end = "2024-06-17T10:00:00"
"#,
    )
    .unwrap();

    // Act
    let session = test_session_with(&config);

    // Assert
    assert_eq!(session.store().policy(), RangePolicy::Lenient);
    assert_eq!(session.store().len(), 1);
}

#[test]
fn config_driven_invalid_seed_is_rejected() {
    // Arrange
    let config: Config = toml::from_str(
        r#"
[[events]]
title = "Backwards"
start = "2024-06-17T11:00:00"
end = "2024-06-17T10:00:00"
"#,
    )
    .unwrap();

    // Act
    let result = Session::with_generator(&config, at(17, 8, 0), SequentialIdGenerator::default());

    // Assert
    assert!(matches!(result, Err(CalendarError::InvalidRange { .. })));
}

#[test]
fn config_driven_duplicate_ids_are_rejected() {
    // Arrange
    let config: Config = toml::from_str(
        r#"
[[events]]
id = "1"
title = "A"
start = "2024-06-17T10:00:00"
end = "2024-06-17T11:00:00"

[[events]]
id = "1"
title = "B"
start = "2024-06-17T10:00:00"
end = "2024-06-17T11:00:00"
"#,
    )
    .unwrap();

    // Act
    let result = Session::with_generator(&config, at(17, 8, 0), SequentialIdGenerator::default());

    // Assert
    assert_eq!(
        result.unwrap_err(),
        CalendarError::DuplicateId(EventId::from("1"))
    );
}

#[test]
fn config_driven_default_view_override() {
    // Arrange
    let config = Config {
        default_view: Some(ViewKind::List),
        ..Config::with_preset(Preset::Planner)
    };

    // Act
    let session = test_session_with(&config);

    // Assert
    let Grid::List(grid) = session.grid() else {
        panic!("expected a list grid");
    };
    assert_eq!(grid.days.len(), 2);
}
