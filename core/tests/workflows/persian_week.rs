// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The Saturday-first, five-day Persian working week.

use chrono::Weekday;

use slotcal_core::{
    CalendarError, Grid, Locale, Preset, SurfaceEvent, TimeSlot, ViewKind, WeekConvention,
};

use crate::common::{at, date, test_session};

#[test]
fn persian_week_indices() {
    // Arrange
    let week = WeekConvention::persian();

    // Act
    let saturday = week.day_index(date(15));
    let thursday_visible = week.is_visible(date(20));

    // Assert
    assert_eq!(saturday, 0);
    assert!(!thursday_visible);
    assert_eq!(week.first_day, Weekday::Sat);
    assert_eq!(week.visible_days, 5);
}

#[test]
fn persian_week_grid_has_five_columns() {
    // Arrange
    let mut session = test_session(Preset::Persian);
    session.go_to(date(17));
    session.change_view(ViewKind::Week).unwrap();

    // Act
    let grid = session.grid();

    // Assert
    let Grid::Time(grid) = grid else {
        panic!("expected a time grid");
    };
    let labels: Vec<_> = grid.columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["شنبه 15", "یکشنبه 16", "دوشنبه 17", "سه‌شنبه 18", "چهارشنبه 19"]
    );
    assert_eq!(grid.columns[0].timed[0].event.title, "جلسه تیم");
    assert_eq!(grid.columns[1].timed[0].event.title, "تحلیل پروژه");
}

#[test]
fn persian_week_month_headers() {
    // Arrange
    let mut session = test_session(Preset::Persian);
    session.go_to(date(1));

    // Act
    let grid = session.grid();

    // Assert
    let Grid::Month(grid) = grid else {
        panic!("expected a month grid");
    };
    assert_eq!(grid.headers[0], "شنبه");
    assert_eq!(grid.weeks[0][0].date, date(1));
    assert!(grid.weeks.iter().all(|w| w.len() == 5));
}

#[test]
fn persian_week_hides_events_on_weekend_days() {
    // Arrange
    let mut session = test_session(Preset::Planner);
    session
        .handle(SurfaceEvent::SelectSlot(TimeSlot::new(
            at(20, 9, 0),
            at(20, 10, 0),
        )))
        .unwrap();
    session.editor_mut().form_mut().unwrap().title = "Thursday review".to_string();
    session.submit_editor().unwrap();
    let events = session.store().events().to_vec();

    // Act
    let view = slotcal_core::ViewState::new(ViewKind::Month, date(17), WeekConvention::persian());
    let grid = slotcal_core::build_grid(
        &view,
        &Preset::Persian.options(),
        &events,
        date(17),
    );

    // Assert
    let Grid::Month(grid) = grid else {
        panic!("expected a month grid");
    };
    let titles: Vec<_> = grid
        .weeks
        .iter()
        .flatten()
        .flat_map(|c| c.events.iter().map(|e| e.title.as_str()))
        .collect();
    assert!(titles.contains(&"Team Meeting"));
    assert!(!titles.contains(&"Thursday review"));
}

#[test]
fn persian_week_offers_month_and_week_only() {
    // Arrange
    let mut session = test_session(Preset::Persian);

    // Act
    let result = session.change_view(ViewKind::Day);

    // Assert
    assert_eq!(result, Err(CalendarError::ViewUnavailable(ViewKind::Day)));
    assert_eq!(session.view().convention().locale, Locale::Fa);
    assert_eq!(Locale::Fa.messages().week, "هفته");
}
