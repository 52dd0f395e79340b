// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Width notifications switching the editor variant and the grid granularity.

use slotcal_core::{
    Config, DisplayMode, EditorVariant, Grid, Preset, ResponsiveSwitch, ViewKind,
};

use crate::common::{test_session, test_session_with};

#[test]
fn responsive_one_toggle_per_crossing() {
    // Arrange
    let mut session = test_session(Preset::Planner);
    let widths = [1280, 1024, 700, 600, 768, 769, 1920, 320];

    // Act
    let changes: Vec<_> = widths
        .iter()
        .filter_map(|w| session.resize(*w))
        .collect();

    // Assert
    assert_eq!(
        changes,
        vec![DisplayMode::Narrow, DisplayMode::Wide, DisplayMode::Narrow]
    );
    assert_eq!(session.editor_variant(), EditorVariant::Panel);
    assert_eq!(session.view().kind(), ViewKind::Day);
}

#[test]
fn responsive_same_side_changes_nothing() {
    // Arrange
    let mut session = test_session(Preset::Planner);

    // Act
    let changes: Vec<_> = [1000, 900, 800, 769]
        .iter()
        .filter_map(|w| session.resize(*w))
        .collect();

    // Assert
    assert!(changes.is_empty());
    assert_eq!(session.editor_variant(), EditorVariant::Dialog);
    assert_eq!(session.view().kind(), ViewKind::Week);
}

#[test]
fn responsive_grid_follows_granularity() {
    // Arrange
    let mut session = test_session(Preset::Planner);

    // Act
    session.resize(500);

    // Assert
    let Grid::Time(grid) = session.grid() else {
        panic!("expected a time grid");
    };
    assert_eq!(grid.columns.len(), 1);
    assert_eq!(grid.title, "Monday, June 17, 2024");
}

#[test]
fn responsive_custom_threshold() {
    // Arrange
    let config = Config {
        narrow_threshold: Some(1000),
        ..Config::with_preset(Preset::Timesheet)
    };
    let mut session = test_session_with(&config);

    // Act
    let change = session.resize(900);

    // Assert
    assert_eq!(change, Some(DisplayMode::Narrow));
    assert_eq!(session.view().kind(), ViewKind::Day);
}

#[test]
fn responsive_switch_alone() {
    // Arrange
    let mut switch = ResponsiveSwitch::new(768, 375);

    // Act
    let first = switch.observe(414);
    let second = switch.observe(1024);

    // Assert
    assert_eq!(first, None);
    assert_eq!(second, Some(DisplayMode::Wide));
    assert_eq!(switch.mode().granularity(), ViewKind::Week);
}
