// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helper functions to create dates, drafts and
//! sessions with deterministic identifiers.

use chrono::{NaiveDate, NaiveDateTime};

use slotcal_core::{Config, EventDraft, Preset, SequentialIdGenerator, Session};

/// A date in June 2024.
///
/// # Example
///
/// ```ignore
/// let monday = date(17);
/// ```
#[must_use]
pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

/// A date and time in June 2024.
///
/// # Example
///
/// ```ignore
/// let standup = at(17, 10, 0);
/// ```
#[must_use]
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(day).and_hms_opt(hour, minute, 0).unwrap()
}

/// Creates a one-hour draft on 2024-06-17 at 10:00 with the given title.
///
/// # Arguments
///
/// * `title` - Event title
#[must_use]
pub fn test_event_draft(title: &str) -> EventDraft {
    EventDraft::new(title, at(17, 10, 0), at(17, 11, 0))
}

/// Creates a session for a preset, opened on 2024-06-17 at 08:00.
///
/// Identifiers are generated sequentially from 1000.
#[must_use]
pub fn test_session(preset: Preset) -> Session<SequentialIdGenerator> {
    test_session_with(&Config::with_preset(preset))
}

/// Creates a session from a configuration, opened on 2024-06-17 at 08:00.
#[must_use]
pub fn test_session_with(config: &Config) -> Session<SequentialIdGenerator> {
    Session::with_generator(config, at(17, 8, 0), SequentialIdGenerator::starting_at(1000))
        .unwrap()
}
