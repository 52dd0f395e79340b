// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;

use crate::{EventId, ViewKind};

/// Errors raised by the event store, the entry editor and the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// The event title is empty or only whitespace.
    #[error("event title must not be empty")]
    EmptyTitle,

    /// The event does not end after it starts.
    #[error("event must end after it starts (start: {start}, end: {end})")]
    InvalidRange {
        /// Proposed start.
        start: NaiveDateTime,
        /// Proposed end.
        end: NaiveDateTime,
    },

    /// An event with the same identifier is already stored.
    #[error("event id already in use: {0}")]
    DuplicateId(EventId),

    /// A time of day could not be parsed.
    #[error("invalid time of day {0:?}, expected HH:MM")]
    InvalidTime(String),

    /// A date could not be parsed.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The entry editor is closed.
    #[error("the entry editor is not open")]
    EditorClosed,

    /// Delete was requested while creating a new event.
    #[error("only existing events can be deleted")]
    DeleteUnavailable,

    /// The active preset does not offer this view.
    #[error("the {0} view is not available here")]
    ViewUnavailable(ViewKind),
}
