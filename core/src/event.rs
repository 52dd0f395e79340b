// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::datetime::start_of_day;

/// Opaque identifier of an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates an identifier from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A calendar event as held by the event store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    /// Unique identifier.
    pub id: EventId,

    /// Title shown on the grid.
    pub title: String,

    /// Start, a floating local date and time.
    pub start: NaiveDateTime,

    /// End, a floating local date and time.
    pub end: NaiveDateTime,

    /// Whether the event covers whole days.
    pub all_day: bool,

    /// Free-form description.
    pub description: Option<String>,

    /// Where the event takes place.
    pub location: Option<String>,

    /// Priority, if any.
    pub priority: Option<Priority>,
}

impl CalendarEvent {
    /// Builds an event from a draft and an identifier.
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            start: draft.start,
            end: draft.end,
            all_day: draft.all_day,
            description: draft.description,
            location: draft.location,
            priority: draft.priority,
        }
    }

    /// Length of the event.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the event intersects the half-open range `[start, end)`.
    ///
    /// Events without a positive length count when their start falls in the range.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        if self.end <= self.start {
            self.start >= start && self.start < end
        } else {
            self.start < end && self.end > start
        }
    }

    /// Whether any part of the event falls on the given day.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        let day_start = start_of_day(date);
        self.overlaps(day_start, day_start + TimeDelta::days(1))
    }
}

/// Draft for an event, used for creating new events.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventDraft {
    /// Title of the event.
    pub title: String,

    /// Start of the event.
    pub start: NaiveDateTime,

    /// End of the event.
    pub end: NaiveDateTime,

    /// Whether the event covers whole days.
    #[serde(default)]
    pub all_day: bool,

    /// Description of the event.
    #[serde(default)]
    pub description: Option<String>,

    /// Location of the event.
    #[serde(default)]
    pub location: Option<String>,

    /// Priority of the event.
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl EventDraft {
    /// A draft with only the required fields set.
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            all_day: false,
            description: None,
            location: None,
            priority: None,
        }
    }
}

/// Patch for an event, allowing partial updates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventPatch {
    /// The title of the event, if changed.
    pub title: Option<String>,

    /// The start of the event, if changed.
    pub start: Option<NaiveDateTime>,

    /// The end of the event, if changed.
    pub end: Option<NaiveDateTime>,

    /// The all-day flag, if changed.
    pub all_day: Option<bool>,

    /// The description, if changed. `Some(None)` clears it.
    pub description: Option<Option<String>>,

    /// The location, if changed. `Some(None)` clears it.
    pub location: Option<Option<String>>,

    /// The priority, if changed. `Some(None)` clears it.
    pub priority: Option<Option<Priority>>,
}

impl EventPatch {
    /// A patch that only moves the event to a new time range.
    pub fn reschedule(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }

    /// Applies the patch to an event, modifying it in place.
    pub fn apply_to<'a>(&self, e: &'a mut CalendarEvent) -> &'a mut CalendarEvent {
        if let Some(title) = &self.title {
            e.title.clone_from(title);
        }

        if let Some(start) = self.start {
            e.start = start;
        }

        if let Some(end) = self.end {
            e.end = end;
        }

        if let Some(all_day) = self.all_day {
            e.all_day = all_day;
        }

        if let Some(description) = &self.description {
            e.description.clone_from(description);
        }

        if let Some(location) = &self.location {
            e.location.clone_from(location);
        }

        if let Some(priority) = self.priority {
            e.priority = priority;
        }

        e
    }
}

/// Priority of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Priority {
    /// Low priority.
    Low,

    /// Medium priority.
    Medium,

    /// High priority.
    High,
}

const PRIORITY_LOW: &str = "low";
const PRIORITY_MEDIUM: &str = "medium";
const PRIORITY_HIGH: &str = "high";

impl AsRef<str> for Priority {
    fn as_ref(&self) -> &str {
        match self {
            Priority::Low => PRIORITY_LOW,
            Priority::Medium => PRIORITY_MEDIUM,
            Priority::High => PRIORITY_HIGH,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            PRIORITY_LOW => Ok(Priority::Low),
            PRIORITY_MEDIUM => Ok(Priority::Medium),
            PRIORITY_HIGH => Ok(Priority::High),
            _ => Err(()),
        }
    }
}
