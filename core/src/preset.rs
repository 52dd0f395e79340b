// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::{
    CalendarEvent, EventDraft, EventId, Priority, SurfaceOptions, ViewKind, WeekConvention,
    view::DEFAULT_AGENDA_DAYS,
};

/// A bundle of views, interaction rules and seed events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Preset {
    /// Every view, click to edit, drag and resize.
    #[default]
    Planner,

    /// Week and day views, click asks to delete.
    Timesheet,

    /// A three-day agenda with drag and resize.
    Agenda,

    /// Saturday-first working week with Persian labels.
    Persian,
}

/// What clicking an event does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickBehavior {
    /// Open the editor on it.
    Edit,

    /// Ask whether to delete it.
    ConfirmDelete,

    /// Nothing.
    Ignore,
}

const PRESET_PLANNER: &str = "planner";
const PRESET_TIMESHEET: &str = "timesheet";
const PRESET_AGENDA: &str = "agenda";
const PRESET_PERSIAN: &str = "persian";

impl Preset {
    /// Views offered, in toolbar order.
    pub fn views(self) -> &'static [ViewKind] {
        use ViewKind::*;
        match self {
            Preset::Planner => &[Month, Week, Day, List, Agenda],
            Preset::Timesheet => &[Week, Day],
            Preset::Agenda => &[Agenda, Day, Week],
            Preset::Persian => &[Month, Week],
        }
    }

    pub fn offers(self, view: ViewKind) -> bool {
        self.views().contains(&view)
    }

    pub fn default_view(self) -> ViewKind {
        match self {
            Preset::Planner | Preset::Timesheet => ViewKind::Week,
            Preset::Agenda => ViewKind::Agenda,
            Preset::Persian => ViewKind::Month,
        }
    }

    pub fn click_behavior(self) -> ClickBehavior {
        match self {
            Preset::Planner => ClickBehavior::Edit,
            Preset::Timesheet => ClickBehavior::ConfirmDelete,
            Preset::Agenda | Preset::Persian => ClickBehavior::Ignore,
        }
    }

    pub fn convention(self) -> WeekConvention {
        match self {
            Preset::Persian => WeekConvention::persian(),
            _ => WeekConvention::sunday_first(),
        }
    }

    pub fn agenda_days(self) -> u32 {
        match self {
            Preset::Agenda => 3,
            _ => DEFAULT_AGENDA_DAYS,
        }
    }

    /// Date the calendar opens on, when not today.
    pub fn initial_date(self) -> Option<NaiveDate> {
        match self {
            Preset::Agenda => NaiveDate::from_ymd_opt(2024, 6, 18),
            _ => None,
        }
    }

    pub fn options(self) -> SurfaceOptions {
        let half_hour = TimeDelta::minutes(30);
        match self {
            Preset::Planner => SurfaceOptions {
                resizable_from_start: true,
                ..Default::default()
            },
            Preset::Timesheet => SurfaceOptions {
                slot_duration: half_hour,
                editable: false,
                ..Default::default()
            },
            Preset::Agenda => SurfaceOptions {
                slot_duration: half_hour,
                all_day_slot: false,
                selectable: false,
                ..Default::default()
            },
            Preset::Persian => SurfaceOptions {
                slot_duration: half_hour,
                editable: false,
                selectable: false,
                ..Default::default()
            },
        }
    }

    /// Events the preset starts with.
    pub fn seed_events(self) -> Vec<CalendarEvent> {
        let seeds = match self {
            Preset::Planner => vec![
                seed("1", "Team Meeting", (17, 10, 0), (17, 11, 30)).map(|e| CalendarEvent {
                    description: Some("Weekly team sync meeting".to_owned()),
                    priority: Some(Priority::High),
                    ..e
                }),
                seed("2", "Project Workshop", (18, 14, 0), (18, 16, 0)).map(|e| CalendarEvent {
                    description: Some("Project planning session".to_owned()),
                    priority: Some(Priority::Medium),
                    ..e
                }),
            ],
            Preset::Timesheet => Vec::new(),
            Preset::Agenda => vec![
                seed("1", "Morning meeting", (18, 9, 0), (18, 10, 0)),
                seed("2", "Programming project", (18, 10, 30), (18, 12, 0)),
                seed("3", "Lunch", (18, 12, 0), (18, 13, 0)),
                seed("4", "Client meeting", (18, 14, 0), (18, 15, 30)),
                seed("5", "Performance review", (19, 11, 0), (19, 12, 0)),
            ],
            Preset::Persian => vec![
                seed("1", "جلسه تیم", (15, 10, 0), (15, 11, 30)),
                seed("2", "تحلیل پروژه", (16, 14, 0), (16, 16, 0)),
            ],
        };
        seeds.into_iter().flatten().collect()
    }
}

/// An event in June 2024, given `(day, hour, minute)` bounds.
fn seed(
    id: &str,
    title: &str,
    start: (u32, u32, u32),
    end: (u32, u32, u32),
) -> Option<CalendarEvent> {
    let at = |(d, h, m): (u32, u32, u32)| -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 6, d)?.and_hms_opt(h, m, 0)
    };
    let draft = EventDraft::new(title, at(start)?, at(end)?);
    Some(CalendarEvent::from_draft(EventId::from(id), draft))
}

impl AsRef<str> for Preset {
    fn as_ref(&self) -> &str {
        match self {
            Preset::Planner => PRESET_PLANNER,
            Preset::Timesheet => PRESET_TIMESHEET,
            Preset::Agenda => PRESET_AGENDA,
            Preset::Persian => PRESET_PERSIAN,
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Preset {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            PRESET_PLANNER => Ok(Preset::Planner),
            PRESET_TIMESHEET => Ok(Preset::Timesheet),
            PRESET_AGENDA => Ok(Preset::Agenda),
            PRESET_PERSIAN => Ok(Preset::Persian),
            _ => Err(()),
        }
    }
}
