// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::{Datelike, Months, NaiveDate, TimeDelta};

use crate::{DateRange, Locale, WeekConvention};

/// Number of days shown by the agenda view unless configured otherwise.
pub(crate) const DEFAULT_AGENDA_DAYS: u32 = 7;

/// Most days the agenda view can show.
pub const MAX_AGENDA_DAYS: u32 = 366;

/// Granularity of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ViewKind {
    /// Whole weeks covering a month.
    Month,

    /// One week as a time grid.
    Week,

    /// One day as a time grid.
    Day,

    /// The week's events as a list.
    List,

    /// Several consecutive days as a time grid.
    Agenda,
}

const VIEW_MONTH: &str = "month";
const VIEW_WEEK: &str = "week";
const VIEW_DAY: &str = "day";
const VIEW_LIST: &str = "list";
const VIEW_AGENDA: &str = "agenda";

impl ViewKind {
    /// Localised label.
    pub fn label(self, locale: Locale) -> &'static str {
        let messages = locale.messages();
        match self {
            ViewKind::Month => messages.month,
            ViewKind::Week => messages.week,
            ViewKind::Day => messages.day,
            ViewKind::List => messages.list,
            ViewKind::Agenda => messages.agenda,
        }
    }

    /// Whether the view is drawn as a time grid.
    pub fn is_time_grid(self) -> bool {
        matches!(self, ViewKind::Week | ViewKind::Day | ViewKind::Agenda)
    }
}

impl AsRef<str> for ViewKind {
    fn as_ref(&self) -> &str {
        match self {
            ViewKind::Month => VIEW_MONTH,
            ViewKind::Week => VIEW_WEEK,
            ViewKind::Day => VIEW_DAY,
            ViewKind::List => VIEW_LIST,
            ViewKind::Agenda => VIEW_AGENDA,
        }
    }
}

impl Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ViewKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            VIEW_MONTH => Ok(ViewKind::Month),
            VIEW_WEEK => Ok(ViewKind::Week),
            VIEW_DAY => Ok(ViewKind::Day),
            VIEW_LIST => Ok(ViewKind::List),
            VIEW_AGENDA => Ok(ViewKind::Agenda),
            _ => Err(()),
        }
    }
}

/// Navigation through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// One view length back.
    Prev,

    /// One view length forward.
    Next,

    /// Jump to the current date.
    Today,
}

/// The current view kind and the date it is anchored on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    kind: ViewKind,
    anchor: NaiveDate,
    agenda_days: u32,
    convention: WeekConvention,
}

impl ViewState {
    pub fn new(kind: ViewKind, anchor: NaiveDate, convention: WeekConvention) -> Self {
        Self {
            kind,
            anchor,
            agenda_days: DEFAULT_AGENDA_DAYS,
            convention,
        }
    }

    /// Sets how many days the agenda view shows, between one and [`MAX_AGENDA_DAYS`].
    pub fn with_agenda_days(mut self, days: u32) -> Self {
        self.agenda_days = days.clamp(1, MAX_AGENDA_DAYS);
        self
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn agenda_days(&self) -> u32 {
        self.agenda_days
    }

    pub fn convention(&self) -> &WeekConvention {
        &self.convention
    }

    pub fn set_kind(&mut self, kind: ViewKind) {
        self.kind = kind;
    }

    /// Anchors the view on another date.
    pub fn go_to(&mut self, date: NaiveDate) {
        self.anchor = date;
    }

    /// The days covered by the view.
    pub fn visible_range(&self) -> DateRange {
        match self.kind {
            ViewKind::Month => {
                let first = first_of_month(self.anchor);
                let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
                let last = next.pred_opt().unwrap_or(first);
                let start = self.convention.week_start(first);
                let end = self.convention.week_start(last) + TimeDelta::days(7);
                DateRange { start, end }
            }
            ViewKind::Week | ViewKind::List => {
                DateRange::new(self.convention.week_start(self.anchor), 7)
            }
            ViewKind::Day => DateRange::new(self.anchor, 1),
            ViewKind::Agenda => DateRange::new(self.anchor, self.agenda_days),
        }
    }

    /// Moves the anchor by one view length, or to `today`.
    pub fn navigate(&mut self, nav: Navigation, today: NaiveDate) {
        self.anchor = match nav {
            Navigation::Today => today,
            Navigation::Prev | Navigation::Next => {
                let forward = nav == Navigation::Next;
                match self.kind {
                    ViewKind::Month => {
                        let first = first_of_month(self.anchor);
                        let moved = if forward {
                            first.checked_add_months(Months::new(1))
                        } else {
                            first.checked_sub_months(Months::new(1))
                        };
                        moved.unwrap_or(first)
                    }
                    kind => {
                        let days = match kind {
                            ViewKind::Week | ViewKind::List => 7,
                            ViewKind::Agenda => i64::from(self.agenda_days),
                            _ => 1,
                        };
                        let step = TimeDelta::days(if forward { days } else { -days });
                        self.anchor.checked_add_signed(step).unwrap_or(self.anchor)
                    }
                }
            }
        };
        tracing::debug!(kind = %self.kind, anchor = %self.anchor, "view navigated");
    }

    /// Heading of the view, e.g. `June 2024` or `Jun 16 – 22, 2024`.
    pub fn title(&self) -> String {
        let range = self.visible_range();
        match self.kind {
            ViewKind::Month => self.anchor.format("%B %Y").to_string(),
            ViewKind::Day => format!(
                "{}, {}",
                self.convention.day_name(self.anchor),
                self.anchor.format("%B %-d, %Y")
            ),
            _ => {
                let last = range.end.pred_opt().unwrap_or(range.start);
                if range.start.month() == last.month() {
                    format!(
                        "{} – {}",
                        range.start.format("%b %-d"),
                        last.format("%-d, %Y")
                    )
                } else {
                    format!(
                        "{} – {}",
                        range.start.format("%b %-d"),
                        last.format("%b %-d, %Y")
                    )
                }
            }
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
