// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Grid models handed to a [`CalendarSurface`](crate::CalendarSurface).

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta};

use crate::{CalendarEvent, TimeSlot, ViewKind, ViewState, WeekConvention, datetime::start_of_day};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Options of the calendar surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// Length of one time-grid row.
    pub slot_duration: TimeDelta,

    /// How often a row carries a time label.
    pub slot_label_interval: TimeDelta,

    /// Events listed in a month cell before the rest are folded into "+N more".
    pub day_max_events: usize,

    /// Whether time grids have an all-day row.
    pub all_day_slot: bool,

    /// Whether events can be dragged and resized.
    pub editable: bool,

    /// Whether empty slots can be selected.
    pub selectable: bool,

    /// Whether events can be resized from their start as well as their end.
    pub resizable_from_start: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            slot_duration: TimeDelta::minutes(15),
            slot_label_interval: TimeDelta::minutes(60),
            day_max_events: 3,
            all_day_slot: true,
            editable: true,
            selectable: true,
            resizable_from_start: false,
        }
    }
}

impl SurfaceOptions {
    /// Slot length in whole minutes, between one minute and one day.
    pub fn slot_minutes(&self) -> i64 {
        self.slot_duration.num_minutes().clamp(1, MINUTES_PER_DAY)
    }

    fn label_minutes(&self) -> i64 {
        self.slot_label_interval.num_minutes().clamp(1, MINUTES_PER_DAY)
    }
}

/// A renderable grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grid<'a> {
    Month(MonthGrid<'a>),
    Time(TimeGrid<'a>),
    List(ListGrid<'a>),
}

impl Grid<'_> {
    pub fn title(&self) -> &str {
        match self {
            Grid::Month(grid) => &grid.title,
            Grid::Time(grid) => &grid.title,
            Grid::List(grid) => &grid.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid<'a> {
    pub title: String,
    pub headers: Vec<&'static str>,

    /// Rows of visible days.
    pub weeks: Vec<Vec<MonthCell<'a>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell<'a> {
    pub date: NaiveDate,

    /// Whether the date belongs to the month being shown.
    pub in_month: bool,
    pub is_today: bool,

    /// Every event on the day, all-day ones first, then by start.
    pub events: Vec<&'a CalendarEvent>,

    /// How many of `events` do not fit into the cell.
    pub hidden: usize,
}

impl<'a> MonthCell<'a> {
    /// Events drawn in the cell.
    pub fn shown(&self) -> &[&'a CalendarEvent] {
        &self.events[..self.events.len() - self.hidden]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid<'a> {
    pub title: String,
    pub columns: Vec<DayColumn<'a>>,

    /// Start time of every row.
    pub slots: Vec<NaiveTime>,
    pub slot_duration: TimeDelta,
    pub slot_label_interval: TimeDelta,
    pub all_day_slot: bool,

    /// Whether timed events accept a new start when resized.
    pub resizable_from_start: bool,
}

impl TimeGrid<'_> {
    /// Whether the row carries a time label.
    pub fn is_label_slot(&self, index: usize) -> bool {
        let slot = self.slot_duration.num_minutes().max(1);
        let label = self.slot_label_interval.num_minutes().max(1);
        (index as i64 * slot) % label == 0
    }

    /// The time range of a row on a given day.
    pub fn slot_at(&self, date: NaiveDate, index: usize) -> TimeSlot {
        let start = start_of_day(date) + self.slot_duration * index as i32;
        TimeSlot::new(start, start + self.slot_duration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn<'a> {
    pub date: NaiveDate,
    pub label: String,
    pub is_today: bool,
    pub all_day: Vec<&'a CalendarEvent>,
    pub timed: Vec<TimedSegment<'a>>,
}

/// The part of a timed event that falls on one day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedSegment<'a> {
    pub event: &'a CalendarEvent,

    /// First row covered.
    pub first_slot: usize,

    /// Row after the last covered one.
    pub end_slot: usize,

    /// The event started on an earlier day.
    pub continues_before: bool,

    /// The event ends on a later day.
    pub continues_after: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGrid<'a> {
    pub title: String,

    /// Days with at least one event.
    pub days: Vec<ListDay<'a>>,

    /// Localised text for an empty list.
    pub empty_message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDay<'a> {
    pub date: NaiveDate,
    pub label: String,
    pub events: Vec<&'a CalendarEvent>,
}

/// Lays out events for the given view.
///
/// Hidden weekdays get no cell or column. An event starting on one still shows
/// on the shown days it runs into.
pub fn build_grid<'a>(
    view: &ViewState,
    options: &SurfaceOptions,
    events: &'a [CalendarEvent],
    today: NaiveDate,
) -> Grid<'a> {
    let events: Vec<&'a CalendarEvent> = events.iter().collect();

    match view.kind() {
        ViewKind::Month => Grid::Month(build_month(view, options, &events, today)),
        ViewKind::List => Grid::List(build_list(view, &events)),
        ViewKind::Week | ViewKind::Day | ViewKind::Agenda => {
            Grid::Time(build_time(view, options, &events, today))
        }
    }
}

fn on_day<'a>(events: &[&'a CalendarEvent], date: NaiveDate) -> Vec<&'a CalendarEvent> {
    let mut events: Vec<_> = events.iter().copied().filter(|e| e.occurs_on(date)).collect();
    events.sort_by_key(|e| (!e.all_day, e.start));
    events
}

fn build_month<'a>(
    view: &ViewState,
    options: &SurfaceOptions,
    events: &[&'a CalendarEvent],
    today: NaiveDate,
) -> MonthGrid<'a> {
    let convention = view.convention();
    let anchor = view.anchor();
    let days: Vec<NaiveDate> = view.visible_range().days().collect();

    let weeks = days
        .chunks(7)
        .map(|week| {
            week.iter()
                .copied()
                .filter(|date| convention.is_visible(*date))
                .map(|date| {
                    let events = on_day(events, date);
                    MonthCell {
                        date,
                        in_month: date.year() == anchor.year() && date.month() == anchor.month(),
                        is_today: date == today,
                        hidden: events.len().saturating_sub(options.day_max_events),
                        events,
                    }
                })
                .collect()
        })
        .collect();

    MonthGrid {
        title: view.title(),
        headers: convention.headers(),
        weeks,
    }
}

fn build_time<'a>(
    view: &ViewState,
    options: &SurfaceOptions,
    events: &[&'a CalendarEvent],
    today: NaiveDate,
) -> TimeGrid<'a> {
    let convention = view.convention();
    let slot_minutes = options.slot_minutes();
    let slot_duration = TimeDelta::minutes(slot_minutes);
    let slot_count = (MINUTES_PER_DAY + slot_minutes - 1) / slot_minutes;

    let slots = (0..slot_count)
        .map(|i| NaiveTime::MIN + slot_duration * i as i32)
        .collect();

    let columns = view
        .visible_range()
        .days()
        .filter(|date| convention.is_visible(*date))
        .map(|date| {
            let (all_day, timed): (Vec<_>, Vec<_>) =
                on_day(events, date).into_iter().partition(|e| e.all_day);
            DayColumn {
                date,
                label: column_label(convention, date),
                is_today: date == today,
                all_day: if options.all_day_slot {
                    all_day
                } else {
                    Vec::new()
                },
                timed: timed
                    .into_iter()
                    .map(|e| segment(e, date, slot_minutes, slot_count))
                    .collect(),
            }
        })
        .collect();

    TimeGrid {
        title: view.title(),
        columns,
        slots,
        slot_duration,
        slot_label_interval: TimeDelta::minutes(options.label_minutes()),
        all_day_slot: options.all_day_slot,
        resizable_from_start: options.editable && options.resizable_from_start,
    }
}

fn segment(
    event: &CalendarEvent,
    date: NaiveDate,
    slot_minutes: i64,
    slot_count: i64,
) -> TimedSegment<'_> {
    let day_start = start_of_day(date);
    let day_end = day_start + TimeDelta::days(1);
    let start = event.start.max(day_start);
    let end = event.end.min(day_end);

    let first = ((start - day_start).num_minutes() / slot_minutes).clamp(0, slot_count - 1);
    let last = ((end - day_start).num_minutes() + slot_minutes - 1) / slot_minutes;
    let last = last.clamp(first + 1, slot_count);

    TimedSegment {
        event,
        first_slot: first as usize,
        end_slot: last as usize,
        continues_before: event.start < day_start,
        continues_after: event.end > day_end,
    }
}

fn build_list<'a>(view: &ViewState, events: &[&'a CalendarEvent]) -> ListGrid<'a> {
    let convention = view.convention();
    let days = view
        .visible_range()
        .days()
        .filter(|date| convention.is_visible(*date))
        .filter_map(|date| {
            let events = on_day(events, date);
            (!events.is_empty()).then(|| ListDay {
                date,
                label: format!("{}, {}", convention.day_name(date), date.format("%B %-d, %Y")),
                events,
            })
        })
        .collect();

    ListGrid {
        title: view.title(),
        days,
        empty_message: convention.locale.messages().no_events,
    }
}

fn column_label(convention: &WeekConvention, date: NaiveDate) -> String {
    format!(
        "{} {}",
        convention.locale.short_day_name(date.weekday()),
        date.day()
    )
}
