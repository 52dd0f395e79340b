// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::CalendarError;

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Midnight at the start of the given day.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Parses a `HH:MM` time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime, CalendarError> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| CalendarError::InvalidTime(s.to_owned()))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(s.to_owned()))
}

/// Formats the time of day as `HH:MM`.
pub fn format_time(dt: NaiveDateTime) -> String {
    dt.format(TIME_FORMAT).to_string()
}

/// Formats the date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A half-open range of days, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day in the range.
    pub start: NaiveDate,

    /// First day after the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `days` days from `start`, cut short at the
    /// last representable date.
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self {
            start,
            end: start
                .checked_add_days(Days::new(days.into()))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Number of days in the range.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether the date falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Iterates over every day of the range.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d < end)
    }

    /// Start of the range as a date-time.
    pub fn start_datetime(&self) -> NaiveDateTime {
        start_of_day(self.start)
    }

    /// End of the range as a date-time.
    pub fn end_datetime(&self) -> NaiveDateTime {
        start_of_day(self.end)
    }
}
