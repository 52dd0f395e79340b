// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

/// Language of the labels drawn on the calendar surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Locale {
    /// English.
    #[default]
    En,

    /// Persian.
    Fa,
}

/// Localised surface labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub next: &'static str,
    pub previous: &'static str,
    pub today: &'static str,
    pub month: &'static str,
    pub week: &'static str,
    pub day: &'static str,
    pub agenda: &'static str,
    pub list: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub event: &'static str,
    pub no_events: &'static str,
}

const MESSAGES_EN: Messages = Messages {
    next: "Next",
    previous: "Back",
    today: "Today",
    month: "Month",
    week: "Week",
    day: "Day",
    agenda: "Agenda",
    list: "List",
    date: "Date",
    time: "Time",
    event: "Event",
    no_events: "No events to display",
};

const MESSAGES_FA: Messages = Messages {
    next: "بعدی",
    previous: "قبلی",
    today: "امروز",
    month: "ماه",
    week: "هفته",
    day: "روز",
    agenda: "دستور کار",
    list: "فهرست",
    date: "تاریخ",
    time: "زمان",
    event: "رویداد",
    no_events: "رویدادی برای نمایش نیست",
};

impl Locale {
    /// Labels for this locale.
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &MESSAGES_EN,
            Locale::Fa => &MESSAGES_FA,
        }
    }

    /// Full name of a weekday.
    pub fn day_name(self, day: Weekday) -> &'static str {
        use Weekday::*;
        match (self, day) {
            (Locale::En, Mon) => "Monday",
            (Locale::En, Tue) => "Tuesday",
            (Locale::En, Wed) => "Wednesday",
            (Locale::En, Thu) => "Thursday",
            (Locale::En, Fri) => "Friday",
            (Locale::En, Sat) => "Saturday",
            (Locale::En, Sun) => "Sunday",
            (Locale::Fa, Sat) => "شنبه",
            (Locale::Fa, Sun) => "یکشنبه",
            (Locale::Fa, Mon) => "دوشنبه",
            (Locale::Fa, Tue) => "سه‌شنبه",
            (Locale::Fa, Wed) => "چهارشنبه",
            (Locale::Fa, Thu) => "پنج‌شنبه",
            (Locale::Fa, Fri) => "جمعه",
        }
    }

    /// Column header for a weekday.
    pub fn short_day_name(self, day: Weekday) -> &'static str {
        match self {
            Locale::En => {
                let name = self.day_name(day);
                &name[..3]
            }
            Locale::Fa => self.day_name(day),
        }
    }
}

/// Which day a week starts on, how many days of it are shown, and in which language.
///
/// Days are indexed from the first day of the week; only indices below
/// `visible_days` are shown, together with the events that start on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekConvention {
    pub first_day: Weekday,
    pub visible_days: u8,
    pub locale: Locale,
}

impl Default for WeekConvention {
    fn default() -> Self {
        Self::sunday_first()
    }
}

impl WeekConvention {
    /// Creates a convention.
    pub const fn new(first_day: Weekday, visible_days: u8, locale: Locale) -> Self {
        Self {
            first_day,
            visible_days,
            locale,
        }
    }

    /// Seven-day English week starting on Sunday.
    pub const fn sunday_first() -> Self {
        Self::new(Weekday::Sun, 7, Locale::En)
    }

    /// Persian working week: starts on Saturday, Thursday and Friday hidden.
    pub const fn persian() -> Self {
        Self::new(Weekday::Sat, 5, Locale::Fa)
    }

    /// Position of the date within its week, `0` being the first day.
    pub fn day_index(&self, date: NaiveDate) -> u8 {
        let first = self.first_day.num_days_from_sunday();
        let day = date.weekday().num_days_from_sunday();
        ((day + 7 - first) % 7) as u8
    }

    /// Whether the date's weekday is shown.
    pub fn is_visible(&self, date: NaiveDate) -> bool {
        self.day_index(date) < self.visible_days
    }

    /// First day of the week containing the date.
    pub fn week_start(&self, date: NaiveDate) -> NaiveDate {
        date - TimeDelta::days(self.day_index(date).into())
    }

    /// Visible weekdays in display order.
    pub fn visible_weekdays(&self) -> Vec<Weekday> {
        let mut day = self.first_day;
        let mut days = Vec::with_capacity(self.visible_days.into());
        for _ in 0..self.visible_days.min(7) {
            days.push(day);
            day = day.succ();
        }
        days
    }

    /// Column headers for the visible weekdays.
    pub fn headers(&self) -> Vec<&'static str> {
        self.visible_weekdays()
            .into_iter()
            .map(|d| self.locale.short_day_name(d))
            .collect()
    }

    /// Full name of the date's weekday in this locale.
    pub fn day_name(&self, date: NaiveDate) -> &'static str {
        self.locale.day_name(date.weekday())
    }
}
