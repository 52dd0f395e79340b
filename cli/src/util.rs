// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use slotcal_core::{CalendarEvent, format_date, format_time, parse_date};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a date given on the command line, relative to `today`.
pub fn parse_date_arg(s: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    match s.trim() {
        "today" => Ok(today),
        "tomorrow" => Ok(today + TimeDelta::days(1)),
        "yesterday" => Ok(today - TimeDelta::days(1)),
        s => parse_date(s).map_err(|e| e.to_string()),
    }
}

/// Formats the time span of an event, collapsing the date when it starts and ends on one day.
pub fn format_time_range(event: &CalendarEvent) -> String {
    if event.all_day {
        let last = (event.end - TimeDelta::nanoseconds(1)).date();
        return match last == event.start.date() {
            true => format_date(event.start.date()),
            false => format!("{}~{}", format_date(event.start.date()), format_date(last)),
        };
    }

    match event.start.date() == event.end.date() {
        true => format!(
            "{} {}~{}",
            format_date(event.start.date()),
            format_time(event.start),
            format_time(event.end)
        ),
        false => format!("{}~{}", format_datetime(event.start), format_datetime(event.end)),
    }
}

pub fn format_datetime(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%d %H:%M").to_string()
}

/// Cuts `s` to at most `width` terminal columns, then pads it with spaces to exactly `width`.
pub fn fit_width(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    let too_wide = s.width() > width;
    let budget = if too_wide { width.saturating_sub(1) } else { width };
    for g in s.graphemes(true) {
        let w = g.width();
        if used + w > budget {
            break;
        }
        out.push_str(g);
        used += w;
    }
    if too_wide && width > 0 {
        out.push('…');
        used += 1;
    }
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// Byte range of the grapheme at `index`, or `None` past the end.
pub fn byte_range_of_grapheme_at(s: &str, index: usize) -> Option<Range<usize>> {
    s.grapheme_indices(true)
        .nth(index)
        .map(|(start, g)| start..start + g.len())
}
