// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Plain text rendering of calendar grids, for piping and quick looks.

use std::io;

use chrono::{Datelike, NaiveTime};
use slotcal_core::{
    CalendarSurface, DayColumn, Grid, InteractionHandler, ListGrid, MonthGrid, TimeGrid,
    format_time,
};

use crate::util::fit_width;

const DEFAULT_COLUMN_WIDTH: usize = 14;
const LABEL_WIDTH: usize = 7;
const WORK_START_HOUR: u32 = 8;
const WORK_END_HOUR: u32 = 18;

/// A read-only surface that writes grids as text.
#[derive(Debug)]
pub struct TextSurface<W: io::Write> {
    out: W,
    column_width: usize,
}

impl<W: io::Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }

    pub fn with_column_width(mut self, width: usize) -> Self {
        self.column_width = width.max(3);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_month(&mut self, grid: &MonthGrid<'_>) -> io::Result<()> {
        let width = self.column_width;
        let headers: Vec<_> = grid.headers.iter().map(|h| fit_width(h, width)).collect();
        writeln!(self.out, "{}", headers.join(" ").trim_end())?;

        for week in &grid.weeks {
            let days: Vec<_> = week
                .iter()
                .map(|cell| {
                    let mark = match (cell.is_today, cell.in_month) {
                        (true, _) => "*",
                        (false, true) => " ",
                        (false, false) => "·",
                    };
                    fit_width(&format!("{mark}{:>2}", cell.date.day()), width)
                })
                .collect();
            writeln!(self.out, "{}", days.join(" ").trim_end())?;

            let lines = week.iter().map(|c| c.shown().len()).max().unwrap_or(0);
            for i in 0..lines {
                let row: Vec<_> = week
                    .iter()
                    .map(|c| match c.shown().get(i) {
                        Some(e) => fit_width(&e.title, width),
                        None => fit_width("", width),
                    })
                    .collect();
                writeln!(self.out, "{}", row.join(" ").trim_end())?;
            }

            if week.iter().any(|c| c.hidden > 0) {
                let row: Vec<_> = week
                    .iter()
                    .map(|c| match c.hidden {
                        0 => fit_width("", width),
                        n => fit_width(&format!("+{n} more"), width),
                    })
                    .collect();
                writeln!(self.out, "{}", row.join(" ").trim_end())?;
            }
        }
        Ok(())
    }

    fn write_time(&mut self, grid: &TimeGrid<'_>) -> io::Result<()> {
        let width = self.column_width;
        let labels: Vec<_> = grid
            .columns
            .iter()
            .map(|c| {
                let label = if c.is_today { format!("*{}", c.label) } else { c.label.clone() };
                fit_width(&label, width)
            })
            .collect();
        writeln!(self.out, "{} │{}", fit_width("", LABEL_WIDTH), labels.join("│"))?;

        if grid.all_day_slot {
            let depth = grid.columns.iter().map(|c| c.all_day.len()).max().unwrap_or(0);
            for i in 0..depth.max(1) {
                let row: Vec<_> = grid
                    .columns
                    .iter()
                    .map(|c| match c.all_day.get(i) {
                        Some(e) => fit_width(&e.title, width),
                        None => fit_width("", width),
                    })
                    .collect();
                let label = if i == 0 { "all-day" } else { "" };
                writeln!(self.out, "{} │{}", fit_width(label, LABEL_WIDTH), row.join("│"))?;
            }
        }

        let (lo, hi) = visible_rows(grid);
        for i in lo..hi {
            let label = match grid.is_label_slot(i) {
                true => grid.slots[i].format("%H:%M").to_string(),
                false => String::new(),
            };
            let row: Vec<_> = grid
                .columns
                .iter()
                .map(|c| fit_width(&slot_text(c, i, lo), width))
                .collect();
            writeln!(self.out, "{} │{}", fit_width(&label, LABEL_WIDTH), row.join("│"))?;
        }
        Ok(())
    }

    fn write_list(&mut self, grid: &ListGrid<'_>) -> io::Result<()> {
        if grid.days.is_empty() {
            return writeln!(self.out, "{}", grid.empty_message);
        }

        for day in &grid.days {
            writeln!(self.out, "{}", day.label)?;
            for e in &day.events {
                let when = match e.all_day {
                    true => "all-day".to_string(),
                    false => format!("{}~{}", format_time(e.start), format_time(e.end)),
                };
                writeln!(self.out, "  {}  {}", fit_width(&when, 11), e.title)?;
            }
        }
        Ok(())
    }
}

impl<W: io::Write> CalendarSurface for TextSurface<W> {
    type Error = io::Error;

    fn render_grid(&mut self, grid: &Grid<'_>) -> io::Result<()> {
        writeln!(self.out, "{}", grid.title())?;
        match grid {
            Grid::Month(grid) => self.write_month(grid),
            Grid::Time(grid) => self.write_time(grid),
            Grid::List(grid) => self.write_list(grid),
        }
    }

    fn bind_interaction_handlers(&mut self, _handler: InteractionHandler) {
        tracing::debug!("text surface is read-only, ignoring interaction handler");
    }
}

/// Rows worth printing: working hours, stretched to cover every event.
fn visible_rows(grid: &TimeGrid<'_>) -> (usize, usize) {
    let row_of = |hour: u32| {
        grid.slots
            .iter()
            .position(|t| Some(*t) >= NaiveTime::from_hms_opt(hour, 0, 0))
            .unwrap_or(grid.slots.len())
    };

    let segments = grid.columns.iter().flat_map(|c| c.timed.iter());
    let lo = segments
        .clone()
        .map(|s| s.first_slot)
        .min()
        .map_or(row_of(WORK_START_HOUR), |first| first.min(row_of(WORK_START_HOUR)));
    let hi = segments
        .map(|s| s.end_slot)
        .max()
        .map_or(row_of(WORK_END_HOUR), |end| end.max(row_of(WORK_END_HOUR)));
    (lo, hi.min(grid.slots.len()))
}

fn slot_text(column: &DayColumn<'_>, row: usize, first_row: usize) -> String {
    let covering = column
        .timed
        .iter()
        .filter(|s| s.first_slot <= row && row < s.end_slot)
        .collect::<Vec<_>>();

    match covering.as_slice() {
        [] => String::new(),
        [s, rest @ ..] => {
            let starts_here = s.first_slot == row || row == first_row;
            let text = match starts_here {
                true => s.event.title.clone(),
                false => "┆".to_string(),
            };
            match rest.len() {
                0 => text,
                n => format!("{text} +{n}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use slotcal_core::{Config, Preset, Session, ViewKind};

    use super::*;

    fn session(preset: Preset) -> Session {
        let now = NaiveDateTime::parse_from_str("2024-06-17 08:00", "%Y-%m-%d %H:%M").unwrap();
        Session::new(&Config::with_preset(preset), now).unwrap()
    }

    fn render(session: &Session) -> String {
        let mut surface = TextSurface::new(Vec::new());
        surface.render_grid(&session.grid()).unwrap();
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_render_week() {
        let session = session(Preset::Planner);
        let out = render(&session);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines[0], session.grid().title());
        assert!(lines[1].contains("*Mon 17"));
        assert!(out.contains("Team Meeting"));
        assert!(out.contains("Project Works…"));
        assert!(lines.iter().any(|l| l.starts_with("08:00")));
        assert!(lines.iter().any(|l| l.starts_with("17:00")));
    }

    #[test]
    fn test_render_week_continuation() {
        let session = session(Preset::Planner);
        let out = render(&session);
        let row = out.lines().find(|l| l.starts_with("11:00")).unwrap();
        assert!(row.contains('┆'));
    }

    #[test]
    fn test_render_month() {
        let mut session = session(Preset::Planner);
        session.change_view(ViewKind::Month).unwrap();
        let out = render(&session);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines[0], "June 2024");
        assert!(lines[1].starts_with("Sun"));
        assert!(out.contains("*17"));
        assert!(out.contains("Team Meeting"));
    }

    #[test]
    fn test_render_persian_month() {
        let mut session = session(Preset::Persian);
        session.go_to(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let out = render(&session);
        let header = out.lines().nth(1).unwrap();

        assert!(header.starts_with("شنبه"));
        assert!(!header.contains("جمعه"));
        assert!(out.contains("جلسه تیم"));
    }

    #[test]
    fn test_render_empty_list() {
        let mut session = session(Preset::Planner);
        session.change_view(ViewKind::List).unwrap();
        session.go_to(NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
        let out = render(&session);
        assert!(out.ends_with("No events to display\n"));
    }

    #[test]
    fn test_render_list() {
        let mut session = session(Preset::Planner);
        session.change_view(ViewKind::List).unwrap();
        let out = render(&session);
        assert!(out.contains("Monday, June 17, 2024\n  10:00~11:30  Team Meeting\n"));
    }
}
