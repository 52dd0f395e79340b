// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The interactive calendar grid.
//!
//! The pane keeps an owned copy of the last grid it was given, so keys can be
//! turned into surface events without borrowing the store.

use std::{cell::RefCell, convert::Infallible, mem};

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use slotcal_core::{
    CalendarEvent, CalendarSurface, EventId, Grid, InteractionHandler, Priority, SurfaceEvent,
    TimeSlot, format_time, start_of_day,
};

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::util::fit_width;

const LABEL_WIDTH: u16 = 8;
const WORK_START_HOUR: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    id: EventId,
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    all_day: bool,
    priority: Option<Priority>,

    /// Rows covered in a time grid, as `first..end`.
    rows: Option<(usize, usize)>,
}

impl Entry {
    fn new(event: &CalendarEvent, rows: Option<(usize, usize)>) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            start: event.start,
            end: event.end,
            all_day: event.all_day,
            priority: event.priority,
            rows,
        }
    }

    fn covers(&self, row: usize) -> bool {
        matches!(self.rows, Some((first, end)) if first <= row && row < end)
    }

    fn style(&self) -> Style {
        match self.priority {
            Some(Priority::High) => Style::new().red(),
            Some(Priority::Medium) => Style::new().yellow(),
            _ => Style::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Day {
    date: NaiveDate,
    label: String,
    is_today: bool,
    in_month: bool,
    entries: Vec<Entry>,

    /// Trailing entries folded into "+N more".
    hidden: usize,
}

impl Day {
    fn focusable(&self) -> &[Entry] {
        &self.entries[..self.entries.len() - self.hidden]
    }

    fn style(&self) -> Style {
        match (self.is_today, self.in_month) {
            (true, _) => Style::new().cyan().bold(),
            (false, true) => Style::new(),
            (false, false) => Style::new().dark_gray(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    Empty,
    Month {
        headers: Vec<&'static str>,
        week_len: usize,
    },
    Time {
        slots: Vec<NaiveTime>,
        step: TimeDelta,
        labels: Vec<bool>,
        all_day_slot: bool,
        resizable_from_start: bool,
    },
    List {
        empty_message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    title: String,
    body: Body,
    days: Vec<Day>,
}

impl Snapshot {
    fn empty() -> Self {
        Self {
            title: String::new(),
            body: Body::Empty,
            days: Vec::new(),
        }
    }

    fn from_grid(grid: &Grid<'_>) -> Self {
        match grid {
            Grid::Month(grid) => Self {
                title: grid.title.clone(),
                body: Body::Month {
                    headers: grid.headers.clone(),
                    week_len: grid.weeks.first().map_or(7, Vec::len).max(1),
                },
                days: grid
                    .weeks
                    .iter()
                    .flatten()
                    .map(|cell| Day {
                        date: cell.date,
                        label: cell.date.day().to_string(),
                        is_today: cell.is_today,
                        in_month: cell.in_month,
                        entries: cell.events.iter().map(|e| Entry::new(e, None)).collect(),
                        hidden: cell.hidden,
                    })
                    .collect(),
            },

            Grid::Time(grid) => Self {
                title: grid.title.clone(),
                body: Body::Time {
                    slots: grid.slots.clone(),
                    step: grid.slot_duration,
                    labels: (0..grid.slots.len()).map(|i| grid.is_label_slot(i)).collect(),
                    all_day_slot: grid.all_day_slot,
                    resizable_from_start: grid.resizable_from_start,
                },
                days: grid
                    .columns
                    .iter()
                    .map(|column| {
                        let all_day = column.all_day.iter().map(|e| Entry::new(e, None));
                        let timed = column
                            .timed
                            .iter()
                            .map(|s| Entry::new(s.event, Some((s.first_slot, s.end_slot))));
                        Day {
                            date: column.date,
                            label: column.label.clone(),
                            is_today: column.is_today,
                            in_month: true,
                            entries: all_day.chain(timed).collect(),
                            hidden: 0,
                        }
                    })
                    .collect(),
            },

            Grid::List(grid) => Self {
                title: grid.title.clone(),
                body: Body::List {
                    empty_message: grid.empty_message,
                },
                days: grid
                    .days
                    .iter()
                    .map(|day| Day {
                        date: day.date,
                        label: day.label.clone(),
                        is_today: false,
                        in_month: true,
                        entries: day.events.iter().map(|e| Entry::new(e, None)).collect(),
                        hidden: 0,
                    })
                    .collect(),
            },
        }
    }

    fn rows(&self) -> usize {
        match &self.body {
            Body::Time { slots, .. } => slots.len(),
            _ => 0,
        }
    }

    /// Whether the cursor can stay where it is when this replaces `other`.
    fn same_layout(&self, other: &Snapshot) -> bool {
        self.title == other.title
            && mem::discriminant(&self.body) == mem::discriminant(&other.body)
            && self.rows() == other.rows()
    }

    fn initial_cursor(&self, today: Option<NaiveDate>) -> Cursor {
        let day = self
            .days
            .iter()
            .position(|d| d.is_today)
            .or_else(|| today.and_then(|t| self.days.iter().position(|d| d.date >= t)))
            .unwrap_or(0);
        let row = match &self.body {
            Body::Time { slots, .. } => work_start_row(slots),
            _ => 0,
        };
        Cursor {
            day,
            row,
            focus: None,
        }
    }

    /// Finds the day and rows of an event, preferring `near`.
    fn locate(&self, id: &EventId, near: usize) -> Option<(usize, Option<(usize, usize)>)> {
        let find = |i: usize| {
            self.days
                .get(i)
                .and_then(|d| d.focusable().iter().find(|e| &e.id == id))
                .map(|e| (i, e.rows))
        };
        find(near).or_else(|| (0..self.days.len()).find_map(find))
    }
}

fn work_start_row(slots: &[NaiveTime]) -> usize {
    slots
        .iter()
        .position(|t| t.hour() >= WORK_START_HOUR)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Cursor {
    day: usize,
    row: usize,
    focus: Option<EventId>,
}

enum Change {
    Move(TimeDelta),
    Resize(TimeDelta),
    ResizeStart(TimeDelta),
}

/// A keyboard driven calendar surface.
pub struct CalendarPane {
    snapshot: Snapshot,
    cursor: Cursor,
    handler: Option<InteractionHandler>,
}

impl CalendarPane {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::empty(),
            cursor: Cursor::default(),
            handler: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.snapshot.title
    }

    fn emit(&self, event: SurfaceEvent) {
        match &self.handler {
            Some(handler) => (handler.borrow_mut())(event),
            None => tracing::debug!(?event, "no interaction handler bound"),
        }
    }

    fn settle_cursor(&mut self) {
        if let Some(id) = self.cursor.focus.clone() {
            match self.snapshot.locate(&id, self.cursor.day) {
                Some((day, rows)) => {
                    self.cursor.day = day;
                    if let Some((first, _)) = rows {
                        self.cursor.row = first;
                    }
                }
                None => self.cursor.focus = None,
            }
        }

        self.cursor.day = self.cursor.day.min(self.snapshot.days.len().saturating_sub(1));
        self.cursor.row = self.cursor.row.min(self.snapshot.rows().saturating_sub(1));
    }

    fn move_day(&mut self, offset: isize) {
        let len = self.snapshot.days.len();
        if len == 0 {
            return;
        }
        let day = self.cursor.day.saturating_add_signed(offset).min(len - 1);
        if day != self.cursor.day {
            self.cursor.day = day;
            self.cursor.focus = None;
        }
    }

    fn move_vertical(&mut self, offset: isize) {
        match &self.snapshot.body {
            Body::Empty => {}
            Body::Month { week_len, .. } => self.move_day(offset * *week_len as isize),
            Body::List { .. } => self.move_day(offset),
            Body::Time { slots, .. } => {
                let last = slots.len().saturating_sub(1);
                self.cursor.row = self.cursor.row.saturating_add_signed(offset).min(last);
                self.cursor.focus = None;
            }
        }
    }

    fn cycle_focus(&mut self) {
        let Some(day) = self.snapshot.days.get(self.cursor.day) else {
            return;
        };
        let entries = day.focusable();
        let next = match &self.cursor.focus {
            None => entries.first(),
            Some(id) => entries
                .iter()
                .position(|e| &e.id == id)
                .and_then(|i| entries.get(i + 1)),
        };

        if let Some((first, _)) = next.and_then(|e| e.rows) {
            self.cursor.row = first;
        }
        self.cursor.focus = next.map(|e| e.id.clone());
    }

    fn focused_entry(&self) -> Option<&Entry> {
        let id = self.cursor.focus.as_ref()?;
        let day = self.snapshot.days.get(self.cursor.day)?;
        day.entries.iter().find(|e| &e.id == id)
    }

    fn select(&self) {
        if let Some(id) = &self.cursor.focus {
            self.emit(SurfaceEvent::ClickEvent(id.clone()));
            return;
        }

        let Some(day) = self.snapshot.days.get(self.cursor.day) else {
            return;
        };
        let slot = match &self.snapshot.body {
            Body::Time { step, .. } => {
                let start = start_of_day(day.date) + *step * self.cursor.row as i32;
                TimeSlot::new(start, start + *step)
            }
            _ => TimeSlot::whole_day(day.date),
        };
        self.emit(SurfaceEvent::SelectSlot(slot));
    }

    /// One step of a move or resize: a slot for timed events in a time grid, a day otherwise.
    fn step_of(&self, entry: &Entry, vertical: bool) -> TimeDelta {
        match &self.snapshot.body {
            Body::Time { step, .. } if vertical && !entry.all_day => *step,
            Body::Month { .. } if vertical => TimeDelta::weeks(1),
            _ => TimeDelta::days(1),
        }
    }

    /// Moves the start of the focused timed event, when the grid allows it.
    fn resize_start(&self, slots: i32) {
        let Body::Time {
            step,
            resizable_from_start: true,
            ..
        } = &self.snapshot.body
        else {
            return;
        };
        match self.focused_entry() {
            Some(entry) if !entry.all_day => {
                self.change_focused(|_| Change::ResizeStart(*step * slots))
            }
            _ => {}
        }
    }

    fn change_focused(&self, change: impl FnOnce(&Entry) -> Change) {
        let Some(entry) = self.focused_entry() else {
            return;
        };
        let id = entry.id.clone();
        let event = match change(entry) {
            Change::Move(delta) => SurfaceEvent::DropEvent {
                id,
                start: entry.start + delta,
                end: entry.end + delta,
            },
            Change::Resize(delta) => SurfaceEvent::ResizeEvent {
                id,
                start: entry.start,
                end: entry.end + delta,
            },
            Change::ResizeStart(delta) => SurfaceEvent::ResizeEvent {
                id,
                start: entry.start + delta,
                end: entry.end,
            },
        };
        self.emit(event);
    }

    fn render_month(&self, headers: &[&str], week_len: usize, area: Rect, buf: &mut Buffer) {
        let col_width = area.width / week_len as u16;
        if col_width < 2 || area.height < 2 {
            return;
        }
        let width = (col_width - 1) as usize;

        for (i, header) in headers.iter().enumerate() {
            let x = area.x + i as u16 * col_width;
            buf.set_string(x, area.y, fit_width(header, width), Style::new().bold());
        }

        let weeks = self.snapshot.days.len().div_ceil(week_len).max(1);
        let row_height = ((area.height - 1) / weeks as u16).max(1);
        for (i, day) in self.snapshot.days.iter().enumerate() {
            let x = area.x + (i % week_len) as u16 * col_width;
            let y = area.y + 1 + (i / week_len) as u16 * row_height;
            if y >= area.bottom() {
                break;
            }

            let mut style = day.style();
            if i == self.cursor.day && self.cursor.focus.is_none() {
                style = style.reversed();
            }
            buf.set_string(x, y, fit_width(&format!("{:>2}", day.label), width), style);

            let lines = (row_height as usize - 1).min((area.bottom() - y - 1) as usize);
            let total = day.entries.len();
            let mut printed = (total - day.hidden).min(lines);
            if printed < total && printed == lines {
                printed = printed.saturating_sub(1);
            }
            for (j, entry) in day.entries[..printed].iter().enumerate() {
                let style = self.entry_style(i, entry);
                buf.set_string(x, y + 1 + j as u16, fit_width(&entry.title, width), style);
            }
            if printed < total && lines > 0 {
                let more = format!("+{} more", total - printed);
                buf.set_string(x, y + 1 + printed as u16, fit_width(&more, width), Style::new());
            }
        }
    }

    fn render_time(&self, body: &Body, area: Rect, buf: &mut Buffer) {
        let Body::Time {
            slots,
            labels,
            all_day_slot,
            ..
        } = body
        else {
            return;
        };
        let days = &self.snapshot.days;
        let col_width = area.width.saturating_sub(LABEL_WIDTH) / days.len().max(1) as u16;
        if col_width < 2 || area.height < 2 {
            return;
        }
        let width = (col_width - 1) as usize;
        let x_of = |i: usize| area.x + LABEL_WIDTH + i as u16 * col_width;

        for (i, day) in days.iter().enumerate() {
            let mut style = day.style().bold();
            if i == self.cursor.day {
                style = style.underlined();
            }
            buf.set_string(x_of(i), area.y, fit_width(&day.label, width), style);
        }

        let mut y = area.y + 1;
        if *all_day_slot {
            let depth = days
                .iter()
                .map(|d| d.entries.iter().filter(|e| e.rows.is_none()).count())
                .max()
                .unwrap_or(0)
                .max(1);
            for k in 0..depth {
                if y >= area.bottom() {
                    return;
                }
                if k == 0 {
                    buf.set_string(area.x, y, "all-day", Style::new().dark_gray());
                }
                for (i, day) in days.iter().enumerate() {
                    if let Some(entry) = day.entries.iter().filter(|e| e.rows.is_none()).nth(k) {
                        let style = self.entry_style(i, entry);
                        buf.set_string(x_of(i), y, fit_width(&entry.title, width), style);
                    }
                }
                y += 1;
            }
        }

        let visible = area.bottom().saturating_sub(y) as usize;
        let top = scroll_top(self.cursor.row, work_start_row(slots), visible, slots.len());
        for (offset, row) in (top..slots.len()).take(visible).enumerate() {
            let y = y + offset as u16;
            if labels.get(row).copied().unwrap_or(false) {
                let label = slots[row].format("%H:%M").to_string();
                buf.set_string(area.x, y, label, Style::new().dark_gray());
            }

            for (i, day) in days.iter().enumerate() {
                let covering: Vec<_> = day.entries.iter().filter(|e| e.covers(row)).collect();
                let (text, mut style) = match covering.as_slice() {
                    [] => (String::new(), Style::new()),
                    [entry, rest @ ..] => {
                        let starts = entry.rows.is_some_and(|(first, _)| first == row) || row == top;
                        let text = if starts { entry.title.clone() } else { "┆".to_string() };
                        let text = match rest.len() {
                            0 => text,
                            n => format!("{text} +{n}"),
                        };
                        let focused = covering
                            .iter()
                            .find(|e| self.is_focused(i, e))
                            .copied()
                            .unwrap_or(*entry);
                        (text, self.entry_style(i, focused))
                    }
                };
                if i == self.cursor.day && row == self.cursor.row && self.cursor.focus.is_none() {
                    style = style.reversed();
                }
                buf.set_string(x_of(i), y, fit_width(&text, width), style);
            }
        }
    }

    fn render_list(&self, empty_message: &str, area: Rect, buf: &mut Buffer) {
        if self.snapshot.days.is_empty() {
            Paragraph::new(empty_message)
                .centered()
                .dark_gray()
                .render(area, buf);
            return;
        }

        let mut lines = Vec::new();
        let mut cursor_line = 0;
        for (i, day) in self.snapshot.days.iter().enumerate() {
            let mut style = day.style().bold();
            if i == self.cursor.day {
                cursor_line = lines.len();
                if self.cursor.focus.is_none() {
                    style = style.reversed();
                }
            }
            lines.push((day.label.clone(), style));

            for entry in &day.entries {
                if self.is_focused(i, entry) {
                    cursor_line = lines.len();
                }
                let when = match entry.all_day {
                    true => "all-day".to_string(),
                    false => format!("{}~{}", format_time(entry.start), format_time(entry.end)),
                };
                let text = format!("  {}  {}", fit_width(&when, 11), entry.title);
                lines.push((text, self.entry_style(i, entry)));
            }
        }

        let visible = area.height as usize;
        let top = (cursor_line + 1).saturating_sub(visible);
        for (offset, (text, style)) in lines.iter().skip(top).take(visible).enumerate() {
            let y = area.y + offset as u16;
            buf.set_string(area.x, y, fit_width(text, area.width as usize), *style);
        }
    }

    fn is_focused(&self, day: usize, entry: &Entry) -> bool {
        day == self.cursor.day && self.cursor.focus.as_ref() == Some(&entry.id)
    }

    fn entry_style(&self, day: usize, entry: &Entry) -> Style {
        match self.is_focused(day, entry) {
            true => entry.style().reversed(),
            false => entry.style(),
        }
    }
}

/// First visible row: work hours by default, scrolled to keep the cursor in view.
fn scroll_top(cursor: usize, preferred: usize, visible: usize, rows: usize) -> usize {
    let top = if cursor < preferred {
        cursor
    } else if visible > 0 && cursor >= preferred + visible {
        cursor + 1 - visible
    } else {
        preferred
    };
    top.min(rows.saturating_sub(visible))
}

impl CalendarSurface for CalendarPane {
    type Error = Infallible;

    fn render_grid(&mut self, grid: &Grid<'_>) -> Result<(), Infallible> {
        let snapshot = Snapshot::from_grid(grid);
        let keep = snapshot.same_layout(&self.snapshot);
        let today = self.snapshot.days.iter().find(|d| d.is_today).map(|d| d.date);
        self.snapshot = snapshot;

        match keep {
            true => self.settle_cursor(),
            false => self.cursor = self.snapshot.initial_cursor(today),
        }
        Ok(())
    }

    fn bind_interaction_handlers(&mut self, handler: InteractionHandler) {
        self.handler = Some(handler);
    }
}

impl Component<CalendarStore> for CalendarPane {
    fn render(&self, _store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        match &self.snapshot.body {
            Body::Empty => {}
            Body::Month { headers, week_len } => self.render_month(headers, *week_len, area, buf),
            body @ Body::Time { .. } => self.render_time(body, area, buf),
            Body::List { empty_message } => self.render_list(empty_message, area, buf),
        }
    }

    fn on_key(
        &mut self,
        _dispatcher: &mut Dispatcher,
        _store: &RefCell<CalendarStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        if self.snapshot.body == Body::Empty {
            return None;
        }

        let shift = event.modifiers.contains(KeyModifiers::SHIFT);
        match event.code {
            Left if shift => self.change_focused(|_| Change::Move(TimeDelta::days(-1))),
            Right if shift => self.change_focused(|_| Change::Move(TimeDelta::days(1))),
            Up if shift => self.change_focused(|e| Change::Move(-self.step_of(e, true))),
            Down if shift => self.change_focused(|e| Change::Move(self.step_of(e, true))),
            Char('H') => self.change_focused(|_| Change::Move(TimeDelta::days(-1))),
            Char('L') => self.change_focused(|_| Change::Move(TimeDelta::days(1))),
            Char('K') => self.change_focused(|e| Change::Move(-self.step_of(e, true))),
            Char('J') => self.change_focused(|e| Change::Move(self.step_of(e, true))),
            Char('+') | Char('=') => self.change_focused(|e| Change::Resize(self.step_of(e, true))),
            Char('-') => self.change_focused(|e| Change::Resize(-self.step_of(e, true))),
            Char('<') => self.resize_start(-1),
            Char('>') => self.resize_start(1),

            Left | Char('h') => self.move_day(-1),
            Right | Char('l') => self.move_day(1),
            Up | Char('k') => self.move_vertical(-1),
            Down | Char('j') => self.move_vertical(1),
            Tab => self.cycle_focus(),
            Esc if self.cursor.focus.is_some() => self.cursor.focus = None,
            Enter => self.select(),
            _ => return None,
        }
        Some(Message::Handled)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use slotcal_core::{EditorMode, Preset, ViewKind};

    use super::*;
    use crate::tui::calendar_store::tests::{at, test_store};

    fn setup(preset: Preset) -> (Rc<RefCell<CalendarStore>>, Dispatcher, CalendarPane) {
        let store = test_store(preset);
        let dispatcher = Dispatcher::new();
        let mut pane = CalendarPane::new();
        pane.bind_interaction_handlers(CalendarStore::interaction_handler(store.clone()));
        refresh(&mut pane, &store);
        (store, dispatcher, pane)
    }

    fn refresh(pane: &mut CalendarPane, store: &RefCell<CalendarStore>) {
        let store = store.borrow();
        pane.render_grid(&store.session.grid()).unwrap();
    }

    fn press(
        pane: &mut CalendarPane,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        code: KeyCode,
    ) -> Option<Message> {
        let area = Rect::new(0, 0, 140, 40);
        let msg = pane.on_key(dispatcher, store, area, KeyEvent::new(code, KeyModifiers::NONE));
        refresh(pane, store);
        msg
    }

    fn draw(pane: &CalendarPane, store: &RefCell<CalendarStore>) -> String {
        let area = Rect::new(0, 0, 140, 40);
        let mut buf = Buffer::empty(area);
        pane.render(store, area, &mut buf);
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_select_empty_slot() {
        let (store, mut dispatcher, mut pane) = setup(Preset::Planner);

        for _ in 0..4 {
            press(&mut pane, &mut dispatcher, &store, KeyCode::Down);
        }
        let msg = press(&mut pane, &mut dispatcher, &store, KeyCode::Enter);

        assert_eq!(msg, Some(Message::Handled));
        let store = store.borrow();
        let editor = store.session.editor();
        assert_eq!(editor.mode(), Some(&EditorMode::Create));
        let form = editor.form().unwrap();
        assert_eq!(form.date, "2024-06-17");
        assert_eq!(form.start_time, "09:00");
        assert_eq!(form.end_time, "09:15");
    }

    #[test]
    fn test_focus_and_open_event() {
        let (store, mut dispatcher, mut pane) = setup(Preset::Planner);

        press(&mut pane, &mut dispatcher, &store, KeyCode::Tab);
        assert_eq!(pane.cursor.focus.as_ref(), Some(&EventId::from("1")));
        press(&mut pane, &mut dispatcher, &store, KeyCode::Enter);

        let store = store.borrow();
        let editor = store.session.editor();
        assert_eq!(editor.mode(), Some(&EditorMode::Edit(EventId::from("1"))));
        assert_eq!(editor.form().unwrap().title, "Team Meeting");
    }

    #[test]
    fn test_move_and_resize_focused_event() {
        let (store, mut dispatcher, mut pane) = setup(Preset::Planner);

        press(&mut pane, &mut dispatcher, &store, KeyCode::Tab);
        press(&mut pane, &mut dispatcher, &store, KeyCode::Char('J'));
        press(&mut pane, &mut dispatcher, &store, KeyCode::Char('L'));
        press(&mut pane, &mut dispatcher, &store, KeyCode::Char('+'));

        {
            let store = store.borrow();
            let event = store.session.store().get(&EventId::from("1")).unwrap();
            assert_eq!(event.start, at(18, 10, 15));
            assert_eq!(event.end, at(18, 12, 0));
        }
        assert_eq!(pane.cursor.focus.as_ref(), Some(&EventId::from("1")));
        assert_eq!(pane.cursor.day, 2);
    }

    #[test]
    fn test_resize_focused_event_from_start() {
        let (store, mut dispatcher, mut pane) = setup(Preset::Planner);

        press(&mut pane, &mut dispatcher, &store, KeyCode::Tab);
        press(&mut pane, &mut dispatcher, &store, KeyCode::Char('<'));
        press(&mut pane, &mut dispatcher, &store, KeyCode::Char('<'));
        press(&mut pane, &mut dispatcher, &store, KeyCode::Char('>'));

        let store = store.borrow();
        let event = store.session.store().get(&EventId::from("1")).unwrap();
        assert_eq!(event.start, at(17, 9, 45));
        assert_eq!(event.end, at(17, 11, 30));
    }

    #[test]
    fn test_resize_from_start_needs_option() {
        let (store, mut dispatcher, mut pane) = setup(Preset::Agenda);
        store
            .borrow_mut()
            .session
            .change_view(ViewKind::Day)
            .unwrap();
        refresh(&mut pane, &store);

        press(&mut pane, &mut dispatcher, &store, KeyCode::Tab);
        assert_eq!(pane.cursor.focus.as_ref(), Some(&EventId::from("1")));
        press(&mut pane, &mut dispatcher, &store, KeyCode::Char('<'));

        let store = store.borrow();
        let event = store.session.store().get(&EventId::from("1")).unwrap();
        assert_eq!(event.start, at(18, 9, 0));
    }

    #[test]
    fn test_move_ignored_when_not_editable() {
        let (store, mut dispatcher, mut pane) = setup(Preset::Persian);

        press(&mut pane, &mut dispatcher, &store, KeyCode::Left);
        press(&mut pane, &mut dispatcher, &store, KeyCode::Left);
        press(&mut pane, &mut dispatcher, &store, KeyCode::Tab);
        assert_eq!(pane.cursor.focus.as_ref(), Some(&EventId::from("1")));
        press(&mut pane, &mut dispatcher, &store, KeyCode::Char('J'));

        let store = store.borrow();
        let event = store.session.store().get(&EventId::from("1")).unwrap();
        assert_eq!(event.start, at(15, 10, 0));
    }

    #[test]
    fn test_render_week() {
        let (store, _dispatcher, pane) = setup(Preset::Planner);
        let text = draw(&pane, &store);

        assert!(text.contains("Mon 17"));
        assert!(text.contains("all-day"));
        assert!(text.contains("08:00"));
        assert!(text.contains("Team Meeting"));
    }

    #[test]
    fn test_render_month() {
        let (store, _dispatcher, mut pane) = setup(Preset::Planner);
        store
            .borrow_mut()
            .session
            .change_view(ViewKind::Month)
            .unwrap();
        refresh(&mut pane, &store);
        let text = draw(&pane, &store);

        assert_eq!(pane.title(), "June 2024");
        assert!(text.contains("Sun"));
        assert!(text.contains("Project Workshop"));
    }

    #[test]
    fn test_render_empty_list() {
        let (store, _dispatcher, mut pane) = setup(Preset::Planner);
        {
            let mut store = store.borrow_mut();
            store.session.change_view(ViewKind::List).unwrap();
            store
                .session
                .go_to(NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
        }
        refresh(&mut pane, &store);

        assert!(draw(&pane, &store).contains("No events to display"));
    }

    #[test]
    fn test_scroll_top() {
        assert_eq!(scroll_top(40, 32, 20, 96), 32);
        assert_eq!(scroll_top(10, 32, 20, 96), 10);
        assert_eq!(scroll_top(60, 32, 20, 96), 41);
        assert_eq!(scroll_top(95, 90, 20, 96), 76);
    }
}
