// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use slotcal_core::{EditorForm, EditorMode, EditorVariant, Priority, parse_date, parse_time};

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Choice, Form, Input};
use crate::tui::component_page::{SinglePage, dialog_area, panel_area};
use crate::tui::dispatcher::{Action, Dispatcher};

type S = CalendarStore;

const DIALOG_WIDTH: u16 = 64;
const INSTRUCTIONS: &[(&str, &str)] = &[
    ("Next", "<Tab>"),
    ("Save", "<Enter>"),
    ("Delete", "<C-d>"),
    ("Close", "<Esc>"),
];

/// The entry editor, drawn as a dialog or a bottom panel depending on the display mode.
pub struct EventEditor(SinglePage<S, Form<S>>);

impl EventEditor {
    pub fn new() -> Self {
        Self(SinglePage::new(
            "New Event".to_owned(),
            INSTRUCTIONS,
            new_event_form(),
        ))
    }

    /// Where the editor goes inside the whole screen.
    pub fn frame(store: &RefCell<S>, area: Rect) -> Rect {
        // fields are 3 rows each, plus borders and margin
        let rows = if is_timed(store) { 8 } else { 6 };
        let height = rows * 3 + 4;
        match store.borrow().session.editor_variant() {
            EditorVariant::Dialog => dialog_area(area, DIALOG_WIDTH, height),
            EditorVariant::Panel => panel_area(area, height),
        }
    }
}

impl Component<S> for EventEditor {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, Self::frame(store, area), buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, Self::frame(store, area))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if event.code == KeyCode::Char('d') && event.modifiers.contains(KeyModifiers::CONTROL) {
            dispatcher.dispatch(Action::RequestDelete);
            return Some(Message::Handled);
        }

        let frame = Self::frame(store, area);
        match self.0.on_key(dispatcher, store, frame, event) {
            Some(Message::Exit) => {
                dispatcher.dispatch(Action::CloseEditor);
                Some(Message::Handled)
            }
            msg => msg,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        let title = match store.borrow().session.editor().mode() {
            Some(EditorMode::Edit(_)) => "Edit Event",
            _ => "New Event",
        };
        self.0.set_title(title);
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.0.deactivate(dispatcher, store);
    }
}

fn new_event_form() -> Form<S> {
    Form::new(vec![
        Box::new(new_title()),
        Box::new(new_date()),
        Box::new(new_all_day()),
        Box::new(new_start()),
        Box::new(new_end()),
        Box::new(new_priority()),
        Box::new(new_location()),
        Box::new(new_description()),
    ])
}

fn with_form<T: Default>(store: &RefCell<S>, f: impl FnOnce(&EditorForm) -> T) -> T {
    store
        .borrow()
        .session
        .editor()
        .form()
        .map(f)
        .unwrap_or_default()
}

fn is_timed(store: &RefCell<S>) -> bool {
    !with_form(store, |f| f.all_day)
}

/// Whether `c` fits into a date typed as `YYYY-MM-DD`.
fn date_char(current: &str, c: char) -> bool {
    (c.is_ascii_digit() || c == '-') && current.len() < "YYYY-MM-DD".len()
}

/// Whether `c` fits into a time typed as `HH:MM`.
fn time_char(current: &str, c: char) -> bool {
    (c.is_ascii_digit() || c == ':') && current.len() < "HH:MM".len()
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident) => {
        new_input!($fn, $title, $acc, $field, $action, {});
    };
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident, { $($rules:tt)* }) => {
        fn $fn() -> Input<S, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl Access<S, String> for $acc {
            fn get(store: &RefCell<S>) -> String {
                with_form(store, |f| f.$field.clone())
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }

            $($rules)*
        }
    };
}

new_input!(new_title, "Title", TitleAccess, title, UpdateTitle, {
    fn is_valid(value: &String) -> bool {
        !value.trim().is_empty()
    }
});
new_input!(new_date, "Date (YYYY-MM-DD)", DateAccess, date, UpdateDate, {
    fn accepts(current: &str, c: char) -> bool {
        date_char(current, c)
    }

    fn is_valid(value: &String) -> bool {
        parse_date(value).is_ok()
    }
});
new_input!(new_start, "Start (HH:MM)", StartAccess, start_time, UpdateStartTime, {
    fn shown(store: &RefCell<S>) -> bool {
        is_timed(store)
    }

    fn accepts(current: &str, c: char) -> bool {
        time_char(current, c)
    }

    fn is_valid(value: &String) -> bool {
        parse_time(value).is_ok()
    }
});
new_input!(new_end, "End (HH:MM)", EndAccess, end_time, UpdateEndTime, {
    fn shown(store: &RefCell<S>) -> bool {
        is_timed(store)
    }

    fn accepts(current: &str, c: char) -> bool {
        time_char(current, c)
    }

    fn is_valid(value: &String) -> bool {
        parse_time(value).is_ok()
    }
});
new_input!(new_location, "Location", LocationAccess, location, UpdateLocation);
new_input!(
    new_description,
    "Description",
    DescriptionAccess,
    description,
    UpdateDescription
);

fn new_all_day() -> Choice<S, bool, AllDayAccess> {
    let options = vec![(false, "No".to_string()), (true, "Yes".to_string())];
    Choice::new("All day", options)
}

struct AllDayAccess;

impl Access<S, bool> for AllDayAccess {
    fn get(store: &RefCell<S>) -> bool {
        with_form(store, |f| f.all_day)
    }

    fn set(dispatcher: &mut Dispatcher, value: bool) -> bool {
        dispatcher.dispatch(Action::UpdateAllDay(value));
        true
    }
}

fn new_priority() -> Choice<S, Option<Priority>, PriorityAccess> {
    use Priority::*;
    let options = [None, Some(Low), Some(Medium), Some(High)]
        .into_iter()
        .map(|p| {
            let name = p.map_or("NONE".to_string(), |p| p.to_string().to_uppercase());
            (p, name)
        })
        .collect();
    Choice::new("Priority", options)
}

struct PriorityAccess;

impl Access<S, Option<Priority>> for PriorityAccess {
    fn get(store: &RefCell<S>) -> Option<Priority> {
        with_form(store, |f| f.priority)
    }

    fn set(dispatcher: &mut Dispatcher, value: Option<Priority>) -> bool {
        dispatcher.dispatch(Action::UpdatePriority(value));
        true
    }
}
