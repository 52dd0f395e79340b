// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::{SinglePage, dialog_area};
use crate::tui::dispatcher::{Action, Dispatcher};

const WIDTH: u16 = 48;
const HEIGHT: u16 = 6;

/// Asks before an event is deleted.
pub struct ConfirmDelete(SinglePage<CalendarStore, Prompt>);

impl ConfirmDelete {
    pub fn new() -> Self {
        Self(SinglePage::new(
            "Delete Event".to_owned(),
            &[("Yes", "<y>"), ("No", "<n>")],
            Prompt,
        ))
    }
}

impl Component<CalendarStore> for ConfirmDelete {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, dialog_area(area, WIDTH, HEIGHT), buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<CalendarStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let action = match event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmDelete,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::CancelDelete,
            _ => return Some(Message::Handled), // modal, swallow everything else
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}

pub struct Prompt;

impl Component<CalendarStore> for Prompt {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let prompt = match store.borrow().session.pending_delete() {
            Some(request) => request.prompt(),
            None => return,
        };
        Paragraph::new(prompt)
            .wrap(Wrap { trim: true })
            .centered()
            .render(area, buf);
    }
}
