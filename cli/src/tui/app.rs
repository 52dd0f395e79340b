// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::{DefaultTerminal, Frame};
use slotcal_core::{CalendarSurface, Navigation, Session, ViewKind};

use crate::config::Config;
use crate::tui::calendar_pane::CalendarPane;
use crate::tui::calendar_store::{CalendarStore, StatusKind};
use crate::tui::component::{Component, Message};
use crate::tui::confirm::ConfirmDelete;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_editor::EventEditor;

/// Runs the interactive calendar until the user quits, handing the session back.
pub fn run_calendar(session: Session, config: &Config) -> Result<Session, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(CalendarStore::new(session, *config)));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        CalendarStore::register_to(store.clone(), &mut dispatcher);
        let mut app = CalendarApp::new(&store);
        app.start(&mut dispatcher, &store, &terminal);

        loop {
            app.sync(&mut dispatcher, &store);
            if let Err(e) = app.draw(&store, &mut terminal) {
                break Err(e);
            }

            match app.read_event(&mut dispatcher, &store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // Continue the loop to render the next frame
            }
        }
    }; // release dispatcher and app here, they hold clones of the store
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store.into_session())
}

pub struct CalendarApp {
    pane: CalendarPane,
    editor: EventEditor,
    confirm: ConfirmDelete,
    editor_open: bool,
    area: Rect,
}

impl CalendarApp {
    pub fn new(store: &Rc<RefCell<CalendarStore>>) -> Self {
        let mut pane = CalendarPane::new();
        pane.bind_interaction_handlers(CalendarStore::interaction_handler(store.clone()));
        Self {
            pane,
            editor: EventEditor::new(),
            confirm: ConfirmDelete::new(),
            editor_open: false,
            area: Rect::default(),
        }
    }

    fn start(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        terminal: &DefaultTerminal,
    ) {
        match terminal.size() {
            Ok(size) => {
                self.area = Rect::new(0, 0, size.width, size.height);
                dispatcher.dispatch(Action::Resize {
                    columns: size.width,
                });
            }
            Err(e) => tracing::warn!(error = %e, "failed to read the terminal size"),
        }
        self.sync(dispatcher, store);
    }

    /// Pulls the latest grid into the pane and follows the editor's open state.
    pub fn sync(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<CalendarStore>) {
        {
            let store = store.borrow();
            let Ok(()) = self.pane.render_grid(&store.session.grid());
        }

        let open = store.borrow().session.editor().is_open();
        if open != self.editor_open {
            self.editor_open = open;
            match open {
                true => self.editor.activate(dispatcher, store),
                false => self.editor.deactivate(dispatcher, store),
            }
        }
    }

    fn draw(
        &mut self,
        store: &RefCell<CalendarStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        terminal.draw(|frame| self.render_frame(store, frame))?;
        Ok(())
    }

    fn render_frame(&mut self, store: &RefCell<CalendarStore>, frame: &mut Frame) {
        self.area = frame.area();
        self.render(store, self.area, frame.buffer_mut());
        if let Some(pos) = self.get_cursor_position(store, self.area) {
            frame.set_cursor_position(pos);
        }
    }

    fn read_event(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.on_key(dispatcher, store, self.area, key))
            }
            Event::Resize(columns, rows) => {
                self.area = Rect::new(0, 0, columns, rows);
                dispatcher.dispatch(Action::Resize { columns });
                Ok(Some(Message::Handled))
            }
            _ => Ok(None),
        }
    }

    fn on_root_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        let action = match event.code {
            Char('q') => return Some(Message::Exit),
            Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Message::Exit);
            }
            Char('[') | PageUp => Action::Navigate(Navigation::Prev),
            Char(']') | PageDown => Action::Navigate(Navigation::Next),
            Char('t') => Action::Navigate(Navigation::Today),
            Char('n') => Action::NewEvent,
            Char('v') => Action::ChangeView(cycle_view(store, 1)?),
            Char('V') => Action::ChangeView(cycle_view(store, -1)?),
            Char(c @ '1'..='9') => {
                let index = c.to_digit(10)? as usize - 1;
                let kind = store.borrow().session.preset().views().get(index).copied()?;
                Action::ChangeView(kind)
            }
            _ => return None,
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }

    fn render_toolbar(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let session = &store.session;
        let locale = session.view().convention().locale;
        let current = session.view().kind();

        let mut spans = vec![
            format!(" {} ", self.pane.title()).bold(),
            "  ".into(),
        ];
        for (i, kind) in session.preset().views().iter().enumerate() {
            let label = format!(" {} {} ", i + 1, kind.label(locale));
            spans.push(match *kind == current {
                true => label.reversed(),
                false => label.into(),
            });
        }
        Line::from(spans).render(area, buf);
    }

    fn render_status(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let line = match &store.status {
            Some(status) => match status.kind {
                StatusKind::Info => Line::from(format!(" {} ", status.text).green()),
                StatusKind::Error => Line::from(format!(" {} ", status.text).red()),
            },
            None => {
                let messages = store.session.view().convention().locale.messages();
                Line::from(vec![
                    " [ ".blue().bold(),
                    format!("{} ", messages.previous).into(),
                    "] ".blue().bold(),
                    format!("{} ", messages.next).into(),
                    "t ".blue().bold(),
                    format!("{} ", messages.today).into(),
                    "n ".blue().bold(),
                    "New ".into(),
                    "Tab ".blue().bold(),
                    "Focus ".into(),
                    "q ".blue().bold(),
                    "Quit".into(),
                ])
            }
        };
        line.render(area, buf);
    }
}

/// The next view offered by the preset, or `None` if there is only one.
fn cycle_view(store: &RefCell<CalendarStore>, offset: isize) -> Option<ViewKind> {
    let store = store.borrow();
    let views = store.session.preset().views();
    let current = store.session.view().kind();
    let index = views.iter().position(|v| *v == current).unwrap_or(0);
    let next = (index as isize + offset).rem_euclid(views.len() as isize) as usize;
    views.get(next).copied().filter(|v| *v != current)
}

fn split(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

impl Component<CalendarStore> for CalendarApp {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let [toolbar, body, status] = split(area);
        self.render_toolbar(store, toolbar, buf);
        self.pane.render(store, body, buf);
        self.render_status(store, status, buf);

        let (editing, deleting) = {
            let store = store.borrow();
            let session = &store.session;
            (session.editor().is_open(), session.pending_delete().is_some())
        };
        if editing {
            self.editor.render(store, area, buf);
        }
        if deleting {
            self.confirm.render(store, area, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<CalendarStore>, area: Rect) -> Option<(u16, u16)> {
        let store_ref = store.borrow();
        let session = &store_ref.session;
        let editing = session.editor().is_open() && session.pending_delete().is_none();
        drop(store_ref);

        match editing {
            true => self.editor.get_cursor_position(store, area),
            false => None,
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (editing, deleting) = {
            let store = store.borrow();
            let session = &store.session;
            (session.editor().is_open(), session.pending_delete().is_some())
        };

        if deleting {
            self.confirm.on_key(dispatcher, store, area, event)
        } else if editing {
            self.editor.on_key(dispatcher, store, area, event)
        } else {
            let [_, body, _] = split(area);
            self.pane
                .on_key(dispatcher, store, body, event)
                .or_else(|| self.on_root_key(dispatcher, store, event))
        }
    }
}
