// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use slotcal_core::{
    CalendarError, EditorForm, InteractionHandler, Session, SessionOutcome, SurfaceEvent,
};

use crate::config::Config;
use crate::tui::dispatcher::{Action, Dispatcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One line of feedback shown under the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Debug)]
pub struct CalendarStore {
    pub session: Session,
    pub status: Option<Status>,
    config: Config,
}

impl CalendarStore {
    pub fn new(session: Session, config: Config) -> Self {
        Self {
            session,
            status: None,
            config,
        }
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Feeds an interaction from the calendar pane into the session.
    pub fn handle_surface(&mut self, event: SurfaceEvent) {
        let result = self.session.handle(event);
        self.report(result);
    }

    /// A handler for the calendar pane that routes into this store.
    pub fn interaction_handler(that: Rc<RefCell<Self>>) -> InteractionHandler {
        Rc::new(RefCell::new(move |event: SurfaceEvent| {
            that.borrow_mut().handle_surface(event);
        }))
    }

    fn report(&mut self, result: Result<SessionOutcome, CalendarError>) {
        use SessionOutcome::*;
        self.status = match result {
            Ok(Created(id)) => Some(info(format!("Event {id} created"))),
            Ok(Updated(id)) => Some(info(format!("Event {id} updated"))),
            Ok(Moved(id)) => Some(info(format!("Event {id} moved"))),
            Ok(Deleted(id)) => Some(info(format!("Event {id} deleted"))),
            Ok(Ignored | EditorOpened | DeletePending(_)) => None,
            Err(e) => {
                tracing::debug!(error = %e, "rejected by the session");
                Some(Status {
                    kind: StatusKind::Error,
                    text: e.to_string(),
                })
            }
        };
    }

    fn update_form(&mut self, f: impl FnOnce(&mut EditorForm)) {
        match self.session.editor_mut().form_mut() {
            Some(form) => f(form),
            None => tracing::debug!("form update while the editor is closed"),
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::Resize { columns } => {
                    let width = that.config.viewport_width(*columns);
                    if let Some(mode) = that.session.resize(width) {
                        tracing::debug!(?mode, width, "display mode changed");
                    }
                }
                Action::Navigate(nav) => that.session.navigate(*nav),
                Action::ChangeView(kind) => {
                    let result = that.session.change_view(*kind).map(|_| SessionOutcome::Ignored);
                    that.report(result);
                }
                Action::NewEvent => {
                    let outcome = that.session.new_event();
                    that.report(Ok(outcome));
                }

                Action::UpdateTitle(v) => that.update_form(|f| f.title = v.clone()),
                Action::UpdateDate(v) => that.update_form(|f| f.date = v.clone()),
                Action::UpdateStartTime(v) => that.update_form(|f| f.start_time = v.clone()),
                Action::UpdateEndTime(v) => that.update_form(|f| f.end_time = v.clone()),
                Action::UpdateAllDay(v) => that.update_form(|f| f.all_day = *v),
                Action::UpdatePriority(v) => that.update_form(|f| f.priority = *v),
                Action::UpdateLocation(v) => that.update_form(|f| f.location = v.clone()),
                Action::UpdateDescription(v) => that.update_form(|f| f.description = v.clone()),
                Action::SubmitEditor => {
                    let result = that.session.submit_editor();
                    that.report(result);
                }
                Action::CloseEditor => {
                    that.session.close_editor();
                    that.status = None;
                }

                Action::RequestDelete => {
                    let result = that.session.request_delete().map(SessionOutcome::DeletePending);
                    that.report(result);
                }
                Action::ConfirmDelete => {
                    let outcome = that.session.confirm_delete();
                    that.report(Ok(outcome));
                }
                Action::CancelDelete => that.session.cancel_delete(),
            }
        }));
        dispatcher.register(callback);
    }
}

fn info(text: String) -> Status {
    Status {
        kind: StatusKind::Info,
        text,
    }
}
