// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use slotcal_core::{Navigation, Priority, ViewKind};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The terminal now has this many columns.
    Resize { columns: u16 },
    Navigate(Navigation),
    ChangeView(ViewKind),
    NewEvent,

    UpdateTitle(String),
    UpdateDate(String),
    UpdateStartTime(String),
    UpdateEndTime(String),
    UpdateAllDay(bool),
    UpdatePriority(Option<Priority>),
    UpdateLocation(String),
    UpdateDescription(String),
    SubmitEditor,
    CloseEditor,

    RequestDelete,
    ConfirmDelete,
    CancelDelete,
}
