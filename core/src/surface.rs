// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::{EventId, Grid, datetime::start_of_day};

/// A proposed time range picked on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSlot {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// The whole of one day, midnight to midnight.
    pub fn whole_day(date: NaiveDate) -> Self {
        let start = start_of_day(date);
        Self::new(start, start + TimeDelta::days(1))
    }

    /// Whether the slot spans one or more complete days.
    pub fn is_whole_days(&self) -> bool {
        self.end > self.start
            && self.start.time() == NaiveTime::MIN
            && self.end.time() == NaiveTime::MIN
    }
}

/// Interactions emitted by a calendar surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// An empty range was selected.
    SelectSlot(TimeSlot),

    /// An event was clicked.
    ClickEvent(EventId),

    /// An event was dragged to a new range.
    DropEvent {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// An event was resized to a new range.
    ResizeEvent {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Callback receiving surface interactions.
pub type InteractionHandler = Rc<RefCell<dyn FnMut(SurfaceEvent)>>;

/// Something that can draw a calendar grid and report interactions on it.
pub trait CalendarSurface {
    type Error;

    /// Draws the grid.
    fn render_grid(&mut self, grid: &Grid<'_>) -> Result<(), Self::Error>;

    /// Registers the callback that receives interactions.
    fn bind_interaction_handlers(&mut self, handler: InteractionHandler);
}
