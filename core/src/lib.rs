// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core calendar model: events, the event store, views, grids, the entry
//! editor and the session that routes surface interactions between them.

mod config;
mod datetime;
mod display;
mod editor;
mod error;
mod event;
mod grid;
mod id;
mod locale;
mod preset;
mod session;
mod store;
mod surface;
mod view;

pub use crate::config::{APP_NAME, Config, ConfigDuration, EventSeed};
pub use crate::datetime::{
    DateRange, format_date, format_time, parse_date, parse_time, start_of_day,
};
pub use crate::display::{DEFAULT_NARROW_THRESHOLD, DisplayMode, ResponsiveSwitch};
pub use crate::editor::{
    DeleteRequest, EditorForm, EditorMode, EditorState, EditorVariant, EntryEditor, Submission,
};
pub use crate::error::CalendarError;
pub use crate::event::{CalendarEvent, EventDraft, EventId, EventPatch, Priority};
pub use crate::grid::{
    DayColumn, Grid, ListDay, ListGrid, MonthCell, MonthGrid, SurfaceOptions, TimeGrid,
    TimedSegment, build_grid,
};
pub use crate::id::{ClockIdGenerator, IdGenerator, SequentialIdGenerator};
pub use crate::locale::{Locale, Messages, WeekConvention};
pub use crate::preset::{ClickBehavior, Preset};
pub use crate::session::{Session, SessionOutcome};
pub use crate::store::{EventStore, RangePolicy};
pub use crate::surface::{CalendarSurface, InteractionHandler, SurfaceEvent, TimeSlot};
pub use crate::view::{MAX_AGENDA_DAYS, Navigation, ViewKind, ViewState};
