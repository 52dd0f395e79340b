// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::{
    CalendarError, CalendarEvent, EventDraft, EventId, EventPatch, Priority, TimeSlot,
    datetime::{format_date, format_time, parse_date, parse_time, start_of_day},
};

/// How the editor is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorVariant {
    /// Centered dialog with a backdrop, for wide displays.
    Dialog,

    /// Panel sliding up from the bottom edge, for narrow displays.
    Panel,
}

/// What submitting the editor does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(EventId),
}

/// Text fields of the entry editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorForm {
    pub title: String,

    /// Date as `YYYY-MM-DD`.
    pub date: String,

    /// Start time as `HH:MM`.
    pub start_time: String,

    /// End time as `HH:MM`.
    pub end_time: String,

    pub all_day: bool,
    pub description: String,
    pub location: String,
    pub priority: Option<Priority>,

    /// Whole days covered when `all_day` is set.
    span_days: u32,

    /// Days between the start date and the end date of a timed range.
    end_day_offset: u32,
}

const DEFAULT_START_HOUR: u32 = 11;
const DEFAULT_END_HOUR: u32 = 12;

impl EditorForm {
    /// Empty form on the given date, from 11:00 to 12:00.
    pub fn blank(date: NaiveDate) -> Self {
        let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN);
        Self {
            title: String::new(),
            date: format_date(date),
            start_time: format_time(date.and_time(at(DEFAULT_START_HOUR))),
            end_time: format_time(date.and_time(at(DEFAULT_END_HOUR))),
            all_day: false,
            description: String::new(),
            location: String::new(),
            priority: None,
            span_days: 1,
            end_day_offset: 0,
        }
    }

    /// Empty form covering a selected slot.
    pub fn from_slot(slot: &TimeSlot) -> Self {
        let all_day = slot.is_whole_days();
        Self {
            title: String::new(),
            date: format_date(slot.start.date()),
            start_time: format_time(slot.start),
            end_time: format_time(slot.end),
            all_day,
            description: String::new(),
            location: String::new(),
            priority: None,
            span_days: whole_days(slot.start, slot.end, all_day),
            end_day_offset: day_offset(slot.start, slot.end, all_day),
        }
    }

    /// Form prefilled from an existing event.
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            date: format_date(event.start.date()),
            start_time: format_time(event.start),
            end_time: format_time(event.end),
            all_day: event.all_day,
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            priority: event.priority,
            span_days: whole_days(event.start, event.end, event.all_day),
            end_day_offset: day_offset(event.start, event.end, event.all_day),
        }
    }

    /// Recombines the date and time fields into a start and an end.
    ///
    /// The start falls on the form's date and the end keeps the day offset of
    /// the slot or event the form was opened with, so a range ending at or
    /// past midnight stays on the next day. All-day forms run from midnight
    /// to the midnight after the covered days.
    pub fn time_range(&self) -> Result<(NaiveDateTime, NaiveDateTime), CalendarError> {
        let date = parse_date(&self.date)?;
        if self.all_day {
            let start = start_of_day(date);
            return Ok((start, start + TimeDelta::days(self.span_days.into())));
        }

        let start = date.and_time(parse_time(&self.start_time)?);
        let end = date.and_time(parse_time(&self.end_time)?)
            + TimeDelta::days(self.end_day_offset.into());
        Ok((start, end))
    }

    /// Draft for a new event.
    pub fn draft(&self) -> Result<EventDraft, CalendarError> {
        let (start, end) = self.time_range()?;
        Ok(EventDraft {
            title: self.title.trim().to_owned(),
            start,
            end,
            all_day: self.all_day,
            description: non_empty(&self.description),
            location: non_empty(&self.location),
            priority: self.priority,
        })
    }

    /// Patch replacing every field of an existing event with the form's.
    pub fn patch(&self) -> Result<EventPatch, CalendarError> {
        let (start, end) = self.time_range()?;
        Ok(EventPatch {
            title: Some(self.title.trim().to_owned()),
            start: Some(start),
            end: Some(end),
            all_day: Some(self.all_day),
            description: Some(non_empty(&self.description)),
            location: Some(non_empty(&self.location)),
            priority: Some(self.priority),
        })
    }
}

fn whole_days(start: NaiveDateTime, end: NaiveDateTime, all_day: bool) -> u32 {
    if !all_day {
        return 1;
    }
    let days = (end.date() - start.date()).num_days();
    u32::try_from(days).unwrap_or(1).max(1)
}

fn day_offset(start: NaiveDateTime, end: NaiveDateTime, all_day: bool) -> u32 {
    if all_day {
        return 0;
    }
    let days = (end.date() - start.date()).num_days();
    u32::try_from(days).unwrap_or(0)
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

/// State of the entry editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open {
        mode: EditorMode,
        form: EditorForm,
    },
}

/// What a successful submit hands to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(EventDraft),
    Update(EventId, EventPatch),
}

/// A delete waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: EventId,
    pub title: String,
}

impl DeleteRequest {
    /// Question shown before deleting.
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete \"{}\" event?", self.title)
    }
}

/// Editor for creating and editing a single event.
#[derive(Debug, Clone, Default)]
pub struct EntryEditor {
    state: EditorState,
    slot: Option<TimeSlot>,
}

impl EntryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open { .. })
    }

    pub fn mode(&self) -> Option<&EditorMode> {
        match &self.state {
            EditorState::Open { mode, .. } => Some(mode),
            EditorState::Closed => None,
        }
    }

    pub fn form(&self) -> Option<&EditorForm> {
        match &self.state {
            EditorState::Open { form, .. } => Some(form),
            EditorState::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EditorForm> {
        match &mut self.state {
            EditorState::Open { form, .. } => Some(form),
            EditorState::Closed => None,
        }
    }

    /// The slot the editor was opened on, in create mode.
    pub fn selected_slot(&self) -> Option<&TimeSlot> {
        self.slot.as_ref()
    }

    /// The event being edited, in edit mode.
    pub fn selected_event(&self) -> Option<&EventId> {
        match self.mode() {
            Some(EditorMode::Edit(id)) => Some(id),
            _ => None,
        }
    }

    /// Opens in create mode prefilled from a slot.
    pub fn open_create(&mut self, slot: TimeSlot) {
        tracing::debug!(start = %slot.start, end = %slot.end, "editor opened for a new event");
        self.state = EditorState::Open {
            mode: EditorMode::Create,
            form: EditorForm::from_slot(&slot),
        };
        self.slot = Some(slot);
    }

    /// Opens in create mode with the default times on a date.
    pub fn open_blank(&mut self, date: NaiveDate) {
        tracing::debug!(%date, "editor opened with default times");
        self.state = EditorState::Open {
            mode: EditorMode::Create,
            form: EditorForm::blank(date),
        };
        self.slot = None;
    }

    /// Opens in edit mode prefilled from an event.
    pub fn open_edit(&mut self, event: &CalendarEvent) {
        tracing::debug!(id = %event.id, "editor opened for an existing event");
        self.state = EditorState::Open {
            mode: EditorMode::Edit(event.id.clone()),
            form: EditorForm::from_event(event),
        };
        self.slot = None;
    }

    /// Closes the editor and clears the selection.
    pub fn close(&mut self) {
        self.state = EditorState::Closed;
        self.slot = None;
    }

    /// Submits the form through `on_submit`.
    ///
    /// An empty title is ignored and yields `Ok(None)` with the editor left
    /// open. The editor closes only when `on_submit` succeeds; parse errors
    /// and errors from `on_submit` are returned with the editor still open.
    pub fn submit<T>(
        &mut self,
        on_submit: impl FnOnce(Submission) -> Result<T, CalendarError>,
    ) -> Result<Option<T>, CalendarError> {
        let EditorState::Open { mode, form } = &self.state else {
            return Err(CalendarError::EditorClosed);
        };

        if form.title.trim().is_empty() {
            tracing::debug!("submit ignored, empty title");
            return Ok(None);
        }

        let submission = match mode {
            EditorMode::Create => Submission::Create(form.draft()?),
            EditorMode::Edit(id) => Submission::Update(id.clone(), form.patch()?),
        };

        let output = on_submit(submission)?;
        self.close();
        Ok(Some(output))
    }

    /// The id to delete, available in edit mode only.
    pub fn request_delete(&self) -> Result<&EventId, CalendarError> {
        match &self.state {
            EditorState::Open {
                mode: EditorMode::Edit(id),
                ..
            } => Ok(id),
            EditorState::Open { .. } => Err(CalendarError::DeleteUnavailable),
            EditorState::Closed => Err(CalendarError::EditorClosed),
        }
    }
}
