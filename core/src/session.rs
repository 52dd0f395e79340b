// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    CalendarError, CalendarEvent, ClickBehavior, ClockIdGenerator, Config, DeleteRequest,
    DisplayMode, EditorVariant, EntryEditor, EventId, EventStore, Grid, IdGenerator, Navigation,
    Preset, ResponsiveSwitch, Submission, SurfaceEvent, SurfaceOptions, ViewKind, ViewState,
    build_grid,
};

/// What handling an interaction led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Nothing changed.
    Ignored,

    /// The entry editor was opened.
    EditorOpened,

    /// A delete waits for confirmation.
    DeletePending(DeleteRequest),

    Created(EventId),
    Updated(EventId),
    Moved(EventId),
    Deleted(EventId),
}

/// Owns the store, the view, the editor and the display mode of one calendar,
/// and routes surface interactions between them.
#[derive(Debug)]
pub struct Session<G: IdGenerator = ClockIdGenerator> {
    now: NaiveDateTime,
    preset: Preset,
    store: EventStore<G>,
    view: ViewState,
    preferred_view: ViewKind,
    options: SurfaceOptions,
    display: ResponsiveSwitch,
    editor: EntryEditor,
    pending_delete: Option<DeleteRequest>,
}

impl Session<ClockIdGenerator> {
    /// Creates a session with timestamp identifiers.
    pub fn new(config: &Config, now: NaiveDateTime) -> Result<Self, CalendarError> {
        Self::with_generator(config, now, ClockIdGenerator::new())
    }
}

impl<G: IdGenerator> Session<G> {
    /// Creates a session drawing identifiers from `ids`.
    ///
    /// Events from the configuration replace the preset's seed events.
    pub fn with_generator(config: &Config, now: NaiveDateTime, ids: G) -> Result<Self, CalendarError> {
        let preset = config.preset;
        let kind = config.initial_view();
        if !preset.offers(kind) {
            return Err(CalendarError::ViewUnavailable(kind));
        }

        let mut store = EventStore::with_generator(ids).with_policy(config.range_policy);
        if config.events.is_empty() {
            store.seed(preset.seed_events())?;
        } else {
            for seed in &config.events {
                match &seed.id {
                    Some(id) => {
                        store.insert(CalendarEvent::from_draft(id.clone(), seed.draft.clone()))?
                    }
                    None => store.add(seed.draft.clone())?,
                };
            }
        }

        let anchor = preset.initial_date().unwrap_or(now.date());
        let view = ViewState::new(kind, anchor, preset.convention())
            .with_agenda_days(config.agenda_days());

        tracing::debug!(%preset, %kind, %anchor, events = store.len(), "session started");
        Ok(Self {
            now,
            preset,
            store,
            view,
            preferred_view: kind,
            options: config.surface_options(),
            display: ResponsiveSwitch::with_mode(config.narrow_threshold(), DisplayMode::Wide),
            editor: EntryEditor::new(),
            pending_delete: None,
        })
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn store(&self) -> &EventStore<G> {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    pub fn editor(&self) -> &EntryEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EntryEditor {
        &mut self.editor
    }

    pub fn pending_delete(&self) -> Option<&DeleteRequest> {
        self.pending_delete.as_ref()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display.mode()
    }

    /// Editor presentation for the current display mode.
    pub fn editor_variant(&self) -> EditorVariant {
        self.display.mode().editor_variant()
    }

    /// Lays out the current view.
    pub fn grid(&self) -> Grid<'_> {
        build_grid(&self.view, &self.options, self.store.events(), self.now.date())
    }

    /// Events falling on at least one shown day of the current view.
    pub fn visible_events(&self) -> impl Iterator<Item = &CalendarEvent> {
        let range = self.view.visible_range();
        let convention = self.view.convention();
        let shown: Vec<NaiveDate> = range.days().filter(|d| convention.is_visible(*d)).collect();
        self.store
            .between(range.start_datetime(), range.end_datetime())
            .filter(move |e| shown.iter().any(|d| e.occurs_on(*d)))
    }

    /// Routes an interaction from the calendar surface.
    pub fn handle(&mut self, event: SurfaceEvent) -> Result<SessionOutcome, CalendarError> {
        tracing::debug!(?event, "surface event");
        match event {
            SurfaceEvent::SelectSlot(slot) => {
                if !self.options.selectable {
                    return Ok(SessionOutcome::Ignored);
                }
                self.pending_delete = None;
                self.editor.open_create(slot);
                Ok(SessionOutcome::EditorOpened)
            }

            SurfaceEvent::ClickEvent(id) => {
                let Some(event) = self.store.get(&id) else {
                    return Ok(SessionOutcome::Ignored);
                };

                match self.preset.click_behavior() {
                    ClickBehavior::Edit => {
                        self.pending_delete = None;
                        self.editor.open_edit(event);
                        Ok(SessionOutcome::EditorOpened)
                    }
                    ClickBehavior::ConfirmDelete => {
                        let request = DeleteRequest {
                            id,
                            title: event.title.clone(),
                        };
                        self.pending_delete = Some(request.clone());
                        Ok(SessionOutcome::DeletePending(request))
                    }
                    ClickBehavior::Ignore => Ok(SessionOutcome::Ignored),
                }
            }

            SurfaceEvent::DropEvent { id, start, end } => {
                if !self.options.editable {
                    return Ok(SessionOutcome::Ignored);
                }
                match self.store.move_event(&id, start, end)? {
                    Some(_) => Ok(SessionOutcome::Moved(id)),
                    None => Ok(SessionOutcome::Ignored),
                }
            }

            SurfaceEvent::ResizeEvent { id, start, end } => {
                if !self.options.editable {
                    return Ok(SessionOutcome::Ignored);
                }
                let moves_start = self.store.get(&id).is_some_and(|e| e.start != start);
                if moves_start && !self.options.resizable_from_start {
                    tracing::debug!(%id, "resize from start is disabled");
                    return Ok(SessionOutcome::Ignored);
                }
                match self.store.move_event(&id, start, end)? {
                    Some(_) => Ok(SessionOutcome::Moved(id)),
                    None => Ok(SessionOutcome::Ignored),
                }
            }
        }
    }

    /// Opens the editor with default times on the anchored day.
    pub fn new_event(&mut self) -> SessionOutcome {
        if !self.options.selectable {
            return SessionOutcome::Ignored;
        }
        self.pending_delete = None;
        self.editor.open_blank(self.view.anchor());
        SessionOutcome::EditorOpened
    }

    /// Submits the open editor to the store.
    ///
    /// An empty title is ignored. Store errors are returned and leave the
    /// editor open.
    pub fn submit_editor(&mut self) -> Result<SessionOutcome, CalendarError> {
        let store = &mut self.store;
        let outcome = self.editor.submit(|submission| match submission {
            Submission::Create(draft) => {
                let event = store.add(draft)?;
                Ok(SessionOutcome::Created(event.id.clone()))
            }
            Submission::Update(id, patch) => {
                let found = store.update(&id, &patch)?.is_some();
                Ok(if found {
                    SessionOutcome::Updated(id)
                } else {
                    SessionOutcome::Ignored
                })
            }
        })?;
        Ok(outcome.unwrap_or(SessionOutcome::Ignored))
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
        self.pending_delete = None;
    }

    /// Asks to delete the event being edited.
    pub fn request_delete(&mut self) -> Result<DeleteRequest, CalendarError> {
        let id = self.editor.request_delete()?;
        let title = self
            .store
            .get(id)
            .map(|e| e.title.clone())
            .or_else(|| self.editor.form().map(|f| f.title.clone()))
            .unwrap_or_default();

        let request = DeleteRequest {
            id: id.clone(),
            title,
        };
        self.pending_delete = Some(request.clone());
        Ok(request)
    }

    /// Carries out the pending delete and closes the editor on it.
    pub fn confirm_delete(&mut self) -> SessionOutcome {
        let Some(request) = self.pending_delete.take() else {
            return SessionOutcome::Ignored;
        };

        if self.editor.selected_event() == Some(&request.id) {
            self.editor.close();
        }

        match self.store.delete(&request.id) {
            Some(_) => SessionOutcome::Deleted(request.id),
            None => SessionOutcome::Ignored,
        }
    }

    /// Drops the pending delete, leaving the editor as it was.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Switches to a view the preset offers.
    pub fn change_view(&mut self, kind: ViewKind) -> Result<(), CalendarError> {
        if !self.preset.offers(kind) {
            return Err(CalendarError::ViewUnavailable(kind));
        }
        self.view.set_kind(kind);
        self.preferred_view = kind;
        Ok(())
    }

    pub fn navigate(&mut self, nav: Navigation) {
        self.view.navigate(nav, self.now.date());
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.view.go_to(date);
    }

    /// Feeds a viewport width, returning the new mode on a threshold crossing.
    pub fn resize(&mut self, width: u32) -> Option<DisplayMode> {
        let mode = self.display.observe(width)?;
        self.apply_mode(mode);
        Some(mode)
    }

    /// Forces a display mode, returning it if it changed.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Option<DisplayMode> {
        let mode = self.display.set_mode(mode)?;
        self.apply_mode(mode);
        Some(mode)
    }

    fn apply_mode(&mut self, mode: DisplayMode) {
        let kind = match mode {
            DisplayMode::Narrow => mode.granularity(),
            DisplayMode::Wide => self.preferred_view,
        };
        if self.preset.offers(kind) {
            self.view.set_kind(kind);
        }
    }
}
