// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;

use crate::{
    CalendarError, CalendarEvent, ClockIdGenerator, EventDraft, EventId, EventPatch, IdGenerator,
};

/// How the store treats events that do not end after they start.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Reject `end <= start`.
    #[default]
    Strict,

    /// Accept any range.
    Lenient,
}

/// The owned, ordered list of events.
///
/// Events keep their insertion order. Updates and deletes for unknown ids are
/// silent no-ops; titles must not be empty and, under [`RangePolicy::Strict`],
/// events must end after they start.
#[derive(Debug, Clone)]
pub struct EventStore<G: IdGenerator = ClockIdGenerator> {
    events: Vec<CalendarEvent>,
    ids: G,
    policy: RangePolicy,
}

impl EventStore<ClockIdGenerator> {
    /// Creates an empty store with timestamp identifiers.
    pub fn new() -> Self {
        Self::with_generator(ClockIdGenerator::new())
    }
}

impl Default for EventStore<ClockIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> EventStore<G> {
    /// Creates an empty store drawing identifiers from `ids`.
    pub fn with_generator(ids: G) -> Self {
        Self {
            events: Vec::new(),
            ids,
            policy: RangePolicy::default(),
        }
    }

    /// Sets the range validation policy.
    pub fn with_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active range validation policy.
    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Looks up an event by id.
    pub fn get(&self, id: &EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Events intersecting the half-open range `[start, end)`.
    pub fn between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(move |e| e.overlaps(start, end))
    }

    /// Validates a draft and appends it under a freshly generated id.
    pub fn add(&mut self, draft: EventDraft) -> Result<&CalendarEvent, CalendarError> {
        let id = self.ids.next_id();
        self.insert(CalendarEvent::from_draft(id, draft))
    }

    /// Validates and appends an event that already carries an id.
    pub fn insert(&mut self, event: CalendarEvent) -> Result<&CalendarEvent, CalendarError> {
        self.validate(&event)?;
        if self.get(&event.id).is_some() {
            return Err(CalendarError::DuplicateId(event.id));
        }

        tracing::debug!(id = %event.id, title = %event.title, "event added");
        let index = self.events.len();
        self.events.push(event);
        Ok(&self.events[index])
    }

    /// Inserts every event, stopping at the first invalid one.
    pub fn seed(
        &mut self,
        events: impl IntoIterator<Item = CalendarEvent>,
    ) -> Result<(), CalendarError> {
        for event in events {
            self.insert(event)?;
        }
        Ok(())
    }

    /// Applies a patch to the event with the given id.
    ///
    /// Returns `Ok(None)` when no event has that id. The patched event is
    /// validated before it replaces the stored one.
    pub fn update(
        &mut self,
        id: &EventId,
        patch: &EventPatch,
    ) -> Result<Option<&CalendarEvent>, CalendarError> {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "update ignored, no such event");
            return Ok(None);
        };

        let mut updated = self.events[index].clone();
        patch.apply_to(&mut updated);
        self.validate(&updated)?;

        tracing::debug!(%id, ?patch, "event updated");
        self.events[index] = updated;
        Ok(Some(&self.events[index]))
    }

    /// Moves or resizes the event with the given id.
    pub fn move_event(
        &mut self,
        id: &EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Option<&CalendarEvent>, CalendarError> {
        self.update(id, &EventPatch::reschedule(start, end))
    }

    /// Removes the event with the given id and returns it.
    pub fn delete(&mut self, id: &EventId) -> Option<CalendarEvent> {
        match self.position(id) {
            Some(index) => {
                tracing::debug!(%id, "event deleted");
                Some(self.events.remove(index))
            }
            None => {
                tracing::debug!(%id, "delete ignored, no such event");
                None
            }
        }
    }

    fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|e| &e.id == id)
    }

    fn validate(&self, event: &CalendarEvent) -> Result<(), CalendarError> {
        if event.title.trim().is_empty() {
            return Err(CalendarError::EmptyTitle);
        }

        if self.policy == RangePolicy::Strict && event.end <= event.start {
            return Err(CalendarError::InvalidRange {
                start: event.start,
                end: event.end,
            });
        }

        Ok(())
    }
}
