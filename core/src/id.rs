// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Utc;

use crate::EventId;

/// Source of fresh event identifiers.
pub trait IdGenerator {
    /// Returns the next identifier.
    fn next_id(&mut self) -> EventId;
}

/// Millisecond timestamps, bumped past the previous value when the clock has not moved.
#[derive(Debug, Default, Clone)]
pub struct ClockIdGenerator {
    last: i64,
}

impl ClockIdGenerator {
    /// Creates a generator that starts at the current time.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_after(&mut self, now_ms: i64) -> i64 {
        self.last = if now_ms > self.last {
            now_ms
        } else {
            self.last + 1
        };
        self.last
    }
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&mut self) -> EventId {
        let now_ms = Utc::now().timestamp_millis();
        EventId::new(self.next_after(now_ms).to_string())
    }
}

/// Counts up from a fixed start, for deterministic identifiers.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EventId {
        let id = self.next;
        self.next += 1;
        EventId::new(id.to_string())
    }
}
