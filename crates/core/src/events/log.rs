// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only in-memory event log

use crate::event::Event;

/// Ordered, append-only sequence of events.
///
/// Events are never reordered, edited, or removed. A position in the log
/// (its index) is the only ordering an event has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, returning its 1-based sequence number
    pub fn append(&mut self, event: Event) -> u64 {
        self.events.push(event);
        let sequence = self.events.len() as u64;
        tracing::trace!(sequence, event = event.name(), "appended");
        sequence
    }

    /// Owned copy of every event recorded so far
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.clone()
    }

    /// Borrowed view of every event recorded so far
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events appended after the first `cursor` entries.
    ///
    /// A cursor past the end yields an empty slice.
    pub fn since(&self, cursor: usize) -> &[Event] {
        self.events.get(cursor..).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
