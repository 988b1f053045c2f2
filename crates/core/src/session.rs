// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Game session
//!
//! A session owns one game's event log and the projection folded from it.
//! It keeps a cursor into the log so each call only folds events appended
//! since the previous one, recording the rendered line after every event.
//!
//! The session is single-writer: embedders that share one across callers
//! must serialize access themselves.

use crate::error::GameError;
use crate::event::Event;
use crate::events::EventLog;
use crate::projection::GameProjection;
use crate::side::Side;

/// One game of tennis, driven one point at a time
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    log: EventLog,
    projection: GameProjection,
    /// Number of log entries already folded into `projection`
    cursor: usize,
    /// Rendered line after each folded event, in log order
    history: Vec<String>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play sides in order, stopping once the game is won.
    ///
    /// Sides after the winning point are never recorded.
    pub fn from_sides(sides: impl IntoIterator<Item = Side>) -> Self {
        let mut session = Self::new();
        for side in sides {
            if session.play_point(side).is_err() {
                break;
            }
        }
        session
    }

    /// Record that `side` won the next point.
    ///
    /// Returns the sequence number of the recorded event, or
    /// [`GameError::AlreadyFinished`] once a winner exists.
    pub fn play_point(&mut self, side: Side) -> Result<u64, GameError> {
        self.fold_pending();
        if let Some(winner) = self.projection.winner() {
            tracing::warn!(%winner, point = %side, "point played after game finished");
            return Err(GameError::AlreadyFinished { winner });
        }

        let sequence = self.log.append(Event::point_won(side));
        tracing::debug!(sequence, winner = %side, "point recorded");
        Ok(sequence)
    }

    pub fn is_finished(&mut self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&mut self) -> Option<Side> {
        self.fold_pending();
        self.projection.winner()
    }

    /// Line for the current state of the game
    pub fn score(&mut self) -> String {
        self.fold_pending();
        self.projection.render()
    }

    /// Fold any unfolded events and return the full scoring history,
    /// one line per event
    pub fn render_all(&mut self) -> &[String] {
        self.fold_pending();
        &self.history
    }

    /// Lines folded so far, without folding newer events
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Number of events folded into the projection
    pub fn folded(&self) -> usize {
        self.cursor
    }

    fn fold_pending(&mut self) {
        let pending = self.log.since(self.cursor);
        if pending.is_empty() {
            return;
        }

        for event in pending {
            self.projection.apply(event);
            self.history.push(self.projection.render());
        }
        tracing::trace!(from = self.cursor, to = self.log.len(), "folded");
        self.cursor = self.log.len();
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
