// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Score projection
//!
//! Folds point-won events into the current state of a single game and
//! renders the line shown after each point. The fold is a pure function of
//! (state, event), so any state can be rebuilt by refolding the log.

use crate::event::Event;
use crate::side::Side;

/// Labels for the pre-deuce buckets, indexed 0..=3
pub const SCORE_BUCKETS: [&str; 4] = ["0", "15", "30", "40"];

/// Bucket index for 40
const FORTY: u8 = 3;

/// Pre-deuce bucket indices for both sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    a: u8,
    b: u8,
}

impl Score {
    /// Indices above 40 are clamped to 40. Use [`GameState::from_buckets`]
    /// outside the crate so 40-40 becomes Deuce.
    pub(crate) fn new(a: u8, b: u8) -> Self {
        Self {
            a: a.min(FORTY),
            b: b.min(FORTY),
        }
    }

    pub fn index(&self, side: Side) -> u8 {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    /// Bucket label ("0", "15", "30" or "40") for a side
    pub fn label(&self, side: Side) -> &'static str {
        SCORE_BUCKETS[usize::from(self.index(side))]
    }

    fn is_forty_all(&self) -> bool {
        self.a == FORTY && self.b == FORTY
    }

    fn with_index(self, side: Side, index: u8) -> Self {
        match side {
            Side::A => Self { a: index, ..self },
            Side::B => Self { b: index, ..self },
        }
    }

    fn on_point(self, side: Side) -> GameState {
        let own = self.index(side);
        let other = self.index(side.opponent());

        if own < FORTY {
            let next = own + 1;
            if next == FORTY && other == FORTY {
                return GameState::Deuce;
            }
            return GameState::Scoring(self.with_index(side, next));
        }

        // Already at 40. A 40-40 score plays as Deuce.
        if other < FORTY {
            GameState::Won(side)
        } else {
            GameState::Advantage(side)
        }
    }
}

/// The state of a game. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Before deuce, tracking bucket indices
    Scoring(Score),
    /// Both sides reached 40, or an advantage was cancelled
    Deuce,
    /// One point ahead from deuce
    Advantage(Side),
    /// Terminal. Absorbs every further point.
    Won(Side),
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Scoring(Score::default())
    }
}

impl GameState {
    /// Build a pre-deuce state from bucket indices. 40-40 is Deuce.
    pub fn from_buckets(a: u8, b: u8) -> Self {
        let score = Score::new(a, b);
        if score.is_forty_all() {
            GameState::Deuce
        } else {
            GameState::Scoring(score)
        }
    }

    /// Pure transition function - returns the state after `side` wins a point
    pub fn on_point(self, side: Side) -> GameState {
        match self {
            GameState::Won(_) => self,
            GameState::Scoring(score) => score.on_point(side),
            GameState::Deuce => GameState::Advantage(side),
            GameState::Advantage(holder) if holder == side => GameState::Won(side),
            GameState::Advantage(_) => GameState::Deuce,
        }
    }

    /// Line shown for this state. Every line but the winning one ends in a newline.
    pub fn render(&self) -> String {
        match self {
            GameState::Won(side) => format!("Player {side} wins the game"),
            GameState::Advantage(side) => format!("Advantage Player {side}\n"),
            GameState::Deuce => "Deuce\n".to_string(),
            GameState::Scoring(score) if score.is_forty_all() => "Deuce\n".to_string(),
            GameState::Scoring(score) => format!(
                "Player A : {} / Player B : {}\n",
                score.label(Side::A),
                score.label(Side::B)
            ),
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameState::Won(side) => Some(*side),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Won(_))
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            GameState::Scoring(_) => "scoring",
            GameState::Deuce => "deuce",
            GameState::Advantage(_) => "advantage",
            GameState::Won(_) => "won",
        }
    }
}

/// Read model folded from a game's event log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameProjection {
    state: GameState,
}

impl GameProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary state
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Fold a sequence of events into a fresh projection
    pub fn fold<'a>(events: impl IntoIterator<Item = &'a Event>) -> Self {
        let mut projection = Self::new();
        for event in events {
            projection.apply(event);
        }
        projection
    }

    /// Fold one event into the state. Events after a win are ignored.
    pub fn apply(&mut self, event: &Event) {
        if self.state.is_terminal() {
            tracing::trace!(event = event.name(), "game already won, ignoring");
            return;
        }

        match event {
            Event::PointWon { winner } => {
                let next = self.state.on_point(*winner);
                if next.kind() != self.state.kind() {
                    tracing::trace!(from = self.state.kind(), to = next.kind(), point = %winner, "transition");
                }
                self.state = next;
            }
        }
    }

    /// Line for the current state
    pub fn render(&self) -> String {
        self.state.render()
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Discard all folded state
    pub fn reset(&mut self) {
        self.state = GameState::default();
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
