// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Facts recorded in a game's event log

use crate::side::Side;
use serde::{Deserialize, Serialize};

/// Something that happened during a game.
///
/// Events carry no timestamp; their position in the log is their order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// `winner` won the point that was just played
    #[serde(rename = "point:won")]
    PointWon { winner: Side },
}

impl Event {
    pub fn point_won(winner: Side) -> Self {
        Event::PointWon { winner }
    }

    /// Stable event name for logging and output
    pub fn name(&self) -> &'static str {
        match self {
            Event::PointWon { .. } => "point:won",
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
