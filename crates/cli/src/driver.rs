// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Feeds a character sequence into a game session

use deuce_core::{GameError, GameSession, Side};
use thiserror::Error;

/// Errors raised while playing a sequence
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("Only A or B allowed - found: {found}")]
    InvalidSide { found: char, position: usize },
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Map one input character to a side
pub fn parse_side(c: char, position: usize) -> Result<Side, PlayError> {
    match c {
        'A' => Ok(Side::A),
        'B' => Ok(Side::B),
        found => Err(PlayError::InvalidSide { found, position }),
    }
}

/// Play every point in `sequence` until the game is won.
///
/// Characters are validated as they are reached, so anything after the
/// winning point is ignored without being inspected.
pub fn play_sequence(sequence: &str) -> Result<GameSession, PlayError> {
    let mut session = GameSession::new();

    for (position, c) in sequence.chars().enumerate() {
        let side = parse_side(c, position)?;
        session.play_point(side)?;

        if session.is_finished() {
            let ignored = sequence.chars().count() - position - 1;
            if ignored > 0 {
                tracing::debug!(ignored, "ignoring input after game finished");
            }
            break;
        }
    }

    Ok(session)
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
