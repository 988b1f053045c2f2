// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for game sessions

use crate::side::Side;
use thiserror::Error;

/// Errors returned by [`GameSession`](crate::session::GameSession)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game already finished: player {winner} won")]
    AlreadyFinished { winner: Side },
}
