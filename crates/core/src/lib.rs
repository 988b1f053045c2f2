// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! deuce-core: Event-sourced tennis game scoring
//!
//! This crate provides:
//! - An append-only event log of point-won events
//! - A pure score projection (0/15/30/40, deuce, advantage, win)
//! - A game session that folds the log incrementally and records
//!   the rendered score after every point

pub mod error;
pub mod event;
pub mod events;
pub mod projection;
pub mod session;
pub mod side;

pub use error::GameError;
pub use event::Event;
pub use events::EventLog;
pub use projection::{GameProjection, GameState, Score, SCORE_BUCKETS};
pub use session::GameSession;
pub use side::Side;
