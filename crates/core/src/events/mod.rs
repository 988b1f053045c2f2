// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event log for a single game
//!
//! The log is the single source of truth for a game. Read models such as
//! [`GameProjection`](crate::projection::GameProjection) are derived from it.

mod log;

pub use log::EventLog;
