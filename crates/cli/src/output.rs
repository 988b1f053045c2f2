// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for a played game

use clap::ValueEnum;
use deuce_core::{Event, GameSession};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Scoring history, one line per point
    Text,
    /// One JSON object per point
    Json,
}

/// A played point with the score shown after it
#[derive(Debug, Serialize)]
pub struct PointRecord<'a> {
    pub sequence: u64,
    pub event: &'a Event,
    pub score: &'a str,
}

/// Write the session's scoring history in the given format
pub fn write_history(
    out: &mut impl Write,
    session: &mut GameSession,
    format: OutputFormat,
) -> io::Result<()> {
    let history = session.render_all().to_vec();

    match format {
        OutputFormat::Text => writeln!(out, "{}", history.concat()),
        OutputFormat::Json => {
            for (i, (event, score)) in session.log().events().iter().zip(&history).enumerate() {
                let record = PointRecord {
                    sequence: i as u64 + 1,
                    event,
                    score,
                };
                let json = serde_json::to_string(&record)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(out, "{}", json)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
