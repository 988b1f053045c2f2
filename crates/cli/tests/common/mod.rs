// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;

/// Lines printed for A taking every point from love
pub const A_STRAIGHT_WIN: &str = "Player A : 15 / Player B : 0\n\
                                  Player A : 30 / Player B : 0\n\
                                  Player A : 40 / Player B : 0\n\
                                  Player A wins the game\n";

/// Lines printed for B taking every point from love
pub const B_STRAIGHT_WIN: &str = "Player A : 0 / Player B : 15\n\
                                  Player A : 0 / Player B : 30\n\
                                  Player A : 0 / Player B : 40\n\
                                  Player B wins the game\n";

/// The binary under test, with logging pinned so stderr is predictable
pub fn deuce() -> Command {
    let mut cmd = Command::cargo_bin("deuce").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run with the given arguments and return stdout, asserting success
pub fn stdout_of(args: &[&str]) -> String {
    let output = deuce().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}
