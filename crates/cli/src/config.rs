// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved runtime configuration

use crate::output::OutputFormat;

/// Sequence played when none is given
pub const DEFAULT_SEQUENCE: &str = "ABABAA";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration after applying defaults and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Normalized point sequence (trimmed, uppercased)
    pub sequence: String,
    pub format: OutputFormat,
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequence: DEFAULT_SEQUENCE.to_string(),
            format: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Build from parsed arguments and the `RUST_LOG` value, if any
    pub fn resolve(sequence: Option<&str>, format: OutputFormat, rust_log: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            sequence: sequence.map(normalize).unwrap_or(defaults.sequence),
            format,
            log_filter: rust_log
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

/// Trim surrounding whitespace and uppercase
pub fn normalize(sequence: &str) -> String {
    sequence.trim().to_uppercase()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
