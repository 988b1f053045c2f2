// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! deuce - narrate the score of a tennis game, point by point

mod config;
mod driver;
mod output;

use anyhow::Result;
use clap::Parser;
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "deuce",
    version,
    about = "Narrate the score of a tennis game, point by point"
)]
struct Cli {
    /// Points in order, one character each: A or B [default: ABABAA]
    sequence: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(
        cli.sequence.as_deref(),
        cli.format,
        std::env::var("RUST_LOG").ok(),
    );
    setup_logging(&config);

    tracing::debug!(sequence = %config.sequence, format = ?config.format, "starting");

    let mut session = driver::play_sequence(&config.sequence)?;

    let stdout = std::io::stdout();
    output::write_history(&mut stdout.lock(), &mut session, config.format)?;

    Ok(())
}

fn setup_logging(config: &Config) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
