//! Tic-tac-toe against the computer in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use ttt_cli::{Cli, Console, Settings};
use ttt_engine::RngSource;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // stdout belongs to the game, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    let settings = Settings::load(&cli.config)
        .context("Failed to load settings")?
        .with_overrides(&cli);

    let rng = match settings.seed() {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            RngSource::seeded(*seed)
        }
        None => RngSource::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), settings.clear_screen());

    ttt_cli::run(&mut console, &settings, rng)
}
