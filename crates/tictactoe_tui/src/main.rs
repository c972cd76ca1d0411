//! Tic-tac-toe in the terminal against a rule-based opponent.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod game_loop;
mod input;
mod presenter;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use tictactoe_engine::{MatchConfig, Seats};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = load_config(&cli)?;
    info!(?config, "Configuration resolved");

    let tally = game_loop::run_tui(config).await?;
    println!("Thanks for playing! {}", tally);
    Ok(())
}

/// Logs to a file so output does not interfere with the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_engine=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Reads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<MatchConfig> {
    let config = MatchConfig::load_or_default(&cli.config)?;

    let seats = config.seats();
    let seats = Seats::new(cli.x_seat.unwrap_or(seats.x), cli.o_seat.unwrap_or(seats.o));
    let seed = cli.seed.or(*config.seed());

    Ok(config.with_seats(seats).with_seed(seed))
}
