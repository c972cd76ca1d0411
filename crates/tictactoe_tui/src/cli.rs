//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Seat;

/// Tic-tac-toe against a rule-based computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Match configuration file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for the opponent's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Who plays X (human or computer)
    #[arg(long)]
    pub x_seat: Option<Seat>,

    /// Who plays O (human or computer)
    #[arg(long)]
    pub o_seat: Option<Seat>,

    /// File receiving log output
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}
