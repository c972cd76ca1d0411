//! Tic-tac-toe engine - board, heuristic opponent and match controller
//!
//! # Architecture
//!
//! - **Board**: grid of squares, placement, win and full detection
//! - **Opponent**: fixed priority list of rules picking the computer's cell
//! - **Match controller**: turn sequencing, score tally, game lifecycle
//! - **Presentation**: trait implemented by whatever draws the game
//!
//! Win detection reads only the top-left 3x3 area, even when the grid is
//! configured larger.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Cell, Mark, Opponent, ScriptedRandom};
//!
//! let mut board: Board = "XX-/---/---".parse().unwrap();
//! let mut opponent = Opponent::new(ScriptedRandom::default());
//!
//! let choice = opponent.play(&mut board, Mark::O).unwrap();
//! assert_eq!(choice.cell, Cell::new(0, 2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod controller;
mod opponent;
mod phases;
mod presentation;
mod score;
mod seat;
mod selection;
mod types;

pub mod rules;

// Crate-level exports - Board
pub use board::{Board, BoardParseError, MIN_DIMENSION};
pub use types::{Cell, Mark, Square};

// Crate-level exports - Opponent
pub use opponent::{
    Choice, GameRng, Line, MoveStrategy, Opponent, RandomSource, Rule, ScriptedRandom,
    find_completion, heuristic_move,
};

// Crate-level exports - Match
pub use controller::{MatchController, MatchHandle};
pub use phases::{GameOutcome, Phase};
pub use presentation::Presentation;
pub use score::ScoreTally;
pub use seat::{Seat, Seats};
pub use selection::SelectionSlot;

// Crate-level exports - Configuration
pub use config::{ConfigError, GRID_SIZE_RANGE, MatchConfig, POLL_INTERVAL_RANGE};
