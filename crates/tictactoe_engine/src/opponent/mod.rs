//! Rule-based computer opponent.
//!
//! The opponent walks a fixed priority list and plays the first rule that
//! applies:
//!
//! 1. complete a line of its own mark,
//! 2. block a line of the opposing mark,
//! 3. take the center,
//! 4. take a corner (top-left, top-right, bottom-left, bottom-right),
//! 5. sample random cells until an empty one turns up.
//!
//! It never looks further ahead than the current move.

mod lines;
mod random;

pub use lines::{Line, find_completion};
pub use random::{GameRng, RandomSource, ScriptedRandom};

use crate::{Board, Cell, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Sampling attempts before the random fallback scans for an empty cell.
const MAX_RANDOM_SAMPLES: usize = 10_000;

/// Rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rule {
    /// Completes a line of the mover's own mark.
    #[display("offensive play on {}", _0)]
    Complete(Line),
    /// Blocks a line of the opposing mark.
    #[display("block on {}", _0)]
    Block(Line),
    /// Takes the center.
    #[display("center")]
    Center,
    /// Takes a free corner.
    #[display("corner")]
    Corner,
    /// Random fallback.
    #[display("random roll")]
    Random,
}

/// Cell picked by a strategy and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Choice {
    /// Cell to play.
    pub cell: Cell,
    /// Rule that selected it.
    pub rule: Rule,
}

/// Picks the cell a computer-controlled seat plays.
pub trait MoveStrategy {
    /// Chooses a cell for `mark`, or `None` when no move is possible.
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Choice>;
}

impl<S: MoveStrategy + ?Sized> MoveStrategy for Box<S> {
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Choice> {
        (**self).choose(board, mark)
    }
}

/// Deterministic part of the heuristic: rules 1 to 4.
#[instrument(skip(board), fields(board = %board))]
pub fn heuristic_move(board: &Board, mark: Mark) -> Option<Choice> {
    if let Some((cell, line)) = find_completion(board, mark) {
        return Some(Choice::new(cell, Rule::Complete(line)));
    }

    if let Some((cell, line)) = find_completion(board, mark.opponent()) {
        return Some(Choice::new(cell, Rule::Block(line)));
    }

    if board.is_empty(Cell::CENTER) {
        return Some(Choice::new(Cell::CENTER, Rule::Center));
    }

    Cell::CORNERS
        .into_iter()
        .find(|&corner| board.is_empty(corner))
        .map(|corner| Choice::new(corner, Rule::Corner))
}

/// Heuristic computer opponent.
#[derive(Debug, Clone)]
pub struct Opponent<R = GameRng> {
    rng: R,
}

impl<R: RandomSource> Opponent<R> {
    /// Creates an opponent drawing its fallback moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Random source used for the fallback move.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Selects a cell for `mark` without touching the board.
    ///
    /// Returns `None` only when the board is full or already won.
    #[instrument(skip(self, board))]
    pub fn select(&mut self, board: &Board, mark: Mark) -> Option<Choice> {
        let choice = heuristic_move(board, mark).or_else(|| self.random_move(board));
        if let Some(choice) = &choice {
            debug!(cell = %choice.cell, rule = %choice.rule, "Opponent selected cell");
        }
        choice
    }

    /// Selects a cell for `mark` and places it through [`Board::place`].
    #[instrument(skip(self, board))]
    pub fn play(&mut self, board: &mut Board, mark: Mark) -> Option<Choice> {
        let choice = self.select(board, mark)?;
        board.place(choice.cell, mark).then_some(choice)
    }

    fn random_move(&mut self, board: &Board) -> Option<Choice> {
        if board.is_full() || board.check_win() {
            return None;
        }

        for _ in 0..MAX_RANDOM_SAMPLES {
            let cell = Cell::new(
                self.rng.next_index(board.rows()),
                self.rng.next_index(board.cols()),
            );
            if board.is_empty(cell) {
                return Some(Choice::new(cell, Rule::Random));
            }
            debug!(%cell, "Random roll hit an occupied square");
        }

        // Reachable only with a degenerate random source.
        warn!("Random source never produced an empty cell, taking the first one");
        board
            .cells()
            .find(|(_, sq)| sq.is_empty())
            .map(|(cell, _)| Choice::new(cell, Rule::Random))
    }
}

impl Opponent<GameRng> {
    /// Opponent seeded from `seed`, or from entropy when `None`.
    pub fn seeded(seed: Option<u64>) -> Self {
        Self::new(seed.map_or_else(GameRng::from_entropy, GameRng::new))
    }
}

impl<R: RandomSource> MoveStrategy for Opponent<R> {
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Choice> {
        self.select(board, mark)
    }
}
