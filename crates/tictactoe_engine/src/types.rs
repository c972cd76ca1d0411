//! Core domain types for tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Symbol owned by a player and written into a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square holds a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns true if the square holds no mark.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// Returns the mark in the square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Single-character form used by board snapshots.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '-',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// Address of a grid position, zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new, derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Cell {
    /// Center of the 3x3 play area.
    pub const CENTER: Cell = Cell { row: 1, col: 1 };

    /// Corners in the order the opponent prefers them.
    pub const CORNERS: [Cell; 4] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 2 },
    ];
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_round_trip() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_square_symbols() {
        assert_eq!(Square::Empty.symbol(), '-');
        assert_eq!(Square::Occupied(Mark::O).symbol(), 'O');
        assert_eq!(Square::Occupied(Mark::X).mark(), Some(Mark::X));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(0, 2).to_string(), "(0, 2)");
    }
}
