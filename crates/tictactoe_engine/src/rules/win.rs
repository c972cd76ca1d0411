//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Square};
use tracing::instrument;

const fn cell(row: usize, col: usize) -> Cell {
    Cell { row, col }
}

/// Every line of three on the 3x3 play area: rows, columns, then diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [cell(0, 0), cell(0, 1), cell(0, 2)],
    [cell(1, 0), cell(1, 1), cell(1, 2)],
    [cell(2, 0), cell(2, 1), cell(2, 2)],
    // Columns
    [cell(0, 0), cell(1, 0), cell(2, 0)],
    [cell(0, 1), cell(1, 1), cell(2, 1)],
    [cell(0, 2), cell(1, 2), cell(2, 2)],
    // Diagonals
    [cell(0, 0), cell(1, 1), cell(2, 2)],
    [cell(0, 2), cell(1, 1), cell(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark holding three identical squares on any line of the
/// 3x3 play area. Cells outside that area never take part in a win.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a).unwrap_or_default();
        if sq != Square::Empty
            && Some(sq) == board.get(b)
            && Some(sq) == board.get(c)
        {
            return sq.mark();
        }
    }

    None
}
