//! Two-in-a-line scans over the 3x3 play area.
//!
//! Each scan looks for two squares holding `mark` with the third square of
//! the same line still empty. The scan order is fixed so a given board
//! always yields the same cell.

use crate::{Board, Cell, Mark, Square};
use serde::{Deserialize, Serialize};

/// Line on which a completion or block was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Row with the given index.
    #[display("row {}", _0)]
    Row(usize),
    /// Column with the given index.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

const TOP_LEFT: Cell = Cell { row: 0, col: 0 };
const TOP_RIGHT: Cell = Cell { row: 0, col: 2 };
const BOTTOM_LEFT: Cell = Cell { row: 2, col: 0 };
const BOTTOM_RIGHT: Cell = Cell { row: 2, col: 2 };

/// Finds the first line `mark` can complete: rows, then columns, then diagonals.
pub fn find_completion(board: &Board, mark: Mark) -> Option<(Cell, Line)> {
    scan_rows(board, mark)
        .or_else(|| scan_columns(board, mark))
        .or_else(|| scan_diagonals(board, mark))
}

fn holds(board: &Board, cell: Cell, mark: Mark) -> bool {
    board.get(cell) == Some(Square::Occupied(mark))
}

/// Checks one line `[a, b, c]`, trying the missing square at c, then b, then a.
fn complete_line(board: &Board, mark: Mark, [a, b, c]: [Cell; 3]) -> Option<Cell> {
    [(a, b, c), (a, c, b), (b, c, a)]
        .into_iter()
        .find(|&(p, q, gap)| holds(board, p, mark) && holds(board, q, mark) && board.is_empty(gap))
        .map(|(_, _, gap)| gap)
}

fn scan_rows(board: &Board, mark: Mark) -> Option<(Cell, Line)> {
    (0..3).find_map(|r| {
        let line = [Cell::new(r, 0), Cell::new(r, 1), Cell::new(r, 2)];
        complete_line(board, mark, line).map(|cell| (cell, Line::Row(r)))
    })
}

fn scan_columns(board: &Board, mark: Mark) -> Option<(Cell, Line)> {
    (0..3).find_map(|c| {
        let line = [Cell::new(0, c), Cell::new(1, c), Cell::new(2, c)];
        complete_line(board, mark, line).map(|cell| (cell, Line::Column(c)))
    })
}

/// Center first (via either diagonal), then top-left, bottom-right,
/// top-right and bottom-left.
fn scan_diagonals(board: &Board, mark: Mark) -> Option<(Cell, Line)> {
    let center = Cell::CENTER;

    if board.is_empty(center) {
        if holds(board, TOP_LEFT, mark) && holds(board, BOTTOM_RIGHT, mark) {
            return Some((center, Line::MainDiagonal));
        }
        if holds(board, BOTTOM_LEFT, mark) && holds(board, TOP_RIGHT, mark) {
            return Some((center, Line::AntiDiagonal));
        }
    }

    if !holds(board, center, mark) {
        return None;
    }

    [
        (BOTTOM_RIGHT, TOP_LEFT, Line::MainDiagonal),
        (TOP_LEFT, BOTTOM_RIGHT, Line::MainDiagonal),
        (BOTTOM_LEFT, TOP_RIGHT, Line::AntiDiagonal),
        (TOP_RIGHT, BOTTOM_LEFT, Line::AntiDiagonal),
    ]
    .into_iter()
    .find(|&(partner, gap, _)| holds(board, partner, mark) && board.is_empty(gap))
    .map(|(_, gap, line)| (gap, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_row_gap_order() {
        assert_eq!(
            find_completion(&board("X-X/---/---"), Mark::X),
            Some((Cell::new(0, 1), Line::Row(0)))
        );
        assert_eq!(
            find_completion(&board("-XX/---/---"), Mark::X),
            Some((Cell::new(0, 0), Line::Row(0)))
        );
    }

    #[test]
    fn test_rows_before_columns() {
        // Column 0 and row 2 are both completable; the row wins.
        assert_eq!(
            find_completion(&board("O--/O--/-OO"), Mark::O),
            Some((Cell::new(2, 0), Line::Row(2)))
        );
    }

    #[test]
    fn test_column_completion() {
        assert_eq!(
            find_completion(&board("-O-/---/-O-"), Mark::O),
            Some((Cell::new(1, 1), Line::Column(1)))
        );
    }

    #[test]
    fn test_center_via_anti_diagonal() {
        assert_eq!(
            find_completion(&board("--X/---/X--"), Mark::X),
            Some((Cell::CENTER, Line::AntiDiagonal))
        );
    }

    #[test]
    fn test_diagonal_corner_order() {
        // Center plus bottom-right and bottom-left: top-left comes first.
        assert_eq!(
            find_completion(&board("---/-X-/XOX"), Mark::X),
            Some((Cell::new(0, 0), Line::MainDiagonal))
        );
        // Center plus top-left: bottom-right.
        assert_eq!(
            find_completion(&board("X--/-X-/---"), Mark::X),
            Some((Cell::new(2, 2), Line::MainDiagonal))
        );
        // Center plus bottom-left: top-right.
        assert_eq!(
            find_completion(&board("---/-X-/X--"), Mark::X),
            Some((Cell::new(0, 2), Line::AntiDiagonal))
        );
        // Center plus top-right: bottom-left.
        assert_eq!(
            find_completion(&board("--X/-X-/---"), Mark::X),
            Some((Cell::new(2, 0), Line::AntiDiagonal))
        );
    }

    #[test]
    fn test_blocked_line_ignored() {
        assert_eq!(find_completion(&board("XXO/---/---"), Mark::X), None);
    }
}
