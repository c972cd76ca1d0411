//! Tests for board placement, turn order and win/full detection.

use strum::IntoEnumIterator;
use tictactoe_engine::{Board, Cell, Mark, Square, rules::LINES};

#[test]
fn test_place_empty_square() {
    let mut board = Board::new(3, 3);
    assert!(board.place(Cell::new(1, 1), Mark::X));
    assert_eq!(board.get(Cell::new(1, 1)), Some(Square::Occupied(Mark::X)));
}

#[test]
fn test_place_never_overwrites() {
    let mut board: Board = "XO-/-X-/O--".parse().unwrap();
    let before = board.clone();

    let occupied: Vec<Cell> = board
        .cells()
        .filter(|(_, sq)| !sq.is_empty())
        .map(|(cell, _)| cell)
        .collect();
    assert_eq!(occupied.len(), 4);

    for cell in occupied {
        for mark in [Mark::X, Mark::O] {
            assert!(!board.place(cell, mark), "{cell} was overwritten");
        }
    }
    assert_eq!(board, before);
}

#[test]
fn test_place_out_of_range_rejected() {
    let mut board = Board::new(3, 3);
    let before = board.clone();
    assert!(!board.place(Cell::new(3, 0), Mark::X));
    assert!(!board.place(Cell::new(0, 3), Mark::O));
    assert!(!board.place(Cell::new(usize::MAX, 1), Mark::O));
    assert_eq!(board, before);
}

#[test]
fn test_larger_grid_accepts_outer_cells() {
    let mut board = Board::new(5, 4);
    assert!(board.place(Cell::new(4, 3), Mark::O));
    assert!(!board.place(Cell::new(4, 4), Mark::O));
}

#[test]
fn test_players_alternate() {
    let mut board = Board::new(3, 3);
    assert_eq!(board.current_player(), Mark::X);
    board.toggle_player();
    assert_eq!(board.current_player(), Mark::O);
    board.toggle_player();
    assert_eq!(board.current_player(), Mark::X);
}

#[test]
fn test_place_current_uses_turn_mark() {
    let mut board = Board::new(3, 3);
    board.toggle_player();
    assert!(board.place_current(Cell::new(0, 0)));
    assert_eq!(board.get(Cell::new(0, 0)), Some(Square::Occupied(Mark::O)));
}

#[test]
fn test_reset_clears_and_returns_turn_to_x() {
    let mut board: Board = "XO-/-X-/O--".parse().unwrap();
    board.toggle_player();
    board.reset(3, 3);
    assert!(board.squares().iter().all(|sq| sq.is_empty()));
    assert_eq!(board.current_player(), Mark::X);
}

#[test]
fn test_every_line_wins_for_both_marks() {
    for line in LINES {
        for mark in Mark::iter() {
            let mut board = Board::new(3, 3);
            for cell in line {
                assert!(board.place(cell, mark));
            }
            assert!(board.check_win(), "{line:?} should win for {mark}");
            assert_eq!(board.winner(), Some(mark));
        }
    }
}

#[test]
fn test_mixed_line_does_not_win() {
    let board: Board = "XXO/---/---".parse().unwrap();
    assert!(!board.check_win());
}

#[test]
fn test_tie_board() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(board.is_full());
    assert!(!board.check_win());
}

#[test]
fn test_win_detection_fixed_to_three_by_three() {
    // A full row outside the top-left 3x3 area never counts.
    let board: Board = "----/----/----/OOOO".parse().unwrap();
    assert!(!board.check_win());

    // A line inside it still does.
    let board: Board = "X---/X---/X---/----".parse().unwrap();
    assert_eq!(board.winner(), Some(Mark::X));
}

#[test]
fn test_display_snapshot() {
    let mut board = Board::new(3, 3);
    board.place(Cell::new(0, 0), Mark::X);
    board.place(Cell::new(2, 1), Mark::O);
    assert_eq!(board.to_string(), "X--\n---\n-O-");
}
