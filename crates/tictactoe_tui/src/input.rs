//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_engine::Cell;

/// Moves the cursor one square for an arrow key, staying on a `rows` x `cols` grid.
pub fn move_cursor(cursor: Cell, key: KeyCode, rows: usize, cols: usize) -> Cell {
    let Cell { row, col } = cursor;

    match key {
        KeyCode::Up => Cell::new(row.saturating_sub(1), col),
        KeyCode::Down if row + 1 < rows => Cell::new(row + 1, col),
        KeyCode::Left => Cell::new(row, col.saturating_sub(1)),
        KeyCode::Right if col + 1 < cols => Cell::new(row, col + 1),
        // No change for other keys or edge cases
        _ => cursor,
    }
}

/// Maps digits 1-9 onto a 3x3 grid, left to right and top to bottom.
pub fn digit_cell(c: char) -> Option<Cell> {
    let digit = c.to_digit(10)? as usize;
    (1..=9)
        .contains(&digit)
        .then(|| Cell::new((digit - 1) / 3, (digit - 1) % 3))
}
