//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Win detection only ever
//! reads the top-left 3x3 area, whatever size the grid is.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
