//! Grid of squares plus the mark whose turn it is.

use crate::rules;
use crate::{Cell, Mark, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument, trace};

/// Smallest grid the 3x3 rules can be evaluated on.
pub const MIN_DIMENSION: usize = 3;

/// Tic-tac-toe board of `rows` x `cols` squares.
///
/// [`Board::place`] is the only way a live board changes during a game, so
/// an occupied square never goes back to empty or changes owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
    current: Mark,
}

impl Board {
    /// Creates an empty board with X to move.
    ///
    /// Dimensions below 3 are raised to 3.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(MIN_DIMENSION);
        let cols = cols.max(MIN_DIMENSION);
        Self {
            rows,
            cols,
            squares: vec![Square::Empty; rows * cols],
            current: Mark::X,
        }
    }

    /// Clears every square and hands the turn back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self, rows: usize, cols: usize) {
        *self = Self::new(rows, cols);
        debug!(rows = self.rows, cols = self.cols, "Board reset");
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns the square at `cell`, or `None` when it lies off the grid.
    pub fn get(&self, cell: Cell) -> Option<Square> {
        self.index(cell).map(|i| self.squares[i])
    }

    /// Returns true if `cell` is on the grid and unoccupied.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Iterates over every cell with its square, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Square)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .map(|(i, sq)| (Cell::new(i / self.cols, i % self.cols), *sq))
    }

    /// Writes `mark` into `cell`.
    ///
    /// Returns false and leaves the board untouched when the cell is off the
    /// grid or already occupied.
    #[instrument(skip_all, fields(cell = %cell, mark = %mark))]
    pub fn place(&mut self, cell: Cell, mark: Mark) -> bool {
        match self.index(cell) {
            Some(i) if self.squares[i] == Square::Empty => {
                self.squares[i] = Square::Occupied(mark);
                trace!("Mark placed");
                true
            }
            Some(_) => {
                trace!("Square already occupied");
                false
            }
            None => {
                trace!("Cell off the grid");
                false
            }
        }
    }

    /// Places the mark of the player whose turn it is.
    pub fn place_current(&mut self, cell: Cell) -> bool {
        self.place(cell, self.current)
    }

    /// Mark whose turn it is.
    pub fn current_player(&self) -> Mark {
        self.current
    }

    /// Passes the turn to the other mark.
    pub fn toggle_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Returns the mark holding a full line of the 3x3 play area.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// True if any line of the 3x3 play area is won.
    pub fn check_win(&self) -> bool {
        self.winner().is_some()
    }

    /// True if no empty square remains anywhere on the grid.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }
}

/// Unchecked serialized form of a [`Board`].
#[derive(Deserialize)]
struct BoardSnapshot {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
    current: Mark,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = BoardParseError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let BoardSnapshot {
            rows,
            cols,
            squares,
            current,
        } = snapshot;

        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(BoardParseError::new(format!(
                "Board must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {rows}x{cols}"
            )));
        }
        if rows.checked_mul(cols) != Some(squares.len()) {
            return Err(BoardParseError::new(format!(
                "{rows}x{cols} board holds {} squares",
                squares.len()
            )));
        }

        Ok(Self {
            rows,
            cols,
            squares,
            current,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(MIN_DIMENSION, MIN_DIMENSION)
    }
}

/// Rows of `X`, `O` and `-`, one line per row.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for sq in row {
                write!(f, "{}", sq.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board snapshot.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses rows of `X`, `O` and `-` separated by `/` or newlines.
///
/// The parsed board has X to move.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();

        let cols = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if rows.len() < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(BoardParseError::new(format!(
                "Board must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {}x{}",
                rows.len(),
                cols
            )));
        }

        let mut squares = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != cols {
                return Err(BoardParseError::new(format!(
                    "Row {r} has {} squares, expected {cols}",
                    row.chars().count()
                )));
            }
            for ch in row.chars() {
                let sq = match ch {
                    '-' | '.' => Square::Empty,
                    'X' | 'x' => Square::Occupied(Mark::X),
                    'O' | 'o' => Square::Occupied(Mark::O),
                    other => {
                        return Err(BoardParseError::new(format!(
                            "Unexpected symbol {other:?} in row {r}"
                        )));
                    }
                };
                squares.push(sq);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            squares,
            current: Mark::X,
        })
    }
}
