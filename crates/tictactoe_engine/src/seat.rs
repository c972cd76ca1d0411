//! Who controls each mark.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Controller of a mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Seat {
    /// Moves come from the presentation layer.
    Human,
    /// Moves come from a [`MoveStrategy`](crate::MoveStrategy).
    Computer,
}

/// Seat assignment for both marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats {
    /// Seat playing X.
    pub x: Seat,
    /// Seat playing O.
    pub o: Seat,
}

impl Seats {
    /// Creates a seat assignment.
    pub fn new(x: Seat, o: Seat) -> Self {
        Self { x, o }
    }

    /// Seat controlling `mark`.
    pub fn seat(&self, mark: Mark) -> Seat {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

/// Human plays X and moves first; the computer plays O.
impl Default for Seats {
    fn default() -> Self {
        Self::new(Seat::Human, Seat::Computer)
    }
}
