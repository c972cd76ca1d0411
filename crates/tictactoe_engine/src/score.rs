//! Running score of a match.

use crate::{GameOutcome, Mark};
use serde::{Deserialize, Serialize};

/// Wins per mark and ties, kept for the life of the process.
///
/// Counters only ever go up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl ScoreTally {
    /// Empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Games that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    /// Counts one finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won(Mark::X) => self.x_wins += 1,
            GameOutcome::Won(Mark::O) => self.o_wins += 1,
            GameOutcome::Tied => self.ties += 1,
        }
    }

    /// Counters as `(x_wins, o_wins, ties)`.
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.x_wins, self.o_wins, self.ties)
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player X: {}    Player O: {}    Ties: {}",
            self.x_wins, self.o_wins, self.ties
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut tally = ScoreTally::new();
        tally.record(GameOutcome::Won(Mark::X));
        tally.record(GameOutcome::Won(Mark::X));
        tally.record(GameOutcome::Won(Mark::O));
        tally.record(GameOutcome::Tied);
        assert_eq!(tally.as_tuple(), (2, 1, 1));
        assert_eq!(tally.games(), 4);
    }

    #[test]
    fn test_score_label() {
        let mut tally = ScoreTally::new();
        tally.record(GameOutcome::Tied);
        assert_eq!(tally.to_string(), "Player X: 0    Player O: 0    Ties: 1");
    }
}
