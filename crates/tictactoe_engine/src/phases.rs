//! Match controller states and game outcomes.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A mark completed a line.
    Won(Mark),
    /// The grid filled up with no line completed.
    Tied,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Won(mark) => Some(*mark),
            GameOutcome::Tied => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, GameOutcome::Tied)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Won(mark) => write!(f, "Player {} Wins!", mark),
            GameOutcome::Tied => write!(f, "The game was a tie!"),
        }
    }
}

/// Where the match controller is within the current game.
///
/// `GameWon` and `GameTied` are absorbing until the next game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No game has started yet.
    #[default]
    NotStarted,
    /// Waiting for the human seat to select a cell.
    AwaitingHumanMove,
    /// The human's mark was placed; win/full check pending.
    HumanMoved,
    /// The computer seat is choosing a cell.
    AwaitingComputerMove,
    /// The computer's mark was placed; win/full check pending.
    ComputerMoved,
    /// The given mark completed a line.
    GameWon(Mark),
    /// The grid is full with no winner.
    GameTied,
    /// The match was stopped before the game finished.
    Abandoned,
}

impl Phase {
    /// True once the current game has a result or was abandoned.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameWon(_) | Phase::GameTied | Phase::Abandoned)
    }
}

impl From<GameOutcome> for Phase {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Won(mark) => Phase::GameWon(mark),
            GameOutcome::Tied => Phase::GameTied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(GameOutcome::Won(Mark::X).to_string(), "Player X Wins!");
        assert_eq!(GameOutcome::Won(Mark::O).to_string(), "Player O Wins!");
        assert_eq!(GameOutcome::Tied.to_string(), "The game was a tie!");
    }

    #[test]
    fn test_terminal_phases() {
        assert!(Phase::from(GameOutcome::Tied).is_terminal());
        assert!(Phase::GameWon(Mark::O).is_terminal());
        assert!(!Phase::AwaitingHumanMove.is_terminal());
    }
}
