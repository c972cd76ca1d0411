//! Contract between the match controller and whatever draws the game.

use crate::{Board, GameOutcome, ScoreTally};

/// Outbound half of the presentation boundary.
///
/// Inbound selections travel through [`MatchHandle`](crate::MatchHandle)
/// instead, so a presentation never needs a reference back into the
/// controller.
pub trait Presentation {
    /// Called after every change to the board, including each reset.
    fn render_board(&mut self, board: &Board);

    /// Called once each game concludes, after the tally is updated.
    fn render_score(&mut self, tally: &ScoreTally);

    /// Called once per game end. Returns whether to play another game.
    fn report_outcome(&mut self, outcome: GameOutcome) -> bool;
}

impl<P: Presentation + ?Sized> Presentation for &mut P {
    fn render_board(&mut self, board: &Board) {
        (**self).render_board(board)
    }

    fn render_score(&mut self, tally: &ScoreTally) {
        (**self).render_score(tally)
    }

    fn report_outcome(&mut self, outcome: GameOutcome) -> bool {
        (**self).report_outcome(outcome)
    }
}
