//! Presentation that forwards controller output to the UI thread.

use tictactoe_engine::{Board, GameOutcome, Presentation, ScoreTally};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Message from the game thread to the UI.
#[derive(Debug)]
pub enum UiEvent {
    /// Board after a reset or a move.
    Board(Board),
    /// Score after a game ends.
    Score(ScoreTally),
    /// Game result; the UI answers whether to play again.
    Outcome {
        /// How the game ended.
        outcome: GameOutcome,
        /// Play-again answer.
        reply: oneshot::Sender<bool>,
    },
}

/// [`Presentation`] backed by an unbounded channel to the UI.
///
/// Runs on the game thread; `report_outcome` blocks until the UI answers.
pub struct TuiPresentation {
    events: mpsc::UnboundedSender<UiEvent>,
}

impl TuiPresentation {
    /// Creates a presentation sending to `events`.
    pub fn new(events: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self { events }
    }

    fn send(&self, event: UiEvent) -> bool {
        if self.events.send(event).is_err() {
            debug!("UI closed, dropping event");
            return false;
        }
        true
    }
}

impl Presentation for TuiPresentation {
    fn render_board(&mut self, board: &Board) {
        self.send(UiEvent::Board(board.clone()));
    }

    fn render_score(&mut self, tally: &ScoreTally) {
        self.send(UiEvent::Score(*tally));
    }

    fn report_outcome(&mut self, outcome: GameOutcome) -> bool {
        let (reply, answer) = oneshot::channel();
        if !self.send(UiEvent::Outcome { outcome, reply }) {
            return false;
        }

        match answer.blocking_recv() {
            Ok(again) => again,
            Err(_) => {
                warn!("Play-again prompt dropped without an answer");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tictactoe_engine::Mark;

    #[test]
    fn test_board_and_score_forwarded() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut presentation = TuiPresentation::new(tx);

        presentation.render_board(&Board::default());
        presentation.render_score(&ScoreTally::new());

        assert!(matches!(rx.try_recv(), Ok(UiEvent::Board(_))));
        assert!(matches!(rx.try_recv(), Ok(UiEvent::Score(_))));
    }

    #[test]
    fn test_outcome_answer_returned() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut presentation = TuiPresentation::new(tx);

        let ui = thread::spawn(move || match rx.blocking_recv() {
            Some(UiEvent::Outcome { outcome, reply }) => {
                reply.send(true).unwrap();
                outcome
            }
            other => panic!("unexpected event: {other:?}"),
        });

        assert!(presentation.report_outcome(GameOutcome::Won(Mark::O)));
        assert_eq!(ui.join().unwrap(), GameOutcome::Won(Mark::O));
    }

    #[test]
    fn test_closed_ui_declines() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut presentation = TuiPresentation::new(tx);
        assert!(!presentation.report_outcome(GameOutcome::Tied));
    }

    #[test]
    fn test_dropped_prompt_declines() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut presentation = TuiPresentation::new(tx);

        let ui = thread::spawn(move || drop(rx.blocking_recv()));

        assert!(!presentation.report_outcome(GameOutcome::Tied));
        ui.join().unwrap();
    }
}
