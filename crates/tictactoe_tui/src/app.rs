//! Application state and key handling.

use crate::input::{digit_cell, move_cursor};
use crate::presenter::UiEvent;
use crossterm::event::KeyCode;
use tictactoe_engine::{Board, Cell, GameOutcome, Mark, MatchHandle, ScoreTally, Seat, Seats};
use tokio::sync::oneshot;
use tracing::{debug, info};

/// Mark that moves next on a board the controller just rendered.
///
/// The controller renders after a reset, with X to move, and after each
/// placement, before the turn passes.
pub fn next_to_move(board: &Board) -> Mark {
    if board.squares().iter().all(|sq| sq.is_empty()) {
        board.current_player()
    } else {
        board.current_player().opponent()
    }
}

/// Game result waiting for a play-again answer.
struct PlayAgainPrompt {
    outcome: GameOutcome,
    reply: oneshot::Sender<bool>,
}

/// Main application state.
pub struct App {
    handle: MatchHandle,
    seats: Seats,
    board: Board,
    score: ScoreTally,
    cursor: Cell,
    status_message: String,
    prompt: Option<PlayAgainPrompt>,
    confirm_quit: bool,
    should_exit: bool,
}

impl App {
    /// Creates the UI state for a match on a `rows` x `cols` grid.
    pub fn new(handle: MatchHandle, seats: Seats, rows: usize, cols: usize) -> Self {
        Self {
            handle,
            seats,
            board: Board::new(rows, cols),
            score: ScoreTally::new(),
            cursor: Cell::CENTER,
            status_message: "Waiting for game to start...".to_string(),
            prompt: None,
            confirm_quit: false,
            should_exit: false,
        }
    }

    /// Latest board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Latest score.
    pub fn score(&self) -> ScoreTally {
        self.score
    }

    /// Hovered cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Outcome of the game waiting for a play-again answer.
    pub fn pending_outcome(&self) -> Option<GameOutcome> {
        self.prompt.as_ref().map(|p| p.outcome)
    }

    /// Whether the user confirmed quitting.
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Whether a game is in progress and a human holds the next move.
    pub fn human_to_move(&self) -> bool {
        self.prompt.is_none()
            && !self.board.check_win()
            && !self.board.is_full()
            && self.seats.seat(next_to_move(&self.board)) == Seat::Human
    }

    /// Mark previewed on the hovered cell, if a human could play there.
    pub fn preview(&self) -> Option<Mark> {
        (self.human_to_move() && self.board.is_empty(self.cursor))
            .then(|| next_to_move(&self.board))
    }

    /// Applies a message from the game thread.
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Board(board) => {
                self.board = board;
                self.clamp_cursor();
                if !self.board.check_win() && !self.board.is_full() {
                    let mark = next_to_move(&self.board);
                    self.status_message = match self.seats.seat(mark) {
                        Seat::Human => format!("Player {}'s turn", mark),
                        Seat::Computer => format!("Player {} is thinking...", mark),
                    };
                }
            }
            UiEvent::Score(score) => {
                debug!(%score, "Score updated");
                self.score = score;
            }
            UiEvent::Outcome { outcome, reply } => {
                info!(%outcome, "Game over");
                self.status_message = format!("{} Play again? (y/n)", outcome);
                self.prompt = Some(PlayAgainPrompt { outcome, reply });
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.confirm_quit {
            self.confirm_quit = false;
            if matches!(key, KeyCode::Char('y') | KeyCode::Char('Y')) {
                self.quit();
            } else {
                self.status_message = "Quit cancelled".to_string();
            }
            return;
        }

        if self.prompt.is_some() {
            match key {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.answer(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
                    self.answer(false)
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.confirm_quit = true;
                self.status_message = "Quit? (y/n)".to_string();
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key, self.board.rows(), self.board.cols());
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) if self.board.rows() == 3 && self.board.cols() == 3 => {
                if let Some(cell) = digit_cell(c) {
                    self.cursor = cell;
                    self.select(cell);
                }
            }
            _ => {}
        }
    }

    /// Stops the match and declines any pending prompt.
    pub fn quit(&mut self) {
        info!("User quit");
        self.handle.stop();
        if self.prompt.is_some() {
            self.answer(false);
        }
        self.should_exit = true;
    }

    fn select(&mut self, cell: Cell) {
        if !self.human_to_move() {
            debug!(%cell, "Selection ignored outside a human turn");
            return;
        }
        if !self.board.is_empty(cell) {
            self.status_message = format!("Square {} is taken", cell);
            return;
        }
        debug!(%cell, "Forwarding selection");
        self.handle.notify_selection(cell.row, cell.col);
    }

    fn answer(&mut self, again: bool) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        debug!(again, "Answering play-again prompt");
        // The game thread may already be gone.
        let _ = prompt.reply.send(again);
        self.status_message = if again {
            "New game".to_string()
        } else {
            "Thanks for playing!".to_string()
        };
    }

    fn clamp_cursor(&mut self) {
        self.cursor = Cell::new(
            self.cursor.row.min(self.board.rows() - 1),
            self.cursor.col.min(self.board.cols() - 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{MatchConfig, MatchController, Opponent, Presentation};

    /// Presentation that ignores everything; only the controller's handle is used.
    struct Silent;

    impl Presentation for Silent {
        fn render_board(&mut self, _board: &Board) {}
        fn render_score(&mut self, _tally: &ScoreTally) {}
        fn report_outcome(&mut self, _outcome: GameOutcome) -> bool {
            false
        }
    }

    fn handle() -> MatchHandle {
        MatchController::new(&MatchConfig::default(), Opponent::seeded(Some(1)), Silent).handle()
    }

    fn app() -> App {
        App::new(handle(), Seats::default(), 3, 3)
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_next_to_move() {
        assert_eq!(next_to_move(&Board::default()), Mark::X);
        // X just moved and the turn has not passed yet.
        assert_eq!(next_to_move(&board("X--/---/---")), Mark::O);
    }

    #[test]
    fn test_board_event_sets_turn_status() {
        let mut app = app();
        app.handle_event(UiEvent::Board(Board::default()));
        assert_eq!(app.status_message(), "Player X's turn");
        assert!(app.human_to_move());

        app.handle_event(UiEvent::Board(board("X--/---/---")));
        assert_eq!(app.status_message(), "Player O is thinking...");
        assert!(!app.human_to_move());
    }

    #[test]
    fn test_preview_only_on_empty_hovered_cell() {
        let mut app = app();
        app.handle_event(UiEvent::Board(Board::default()));
        assert_eq!(app.preview(), Some(Mark::X));

        let mut position = board("X--/-O-/---");
        position.toggle_player();
        app.handle_event(UiEvent::Board(position));
        // O just moved and X is to play, but the hovered center is taken.
        assert_eq!(app.preview(), None);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.preview(), Some(Mark::X));
    }

    #[test]
    fn test_outcome_prompt_answered() {
        let mut app = app();
        let (reply, mut answer) = oneshot::channel();
        app.handle_event(UiEvent::Outcome {
            outcome: GameOutcome::Won(Mark::X),
            reply,
        });
        assert_eq!(app.pending_outcome(), Some(GameOutcome::Won(Mark::X)));
        assert_eq!(app.status_message(), "Player X Wins! Play again? (y/n)");

        app.handle_key(KeyCode::Char('y'));
        assert_eq!(answer.try_recv(), Ok(true));
        assert_eq!(app.pending_outcome(), None);
    }

    #[test]
    fn test_quit_needs_confirmation() {
        let mut app = app();
        let handle = app.handle.clone();

        app.handle_key(KeyCode::Char('q'));
        assert!(!app.should_exit());
        app.handle_key(KeyCode::Char('n'));
        assert!(!app.should_exit());
        assert!(handle.is_playing());

        app.handle_key(KeyCode::Char('q'));
        app.handle_key(KeyCode::Char('y'));
        assert!(app.should_exit());
        assert!(!handle.is_playing());
    }

    #[test]
    fn test_quit_declines_pending_prompt() {
        let mut app = app();
        let (reply, mut answer) = oneshot::channel();
        app.handle_event(UiEvent::Outcome {
            outcome: GameOutcome::Tied,
            reply,
        });
        app.quit();
        assert_eq!(answer.try_recv(), Ok(false));
    }

    #[test]
    fn test_cursor_clamped_to_smaller_board() {
        let mut app = App::new(handle(), Seats::default(), 5, 5);
        app.cursor = Cell::new(4, 4);
        app.handle_event(UiEvent::Board(Board::new(3, 3)));
        assert_eq!(app.cursor(), Cell::new(2, 2));
    }

    #[test]
    fn test_taken_square_reported() {
        let mut app = app();
        let mut position = board("X--/-O-/---");
        position.toggle_player();
        app.handle_event(UiEvent::Board(position));
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.status_message(), "Square (0, 0) is taken");
    }
}
