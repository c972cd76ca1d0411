//! Match controller: turn sequencing, scoring and game lifecycle.
//!
//! One game loop drives the board. Human turns wait on the
//! [`SelectionSlot`]; computer turns ask a [`MoveStrategy`]. Every
//! placement goes through [`Board::place`], and win/full is checked before
//! the turn passes, so nobody moves after a game is decided.

use crate::{
    Board, Cell, GameOutcome, Mark, MatchConfig, MoveStrategy, Opponent, Phase, Presentation,
    ScoreTally, Seat, Seats, SelectionSlot,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Rejected strategy choices tolerated before a computer turn gives up.
const MAX_STRATEGY_ATTEMPTS: usize = 16;

/// Presentation-side handle into a running match.
///
/// Cheap to clone and safe to move to another thread.
#[derive(Debug, Clone)]
pub struct MatchHandle {
    selections: Arc<SelectionSlot>,
    playing: Arc<AtomicBool>,
}

impl MatchHandle {
    fn new() -> Self {
        Self {
            selections: Arc::new(SelectionSlot::new()),
            playing: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Forwards a cell the user picked, replacing any unconsumed one.
    pub fn notify_selection(&self, row: usize, col: usize) {
        self.selections.notify(Cell::new(row, col));
    }

    /// Clears the play-continue flag.
    ///
    /// A human turn that is waiting abandons its game on the next poll.
    pub fn stop(&self) {
        debug!("Play-continue flag cleared");
        self.playing.store(false, Ordering::SeqCst);
    }

    /// Whether the match loop will start another game.
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

/// Runs games between two seats and keeps the score.
pub struct MatchController<P, S = Opponent> {
    board: Board,
    rows: usize,
    cols: usize,
    seats: Seats,
    strategy: S,
    presentation: P,
    handle: MatchHandle,
    tally: ScoreTally,
    phase: Phase,
    poll_interval: Duration,
    think_time: Duration,
}

impl<P, S> MatchController<P, S>
where
    P: Presentation,
    S: MoveStrategy,
{
    /// Creates a controller for a match described by `config`.
    #[instrument(skip_all, fields(rows = *config.rows(), cols = *config.cols()))]
    pub fn new(config: &MatchConfig, strategy: S, presentation: P) -> Self {
        Self {
            board: Board::new(*config.rows(), *config.cols()),
            rows: *config.rows(),
            cols: *config.cols(),
            seats: config.seats(),
            strategy,
            presentation,
            handle: MatchHandle::new(),
            tally: ScoreTally::new(),
            phase: Phase::NotStarted,
            poll_interval: config.poll_interval(),
            think_time: config.think_time(),
        }
    }

    /// Handle for the presentation layer.
    pub fn handle(&self) -> MatchHandle {
        self.handle.clone()
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Score so far.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// Where the controller is within the current game.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat assignment.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// The presentation this controller reports to.
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Mutable access to the presentation.
    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// Consumes the controller, returning its presentation.
    pub fn into_presentation(self) -> P {
        self.presentation
    }

    /// Plays games until the presentation declines another one or the
    /// match is stopped. Returns the final score.
    #[instrument(skip(self), fields(seats = ?self.seats))]
    pub fn run(&mut self) -> ScoreTally {
        info!("Match started");

        while self.handle.is_playing() {
            let Some(outcome) = self.play_game() else {
                break;
            };

            if !self.presentation.report_outcome(outcome) {
                self.handle.stop();
            }
        }

        info!(score = %self.tally, "Thanks for playing!");
        self.tally
    }

    /// Plays exactly one game from an empty board.
    ///
    /// Returns `None` when the match is stopped before the game ends; the
    /// tally is left untouched in that case.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Option<GameOutcome> {
        self.board.reset(self.rows, self.cols);
        // A click made between games must not land on the new board.
        self.handle.selections.clear();
        self.presentation.render_board(&self.board);

        let outcome = loop {
            if !self.handle.is_playing() {
                return self.abandon();
            }

            let mark = self.board.current_player();
            let moved = match self.seats.seat(mark) {
                Seat::Human => {
                    self.phase = Phase::AwaitingHumanMove;
                    if self.human_turn(mark).is_none() {
                        return self.abandon();
                    }
                    Phase::HumanMoved
                }
                Seat::Computer => {
                    self.phase = Phase::AwaitingComputerMove;
                    if self.computer_turn(mark).is_none() {
                        return self.abandon();
                    }
                    Phase::ComputerMoved
                }
            };
            self.phase = moved;
            self.presentation.render_board(&self.board);

            if let Some(winner) = self.board.winner() {
                break GameOutcome::Won(winner);
            }
            if self.board.is_full() {
                break GameOutcome::Tied;
            }

            self.board.toggle_player();
        };

        self.phase = outcome.into();
        self.tally.record(outcome);
        info!(%outcome, board = %self.board, "Game over");
        self.presentation.render_score(&self.tally);

        Some(outcome)
    }

    /// Waits for a selection that places successfully.
    ///
    /// Returns `None` if the match is stopped while waiting.
    fn human_turn(&mut self, mark: Mark) -> Option<()> {
        debug!(%mark, "Waiting for human selection");
        loop {
            if !self.handle.is_playing() {
                return None;
            }
            if self.board.is_full() {
                return Some(());
            }

            let Some(cell) = self.handle.selections.take_timeout(self.poll_interval) else {
                continue;
            };

            if self.board.place(cell, mark) {
                debug!(%mark, %cell, "Human placed mark");
                return Some(());
            }
            debug!(%mark, %cell, "Selection rejected");
        }
    }

    /// Asks the strategy for a cell until one places successfully.
    ///
    /// Returns `None` if the match is stopped or the strategy cannot
    /// produce a legal cell.
    fn computer_turn(&mut self, mark: Mark) -> Option<()> {
        if !self.think() {
            return None;
        }

        for _ in 0..MAX_STRATEGY_ATTEMPTS {
            if self.board.is_full() {
                return Some(());
            }

            let Some(choice) = self.strategy.choose(&self.board, mark) else {
                error!(%mark, board = %self.board, "Strategy found no move on an open board");
                return None;
            };

            if self.board.place(choice.cell, mark) {
                info!(%mark, cell = %choice.cell, rule = %choice.rule, "Computer placed mark");
                return Some(());
            }
            warn!(%mark, cell = %choice.cell, "Strategy chose an unplayable cell");
        }

        error!(%mark, "Strategy kept choosing unplayable cells");
        None
    }

    /// Waits out the think time in poll-interval slices.
    ///
    /// Returns false as soon as the match is stopped.
    fn think(&self) -> bool {
        let mut remaining = self.think_time;
        while !remaining.is_zero() {
            if !self.handle.is_playing() {
                return false;
            }
            let slice = remaining.min(self.poll_interval);
            std::thread::sleep(slice);
            remaining -= slice;
        }
        self.handle.is_playing()
    }

    fn abandon(&mut self) -> Option<GameOutcome> {
        info!(board = %self.board, "Game abandoned");
        self.phase = Phase::Abandoned;
        None
    }
}
