//! Terminal session: runs the match on a blocking thread and the UI here.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_engine::{MatchConfig, MatchController, MatchHandle, Opponent, ScoreTally};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::presenter::{TuiPresentation, UiEvent};
use crate::ui;

/// Key polling interval while no key is pressed.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Plays a match in the terminal and returns the final score.
#[instrument(skip_all, fields(rows = *config.rows(), cols = *config.cols()))]
pub async fn run_tui(config: MatchConfig) -> Result<ScoreTally> {
    info!("Starting tic-tac-toe TUI");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut controller = MatchController::new(
        &config,
        Opponent::seeded(*config.seed()),
        TuiPresentation::new(event_tx),
    );
    let handle = controller.handle();
    let mut app = App::new(handle.clone(), config.seats(), *config.rows(), *config.cols());

    let match_task = tokio::task::spawn_blocking(move || controller.run());

    let res = match setup_terminal() {
        Ok(mut terminal) => {
            let res = event_loop(&mut terminal, &mut app, &mut event_rx, &match_task).await;
            let restored = restore_terminal(&mut terminal);
            res.and(restored)
        }
        Err(e) => Err(e),
    };

    finish(&handle, app, event_rx, match_task, res).await
}

/// Stops the match, releases the UI side and waits for the game thread.
///
/// The game thread is always joined, even when `res` carries a UI error.
async fn finish(
    handle: &MatchHandle,
    app: App,
    events: mpsc::UnboundedReceiver<UiEvent>,
    match_task: JoinHandle<ScoreTally>,
    res: Result<()>,
) -> Result<ScoreTally> {
    handle.stop();
    drop(app);
    drop(events);

    let tally = match_task.await.context("Match controller panicked")?;
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res.map(|()| tally)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draws, drains game events and handles keys until the match ends or the user quits.
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &mut mpsc::UnboundedReceiver<UiEvent>,
    match_task: &JoinHandle<ScoreTally>,
) -> Result<()> {
    loop {
        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_exit() {
            return Ok(());
        }
        if match_task.is_finished() {
            debug!("Match ended");
            return Ok(());
        }

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
}
