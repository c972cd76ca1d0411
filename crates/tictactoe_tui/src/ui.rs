//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Board, Cell, Mark, Square};

use crate::app::App;

const CELL_WIDTH: u16 = 5;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Score
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let score = Paragraph::new(app.score().to_string())
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(score, chunks[1]);

    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = if app.pending_outcome().is_some() {
        "y: play again   n: stop"
    } else {
        "arrows: move   enter/space: place   1-9: place (3x3)   q: quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.board();
    let (rows, cols) = (board.rows() as u16, board.cols() as u16);

    let width = cols * CELL_WIDTH + cols - 1;
    let height = rows * 2 - 1;
    let board_area = center_rect(area, width, height);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(interleaved(rows, 1))
        .split(board_area);

    for (i, row_area) in row_areas.iter().enumerate() {
        if i % 2 == 1 {
            draw_separator(frame, *row_area);
            continue;
        }
        draw_row(frame, *row_area, app, i / 2);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let board = app.board();
    let col_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(interleaved(board.cols() as u16, CELL_WIDTH))
        .split(area);

    for (i, col_area) in col_areas.iter().enumerate() {
        if i % 2 == 1 {
            draw_separator_vertical(frame, *col_area);
            continue;
        }
        draw_cell(frame, *col_area, app, Cell::new(row, i / 2));
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: Cell) {
    let board: &Board = app.board();
    let hovered = cell == app.cursor();

    let (symbol, base_style) = match board.get(cell) {
        Some(Square::Occupied(mark)) => (mark.to_string(), mark_style(mark)),
        _ => match app.preview().filter(|_| hovered) {
            Some(mark) => (mark.to_string(), Style::default().fg(Color::Gray)),
            None => (String::new(), Style::default().fg(Color::DarkGray)),
        },
    };

    let style = if hovered {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {symbol:^3} "), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// `count` slots of `size` with one-cell separators between them.
fn interleaved(count: u16, size: u16) -> Vec<Constraint> {
    (0..count)
        .flat_map(|i| {
            let slot = Constraint::Length(size);
            if i == 0 {
                vec![slot]
            } else {
                vec![Constraint::Length(1), slot]
            }
        })
        .collect()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleaved_layout() {
        assert_eq!(
            interleaved(3, 5),
            vec![
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Length(5),
            ]
        );
    }
}
