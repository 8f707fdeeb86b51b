//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use solo_tictactoe::{Board, Cell, Position, Statistics};

use crate::app::App;

const HELP: &str = "Arrows + Enter or 1-9: play   n: new game   r: reset stats   q: quit";

/// Renders the whole screen from the app's current snapshot.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(4), // Statistics
            Constraint::Length(2), // Notice + help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], &snapshot.board, app.cursor());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    draw_statistics(frame, chunks[3], &snapshot.statistics);

    let notice = app.notice().unwrap_or_default();
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(notice, Style::default().fg(Color::Red))),
        Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 23, 5);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, row);
        if row < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, row: usize) {
    let divider = Span::styled("│", Style::default().fg(Color::DarkGray));
    let mut spans = Vec::with_capacity(5);
    for col in 0..3 {
        if let Some(pos) = Position::from_coords(row, col) {
            spans.push(cell_span(board.get(pos), pos == cursor));
        }
        if col < 2 {
            spans.push(divider.clone());
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn cell_span(cell: Cell, selected: bool) -> Span<'static> {
    let base = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Player => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Opponent => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    let style = if selected {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    };
    Span::styled(format!("   {}   ", cell.glyph()), style)
}

fn draw_statistics(frame: &mut Frame, area: Rect, stats: &Statistics) {
    let lines = vec![
        Line::from(format!(
            "Wins: {}   Losses: {}   Ties: {}",
            stats.wins(),
            stats.losses(),
            stats.ties()
        )),
        Line::from(format!(
            "Games: {}   Win rate: {:.1}%",
            stats.total_games(),
            stats.win_rate()
        )),
    ];
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Statistics").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
