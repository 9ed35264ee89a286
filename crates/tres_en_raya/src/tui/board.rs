//! Board rendering with cursor and winning-line highlight.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tres_en_raya_engine::{Cell, Mark, Match, Position};

use super::widgets::center_rect;

const CELL_WIDTH: u16 = 7;

/// Renders the 3x3 grid of `game` centered in `area`.
///
/// `cursor` is highlighted while the match is in progress; once won, the
/// winning triple is highlighted instead. Only cells that still accept a
/// mark show their keypad digit.
pub fn render_board(frame: &mut Frame, area: Rect, game: &Match, cursor: Position) {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    let cursor = (!game.is_over()).then_some(cursor);
    let highlight: Vec<Position> = game.winning_line().map(Vec::from).unwrap_or_default();
    let open = game.valid_positions();

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if let Some(pos) = Position::from_index(row * 3 + col) {
                let style = cell_style(game, pos, cursor, &highlight);
                draw_cell(frame, cols[col * 2], game, pos, open.contains(&pos), style);
            }
            if col < 2 {
                draw_separator(frame, cols[col * 2 + 1], "│");
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1], "───────┼───────┼───────");
        }
    }
}

fn cell_style(game: &Match, pos: Position, cursor: Option<Position>, highlight: &[Position]) -> Style {
    let base = match game.board().get(pos) {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    if highlight.contains(&pos) {
        base.bg(Color::Green).fg(Color::Black)
    } else if cursor == Some(pos) {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, game: &Match, pos: Position, open: bool, style: Style) {
    let symbol = match game.board().get(pos) {
        Cell::Empty if open => format!("  {}  ", pos.to_index() + 1),
        Cell::Empty => "     ".to_string(),
        Cell::Occupied(mark) => format!("  {}  ", mark),
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, symbol: &'static str) {
    let sep = Paragraph::new(symbol).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
