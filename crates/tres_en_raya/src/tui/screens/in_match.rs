//! Match screen: scoreboard, board and the play-again / setup actions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};
use tres_en_raya_engine::{Mark, MatchPhase, Position, Transition};

use crate::tui::board::render_board;
use crate::tui::input::move_cursor;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::{help_bar, title_bar};
use crate::{AppConfig, Session};

/// State for the match screen.
#[derive(Debug, Clone)]
pub struct MatchScreen {
    /// Highlighted cell for keyboard placement.
    cursor: Position,
}

impl MatchScreen {
    /// Creates a match screen with the cursor in the center.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MatchScreen");
        Self {
            cursor: Position::Center,
        }
    }

    #[instrument(skip(self, session))]
    fn place(&mut self, pos: Position, session: &mut Session) -> ScreenTransition {
        self.cursor = pos;
        match session.place_mark(pos) {
            Some(Transition::Ignored(reason)) => debug!(%reason, "Placement ignored"),
            Some(transition) => debug!(?transition, "Placement applied"),
            None => {}
        }
        ScreenTransition::Stay
    }

    fn status(session: &Session) -> (String, Color) {
        let Some(game) = session.active_match() else {
            return (String::new(), Color::Yellow);
        };
        match game.phase() {
            MatchPhase::InProgress => {
                let mark = game.next_mark();
                (
                    format!("{} ({}) to move", session.name_for(mark), mark),
                    Color::Yellow,
                )
            }
            MatchPhase::Won(mark) => (
                format!("Winner: {}!  Press p to play again", session.name_for(mark)),
                Color::Green,
            ),
            MatchPhase::Drawn => (
                "It's a draw!  Press p to play again".to_string(),
                Color::Green,
            ),
        }
    }

    fn render_scoreboard(frame: &mut Frame, area: Rect, session: &Session) {
        let lines: Vec<Line> = [Mark::X, Mark::O]
            .into_iter()
            .map(|mark| {
                Line::from(format!(
                    "{} = {} (Wins: {})",
                    mark,
                    session.name_for(mark),
                    session.wins_for(mark)
                ))
            })
            .chain(std::iter::once(Line::from(format!(
                "Draws: {}",
                session.draws()
            ))))
            .collect();

        let scoreboard = Paragraph::new(lines)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Score"));
        frame.render_widget(scoreboard, area);
    }
}

impl Default for MatchScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MatchScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, session: &Session, config: &AppConfig) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(7),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        title_bar(frame, chunks[0], config.title());
        Self::render_scoreboard(frame, chunks[1], session);

        if let Some(game) = session.active_match() {
            render_board(frame, chunks[2], game, self.cursor);
        }

        let (text, color) = Self::status(session);
        let status = Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[3]);

        let over = session.active_match().is_some_and(|game| game.is_over());
        let help = if over {
            "p: Play again | r: Return to setup | q: Quit"
        } else {
            "Arrows + Enter or 1-9: Place | r: Return to setup | q: Quit"
        };
        help_bar(frame, chunks[4], help);
    }

    #[instrument(skip(self, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor, session),
            KeyCode::Char(c) if c.is_ascii_digit() => match Position::from_digit(c) {
                Some(pos) => self.place(pos, session),
                None => ScreenTransition::Stay,
            },
            KeyCode::Char('p') | KeyCode::Char('P') => {
                // Only offered once the match has ended.
                if session.active_match().is_some_and(|game| game.is_over()) {
                    session.soft_reset_match();
                    self.cursor = Position::Center;
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                info!("Returning to setup");
                session.restart_to_setup();
                ScreenTransition::GoToSetup
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
