//! Setup screen: enter both player names and start the session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument, warn};
use tres_en_raya_engine::Mark;

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::{alert, help_bar, title_bar};
use crate::{AppConfig, Session};

/// State for the setup screen.
#[derive(Debug, Clone)]
pub struct SetupScreen {
    /// Text typed for the X player.
    name_x: String,
    /// Text typed for the O player.
    name_o: String,
    /// Input receiving keystrokes.
    focus: Mark,
    /// Validation message blocking input until dismissed.
    alert: Option<String>,
}

impl SetupScreen {
    /// Creates a setup screen with empty inputs.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SetupScreen");
        Self {
            name_x: String::new(),
            name_o: String::new(),
            focus: Mark::X,
            alert: None,
        }
    }

    /// Creates a setup screen with the inputs prefilled.
    #[instrument]
    pub fn prefilled(name_x: Option<String>, name_o: Option<String>) -> Self {
        Self {
            name_x: name_x.unwrap_or_default(),
            name_o: name_o.unwrap_or_default(),
            ..Self::new()
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Mark::X => &mut self.name_x,
            Mark::O => &mut self.name_o,
        }
    }

    #[instrument(skip(self, session))]
    fn submit(&mut self, session: &mut Session) -> ScreenTransition {
        match session.start(&self.name_x, &self.name_o) {
            Ok(()) => {
                info!("Setup complete");
                ScreenTransition::GoToMatch
            }
            Err(e) => {
                warn!(error = %e, "Start rejected");
                self.alert = Some(e.user_message());
                ScreenTransition::Stay
            }
        }
    }

    fn render_input(&self, frame: &mut Frame, area: ratatui::layout::Rect, mark: Mark) {
        let (value, focused) = match mark {
            Mark::X => (&self.name_x, self.focus == Mark::X),
            Mark::O => (&self.name_o, self.focus == Mark::O),
        };
        let (text, style) = if focused {
            (format!("{}_", value), Style::default().fg(Color::Yellow))
        } else {
            (value.clone(), Style::default().fg(Color::White))
        };
        let input = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Player {} name", mark)),
        );
        frame.render_widget(input, area);
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SetupScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _session: &Session, config: &AppConfig) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        title_bar(frame, chunks[0], config.title());
        self.render_input(frame, chunks[1], Mark::X);
        self.render_input(frame, chunks[2], Mark::O);
        help_bar(
            frame,
            chunks[4],
            "Type names | Tab/↑↓: Switch | Enter: Start game | Esc: Quit",
        );

        if let Some(message) = &self.alert {
            alert(frame, message);
        }
    }

    #[instrument(skip(self, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> ScreenTransition {
        // The alert blocks everything until dismissed.
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                debug!("Alert dismissed");
                self.alert = None;
            }
            return ScreenTransition::Stay;
        }

        match key.code {
            // Shifted letters type; control and alt chords do not.
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.focused_input().push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.opponent();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.submit(session),
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
