//! Screen trait and transition type for the app state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::{AppConfig, Session};

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`Controller`](crate::Controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// The session started; show the match.
    GoToMatch,
    /// The session was reset; show the name inputs again.
    GoToSetup,
    /// Exit the application.
    Quit,
}

/// Implemented by each screen of the app.
///
/// Screens own only presentation state (input buffers, cursor, alerts).
/// Game state lives in the [`Session`] they are handed.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &Session, config: &AppConfig);

    /// Handles a key press and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> ScreenTransition;
}
