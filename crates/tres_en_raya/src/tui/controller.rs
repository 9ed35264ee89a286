//! Controller: the state machine switching between setup and match screens.

use std::ops::ControlFlow;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{MatchScreen, SetupScreen};
use crate::{AppConfig, Session};

/// Active screen.
#[derive(Debug, Clone)]
pub enum ActiveScreen {
    /// Name entry.
    Setup(SetupScreen),
    /// Match in progress or concluded.
    InMatch(MatchScreen),
}

/// Owns the session and the active screen, and routes key events.
///
/// Call [`Controller::run`] to start the event loop, or drive it directly
/// with [`Controller::handle_key`] and [`Controller::render`].
#[derive(Debug, Getters)]
pub struct Controller {
    /// Loaded settings.
    config: AppConfig,
    /// Names, scores and the active match.
    session: Session,
    /// Screen receiving input.
    screen: ActiveScreen,
}

impl Controller {
    /// Creates a controller on the setup screen, prefilled from `config`.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Self {
        info!("Creating Controller");
        let screen = ActiveScreen::Setup(SetupScreen::prefilled(
            config.player_x().clone(),
            config.player_o().clone(),
        ));
        Self {
            config,
            session: Session::new(),
            screen,
        }
    }

    /// Runs the event loop until the player quits.
    ///
    /// Each key event is fully applied before the next is read.
    #[instrument(skip_all)]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");
        loop {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()?
                && self.handle_key(key).is_break()
            {
                info!("Quitting");
                return Ok(());
            }
        }
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            ActiveScreen::Setup(s) => s.render(frame, &self.session, &self.config),
            ActiveScreen::InMatch(s) => s.render(frame, &self.session, &self.config),
        }
    }

    /// Applies one key event. Breaks when the app should exit.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
        // Skip key release events (crossterm fires both press and release on some platforms).
        if key.kind == KeyEventKind::Release {
            return ControlFlow::Continue(());
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return ControlFlow::Break(());
        }

        let transition = match &mut self.screen {
            ActiveScreen::Setup(s) => s.handle_key(key, &mut self.session),
            ActiveScreen::InMatch(s) => s.handle_key(key, &mut self.session),
        };
        self.apply_transition(transition)
    }

    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> ControlFlow<()> {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoToMatch => {
                debug!("Navigating to MatchScreen");
                self.screen = ActiveScreen::InMatch(MatchScreen::new());
            }
            ScreenTransition::GoToSetup => {
                debug!("Navigating to SetupScreen");
                self.screen = ActiveScreen::Setup(SetupScreen::new());
            }
            ScreenTransition::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// True while the match screen is showing.
    pub fn in_match(&self) -> bool {
        matches!(self.screen, ActiveScreen::InMatch(_))
    }
}
