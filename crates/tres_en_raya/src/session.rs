//! Session coordinator: player names, scores and the active match.
//!
//! A session begins in the setup phase with empty names. [`Session::start`]
//! moves it into play with a fresh [`Match`]; every placement goes through
//! [`Session::place_mark`] so a concluded match is scored exactly once.

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};
use tres_en_raya_engine::{Mark, Match, Outcome, Position, Transition};

use crate::{SessionError, SessionErrorKind};

/// Player identities, cumulative score and the match being played.
#[derive(Debug, Clone, Default, Getters)]
pub struct Session {
    /// Name of the player using X.
    player_x_name: String,
    /// Name of the player using O.
    player_o_name: String,
    /// Wins for X since the session started.
    wins_x: u32,
    /// Wins for O since the session started.
    wins_o: u32,
    /// Matches that ended with a full board.
    draws: u32,
    #[getter(skip)]
    active: Option<Match>,
}

impl Session {
    /// Creates a session in the setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a match is being played.
    ///
    /// Only ever true when both names are non-empty.
    pub fn started(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the active match, if started.
    pub fn active_match(&self) -> Option<&Match> {
        self.active.as_ref()
    }

    /// Begins play with the given names.
    ///
    /// Names are stored exactly as typed. If either is empty nothing
    /// changes and the caller gets [`SessionErrorKind::MissingPlayerNames`].
    #[instrument(skip(self))]
    pub fn start(&mut self, name_x: &str, name_o: &str) -> Result<(), SessionError> {
        if self.started() {
            warn!("Start requested while a match is active");
            return Err(SessionError::new(SessionErrorKind::AlreadyStarted));
        }

        if name_x.is_empty() || name_o.is_empty() {
            warn!("Cannot start without both player names");
            return Err(SessionError::new(SessionErrorKind::MissingPlayerNames));
        }

        self.player_x_name = name_x.to_string();
        self.player_o_name = name_o.to_string();
        self.active = Some(Match::new());
        info!(player_x = %self.player_x_name, player_o = %self.player_o_name, "Session started");
        Ok(())
    }

    /// Forwards a placement to the active match and scores its outcome.
    ///
    /// Ignored when no match is active.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, pos: Position) -> Option<Transition> {
        let Some(game) = self.active.as_mut() else {
            debug!("No active match, placement ignored");
            return None;
        };

        let transition = game.place_mark(pos);
        match transition.outcome() {
            Some(Outcome::Winner(mark)) => self.record_win(mark),
            Some(Outcome::Draw) => self.record_draw(),
            None => {}
        }
        Some(transition)
    }

    /// Adds one win for `mark`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, mark: Mark) {
        let wins = match mark {
            Mark::X => &mut self.wins_x,
            Mark::O => &mut self.wins_o,
        };
        *wins += 1;
        info!(winner = %mark, wins = *wins, "Win recorded");
    }

    /// Adds one drawn match.
    #[instrument(skip(self))]
    pub fn record_draw(&mut self) {
        self.draws += 1;
        info!(draws = self.draws, "Draw recorded");
    }

    /// "Play again": resets the match, keeping names and scores.
    #[instrument(skip(self))]
    pub fn soft_reset_match(&mut self) {
        match self.active.as_mut() {
            Some(game) => {
                game.reset();
                info!("Match reset, scores kept");
            }
            None => debug!("No active match to reset"),
        }
    }

    /// Returns to setup, discarding names, scores and the match.
    #[instrument(skip(self))]
    pub fn restart_to_setup(&mut self) {
        info!(
            wins_x = self.wins_x,
            wins_o = self.wins_o,
            draws = self.draws,
            "Returning to setup"
        );
        *self = Self::new();
    }

    /// Name of the player using `mark`.
    pub fn name_for(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x_name,
            Mark::O => &self.player_o_name,
        }
    }

    /// Wins recorded for `mark`.
    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    /// Name of the active match's winner, if it has one.
    pub fn winner_name(&self) -> Option<&str> {
        let winner = self.active.as_ref()?.outcome()?.winner()?;
        Some(self.name_for(winner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_in_setup() {
        let session = Session::new();
        assert!(!session.started());
        assert!(session.player_x_name().is_empty());
        assert!(session.player_o_name().is_empty());
        assert_eq!((*session.wins_x(), *session.wins_o()), (0, 0));
    }

    #[test]
    fn test_start_keeps_names_as_typed() {
        let mut session = Session::new();
        session.start(" Alice ", "Bob\t").unwrap();
        assert_eq!(session.player_x_name(), " Alice ");
        assert_eq!(session.player_o_name(), "Bob\t");
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let mut session = Session::new();
        session.start("  ", "Bob").unwrap();
        assert!(session.started());
        assert_eq!(session.name_for(Mark::X), "  ");
    }

    #[test]
    fn test_empty_name_is_missing() {
        let mut session = Session::new();
        let err = session.start("Alice", "").unwrap_err();
        assert_eq!(err.kind, SessionErrorKind::MissingPlayerNames);
        assert!(!session.started());
    }

    #[test]
    fn test_second_start_rejected() {
        let mut session = Session::new();
        session.start("Alice", "Bob").unwrap();
        let err = session.start("Carol", "Dave").unwrap_err();
        assert_eq!(err.kind, SessionErrorKind::AlreadyStarted);
        assert_eq!(session.player_x_name(), "Alice");
    }

    #[test]
    fn test_record_win_is_per_mark() {
        let mut session = Session::new();
        session.record_win(Mark::O);
        assert_eq!(session.wins_for(Mark::O), 1);
        assert_eq!(session.wins_for(Mark::X), 0);
    }

    #[test]
    fn test_place_mark_without_match_is_ignored() {
        let mut session = Session::new();
        assert_eq!(session.place_mark(Position::Center), None);
    }
}
