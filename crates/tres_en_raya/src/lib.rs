//! Tres en Raya - two-player tic-tac-toe with a running scoreboard.
//!
//! # Architecture
//!
//! - **Engine**: the [`tres_en_raya_engine`] crate owns a single match
//! - **Session**: player names, wins and the active match
//! - **TUI**: setup and match screens rendered with ratatui
//! - **Config/CLI**: TOML settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use tres_en_raya::{Mark, Position, Session};
//!
//! let mut session = Session::new();
//! session.start("Alice", "Bob").unwrap();
//! for pos in [
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//! ] {
//!     session.place_mark(pos);
//! }
//! assert_eq!(session.wins_for(Mark::X), 1);
//! assert_eq!(session.winner_name(), Some("Alice"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod session;
mod tui;

pub use cli::{Cli, Command, PlayArgs};
pub use config::AppConfig;
pub use error::{ConfigError, SessionError, SessionErrorKind};
pub use session::Session;
pub use tui::{
    ActiveScreen, Controller, MatchScreen, Screen, ScreenTransition, SetupScreen, run_tui,
};

pub use tres_en_raya_engine::{Cell, Mark, Match, MatchPhase, Outcome, Position, Transition};
