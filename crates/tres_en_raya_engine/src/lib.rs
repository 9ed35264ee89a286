//! Tres en Raya match engine - pure tic-tac-toe game logic.
//!
//! This crate owns a single match: the board, whose turn it is, and
//! whether the match has been won or drawn. It knows nothing about player
//! names, scores or screens; callers react to the [`Transition`] returned
//! by every placement.
//!
//! # Example
//!
//! ```
//! use tres_en_raya_engine::{Mark, Match, Outcome, Position, Transition};
//!
//! let mut game = Match::new();
//! game.place_mark(Position::TopLeft);
//! game.place_mark(Position::MiddleLeft);
//! game.place_mark(Position::TopCenter);
//! game.place_mark(Position::Center);
//! let transition = game.place_mark(Position::TopRight);
//!
//! assert_eq!(transition, Transition::Concluded(Outcome::Winner(Mark::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod invariants;
mod outcome;
mod position;
mod transition;
mod types;

pub mod rules;

pub use engine::Match;
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MatchInvariants,
};
pub use outcome::{MatchPhase, Outcome};
pub use position::Position;
pub use transition::{Ignored, Transition};
pub use types::{Board, Cell, Mark};
