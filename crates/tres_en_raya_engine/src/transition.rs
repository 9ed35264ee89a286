//! Result of a placement attempt.
//!
//! Placements never fail: pressing an occupied cell or playing on a
//! finished match is a no-op. The transition records what happened so the
//! caller can log it and react to a concluded match.

use serde::{Deserialize, Serialize};

use crate::{Mark, Outcome, Position};

/// Why a placement left the match untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Ignored {
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),
    /// The match already has an outcome.
    #[display("match is already over")]
    MatchOver,
    /// A raw index outside 0-8.
    #[display("index {} is off the board", _0)]
    OutOfBounds(usize),
}

/// What a single placement did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// No change.
    Ignored(Ignored),
    /// Mark placed; the match goes on with `next` to move.
    Continued {
        /// Mark that moves next.
        next: Mark,
    },
    /// Mark placed and the match ended.
    Concluded(Outcome),
}

impl Transition {
    /// Returns the outcome if this placement ended the match.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Transition::Concluded(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
