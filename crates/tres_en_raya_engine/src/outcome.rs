//! Match outcome and phase.

use serde::{Deserialize, Serialize};

use crate::Mark;

/// Terminal result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a triple.
    Winner(Mark),
    /// The board filled up with no triple.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Phase of a match in its state machine.
///
/// `Won` and `Drawn` are terminal until the match is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Accepting placements.
    InProgress,
    /// A mark completed a triple.
    Won(Mark),
    /// Board full, no winner.
    Drawn,
}

impl From<Option<Outcome>> for MatchPhase {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            None => MatchPhase::InProgress,
            Some(Outcome::Winner(mark)) => MatchPhase::Won(mark),
            Some(Outcome::Draw) => MatchPhase::Drawn,
        }
    }
}
