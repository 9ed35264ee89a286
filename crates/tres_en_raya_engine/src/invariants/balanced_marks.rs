//! Balanced marks: X leads O by zero or one.

use super::Invariant;
use crate::{Mark, Match};

/// Invariant: the number of X marks equals the number of O marks, or
/// exceeds it by exactly one.
pub struct BalancedMarksInvariant;

impl Invariant<Match> for BalancedMarksInvariant {
    fn holds(game: &Match) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by at most one mark"
    }
}
