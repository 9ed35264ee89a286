//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Cell, Mark, Match};

/// Invariant: history alternates starting with X, and the mark to move
/// matches the parity of the history.
pub struct AlternatingTurnInvariant;

impl Invariant<Match> for AlternatingTurnInvariant {
    fn holds(game: &Match) -> bool {
        let mut expected = Mark::X;
        for pos in game.history() {
            if game.board().get(*pos) != Cell::Occupied(expected) {
                return false;
            }
            expected = expected.opponent();
        }

        // A concluded match does not care whose turn it would be.
        game.is_over() || game.next_mark() == expected
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}
