//! History consistency: one history entry per occupied cell.

use super::Invariant;
use crate::Match;

/// Invariant: history length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<Match> for HistoryConsistentInvariant {
    fn holds(game: &Match) -> bool {
        game.history().len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    #[test]
    fn test_holds_after_move() {
        let mut game = Match::new();
        game.place_mark(Position::Center);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_mark_without_history_violates() {
        let mut game = Match::new();
        game.board_mut().set(Position::TopLeft, Cell::Occupied(Mark::X));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
