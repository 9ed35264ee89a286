//! Draw detection.

use tracing::instrument;

use crate::{Board, Cell};

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::check_winner;
    use crate::{Mark, Position};

    fn fill(board: &mut Board, layout: [Mark; 9]) {
        for (pos, mark) in Position::ALL.into_iter().zip(layout) {
            board.set(pos, Cell::Occupied(mark));
        }
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_winner() {
        use Mark::{O, X};
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(&mut board, [X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_can_still_hold_a_winner() {
        use Mark::{O, X};
        let mut board = Board::new();
        // X X X / O O X / X O O
        fill(&mut board, [X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }
}
