//! The match state machine.
//!
//! A [`Match`] starts in progress with X to move. Each accepted placement
//! writes the current mark, flips the turn and re-evaluates the board. The
//! placement that completes a triple or fills the board concludes the
//! match; from then on placements are ignored until [`Match::reset`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::invariants::{InvariantSet, MatchInvariants};
use crate::{Board, Cell, Ignored, Mark, MatchPhase, Outcome, Position, Transition, rules};

/// A single game of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    next_mark: Mark,
    outcome: Option<Outcome>,
    history: Vec<Position>,
}

impl Match {
    /// Creates an empty match with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Places the current mark at `pos`.
    ///
    /// Occupied cells and concluded matches leave the state untouched and
    /// return [`Transition::Ignored`].
    #[instrument(skip(self), fields(mark = %self.next_mark))]
    pub fn place_mark(&mut self, pos: Position) -> Transition {
        if self.outcome.is_some() {
            debug!(position = %pos, "Ignoring placement on concluded match");
            return Transition::Ignored(Ignored::MatchOver);
        }
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Ignoring placement on occupied cell");
            return Transition::Ignored(Ignored::CellOccupied(pos));
        }

        let mark = self.next_mark;
        self.board.set(pos, Cell::Occupied(mark));
        self.history.push(pos);
        self.next_mark = mark.opponent();

        let transition = if let Some(winner) = rules::check_winner(&self.board) {
            info!(winner = %winner, moves = self.history.len(), "Match won");
            self.outcome = Some(Outcome::Winner(winner));
            Transition::Concluded(Outcome::Winner(winner))
        } else if rules::is_full(&self.board) {
            info!("Match drawn");
            self.outcome = Some(Outcome::Draw);
            Transition::Concluded(Outcome::Draw)
        } else {
            Transition::Continued {
                next: self.next_mark,
            }
        };

        if cfg!(debug_assertions)
            && let Err(violations) = MatchInvariants::check_all(self)
        {
            let broken: Vec<String> = violations.iter().map(ToString::to_string).collect();
            panic!(
                "Match invariants violated after placing {pos}: {}",
                broken.join("; ")
            );
        }

        transition
    }

    /// Places the current mark at a raw board index (0-8).
    #[instrument(skip(self))]
    pub fn place_index(&mut self, index: usize) -> Transition {
        match Position::from_index(index) {
            Some(pos) => self.place_mark(pos),
            None => {
                debug!(index, "Ignoring placement off the board");
                Transition::Ignored(Ignored::OutOfBounds(index))
            }
        }
    }

    /// Clears the board, gives X the move and drops the outcome.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting match");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Returns the outcome, once concluded.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the positions played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.outcome.into()
    }

    /// True once the match has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the completed triple when the match has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.outcome?.winner()?;
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Returns the positions that would accept a mark.
    pub fn valid_positions(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
