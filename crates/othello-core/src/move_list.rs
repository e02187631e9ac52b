//! Move generation, evaluation, and ordering for Othello positions.

use arrayvec::ArrayVec;
use std::slice;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::disc::Disc;
use crate::eval::Eval;
use crate::square::Square;
use crate::types::Score;

/// Maximum number of moves possible in a position.
const MAX_MOVES: usize = 34;

/// Represents a single move.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Bitboard representing all opponent discs flipped by this move.
    pub flipped: Bitboard,
    /// Evaluation score for move ordering (higher = better for the mover).
    pub value: Score,
}

impl Move {
    /// Creates a new move with the specified square and flipped discs.
    #[inline]
    pub fn new(sq: Square, flipped: Bitboard) -> Move {
        debug_assert!(!flipped.is_empty(), "Move must flip at least one disc");
        Move {
            sq,
            flipped,
            value: 0,
        }
    }
}

/// Container for all legal moves of one color in a position.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: ArrayVec<Move, MAX_MOVES>,
}

impl MoveList {
    /// Generates all legal moves for `mover`, in square-index order.
    ///
    /// # Arguments
    ///
    /// * `board` - The current position
    /// * `mover` - The color to move
    #[inline]
    pub fn new(board: &Board, mover: Disc) -> MoveList {
        let mut moves = ArrayVec::new();
        for sq in board.get_moves(mover).iter() {
            let flipped = board.flipped_by(mover, sq);
            moves.push(Move::new(sq, flipped));
        }
        MoveList { moves }
    }

    /// Returns the number of legal moves in this position.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the first move in the list, if any exists.
    #[inline]
    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    /// Returns an iterator over all moves in their current order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Move> {
        self.moves.iter_mut()
    }

    /// Assigns each move the heuristic value of its child position, seen
    /// from the mover.
    ///
    /// # Arguments
    ///
    /// * `eval` - Heuristic evaluator
    /// * `board` - Position before any move
    /// * `mover` - The color making the moves
    pub fn evaluate_moves(&mut self, eval: &Eval, board: &Board, mover: Disc) {
        for mv in self.iter_mut() {
            let next = board.make_move_with_flipped(mover, mv.flipped, mv.sq);
            mv.value = eval.evaluate_heuristic(&next, mover);
        }
    }

    /// Sorts moves in descending order of value.
    ///
    /// The sort is stable: moves with equal values keep generation order.
    #[inline]
    pub fn sort(&mut self) {
        self.moves.sort_by_key(|m| std::cmp::Reverse(m.value));
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
