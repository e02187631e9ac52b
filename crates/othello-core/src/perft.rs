//! Move-generation node counts, used to validate the board oracle.

use crate::board::Board;
use crate::disc::Disc;
use crate::move_list::MoveList;

/// Executes a perft run starting from the standard 8×8 initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total leaf count the walk visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::default(), Disc::Black, depth)
}

/// Counts the leaves of the game tree of `board` with `color` to move.
///
/// Unlike the search, a color without legal moves passes and the other color
/// continues without consuming depth. A finished game counts as one leaf.
pub fn perft(board: &Board, color: Disc, depth: u32) -> u64 {
    let move_list = MoveList::new(board, color);

    if move_list.is_empty() {
        return if board.has_legal_moves(color.opposite()) {
            perft(board, color.opposite(), depth)
        } else {
            1
        };
    }

    if depth <= 1 {
        return move_list.count() as u64;
    }

    move_list
        .iter()
        .map(|m| {
            let next = board.make_move_with_flipped(color, m.flipped, m.sq);
            perft(&next, color.opposite(), depth - 1)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_8x8_shallow() {
        let expected = [4, 12, 56, 244, 1_396, 8_200];
        for (depth, &nodes) in (1..).zip(expected.iter()) {
            assert_eq!(perft_root(depth), nodes, "depth {depth}");
        }
    }

    #[test]
    fn test_perft_is_color_symmetric_at_start() {
        for size in [4, 6, 8] {
            let board = Board::new(size).unwrap();
            assert_eq!(perft(&board, Disc::Black, 3), perft(&board, Disc::White, 3));
        }
    }

    #[test]
    fn test_perft_finished_game() {
        let board = Board::from_string("XXXXXXXXOOOOOOOO", 4).unwrap();
        assert_eq!(perft(&board, Disc::Black, 5), 1);
    }

    #[test]
    fn test_perft_pass() {
        // White cannot move, black plays C1 which ends the game.
        let board = Board::from_string("XO--------------", 4).unwrap();
        assert_eq!(perft(&board, Disc::White, 1), 1);
        assert_eq!(perft(&board, Disc::White, 3), 1);
    }
}
