//! Disc flip calculation for move execution.

use crate::bitboard::Bitboard;
use crate::square::Square;

/// The eight ray directions as `(file, rank)` steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Calculates which opponent discs would be flipped by placing a disc at the
/// given square of a `size`×`size` board.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed
/// * `p` - Bitboard representing the current player's discs
/// * `o` - Bitboard representing the opponent's discs
/// * `size` - Side length of the board
///
/// # Returns
///
/// A bitboard representing all opponent discs that would be flipped by this
/// move. Empty if no discs would be flipped (invalid move).
pub fn flip(sq: Square, p: Bitboard, o: Bitboard, size: usize) -> Bitboard {
    let mut flipped = Bitboard::default();
    for &(df, dr) in &DIRECTIONS {
        let mut line = Bitboard::default();
        let mut cursor = sq.offset(df, dr, size);
        while let Some(next) = cursor {
            if !o.contains(next) {
                break;
            }
            line = line.set(next);
            cursor = next.offset(df, dr, size);
        }
        if cursor.is_some_and(|end| p.contains(end)) {
            flipped |= line;
        }
    }
    flipped
}
