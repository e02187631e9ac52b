use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::bitboard::Bitboard;
use crate::constants::GRID_SIZE;

/// Represents a square on the bitboard grid, ranging from A1 to H8.
///
/// Files (columns) are labeled A-H and ranks (rows) 1-8. The grid is indexed
/// as follows:
///
/// ```text
///   A B C D E F G H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
///
/// Boards smaller than 8×8 occupy the top-left corner of the grid, so a 4×4
/// board uses files A-D and ranks 1-4 only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// Number of squares on the grid.
pub const TOTAL_SQUARES: usize = GRID_SIZE * GRID_SIZE;

impl Square {
    /// Returns a bitboard with only this square set.
    #[inline(always)]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::from_square(self)
    }

    /// Converts the `Square` into a `usize` index (0-63).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts an index into a `Square` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index` >= 64.
    #[inline]
    pub fn from_index_unchecked(index: usize) -> Square {
        debug_assert!(
            index < TOTAL_SQUARES,
            "Index out of bounds for Square enum. index: {index:?}"
        );
        // Square is repr(u8) with 64 contiguous discriminants starting at 0.
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Safely converts an index into a `Square`.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if the index is in 0-63, `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        (index < TOTAL_SQUARES).then(|| Square::from_index_unchecked(index))
    }

    /// Returns the file (column) of this square, 0 for file A.
    #[inline]
    pub const fn file(self) -> usize {
        self.index() % GRID_SIZE
    }

    /// Returns the rank (row) of this square, 0 for rank 1.
    #[inline]
    pub const fn rank(self) -> usize {
        self.index() / GRID_SIZE
    }

    /// Creates a `Square` from file and rank coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either `file` or `rank` is >= 8.
    pub fn from_file_rank(file: usize, rank: usize) -> Square {
        assert!(file < GRID_SIZE, "Invalid file: {file}");
        assert!(rank < GRID_SIZE, "Invalid rank: {rank}");
        Self::from_index_unchecked(rank * GRID_SIZE + file)
    }

    /// Returns the square one step away in direction `(df, dr)`, staying
    /// inside a board of `size`×`size` cells.
    #[inline]
    pub fn offset(self, df: isize, dr: isize, size: usize) -> Option<Square> {
        let file = self.file() as isize + df;
        let rank = self.rank() as isize + dr;
        let size = size as isize;
        if (0..size).contains(&file) && (0..size).contains(&rank) {
            Some(Square::from_file_rank(file as usize, rank as usize))
        } else {
            None
        }
    }

    /// Returns an iterator over all 64 grid squares, A1 to H8.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(Square::from_index_unchecked)
    }
}

/// Error type for square parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    #[error("Invalid square format: must be 2 characters (e.g., 'a1')")]
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    #[error("Invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    #[error("Invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation (e.g., "a1", "H8"), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidFormat);
        }

        let file_char = chars[0].to_ascii_lowercase();
        let rank_char = chars[1];

        if !('a'..='h').contains(&file_char) {
            return Err(SquareError::InvalidFile(chars[0]));
        }

        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let file = (file_char as u8 - b'a') as usize;
        let rank = (rank_char as u8 - b'1') as usize;
        Ok(Square::from_file_rank(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file() as u8 + b'a';
        let rank = self.rank() as u8 + b'1';
        write!(f, "{}{}", file as char, rank as char)
    }
}
