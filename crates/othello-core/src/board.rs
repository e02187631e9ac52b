//! Othello board representation using bitboards.

use std::fmt;
use std::hash::Hash;

use crate::bitboard::Bitboard;
use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::disc::Disc;
use crate::error::BoardError;
use crate::flip;
use crate::square::Square;

/// An immutable N×N Othello position.
///
/// The board occupies the top-left `size`×`size` cells of the 8×8 bitboard
/// grid. Bits outside that region are always zero, so two boards with the
/// same contents compare and hash equal regardless of how they were reached.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// Bitboard of black discs.
    black: Bitboard,
    /// Bitboard of white discs.
    white: Bitboard,
}

impl Default for Board {
    /// Creates an 8×8 board with the standard starting position.
    fn default() -> Self {
        Board {
            size: MAX_BOARD_SIZE as u8,
            black: Square::D5.bitboard() | Square::E4.bitboard(),
            white: Square::D4.bitboard() | Square::E5.bitboard(),
        }
    }
}

impl Board {
    /// Creates a board of the given size with the four starting discs at the
    /// center: white on the main diagonal, black on the anti-diagonal.
    ///
    /// # Arguments
    /// * `size` - Side length, between 4 and 8.
    ///
    /// # Returns
    /// The starting position, or `BoardError::UnsupportedSize`.
    pub fn new(size: usize) -> Result<Board, BoardError> {
        check_size(size)?;
        let mid = size / 2;
        let white = Square::from_file_rank(mid - 1, mid - 1).bitboard()
            | Square::from_file_rank(mid, mid).bitboard();
        let black = Square::from_file_rank(mid - 1, mid).bitboard()
            | Square::from_file_rank(mid, mid - 1).bitboard();
        Ok(Board {
            size: size as u8,
            black,
            white,
        })
    }

    /// Creates a `Board` from given bitboards.
    ///
    /// # Arguments
    /// * `size` - Side length, between 4 and 8.
    /// * `black` - Bitboard of black discs.
    /// * `white` - Bitboard of white discs.
    ///
    /// # Returns
    /// The board, or an error when the discs overlap or leave the region.
    pub fn from_bitboards(
        size: usize,
        black: impl Into<Bitboard>,
        white: impl Into<Bitboard>,
    ) -> Result<Board, BoardError> {
        check_size(size)?;
        let black = black.into();
        let white = white.into();
        if !(black & white).is_empty() {
            return Err(BoardError::Malformed("black and white discs overlap".into()));
        }
        if !((black | white) & !Bitboard::region(size)).is_empty() {
            return Err(BoardError::Malformed(format!(
                "discs outside the {size}x{size} board"
            )));
        }
        Ok(Board {
            size: size as u8,
            black,
            white,
        })
    }

    /// Creates a `Board` from a row-major string of `size * size` cells.
    ///
    /// Cells are `X` (black), `O` (white) and `-` (empty); see
    /// [`Disc::from_char`] for accepted aliases. Whitespace is ignored, so
    /// multi-line diagrams parse as well.
    pub fn from_string(board_string: &str, size: usize) -> Result<Board, BoardError> {
        check_size(size)?;
        let cells: Vec<char> = board_string.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != size * size {
            return Err(BoardError::CellCount {
                expected: size * size,
                found: cells.len(),
            });
        }

        let mut black = Bitboard::default();
        let mut white = Bitboard::default();
        for (i, &c) in cells.iter().enumerate() {
            let sq = Square::from_file_rank(i % size, i / size);
            match Disc::from_char(c)? {
                Disc::Black => black = black.set(sq),
                Disc::White => white = white.set(sq),
                Disc::Empty => {}
            }
        }
        Ok(Board {
            size: size as u8,
            black,
            white,
        })
    }

    /// Creates a `Board` from game-manager rows (0 empty, 1 black, 2 white).
    ///
    /// The board size is the number of rows; every row must have that many
    /// cells.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Board, BoardError> {
        let size = rows.len();
        check_size(size)?;

        let mut black = Bitboard::default();
        let mut white = Bitboard::default();
        for (rank, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(BoardError::RaggedRow {
                    row: rank,
                    found: row.len(),
                    expected: size,
                });
            }
            for (file, &code) in row.iter().enumerate() {
                let sq = Square::from_file_rank(file, rank);
                match Disc::from_code(code)? {
                    Disc::Black => black = black.set(sq),
                    Disc::White => white = white.set(sq),
                    Disc::Empty => {}
                }
            }
        }
        Ok(Board {
            size: size as u8,
            black,
            white,
        })
    }

    /// Parses a game-manager board line such as `[[0, 1, 2, 0], ...]`.
    pub fn from_rows_literal(literal: &str) -> Result<Board, BoardError> {
        let malformed = |what: &str| BoardError::Malformed(what.to_string());
        let inner = literal
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| malformed("expected an outer list"))?;

        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut rest = inner.trim();
        while !rest.is_empty() {
            let open = rest.strip_prefix('[').ok_or_else(|| malformed("expected '['"))?;
            let end = open.find(']').ok_or_else(|| malformed("unterminated row"))?;
            let row = open[..end]
                .split(',')
                .map(|cell| {
                    let cell = cell.trim();
                    cell.parse::<u8>()
                        .map_err(|_| BoardError::Malformed(format!("invalid cell '{cell}'")))
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(row);

            rest = open[end + 1..].trim_start();
            if let Some(after_comma) = rest.strip_prefix(',') {
                rest = after_comma.trim_start();
            }
        }
        Board::from_rows(&rows)
    }

    /// Returns the board as game-manager rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size())
            .map(|rank| {
                (0..self.size())
                    .map(|file| self.get_disc_at(Square::from_file_rank(file, rank)).code())
                    .collect()
            })
            .collect()
    }

    /// Returns the side length of the board.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Returns the mask of cells that belong to this board.
    #[inline(always)]
    pub fn region(&self) -> Bitboard {
        Bitboard::region(self.size())
    }

    /// Returns the four corner cells of this board.
    pub fn corners(&self) -> Bitboard {
        let last = self.size() - 1;
        Square::from_file_rank(0, 0).bitboard()
            | Square::from_file_rank(last, 0).bitboard()
            | Square::from_file_rank(0, last).bitboard()
            | Square::from_file_rank(last, last).bitboard()
    }

    /// Returns the discs of the given color.
    ///
    /// `Disc::Empty` yields the empty cells of the board.
    #[inline(always)]
    pub fn discs(&self, color: Disc) -> Bitboard {
        match color {
            Disc::Black => self.black,
            Disc::White => self.white,
            Disc::Empty => self.get_empty(),
        }
    }

    /// Gets the empty cells of the board.
    #[inline(always)]
    pub fn get_empty(&self) -> Bitboard {
        !(self.black | self.white) & self.region()
    }

    /// Returns the number of empty cells on the board.
    #[inline(always)]
    pub fn get_empty_count(&self) -> u32 {
        self.get_empty().count()
    }

    /// Gets the content of a cell.
    #[inline]
    pub fn get_disc_at(&self, sq: Square) -> Disc {
        if self.black.contains(sq) {
            Disc::Black
        } else if self.white.contains(sq) {
            Disc::White
        } else {
            Disc::Empty
        }
    }

    /// Returns `(black, white)` disc counts.
    #[inline]
    pub fn score(&self) -> (u32, u32) {
        (self.black.count(), self.white.count())
    }

    /// Returns a bitboard of the legal moves for `color`.
    ///
    /// A move is legal when it lands on an empty cell and brackets at least
    /// one contiguous line of opponent discs in any of the 8 directions.
    #[inline(always)]
    pub fn get_moves(&self, color: Disc) -> Bitboard {
        if !color.is_color() {
            return Bitboard::default();
        }
        let player = self.discs(color);
        let opponent = self.discs(color.opposite());
        player.get_moves(opponent, self.region())
    }

    /// Checks if `color` has any legal moves.
    #[inline(always)]
    pub fn has_legal_moves(&self, color: Disc) -> bool {
        !self.get_moves(color).is_empty()
    }

    /// Checks if the game is over (neither color can make a move).
    ///
    /// A full board is always game over.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves(Disc::Black) && !self.has_legal_moves(Disc::White)
    }

    /// Calculates the opponent discs that `color` would flip by playing `sq`.
    #[inline]
    pub fn flipped_by(&self, color: Disc, sq: Square) -> Bitboard {
        flip::flip(sq, self.discs(color), self.discs(color.opposite()), self.size())
    }

    /// Attempts to make a move for `color`.
    ///
    /// # Returns
    /// `Some(Board)` with the updated board if the move is legal, `None`
    /// otherwise.
    pub fn try_make_move(&self, color: Disc, sq: Square) -> Option<Board> {
        if !color.is_color() || !self.get_empty().contains(sq) {
            return None;
        }

        let flipped = self.flipped_by(color, sq);
        if flipped.is_empty() {
            return None;
        }

        Some(self.make_move_with_flipped(color, flipped, sq))
    }

    /// Makes a move for `color`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the move is not legal.
    #[inline]
    pub fn make_move(&self, color: Disc, sq: Square) -> Board {
        let flipped = self.flipped_by(color, sq);
        debug_assert!(!flipped.is_empty(), "illegal move {sq} for {color:?}");
        self.make_move_with_flipped(color, flipped, sq)
    }

    /// Makes a move for `color`, given the already calculated flipped discs.
    #[inline(always)]
    pub fn make_move_with_flipped(&self, color: Disc, flipped: Bitboard, sq: Square) -> Board {
        match color {
            Disc::Black => Board {
                size: self.size,
                black: self.black.apply_move(flipped, sq),
                white: self.white.apply_flip(flipped),
            },
            Disc::White => Board {
                size: self.size,
                black: self.black.apply_flip(flipped),
                white: self.white.apply_move(flipped, sq),
            },
            Disc::Empty => *self,
        }
    }

    /// Converts the board to a string with one row per line.
    pub fn to_string_as_board(&self) -> String {
        let size = self.size();
        let mut s = String::with_capacity(size * (size + 1));
        for rank in 0..size {
            if rank > 0 {
                s.push('\n');
            }
            for file in 0..size {
                s.push(self.get_disc_at(Square::from_file_rank(file, rank)).to_char());
            }
        }
        s
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::UnsupportedSize(size))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for file in 0..self.size() {
            write!(f, " {}", (b'a' + file as u8) as char)?;
        }
        writeln!(f)?;
        for rank in 0..self.size() {
            write!(f, "{:>2}", rank + 1)?;
            for file in 0..self.size() {
                write!(f, " {}", self.get_disc_at(Square::from_file_rank(file, rank)).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
