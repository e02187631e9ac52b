//! Global constants

use crate::types::Score;

/// Width of the underlying bitboard grid.
pub const GRID_SIZE: usize = 8;

/// Smallest supported board size.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest supported board size.
pub const MAX_BOARD_SIZE: usize = GRID_SIZE;

/// Infinity score for search windows.
///
/// Kept well inside `i32` so that `-SCORE_INF` never overflows.
pub const SCORE_INF: Score = i32::MAX - 1;
