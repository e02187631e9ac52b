//! Error types for board construction and search.

use thiserror::Error;

use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::disc::Disc;

/// Errors raised while building or parsing a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("unsupported board size {0}: must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}")]
    UnsupportedSize(usize),
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("invalid cell character '{0}'")]
    InvalidCell(char),
    #[error("invalid cell value {0}: must be 0, 1 or 2")]
    InvalidCellValue(u8),
    #[error("malformed board literal: {0}")]
    Malformed(String),
}

/// Errors raised by the search entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid color {0:?}: expected Black or White")]
    InvalidColor(Disc),
}
