//! Game-tree search for Othello on N×N boards.
//!
//! The crate bundles a bitboard move oracle ([`board`]), a static evaluator
//! ([`eval`]), move ordering ([`move_list`]), a transposition cache
//! ([`transposition_table`]) and the minimax / alpha-beta searches
//! ([`search`]).

pub mod bitboard;
pub mod board;
pub mod constants;
pub mod disc;
pub mod error;
pub mod eval;
mod flip;
pub mod move_list;
pub mod perft;
pub mod search;
pub mod square;
pub mod transposition_table;
pub mod types;
