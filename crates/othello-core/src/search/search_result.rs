//! Search result types.

use std::fmt;

use crate::search::options::Algorithm;
use crate::square::Square;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move, `None` only if the searching color cannot move.
    pub best_move: Option<Square>,
    /// Utility of the root for the searching color.
    pub score: Score,
    pub n_nodes: u64,
    /// Cache lookups answered during this search.
    pub cache_hits: u64,
    pub depth: Depth,
    pub algorithm: Algorithm,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.best_move {
            Some(sq) => write!(f, "{sq}")?,
            None => write!(f, "pass")?,
        }
        write!(f, " ({})", self.score)
    }
}
