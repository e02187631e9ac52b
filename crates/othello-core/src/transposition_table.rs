//! Transposition cache for the tree searches.
//!
//! Entries are keyed by the full board value plus the search perspective and
//! the node kind, so two boards with the same contents share an entry no
//! matter which move order produced them. Each entry records the remaining
//! depth it was searched with and how its score relates to the true value.

use std::collections::HashMap;

use crate::board::Board;
use crate::disc::Disc;
use crate::square::Square;
use crate::types::{Depth, Score};

/// Whether the side to move at a node is the perspective color (`Max`) or
/// its opponent (`Min`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Max,
    Min,
}

/// Cache key of a searched node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub board: Board,
    pub perspective: Disc,
    pub node: NodeKind,
}

impl CacheKey {
    pub fn new(board: Board, perspective: Disc, node: NodeKind) -> CacheKey {
        CacheKey {
            board,
            perspective,
            node,
        }
    }
}

/// Bound type for cache entries.
///
/// Indicates the relationship between the stored score and the actual position value:
/// - `Lower`: Score is a lower bound (fail-high occurred)
/// - `Upper`: Score is an upper bound (fail-low)
/// - `Exact`: Score is the exact value at the stored depth
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Lower,
    Upper,
    Exact,
}

impl Bound {
    /// Classifies a fail-soft result against the window the node was
    /// entered with.
    ///
    /// # Arguments
    ///
    /// * `score` - The value returned by the node
    /// * `alpha` - Alpha at node entry
    /// * `beta` - Beta at node entry
    #[inline]
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Bound {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

/// A stored search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    /// Best move found at the node, `None` for leaves.
    pub best_move: Option<Square>,
    pub score: Score,
    /// Remaining depth the node was searched with.
    pub depth: Depth,
    pub bound: Bound,
}

impl CacheEntry {
    /// Returns `true` if this entry can stand in for a search of `depth`
    /// remaining plies.
    #[inline]
    pub fn is_usable_at(&self, depth: Depth) -> bool {
        self.depth >= depth
    }

    /// Returns `true` if the stored score settles a node searched with the
    /// window `(alpha, beta)`.
    #[inline]
    pub fn should_cut(&self, alpha: Score, beta: Score) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

/// Map from searched nodes to their results, owned by a single search.
#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<CacheKey, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an entry that settles a node of `depth` remaining plies
    /// searched with the window `(alpha, beta)`.
    ///
    /// # Returns
    ///
    /// The entry if it was searched at least as deep and its bound decides
    /// the window. Every lookup counts as a hit or a miss.
    pub fn probe(
        &mut self,
        key: &CacheKey,
        depth: Depth,
        alpha: Score,
        beta: Score,
    ) -> Option<CacheEntry> {
        match self.entries.get(key) {
            Some(entry) if entry.is_usable_at(depth) && entry.should_cut(alpha, beta) => {
                self.hits += 1;
                Some(*entry)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Stores an entry, keeping an existing one that was searched deeper.
    pub fn store(&mut self, key: CacheKey, entry: CacheEntry) {
        match self.entries.get(&key) {
            Some(existing) if existing.depth > entry.depth => {}
            _ => {
                self.entries.insert(key, entry);
            }
        }
    }

    /// Removes all entries and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
