//! Search context for maintaining state during a tree search.

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::disc::Disc;
use crate::eval::{Eval, LeafEvaluation, evaluate_exact};
use crate::move_list::MoveList;
use crate::square::Square;
use crate::transposition_table::{Bound, CacheEntry, CacheKey, TranspositionCache};
use crate::types::{Depth, Score};

use super::node_type::NodeType;

/// State shared by every node of one search.
pub struct SearchContext<'a> {
    /// Number of nodes visited in this search
    pub n_nodes: u64,
    /// Color whose utility every node reports
    pub perspective: Disc,
    /// Heuristic evaluator for cutoffs and move ordering
    pub eval: &'a Eval,
    /// Evaluator used at non-terminal leaves
    pub leaf_evaluation: LeafEvaluation,
    /// Transposition cache, `None` when caching is disabled
    cache: Option<&'a mut TranspositionCache>,
    /// Whether children are searched best-first
    use_ordering: bool,
}

impl<'a> SearchContext<'a> {
    /// Creates a new search context.
    ///
    /// # Arguments
    /// * `perspective` - Color whose utility is maximized.
    /// * `eval` - Heuristic evaluator.
    /// * `leaf_evaluation` - Evaluator used at depth cutoffs.
    /// * `cache` - Cache to consult and fill, if caching is enabled.
    /// * `use_ordering` - Sort children by heuristic value before searching.
    pub fn new(
        perspective: Disc,
        eval: &'a Eval,
        leaf_evaluation: LeafEvaluation,
        cache: Option<&'a mut TranspositionCache>,
        use_ordering: bool,
    ) -> SearchContext<'a> {
        SearchContext {
            n_nodes: 0,
            perspective,
            eval,
            leaf_evaluation,
            cache,
            use_ordering,
        }
    }

    #[inline(always)]
    pub fn increment_nodes(&mut self) {
        self.n_nodes += 1;
    }

    /// Evaluates a leaf for the perspective color.
    ///
    /// Positions where neither color can move are scored by exact disc
    /// difference; any other leaf uses the configured leaf evaluator.
    pub fn evaluate(&self, board: &Board) -> Score {
        if board.is_game_over() {
            evaluate_exact(board, self.perspective)
        } else {
            self.eval
                .evaluate_leaf(board, self.perspective, self.leaf_evaluation)
        }
    }

    /// Orders `move_list` best-first for the mover of node type `NT` when
    /// ordering is enabled and there is a choice to make.
    pub fn order_moves<NT: NodeType>(&self, move_list: &mut MoveList, board: &Board) {
        if !self.use_ordering || move_list.count() < 2 {
            return;
        }
        move_list.evaluate_moves(self.eval, board, NT::mover(self.perspective));
        move_list.sort();
    }

    /// Builds the cache key of a node of type `NT`.
    #[inline]
    pub fn cache_key<NT: NodeType>(&self, board: &Board) -> CacheKey {
        CacheKey::new(*board, self.perspective, NT::KIND)
    }

    /// Probes the cache for an entry that settles the node.
    #[inline]
    pub fn probe(
        &mut self,
        key: &CacheKey,
        depth: Depth,
        alpha: Score,
        beta: Score,
    ) -> Option<CacheEntry> {
        self.cache
            .as_deref_mut()
            .and_then(|cache| cache.probe(key, depth, alpha, beta))
    }

    /// Probes the cache for an exact entry.
    #[inline]
    pub fn probe_exact(&mut self, key: &CacheKey, depth: Depth) -> Option<CacheEntry> {
        self.probe(key, depth, -SCORE_INF, SCORE_INF)
    }

    /// Stores a node result.
    #[inline]
    pub fn store(
        &mut self,
        key: CacheKey,
        best_move: Option<Square>,
        score: Score,
        depth: Depth,
        bound: Bound,
    ) {
        if let Some(cache) = self.cache.as_deref_mut() {
            cache.store(
                key,
                CacheEntry {
                    best_move,
                    score,
                    depth,
                    bound,
                },
            );
        }
    }
}
