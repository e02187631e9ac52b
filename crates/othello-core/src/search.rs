//! Game tree search engine.

pub mod alphabeta;
pub mod minimax;
pub mod node_type;
pub mod options;
pub mod search_context;
pub mod search_result;

use tracing::{debug, trace};

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::disc::Disc;
use crate::error::SearchError;
use crate::eval::{Eval, LeafEvaluation};
use crate::search::search_context::SearchContext;
use crate::square::Square;
use crate::transposition_table::TranspositionCache;
use crate::types::Depth;

pub use options::{Algorithm, CachePolicy, SearchOptions, SearchRunOptions};
pub use search_result::SearchResult;

/// Main search engine structure.
///
/// Owns the evaluator and the transposition cache; a `Search` is used by one
/// caller at a time.
pub struct Search {
    cache: TranspositionCache,
    eval: Eval,
    leaf_evaluation: LeafEvaluation,
    cache_policy: CachePolicy,
}

impl Search {
    /// Creates a new search engine with the given options.
    pub fn new(options: &SearchOptions) -> Search {
        Search {
            cache: TranspositionCache::new(),
            eval: Eval::new(options.weights),
            leaf_evaluation: options.leaf_evaluation,
            cache_policy: options.cache_policy,
        }
    }

    /// Resets the search state for a new game.
    pub fn init(&mut self) {
        self.cache.clear();
    }

    pub fn eval(&self) -> &Eval {
        &self.eval
    }

    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    /// Searches `board` for `color` and returns the chosen move.
    ///
    /// # Arguments
    ///
    /// * `board` - Position to search.
    /// * `color` - Color to move; every utility is reported for this color.
    /// * `options` - Depth, algorithm, caching and ordering.
    ///
    /// # Returns
    ///
    /// The search result, or `SearchError::InvalidColor` for `Disc::Empty`.
    pub fn run(
        &mut self,
        board: &Board,
        color: Disc,
        options: &SearchRunOptions,
    ) -> Result<SearchResult, SearchError> {
        if !color.is_color() {
            return Err(SearchError::InvalidColor(color));
        }

        if self.cache_policy == CachePolicy::PerMove {
            self.cache.clear();
            trace!("transposition cache cleared");
        }
        let hits_before = self.cache.hits();

        let use_ordering = options.use_ordering && options.algorithm == Algorithm::AlphaBeta;
        let cache = options.use_caching.then_some(&mut self.cache);
        let mut ctx = SearchContext::new(color, &self.eval, self.leaf_evaluation, cache, use_ordering);

        let (best_move, score) = match options.algorithm {
            Algorithm::Minimax => minimax::max_node(&mut ctx, board, options.depth),
            Algorithm::AlphaBeta => {
                alphabeta::max_node(&mut ctx, board, -SCORE_INF, SCORE_INF, options.depth)
            }
        };
        let n_nodes = ctx.n_nodes;

        // A zero-depth root is a leaf; it still has to name a move.
        let best_move = best_move.or_else(|| board.get_moves(color).lsb_square());

        let result = SearchResult {
            best_move,
            score,
            n_nodes,
            cache_hits: self.cache.hits() - hits_before,
            depth: options.depth,
            algorithm: options.algorithm,
        };

        debug!(
            algorithm = ?result.algorithm,
            depth = result.depth,
            nodes = result.n_nodes,
            cache_hits = result.cache_hits,
            score = result.score,
            best_move = ?result.best_move,
            "search finished"
        );
        Ok(result)
    }
}

/// Selects a move for `color` with a fresh search engine.
///
/// # Arguments
///
/// * `board` - Position to search.
/// * `color` - Color to move.
/// * `depth_limit` - Remaining depth; `UNLIMITED_DEPTH` searches to the end.
/// * `use_caching` - Consult and fill a transposition cache.
/// * `use_ordering` - Order children best-first (alpha-beta only).
/// * `use_alpha_beta` - Alpha-beta if `true`, plain minimax otherwise.
///
/// # Returns
///
/// The chosen square, or `None` if `color` has no legal move.
pub fn select_move(
    board: &Board,
    color: Disc,
    depth_limit: Depth,
    use_caching: bool,
    use_ordering: bool,
    use_alpha_beta: bool,
) -> Result<Option<Square>, SearchError> {
    let algorithm = if use_alpha_beta {
        Algorithm::AlphaBeta
    } else {
        Algorithm::Minimax
    };
    let options = SearchRunOptions::with_depth(depth_limit)
        .algorithm(algorithm)
        .caching(use_caching)
        .ordering(use_ordering);

    let mut search = Search::new(&SearchOptions::default());
    Ok(search.run(board, color, &options)?.best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EvalWeights;
    use crate::types::UNLIMITED_DEPTH;

    #[test]
    fn test_invalid_color() {
        let board = Board::new(4).unwrap();
        let mut search = Search::new(&SearchOptions::default());
        assert_eq!(
            search.run(&board, Disc::Empty, &SearchRunOptions::with_depth(2)),
            Err(SearchError::InvalidColor(Disc::Empty))
        );
        assert_eq!(
            select_move(&board, Disc::Empty, 2, false, false, true),
            Err(SearchError::InvalidColor(Disc::Empty))
        );
    }

    #[test]
    fn test_depth_zero_returns_first_move() {
        let board = Board::new(4).unwrap();
        let mut search = Search::new(&SearchOptions::default());
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let options = SearchRunOptions::with_depth(0).algorithm(algorithm);
            let result = search.run(&board, Disc::Black, &options).unwrap();
            assert_eq!(result.best_move, Some(Square::B1));
            assert_eq!(result.score, 0);
            assert_eq!(result.n_nodes, 1);
        }
    }

    #[test]
    fn test_no_legal_move_returns_none() {
        let board = Board::from_string("XXXXXXXXOOOOOOOO", 4).unwrap();
        assert_eq!(select_move(&board, Disc::Black, 3, true, true, true), Ok(None));

        // White is blocked while black can still move.
        let board = Board::from_string("XO--------------", 4).unwrap();
        assert_eq!(select_move(&board, Disc::White, 3, false, false, false), Ok(None));
        assert_eq!(
            select_move(&board, Disc::Black, 3, false, false, false),
            Ok(Some(Square::C1))
        );
    }

    #[test]
    fn test_per_move_policy_clears_cache() {
        let board = Board::new(4).unwrap();
        let mut search = Search::new(&SearchOptions::default());
        let options = SearchRunOptions::with_depth(3).caching(true);

        let first = search.run(&board, Disc::Black, &options).unwrap();
        let second = search.run(&board, Disc::Black, &options).unwrap();
        assert_eq!(first, second);
        assert!(!search.cache().is_empty());

        search.init();
        assert!(search.cache().is_empty());
    }

    #[test]
    fn test_persistent_policy_reuses_entries() {
        let board = Board::new(6).unwrap();
        let mut search =
            Search::new(&SearchOptions::default().with_cache_policy(CachePolicy::Persistent));
        let options = SearchRunOptions::with_depth(3).caching(true);

        let first = search.run(&board, Disc::White, &options).unwrap();
        let second = search.run(&board, Disc::White, &options).unwrap();
        assert_eq!(second.score, first.score);
        assert_eq!(second.best_move, first.best_move);
        assert_eq!(second.n_nodes, 1);
        assert_eq!(second.cache_hits, 1);
    }

    #[test]
    fn test_unlimited_depth_solves_small_endgame() {
        // Black C1 wins everything.
        let board = Board::from_string("XO--------------", 4).unwrap();
        let mut search = Search::new(&SearchOptions::default());
        let result = search
            .run(&board, Disc::Black, &SearchRunOptions::with_depth(UNLIMITED_DEPTH))
            .unwrap();
        assert_eq!(result.best_move, Some(Square::C1));
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_search_uses_configured_weights() {
        let weights = EvalWeights::from_toml_str("mobility = 0\nsquare = 1").unwrap();
        let mut search = Search::new(&SearchOptions::new(weights));
        assert_eq!(search.eval().weights(), &weights);

        // Depth 1 from the 4x4 start: every reply leaves a square sum of -50.
        let board = Board::new(4).unwrap();
        let result = search.run(&board, Disc::Black, &SearchRunOptions::with_depth(1)).unwrap();
        assert_eq!(result.score, -50);
    }

    #[test]
    fn test_minimax_ignores_ordering() {
        let board = Board::new(6).unwrap();
        let mut search = Search::new(&SearchOptions::default());
        let plain = SearchRunOptions::with_depth(3).algorithm(Algorithm::Minimax);
        let ordered = plain.ordering(true);
        assert_eq!(
            search.run(&board, Disc::Black, &plain).unwrap(),
            search.run(&board, Disc::Black, &ordered).unwrap()
        );
    }
}
