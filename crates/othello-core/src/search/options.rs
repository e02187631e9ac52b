//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::eval::{EvalWeights, LeafEvaluation};
use crate::types::{Depth, UNLIMITED_DEPTH};

/// Tree search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Full-width minimax without pruning.
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

/// Lifetime of the transposition cache across top-level calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CachePolicy {
    /// Clear the cache at the start of every search.
    #[default]
    PerMove,
    /// Keep entries between searches.
    Persistent,
}

/// Options fixed for the lifetime of a [`Search`](super::Search).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub weights: EvalWeights,
    pub leaf_evaluation: LeafEvaluation,
    pub cache_policy: CachePolicy,
}

impl SearchOptions {
    pub fn new(weights: EvalWeights) -> Self {
        SearchOptions {
            weights,
            ..Default::default()
        }
    }

    pub fn with_leaf_evaluation(mut self, leaf_evaluation: LeafEvaluation) -> Self {
        self.leaf_evaluation = leaf_evaluation;
        self
    }

    pub fn with_cache_policy(mut self, cache_policy: CachePolicy) -> Self {
        self.cache_policy = cache_policy;
        self
    }
}

/// Options for a single search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRunOptions {
    /// Remaining depth at the root; [`UNLIMITED_DEPTH`] searches to the end.
    pub depth: Depth,
    pub algorithm: Algorithm,
    pub use_caching: bool,
    /// Order children best-first. Ignored by minimax.
    pub use_ordering: bool,
}

impl Default for SearchRunOptions {
    fn default() -> Self {
        SearchRunOptions {
            depth: UNLIMITED_DEPTH,
            algorithm: Algorithm::AlphaBeta,
            use_caching: false,
            use_ordering: false,
        }
    }
}

impl SearchRunOptions {
    /// Creates options for a search of the given depth.
    pub fn with_depth(depth: Depth) -> Self {
        SearchRunOptions {
            depth,
            ..Default::default()
        }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn caching(mut self, use_caching: bool) -> Self {
        self.use_caching = use_caching;
        self
    }

    pub fn ordering(mut self, use_ordering: bool) -> Self {
        self.use_ordering = use_ordering;
        self
    }

    /// Converts a protocol depth limit, where any negative value means
    /// unlimited.
    pub fn depth_from_limit(limit: i64) -> Depth {
        if limit < 0 {
            UNLIMITED_DEPTH
        } else {
            Depth::try_from(limit).unwrap_or(UNLIMITED_DEPTH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_from_limit() {
        assert_eq!(SearchRunOptions::depth_from_limit(-1), UNLIMITED_DEPTH);
        assert_eq!(SearchRunOptions::depth_from_limit(0), 0);
        assert_eq!(SearchRunOptions::depth_from_limit(6), 6);
    }

    #[test]
    fn test_builders() {
        let run = SearchRunOptions::with_depth(4)
            .algorithm(Algorithm::Minimax)
            .caching(true)
            .ordering(true);
        assert_eq!(run.depth, 4);
        assert_eq!(run.algorithm, Algorithm::Minimax);
        assert!(run.use_caching && run.use_ordering);

        let options = SearchOptions::default()
            .with_leaf_evaluation(LeafEvaluation::DiscDifference)
            .with_cache_policy(CachePolicy::Persistent);
        assert_eq!(options.weights, EvalWeights::default());
        assert_eq!(options.leaf_evaluation, LeafEvaluation::DiscDifference);
        assert_eq!(options.cache_policy, CachePolicy::Persistent);
    }

    #[test]
    fn test_options_from_toml() {
        let options: SearchOptions = toml::from_str(
            "leaf_evaluation = \"disc-difference\"\ncache_policy = \"persistent\"\n[weights]\ncorner = 25\n",
        )
        .unwrap();
        assert_eq!(options.leaf_evaluation, LeafEvaluation::DiscDifference);
        assert_eq!(options.cache_policy, CachePolicy::Persistent);
        assert_eq!(options.weights.corner, 25);
        assert_eq!(options.weights.mobility, 40);
    }
}
