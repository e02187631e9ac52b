//! Node type definitions for the two-player tree searches.
//!
//! Utilities are always signed for the fixed perspective color, so the two
//! node kinds differ in who moves and in which direction they optimize.

use crate::constants::SCORE_INF;
use crate::disc::Disc;
use crate::transposition_table::NodeKind;
use crate::types::Score;

/// Max node: the perspective color is to move.
pub struct MaxNode;

/// Min node: the opponent of the perspective color is to move.
pub struct MinNode;

/// Trait for compile-time node type specialization.
pub trait NodeType {
    /// Node kind stored in cache keys.
    const KIND: NodeKind;
    /// Initial value of the running best score.
    const WORST: Score;
    /// Node type of the children.
    type Child: NodeType;

    /// Returns the color to move at this node.
    fn mover(perspective: Disc) -> Disc;

    /// Returns `true` if `score` strictly improves on `best` for the mover.
    fn is_better(score: Score, best: Score) -> bool;

    /// Tightens the window with the running best score.
    fn narrow(alpha: &mut Score, beta: &mut Score, best: Score);
}

impl NodeType for MaxNode {
    const KIND: NodeKind = NodeKind::Max;
    const WORST: Score = -SCORE_INF;
    type Child = MinNode;

    #[inline(always)]
    fn mover(perspective: Disc) -> Disc {
        perspective
    }

    #[inline(always)]
    fn is_better(score: Score, best: Score) -> bool {
        score > best
    }

    #[inline(always)]
    fn narrow(alpha: &mut Score, _beta: &mut Score, best: Score) {
        *alpha = (*alpha).max(best);
    }
}

impl NodeType for MinNode {
    const KIND: NodeKind = NodeKind::Min;
    const WORST: Score = SCORE_INF;
    type Child = MaxNode;

    #[inline(always)]
    fn mover(perspective: Disc) -> Disc {
        perspective.opposite()
    }

    #[inline(always)]
    fn is_better(score: Score, best: Score) -> bool {
        score < best
    }

    #[inline(always)]
    fn narrow(_alpha: &mut Score, beta: &mut Score, best: Score) {
        *beta = (*beta).min(best);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movers() {
        assert_eq!(MaxNode::mover(Disc::White), Disc::White);
        assert_eq!(MinNode::mover(Disc::White), Disc::Black);
    }

    #[test]
    fn test_narrow() {
        let (mut alpha, mut beta) = (-5, 5);
        MaxNode::narrow(&mut alpha, &mut beta, 2);
        assert_eq!((alpha, beta), (2, 5));
        MinNode::narrow(&mut alpha, &mut beta, 3);
        assert_eq!((alpha, beta), (2, 3));
        MinNode::narrow(&mut alpha, &mut beta, 9);
        assert_eq!((alpha, beta), (2, 3));
    }

    #[test]
    fn test_is_better_is_strict() {
        assert!(MaxNode::is_better(1, 0));
        assert!(!MaxNode::is_better(0, 0));
        assert!(MinNode::is_better(-1, 0));
        assert!(!MinNode::is_better(0, 0));
    }
}
