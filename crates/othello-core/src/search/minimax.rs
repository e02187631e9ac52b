//! Full-width minimax search.
//!
//! Every legal child of every node is expanded. A mover without legal moves
//! ends the line: the node is a leaf even if the other color could move.

use crate::board::Board;
use crate::move_list::MoveList;
use crate::search::node_type::{MaxNode, MinNode, NodeType};
use crate::search::search_context::SearchContext;
use crate::square::Square;
use crate::transposition_table::Bound;
use crate::types::{Depth, Score};

/// Searches a node where the perspective color is to move.
///
/// # Arguments
///
/// * `ctx` - Search context.
/// * `board` - Current board position.
/// * `depth` - Remaining depth.
///
/// # Returns
///
/// The first move achieving the maximum utility and that utility. The move
/// is `None` at leaves.
pub fn max_node(ctx: &mut SearchContext, board: &Board, depth: Depth) -> (Option<Square>, Score) {
    search::<MaxNode>(ctx, board, depth)
}

/// Searches a node where the opponent of the perspective color is to move.
///
/// # Returns
///
/// The first move achieving the minimum utility and that utility.
pub fn min_node(ctx: &mut SearchContext, board: &Board, depth: Depth) -> (Option<Square>, Score) {
    search::<MinNode>(ctx, board, depth)
}

fn search<NT: NodeType>(
    ctx: &mut SearchContext,
    board: &Board,
    depth: Depth,
) -> (Option<Square>, Score) {
    ctx.increment_nodes();

    let mover = NT::mover(ctx.perspective);
    let move_list = MoveList::new(board, mover);
    if move_list.is_empty() || depth == 0 {
        return (None, ctx.evaluate(board));
    }

    let key = ctx.cache_key::<NT>(board);
    if let Some(entry) = ctx.probe_exact(&key, depth) {
        return (entry.best_move, entry.score);
    }

    let mut best_move = None;
    let mut best_score = NT::WORST;
    for mv in move_list.iter() {
        let next = board.make_move_with_flipped(mover, mv.flipped, mv.sq);
        let (_, score) = search::<NT::Child>(ctx, &next, depth - 1);
        if NT::is_better(score, best_score) {
            best_score = score;
            best_move = Some(mv.sq);
        }
    }

    ctx.store(key, best_move, best_score, depth, Bound::Exact);
    (best_move, best_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;
    use crate::eval::{Eval, LeafEvaluation, evaluate_exact};
    use crate::transposition_table::TranspositionCache;

    fn context(eval: &Eval, perspective: Disc) -> SearchContext<'_> {
        SearchContext::new(perspective, eval, LeafEvaluation::DiscDifference, None, false)
    }

    #[test]
    fn test_depth_one_picks_best_child() {
        let eval = Eval::default();
        let board = Board::new(4).unwrap();
        let mut ctx = context(&eval, Disc::Black);
        let (best_move, score) = max_node(&mut ctx, &board, 1);

        // Every opening move flips one disc: +3 for black. B1 is first.
        assert_eq!(best_move, Some(Square::B1));
        assert_eq!(score, 3);
        assert_eq!(ctx.n_nodes, 5);
    }

    #[test]
    fn test_min_node_minimizes() {
        let eval = Eval::default();
        let board = Board::new(4).unwrap();
        let mut ctx = context(&eval, Disc::Black);
        let (best_move, score) = min_node(&mut ctx, &board, 1);
        assert!(best_move.is_some());
        assert_eq!(score, -3);
    }

    #[test]
    fn test_no_moves_is_leaf() {
        let eval = Eval::default();
        let board = Board::from_string("XXXXXXXXOOOOOOOO", 4).unwrap();
        let mut ctx = context(&eval, Disc::White);
        assert_eq!(max_node(&mut ctx, &board, 5), (None, 0));
        assert_eq!(ctx.n_nodes, 1);
    }

    #[test]
    fn test_depth_zero_is_leaf() {
        let eval = Eval::default();
        let board = Board::new(4).unwrap();
        let mut ctx = context(&eval, Disc::Black);
        assert_eq!(max_node(&mut ctx, &board, 0), (None, 0));
    }

    #[test]
    fn test_cache_preserves_value() {
        let eval = Eval::default();
        let board = Board::new(4).unwrap();

        let mut plain = context(&eval, Disc::Black);
        let (plain_move, plain_score) = max_node(&mut plain, &board, 6);

        let mut cache = TranspositionCache::new();
        let mut cached = SearchContext::new(
            Disc::Black,
            &eval,
            LeafEvaluation::DiscDifference,
            Some(&mut cache),
            false,
        );
        let (cached_move, cached_score) = max_node(&mut cached, &board, 6);
        let cached_nodes = cached.n_nodes;

        assert_eq!(cached_score, plain_score);
        assert_eq!(cached_move, plain_move);
        assert!(cached_nodes <= plain.n_nodes);
    }

    #[test]
    fn test_full_depth_matches_exact_at_terminal() {
        // Black C1 captures the only white disc and ends the game.
        let eval = Eval::default();
        let board = Board::from_string("XO--------------", 4).unwrap();
        let mut ctx = context(&eval, Disc::Black);
        let (best_move, score) = max_node(&mut ctx, &board, 10);
        let child = board.make_move(Disc::Black, Square::C1);
        assert_eq!(best_move, Some(Square::C1));
        assert_eq!(score, evaluate_exact(&child, Disc::Black));
        assert_eq!(score, 3);
    }

    #[test]
    fn test_repeated_search_hits_root_entry() {
        let eval = Eval::default();
        let board = Board::new(4).unwrap();
        let mut cache = TranspositionCache::new();

        let first = {
            let mut ctx = SearchContext::new(
                Disc::White,
                &eval,
                LeafEvaluation::Heuristic,
                Some(&mut cache),
                false,
            );
            max_node(&mut ctx, &board, 3)
        };
        let mut ctx = SearchContext::new(
            Disc::White,
            &eval,
            LeafEvaluation::Heuristic,
            Some(&mut cache),
            false,
        );
        let second = max_node(&mut ctx, &board, 3);
        assert_eq!(first, second);
        assert_eq!(ctx.n_nodes, 1);
    }
}
