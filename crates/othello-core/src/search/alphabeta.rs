//! Alpha-beta search.
//!
//! Fail-soft alpha-beta over the same max/min node structure as minimax.
//! Returns the same root utility as [`minimax`](super::minimax) for every
//! window that contains it, while skipping subtrees that cannot change the
//! result.

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
/// * `alpha` - Best utility the maximizer is already assured of.
/// * `beta` - Best utility the minimizer is already assured of.
/// * `depth` - Remaining depth.
///
/// # Returns
///
/// The best move and the fail-soft utility of the node.
pub fn max_node(
    ctx: &mut SearchContext,
    board: &Board,
    alpha: Score,
    beta: Score,
    depth: Depth,
) -> (Option<Square>, Score) {
    search::<MaxNode>(ctx, board, alpha, beta, depth)
}

/// Searches a node where the opponent of the perspective color is to move.
pub fn min_node(
    ctx: &mut SearchContext,
    board: &Board,
    alpha: Score,
    beta: Score,
    depth: Depth,
) -> (Option<Square>, Score) {
    search::<MinNode>(ctx, board, alpha, beta, depth)
}

fn search<NT: NodeType>(
    ctx: &mut SearchContext,
    board: &Board,
    mut alpha: Score,
    mut beta: Score,
    depth: Depth,
) -> (Option<Square>, Score) {
    ctx.increment_nodes();

    let mover = NT::mover(ctx.perspective);
    let mut move_list = MoveList::new(board, mover);
    if move_list.is_empty() || depth == 0 {
        return (None, ctx.evaluate(board));
    }

    let key = ctx.cache_key::<NT>(board);
    if let Some(entry) = ctx.probe(&key, depth, alpha, beta) {
        return (entry.best_move, entry.score);
    }

    ctx.order_moves::<NT>(&mut move_list, board);

    let (org_alpha, org_beta) = (alpha, beta);
    let mut best_move = None;
    let mut best_score = NT::WORST;
    for mv in move_list.iter() {
        let next = board.make_move_with_flipped(mover, mv.flipped, mv.sq);
        let (_, score) = search::<NT::Child>(ctx, &next, alpha, beta, depth - 1);
        if NT::is_better(score, best_score) {
            best_score = score;
            best_move = Some(mv.sq);
        }

        NT::narrow(&mut alpha, &mut beta, best_score);
        if alpha >= beta {
            break;
        }
    }

    let bound = Bound::classify(best_score, org_alpha, org_beta);
    ctx.store(key, best_move, best_score, depth, bound);
    (best_move, best_score)
}
