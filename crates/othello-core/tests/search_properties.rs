use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::error::SearchError;
use othello_core::eval::evaluate_exact;
use othello_core::search::{select_move, Algorithm, Search, SearchOptions, SearchResult, SearchRunOptions};
use othello_core::square::Square;
use othello_core::types::{Depth, UNLIMITED_DEPTH};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

/// Plays `plies` random legal moves from the start position, passing when
/// the side to move is blocked. Returns the position and the side to move.
fn random_position(rng: &mut StdRng, size: usize, plies: usize) -> (Board, Disc) {
    let mut board = Board::new(size).unwrap();
    let mut color = Disc::Black;
    for _ in 0..plies {
        if board.is_game_over() {
            break;
        }
        if !board.has_legal_moves(color) {
            color = color.opposite();
            continue;
        }
        let sq = board.get_moves(color).iter().choose(rng).unwrap();
        board = board.make_move(color, sq);
        color = color.opposite();
    }
    (board, color)
}

fn positions(seed: u64, size: usize, count: usize) -> Vec<(Board, Disc)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_plies = size * size - 4;
    (0..count)
        .map(|_| {
            let plies = rng.random_range(0..max_plies);
            random_position(&mut rng, size, plies)
        })
        .collect()
}

fn run(board: &Board, color: Disc, options: SearchRunOptions) -> SearchResult {
    let mut search = Search::new(&SearchOptions::default());
    search.run(board, color, &options).unwrap()
}

fn depths_for(size: usize) -> &'static [Depth] {
    match size {
        4 => &[1, 2, 3, 5, UNLIMITED_DEPTH],
        6 => &[1, 2, 3, 4],
        _ => &[1, 2, 3],
    }
}

#[test]
fn test_alphabeta_matches_minimax() {
    for (seed, size) in [(1, 4), (2, 6), (3, 8)] {
        for (board, to_move) in positions(seed, size, 12) {
            for color in [to_move, to_move.opposite()] {
                for &depth in depths_for(size) {
                    let mm = run(&board, color, SearchRunOptions::with_depth(depth).algorithm(Algorithm::Minimax));
                    let ab = run(&board, color, SearchRunOptions::with_depth(depth));
                    assert_eq!(ab.score, mm.score, "size {size} depth {depth}\n{board}");
                    assert_eq!(ab.best_move, mm.best_move, "size {size} depth {depth}\n{board}");
                    assert!(ab.n_nodes <= mm.n_nodes);
                }
            }
        }
    }
}

#[test]
fn test_ordering_does_not_change_value() {
    for (seed, size) in [(11, 4), (12, 6), (13, 8)] {
        for (board, color) in positions(seed, size, 10) {
            for &depth in depths_for(size) {
                let plain = run(&board, color, SearchRunOptions::with_depth(depth));
                let ordered = run(&board, color, SearchRunOptions::with_depth(depth).ordering(true));
                assert_eq!(ordered.score, plain.score, "size {size} depth {depth}\n{board}");
                assert_eq!(ordered.best_move.is_some(), plain.best_move.is_some());
            }
        }
    }
}

#[test]
fn test_caching_does_not_change_value() {
    for (seed, size) in [(21, 4), (22, 6)] {
        for (board, color) in positions(seed, size, 10) {
            for &depth in depths_for(size) {
                for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
                    for use_ordering in [false, true] {
                        let options = SearchRunOptions::with_depth(depth)
                            .algorithm(algorithm)
                            .ordering(use_ordering);
                        let plain = run(&board, color, options);
                        let cached = run(&board, color, options.caching(true));
                        assert_eq!(
                            cached.score, plain.score,
                            "{algorithm:?} ordering {use_ordering} depth {depth}\n{board}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_exact_evaluation_is_antisymmetric() {
    for (seed, size) in [(31, 4), (32, 5), (33, 6), (34, 7), (35, 8)] {
        for (board, _) in positions(seed, size, 20) {
            assert_eq!(
                evaluate_exact(&board, Disc::Black),
                -evaluate_exact(&board, Disc::White)
            );
        }
    }
}

#[test]
fn test_repeated_calls_are_idempotent() {
    let mut search = Search::new(&SearchOptions::default());
    for (board, color) in positions(41, 6, 8) {
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let options = SearchRunOptions::with_depth(3).algorithm(algorithm).ordering(true);
            let first = search.run(&board, color, &options).unwrap();
            let second = search.run(&board, color, &options).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_terminal_positions_use_exact_score() {
    // Full board: 10 black, 6 white.
    let full = Board::from_string("XXXXXXXXXXOOOOOO", 4).unwrap();
    // Nobody can move: a single black disc and a single white disc far apart.
    let blocked = Board::from_string("X--------------O", 4).unwrap();

    for board in [full, blocked] {
        assert!(board.is_game_over());
        for color in [Disc::Black, Disc::White] {
            for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
                let result = run(&board, color, SearchRunOptions::with_depth(4).algorithm(algorithm));
                assert_eq!(result.best_move, None);
                assert_eq!(result.score, evaluate_exact(&board, color));
                assert_eq!(result.n_nodes, 1);
            }
        }
    }
}

#[test]
fn test_small_board_opening() {
    let board = Board::new(4).unwrap();
    let openings = [Square::B1, Square::A2, Square::D3, Square::C4];

    let ab = run(&board, Disc::Black, SearchRunOptions::with_depth(2));
    let mm = run(&board, Disc::Black, SearchRunOptions::with_depth(2).algorithm(Algorithm::Minimax));
    assert!(ab.best_move.is_some_and(|sq| openings.contains(&sq)));
    assert_eq!(ab.score, mm.score);

    let chosen = select_move(&board, Disc::Black, 2, true, true, true).unwrap();
    assert!(chosen.is_some_and(|sq| openings.contains(&sq)));
}

#[test]
fn test_blocked_color_gets_no_move() {
    // Black can take C1; white has nowhere to go.
    let board = Board::from_string("XO--------------", 4).unwrap();
    for use_alpha_beta in [false, true] {
        for use_caching in [false, true] {
            let chosen = select_move(&board, Disc::White, 3, use_caching, true, use_alpha_beta);
            assert_eq!(chosen, Ok(None));
        }
    }
}

#[test]
fn test_invalid_color_is_rejected() {
    let board = Board::new(6).unwrap();
    assert_eq!(
        select_move(&board, Disc::Empty, 2, false, false, false),
        Err(SearchError::InvalidColor(Disc::Empty))
    );
}

#[test]
fn test_chosen_move_is_legal() {
    for (seed, size) in [(51, 5), (52, 7)] {
        for (board, color) in positions(seed, size, 10) {
            let legal = board.get_moves(color);
            let chosen = select_move(&board, color, 2, true, true, true).unwrap();
            match chosen {
                Some(sq) => assert!(legal.contains(sq)),
                None => assert!(legal.is_empty()),
            }
        }
    }
}
