use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::perft::{perft, perft_root};

#[test]
fn test_perft() {
    let nodes = perft_root(8);
    assert_eq!(nodes, 390_216);
}

#[test]
fn test_perft_small_boards() {
    // Even-sized starts mirror onto each other when the colors swap.
    for size in [4, 6] {
        let board = Board::new(size).unwrap();
        let black = perft(&board, Disc::Black, 5);
        let white = perft(&board, Disc::White, 5);
        assert_eq!(black, white, "size {size}");
        assert!(black > 0);
    }
}
