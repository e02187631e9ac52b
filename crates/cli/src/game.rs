//! Colored board rendering for terminal output.

use colored::Colorize;
use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::square::Square;

/// Prints `board` with `color` to move, marking its legal moves and `chosen`.
pub fn print_board(board: &Board, color: Disc, chosen: Option<Square>) {
    let size = board.size();
    let legal = board.get_moves(color);
    let (black_count, white_count) = board.score();

    let files: String = (0..size)
        .map(|file| format!(" {} ", (b'a' + file as u8) as char))
        .collect::<Vec<_>>()
        .join(" ");
    println!("     {files}");
    println!("    ┌{}┐", vec!["───"; size].join("┬"));

    for rank in 0..size {
        print!("  {} │", rank + 1);
        for file in 0..size {
            let sq = Square::from_file_rank(file, rank);
            let symbol = match board.get_disc_at(sq) {
                Disc::Black => " X ".bright_green(),
                Disc::White => " O ".bright_yellow(),
                Disc::Empty if Some(sq) == chosen => " * ".on_bright_black().bright_cyan(),
                Disc::Empty if legal.contains(sq) => " · ".bright_cyan(),
                Disc::Empty => "   ".normal(),
            };
            print!("{symbol}│");
        }

        match rank {
            0 => match color {
                Disc::Black => println!("   {}", "Black to move (X)".bright_green()),
                _ => println!("   {}", "White to move (O)".bright_yellow()),
            },
            1 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
            2 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
            3 if board.is_game_over() => println!("   {}", "*** Game Over ***".bright_red()),
            _ => println!(),
        }

        if rank + 1 < size {
            println!("    ├{}┤", vec!["───"; size].join("┼"));
        }
    }

    println!("    └{}┘", vec!["───"; size].join("┴"));
}
