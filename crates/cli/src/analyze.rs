//! One-shot analysis of a position given on the command line.

use std::time::Instant;

use anyhow::Context;
use colored::Colorize;
use num_format::{Locale, ToFormattedString};
use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::search::{Algorithm, Search, SearchOptions, SearchRunOptions};
use othello_core::types::UNLIMITED_DEPTH;

use crate::game;

/// Position and search switches for one analysis.
#[derive(Debug, Clone)]
pub struct Request {
    pub board: String,
    pub size: usize,
    pub color: Disc,
    pub depth: Option<u32>,
    pub use_alpha_beta: bool,
    pub use_caching: bool,
    pub use_ordering: bool,
}

impl Request {
    fn run_options(&self) -> SearchRunOptions {
        let algorithm = if self.use_alpha_beta {
            Algorithm::AlphaBeta
        } else {
            Algorithm::Minimax
        };
        SearchRunOptions::with_depth(self.depth.unwrap_or(UNLIMITED_DEPTH))
            .algorithm(algorithm)
            .caching(self.use_caching)
            .ordering(self.use_ordering)
    }
}

/// Searches the requested position and prints the outcome.
pub fn analyze(request: &Request, options: &SearchOptions) -> anyhow::Result<()> {
    let board = Board::from_string(&request.board, request.size)
        .with_context(|| format!("invalid {0}x{0} board", request.size))?;
    let run_options = request.run_options();

    let mut search = Search::new(options);
    let start = Instant::now();
    let result = search.run(&board, request.color, &run_options)?;
    let elapsed = start.elapsed();

    game::print_board(&board, request.color, result.best_move);
    println!();

    let best_move = match result.best_move {
        Some(sq) => sq.to_string().bright_green(),
        None => "pass".bright_red(),
    };
    let score = match result.score {
        s if s > 0 => format!("{s:+}").bright_green(),
        s if s < 0 => format!("{s:+}").bright_red(),
        s => format!("{s}").bright_cyan(),
    };
    let depth = match request.depth {
        Some(depth) => depth.to_string(),
        None => "unlimited".to_string(),
    };
    let secs = elapsed.as_secs_f64();
    let nps = if secs > 0.0 {
        (result.n_nodes as f64 / secs).round() as u64
    } else {
        0
    };

    let weights = search.eval().weights();
    let stats = [
        ("Algorithm", format!("{:?}", result.algorithm)),
        (
            "Weights",
            format!(
                "mobility {}, square {}, corner {}, stability {}",
                weights.mobility, weights.square, weights.corner, weights.stability
            ),
        ),
        ("Depth", depth),
        ("Move", best_move.to_string()),
        ("Score", score.to_string()),
        ("Nodes", result.n_nodes.to_formatted_string(&Locale::en)),
        ("Cache hits", result.cache_hits.to_formatted_string(&Locale::en)),
        ("Time", format!("{secs:.4}s")),
        ("NPS", nps.to_formatted_string(&Locale::en)),
    ];
    let width = stats.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in stats {
        println!("- {label:<width$}: {value}");
    }
    Ok(())
}
