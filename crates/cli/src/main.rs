mod agent;
mod analyze;
mod game;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use othello_core::disc::Disc;
use othello_core::eval::{EvalWeights, LeafEvaluation};
use othello_core::search::{CachePolicy, SearchOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
struct EngineParams {
    /// TOML file overriding the heuristic weights
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    weights: Option<PathBuf>,

    /// Score depth-limited leaves by disc difference instead of the heuristic
    #[arg(long)]
    disc_difference: bool,

    /// Keep the transposition cache between moves of one game
    #[arg(long)]
    persistent_cache: bool,
}

impl EngineParams {
    fn search_options(&self) -> anyhow::Result<SearchOptions> {
        let weights = match &self.weights {
            Some(path) => EvalWeights::from_toml_file(path)
                .with_context(|| format!("failed to load weights from {}", path.display()))?,
            None => EvalWeights::default(),
        };

        let mut options = SearchOptions::new(weights);
        if self.disc_difference {
            options = options.with_leaf_evaluation(LeafEvaluation::DiscDifference);
        }
        if self.persistent_cache {
            options = options.with_cache_policy(CachePolicy::Persistent);
        }
        Ok(options)
    }
}

#[derive(Parser, Debug)]
#[command(name = "othello-agent", about = "Othello game-tree search agent")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    engine_params: EngineParams,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Color {
    Black,
    White,
}

impl From<Color> for Disc {
    fn from(color: Color) -> Disc {
        match color {
            Color::Black => Disc::Black,
            Color::White => Disc::White,
        }
    }
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Play through the game-manager protocol on stdin/stdout
    Agent {
        #[command(flatten)]
        engine_params: EngineParams,
    },
    /// Search a single position and print the result
    Analyze {
        /// Row-major cells: X black, O white, - empty
        #[arg(long)]
        board: String,

        #[arg(long, default_value = "8")]
        size: usize,

        #[arg(long, value_enum, default_value = "black")]
        color: Color,

        /// Depth limit; omit to search to the end of the game
        #[arg(long)]
        depth: Option<u32>,

        #[arg(long)]
        minimax: bool,

        #[arg(long)]
        no_cache: bool,

        #[arg(long)]
        no_ordering: bool,

        #[command(flatten)]
        engine_params: EngineParams,
    },
}

fn main() -> anyhow::Result<()> {
    // Stdout carries the protocol, so every log line goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    match args.command {
        Some(SubCommands::Analyze {
            board,
            size,
            color,
            depth,
            minimax,
            no_cache,
            no_ordering,
            engine_params,
        }) => {
            let request = analyze::Request {
                board,
                size,
                color: color.into(),
                depth,
                use_alpha_beta: !minimax,
                use_caching: !no_cache,
                use_ordering: !no_ordering,
            };
            analyze::analyze(&request, &engine_params.search_options()?)
        }
        Some(SubCommands::Agent { engine_params }) => {
            agent::run(&engine_params.search_options()?)
        }
        None => agent::run(&args.engine_params.search_options()?),
    }
}
