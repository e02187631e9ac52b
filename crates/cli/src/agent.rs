//! Game-manager protocol over stdin/stdout.
//!
//! The manager sends one configuration line, then alternates status lines
//! (`SCORE dark light` or `FINAL dark light`) with board lines. The agent
//! answers every board with `column row` of its move.

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::search::{Algorithm, Search, SearchOptions, SearchRunOptions};
use othello_core::types::{Depth, UNLIMITED_DEPTH};
use tracing::{debug, info, warn};

const AGENT_NAME: &str = "Othello AI";

/// Settings sent by the manager on the first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AgentConfig {
    color: Disc,
    depth: Depth,
    algorithm: Algorithm,
    use_caching: bool,
    use_ordering: bool,
}

impl AgentConfig {
    /// Parses `color,limit,minimax,caching,ordering`.
    fn parse(line: &str) -> anyhow::Result<AgentConfig> {
        let fields: Vec<i64> = line
            .trim()
            .split(',')
            .map(|field| {
                field
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("invalid configuration field '{}'", field.trim()))
            })
            .collect::<anyhow::Result<_>>()?;

        let &[color, limit, minimax, caching, ordering] = fields.as_slice() else {
            bail!("expected 5 configuration fields, got {}", fields.len());
        };

        let color = match color {
            1 => Disc::Black,
            2 => Disc::White,
            other => bail!("invalid player color {other}"),
        };
        let algorithm = if minimax == 1 {
            Algorithm::Minimax
        } else {
            Algorithm::AlphaBeta
        };

        Ok(AgentConfig {
            color,
            depth: SearchRunOptions::depth_from_limit(limit),
            algorithm,
            use_caching: caching == 1,
            use_ordering: ordering == 1,
        })
    }

    fn run_options(&self) -> SearchRunOptions {
        SearchRunOptions::with_depth(self.depth)
            .algorithm(self.algorithm)
            .caching(self.use_caching)
            .ordering(self.use_ordering)
    }

    fn log(&self) {
        match self.algorithm {
            Algorithm::Minimax => info!("running minimax"),
            Algorithm::AlphaBeta => info!("running alpha-beta"),
        }
        info!("state caching is {}", on_off(self.use_caching));
        info!("node ordering is {}", on_off(self.use_ordering));
        if self.depth == UNLIMITED_DEPTH {
            info!("depth limit is off");
        } else {
            info!("depth limit is {}", self.depth);
        }
        if self.algorithm == Algorithm::Minimax && self.use_ordering {
            warn!("node ordering has no effect on minimax");
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Runs the agent on the process's stdin and stdout.
pub fn run(options: &SearchOptions) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(stdin.lock(), stdout.lock(), options)
}

/// Drives one game of the protocol.
fn serve<R: BufRead, W: Write>(input: R, mut output: W, options: &SearchOptions) -> anyhow::Result<()> {
    writeln!(output, "{AGENT_NAME}")?;
    output.flush()?;

    let mut lines = input.lines();
    let config_line = lines.next().context("missing configuration line")??;
    let config = AgentConfig::parse(&config_line)?;
    config.log();

    let run_options = config.run_options();
    let mut search = Search::new(options);

    while let Some(status_line) = lines.next() {
        let status_line = status_line?;
        let mut parts = status_line.split_whitespace();
        let (Some(status), Some(dark), Some(light)) = (parts.next(), parts.next(), parts.next())
        else {
            bail!("malformed status line '{status_line}'");
        };
        debug!(status, dark, light, "status");

        match status {
            "FINAL" => {
                info!("game over: dark {dark}, light {light}");
                return Ok(());
            }
            "SCORE" => {}
            other => bail!("unknown status '{other}'"),
        }

        let board_line = lines.next().context("missing board line")??;
        let board = Board::from_rows_literal(&board_line)
            .with_context(|| format!("failed to parse board '{board_line}'"))?;

        let result = search.run(&board, config.color, &run_options)?;
        let Some(sq) = result.best_move else {
            bail!("no legal move for {:?} on\n{board}", config.color);
        };

        writeln!(output, "{} {}", sq.file(), sq.rank())?;
        output.flush()?;
    }

    Ok(())
}
