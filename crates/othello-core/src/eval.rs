//! Static position evaluation.
//!
//! Two evaluators are provided:
//! - [`evaluate_exact`]: final disc difference, used at true terminals.
//! - [`Eval::evaluate_heuristic`]: weighted mobility, positional and corner
//!   features, used at depth cutoffs and for move ordering.
//!
//! Both are signed for the requested perspective color and antisymmetric:
//! swapping the perspective negates the value.

mod square_weights;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::disc::Disc;
use crate::types::Score;

/// Largest heuristic magnitude, strictly inside the search window sentinels.
const HEURISTIC_BOUND: Score = SCORE_INF - 1;

/// Feature weights of the heuristic evaluator.
///
/// Missing fields in a TOML file fall back to [`EvalWeights::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Multiplier of the legal-move count difference.
    pub mobility: Score,
    /// Multiplier of the positional square-weight sum.
    pub square: Score,
    /// Multiplier of the corner occupancy difference.
    pub corner: Score,
    /// Multiplier of the stability feature.
    pub stability: Score,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            mobility: 40,
            square: 60,
            corner: 0,
            stability: 0,
        }
    }
}

/// Errors raised while loading evaluator weights.
#[derive(Debug, Error)]
pub enum WeightsError {
    #[error("failed to read weights file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid weights file")]
    Parse(#[from] toml::de::Error),
    #[error("weight {name} = {value} is outside ±{max}", max = EvalWeights::MAX_ABS)]
    OutOfRange { name: &'static str, value: Score },
}

impl EvalWeights {
    /// Largest accepted magnitude of a single weight.
    pub const MAX_ABS: Score = 10_000;

    /// Parses weights from TOML text such as `mobility = 40`.
    ///
    /// Weights outside `±MAX_ABS` are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self, WeightsError> {
        let weights: EvalWeights = toml::from_str(text)?;
        weights.validate()
    }

    /// Checks every weight against `MAX_ABS`.
    pub fn validate(self) -> Result<Self, WeightsError> {
        let fields = [
            ("mobility", self.mobility),
            ("square", self.square),
            ("corner", self.corner),
            ("stability", self.stability),
        ];
        match fields
            .into_iter()
            .find(|&(_, value)| value.unsigned_abs() > Self::MAX_ABS.unsigned_abs())
        {
            Some((name, value)) => Err(WeightsError::OutOfRange { name, value }),
            None => Ok(self),
        }
    }

    /// Loads weights from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the file to read.
    ///
    /// # Returns
    ///
    /// The parsed weights, or a `WeightsError` naming the file on I/O failure.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WeightsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WeightsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Evaluator applied at non-terminal leaves of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafEvaluation {
    /// Weighted heuristic of [`Eval::evaluate_heuristic`].
    #[default]
    Heuristic,
    /// Plain disc difference of [`evaluate_exact`].
    DiscDifference,
}

/// Returns the disc count of `perspective` minus the disc count of its
/// opponent.
///
/// # Arguments
///
/// * `board` - Position to score.
/// * `perspective` - `Disc::Black` or `Disc::White`.
#[inline]
pub fn evaluate_exact(board: &Board, perspective: Disc) -> Score {
    let own = board.discs(perspective).count() as Score;
    let opp = board.discs(perspective.opposite()).count() as Score;
    own - opp
}

/// Heuristic evaluator parameterized by [`EvalWeights`].
#[derive(Debug, Clone, Default)]
pub struct Eval {
    weights: EvalWeights,
}

impl Eval {
    pub fn new(weights: EvalWeights) -> Eval {
        Eval { weights }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Evaluates a non-terminal position for `perspective`.
    ///
    /// The value is
    /// `mobility * Δmoves + square * Σweights + corner * Δcorners + stability * Δstable`
    /// where every difference is own minus opponent. The sum saturates and is
    /// clamped to `±(SCORE_INF - 1)`.
    pub fn evaluate_heuristic(&self, board: &Board, perspective: Disc) -> Score {
        let opponent = perspective.opposite();
        let w = &self.weights;

        let mobility = board.get_moves(perspective).count() as Score
            - board.get_moves(opponent).count() as Score;
        let corners = board.corners();
        let corner = (board.discs(perspective) & corners).count() as Score
            - (board.discs(opponent) & corners).count() as Score;

        let terms = [
            (mobility, w.mobility),
            (square_weight_sum(board, perspective), w.square),
            (corner, w.corner),
            (stability(board, perspective), w.stability),
        ];
        terms
            .into_iter()
            .fold(0 as Score, |acc, (feature, weight)| {
                acc.saturating_add(feature.saturating_mul(weight))
            })
            .clamp(-HEURISTIC_BOUND, HEURISTIC_BOUND)
    }

    /// Evaluates a leaf with the requested evaluator.
    #[inline]
    pub fn evaluate_leaf(&self, board: &Board, perspective: Disc, leaf: LeafEvaluation) -> Score {
        match leaf {
            LeafEvaluation::Heuristic => self.evaluate_heuristic(board, perspective),
            LeafEvaluation::DiscDifference => evaluate_exact(board, perspective),
        }
    }
}

/// Sum of the square weights under own discs minus those under opponent discs.
fn square_weight_sum(board: &Board, perspective: Disc) -> Score {
    let size = board.size();
    let table = square_weights::for_size(size);
    let weight = |sq: crate::square::Square| table[sq.rank() * size + sq.file()];

    let own: Score = board.discs(perspective).iter().map(weight).sum();
    let opp: Score = board.discs(perspective.opposite()).iter().map(weight).sum();
    own - opp
}

/// Stable-disc difference. Not computed yet; always 0.
fn stability(_board: &Board, _perspective: Disc) -> Score {
    0
}
