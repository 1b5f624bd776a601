//! Failure kinds reported when a pair of vectors cannot be scored.

use thiserror::Error;

use crate::modes::SimilarityMode;

/// A score produced by the dispatcher.
pub type Sample = f64;

/// The value `Engine::compute` returns in place of a score when the pair is
/// rejected.
///
/// A cosine similarity of exactly `-1.0` is indistinguishable from this value.
/// Use `Engine::try_compute` or `score` when that matters.
pub const SENTINEL: Sample = -1.0;

/// Why a pair of vectors could not be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// There is no current metric or mismatched-length policy.
    #[error("no similarity mode or mismatch mode is configured")]
    ConfigurationUnavailable,
    /// The metric does not accept an empty vector in this position.
    #[error("{metric} does not accept empty input (lengths {left} and {right})")]
    EmptyInputRejected {
        /// The metric that rejected the pair.
        metric: SimilarityMode,
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },
    /// The metric needs equal lengths and the policy is to bail.
    #[error("{metric} needs vectors of equal length, got {left} and {right}")]
    LengthMismatchRejected {
        /// The metric that rejected the pair.
        metric: SimilarityMode,
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },
}

/// A mode name that did not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseModeError {
    /// Not the name of a `SimilarityMode`.
    #[error("unknown similarity mode: {0:?}")]
    UnknownSimilarityMode(String),
    /// Not the name of a `MismatchMode`.
    #[error("unknown mismatch mode: {0:?}")]
    UnknownMismatchMode(String),
}
