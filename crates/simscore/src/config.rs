//! The metric and mismatched-length policy used for one call to `score`.

use serde::{Deserialize, Serialize};

use crate::modes::{MismatchMode, SimilarityMode};

/// An immutable scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The metric to score with.
    pub metric: SimilarityMode,
    /// What to do with vectors of unequal length when `metric` needs equal
    /// lengths.
    pub mismatch: MismatchMode,
}

impl Config {
    /// Creates a configuration from its two settings.
    #[must_use]
    pub const fn new(metric: SimilarityMode, mismatch: MismatchMode) -> Self {
        Self { metric, mismatch }
    }

    /// Returns a copy with `metric` replaced.
    #[must_use]
    pub const fn with_metric(self, metric: SimilarityMode) -> Self {
        Self { metric, ..self }
    }

    /// Returns a copy with `mismatch` replaced.
    #[must_use]
    pub const fn with_mismatch(self, mismatch: MismatchMode) -> Self {
        Self { mismatch, ..self }
    }
}
