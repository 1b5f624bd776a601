//! The metrics and mismatched-length policies that can be selected.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseModeError;

/// The metric used to score a pair of vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMode {
    /// Cosine of the angle between the vectors.
    #[default]
    Cosine,
    /// Extended Jaccard similarity over real values.
    Tanimoto,
    /// Set overlap normalized by the geometric mean of the set sizes.
    Ochiai,
    /// Set intersection over set union.
    JaccardIndex,
    /// One minus the Jaccard index.
    JaccardDistance,
    /// Set overlap normalized by the arithmetic mean of the set sizes.
    Dice,
    /// Number of positions at which the vectors differ.
    Hamming,
}

impl SimilarityMode {
    /// Every metric, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Cosine,
        Self::Tanimoto,
        Self::Ochiai,
        Self::JaccardIndex,
        Self::JaccardDistance,
        Self::Dice,
        Self::Hamming,
    ];

    /// Whether the metric is defined when both vectors are empty.
    #[must_use]
    pub const fn allows_empty_pair(self) -> bool {
        matches!(self, Self::Hamming)
    }

    /// Whether the metric rejects a pair in which exactly one vector is empty.
    #[must_use]
    pub const fn rejects_single_empty(self) -> bool {
        matches!(self, Self::Cosine | Self::Tanimoto | Self::Ochiai)
    }

    /// Whether the metric is only defined on vectors of equal length.
    ///
    /// The mismatched-length policy only ever applies to these metrics.
    #[must_use]
    pub const fn requires_equal_length(self) -> bool {
        matches!(self, Self::Cosine | Self::Tanimoto | Self::Hamming)
    }

    /// Whether the metric collapses each vector into the set of its distinct
    /// values before scoring.
    #[must_use]
    pub const fn is_set_based(self) -> bool {
        matches!(
            self,
            Self::Ochiai | Self::JaccardIndex | Self::JaccardDistance | Self::Dice
        )
    }

    /// The canonical `snake_case` name of the metric.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cosine => "cosine",
            Self::Tanimoto => "tanimoto",
            Self::Ochiai => "ochiai",
            Self::JaccardIndex => "jaccard_index",
            Self::JaccardDistance => "jaccard_distance",
            Self::Dice => "dice",
            Self::Hamming => "hamming",
        }
    }
}

/// What to do when a metric needs equal lengths and the lengths differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchMode {
    /// Reject the pair.
    #[default]
    Bail,
    /// Cut the longer vector down to the length of the shorter one.
    Truncate,
}

impl MismatchMode {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 2] = [Self::Bail, Self::Truncate];

    /// The canonical `snake_case` name of the policy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bail => "bail",
            Self::Truncate => "truncate",
        }
    }
}

impl fmt::Display for SimilarityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for MismatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercases `s` and drops `_` and `-`, so that `JaccardIndex`,
/// `jaccard_index` and `jaccard-index` all compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for SimilarityMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|m| normalize(m.name()) == key)
            .ok_or_else(|| ParseModeError::UnknownSimilarityMode(s.to_string()))
    }
}

impl FromStr for MismatchMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|m| normalize(m.name()) == key)
            .ok_or_else(|| ParseModeError::UnknownMismatchMode(s.to_string()))
    }
}
