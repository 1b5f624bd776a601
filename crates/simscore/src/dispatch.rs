//! Validates a pair of vectors against a `Config` and routes them to a metric.

use crate::{
    config::Config,
    error::ScoreError,
    modes::{MismatchMode, SimilarityMode},
    sets, vectors,
};

/// Scores `a` against `b` with the metric and policy in `config`.
///
/// Validation runs in this order:
///
/// 1. Two empty vectors are rejected unless the metric is `Hamming`.
/// 2. One empty vector is rejected by `Cosine`, `Tanimoto` and `Ochiai`.
/// 3. Unequal lengths under `Cosine`, `Tanimoto` or `Hamming` are rejected
///    with `MismatchMode::Bail`. With `MismatchMode::Truncate` the longer
///    vector is cut to the length of the shorter one and the pair is scored.
///
/// # Errors
///
/// * `ScoreError::EmptyInputRejected` if an empty vector is not allowed.
/// * `ScoreError::LengthMismatchRejected` if the lengths differ, the metric
///   needs equal lengths, and the policy is `Bail`.
///
/// A zero vector is not an error. Under `Cosine` or `Tanimoto` it divides
/// zero by zero and the result is `Ok(NaN)`; callers that need a finite score
/// should check `is_nan`.
///
/// # Examples
///
/// ```
/// use simscore::{score, Config, ScoreError, SimilarityMode};
///
/// let config = Config::default().with_metric(SimilarityMode::JaccardIndex);
/// assert_eq!(score(&config, &[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]), Ok(0.5));
///
/// let config = config.with_metric(SimilarityMode::Cosine);
/// assert!(matches!(
///     score(&config, &[1.0, 2.0, 3.0], &[4.0, 5.0]),
///     Err(ScoreError::LengthMismatchRejected { left: 3, right: 2, .. })
/// ));
/// ```
pub fn score(config: &Config, a: &[f64], b: &[f64]) -> Result<f64, ScoreError> {
    let metric = config.metric;

    if a.is_empty() && b.is_empty() && !metric.allows_empty_pair() {
        return Err(reject(ScoreError::EmptyInputRejected {
            metric,
            left: 0,
            right: 0,
        }));
    }

    if metric.rejects_single_empty() && (a.is_empty() || b.is_empty()) {
        return Err(reject(ScoreError::EmptyInputRejected {
            metric,
            left: a.len(),
            right: b.len(),
        }));
    }

    if metric.requires_equal_length() && a.len() != b.len() {
        return match config.mismatch {
            MismatchMode::Bail => Err(reject(ScoreError::LengthMismatchRejected {
                metric,
                left: a.len(),
                right: b.len(),
            })),
            MismatchMode::Truncate => {
                let (a, b) = truncate(a, b);
                Ok(apply(metric, a, b))
            }
        };
    }

    Ok(apply(metric, a, b))
}

/// Cuts the longer of the two vectors to the length of the shorter one.
///
/// The shorter vector comes first in the returned pair, matching the order
/// in which the truncated pair is scored.
fn truncate<'a>(a: &'a [f64], b: &'a [f64]) -> (&'a [f64], &'a [f64]) {
    let (short, long) = if a.len() < b.len() { (a, b) } else { (b, a) };
    ftlog::trace!(
        "Truncating vector of length {} to length {}.",
        long.len(),
        short.len()
    );
    (short, &long[..short.len()])
}

/// Calls the metric function for `metric` without any validation.
fn apply(metric: SimilarityMode, a: &[f64], b: &[f64]) -> f64 {
    match metric {
        SimilarityMode::Cosine => vectors::cosine(a, b),
        SimilarityMode::Tanimoto => vectors::tanimoto(a, b),
        SimilarityMode::Ochiai => sets::ochiai(a, b),
        SimilarityMode::JaccardIndex => sets::jaccard_index(a, b),
        SimilarityMode::JaccardDistance => sets::jaccard_distance(a, b),
        SimilarityMode::Dice => sets::dice(a, b),
        SimilarityMode::Hamming => vectors::hamming(a, b),
    }
}

/// Logs a rejection and hands it back.
fn reject(err: ScoreError) -> ScoreError {
    ftlog::debug!("Rejected pair: {err}");
    err
}
