use float_cmp::approx_eq;
use rand::prelude::*;
use test_case::test_case;

use simscore::{score, Config, MismatchMode, ScoreError, SimilarityMode};

use SimilarityMode::{Cosine, Dice, Hamming, JaccardDistance, JaccardIndex, Ochiai, Tanimoto};

fn config(metric: SimilarityMode) -> Config {
    Config::default().with_metric(metric)
}

#[test_case(Cosine, &[1.0, 0.0], &[0.0, 1.0], 0.0; "cosine_orthogonal")]
#[test_case(JaccardIndex, &[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0], 0.5; "jaccard_index")]
#[test_case(JaccardDistance, &[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0], 0.5; "jaccard_distance")]
#[test_case(Hamming, &[1.0, 2.0, 3.0], &[1.0, 5.0, 3.0], 1.0; "hamming")]
#[test_case(Dice, &[1.0, 2.0, 3.0, 4.0], &[3.0, 4.0, 5.0, 6.0], 0.5; "dice")]
#[test_case(Tanimoto, &[1.0, 1.0, 0.0], &[0.0, 1.0, 1.0], 1.0 / 3.0; "tanimoto")]
#[test_case(Ochiai, &[1.0, 2.0], &[1.0, 2.0, 2.0], 1.0; "ochiai")]
fn scenarios(metric: SimilarityMode, a: &[f64], b: &[f64], expected: f64) {
    let actual = score(&config(metric), a, b);
    assert_eq!(actual, Ok(expected), "{metric}");
}

#[test_case(Cosine; "cosine")]
#[test_case(Tanimoto; "tanimoto")]
#[test_case(Ochiai; "ochiai")]
fn rejects_any_empty(metric: SimilarityMode) {
    let c = config(metric);
    for (a, b) in [(&[][..], &[][..]), (&[][..], &[1.0][..]), (&[1.0][..], &[][..])] {
        assert_eq!(
            score(&c, a, b),
            Err(ScoreError::EmptyInputRejected {
                metric,
                left: a.len(),
                right: b.len(),
            })
        );
    }
}

#[test_case(JaccardIndex, 0.0; "jaccard_index")]
#[test_case(JaccardDistance, 1.0; "jaccard_distance")]
#[test_case(Dice, 0.0; "dice")]
fn set_metrics_accept_one_empty(metric: SimilarityMode, expected: f64) {
    let c = config(metric);
    assert_eq!(score(&c, &[], &[1.0, 2.0]), Ok(expected));
    assert_eq!(score(&c, &[1.0, 2.0], &[]), Ok(expected));
    assert_eq!(
        score(&c, &[], &[]),
        Err(ScoreError::EmptyInputRejected {
            metric,
            left: 0,
            right: 0,
        })
    );
}

#[test]
fn hamming_accepts_empty_pair() {
    assert_eq!(score(&config(Hamming), &[], &[]), Ok(0.0));
}

#[test_case(Cosine; "cosine")]
#[test_case(Tanimoto; "tanimoto")]
#[test_case(Hamming; "hamming")]
fn bail_on_mismatch(metric: SimilarityMode) {
    let c = config(metric).with_mismatch(MismatchMode::Bail);
    assert_eq!(
        score(&c, &[1.0, 2.0, 3.0], &[4.0, 5.0]),
        Err(ScoreError::LengthMismatchRejected {
            metric,
            left: 3,
            right: 2,
        })
    );
}

#[test_case(Cosine; "cosine")]
#[test_case(Tanimoto; "tanimoto")]
#[test_case(Hamming; "hamming")]
fn truncate_on_mismatch(metric: SimilarityMode) {
    let c = config(metric).with_mismatch(MismatchMode::Truncate);

    let expected = score(&c, &[1.0, 2.0], &[4.0, 5.0]).map(f64::to_bits);
    assert!(expected.is_ok());
    assert_eq!(score(&c, &[1.0, 2.0, 3.0], &[4.0, 5.0]).map(f64::to_bits), expected);

    let expected = score(&c, &[4.0, 5.0], &[1.0, 2.0]).map(f64::to_bits);
    assert_eq!(score(&c, &[4.0, 5.0], &[1.0, 2.0, 3.0]).map(f64::to_bits), expected);
}

#[test]
fn truncate_hamming_to_empty() {
    let c = config(Hamming).with_mismatch(MismatchMode::Truncate);
    assert_eq!(score(&c, &[], &[1.0, 2.0]), Ok(0.0));
}

#[test]
fn truncate_does_not_rescue_empty_input() {
    let c = config(Cosine).with_mismatch(MismatchMode::Truncate);
    assert!(matches!(
        score(&c, &[], &[1.0, 2.0]),
        Err(ScoreError::EmptyInputRejected { .. })
    ));
}

/// Set metrics never look at the mismatch policy.
#[test_case(Ochiai; "ochiai")]
#[test_case(JaccardIndex; "jaccard_index")]
#[test_case(JaccardDistance; "jaccard_distance")]
#[test_case(Dice; "dice")]
fn set_metrics_ignore_mismatch(metric: SimilarityMode) {
    let (a, b) = ([1.0, 2.0, 3.0], [2.0, 3.0]);
    let bail = score(&config(metric).with_mismatch(MismatchMode::Bail), &a, &b);
    let truncate = score(&config(metric).with_mismatch(MismatchMode::Truncate), &a, &b);
    assert!(bail.is_ok());
    assert_eq!(bail, truncate);
}

#[test]
fn symmetry_and_complement() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let a = (0..rng.gen_range(0..20))
            .map(|_| f64::from(rng.gen_range(0_u8..10)))
            .collect::<Vec<_>>();
        let b = (0..rng.gen_range(0..20))
            .map(|_| f64::from(rng.gen_range(0_u8..10)))
            .collect::<Vec<_>>();

        for metric in [JaccardIndex, Dice] {
            let c = config(metric);
            assert_eq!(score(&c, &a, &b), score(&c, &b, &a), "{metric}");
        }

        match (score(&config(JaccardIndex), &a, &b), score(&config(JaccardDistance), &a, &b)) {
            (Ok(index), Ok(distance)) => {
                assert!(approx_eq!(f64, distance, 1.0 - index, ulps = 2));
            }
            (Err(e1), Err(e2)) => {
                assert!(a.is_empty() && b.is_empty());
                assert!(matches!(e1, ScoreError::EmptyInputRejected { .. }));
                assert!(matches!(e2, ScoreError::EmptyInputRejected { .. }));
            }
            other => unreachable!("JaccardIndex and JaccardDistance disagree: {other:?}"),
        }

        let c = config(Hamming);
        assert_eq!(score(&c, &a, &a), Ok(0.0));
    }
}

#[test]
fn config_serde() {
    let c = Config::new(JaccardIndex, MismatchMode::Truncate);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"metric":"jaccard_index","mismatch":"truncate"}"#);
    assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), c);

    let partial: Config = serde_json::from_str(r#"{"metric":"hamming"}"#).unwrap();
    assert_eq!(partial, Config::new(Hamming, MismatchMode::Bail));
}

#[test_case(Cosine, &[0.0, 0.0], &[1.0, 2.0]; "cosine_one_zero")]
#[test_case(Cosine, &[0.0, 0.0], &[0.0, 0.0]; "cosine_both_zero")]
#[test_case(Tanimoto, &[0.0, 0.0], &[0.0, 0.0]; "tanimoto_both_zero")]
fn zero_vectors_score_nan(metric: SimilarityMode, a: &[f64], b: &[f64]) {
    let actual = score(&config(metric), a, b);
    assert!(matches!(actual, Ok(s) if s.is_nan()), "{metric}: {actual:?}");
}

/// Tanimoto stays finite when only one vector is zero.
#[test]
fn tanimoto_one_zero_is_zero() {
    assert_eq!(score(&config(Tanimoto), &[0.0, 0.0], &[1.0, 2.0]), Ok(0.0));
}
