//! Similarity functions over positionally aligned vectors.
//!
//! # Potentially unexpected behaviors
//! These functions do not validate their inputs. When one vector is shorter
//! than the other, elements of the longer vector past the end of the shorter
//! one are ignored. Cosine and Tanimoto of a zero vector divide by zero.

/// Dot product, `Σ x[i]·y[i]`.
///
/// # Examples
///
/// ```
/// use simscore::vectors::dot;
///
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
/// ```
#[must_use]
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y.iter()).fold(0.0, |acc, (&a, &b)| acc + a * b)
}

/// Squared Euclidean norm, `Σ x[i]²`.
#[must_use]
pub fn norm_sq(x: &[f64]) -> f64 {
    x.iter().fold(0.0, |acc, &a| acc + a * a)
}

/// Euclidean norm, `sqrt(Σ x[i]²)`.
#[must_use]
pub fn norm(x: &[f64]) -> f64 {
    libm::sqrt(norm_sq(x))
}

/// Cosine similarity.
///
/// The dot product of the two vectors divided by the product of their
/// magnitudes. `1` for vectors pointing the same way, `0` for orthogonal
/// vectors and `-1` for opposite vectors.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
///
/// # Examples
///
/// ```
/// use simscore::vectors::cosine;
///
/// assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
/// assert!((cosine(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-12);
/// ```
///
/// # References
///
/// * [Cosine similarity](https://en.wikipedia.org/wiki/Cosine_similarity)
#[must_use]
pub fn cosine(x: &[f64], y: &[f64]) -> f64 {
    let [xx, yy, xy] = x
        .iter()
        .zip(y.iter())
        .fold([0.0; 3], |[xx, yy, xy], (&a, &b)| {
            [a.mul_add(a, xx), b.mul_add(b, yy), a.mul_add(b, xy)]
        });
    xy / (libm::sqrt(xx) * libm::sqrt(yy))
}

/// Tanimoto coefficient.
///
/// `dot(x, y) / (‖x‖² + ‖y‖² − dot(x, y))`, the extension of the Jaccard
/// index to real-valued vectors.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
///
/// # Examples
///
/// ```
/// use simscore::vectors::tanimoto;
///
/// let x = [1.0, 1.0, 0.0];
/// let y = [0.0, 1.0, 1.0];
///
/// // 1 / (2 + 2 - 1)
/// assert!((tanimoto(&x, &y) - 1.0 / 3.0).abs() <= f64::EPSILON);
/// ```
///
/// # References
///
/// * [Tanimoto similarity](https://en.wikipedia.org/wiki/Jaccard_index#Tanimoto_similarity_and_distance)
#[must_use]
pub fn tanimoto(x: &[f64], y: &[f64]) -> f64 {
    let [xx, yy, xy] = x
        .iter()
        .zip(y.iter())
        .fold([0.0; 3], |[xx, yy, xy], (&a, &b)| {
            [a.mul_add(a, xx), b.mul_add(b, yy), a.mul_add(b, xy)]
        });
    xy / (xx + yy - xy)
}

/// Hamming distance.
///
/// The number of positions at which the elements differ, compared with `!=`
/// (so a NaN never matches anything). Two empty vectors are at distance `0`.
///
/// See the [`crate::vectors`] module documentation for information on this
/// function's potentially unexpected behaviors.
///
/// # Examples
///
/// ```
/// use simscore::vectors::hamming;
///
/// assert_eq!(hamming(&[1.0, 2.0, 3.0], &[1.0, 5.0, 3.0]), 1.0);
/// assert_eq!(hamming(&[], &[]), 0.0);
/// ```
///
/// # References
///
/// * [Hamming distance](https://en.wikipedia.org/wiki/Hamming_distance)
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
pub fn hamming(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y.iter()).filter(|(&a, &b)| a != b).count() as f64
}
