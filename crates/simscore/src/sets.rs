//! Similarity functions that treat vectors as sets of values.
//!
//! # Set semantics
//!
//! Every function here first collapses each vector into the set of its
//! distinct values. Order and multiplicity are discarded: `[1.0, 1.0, 2.0]`
//! and `[2.0, 1.0]` are the same set. These are not multiset (bag) metrics,
//! so they should not be used on data where repeated values carry meaning.
//!
//! Values compare numerically: `0.0` and `-0.0` are the same element, and all
//! NaNs collapse into a single NaN element.
//!
//! None of these functions validate their inputs. Scoring an empty set against
//! another empty set divides zero by zero.

use core::cmp::Ordering;
use std::collections::BTreeSet;

/// A vector element used as a set member.
#[derive(Debug, Clone, Copy)]
struct Element(f64);

impl Element {
    /// Maps `-0.0` to `0.0` and every NaN to the canonical NaN.
    #[allow(clippy::float_cmp)]
    fn new(v: f64) -> Self {
        if v.is_nan() {
            Self(f64::NAN)
        } else if v == 0.0 {
            Self(0.0)
        } else {
            Self(v)
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// The distinct values of a vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet(BTreeSet<Element>);

impl ValueSet {
    /// Collects the distinct values of `x`.
    #[must_use]
    pub fn new(x: &[f64]) -> Self {
        Self(x.iter().copied().map(Element::new).collect())
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `v` is one of the values.
    #[must_use]
    pub fn contains(&self, v: f64) -> bool {
        self.0.contains(&Element::new(v))
    }

    /// Number of values shared with `other`.
    #[must_use]
    pub fn intersection_len(&self, other: &Self) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Number of values in either set.
    #[must_use]
    pub fn union_len(&self, other: &Self) -> usize {
        self.len() + other.len() - self.intersection_len(other)
    }
}

/// Converts a set cardinality to a float.
#[allow(clippy::cast_precision_loss)]
const fn card(n: usize) -> f64 {
    n as f64
}

/// Ochiai coefficient.
///
/// The size of the intersection divided by the geometric mean of the set
/// sizes, `|A∩B| / sqrt(|A|·|B|)`. The set cardinalities are used, not the
/// vector magnitudes.
///
/// See the [`crate::sets`] module documentation for the set semantics.
///
/// # Examples
///
/// ```
/// use simscore::sets::ochiai;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [3.0, 4.0, 4.0, 4.0];
///
/// // {3, 4} shared; |A| = 4, |B| = 2.
/// let s = ochiai(&x, &y);
/// assert!((s - 2.0 / 8_f64.sqrt()).abs() <= f64::EPSILON);
/// ```
///
/// # References
///
/// * [Ochiai coefficient](https://en.wikipedia.org/wiki/Cosine_similarity#Otsuka%E2%80%93Ochiai_coefficient)
#[must_use]
pub fn ochiai(x: &[f64], y: &[f64]) -> f64 {
    let (x, y) = (ValueSet::new(x), ValueSet::new(y));
    card(x.intersection_len(&y)) / libm::sqrt(card(x.len()) * card(y.len()))
}

/// Jaccard index.
///
/// The size of the intersection divided by the size of the union,
/// `|A∩B| / |A∪B|`.
///
/// See the [`crate::sets`] module documentation for the set semantics.
///
/// # Examples
///
/// ```
/// use simscore::sets::jaccard_index;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [2.0, 3.0, 4.0];
///
/// assert!((jaccard_index(&x, &y) - 0.5).abs() <= f64::EPSILON);
/// ```
///
/// # References
///
/// * [Jaccard index](https://en.wikipedia.org/wiki/Jaccard_index)
#[must_use]
pub fn jaccard_index(x: &[f64], y: &[f64]) -> f64 {
    let (x, y) = (ValueSet::new(x), ValueSet::new(y));
    card(x.intersection_len(&y)) / card(x.union_len(&y))
}

/// Jaccard distance, `1 - jaccard_index(x, y)`.
///
/// # Examples
///
/// ```
/// use simscore::sets::jaccard_distance;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [4.0, 3.0, 2.0, 1.0, 1.0];
///
/// assert!(jaccard_distance(&x, &y).abs() <= f64::EPSILON);
/// ```
#[must_use]
pub fn jaccard_distance(x: &[f64], y: &[f64]) -> f64 {
    1.0 - jaccard_index(x, y)
}

/// Dice coefficient.
///
/// Twice the size of the intersection divided by the sum of the set sizes,
/// `2·|A∩B| / (|A| + |B|)`.
///
/// See the [`crate::sets`] module documentation for the set semantics.
///
/// # Examples
///
/// ```
/// use simscore::sets::dice;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [3.0, 4.0, 5.0, 6.0];
///
/// assert!((dice(&x, &y) - 0.5).abs() <= f64::EPSILON);
/// ```
///
/// # References
///
/// * [Dice coefficient](https://en.wikipedia.org/wiki/S%C3%B8rensen%E2%80%93Dice_coefficient)
#[must_use]
pub fn dice(x: &[f64], y: &[f64]) -> f64 {
    let (x, y) = (ValueSet::new(x), ValueSet::new(y));
    2.0 * card(x.intersection_len(&y)) / card(x.len() + y.len())
}
