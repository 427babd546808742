//! Covariance and Pearson correlation over paired sequences

use crate::math;
use crate::policy::Outcome;
use crate::traits::{Numeric, Result, Sample, StatsError};

/// Joint single-pass accumulator over `(x, y)` pairs
///
/// Tracks both means, both sums of squared deviations and the co-moment
/// `Σ(x − x̄)(y − ȳ)` with Welford-style updates.
///
/// # Example
///
/// ```
/// use samplestats::statistics::PairwiseAccumulator;
///
/// let mut acc = PairwiseAccumulator::new();
/// for (x, y) in [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)] {
///     acc.add(x, y);
/// }
///
/// assert!((acc.pearson().unwrap() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PairwiseAccumulator {
    count: u64,
    mean_x: f64,
    mean_y: f64,
    m2_x: f64,
    m2_y: f64,
    /// Co-moment Σ(x − x̄)(y − ȳ)
    c_xy: f64,
}

impl PairwiseAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pair
    pub fn add(&mut self, x: f64, y: f64) {
        self.count += 1;
        let n = self.count as f64;

        let dx = x - self.mean_x;
        self.mean_x += dx / n;
        let dy = y - self.mean_y;
        self.mean_y += dy / n;

        self.m2_x += dx * (x - self.mean_x);
        self.m2_y += dy * (y - self.mean_y);
        self.c_xy += dx * (y - self.mean_y);
    }

    /// Number of pairs added
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Population covariance (n denominator), or `None` when empty
    pub fn covariance(&self) -> Option<f64> {
        self.covariance_outcome().strict().ok()
    }

    /// Pearson's r, or `None` when empty
    ///
    /// NaN when either side has zero variance.
    pub fn pearson(&self) -> Option<f64> {
        self.pearson_outcome().strict().ok()
    }

    /// Merge another accumulator into this one
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let na = self.count as f64;
        let nb = other.count as f64;
        let total = self.count + other.count;
        let n = total as f64;
        let dx = other.mean_x - self.mean_x;
        let dy = other.mean_y - self.mean_y;
        let weight = na * nb / n;

        self.m2_x += other.m2_x + dx * dx * weight;
        self.m2_y += other.m2_y + dy * dy * weight;
        self.c_xy += other.c_xy + dx * dy * weight;
        self.mean_x += dx * (nb / n);
        self.mean_y += dy * (nb / n);
        self.count = total;
    }

    pub(crate) fn means(&self) -> (f64, f64) {
        (self.mean_x, self.mean_y)
    }

    /// `(Σ(x − x̄)², Σ(y − ȳ)², Σ(x − x̄)(y − ȳ))`
    pub(crate) fn co_moments(&self) -> (f64, f64, f64) {
        (self.m2_x, self.m2_y, self.c_xy)
    }

    fn covariance_outcome(&self) -> Outcome<f64> {
        Outcome::at_least(self.count as usize, 1, || self.c_xy / self.count as f64)
    }

    /// cov / (σx·σy); the `n` denominators cancel.
    fn pearson_outcome(&self) -> Outcome<f64> {
        Outcome::at_least(self.count as usize, 1, || {
            self.c_xy / (math::sqrt(self.m2_x) * math::sqrt(self.m2_y))
        })
    }
}

/// Walk both sequences in lock step
///
/// A pair with a missing value on either side is skipped; the length check
/// counts every entry, missing or not.
fn accumulate<X, Y>(x: X, y: Y) -> Result<PairwiseAccumulator>
where
    X: IntoIterator,
    X::Item: Sample,
    Y: IntoIterator,
    Y::Item: Sample,
{
    let mut xs = x.into_iter();
    let mut ys = y.into_iter();
    let mut acc = PairwiseAccumulator::new();
    let mut len = 0usize;

    loop {
        match (xs.next(), ys.next()) {
            (Some(a), Some(b)) => {
                len += 1;
                if let (Some(a), Some(b)) = (a.value(), b.value()) {
                    acc.add(a.as_f64(), b.as_f64());
                }
            }
            (None, None) => return Ok(acc),
            (Some(_), None) => {
                return Err(StatsError::MismatchedLengths {
                    left: len + 1 + xs.count(),
                    right: len,
                })
            }
            (None, Some(_)) => {
                return Err(StatsError::MismatchedLengths {
                    left: len,
                    right: len + 1 + ys.count(),
                })
            }
        }
    }
}

fn accumulate_by<T, I, SX, SY, FX, FY>(source: I, mut x: FX, mut y: FY) -> PairwiseAccumulator
where
    I: IntoIterator<Item = T>,
    FX: FnMut(&T) -> SX,
    FY: FnMut(&T) -> SY,
    SX: Sample,
    SY: Sample,
{
    let mut acc = PairwiseAccumulator::new();
    for item in source {
        if let (Some(a), Some(b)) = (x(&item).value(), y(&item).value()) {
            acc.add(a.as_f64(), b.as_f64());
        }
    }
    acc
}

/// Population covariance of two equal-length sequences
///
/// # Errors
///
/// - [`MismatchedLengths`](StatsError::MismatchedLengths) when the
///   sequences differ in length
/// - [`InsufficientData`](StatsError::InsufficientData) when no complete
///   pair is present
///
/// ```
/// use samplestats::statistics::covariance;
///
/// let cov = covariance([1.0, 2.0, 3.0, 4.0], [2.0, 4.0, 6.0, 8.0]).unwrap();
/// assert!((cov - 2.5).abs() < 1e-12);
/// ```
pub fn covariance<X, Y>(x: X, y: Y) -> Result<f64>
where
    X: IntoIterator,
    X::Item: Sample,
    Y: IntoIterator,
    Y::Item: Sample,
{
    accumulate(x, y)?.covariance_outcome().strict()
}

/// Population covariance, NaN when no complete pair is present
///
/// Mismatched lengths are still an error.
pub fn covariance_nan<X, Y>(x: X, y: Y) -> Result<f64>
where
    X: IntoIterator,
    X::Item: Sample,
    Y: IntoIterator,
    Y::Item: Sample,
{
    Ok(accumulate(x, y)?.covariance_outcome().or_sentinel(f64::NAN))
}

/// Pearson's correlation coefficient of two equal-length sequences
///
/// Same errors as [`covariance`]. A side with zero variance yields NaN.
///
/// ```
/// use samplestats::statistics::pearson;
///
/// let data = [3.0, 1.0, 4.0, 1.0, 5.0];
/// let r = pearson(&data, &data).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
pub fn pearson<X, Y>(x: X, y: Y) -> Result<f64>
where
    X: IntoIterator,
    X::Item: Sample,
    Y: IntoIterator,
    Y::Item: Sample,
{
    accumulate(x, y)?.pearson_outcome().strict()
}

/// Pearson's r, NaN when no complete pair is present
///
/// Mismatched lengths are still an error.
pub fn pearson_nan<X, Y>(x: X, y: Y) -> Result<f64>
where
    X: IntoIterator,
    X::Item: Sample,
    Y: IntoIterator,
    Y::Item: Sample,
{
    Ok(accumulate(x, y)?.pearson_outcome().or_sentinel(f64::NAN))
}

/// [`covariance`] of two projections of the same items
pub fn covariance_by<T, I, SX, SY, FX, FY>(source: I, x: FX, y: FY) -> Result<f64>
where
    I: IntoIterator<Item = T>,
    FX: FnMut(&T) -> SX,
    FY: FnMut(&T) -> SY,
    SX: Sample,
    SY: Sample,
{
    accumulate_by(source, x, y).covariance_outcome().strict()
}

/// [`covariance_nan`] of two projections of the same items
pub fn covariance_nan_by<T, I, SX, SY, FX, FY>(source: I, x: FX, y: FY) -> f64
where
    I: IntoIterator<Item = T>,
    FX: FnMut(&T) -> SX,
    FY: FnMut(&T) -> SY,
    SX: Sample,
    SY: Sample,
{
    accumulate_by(source, x, y)
        .covariance_outcome()
        .or_sentinel(f64::NAN)
}

/// [`pearson`] of two projections of the same items
pub fn pearson_by<T, I, SX, SY, FX, FY>(source: I, x: FX, y: FY) -> Result<f64>
where
    I: IntoIterator<Item = T>,
    FX: FnMut(&T) -> SX,
    FY: FnMut(&T) -> SY,
    SX: Sample,
    SY: Sample,
{
    accumulate_by(source, x, y).pearson_outcome().strict()
}

/// [`pearson_nan`] of two projections of the same items
pub fn pearson_nan_by<T, I, SX, SY, FX, FY>(source: I, x: FX, y: FY) -> f64
where
    I: IntoIterator<Item = T>,
    FX: FnMut(&T) -> SX,
    FY: FnMut(&T) -> SY,
    SX: Sample,
    SY: Sample,
{
    accumulate_by(source, x, y)
        .pearson_outcome()
        .or_sentinel(f64::NAN)
}
