//! Central moments (mean, variance, skewness, kurtosis)
//!
//! Moments are accumulated with Welford's numerically stable online
//! algorithm, extended to the third and fourth central moments. The
//! accumulator supports merging partial results.

use crate::math;
use crate::policy::Outcome;
use crate::traits::{present, Numeric, Result, Sample};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Single-pass accumulator of count, mean and central moments M2..M4
///
/// Integer samples are promoted to `f64` before they are added.
///
/// # Example
///
/// ```
/// use samplestats::statistics::MomentAccumulator;
///
/// let mut acc = MomentAccumulator::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.add(value);
/// }
///
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-12);
/// assert!((acc.variance_p().unwrap() - 4.0).abs() < 1e-12);
/// assert!((acc.std_dev_p().unwrap() - 2.0).abs() < 1e-12);
/// ```
///
/// # Merging
///
/// ```
/// use samplestats::statistics::MomentAccumulator;
///
/// let mut left = MomentAccumulator::new();
/// let mut right = MomentAccumulator::new();
///
/// for v in [1.0, 2.0, 3.0] {
///     left.add(v);
/// }
/// for v in [4.0, 5.0, 6.0] {
///     right.add(v);
/// }
///
/// left.merge(&right);
/// assert!((left.mean().unwrap() - 3.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MomentAccumulator {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared deviations from the mean
    m2: f64,
    /// Sum of cubed deviations from the mean
    m3: f64,
    /// Sum of fourth-power deviations from the mean
    m4: f64,
}

impl MomentAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value
    ///
    /// M4 is updated before M3 before M2, since each update reads the
    /// previous values of the lower moments.
    pub fn add(&mut self, value: f64) {
        let n1 = self.count;
        self.count += 1;

        if n1 == 0 {
            self.mean = value;
            return;
        }

        let n = self.count as f64;
        let delta = value - self.mean;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * n1 as f64;

        self.m4 += term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.m2
            - 4.0 * delta_n * self.m3;
        self.m3 += term1 * delta_n * (n - 2.0) - 3.0 * delta_n * self.m2;
        self.m2 += term1;
        self.mean += delta_n;
    }

    /// Add every present value of `source`
    pub fn extend<I>(&mut self, source: I)
    where
        I: IntoIterator,
        I::Item: Sample,
    {
        for value in present(source) {
            self.add(value.as_f64());
        }
    }

    /// Number of values added
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Sum of squared deviations from the mean
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Mean, or `None` when empty
    pub fn mean(&self) -> Option<f64> {
        self.outcome(1, |s| s.mean).strict().ok()
    }

    /// Sample variance (n − 1 denominator), or `None` below two values
    pub fn variance(&self) -> Option<f64> {
        self.variance_outcome().strict().ok()
    }

    /// Population variance (n denominator), or `None` when empty
    pub fn variance_p(&self) -> Option<f64> {
        self.variance_p_outcome().strict().ok()
    }

    /// Sample standard deviation
    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(math::sqrt)
    }

    /// Population standard deviation
    pub fn std_dev_p(&self) -> Option<f64> {
        self.variance_p().map(math::sqrt)
    }

    /// Bias-corrected sample skewness from the running M3, or `None` below
    /// three values
    ///
    /// Equals `n / ((n−1)(n−2)) · Σ((x − x̄)/s)³` where `s` is the sample
    /// standard deviation. NaN when every value is equal.
    pub fn skewness(&self) -> Option<f64> {
        self.outcome(3, |s| {
            let n = s.count as f64;
            let sd = math::sqrt(s.m2 / (n - 1.0));
            skewness_from_sum(n, s.m3 / math::powi(sd, 3))
        })
        .strict()
        .ok()
    }

    /// Bias-corrected excess kurtosis from the running M4, or `None` below
    /// four values
    ///
    /// NaN when every value is equal.
    pub fn kurtosis(&self) -> Option<f64> {
        self.outcome(4, |s| {
            let n = s.count as f64;
            let var = s.m2 / (n - 1.0);
            kurtosis_from_sum(n, s.m4 / (var * var))
        })
        .strict()
        .ok()
    }

    /// Merge another accumulator into this one
    ///
    /// Uses Chan et al.'s pairwise update, extended to M3 and M4 (Pébay).
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
        let delta = other.mean - self.mean;
        let delta2 = delta * delta;
        let delta3 = delta2 * delta;
        let delta4 = delta2 * delta2;

        let m2 = self.m2 + other.m2 + delta2 * na * nb / n;
        let m3 = self.m3
            + other.m3
            + delta3 * na * nb * (na - nb) / (n * n)
            + 3.0 * delta * (na * other.m2 - nb * self.m2) / n;
        let m4 = self.m4
            + other.m4
            + delta4 * na * nb * (na * na - na * nb + nb * nb) / (n * n * n)
            + 6.0 * delta2 * (na * na * other.m2 + nb * nb * self.m2) / (n * n)
            + 4.0 * delta * (na * other.m3 - nb * self.m3) / n;

        self.mean += delta * (nb / n);
        self.count = total;
        self.m2 = m2;
        self.m3 = m3;
        self.m4 = m4;
    }

    fn outcome(&self, min: usize, compute: impl FnOnce(&Self) -> f64) -> Outcome<f64> {
        Outcome::at_least(self.count as usize, min, || compute(self))
    }

    pub(crate) fn mean_outcome(&self) -> Outcome<f64> {
        self.outcome(1, |s| s.mean)
    }

    pub(crate) fn variance_outcome(&self) -> Outcome<f64> {
        self.outcome(2, |s| s.m2 / (s.count - 1) as f64)
    }

    pub(crate) fn variance_p_outcome(&self) -> Outcome<f64> {
        self.outcome(1, |s| s.m2 / s.count as f64)
    }
}

/// Scale a sum of cubed standardized deviations into sample skewness
fn skewness_from_sum(n: f64, sum_z3: f64) -> f64 {
    n / ((n - 1.0) * (n - 2.0)) * sum_z3
}

/// Scale a sum of fourth-power standardized deviations into excess kurtosis
fn kurtosis_from_sum(n: f64, sum_z4: f64) -> f64 {
    let a = n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0));
    let b = 3.0 * (n - 1.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0));
    a * sum_z4 - b
}

fn accumulate<I>(source: I) -> MomentAccumulator
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut acc = MomentAccumulator::new();
    acc.extend(source);
    acc
}

/// Two passes: mean and sample standard deviation first, then the
/// standardized deviations raised to `power` are summed.
fn standardized_moment<I>(source: I, min: usize, power: i32) -> Outcome<(f64, f64)>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let values: Vec<f64> = present(source).map(Numeric::as_f64).collect();
    let acc = accumulate(values.iter().copied());
    Outcome::at_least(values.len(), min, || {
        let n = values.len() as f64;
        let mean = acc.mean;
        let sd = math::sqrt(acc.m2 / (n - 1.0));
        let sum: f64 = values
            .iter()
            .map(|&x| math::powi((x - mean) / sd, power))
            .sum();
        (n, sum)
    })
}

fn skewness_outcome<I>(source: I) -> Outcome<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    standardized_moment(source, 3, 3).map(|(n, sum)| skewness_from_sum(n, sum))
}

fn kurtosis_outcome<I>(source: I) -> Outcome<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    standardized_moment(source, 4, 4).map(|(n, sum)| kurtosis_from_sum(n, sum))
}

/// Arithmetic mean
///
/// # Errors
///
/// [`InsufficientData`](crate::StatsError::InsufficientData) when no value
/// is present.
///
/// ```
/// use samplestats::statistics::mean;
///
/// assert_eq!(mean([1, 2, 3, 4]).unwrap(), 2.5);
/// assert_eq!(mean([Some(1.0), None, Some(3.0)]).unwrap(), 2.0);
/// ```
pub fn mean<I>(source: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    accumulate(source).mean_outcome().strict()
}

/// Arithmetic mean, NaN when no value is present
pub fn mean_nan<I>(source: I) -> f64
where
    I: IntoIterator,
    I::Item: Sample,
{
    accumulate(source).mean_outcome().or_sentinel(f64::NAN)
}

/// Sample variance (n − 1 denominator); needs two values
pub fn variance<I>(source: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    accumulate(source).variance_outcome().strict()
}

/// Sample variance, NaN below two values
pub fn variance_nan<I>(source: I) -> f64
where
    I: IntoIterator,
    I::Item: Sample,
{
    accumulate(source).variance_outcome().or_sentinel(f64::NAN)
}

/// Population variance (n denominator); needs one value
pub fn variance_p<I>(source: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    accumulate(source).variance_p_outcome().strict()
}

/// Population variance, NaN when empty
pub fn variance_p_nan<I>(source: I) -> f64
where
    I: IntoIterator,
    I::Item: Sample,
{
    accumulate(source).variance_p_outcome().or_sentinel(f64::NAN)
}

/// Sample standard deviation; needs two values
pub fn standard_deviation<I>(source: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    variance(source).map(math::sqrt)
}

/// Sample standard deviation, NaN below two values
pub fn standard_deviation_nan<I>(source: I) -> f64
where
    I: IntoIterator,
    I::Item: Sample,
{
    math::sqrt(variance_nan(source))
}

/// Population standard deviation; needs one value
pub fn standard_deviation_p<I>(source: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    variance_p(source).map(math::sqrt)
}

/// Population standard deviation, NaN when empty
pub fn standard_deviation_p_nan<I>(source: I) -> f64
where
    I: IntoIterator,
    I::Item: Sample,
{
    math::sqrt(variance_p_nan(source))
}

/// Bias-corrected sample skewness; needs three values
///
/// Each deviation is standardized by the sample standard deviation, cubed
/// and summed, then scaled by `n / ((n−1)(n−2))`. This is the spreadsheet
/// `SKEW` estimator. Constant input yields NaN.
///
/// ```
/// use samplestats::statistics::skewness;
///
/// let s = skewness([2.0, 3.0, 4.0, 6.0]).unwrap();
/// assert!((s - 0.752_837).abs() < 1e-6);
/// ```
pub fn skewness<I>(source: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    skewness_outcome(source).strict()
}

/// Bias-corrected sample skewness, NaN below three values
pub fn skewness_nan<I>(source: I) -> f64
where
    I: IntoIterator,
    I::Item: Sample,
{
    skewness_outcome(source).or_sentinel(f64::NAN)
}

/// Bias-corrected excess kurtosis; needs four values
///
/// ```text
/// n(n+1) / ((n−1)(n−2)(n−3)) · Σ((x − x̄)/s)⁴ − 3(n−1)² / ((n−2)(n−3))
/// ```
///
/// This is the spreadsheet `KURT` estimator. Constant input yields NaN.
///
/// ```
/// use samplestats::statistics::kurtosis;
///
/// let k = kurtosis([2.0, 3.0, 4.0, 6.0]).unwrap();
/// assert!((k - 0.342_857).abs() < 1e-6);
/// ```
pub fn kurtosis<I>(source: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    kurtosis_outcome(source).strict()
}

/// Bias-corrected excess kurtosis, NaN below four values
pub fn kurtosis_nan<I>(source: I) -> f64
where
    I: IntoIterator,
    I::Item: Sample,
{
    kurtosis_outcome(source).or_sentinel(f64::NAN)
}

with_selector! {
    /// [`mean`] over projected items
    mean_by => mean -> Result<f64>;
    /// [`mean_nan`] over projected items
    mean_nan_by => mean_nan -> f64;
    /// [`variance`] over projected items
    variance_by => variance -> Result<f64>;
    /// [`variance_nan`] over projected items
    variance_nan_by => variance_nan -> f64;
    /// [`variance_p`] over projected items
    variance_p_by => variance_p -> Result<f64>;
    /// [`variance_p_nan`] over projected items
    variance_p_nan_by => variance_p_nan -> f64;
    /// [`standard_deviation`] over projected items
    standard_deviation_by => standard_deviation -> Result<f64>;
    /// [`standard_deviation_nan`] over projected items
    standard_deviation_nan_by => standard_deviation_nan -> f64;
    /// [`standard_deviation_p`] over projected items
    standard_deviation_p_by => standard_deviation_p -> Result<f64>;
    /// [`standard_deviation_p_nan`] over projected items
    standard_deviation_p_nan_by => standard_deviation_p_nan -> f64;
    /// [`skewness`] over projected items
    skewness_by => skewness -> Result<f64>;
    /// [`skewness_nan`] over projected items
    skewness_nan_by => skewness_nan -> f64;
    /// [`kurtosis`] over projected items
    kurtosis_by => kurtosis -> Result<f64>;
    /// [`kurtosis_nan`] over projected items
    kurtosis_nan_by => kurtosis_nan -> f64;
}
