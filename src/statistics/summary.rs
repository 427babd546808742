//! Order and magnitude summaries: sum, bounds, median, root mean square

use num_traits::Zero;

use crate::math;
use crate::policy::Outcome;
use crate::range::Range;
use crate::traits::{present, Numeric, Result, Sample, StatsError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Sum in the samples' own kind, zero when empty
///
/// # Errors
///
/// [`Overflow`](StatsError::Overflow) when an integer sum does not fit.
///
/// ```
/// use samplestats::statistics::sum;
/// use samplestats::StatsError;
///
/// assert_eq!(sum([1_u8, 2, 3]), Ok(6));
/// assert_eq!(sum([200_u8, 100]), Err(StatsError::Overflow));
/// ```
pub fn sum<I>(source: I) -> Result<<I::Item as Sample>::Value>
where
    I: IntoIterator,
    I::Item: Sample,
{
    present(source).try_fold(<<I::Item as Sample>::Value as Zero>::zero(), |acc, x| {
        acc.try_add(x).ok_or(StatsError::Overflow)
    })
}

/// Smallest and largest value as a closed [`Range`]
///
/// ```
/// use samplestats::statistics::min_max;
///
/// let r = min_max([4, -2, 9, 0]).unwrap();
/// assert_eq!((r.min(), r.max()), (-2, 9));
/// ```
pub fn min_max<I>(source: I) -> Result<Range<<I::Item as Sample>::Value>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut values = present(source);
    let first = values
        .next()
        .ok_or(StatsError::InsufficientData { got: 0, min: 1 })?;

    let mut bounds = Range::unchecked(first, first, true);
    for value in values {
        bounds.include(value);
    }
    Ok(bounds)
}

/// `max − min` in the samples' own kind
///
/// # Errors
///
/// - [`InsufficientData`](StatsError::InsufficientData) when empty
/// - [`Overflow`](StatsError::Overflow) when the span does not fit
pub fn range<I>(source: I) -> Result<<I::Item as Sample>::Value>
where
    I: IntoIterator,
    I::Item: Sample,
{
    min_max(source)?.span()
}

fn median_outcome<I>(source: I) -> Outcome<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut values: Vec<_> = present(source).collect();
    values.sort_unstable_by(Numeric::sort_cmp);

    let n = values.len();
    Outcome::at_least(n, 1, || {
        if n % 2 == 1 {
            values[n / 2].as_f64()
        } else {
            (values[n / 2 - 1].as_f64() + values[n / 2].as_f64()) / 2.0
        }
    })
}

/// Middle value, or the mean of the two middle values for an even count
///
/// ```
/// use samplestats::statistics::median;
///
/// assert_eq!(median([2, 3, 4, 6]).unwrap(), 3.5);
/// assert_eq!(median([5.0, 1.0, 3.0]).unwrap(), 3.0);
/// ```
pub fn median<I>(source: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    median_outcome(source).strict()
}

/// Median, NaN when empty
pub fn median_nan<I>(source: I) -> f64
where
    I: IntoIterator,
    I::Item: Sample,
{
    median_outcome(source).or_sentinel(f64::NAN)
}

fn root_mean_square_outcome<I>(source: I) -> Outcome<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut n = 0usize;
    let mut sum_sq = 0.0;
    for value in present(source) {
        let x = value.as_f64();
        n += 1;
        sum_sq += x * x;
    }
    Outcome::at_least(n, 1, || math::sqrt(sum_sq / n as f64))
}

/// `sqrt(Σx² / n)`
///
/// ```
/// use samplestats::statistics::root_mean_square;
///
/// let rms = root_mean_square([3.0, -4.0]).unwrap();
/// assert!((rms - 12.5_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn root_mean_square<I>(source: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    root_mean_square_outcome(source).strict()
}

/// Root mean square, NaN when empty
pub fn root_mean_square_nan<I>(source: I) -> f64
where
    I: IntoIterator,
    I::Item: Sample,
{
    root_mean_square_outcome(source).or_sentinel(f64::NAN)
}

with_selector! {
    /// [`sum`] over projected items
    sum_by => sum -> Result<S::Value>;
    /// [`min_max`] over projected items
    min_max_by => min_max -> Result<Range<S::Value>>;
    /// [`range`] over projected items
    range_by => range -> Result<S::Value>;
    /// [`median`] over projected items
    median_by => median -> Result<f64>;
    /// [`median_nan`] over projected items
    median_nan_by => median_nan -> f64;
    /// [`root_mean_square`] over projected items
    root_mean_square_by => root_mean_square -> Result<f64>;
    /// [`root_mean_square_nan`] over projected items
    root_mean_square_nan_by => root_mean_square_nan -> f64;
}
