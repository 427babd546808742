//! Bin layout and sample assignment

use crate::range::Range;
use crate::traits::{present, Numeric, Result, Sample, StatsError};

use super::{Bin, BinCount, BinningMode};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// `count` evenly spaced edges from `start`, followed by `end`
///
/// Every edge is computed from `start` directly rather than by repeated
/// addition, so drift never accumulates across bins.
fn edges(start: f64, width: f64, count: usize, end: f64) -> Vec<f64> {
    (0..count)
        .map(|i| start + i as f64 * width)
        .chain(core::iter::once(end))
        .collect()
}

/// One bin per adjacent edge pair, half-open except possibly the last
fn partition(bins: &mut Vec<Bin>, edges: &[f64], close_last: bool) {
    let last = edges.len().saturating_sub(2);
    for (i, pair) in edges.windows(2).enumerate() {
        let (lo, hi) = (pair[0], pair[1]);
        let inclusive = close_last && i == last;
        bins.push(Bin::empty(lo + (hi - lo) / 2.0, Range::unchecked(lo, hi, inclusive)));
    }
}

/// Lay out `bin_count` empty bins over `[min, max]`
///
/// Bins are ordered, contiguous and non-overlapping; see [`BinningMode`] for
/// each layout. Under [`ExpandRange`](BinningMode::ExpandRange) a zero-width
/// range spreads its bins one unit apart, and the last bin is closed so
/// rounding at very small widths cannot leave `max` uncovered.
///
/// # Errors
///
/// - [`InvalidBinCount`](StatsError::InvalidBinCount) when `bin_count` is 0
/// - [`InvalidRange`](StatsError::InvalidRange) unless `min <= max` and both
///   bounds and their difference are finite
///
/// ```
/// use samplestats::histogram::{create_bins, BinningMode};
///
/// let bins = create_bins(0.0, 3.0, 3, BinningMode::Unbounded).unwrap();
/// assert_eq!(bins.len(), 4);
/// assert_eq!(bins[3].range().max(), f64::INFINITY);
///
/// let bins = create_bins(1.0, 3.0, 3, BinningMode::ExpandRange).unwrap();
/// let centres: Vec<f64> = bins.iter().map(|b| b.value()).collect();
/// assert_eq!(centres, vec![1.0, 2.0, 3.0]);
/// assert_eq!(bins[0].range().min(), 0.5);
/// ```
pub fn create_bins(min: f64, max: f64, bin_count: usize, mode: BinningMode) -> Result<Vec<Bin>> {
    if bin_count == 0 {
        return Err(StatsError::InvalidBinCount(bin_count));
    }
    let span = max - min;
    if !(min <= max) || !span.is_finite() {
        return Err(StatsError::InvalidRange { min, max });
    }

    let n = bin_count as f64;
    let mut bins = Vec::with_capacity(bin_count + 1);

    match mode {
        BinningMode::Unbounded => {
            partition(&mut bins, &edges(min, span / n, bin_count, max), false);
            bins.push(Bin::empty(max, Range::unchecked(max, f64::INFINITY, true)));
        }
        BinningMode::MaxValueInclusive => {
            partition(&mut bins, &edges(min, span / n, bin_count, max), true);
        }
        BinningMode::ExpandRange if bin_count == 1 => {
            let half = if span > 0.0 { span / 2.0 } else { 0.5 };
            partition(&mut bins, &[min - half, max + half], true);
        }
        BinningMode::ExpandRange => {
            let width = if span > 0.0 { span / (n - 1.0) } else { 1.0 };
            let start = min - width / 2.0;
            let end = (start + n * width).max(max);
            partition(&mut bins, &edges(start, width, bin_count, end), true);
        }
    }

    debug_event!(bin_count, ?mode, min, max, bins = bins.len(), "created histogram bins");
    Ok(bins)
}

/// Count each sample into the first bin that contains it
///
/// Returns new bins whose counts are the input bins' counts plus the samples
/// assigned to them; `bins` itself is left untouched. Missing samples are
/// skipped.
///
/// # Errors
///
/// [`SampleOutsideBins`](StatsError::SampleOutsideBins) for a sample no bin
/// contains (including NaN).
///
/// ```
/// use samplestats::histogram::{assign_bins, create_bins, BinningMode};
///
/// let layout = create_bins(0.0, 10.0, 2, BinningMode::MaxValueInclusive).unwrap();
/// let bins = assign_bins([1, 4, 5, 10], &layout).unwrap();
///
/// let counts: Vec<usize> = bins.iter().map(|b| b.count()).collect();
/// assert_eq!(counts, vec![2, 2]);
/// ```
pub fn assign_bins<I>(samples: I, bins: &[Bin]) -> Result<Vec<Bin>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let mut counts = Vec::new();
    counts.resize(bins.len(), 0usize);

    for value in present(samples) {
        let x = value.as_f64();
        let index = bins
            .iter()
            .position(|bin| bin.contains(x))
            .ok_or(StatsError::SampleOutsideBins(x))?;
        counts[index] += 1;
    }

    Ok(bins
        .iter()
        .zip(counts)
        .map(|(bin, added)| bin.with_count(bin.count() + added))
        .collect())
}

/// Bounds the bins are laid out over, ignoring NaN
///
/// Under [`BinningMode::Unbounded`] only finite values count, since the
/// overflow bin already reaches `+∞`.
fn bounds(values: &[f64], mode: BinningMode) -> Result<(f64, f64)> {
    if values.is_empty() {
        return Err(StatsError::InsufficientData { got: 0, min: 1 });
    }
    let finite_only = mode == BinningMode::Unbounded;
    let init = (f64::INFINITY, f64::NEG_INFINITY);
    let (min, max) = values
        .iter()
        .filter(|x| !finite_only || x.is_finite())
        .fold(init, |(lo, hi), &x| (lo.min(x), hi.max(x)));
    if min > max {
        // nothing to lay bins over
        let first = values.iter().copied().find(|x| !x.is_finite());
        return Err(StatsError::SampleOutsideBins(first.unwrap_or(f64::NAN)));
    }
    Ok((min, max))
}

fn bin_values(values: &[f64], bin_count: usize, mode: BinningMode) -> Result<Vec<Bin>> {
    if bin_count == 0 {
        return Err(StatsError::InvalidBinCount(bin_count));
    }
    let (min, max) = bounds(values, mode)?;
    let layout = create_bins(min, max, bin_count, mode)?;
    assign_bins(values, &layout)
}

/// Histogram of `source` over its own `[min, max]`
///
/// # Errors
///
/// - [`InvalidBinCount`](StatsError::InvalidBinCount) when `bin_count` is 0
/// - [`InsufficientData`](StatsError::InsufficientData) when no sample is present
/// - [`InvalidRange`](StatsError::InvalidRange) for infinite samples, except
///   `+∞` under [`Unbounded`](BinningMode::Unbounded), which lands in the
///   overflow bin
/// - [`SampleOutsideBins`](StatsError::SampleOutsideBins) for NaN samples,
///   for `−∞` under [`Unbounded`](BinningMode::Unbounded), and when no
///   sample is finite there
///
/// ```
/// use samplestats::histogram::{histogram, BinningMode};
///
/// let bins = histogram([1, 1, 1, 2, 2, 2, 3, 3], 3, BinningMode::Unbounded).unwrap();
/// let counts: Vec<usize> = bins.iter().map(|b| b.count()).collect();
///
/// assert_eq!(counts, vec![3, 3, 0, 2]);
/// assert_eq!(bins[3].range().max(), f64::INFINITY);
/// ```
pub fn histogram<I>(source: I, bin_count: usize, mode: BinningMode) -> Result<Vec<Bin>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    if bin_count == 0 {
        return Err(StatsError::InvalidBinCount(bin_count));
    }
    let values: Vec<f64> = present(source).map(Numeric::as_f64).collect();
    bin_values(&values, bin_count, mode)
}

/// Histogram whose bin count is resolved against the number of samples
///
/// ```
/// use samplestats::histogram::{histogram_with, BinCount, BinningMode};
///
/// let data: Vec<u32> = (0..100).collect();
/// let bins = histogram_with(&data, BinCount::Sturges, BinningMode::MaxValueInclusive).unwrap();
///
/// assert_eq!(bins.len(), 8);
/// assert_eq!(bins.iter().map(|b| b.count()).sum::<usize>(), 100);
/// ```
pub fn histogram_with<I>(source: I, bin_count: BinCount, mode: BinningMode) -> Result<Vec<Bin>>
where
    I: IntoIterator,
    I::Item: Sample,
{
    let values: Vec<f64> = present(source).map(Numeric::as_f64).collect();
    if values.is_empty() {
        return Err(StatsError::InsufficientData { got: 0, min: 1 });
    }
    bin_values(&values, bin_count.resolve(values.len()), mode)
}

/// [`histogram`] over projected items
pub fn histogram_by<T, S, I, F>(
    source: I,
    selector: F,
    bin_count: usize,
    mode: BinningMode,
) -> Result<Vec<Bin>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> S,
    S: Sample,
{
    histogram(source.into_iter().map(selector), bin_count, mode)
}

/// [`histogram_with`] over projected items
pub fn histogram_with_by<T, S, I, F>(
    source: I,
    selector: F,
    bin_count: BinCount,
    mode: BinningMode,
) -> Result<Vec<Bin>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> S,
    S: Sample,
{
    histogram_with(source.into_iter().map(selector), bin_count, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [BinningMode; 3] = [
        BinningMode::Unbounded,
        BinningMode::ExpandRange,
        BinningMode::MaxValueInclusive,
    ];

    fn counts(bins: &[Bin]) -> Vec<usize> {
        bins.iter().map(Bin::count).collect()
    }

    fn assert_contiguous(bins: &[Bin]) {
        for pair in bins.windows(2) {
            assert_eq!(pair[0].range().max(), pair[1].range().min());
            assert!(!pair[0].max_inclusive());
        }
    }

    #[test]
    fn test_unbounded_layout() {
        let bins = histogram([1, 1, 1, 2, 2, 2, 3, 3], 3, BinningMode::Unbounded).unwrap();
        assert_eq!(bins.len(), 4);
        assert_eq!(counts(&bins), vec![3, 3, 0, 2]);

        let overflow = bins[3];
        assert_eq!(overflow.range().min(), 3.0);
        assert_eq!(overflow.range().max(), f64::INFINITY);
        assert!(overflow.contains(f64::INFINITY));
        assert_eq!(overflow.value(), 3.0);
        assert_contiguous(&bins);
    }

    #[test]
    fn test_unbounded_midpoints() {
        let bins = create_bins(0.0, 4.0, 2, BinningMode::Unbounded).unwrap();
        assert_eq!(bins[0].value(), 1.0);
        assert_eq!(bins[1].value(), 3.0);
        assert!(!bins[1].contains(4.0));
        assert!(bins[2].contains(4.0));
    }

    #[test]
    fn test_expand_range_covers_strictly() {
        let bins = create_bins(1.0, 3.0, 3, BinningMode::ExpandRange).unwrap();
        assert_eq!(bins.len(), 3);
        assert_eq!(bins[0].range().min(), 0.5);
        assert_eq!(bins[2].range().max(), 3.5);
        assert_contiguous(&bins);

        let bins = assign_bins([1.0, 2.0, 3.0, 2.4], &bins).unwrap();
        assert_eq!(counts(&bins), vec![1, 2, 1]);
    }

    #[test]
    fn test_expand_range_single_bin() {
        let bins = create_bins(2.0, 6.0, 1, BinningMode::ExpandRange).unwrap();
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].range().min(), 0.0);
        assert_eq!(bins[0].range().max(), 8.0);
        assert_eq!(bins[0].value(), 4.0);
    }

    #[test]
    fn test_max_value_inclusive() {
        let bins = create_bins(0.1, 0.7, 3, BinningMode::MaxValueInclusive).unwrap();
        let last = bins[2];
        assert_eq!(last.range().max(), 0.7);
        assert!(last.max_inclusive());
        assert!(last.contains(0.7));
        assert_contiguous(&bins);
    }

    #[test]
    fn test_degenerate_range() {
        for mode in MODES {
            let bins = histogram([5.0, 5.0, 5.0], 4, mode).unwrap();
            assert_eq!(counts(&bins).iter().sum::<usize>(), 3, "{:?}", mode);
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            histogram([1.0, 2.0], 0, BinningMode::Unbounded),
            Err(StatsError::InvalidBinCount(0))
        );
        assert_eq!(
            histogram(core::iter::empty::<f64>(), 0, BinningMode::Unbounded),
            Err(StatsError::InvalidBinCount(0))
        );
        assert_eq!(
            histogram([None::<i32>], 2, BinningMode::ExpandRange),
            Err(StatsError::InsufficientData { got: 0, min: 1 })
        );
        assert_eq!(
            create_bins(2.0, 1.0, 2, BinningMode::Unbounded),
            Err(StatsError::InvalidRange { min: 2.0, max: 1.0 })
        );
        assert!(create_bins(0.0, f64::INFINITY, 2, BinningMode::Unbounded).is_err());
        assert!(create_bins(f64::NAN, 1.0, 2, BinningMode::Unbounded).is_err());
        assert!(create_bins(-f64::MAX, f64::MAX, 2, BinningMode::Unbounded).is_err());

        let bins = create_bins(0.0, 1.0, 2, BinningMode::MaxValueInclusive).unwrap();
        assert_eq!(
            assign_bins([0.5, 1.5], &bins),
            Err(StatsError::SampleOutsideBins(1.5))
        );
        assert!(histogram([1.0, f64::NAN], 2, BinningMode::Unbounded).is_err());
    }

    #[test]
    fn test_unbounded_takes_infinity() {
        let bins = histogram([1.0, 2.0, f64::INFINITY], 2, BinningMode::Unbounded).unwrap();
        assert_eq!(counts(&bins), vec![1, 0, 2]);
        assert_eq!(bins[2].range().min(), 2.0);

        assert_eq!(
            histogram([1.0, f64::NEG_INFINITY], 2, BinningMode::Unbounded),
            Err(StatsError::SampleOutsideBins(f64::NEG_INFINITY))
        );
        assert_eq!(
            histogram([f64::INFINITY], 2, BinningMode::Unbounded),
            Err(StatsError::SampleOutsideBins(f64::INFINITY))
        );
        assert!(histogram([1.0, f64::INFINITY], 2, BinningMode::MaxValueInclusive).is_err());
    }

    #[test]
    fn test_assign_accumulates() {
        let layout = create_bins(0.0, 2.0, 2, BinningMode::MaxValueInclusive).unwrap();
        let once = assign_bins([0.5, 1.5], &layout).unwrap();
        let twice = assign_bins([Some(0.2), None], &once).unwrap();
        assert_eq!(counts(&layout), vec![0, 0]);
        assert_eq!(counts(&once), vec![1, 1]);
        assert_eq!(counts(&twice), vec![2, 1]);
    }

    #[test]
    fn test_histogram_with() {
        let data: Vec<f64> = (0..64).map(f64::from).collect();
        let bins = histogram_with(&data, BinCount::SquareRoot, BinningMode::MaxValueInclusive)
            .unwrap();
        assert_eq!(bins.len(), 8);
        assert!(counts(&bins).iter().all(|&c| c == 8));

        assert_eq!(
            histogram_with(core::iter::empty::<f64>(), BinCount::Rice, BinningMode::Unbounded),
            Err(StatsError::InsufficientData { got: 0, min: 1 })
        );
    }

    #[test]
    fn test_selectors() {
        let words = ["a", "bb", "bb", "cccc"];
        let bins = histogram_by(&words, |w| w.len(), 3, BinningMode::MaxValueInclusive).unwrap();
        assert_eq!(counts(&bins), vec![1, 2, 1]);

        let bins = histogram_with_by(&words, |w| w.len(), BinCount::Fixed(2), BinningMode::Unbounded)
            .unwrap();
        assert_eq!(counts(&bins), vec![3, 0, 1]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn mode_strategy() -> impl Strategy<Value = BinningMode> {
        prop_oneof![
            Just(BinningMode::Unbounded),
            Just(BinningMode::ExpandRange),
            Just(BinningMode::MaxValueInclusive),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn every_sample_lands_in_one_bin(
            data in proptest::collection::vec(-1.0e6_f64..1.0e6, 1..200),
            bin_count in 1_usize..50,
            mode in mode_strategy(),
        ) {
            let bins = histogram(&data, bin_count, mode).unwrap();
            let total: usize = bins.iter().map(|b| b.count()).sum();
            prop_assert_eq!(total, data.len());

            for pair in bins.windows(2) {
                prop_assert_eq!(pair[0].range().max(), pair[1].range().min());
            }
            for &x in &data {
                prop_assert_eq!(bins.iter().filter(|b| b.contains(x)).count(), 1);
            }
        }

        #[test]
        fn bin_count_matches_mode(
            min in -1.0e3_f64..1.0e3,
            span in 0.0_f64..1.0e3,
            bin_count in 1_usize..40,
            mode in mode_strategy(),
        ) {
            let bins = create_bins(min, min + span, bin_count, mode).unwrap();
            let expected = match mode {
                BinningMode::Unbounded => bin_count + 1,
                _ => bin_count,
            };
            prop_assert_eq!(bins.len(), expected);
        }
    }
}
