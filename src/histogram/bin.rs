//! Bin records and the partitioning policies that lay them out

use core::fmt::{Display, Formatter};

use crate::frequency::ItemCount;
use crate::range::Range;

/// How [`create_bins`](super::create_bins) derives bin edges from
/// `(min, max, bin_count)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinningMode {
    /// `bin_count` half-open bins over `[min, max)` plus a trailing
    /// `[max, +∞]` bin that absorbs the maximum and anything beyond it,
    /// `+∞` included; [`histogram`](super::histogram) takes `min` and `max`
    /// from the finite samples
    #[default]
    Unbounded,
    /// `bin_count` bins centred on evenly spaced points from `min` to `max`,
    /// so the covered range reaches half a bin past both ends
    ExpandRange,
    /// `bin_count` bins over `[min, max]` whose last bin is closed and ends
    /// exactly at `max`
    MaxValueInclusive,
}

/// One histogram bin: a representative value, its count and its interval
///
/// Bins come out of [`create_bins`](super::create_bins) empty and out of
/// [`assign_bins`](super::assign_bins) with their final counts; there is no
/// public way to change a count afterwards.
///
/// ```
/// use samplestats::histogram::{histogram, BinningMode};
///
/// let bins = histogram([1.0, 2.0, 2.5, 4.0], 3, BinningMode::MaxValueInclusive).unwrap();
/// let last = bins.last().unwrap();
///
/// assert!(last.max_inclusive());
/// assert_eq!(last.range().max(), 4.0);
/// assert_eq!(last.count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin {
    item: ItemCount<f64>,
    range: Range<f64>,
}

impl Bin {
    /// An empty bin over `range`
    pub(crate) fn empty(value: f64, range: Range<f64>) -> Self {
        Self {
            item: ItemCount::new(value, 0),
            range,
        }
    }

    pub(crate) fn with_count(self, count: usize) -> Self {
        Self {
            item: ItemCount::new(*self.item.value(), count),
            range: self.range,
        }
    }

    /// Representative value: the bin's midpoint, or its lower edge when the
    /// bin is unbounded above
    pub fn value(&self) -> f64 {
        *self.item.value()
    }

    pub fn count(&self) -> usize {
        self.item.count()
    }

    pub fn range(&self) -> Range<f64> {
        self.range
    }

    pub fn max_inclusive(&self) -> bool {
        self.range.max_inclusive()
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.range.contains(x)
    }

    /// The `(value, count)` pair without the interval
    pub fn as_item_count(&self) -> ItemCount<f64> {
        self.item
    }
}

impl Display for Bin {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.range, self.count())
    }
}
