//! Numeric intervals with a configurable upper bound
//!
//! A [`Range`] is `[min, max)` or `[min, max]`. It is the boundary type of
//! every histogram bin and the result of [`min_max`](crate::statistics::min_max).

use core::cmp::Ordering;
use core::fmt::{Display, Formatter};

use crate::traits::{Numeric, Result, StatsError};

/// Interval `[min, max)` or, when `max_inclusive`, `[min, max]`
///
/// Equality and ordering look at `(min, max)` only, lexicographically.
/// Strict nesting is exposed through [`strictly_contains`](Range::strictly_contains)
/// and [`is_strictly_inside`](Range::is_strictly_inside) rather than the
/// comparison operators.
///
/// ```
/// use samplestats::Range;
///
/// let r = Range::new(0.0, 1.0).unwrap();
/// assert!(r.contains(0.0));
/// assert!(r.contains(1.0));
///
/// let half_open = Range::with_max_inclusive(0.0, 1.0, false).unwrap();
/// assert!(!half_open.contains(1.0));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<N> {
    min: N,
    max: N,
    max_inclusive: bool,
}

impl<N: Numeric> Range<N> {
    /// Closed interval `[min, max]`
    ///
    /// # Errors
    ///
    /// [`InvalidRange`](StatsError::InvalidRange) unless `min <= max`.
    pub fn new(min: N, max: N) -> Result<Self> {
        Self::with_max_inclusive(min, max, true)
    }

    /// Interval with an explicit upper-bound policy
    pub fn with_max_inclusive(min: N, max: N, max_inclusive: bool) -> Result<Self> {
        // rejects NaN bounds too
        if !(min <= max) {
            return Err(StatsError::InvalidRange {
                min: min.as_f64(),
                max: max.as_f64(),
            });
        }
        Ok(Self::unchecked(min, max, max_inclusive))
    }

    /// Skips the `min <= max` check; for bounds that are still being found
    /// or that are ordered by construction.
    pub(crate) fn unchecked(min: N, max: N, max_inclusive: bool) -> Self {
        Self {
            min,
            max,
            max_inclusive,
        }
    }

    /// Widen the bounds to cover `value`
    pub(crate) fn include(&mut self, value: N) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    pub fn min(&self) -> N {
        self.min
    }

    pub fn max(&self) -> N {
        self.max
    }

    pub fn max_inclusive(&self) -> bool {
        self.max_inclusive
    }

    /// `x >= min` and `x < max`, or `x <= max` when the bound is inclusive
    #[inline]
    pub fn contains(&self, x: N) -> bool {
        x >= self.min && (x < self.max || (self.max_inclusive && x <= self.max))
    }

    /// `max − min` in the bounds' own kind
    ///
    /// # Errors
    ///
    /// [`Overflow`](StatsError::Overflow) when the span does not fit.
    pub fn span(&self) -> Result<N> {
        self.max.try_sub(self.min).ok_or(StatsError::Overflow)
    }

    /// Both of `other`'s bounds lie strictly inside this range
    pub fn strictly_contains(&self, other: &Self) -> bool {
        other.min > self.min && other.max < self.max
    }

    /// Both bounds lie strictly inside `other`
    pub fn is_strictly_inside(&self, other: &Self) -> bool {
        other.strictly_contains(self)
    }
}

impl<N: PartialEq> PartialEq for Range<N> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<N: PartialOrd> PartialOrd for Range<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.min.partial_cmp(&other.min)? {
            Ordering::Equal => self.max.partial_cmp(&other.max),
            ordering => Some(ordering),
        }
    }
}

impl<N: Display> Display for Range<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let close = if self.max_inclusive { ']' } else { ')' };
        write!(f, "[{}, {}{}", self.min, self.max, close)
    }
}
