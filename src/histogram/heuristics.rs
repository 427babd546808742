//! Bin-count rules of thumb
//!
//! Each rule depends on the sample count only. All of them return 0 for an
//! empty sample, which [`create_bins`](super::create_bins) rejects.

use crate::math;

/// `round(log2(n) + 1)`
pub fn bin_count_sturges(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    math::round(math::log2(n as f64) + 1.0) as usize
}

/// `round(sqrt(n))`
pub fn bin_count_square_root(n: usize) -> usize {
    math::round(math::sqrt(n as f64)) as usize
}

/// `round(2 · n^(1/3))`
pub fn bin_count_rice(n: usize) -> usize {
    math::round(2.0 * math::cbrt(n as f64)) as usize
}

/// A bin count, fixed or derived from the sample count
///
/// ```
/// use samplestats::histogram::BinCount;
///
/// assert_eq!(BinCount::Fixed(12).resolve(1000), 12);
/// assert_eq!(BinCount::Sturges.resolve(1000), 11);
/// assert_eq!(BinCount::SquareRoot.resolve(1000), 32);
/// assert_eq!(BinCount::Rice.resolve(1000), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinCount {
    Fixed(usize),
    #[default]
    Sturges,
    SquareRoot,
    Rice,
}

impl BinCount {
    /// Number of bins for `n` samples
    pub fn resolve(self, n: usize) -> usize {
        match self {
            BinCount::Fixed(count) => count,
            BinCount::Sturges => bin_count_sturges(n),
            BinCount::SquareRoot => bin_count_square_root(n),
            BinCount::Rice => bin_count_rice(n),
        }
    }
}

impl From<usize> for BinCount {
    fn from(count: usize) -> Self {
        BinCount::Fixed(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sturges() {
        assert_eq!(bin_count_sturges(0), 0);
        assert_eq!(bin_count_sturges(1), 1);
        assert_eq!(bin_count_sturges(8), 4);
        assert_eq!(bin_count_sturges(100), 8);
    }

    #[test]
    fn test_square_root() {
        assert_eq!(bin_count_square_root(0), 0);
        assert_eq!(bin_count_square_root(10), 3);
        assert_eq!(bin_count_square_root(12), 3);
        assert_eq!(bin_count_square_root(13), 4);
    }

    #[test]
    fn test_rice() {
        assert_eq!(bin_count_rice(0), 0);
        assert_eq!(bin_count_rice(8), 4);
        assert_eq!(bin_count_rice(125), 10);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(BinCount::from(5).resolve(0), 5);
        assert_eq!(BinCount::default().resolve(8), 4);
    }
}
