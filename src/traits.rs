//! Core traits and error types
//!
//! Every statistic in this crate is written once against [`Numeric`] and
//! consumes any iterator of [`Sample`]s. A sample is either a plain numeric
//! value, a nullable one (`Option<N>`, where `None` marks a missing entry),
//! or a reference to either.

use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter};

use num_traits::{ToPrimitive, Zero};

/// Error raised by the strict API
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Fewer samples than the statistic needs (empty input included)
    InsufficientData {
        got: usize,
        min: usize,
    },
    /// Paired sequences have different lengths
    MismatchedLengths {
        left: usize,
        right: usize,
    },
    /// Bin count must be positive
    InvalidBinCount(usize),
    /// Range bounds are inverted, NaN, or too wide to partition
    InvalidRange {
        min: f64,
        max: f64,
    },
    /// A sample is not contained by any of the supplied bins
    SampleOutsideBins(f64),
    /// Cannot solve for x on a fit with zero slope
    ZeroSlope,
    /// Checked arithmetic in the sample's own numeric kind overflowed
    Overflow,
}

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InsufficientData { got, min } => {
                write!(f, "insufficient data: got {} samples, need at least {}", got, min)
            }
            StatsError::MismatchedLengths { left, right } => {
                write!(f, "length mismatch: left has {} samples, right has {}", left, right)
            }
            StatsError::InvalidBinCount(count) => {
                write!(f, "invalid bin count: {} (must be > 0)", count)
            }
            StatsError::InvalidRange { min, max } => {
                write!(f, "invalid range: min {} is not <= max {}", min, max)
            }
            StatsError::SampleOutsideBins(value) => {
                write!(f, "sample {} is not contained by any bin", value)
            }
            StatsError::ZeroSlope => write!(f, "cannot solve for x: slope is zero"),
            StatsError::Overflow => write!(f, "arithmetic overflow"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Result alias used throughout the strict API
pub type Result<T> = core::result::Result<T, StatsError>;

/// A primitive numeric kind statistics can be computed over
///
/// Integer kinds are promoted to `f64` before any moment is accumulated, so
/// the only arithmetic performed in the native kind is the checked kind
/// (sums and spans), which reports overflow instead of wrapping.
pub trait Numeric: Copy + PartialOrd + Debug + ToPrimitive + Zero + 'static {
    /// Lossy promotion to `f64`
    #[inline]
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// Addition that returns `None` on overflow (never for floats)
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction that returns `None` on overflow (never for floats)
    fn try_sub(self, rhs: Self) -> Option<Self>;

    /// Multiplication that returns `None` on overflow (never for floats)
    fn try_mul(self, rhs: Self) -> Option<Self>;

    /// Whether this value is a float NaN
    #[inline]
    fn is_nan(self) -> bool {
        false
    }

    /// Total order used for sorting and exact-equality grouping
    ///
    /// Floats compare numerically, with NaN after every other value and
    /// equal to itself, so `-0.0` and `0.0` land in the same group.
    fn sort_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn try_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline]
                fn try_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline]
                fn sort_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }

            impl Sample for $t {
                type Value = $t;

                #[inline]
                fn value(self) -> Option<$t> {
                    Some(self)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn try_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                #[inline]
                fn try_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                #[inline]
                fn sort_cmp(&self, other: &Self) -> Ordering {
                    match self.partial_cmp(other) {
                        Some(ordering) => ordering,
                        None => <$t>::is_nan(*self).cmp(&<$t>::is_nan(*other)),
                    }
                }
            }

            impl Sample for $t {
                type Value = $t;

                #[inline]
                fn value(self) -> Option<$t> {
                    Some(self)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// One entry of an input sequence
///
/// `value()` returns `None` for a missing entry; missing entries are
/// dropped before any statistic sees the data.
pub trait Sample {
    /// The numeric kind this sample carries
    type Value: Numeric;

    /// The present value, if any
    fn value(self) -> Option<Self::Value>;
}

impl<N: Numeric> Sample for Option<N> {
    type Value = N;

    #[inline]
    fn value(self) -> Option<N> {
        self
    }
}

impl<'a, S: Sample + Copy> Sample for &'a S {
    type Value = S::Value;

    #[inline]
    fn value(self) -> Option<S::Value> {
        (*self).value()
    }
}

/// Present values of `source`, in input order
#[inline]
pub(crate) fn present<I>(source: I) -> impl Iterator<Item = <I::Item as Sample>::Value>
where
    I: IntoIterator,
    I::Item: Sample,
{
    source.into_iter().filter_map(Sample::value)
}
