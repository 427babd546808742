//! # Samplestats
//!
//! Numerically stable statistics over finite sequences of numeric samples.
//!
//! Samplestats computes central-tendency and dispersion measures, bivariate
//! measures, discrete frequencies and histograms from any iterator of
//! numbers. Every function is pure: it consumes its input, owns all of its
//! intermediate state and returns a scalar, a small record or an ordered
//! list of bins.
//!
//! ## Features
//!
//! - **Moments**: mean, variance, standard deviation, skewness and kurtosis
//!   with Welford-style single-pass accumulation
//! - **Bivariate**: covariance, Pearson correlation and least-squares
//!   linear regression
//! - **Frequency**: exact-value counting, mode and modes
//! - **Histograms**: range partitioning under three binning modes, bin-count
//!   heuristics and exact bin assignment
//! - **Any numeric kind**: every primitive integer and float, nullable
//!   samples (`Option<N>`) and projection through a selector
//!
//! ## Quick Start
//!
//! ```rust
//! use samplestats::prelude::*;
//!
//! let data = [2.0, 3.0, 4.0, 6.0];
//!
//! assert!((variance(&data)? - 2.916_666).abs() < 1e-5);
//! assert!((standard_deviation_p(&data)? - 1.479_019).abs() < 1e-5);
//! assert_eq!(median(&data)?, 3.5);
//! # Ok::<(), StatsError>(())
//! ```
//!
//! ## Error Policies
//!
//! Each statistic comes in two flavours. The strict one returns a
//! [`Result`](traits::Result) and fails on insufficient data; the permissive
//! one (suffixed `_nan`) returns a sentinel instead:
//!
//! ```rust
//! use samplestats::prelude::*;
//!
//! let empty: [f64; 0] = [];
//! assert!(mean(&empty).is_err());
//! assert!(mean_nan(&empty).is_nan());
//! ```
//!
//! Arithmetic overflow and mismatched pair lengths are errors under both
//! policies.
//!
//! ## Selectors
//!
//! Every statistic has a `*_by` twin that projects arbitrary items first:
//!
//! ```rust
//! use samplestats::prelude::*;
//!
//! struct Reading { celsius: Option<f32> }
//!
//! let readings = [
//!     Reading { celsius: Some(20.5) },
//!     Reading { celsius: None },
//!     Reading { celsius: Some(21.5) },
//! ];
//! let avg = mean_by(&readings, |r| r.celsius)?;
//! assert!((avg - 21.0).abs() < 1e-9);
//! # Ok::<(), StatsError>(())
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families:
//! - `statistics` (default): moments, pairwise measures, regression, summaries
//! - `frequency` (default): CountEach, Mode, Modes
//! - `histogram` (default): bin layouts, bin assignment and bin-count heuristics (implies `frequency`)
//! - `full`: enable all algorithm families
//!
//! Platform features:
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization of result records
//! - `tracing`: Emit debug events through `tracing`

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

macro_rules! debug_event {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)+);
        }
    }};
}

/// Generates `*_by` twins that project each item through a selector and
/// delegate to the base function.
#[allow(unused_macros)]
macro_rules! with_selector {
    ($($(#[$attr:meta])* $by:ident => $base:ident -> $ret:ty;)+) => {
        $(
            $(#[$attr])*
            pub fn $by<T, S, I, F>(source: I, selector: F) -> $ret
            where
                I: IntoIterator<Item = T>,
                F: FnMut(T) -> S,
                S: $crate::traits::Sample,
            {
                $base(source.into_iter().map(selector))
            }
        )+
    };
}

// Core traits always available
pub mod traits;

pub mod range;

pub(crate) mod math;
pub(crate) mod policy;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

#[cfg(feature = "frequency")]
#[cfg_attr(docsrs, doc(cfg(feature = "frequency")))]
pub mod frequency;

#[cfg(feature = "histogram")]
#[cfg_attr(docsrs, doc(cfg(feature = "histogram")))]
pub mod histogram;

pub mod prelude {
    pub use crate::range::Range;
    pub use crate::traits::{Numeric, Sample, StatsError};

    #[cfg(feature = "statistics")]
    pub use crate::statistics::*;

    #[cfg(feature = "frequency")]
    pub use crate::frequency::*;

    #[cfg(feature = "histogram")]
    pub use crate::histogram::*;
}

pub use range::Range;
pub use traits::{Numeric, Result, Sample, StatsError};

#[cfg(feature = "statistics")]
pub use statistics::{LeastSquares, MomentAccumulator, PairwiseAccumulator};

#[cfg(feature = "frequency")]
pub use frequency::ItemCount;

#[cfg(feature = "histogram")]
pub use histogram::{Bin, BinCount, BinningMode};
