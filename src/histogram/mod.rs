//! Histogram binning
//!
//! A histogram is built in two phases. [`create_bins`] lays out ordered,
//! contiguous, empty [`Bin`]s from `(min, max, bin_count)` under a
//! [`BinningMode`]; [`assign_bins`] then counts every sample into exactly one
//! of them and returns the finished bins. [`histogram`] and
//! [`histogram_with`] run both phases over the data's own bounds.
//!
//! # Binning modes
//!
//! - [`BinningMode::Unbounded`]: equal-width bins plus an overflow bin up to +∞
//! - [`BinningMode::ExpandRange`]: bins centred on evenly spaced points,
//!   extending half a bin past both ends
//! - [`BinningMode::MaxValueInclusive`]: equal-width bins, the last one closed
//!
//! # Example
//!
//! ```
//! use samplestats::histogram::{histogram_with, BinCount, BinningMode};
//!
//! let latencies_ms = [12, 15, 11, 40, 13, 14, 90, 12, 16, 13];
//! let bins = histogram_with(&latencies_ms, BinCount::Sturges, BinningMode::Unbounded).unwrap();
//!
//! for bin in &bins {
//!     println!("{}", bin);
//! }
//! assert_eq!(bins.iter().map(|b| b.count()).sum::<usize>(), latencies_ms.len());
//! ```

mod bin;
mod engine;
mod heuristics;

pub use bin::{Bin, BinningMode};
pub use engine::{assign_bins, create_bins, histogram, histogram_by, histogram_with, histogram_with_by};
pub use heuristics::{bin_count_rice, bin_count_square_root, bin_count_sturges, BinCount};
