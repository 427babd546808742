//! Exact frequency counting
//!
//! This module groups equal values and reports how often each one occurs.
//!
//! # Operations
//!
//! - [`count_each`] / [`count_each_by`]: `(value, count)` records for any
//!   totally ordered item, or under a caller-supplied comparer
//! - [`count_values`]: the same for numeric samples, with missing entries dropped
//! - [`mode`]: the single most frequent value, smallest on ties
//! - [`modes`]: every repeated value, most frequent first
//!
//! # Example
//!
//! ```
//! use samplestats::frequency::{count_values, mode, modes};
//!
//! let rolls = [3, 6, 2, 6, 3, 6];
//!
//! assert_eq!(mode(&rolls), Some(6));
//! assert_eq!(modes(&rolls), vec![6, 3]);
//!
//! let counts = count_values(&rolls);
//! assert_eq!(counts.len(), 3);
//! assert_eq!((*counts[2].value(), counts[2].count()), (6, 3));
//! ```

mod counter;

pub use counter::*;
