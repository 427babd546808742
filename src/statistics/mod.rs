//! Descriptive and bivariate statistics
//!
//! Moments are computed in a single pass with constant memory; median needs
//! the values materialized and sorted.
//!
//! # Example
//!
//! ```
//! use samplestats::statistics::{kurtosis, mean, median, skewness, variance};
//!
//! let data = [2.0, 3.0, 4.0, 6.0];
//!
//! println!("Mean: {}", mean(&data).unwrap());
//! println!("Variance: {}", variance(&data).unwrap());
//! println!("Median: {}", median(&data).unwrap());
//! println!("Skewness: {}", skewness(&data).unwrap());
//! println!("Kurtosis: {}", kurtosis(&data).unwrap());
//! ```

mod moments;
mod pairwise;
mod regression;
mod summary;

pub use moments::*;
pub use pairwise::*;
pub use regression::*;
pub use summary::*;
