//! Ordinary least-squares fit of `y = m·x + b`

use core::fmt::{Display, Formatter};

use crate::policy::Outcome;
use crate::traits::{Numeric, Result, Sample, StatsError};

use super::PairwiseAccumulator;

/// Result of a simple linear regression
///
/// Two sentinels exist and must not be confused:
/// [`LeastSquares::EMPTY`] (`0, 0, 0`) is a well-formed but undetermined fit
/// (every x equal), [`LeastSquares::NAN`] marks insufficient data under the
/// permissive API.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeastSquares {
    /// Slope
    pub m: f64,
    /// Intercept
    pub b: f64,
    /// Coefficient of determination
    pub r_squared: f64,
}

impl LeastSquares {
    /// Undetermined (singular) fit
    pub const EMPTY: LeastSquares = LeastSquares {
        m: 0.0,
        b: 0.0,
        r_squared: 0.0,
    };

    /// Insufficient data
    pub const NAN: LeastSquares = LeastSquares {
        m: f64::NAN,
        b: f64::NAN,
        r_squared: f64::NAN,
    };

    pub fn new(m: f64, b: f64, r_squared: f64) -> Self {
        Self { m, b, r_squared }
    }

    /// Whether this is the singular-fit sentinel
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Whether this is the insufficient-data sentinel
    pub fn is_nan(&self) -> bool {
        self.m.is_nan() && self.b.is_nan() && self.r_squared.is_nan()
    }

    /// `m·x + b`
    pub fn solve(&self, x: f64) -> f64 {
        self.m * x + self.b
    }

    /// The x at which the fit reaches `y`
    ///
    /// # Errors
    ///
    /// [`ZeroSlope`](StatsError::ZeroSlope) for a horizontal fit.
    pub fn solve_for_x(&self, y: f64) -> Result<f64> {
        if self.m == 0.0 {
            return Err(StatsError::ZeroSlope);
        }
        Ok((y - self.b) / self.m)
    }
}

impl Display for LeastSquares {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "y = {}x + {} (r² = {})", self.m, self.b, self.r_squared)
    }
}

/// Fit from centred co-moments
///
/// `m = Sxy / Sxx`, `b = ȳ − m·x̄` and `R² = Sxy² / (Sxx·Syy)`. These equal
/// the raw-sum normal equations, but constant x leaves `Sxx` at exactly zero
/// and offsets far from the origin do not cancel.
fn solve(acc: &PairwiseAccumulator) -> Outcome<LeastSquares> {
    let n = acc.len() as usize;
    if n < 2 {
        return Outcome::Insufficient { got: n, min: 2 };
    }

    let (sxx, syy, sxy) = acc.co_moments();
    if sxx == 0.0 {
        debug_event!(n, "all x values equal, regression is singular");
        return Outcome::Singular(LeastSquares::EMPTY);
    }

    let (mean_x, mean_y) = acc.means();
    let m = sxy / sxx;
    let b = mean_y - m * mean_x;
    let r_squared = (sxy * sxy) / (sxx * syy);

    Outcome::Value(LeastSquares::new(m, b, r_squared))
}

fn fit<I, X, Y>(pairs: I) -> Outcome<LeastSquares>
where
    I: IntoIterator<Item = (X, Y)>,
    X: Sample,
    Y: Sample,
{
    let mut acc = PairwiseAccumulator::new();
    for (x, y) in pairs {
        if let (Some(x), Some(y)) = (x.value(), y.value()) {
            acc.add(x.as_f64(), y.as_f64());
        }
    }
    solve(&acc)
}

/// Least-squares fit over `(x, y)` pairs
///
/// Pairs with a missing value on either side are skipped. When every x is
/// equal the fit is singular and [`LeastSquares::EMPTY`] is returned.
///
/// # Errors
///
/// [`InsufficientData`](StatsError::InsufficientData) below two pairs.
///
/// ```
/// use samplestats::statistics::least_squares;
///
/// let fit = least_squares([(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]).unwrap();
/// assert_eq!((fit.m, fit.b, fit.r_squared), (1.0, 0.0, 1.0));
///
/// let singular = least_squares([(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]).unwrap();
/// assert!(singular.is_empty());
/// ```
pub fn least_squares<I, X, Y>(pairs: I) -> Result<LeastSquares>
where
    I: IntoIterator<Item = (X, Y)>,
    X: Sample,
    Y: Sample,
{
    fit(pairs).strict()
}

/// Least-squares fit, [`LeastSquares::NAN`] below two pairs
pub fn least_squares_nan<I, X, Y>(pairs: I) -> LeastSquares
where
    I: IntoIterator<Item = (X, Y)>,
    X: Sample,
    Y: Sample,
{
    fit(pairs).or_sentinel(LeastSquares::NAN)
}

/// [`least_squares`] over two projections of the same items
pub fn least_squares_by<T, I, SX, SY, FX, FY>(source: I, mut x: FX, mut y: FY) -> Result<LeastSquares>
where
    I: IntoIterator<Item = T>,
    FX: FnMut(&T) -> SX,
    FY: FnMut(&T) -> SY,
    SX: Sample,
    SY: Sample,
{
    least_squares(source.into_iter().map(|item| (x(&item), y(&item))))
}

/// [`least_squares_nan`] over two projections of the same items
pub fn least_squares_nan_by<T, I, SX, SY, FX, FY>(source: I, mut x: FX, mut y: FY) -> LeastSquares
where
    I: IntoIterator<Item = T>,
    FX: FnMut(&T) -> SX,
    FY: FnMut(&T) -> SY,
    SX: Sample,
    SY: Sample,
{
    least_squares_nan(source.into_iter().map(|item| (x(&item), y(&item))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() {
        let fit = least_squares([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)])
            .unwrap();
        assert_eq!(fit, LeastSquares::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_noisy_line() {
        let fit = least_squares([(1.0, 3.1), (2.0, 4.9), (3.0, 7.2), (4.0, 8.8)]).unwrap();
        assert!((fit.m - 1.94).abs() < 1e-9);
        assert!((fit.b - 1.15).abs() < 1e-9);
        assert!(fit.r_squared > 0.99 && fit.r_squared < 1.0);
    }

    #[test]
    fn test_singular() {
        let fit = least_squares([(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]).unwrap();
        assert!(fit.is_empty());
        assert!(!fit.is_nan());

        let fit = least_squares_nan([(2, 1), (2, 5)]);
        assert_eq!(fit, LeastSquares::EMPTY);
    }

    #[test]
    fn test_insufficient() {
        assert_eq!(
            least_squares([(1.0, 1.0)]),
            Err(StatsError::InsufficientData { got: 1, min: 2 })
        );
        let fit = least_squares_nan([(1.0, 1.0)]);
        assert!(fit.is_nan());
        assert!(!fit.is_empty());
    }

    #[test]
    fn test_missing_pairs_skipped() {
        let pairs = [(Some(0.0), Some(1.0)), (None, Some(9.0)), (Some(2.0), Some(5.0))];
        let fit = least_squares(pairs).unwrap();
        assert!((fit.m - 2.0).abs() < 1e-12);
        assert!((fit.b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_x_is_singular() {
        for x in [0.1, 1.1, 1.0e9 + 0.1] {
            let fit = least_squares((0..7).map(|i| (x, i as f64))).unwrap();
            assert!(fit.is_empty(), "x = {}: {:?}", x, fit);
        }
    }

    #[test]
    fn test_line_far_from_origin() {
        for offset in [1.0e8, 1.0e9] {
            let pairs = (0..10).map(|i| (offset + i as f64, 2.0 * i as f64 + 1.0));
            let fit = least_squares(pairs).unwrap();
            assert!(!fit.is_empty());
            assert!((fit.m - 2.0).abs() < 1e-6, "offset {}: m = {}", offset, fit.m);
            assert!((fit.r_squared - 1.0).abs() < 1e-6);
            assert!((fit.solve(offset + 3.0) - 7.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_solve() {
        let fit = LeastSquares::new(2.0, 1.0, 1.0);
        assert_eq!(fit.solve(3.0), 7.0);
        assert_eq!(fit.solve_for_x(7.0), Ok(3.0));
        assert_eq!(
            LeastSquares::new(0.0, 4.0, 0.0).solve_for_x(4.0),
            Err(StatsError::ZeroSlope)
        );
    }

    #[test]
    fn test_selectors() {
        struct Point {
            x: i32,
            y: f64,
        }
        let points = [
            Point { x: 1, y: 2.0 },
            Point { x: 2, y: 4.0 },
            Point { x: 3, y: 6.0 },
        ];
        let fit = least_squares_by(&points, |p| p.x, |p| p.y).unwrap();
        assert!((fit.m - 2.0).abs() < 1e-12);
        assert!(fit.b.abs() < 1e-12);
        assert!(least_squares_nan_by(&points[..1], |p| p.x, |p| p.y).is_nan());
    }

    #[test]
    fn test_display() {
        let fit = LeastSquares::new(2.0, 1.5, 1.0);
        assert_eq!(format!("{}", fit), "y = 2x + 1.5 (r² = 1)");
    }
}
