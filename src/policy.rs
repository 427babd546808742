//! Shared result of every computation, before an error policy is applied
//!
//! The strict functions turn an [`Outcome`] into a [`Result`]; the
//! permissive (`*_nan`) functions turn it into a sentinel value. A
//! singular outcome carries its own sentinel and is never an error.

use crate::traits::{Result, StatsError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Outcome<T> {
    /// Well-defined result
    Value(T),
    /// Not enough samples for this statistic
    Insufficient { got: usize, min: usize },
    /// Well-formed input whose result is mathematically undetermined
    Singular(T),
}

impl<T> Outcome<T> {
    /// `Value(compute())` when at least `min` samples were seen
    #[inline]
    pub(crate) fn at_least(got: usize, min: usize, compute: impl FnOnce() -> T) -> Self {
        if got < min {
            Outcome::Insufficient { got, min }
        } else {
            Outcome::Value(compute())
        }
    }

    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Value(v) => Outcome::Value(f(v)),
            Outcome::Insufficient { got, min } => Outcome::Insufficient { got, min },
            Outcome::Singular(v) => Outcome::Singular(f(v)),
        }
    }

    /// Strict policy: insufficient data is an error
    pub(crate) fn strict(self) -> Result<T> {
        match self {
            Outcome::Value(v) | Outcome::Singular(v) => Ok(v),
            Outcome::Insufficient { got, min } => Err(StatsError::InsufficientData { got, min }),
        }
    }

    /// Permissive policy: insufficient data becomes `sentinel`
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub(crate) fn or_sentinel(self, sentinel: T) -> T {
        match self {
            Outcome::Value(v) | Outcome::Singular(v) => v,
            Outcome::Insufficient { got, min } => {
                debug_event!(got, min, "insufficient data, returning sentinel");
                sentinel
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least() {
        assert_eq!(Outcome::at_least(1, 2, || 5.0), Outcome::Insufficient { got: 1, min: 2 });
        assert_eq!(Outcome::at_least(2, 2, || 5.0), Outcome::Value(5.0));
    }

    #[test]
    fn test_policies() {
        let short: Outcome<f64> = Outcome::Insufficient { got: 0, min: 1 };
        assert_eq!(
            short.strict(),
            Err(StatsError::InsufficientData { got: 0, min: 1 })
        );
        assert!(short.or_sentinel(f64::NAN).is_nan());

        let singular = Outcome::Singular(0.0);
        assert_eq!(singular.strict(), Ok(0.0));
        assert_eq!(singular.or_sentinel(f64::NAN), 0.0);
    }

    #[test]
    fn test_map_keeps_tag() {
        let o = Outcome::Singular(2.0).map(|v: f64| v * 2.0);
        assert_eq!(o, Outcome::Singular(4.0));
        let o = Outcome::<f64>::Insufficient { got: 1, min: 3 }.map(|v| v.sqrt());
        assert_eq!(o, Outcome::Insufficient { got: 1, min: 3 });
    }
}
