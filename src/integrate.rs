//! Definite integrals of samples taken at unit spacing.
//!
//! Three estimates are produced for the same sequence so they can be compared
//! against each other: a hand-written trapezoid sum (endpoints halved, interior
//! points weighted 1), composite Simpson's rule and the composite trapezoid
//! rule summed interval by interval.

use std::fmt;

use num_traits::Float;

use crate::error::{InvalidInput, Result};

fn two<T: Float>() -> T {
    T::one() + T::one()
}

/// Mean of two samples, halving each first so two large values stay finite.
fn mean<T: Float>(a: T, b: T) -> T {
    a / two() + b / two()
}

fn finite<T: Float>(value: T) -> Result<T> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInput::Overflow.into())
    }
}

/// A validated sequence of samples at abscissas `0, 1, ..., N - 1`.
///
/// Holds at least two finite values.
#[derive(Clone, Copy, Debug)]
pub struct Samples<'a, T> {
    values: &'a [T],
}

#[allow(clippy::len_without_is_empty)]
impl<'a, T: Float> Samples<'a, T> {
    /// Validate `values` for integration.
    pub fn new(values: &'a [T]) -> Result<Self> {
        if values.len() < 2 {
            return Err(InvalidInput::TooFewSamples(values.len()).into());
        }

        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(InvalidInput::NonFinite { index }.into());
        }

        Ok(Self { values })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Half of each endpoint plus every interior point.
    pub fn trapezoid_manual(&self) -> Result<T> {
        let last = self.values.len() - 1;
        let ends = mean(self.values[0], self.values[last]);

        finite(
            self.values[1..last]
                .iter()
                .fold(ends, |sum, &value| sum + value),
        )
    }

    /// Composite Simpson's 1/3 rule.
    ///
    /// With an odd number of intervals the leading even run of intervals is
    /// integrated with Simpson's rule and the final interval with the
    /// trapezoid rule. Two samples therefore give the single trapezoid
    /// `(y0 + y1) / 2`.
    pub fn simpsons_rule(&self) -> Result<T> {
        let n = self.values.len();
        let intervals = n - 1;
        let covered = if intervals % 2 == 0 { n } else { n - 1 };

        let mut result = T::zero();

        if covered >= 3 {
            let four = two::<T>() + two();
            let weighted = self.values[..covered]
                .iter()
                .enumerate()
                .fold(T::zero(), |sum, (i, &value)| {
                    let weight = if i == 0 || i == covered - 1 {
                        T::one()
                    } else if i % 2 == 1 {
                        four
                    } else {
                        two()
                    };
                    sum + weight * value
                });
            result = weighted / (two::<T>() + T::one());
        }

        if covered < n {
            result = result + mean(self.values[n - 2], self.values[n - 1]);
        }

        finite(result)
    }

    /// Composite trapezoid rule, one interval at a time.
    pub fn trapezoid_rule(&self) -> Result<T> {
        finite(
            self.values
                .windows(2)
                .fold(T::zero(), |sum, pair| sum + mean(pair[0], pair[1])),
        )
    }

    /// All three estimates.
    pub fn integrate(&self) -> Result<Integration<T>> {
        Ok(Integration {
            manual: self.trapezoid_manual()?,
            simpson: self.simpsons_rule()?,
            trapezoid: self.trapezoid_rule()?,
        })
    }
}

/// The three integral estimates for one sample sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integration<T> {
    /// Endpoint-halved sum.
    pub manual: T,
    /// Composite Simpson's rule.
    pub simpson: T,
    /// Composite trapezoid rule.
    pub trapezoid: T,
}

impl<T: fmt::Display> fmt::Display for Integration<T> {
    /// One estimate per line: manual sum, Simpson's rule, trapezoid rule.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.manual)?;
        writeln!(f, "{}", self.simpson)?;
        write!(f, "{}", self.trapezoid)
    }
}

/// Integrate `samples` as `(y[0] + y[N-1]) / 2 + y[1] + ... + y[N-2]`.
pub fn trapezoid_manual<T: Float>(samples: &[T]) -> Result<T> {
    Samples::new(samples)?.trapezoid_manual()
}

/// Integrate `samples` with composite Simpson's rule. See
/// [`Samples::simpsons_rule`] for how an odd interval count is handled.
pub fn simpsons_rule<T: Float>(samples: &[T]) -> Result<T> {
    Samples::new(samples)?.simpsons_rule()
}

/// Integrate `samples` with the composite trapezoid rule.
pub fn trapezoid_rule<T: Float>(samples: &[T]) -> Result<T> {
    Samples::new(samples)?.trapezoid_rule()
}

/// Validate `samples` once and compute all three estimates.
pub fn integrate<T: Float>(samples: &[T]) -> Result<Integration<T>> {
    Samples::new(samples)?.integrate()
}
