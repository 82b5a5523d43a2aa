use log::debug;
use thiserror::Error;

use crate::Function;

/// A sampled point of a function.
///
/// `y` is `None` where the function is undefined, so a chart can draw a gap
/// instead of a misleading value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    pub x: f64,
    pub y: Option<f64>,
}

/// Errors that can occur when validating a sampling request.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SampleError {
    #[error("need at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("range bounds must be finite, got [{start}, {end}]")]
    NonFiniteRange { start: f64, end: f64 },
}

/// Samples `f` at `count` evenly spaced points from `start` to `end`.
///
/// Points run left to right and include both endpoints; the spacing is
/// `(end - start) / (count - 1)`. A point where `f` fails, or returns a
/// non-finite value, is kept with `y = None`.
///
/// # Errors
///
/// Returns an error if `count < 2` or either bound is non-finite.
pub fn sample<F>(f: &F, start: f64, end: f64, count: usize) -> Result<Vec<Sample>, SampleError>
where
    F: Function + ?Sized,
{
    if count < 2 {
        return Err(SampleError::TooFewPoints { count });
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(SampleError::NonFiniteRange { start, end });
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (end - start) / (count - 1) as f64;

    let samples = (0..count)
        .map(|i| {
            // Pin the last point so the range is inclusive despite rounding.
            #[allow(clippy::cast_precision_loss)]
            let x = if i == count - 1 {
                end
            } else {
                start + i as f64 * step
            };

            let y = match f.call(x) {
                Ok(y) if y.is_finite() => Some(y),
                Ok(y) => {
                    debug!("f({x}) = {y} is not finite, leaving a gap");
                    None
                }
                Err(error) => {
                    debug!("f({x}) is undefined: {error}");
                    None
                }
            };

            Sample { x, y }
        })
        .collect();

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    use approx::assert_relative_eq;

    use crate::from_fn;

    #[test]
    fn samples_inclusive_range() {
        let f = from_fn(|x| 2.0 * x);
        let samples = sample(&f, 0.0, 10.0, 11).unwrap();

        assert_eq!(samples.len(), 11);
        for (i, point) in samples.iter().enumerate() {
            assert_relative_eq!(point.x, i as f64);
            assert_relative_eq!(point.y.unwrap(), 2.0 * i as f64);
        }
    }

    #[test]
    fn last_point_is_exactly_end() {
        let f = from_fn(|x| x);
        let samples = sample(&f, -10.0, 10.0, 201).unwrap();

        assert_eq!(samples.len(), 201);
        assert_eq!(samples[0].x, -10.0);
        assert_eq!(samples[200].x, 10.0);
        assert_relative_eq!(samples[100].x, 0.0, epsilon = 1e-12);
    }

    #[derive(Debug)]
    struct Pole;

    impl fmt::Display for Pole {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("pole")
        }
    }

    impl std::error::Error for Pole {}

    /// `1/(x - 3)`, undefined at three.
    struct ShiftedReciprocal;

    impl Function for ShiftedReciprocal {
        type Error = Pole;

        fn call(&self, x: f64) -> Result<f64, Self::Error> {
            if x == 3.0 {
                Err(Pole)
            } else {
                Ok(1.0 / (x - 3.0))
            }
        }
    }

    #[test]
    fn undefined_points_become_gaps() {
        let samples = sample(&ShiftedReciprocal, 0.0, 10.0, 11).unwrap();

        assert_eq!(samples[3].x, 3.0);
        assert_eq!(samples[3].y, None);
        assert_relative_eq!(samples[4].y.unwrap(), 1.0);
        assert_eq!(samples.iter().filter(|s| s.y.is_none()).count(), 1);
    }

    #[test]
    fn non_finite_values_become_gaps() {
        let f = from_fn(f64::ln);
        let samples = sample(&f, -1.0, 1.0, 3).unwrap();

        // ln(-1) is NaN and ln(0) is -inf.
        assert_eq!(samples[0].y, None);
        assert_eq!(samples[1].y, None);
        assert_relative_eq!(samples[2].y.unwrap(), 0.0);
    }

    #[test]
    fn rejects_too_few_points() {
        let f = from_fn(|x| x);
        assert_eq!(
            sample(&f, 0.0, 1.0, 1),
            Err(SampleError::TooFewPoints { count: 1 })
        );
    }

    #[test]
    fn rejects_non_finite_range() {
        let f = from_fn(|x| x);
        assert!(matches!(
            sample(&f, f64::NEG_INFINITY, 1.0, 10),
            Err(SampleError::NonFiniteRange { .. })
        ));
    }
}
