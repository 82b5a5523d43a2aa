use std::convert::Infallible;

/// A real-valued function of one real variable.
///
/// Functions must be deterministic, always producing the same result for a
/// given `x`, which lets solvers replay a trace and lets callers sample the
/// same function they solved.
///
/// A function may be undefined at some points (division by zero, a domain
/// error). It reports that through its own `Error` type; callers decide
/// whether a failure is fatal or just a gap.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function is undefined at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F: Function + ?Sized> Function for &F {
    type Error = F::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// A [`Function`] backed by a closure that is defined everywhere.
///
/// Created by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

/// Wraps a closure `f64 -> f64` as a [`Function`] that never fails.
///
/// ```
/// use skein_core::{Function, from_fn};
///
/// let square = from_fn(|x| x * x);
/// assert_eq!(square.call(3.0), Ok(9.0));
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(f64) -> f64,
{
    FromFn { f }
}

impl<F> Function for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.f)(x))
    }
}
