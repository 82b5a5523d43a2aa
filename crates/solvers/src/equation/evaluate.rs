use std::error::Error as StdError;

use thiserror::Error;

use skein_core::{DEFAULT_STEP, Function, derivative};

/// The function was undefined at a point the solver needed.
///
/// No solver has a policy for skipping an undefined midpoint or guess, so
/// this aborts the solve.
#[derive(Debug, Error)]
#[error("function is undefined at x = {x}: {source}")]
pub struct EvalError {
    /// The point being evaluated.
    pub x: f64,

    /// The underlying function error.
    #[source]
    pub source: Box<dyn StdError + Send + Sync>,
}

#[derive(Debug, Error)]
#[error("value {0} is not finite")]
struct NotFinite(f64);

impl EvalError {
    fn new<E: StdError + Send + Sync + 'static>(x: f64, err: E) -> Self {
        Self {
            x,
            source: Box::new(err),
        }
    }
}

/// Evaluates `f(x)`, rejecting non-finite values.
pub(crate) fn evaluate<F>(f: &F, x: f64) -> Result<f64, EvalError>
where
    F: Function + ?Sized,
{
    let value = f.call(x).map_err(|err| EvalError::new(x, err))?;
    finite(x, value)
}

/// Evaluates `f'(x)` by central difference with the default step.
pub(crate) fn slope<F>(f: &F, x: f64) -> Result<f64, EvalError>
where
    F: Function + ?Sized,
{
    let value = derivative(f, x, DEFAULT_STEP).map_err(|err| EvalError::new(x, err))?;
    finite(x, value)
}

fn finite(x: f64, value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::new(x, NotFinite(value)))
    }
}
