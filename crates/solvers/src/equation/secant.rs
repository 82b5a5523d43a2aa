//! Secant iteration for single-variable equations.
//!
//! The secant method replaces Newton's derivative with the slope of the line
//! through the last two estimates:
//!
//! ```text
//! x_next = x_curr - f(x_curr) * (x_curr - x_prev) / (f(x_curr) - f(x_prev))
//! ```
//!
//! # Trace
//!
//! Two seed records come first. Step 0 holds only `x0`; step 1 holds both
//! guesses, their function values and `error = |x1 - x0|`. Steps
//! `2..=max_iters` are secant updates, each recording the new pair
//! `(x_prev, x_curr)` and `error = |x_next - x_curr|`.
//!
//! When `|f(x_curr) - f(x_prev)|` falls below [`MIN_DENOMINATOR`] the solve
//! aborts with [`Error::DegenerateSecant`], which keeps the trace so far.

mod error;
mod record;

pub use error::Error;
pub use record::Record;

use log::{debug, info, warn};
use skein_core::Function;

use crate::equation::{Config, Solution, Status, evaluate::evaluate};

/// Secant denominators with a smaller magnitude are treated as zero.
pub const MIN_DENOMINATOR: f64 = 1e-10;

/// Finds a root of `f` starting from the guesses `x0` and `x1`.
///
/// # Errors
///
/// Returns an error if the guesses are equal or non-finite, if the secant
/// through the last two estimates becomes flat, or if `f` is undefined at a
/// point the iteration needs.
pub fn solve<F>(f: &F, x0: f64, x1: f64, config: &Config) -> Result<Solution<Record>, Error>
where
    F: Function + ?Sized,
{
    #[allow(clippy::float_cmp)]
    if !x0.is_finite() || !x1.is_finite() || x0 == x1 {
        return Err(Error::InvalidGuess { x0, x1 });
    }

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut fx_prev = evaluate(f, x_prev)?;
    let mut fx_curr = evaluate(f, x_curr)?;
    let mut error = (x_curr - x_prev).abs();

    let mut iterations = Vec::new();
    iterations.push(Record {
        step: 0,
        x_prev,
        x_curr: None,
        fx_prev: None,
        fx_curr: None,
        error: None,
    });
    iterations.push(Record {
        step: 1,
        x_prev,
        x_curr: Some(x_curr),
        fx_prev: Some(fx_prev),
        fx_curr: Some(fx_curr),
        error: Some(error),
    });

    for step in 2..=config.max_iters() {
        let denominator = fx_curr - fx_prev;
        if denominator.abs() < MIN_DENOMINATOR {
            warn!("secant aborted at step {step}: f({x_prev}) = {fx_prev}, f({x_curr}) = {fx_curr}");
            return Err(Error::DegenerateSecant {
                x_prev,
                x_curr,
                fx_prev,
                fx_curr,
                iterations,
            });
        }

        let x_next = x_curr - fx_curr * (x_curr - x_prev) / denominator;
        let f_next = evaluate(f, x_next)?;
        error = (x_next - x_curr).abs();

        debug!("secant step {step}: x = {x_next}, f(x) = {f_next}, error = {error}");
        iterations.push(Record {
            step,
            x_prev: x_curr,
            x_curr: Some(x_next),
            fx_prev: Some(fx_curr),
            fx_curr: Some(f_next),
            error: Some(error),
        });

        (x_prev, x_curr) = (x_curr, x_next);
        (fx_prev, fx_curr) = (fx_curr, f_next);

        if config.is_converged(fx_curr, error) {
            info!("secant converged after {step} steps: root = {x_curr}");
            return Ok(Solution {
                status: Status::Converged,
                root: x_curr,
                function_value: fx_curr,
                error,
                iterations,
            });
        }
    }

    warn!(
        "secant stopped after {} steps without converging: root = {x_curr}, error = {error}",
        config.max_iters()
    );
    Ok(Solution {
        status: Status::MaxIters,
        root: x_curr,
        function_value: fx_curr,
        error,
        iterations,
    })
}
