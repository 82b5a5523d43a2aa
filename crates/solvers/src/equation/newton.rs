//! Newton-Raphson iteration for single-variable equations.
//!
//! Each step uses the central-difference derivative `d` at the current
//! estimate and moves to `x - f(x) / d`. The error metric is the step size
//! `|x_next - x|`.
//!
//! Step 0 records the guess with `error = |f(x0)|` and no derivative. A
//! derivative smaller than [`MIN_DERIVATIVE`] in magnitude aborts the solve
//! with [`Error::ZeroDerivative`], which keeps the trace recorded so far.

mod error;
mod record;

pub use error::Error;
pub use record::Record;

use log::{debug, info, warn};
use skein_core::Function;

use crate::equation::{
    Config, Solution, Status,
    evaluate::{evaluate, slope},
};

/// Derivatives with a smaller magnitude are treated as zero.
pub const MIN_DERIVATIVE: f64 = 1e-10;

/// Finds a root of `f` starting from the guess `x0`.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the derivative vanishes at an
/// estimate, or if `f` is undefined at a point the iteration needs.
pub fn solve<F>(f: &F, x0: f64, config: &Config) -> Result<Solution<Record>, Error>
where
    F: Function + ?Sized,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let mut x = x0;
    let mut fx = evaluate(f, x)?;
    let mut error = fx.abs();

    let mut iterations = Vec::new();
    iterations.push(Record {
        step: 0,
        x,
        fx,
        derivative: None,
        error,
    });

    for step in 1..=config.max_iters() {
        let d = slope(f, x)?;
        if d.abs() < MIN_DERIVATIVE {
            warn!("newton aborted at step {step}: f'({x}) = {d}");
            return Err(Error::ZeroDerivative {
                x,
                derivative: d,
                iterations,
            });
        }

        let x_next = x - fx / d;
        let f_next = evaluate(f, x_next)?;
        error = (x_next - x).abs();

        debug!("newton step {step}: x = {x_next}, f(x) = {f_next}, f' = {d}, error = {error}");
        iterations.push(Record {
            step,
            x: x_next,
            fx: f_next,
            derivative: Some(d),
            error,
        });

        x = x_next;
        fx = f_next;

        if config.is_converged(fx, error) {
            info!("newton converged after {step} steps: root = {x}");
            return Ok(Solution {
                status: Status::Converged,
                root: x,
                function_value: fx,
                error,
                iterations,
            });
        }
    }

    warn!(
        "newton stopped after {} steps without converging: root = {x}, error = {error}",
        config.max_iters()
    );
    Ok(Solution {
        status: Status::MaxIters,
        root: x,
        function_value: fx,
        error,
        iterations,
    })
}
