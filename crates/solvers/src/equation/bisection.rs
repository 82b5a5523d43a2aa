//! Bisection for single-variable equations.
//!
//! # Algorithm
//!
//! Starting from a bracket `[a, b]` where `f(a)` and `f(b)` have strictly
//! opposite signs, each step evaluates the midpoint `c`, records the full
//! state, and keeps the half-interval that still contains the sign change.
//!
//! The error metric is the bracket width *after* the step, `|b - a| / 2`, so
//! it halves from one step to the next. The solve converges when
//! `|f(c)| < tolerance` or the error drops below `tolerance`.
//!
//! # Trace
//!
//! Step 0 is the seed: the initial bracket, `f(a)`, `f(b)` and
//! `error = |b - a|`, with no midpoint. Steps `1..=max_iters` are bisections.
//! An exhausted solve therefore returns `max_iters + 1` records.

mod bracket;
mod error;
mod record;


pub use bracket::BracketError;
pub use error::Error;
pub use record::Record;

use log::{debug, info, warn};
use skein_core::Function;

use crate::equation::{Config, Solution, Status, evaluate::evaluate};

use bracket::{Bounds, Bracket};

/// Finds a root of `f` inside `bracket` using bisection.
///
/// The bracket endpoints may be given in either order.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite or zero width, if `f` does
/// not change sign strictly across it, or if `f` is undefined at an endpoint
/// or a midpoint.
pub fn solve<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution<Record>, Error>
where
    F: Function + ?Sized,
{
    let bounds = Bounds::new(bracket)?;
    let f_left = evaluate(f, bounds.left())?;
    let f_right = evaluate(f, bounds.right())?;
    let mut bracket = Bracket::new(bounds, f_left, f_right)?;

    let mut iterations = Vec::new();
    iterations.push(Record {
        step: 0,
        a: bounds.left(),
        b: bounds.right(),
        c: None,
        fa: f_left,
        fb: f_right,
        fc: None,
        error: bracket.width().abs(),
    });

    // Overwritten by the first step; `max_iters` is at least one.
    let mut estimate = (bounds.left(), f_left, bracket.width().abs());

    for step in 1..=config.max_iters() {
        let (a, fa) = bracket.left();
        let (b, fb) = bracket.right();
        let c = bracket.midpoint();
        let fc = evaluate(f, c)?;
        let error = (b - a).abs() / 2.0;

        debug!("bisection step {step}: [{a}, {b}] -> c = {c}, f(c) = {fc}, error = {error}");
        iterations.push(Record {
            step,
            a,
            b,
            c: Some(c),
            fa,
            fb,
            fc: Some(fc),
            error,
        });

        if config.is_converged(fc, error) {
            info!("bisection converged after {step} steps: root = {c}");
            return Ok(Solution {
                status: Status::Converged,
                root: c,
                function_value: fc,
                error,
                iterations,
            });
        }

        bracket.shrink(c, fc);
        estimate = (c, fc, error);
    }

    let (root, function_value, error) = estimate;
    warn!(
        "bisection stopped after {} steps without converging: root = {root}, error = {error}",
        config.max_iters()
    );
    Ok(Solution {
        status: Status::MaxIters,
        root,
        function_value,
        error,
        iterations,
    })
}
