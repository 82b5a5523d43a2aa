use thiserror::Error;

use crate::equation::EvalError;

use super::record::Record;

/// Errors that can occur during secant solving.
#[derive(Debug, Error)]
pub enum Error {
    /// The two guesses are equal or not finite.
    #[error("initial guesses must be finite and distinct, got x0 = {x0}, x1 = {x1}")]
    InvalidGuess { x0: f64, x1: f64 },

    /// The secant line through the last two estimates is flat.
    ///
    /// `iterations` holds the trace recorded before the failing step.
    #[error(
        "secant is degenerate: f({x_prev}) = {fx_prev} and f({x_curr}) = {fx_curr} are too close"
    )]
    DegenerateSecant {
        x_prev: f64,
        x_curr: f64,
        fx_prev: f64,
        fx_curr: f64,
        iterations: Vec<Record>,
    },

    #[error(transparent)]
    Function(#[from] EvalError),
}

impl Error {
    /// Returns the partial trace carried by the error, if any.
    #[must_use]
    pub fn trace(&self) -> Option<&[Record]> {
        match self {
            Self::DegenerateSecant { iterations, .. } => Some(iterations),
            Self::InvalidGuess { .. } | Self::Function(_) => None,
        }
    }
}
