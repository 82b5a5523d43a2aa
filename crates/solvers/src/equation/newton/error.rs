use thiserror::Error;

use crate::equation::EvalError;

use super::record::Record;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial guess must be finite, got {x0}")]
    NonFiniteGuess { x0: f64 },

    /// The derivative vanished, so no Newton step can be taken.
    ///
    /// `iterations` holds the trace recorded before the failing step.
    #[error("derivative is effectively zero at x = {x} (f'(x) = {derivative})")]
    ZeroDerivative {
        x: f64,
        derivative: f64,
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
            Self::ZeroDerivative { iterations, .. } => Some(iterations),
            Self::NonFiniteGuess { .. } | Self::Function(_) => None,
        }
    }
}
