//! Runtime selection of a root-finding method.
//!
//! Front ends receive a method name and a list of numeric parameters.
//! [`Method::from_name`] turns those into a typed [`Method`], and
//! [`Method::solve`] runs it and wraps the result in an [`Outcome`] that can
//! be inspected without knowing which solver produced it.

use skein_core::Function;
use thiserror::Error;

use crate::equation::{Config, Solution, bisection, newton, secant};

/// A root-finding method together with its starting parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    Bisection { a: f64, b: f64 },
    Newton { x0: f64 },
    Secant { x0: f64, x1: f64 },
}

/// Errors that can occur when building a [`Method`] from its name.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MethodError {
    #[error("unknown method `{0}` (expected bisection, newton or secant)")]
    Unknown(String),

    #[error("{method} takes {expected} parameter(s), got {got}")]
    Parameters {
        method: &'static str,
        expected: usize,
        got: usize,
    },
}

/// A failed solve, from whichever method ran.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Bisection(#[from] bisection::Error),

    #[error(transparent)]
    Newton(#[from] newton::Error),

    #[error(transparent)]
    Secant(#[from] secant::Error),
}

/// A successful solve, tagged by method.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "method", rename_all = "snake_case")
)]
pub enum Outcome {
    Bisection(Solution<bisection::Record>),
    Newton(Solution<newton::Record>),
    Secant(Solution<secant::Record>),
}

impl Method {
    /// Builds a method from its name and positional parameters.
    ///
    /// Names are matched case-insensitively. Bisection takes `[a, b]`, Newton
    /// takes `[x0]` and secant takes `[x0, x1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is unknown or the parameter count is
    /// wrong for the method.
    pub fn from_name(name: &str, params: &[f64]) -> Result<Self, MethodError> {
        let name = name.trim().to_ascii_lowercase();
        let (method, expected) = match name.as_str() {
            "bisection" => ("bisection", 2),
            "newton" => ("newton", 1),
            "secant" => ("secant", 2),
            _ => return Err(MethodError::Unknown(name)),
        };

        match (method, params) {
            ("bisection", &[a, b]) => Ok(Self::Bisection { a, b }),
            ("newton", &[x0]) => Ok(Self::Newton { x0 }),
            ("secant", &[x0, x1]) => Ok(Self::Secant { x0, x1 }),
            _ => Err(MethodError::Parameters {
                method,
                expected,
                got: params.len(),
            }),
        }
    }

    /// Method names accepted by [`Method::from_name`].
    pub const NAMES: [&'static str; 3] = ["bisection", "newton", "secant"];

    /// Returns the method's canonical name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bisection { .. } => "bisection",
            Self::Newton { .. } => "newton",
            Self::Secant { .. } => "secant",
        }
    }

    /// Runs the method on `f`.
    ///
    /// # Errors
    ///
    /// Returns the solver's error if the inputs are invalid, the iteration
    /// degenerates, or `f` is undefined at a point the solver needs.
    pub fn solve<F>(&self, f: &F, config: &Config) -> Result<Outcome, SolveError>
    where
        F: Function + ?Sized,
    {
        Ok(match *self {
            Self::Bisection { a, b } => Outcome::Bisection(bisection::solve(f, [a, b], config)?),
            Self::Newton { x0 } => Outcome::Newton(newton::solve(f, x0, config)?),
            Self::Secant { x0, x1 } => Outcome::Secant(secant::solve(f, x0, x1, config)?),
        })
    }
}

impl Outcome {
    /// Returns the root estimate.
    #[must_use]
    pub fn root(&self) -> f64 {
        match self {
            Self::Bisection(s) => s.root,
            Self::Newton(s) => s.root,
            Self::Secant(s) => s.root,
        }
    }

    /// Returns `f(root)`.
    #[must_use]
    pub fn function_value(&self) -> f64 {
        match self {
            Self::Bisection(s) => s.function_value,
            Self::Newton(s) => s.function_value,
            Self::Secant(s) => s.function_value,
        }
    }

    /// Returns the last error metric.
    #[must_use]
    pub fn error(&self) -> f64 {
        match self {
            Self::Bisection(s) => s.error,
            Self::Newton(s) => s.error,
            Self::Secant(s) => s.error,
        }
    }

    #[must_use]
    pub fn converged(&self) -> bool {
        match self {
            Self::Bisection(s) => s.converged(),
            Self::Newton(s) => s.converged(),
            Self::Secant(s) => s.converged(),
        }
    }

    /// Returns the number of trace records.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bisection(s) => s.iterations.len(),
            Self::Newton(s) => s.iterations.len(),
            Self::Secant(s) => s.iterations.len(),
        }
    }

    /// Always false: every outcome holds at least its seed record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `(root, f(root))`.
    #[must_use]
    pub fn root_point(&self) -> (f64, f64) {
        (self.root(), self.function_value())
    }
}
