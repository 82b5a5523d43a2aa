//! Solvers for equations in one variable: finding `x` where `f(x) = 0`.
//!
//! Each solver drives a [`Function`] toward a root and returns a
//! [`Solution`] holding the root estimate, `f` at that estimate, the last
//! error metric, a [`Status`], and the full iteration trace. Trace records
//! are complete snapshots, step-numbered from a seed record at step 0.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed sign change
//! - [`newton`]: Newton-Raphson from one guess, using a central-difference
//!   derivative
//! - [`secant`]: derivative-free iteration from two guesses
//!
//! # Stopping
//!
//! All three stop as converged as soon as `|f(x)| < tolerance` or their error
//! metric drops below `tolerance`. Otherwise they run exactly
//! [`Config::max_iters`] refinement steps and report [`Status::MaxIters`].
//!
//! [`Function`]: skein_core::Function

mod config;
mod evaluate;
mod solution;

pub use config::{Config, ConfigError};
pub use evaluate::EvalError;
pub use solution::{Solution, Status};

pub mod bisection;
pub mod newton;
pub mod secant;
