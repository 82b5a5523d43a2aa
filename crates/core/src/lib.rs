//! Core traits and types for the Skein workspace.
//!
//! This crate defines the shared abstractions that the expression evaluator
//! and the root-finding solvers build on:
//!
//! - [`Function`]: a real function of one variable that may be undefined at
//!   some points
//! - [`from_fn`]: adapts a plain closure into a [`Function`]
//! - [`derivative`]: central-difference derivative of a [`Function`]
//! - [`sample`]: samples a [`Function`] over a range for charting, marking
//!   undefined points as missing

mod derivative;
mod function;
mod sample;

pub use derivative::{DEFAULT_STEP, derivative};
pub use function::{FromFn, Function, from_fn};
pub use sample::{Sample, SampleError, sample};
