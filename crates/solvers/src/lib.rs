//! Root-finding solvers for real functions of one variable.
//!
//! Every solver records a complete, replayable iteration trace alongside the
//! root estimate. See [`equation`] for the solvers themselves and [`method`]
//! for choosing one by name at runtime.

pub mod equation;
pub mod method;
