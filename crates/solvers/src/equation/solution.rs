/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Ran every allowed step without meeting the tolerance.
    MaxIters,
}

/// The result of a solve.
///
/// `R` is the solver's iteration record type. `iterations` is in
/// chronological order and always starts with the seed record(s).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution<R> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub root: f64,

    /// `f(root)`.
    pub function_value: f64,

    /// The last error metric the solver computed.
    pub error: f64,

    /// Every iteration record, seed first.
    pub iterations: Vec<R>,
}

impl<R> Solution<R> {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the root as a point `(root, f(root))`, ready to mark on a chart.
    #[must_use]
    pub fn root_point(&self) -> (f64, f64) {
        (self.root, self.function_value)
    }
}
