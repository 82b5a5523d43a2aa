/// One row of a Newton-Raphson trace.
///
/// The seed row (step 0) holds the initial guess and has no derivative.
/// Later rows hold the new estimate `x`, `f(x)`, and the derivative used to
/// reach it from the previous estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    pub step: usize,
    pub x: f64,
    pub fx: f64,
    pub derivative: Option<f64>,
    /// `|f(x0)|` for the seed, then the step size `|x_next - x|`.
    pub error: f64,
}
