/// One row of a bisection trace.
///
/// Each row is the bracket `[a, b]` that was bisected at this step, the
/// midpoint `c`, and the function values at all three. The seed row (step 0)
/// holds the initial bracket and has no midpoint yet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    pub step: usize,
    pub a: f64,
    pub b: f64,
    pub c: Option<f64>,
    pub fa: f64,
    pub fb: f64,
    pub fc: Option<f64>,
    /// Bracket width after this step: `|b - a|` for the seed, `|b - a| / 2`
    /// once bisected.
    pub error: f64,
}
