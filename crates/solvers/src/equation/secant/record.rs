/// One row of a secant trace.
///
/// Each row holds the pair of estimates the next secant line is drawn
/// through. Step 0 has only the first guess; step 1 adds the second guess
/// and both function values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    pub step: usize,
    pub x_prev: f64,
    pub x_curr: Option<f64>,
    pub fx_prev: Option<f64>,
    pub fx_curr: Option<f64>,
    /// `|x_curr - x_prev|`.
    pub error: Option<f64>,
}
