use crate::Function;

/// Default step size for [`derivative`].
pub const DEFAULT_STEP: f64 = 1e-4;

/// Approximates `f'(x)` with a central difference.
///
/// ```text
/// f'(x) ≈ (f(x + h) - f(x - h)) / (2h)
/// ```
///
/// There is no convergence check; the caller picks `h`
/// ([`DEFAULT_STEP`] is a sensible choice for well-scaled functions).
///
/// # Errors
///
/// Returns the function's error if either sample is undefined.
pub fn derivative<F>(f: &F, x: f64, h: f64) -> Result<f64, F::Error>
where
    F: Function + ?Sized,
{
    let forward = f.call(x + h)?;
    let backward = f.call(x - h)?;
    Ok((forward - backward) / (2.0 * h))
}
