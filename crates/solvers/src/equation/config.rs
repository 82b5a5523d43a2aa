use thiserror::Error;

/// Configuration shared by the equation solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive, got {got}")]
    Tolerance { got: f64 },

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-3).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tolerance` is not a
    /// finite positive number.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance { got: tolerance });
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of refinement steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns true if either `|f(x)|` or the error metric is below tolerance.
    pub(crate) fn is_converged(&self, fx: f64, error: f64) -> bool {
        fx.abs() < self.tolerance || error < self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_interactive_defaults() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert_eq!(config.tolerance(), 1e-3);
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(
            Config::new(10, 0.0),
            Err(ConfigError::Tolerance { got: 0.0 })
        );
        assert!(matches!(
            Config::new(10, -1e-6),
            Err(ConfigError::Tolerance { .. })
        ));
        assert!(matches!(
            Config::new(10, f64::NAN),
            Err(ConfigError::Tolerance { .. })
        ));
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(0, 1e-6), Err(ConfigError::MaxIters));
    }

    #[test]
    fn convergence_is_strict() {
        let config = Config::new(10, 1e-3).unwrap();
        assert!(config.is_converged(-5e-4, 1.0));
        assert!(config.is_converged(1.0, 5e-4));
        assert!(!config.is_converged(1e-3, 1e-3));
    }
}
