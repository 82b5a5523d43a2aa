use thiserror::Error;

/// Errors that can occur when validating a bisection bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint in [{left}, {right}]")]
    NonFinite { left: f64, right: f64 },

    /// Endpoints are equal, giving zero width.
    #[error("zero width: both endpoints are {value}")]
    ZeroWidth { value: f64 },

    /// `f(left)` and `f(right)` do not have strictly opposite signs.
    #[error("no sign change: f({left}) = {f_left}, f({right}) = {f_right}")]
    NoSignChange {
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite { left, right });
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth { value: left });
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    pub(super) fn left(&self) -> f64 {
        self.left
    }

    pub(super) fn right(&self) -> f64 {
        self.right
    }
}

/// Current bracket bounds and the function values there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
}

impl Bracket {
    /// Creates a bracket around a sign change.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` unless `f_left` and `f_right`
    /// have strictly opposite signs; a zero at either end is not accepted.
    pub(super) fn new(bounds: Bounds, f_left: f64, f_right: f64) -> Result<Self, BracketError> {
        if !opposite_signs(f_left, f_right) {
            return Err(BracketError::NoSignChange {
                left: bounds.left,
                right: bounds.right,
                f_left,
                f_right,
            });
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            f_left,
            f_right,
        })
    }

    pub(super) fn left(&self) -> (f64, f64) {
        (self.left, self.f_left)
    }

    pub(super) fn right(&self) -> (f64, f64) {
        (self.right, self.f_right)
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the bracket width.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Keeps the half that still holds the sign change.
    ///
    /// The left half `[left, x]` is kept when `f_left` and `fx` have opposite
    /// signs; otherwise the right half `[x, right]`.
    pub(super) fn shrink(&mut self, x: f64, fx: f64) {
        if opposite_signs(self.f_left, fx) {
            self.right = x;
            self.f_right = fx;
        } else {
            self.left = x;
            self.f_left = fx;
        }
    }
}

/// Whether `a * b < 0`, computed without the product so tiny values
/// cannot underflow to zero.
fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_relative_eq!(bounds.left(), 1.0);
        assert_relative_eq!(bounds.right(), 3.0);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite { .. })
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite { .. })
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert_eq!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth { value: 2.0 })
        );
    }

    #[test]
    fn new_bracket_rejects_same_sign() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        assert!(matches!(
            Bracket::new(bounds, 1.0, 2.0),
            Err(BracketError::NoSignChange { .. })
        ));
        assert!(matches!(
            Bracket::new(bounds, -1.0, -2.0),
            Err(BracketError::NoSignChange { .. })
        ));
    }

    #[test]
    fn new_bracket_rejects_zero_endpoint() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        assert!(matches!(
            Bracket::new(bounds, 0.0, 2.0),
            Err(BracketError::NoSignChange { .. })
        ));
    }

    #[test]
    fn sign_check_survives_underflow() {
        // 1e-200 * -1e-200 underflows to -0.0, which a product test misses.
        assert!(opposite_signs(1e-200, -1e-200));
        assert!(!opposite_signs(1e-200, 1e-200));
    }

    #[test]
    fn shrink_keeps_the_sign_change() {
        let bounds = Bounds::new([0.0, 2.0]).expect("valid bounds");
        let mut bracket = Bracket::new(bounds, -1.0, 1.0).expect("valid bracket");

        bracket.shrink(1.0, -0.5);
        assert_eq!(bracket.left(), (1.0, -0.5));
        assert_eq!(bracket.right(), (2.0, 1.0));

        bracket.shrink(1.5, 0.25);
        assert_eq!(bracket.left(), (1.0, -0.5));
        assert_eq!(bracket.right(), (1.5, 0.25));
        assert_relative_eq!(bracket.width(), 0.5);
        assert_relative_eq!(bracket.midpoint(), 1.25);
    }
}
