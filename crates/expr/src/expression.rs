use std::{fmt, str::FromStr};

use skein_core::Function;

use crate::{EvalError, ParseError, ast::Node, parser};

/// A parsed real function of the variable `x`.
///
/// An `Expression` is immutable once parsed; evaluation is a pure read, so
/// one expression can be shared by any number of solves or samplers.
///
/// ```
/// use skein_expr::Expression;
///
/// let expr = Expression::parse("x^2 = 2").unwrap();
/// assert_eq!(expr.normalized(), "(x^2)-(2)");
/// assert_eq!(expr.evaluate(3.0), Ok(7.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    original: String,
    normalized: String,
    root: Node,
}

impl Expression {
    /// Parses an equation in `x`.
    ///
    /// Text of the form `lhs = rhs` becomes `(lhs)-(rhs)`, so its roots are
    /// the solutions of the equation. Text without `=` is taken as `f(x)` in
    /// `f(x) = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MultipleEquals`] if the text has more than one
    /// `=`, or another [`ParseError`] if it is not a valid expression.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let normalized = normalize(text)?;
        let root = parser::parse(&normalized)?;

        Ok(Self {
            original: text.to_owned(),
            normalized,
            root,
        })
    }

    /// Returns the text the expression was parsed from.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the expression in `f(x) = 0` form.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if the expression is undefined at `x`:
    /// division by zero, a function outside its domain, or a non-finite result.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        let value = self.root.eval(x)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite { value, x })
        }
    }
}

impl Function for Expression {
    type Error = EvalError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.evaluate(x)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Rewrites `lhs = rhs` as `(lhs)-(rhs)`.
fn normalize(text: &str) -> Result<String, ParseError> {
    match text.matches('=').count() {
        0 => Ok(text.trim().to_owned()),
        1 => {
            let (lhs, rhs) = text.split_once('=').ok_or(ParseError::Empty)?;
            Ok(format!("({})-({})", lhs.trim(), rhs.trim()))
        }
        count => Err(ParseError::MultipleEquals { count }),
    }
}
