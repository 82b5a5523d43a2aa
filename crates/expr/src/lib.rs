//! Equation parsing and evaluation in one variable.
//!
//! An equation like `x^2 = 2` or `sin(x) - x/2` is parsed once into an
//! [`Expression`], which then evaluates at any `x`. Equations of the form
//! `lhs = rhs` are normalized to `(lhs)-(rhs)` so that their roots are the
//! solutions of the equation.
//!
//! [`Expression`] implements [`skein_core::Function`], so it plugs straight
//! into the solvers and the plot sampler.
//!
//! # Syntax
//!
//! - numbers: `2`, `0.5`, `.5`, `1e-3`
//! - the variable `x` and the constants `pi` and `e`
//! - operators `+ - * / ^` with the usual precedence; `^` is
//!   right-associative and binds tighter than unary minus (`-x^2 = -(x^2)`)
//! - implicit multiplication: `2x`, `3(x + 1)`, `(x + 1)(x - 1)`
//! - functions: `sin cos tan asin acos atan sinh cosh tanh exp ln log log10
//!   log2 sqrt cbrt abs floor ceil sign` of one argument, `log(x, base)`,
//!   `pow(a, b)`, `min(a, b)`, `max(a, b)`; `log` of one argument is natural

mod ast;
mod error;
mod expression;
mod lexer;
mod parser;

pub use error::{EvalError, ParseError};
pub use expression::Expression;

/// Parses an equation in `x`.
///
/// Shorthand for [`Expression::parse`].
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is not a valid equation.
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    Expression::parse(text)
}

/// Evaluates a parsed expression at `x`.
///
/// Shorthand for [`Expression::evaluate`].
///
/// # Errors
///
/// Returns an [`EvalError`] if the expression is undefined at `x`.
pub fn evaluate(expr: &Expression, x: f64) -> Result<f64, EvalError> {
    expr.evaluate(x)
}
