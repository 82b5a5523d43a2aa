use thiserror::Error;

/// Errors that can occur when parsing an equation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("equation has {count} '=' signs, use at most one")]
    MultipleEquals { count: usize },

    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown identifier '{name}' at position {pos}, the only variable is 'x'")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("unknown function '{name}' at position {pos}")]
    UnknownFunction { name: String, pos: usize },

    #[error("function '{name}' takes {expected} argument(s), got {found}")]
    WrongArity {
        name: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },
}

/// Errors that can occur when evaluating an expression at a point.
///
/// Every variant records the `x` being evaluated. The failure is local to
/// that point; other points may still evaluate fine.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("division by zero at x = {x}")]
    DivisionByZero { x: f64 },

    #[error("{op} is undefined for argument {arg} at x = {x}")]
    Domain { op: &'static str, arg: f64, x: f64 },

    #[error("result {value} is not finite at x = {x}")]
    NonFinite { value: f64, x: f64 },
}
