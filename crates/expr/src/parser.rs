//! Recursive-descent parser.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary | power)*      // bare `power` is implicit `*`
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?                    // right-associative
//! primary := number | 'x' | 'pi' | 'e' | name '(' expr (',' expr)* ')' | '(' expr ')'
//! ```
//!
//! Implicit multiplication applies when a factor is directly followed by a
//! name or an opening parenthesis: `2x`, `3(x + 1)`, `(x + 1)(x - 1)`.

use std::f64::consts;

use crate::{
    ParseError,
    ast::{BinaryOp, Func, Node},
    lexer::{Spanned, Token, tokenize},
};

/// Parses expression text into a tree.
pub(crate) fn parse(input: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let node = parser.expr()?;

    match parser.peek() {
        None => Ok(node),
        Some(extra) => Err(unexpected(extra)),
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<&Token> {
        self.peek().map(|s| &s.token)
    }

    fn next(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek_token() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &Token) -> Result<(), ParseError> {
        match self.next() {
            Some(spanned) if &spanned.token == token => Ok(()),
            Some(spanned) => Err(unexpected(&spanned)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        let mut node = self.term()?;
        loop {
            let op = match self.peek_token() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => return Ok(node),
            };
            self.pos += 1;
            let rhs = self.term()?;
            node = binary(op, node, rhs);
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut node = self.unary()?;
        loop {
            let rhs = match self.peek_token() {
                Some(Token::Star) => {
                    self.pos += 1;
                    binary(BinaryOp::Mul, node, self.unary()?)
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    binary(BinaryOp::Div, node, self.unary()?)
                }
                Some(Token::Ident(_) | Token::LParen) => binary(BinaryOp::Mul, node, self.power()?),
                _ => return Ok(node),
            };
            node = rhs;
        }
    }

    fn unary(&mut self) -> Result<Node, ParseError> {
        if self.eat(&Token::Minus) {
            return Ok(Node::Neg(Box::new(self.unary()?)));
        }
        if self.eat(&Token::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;
        if self.eat(&Token::Caret) {
            let exponent = self.unary()?;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let Some(Spanned { token, pos }) = self.next() else {
            return Err(ParseError::UnexpectedEnd);
        };

        match token {
            Token::Number(value) => Ok(Node::Number(value)),
            Token::Ident(name) => self.name(name, pos),
            Token::LParen => {
                let inner = self.expr()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            token => Err(ParseError::UnexpectedToken {
                found: token.to_string(),
                pos,
            }),
        }
    }

    /// Resolves a name to the variable, a constant, or a function call.
    fn name(&mut self, name: String, pos: usize) -> Result<Node, ParseError> {
        match name.as_str() {
            "x" => return Ok(Node::Var),
            "pi" => return Ok(Node::Number(consts::PI)),
            "e" => return Ok(Node::Number(consts::E)),
            _ => {}
        }

        if self.peek_token() != Some(&Token::LParen) {
            return Err(ParseError::UnknownIdentifier { name, pos });
        }

        let func = Func::lookup(&name).ok_or(ParseError::UnknownFunction { name, pos })?;
        self.pos += 1;

        let mut args = vec![self.expr()?];
        while self.eat(&Token::Comma) {
            args.push(self.expr()?);
        }
        self.expect(&Token::RParen)?;

        if !func.accepts(args.len()) {
            return Err(ParseError::WrongArity {
                name: func.name(),
                expected: func.expected_args(),
                found: args.len(),
            });
        }

        Ok(Node::Call { func, args })
    }
}

fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Node {
    Node::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn unexpected(spanned: &Spanned) -> ParseError {
    ParseError::UnexpectedToken {
        found: spanned.token.to_string(),
        pos: spanned.pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(input: &str, x: f64) -> f64 {
        parse(input)
            .expect("should parse")
            .eval(x)
            .expect("should evaluate")
    }

    #[test]
    fn respects_precedence() {
        assert_relative_eq!(eval("1 + 2 * 3", 0.0), 7.0);
        assert_relative_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
        assert_relative_eq!(eval("10 - 4 - 3", 0.0), 3.0);
        assert_relative_eq!(eval("12 / 3 / 2", 0.0), 2.0);
    }

    #[test]
    fn power_is_right_associative_and_beats_negation() {
        assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval("-x^2", 3.0), -9.0);
        assert_relative_eq!(eval("2^-1", 0.0), 0.5);
        assert_relative_eq!(eval("(-x)^2", 3.0), 9.0);
    }

    #[test]
    fn implicit_multiplication() {
        assert_relative_eq!(eval("2x", 4.0), 8.0);
        assert_relative_eq!(eval("3(x + 1)", 1.0), 6.0);
        assert_relative_eq!(eval("(x + 1)(x - 1)", 3.0), 8.0);
        assert_relative_eq!(eval("2x^2", 3.0), 18.0);
        assert_relative_eq!(eval("x(x + 1)", 2.0), 6.0);
        assert_relative_eq!(eval("2sin(x)", consts::FRAC_PI_2), 2.0);
    }

    #[test]
    fn constants_and_functions() {
        assert_relative_eq!(eval("cos(pi)", 0.0), -1.0);
        assert_relative_eq!(eval("ln(e)", 0.0), 1.0);
        assert_relative_eq!(eval("log(100, 10)", 0.0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(eval("pow(x, 3) - max(x, 1)", 2.0), 6.0);
        assert_relative_eq!(eval("exp(x) - 3x", 0.0), 1.0);
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            parse("x + y"),
            Err(ParseError::UnknownIdentifier {
                name: "y".into(),
                pos: 4
            })
        );
        assert_eq!(
            parse("foo(x)"),
            Err(ParseError::UnknownFunction {
                name: "foo".into(),
                pos: 0
            })
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(matches!(
            parse("sin(x, 2)"),
            Err(ParseError::WrongArity { name: "sin", found: 2, .. })
        ));
        assert!(matches!(
            parse("pow(x)"),
            Err(ParseError::WrongArity { name: "pow", found: 1, .. })
        ));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("x +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse("(x + 1"), Err(ParseError::UnexpectedEnd));
        assert!(matches!(
            parse("x + * 2"),
            Err(ParseError::UnexpectedToken { pos: 4, .. })
        ));
        assert!(matches!(
            parse("x )"),
            Err(ParseError::UnexpectedToken { pos: 2, .. })
        ));
        assert!(matches!(
            parse("x 2"),
            Err(ParseError::UnexpectedToken { pos: 2, .. })
        ));
    }
}
