use std::fmt;

use crate::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {value}"),
            Token::Ident(name) => write!(f, "identifier '{name}'"),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::Caret => f.write_str("'^'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
            Token::Comma => f.write_str("','"),
        }
    }
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) pos: usize,
}

/// Splits expression text into tokens.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        let token = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let end = scan_number(input, pos);
                while chars.peek().is_some_and(|&(i, _)| i < end) {
                    chars.next();
                }
                let text = &input[pos..end];
                let value = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_owned(),
                    pos,
                })?;
                Token::Number(value)
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut name = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Ident(name)
            }
            _ => {
                chars.next();
                match ch {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '^' => Token::Caret,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    ',' => Token::Comma,
                    _ => return Err(ParseError::UnexpectedChar { ch, pos }),
                }
            }
        };
        tokens.push(Spanned { token, pos });
    }

    Ok(tokens)
}

/// Returns the end offset of the number literal starting at `start`.
///
/// Digits and dots are taken greedily so `1.2.3` fails as one bad literal.
/// An exponent is only taken when digits follow it, which keeps `2e` as
/// `2` times the constant `e`.
fn scan_number(input: &str, start: usize) -> usize {
    let bytes = input.as_bytes();
    let mut end = start;
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
        end += 1;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            while exp < bytes.len() && bytes[exp].is_ascii_digit() {
                exp += 1;
            }
            end = exp;
        }
    }

    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        tokenize(input)
            .expect("should tokenize")
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn tokenizes_operators_and_names() {
        assert_eq!(
            kinds("sin(x) ^ 2, -3"),
            vec![
                Token::Ident("sin".into()),
                Token::LParen,
                Token::Ident("x".into()),
                Token::RParen,
                Token::Caret,
                Token::Number(2.0),
                Token::Comma,
                Token::Minus,
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(kinds("1e-3"), vec![Token::Number(1e-3)]);
        assert_eq!(kinds("2.5E+2"), vec![Token::Number(250.0)]);
        assert_eq!(kinds(".5"), vec![Token::Number(0.5)]);
    }

    #[test]
    fn trailing_e_is_a_constant() {
        assert_eq!(
            kinds("2e"),
            vec![Token::Number(2.0), Token::Ident("e".into())]
        );
        assert_eq!(
            kinds("2ex"),
            vec![Token::Number(2.0), Token::Ident("ex".into())]
        );
    }

    #[test]
    fn records_positions() {
        let tokens = tokenize("x  + 1").unwrap();
        let positions: Vec<_> = tokens.iter().map(|s| s.pos).collect();
        assert_eq!(positions, vec![0, 3, 5]);
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert_eq!(
            tokenize("1.2.3"),
            Err(ParseError::InvalidNumber {
                text: "1.2.3".into(),
                pos: 0
            })
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            tokenize("x # 2"),
            Err(ParseError::UnexpectedChar { ch: '#', pos: 2 })
        );
    }
}
