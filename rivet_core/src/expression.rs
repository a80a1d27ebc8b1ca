//! # Arithmetic Expressions
//!
//! Dimension prompts accept small arithmetic expressions so a user can type
//! `3+2/8` or `(48 - 1.5) / 2` instead of working the number out by hand.
//!
//! The grammar is deliberately tiny:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | '(' expr ')'
//! number  := digits ['.' digits] [('e' | 'E') ['+' | '-'] digits]
//! ```
//!
//! Anything else (names, function calls, other operators, unbalanced
//! parentheses, division by zero, a non-finite result) is rejected with a
//! single "Invalid input" format error.
//!
//! ## Example
//!
//! ```rust
//! use rivet_core::expression::evaluate;
//!
//! assert_eq!(evaluate("3+2/8").unwrap(), 3.25);
//! assert_eq!(evaluate("-(1.5 * 4)").unwrap(), -6.0);
//! assert!(evaluate("__import__('os')").is_err());
//! ```

use crate::errors::{RivetError, RivetResult};

/// Parenthesis/unary nesting limit
const MAX_DEPTH: usize = 64;

const INVALID_INPUT: &str = "Invalid input";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Evaluate an arithmetic expression to a number.
pub fn evaluate(text: &str) -> RivetResult<f64> {
    let invalid = || RivetError::format(text, INVALID_INPUT);

    let tokens = tokenize(text).ok_or_else(invalid)?;
    let mut parser = Parser { tokens: &tokens, pos: 0 };
    let value = parser.expr(0).ok_or_else(invalid)?;

    // Trailing tokens, e.g. "3 4" or "2)"
    if parser.pos != tokens.len() || !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

fn tokenize(text: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                // Optional exponent
                if matches!(chars.peek(), Some(&'e') | Some(&'E')) {
                    literal.push('e');
                    chars.next();
                    if let Some(&sign) = chars.peek() {
                        if sign == '+' || sign == '-' {
                            literal.push(sign);
                            chars.next();
                        }
                    }
                    while let Some(&d) = chars.peek() {
                        if d.is_ascii_digit() {
                            literal.push(d);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                }
                tokens.push(Token::Number(literal.parse().ok()?));
            }
            _ => return None,
        }
    }

    Some(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn expr(&mut self, depth: usize) -> Option<f64> {
        let mut value = self.term(depth)?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term(depth)?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Some(value)
    }

    fn term(&mut self, depth: usize) -> Option<f64> {
        let mut value = self.unary(depth)?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary(depth)?;
            value = if op == Token::Star {
                value * rhs
            } else if rhs == 0.0 {
                return None;
            } else {
                value / rhs
            };
        }
        Some(value)
    }

    fn unary(&mut self, depth: usize) -> Option<f64> {
        if depth > MAX_DEPTH {
            return None;
        }
        match self.peek()? {
            Token::Plus => {
                self.pos += 1;
                self.unary(depth + 1)
            }
            Token::Minus => {
                self.pos += 1;
                self.unary(depth + 1).map(|v| -v)
            }
            _ => self.primary(depth),
        }
    }

    fn primary(&mut self, depth: usize) -> Option<f64> {
        match self.advance()? {
            Token::Number(value) => Some(value),
            Token::LParen => {
                let value = self.expr(depth + 1)?;
                match self.advance()? {
                    Token::RParen => Some(value),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
