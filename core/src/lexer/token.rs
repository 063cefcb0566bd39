use core::fmt;

use crate::parser::{BinaryOp, Span, UnaryOp};

/// A lexical token of an arithmetic expression.
///
/// Only [`Token::Number`] carries a payload; operators and parentheses are
/// plain variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    /// End-of-input sentinel. Every token sequence ends with exactly one.
    Eof,
}

impl Token {
    /// Maps a single-character operator or parenthesis to its token.
    pub fn from_symbol(c: char) -> Option<Token> {
        match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => None,
        }
    }

    /// Additive operator (`+`, `-`) at the `expression` level.
    pub fn additive_op(self) -> Option<BinaryOp> {
        match self {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    /// Multiplicative operator (`*`, `/`) at the `term` level.
    pub fn multiplicative_op(self) -> Option<BinaryOp> {
        match self {
            Token::Star => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// Prefix sign at the `factor` level.
    pub fn unary_op(self) -> Option<UnaryOp> {
        match self {
            Token::Plus => Some(UnaryOp::Plus),
            Token::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }

    /// Short human-readable description, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Number(_) => "number",
            Token::Plus => "'+'",
            Token::Minus => "'-'",
            Token::Star => "'*'",
            Token::Slash => "'/'",
            Token::LParen => "'('",
            Token::RParen => "')'",
            Token::Eof => "end of input",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            other => f.write_str(other.describe()),
        }
    }
}

/// A token together with the source span it was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}
