//! Errors raised while tokenizing, parsing or evaluating an expression.
//!
//! Every failure is surfaced immediately; there is no partial result and no
//! recovery. Use [`Error::category`] to tell malformed input apart from an
//! arithmetic failure.

use thiserror::Error;

use crate::String;
use crate::lexer::Token;
use crate::parser::Span;

/// Error returned by [`crate::api::evaluate_expression`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The expression is empty or contains only whitespace.
    #[error("expression must be non-empty")]
    EmptyInput,

    /// A character outside the expression alphabet.
    #[error("unexpected character {character:?} at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    /// A run of digits and points that is not a number (e.g. `1.2.3`).
    #[error("invalid number literal {literal:?}")]
    InvalidLiteral { literal: String, span: Span },

    /// Grammar violation.
    #[error("syntax error: {kind}")]
    Syntax { kind: SyntaxError, span: Span },

    /// The divisor of a `/` evaluated to exactly zero.
    #[error("division by zero")]
    DivisionByZero { span: Span },

    /// Parentheses nested deeper than the configured limit.
    #[error("expression nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { max_depth: usize, span: Span },
}

/// Specific kinds of grammar violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// A number or `(` was required.
    #[error("expected an operand, found {}", .found.describe())]
    MissingOperand { found: Token },

    /// A specific token was required.
    #[error("expected {}, found {}", .expected.describe(), .found.describe())]
    UnexpectedToken { expected: Token, found: Token },

    /// Input ended before the matching `)`.
    #[error("unclosed parenthesis")]
    UnclosedParenthesis,

    /// A complete expression was followed by more tokens.
    #[error("unexpected trailing input {}", .found.describe())]
    TrailingInput { found: Token },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The expression text is malformed.
    Input,
    /// The expression is well formed but its evaluation failed.
    Arithmetic,
    /// A resource limit was hit.
    Resource,
}

impl Error {
    pub(crate) fn syntax(kind: SyntaxError, span: Span) -> Self {
        Error::Syntax { kind, span }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::EmptyInput
            | Error::UnexpectedCharacter { .. }
            | Error::InvalidLiteral { .. }
            | Error::Syntax { .. } => ErrorCategory::Input,
            Error::DivisionByZero { .. } => ErrorCategory::Arithmetic,
            Error::MaxDepthExceeded { .. } => ErrorCategory::Resource,
        }
    }

    /// Stable error code, used in rendered diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            Error::EmptyInput => "E001",
            Error::UnexpectedCharacter { .. } => "E002",
            Error::InvalidLiteral { .. } => "E003",
            Error::Syntax { .. } => "E004",
            Error::DivisionByZero { .. } => "E005",
            Error::MaxDepthExceeded { .. } => "E006",
        }
    }

    /// Source location of the error within `source`.
    ///
    /// `EmptyInput` covers the whole input.
    pub fn span(&self, source: &str) -> Span {
        match self {
            Error::EmptyInput => Span::new(0, source.len()),
            Error::UnexpectedCharacter {
                character,
                position,
            } => Span::new(*position, position + character.len_utf8()),
            Error::InvalidLiteral { span, .. }
            | Error::Syntax { span, .. }
            | Error::DivisionByZero { span }
            | Error::MaxDepthExceeded { span, .. } => span.clone(),
        }
    }
}
