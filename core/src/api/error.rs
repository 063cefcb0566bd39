//! Diagnostics for reporting evaluation errors with source locations.
//!
//! [`Error`] itself only records what went wrong and where; a [`Diagnostic`]
//! adds the message, code and help text that front ends display.

use core::fmt;

use crate::errors::{Error, SyntaxError};
use crate::parser::Span;
use crate::{String, ToString, Vec, format, vec};

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Error code (e.g., "E001") for documentation lookup.
    pub code: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)?;

        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &self.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}

impl Error {
    /// Convert to a Diagnostic against the `source` the error came from.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let help = match self {
            Error::EmptyInput => vec!["Provide an arithmetic expression such as `1 + 2`"],
            Error::UnexpectedCharacter { .. } => {
                vec!["Only numbers, `+ - * /`, parentheses and whitespace are allowed"]
            }
            Error::InvalidLiteral { .. } => vec!["A number may contain at most one `.`"],
            Error::Syntax { kind, .. } => match kind {
                SyntaxError::MissingOperand { .. } => {
                    vec!["Each operator needs a number or parenthesized expression after it"]
                }
                SyntaxError::UnclosedParenthesis => vec!["Add the missing `)`"],
                SyntaxError::UnexpectedToken { .. } | SyntaxError::TrailingInput { .. } => {
                    vec![]
                }
            },
            Error::DivisionByZero { .. } => vec![],
            Error::MaxDepthExceeded { .. } => {
                vec!["Reduce nesting or simplify the expression"]
            }
        };

        Diagnostic {
            message: format!("{}", self),
            span: self.span(source),
            help: help.into_iter().map(|h| h.to_string()).collect(),
            code: Some(self.code().to_string()),
        }
    }
}
