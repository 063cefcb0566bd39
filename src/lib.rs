//! Simulator - arithmetic expression evaluation
//!
//! # Overview
//!
//! Evaluates arithmetic expressions made of numbers, `+ - * /`, unary signs
//! and parentheses, with the usual precedence and left associativity.
//!
//! # Quick Start
//!
//! ```
//! use simulator::{Error, evaluate_expression};
//!
//! assert_eq!(evaluate_expression("3 + 4 * 2 / (1 - 5)").unwrap(), 1.0);
//!
//! let err = evaluate_expression("1 / (2 - 2)").unwrap_err();
//! assert!(matches!(err, Error::DivisionByZero { .. }));
//! ```
//!
//! # Errors
//!
//! All failures are reported as [`Error`]. Use [`render_error`] or
//! [`render_error_to_string`] to show an error against its source text.

// Re-export public API from simulator_core
pub use simulator_core::api::{
    Diagnostic, EvaluationOptions, evaluate_expression, evaluate_expression_with_options,
};
pub use simulator_core::lexer::{SpannedToken, Token, tokenize};
pub use simulator_core::parser::Span;

// Re-export errors
pub use simulator_core::{Error, ErrorCategory, SyntaxError};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
