//! Inline evaluation of arithmetic expressions.
//!
//! There is no syntax tree: the parser folds each operator into a running
//! value as soon as both operands are known, calling into [`operators`] for
//! the arithmetic itself. Callers reach this through
//! [`crate::api::evaluate_expression`].
//!
//! ## Design Principles
//!
//! - **Never panic**: All adversarial inputs must be handled gracefully
//! - **Stack-safe**: Depth tracking prevents stack overflow from deeply nested expressions

pub(crate) mod operators;

use crate::{api::EvaluationOptions, errors::Error, lexer::SpannedToken, parser::Parser};

/// Evaluate a token sequence produced by [`crate::lexer::tokenize`].
pub(crate) fn eval_with_options(
    tokens: &[SpannedToken],
    options: &EvaluationOptions,
) -> Result<f64, Error> {
    Parser::new(tokens, options.max_depth).parse()
}
