//! Top-level entry points: tokenize, then parse and evaluate in one pass.

use super::EvaluationOptions;
use crate::{errors::Error, evaluator, lexer};

/// Evaluate `expression` and return its numeric value.
///
/// The expression may contain numbers, `+ - * /`, parentheses and
/// whitespace. Each call is independent; there is no state shared between
/// calls.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if `expression` is empty or only whitespace.
/// - Any tokenizer or parser error, see [`Error`].
/// - [`Error::DivisionByZero`] if a divisor evaluates to zero.
///
/// # Example
///
/// ```
/// use simulator_core::api::evaluate_expression;
///
/// assert_eq!(evaluate_expression("3 + 4 * 2 / (1 - 5)").unwrap(), 1.0);
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64, Error> {
    evaluate_expression_with_options(expression, &EvaluationOptions::default())
}

/// Evaluate `expression` with custom options.
///
/// ```
/// use simulator_core::{Error, api::{EvaluationOptions, evaluate_expression_with_options}};
///
/// let options = EvaluationOptions { max_depth: 2 };
/// assert!(matches!(
///     evaluate_expression_with_options("(((1)))", &options),
///     Err(Error::MaxDepthExceeded { .. })
/// ));
/// ```
pub fn evaluate_expression_with_options(
    expression: &str,
    options: &EvaluationOptions,
) -> Result<f64, Error> {
    if expression.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    let tokens = lexer::tokenize(expression)?;
    let value = evaluator::eval_with_options(&tokens, options)?;
    tracing::debug!(expression, value, "evaluated expression");
    Ok(value)
}
