//! Binary and unary operator implementations.

use crate::{
    errors::Error,
    parser::{BinaryOp, Span, UnaryOp},
};

/// Evaluate a binary operation on two floats.
///
/// Follows IEEE 754 semantics except for division: a divisor equal to zero
/// (either sign) is an error. `divisor_span` locates the right operand.
pub(crate) fn eval_binary(
    op: BinaryOp,
    left: f64,
    right: f64,
    divisor_span: &Span,
) -> Result<f64, Error> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                Err(Error::DivisionByZero {
                    span: divisor_span.clone(),
                })
            } else {
                Ok(left / right)
            }
        }
    }
}

pub(crate) fn eval_unary(op: UnaryOp, value: f64) -> f64 {
    match op {
        UnaryOp::Plus => value,
        UnaryOp::Neg => -value,
    }
}
