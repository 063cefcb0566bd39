//! Public API for evaluating arithmetic expressions.
//!
//! # Example
//!
//! ```
//! use simulator_core::api::evaluate_expression;
//!
//! assert_eq!(evaluate_expression("2 * (3 + 4)").unwrap(), 14.0);
//! assert!(evaluate_expression("1 / (2 - 2)").is_err());
//! ```

pub mod error;
pub mod expression;
pub mod options;

pub use error::Diagnostic;
pub use expression::{evaluate_expression, evaluate_expression_with_options};
pub use options::EvaluationOptions;
