//! Arithmetic expression evaluator.
//!
//! Expressions are tokenized by [`lexer`], then parsed and evaluated in a
//! single recursive-descent pass by [`parser`]. The public entry point is
//! [`api::evaluate_expression`].

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod errors;
pub(crate) mod evaluator;
pub mod lexer;
pub mod parser;

pub use api::{EvaluationOptions, evaluate_expression, evaluate_expression_with_options};
pub use errors::{Error, ErrorCategory, SyntaxError};
