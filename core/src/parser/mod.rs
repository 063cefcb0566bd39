pub(crate) mod parser;
mod syntax;

pub(crate) use parser::Parser;
pub use syntax::{BinaryOp, Span, UnaryOp};
