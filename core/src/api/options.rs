//! Configuration options for expression evaluation.

/// Configuration options for expression evaluation.
///
/// # Example
///
/// ```
/// use simulator_core::api::EvaluationOptions;
///
/// let options = EvaluationOptions { max_depth: 64 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Maximum nesting of parentheses (for recursion protection).
    ///
    /// Runs of unary signs do not count toward it.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl EvaluationOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
