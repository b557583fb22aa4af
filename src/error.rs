/// Errors surfaced by the summarization engine.
///
/// Configuration problems are rejected before any work is performed; an
/// input that merely yields nothing (no content lemmas, no frequent
/// itemsets) is *not* an error and produces a zero summary instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SummarizeError {
    #[error("input contains no sentences")]
    EmptyInput,

    #[error("n-gram range ({min}, {max}) is invalid: require 1 <= min <= max")]
    InvalidNgramRange { min: usize, max: usize },

    #[error("minimum support {value} is outside (0, 1]")]
    InvalidMinSupport { value: f64 },

    #[error("singular value decomposition did not converge within {iterations} iterations")]
    SvdNonConvergence { iterations: usize },
}
