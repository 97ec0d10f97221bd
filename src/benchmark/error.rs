//! Error type for benchmark functions.

use thiserror::Error;

/// Errors raised while configuring or evaluating a benchmark function.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BenchmarkError {
    /// The search point does not have the function's dimensionality.
    #[error("search point has {found} variables, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The function needs more decision variables than it was given.
    #[error("{function} needs at least {minimum} variables, got {found}")]
    TooFewVariables {
        function: &'static str,
        minimum: usize,
        found: usize,
    },

    /// Lower and upper bound vectors are inconsistent.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// The function has a fixed number of variables.
    #[error("{0} does not have scalable dimensionality")]
    NotScalable(String),
}
