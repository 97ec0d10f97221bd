//! Error type for the fuzzy-logic module.

use thiserror::Error;

/// Errors raised by fuzzy-logic containers.
///
/// Each variant maps to a numeric category code via [`FuzzyError::code`],
/// so callers that report errors across the wider fuzzy-logic domain can
/// keep a stable numbering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FuzzyError {
    /// Indexed rule lookup outside `[0, len)`.
    #[error("index of rules out of bounds: index {index}, rule count {len}")]
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// Number of rules at the time of the lookup.
        len: usize,
    },
}

impl FuzzyError {
    /// Numeric category code of this error.
    pub fn code(&self) -> u32 {
        match self {
            FuzzyError::IndexOutOfBounds { .. } => 7,
        }
    }
}
