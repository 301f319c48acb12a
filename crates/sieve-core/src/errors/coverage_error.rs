//! Coverage model errors.

use super::error_code::{self, SieveErrorCode};

/// Errors raised while building coverage vectors and test candidates.
/// The model never truncates or pads a vector to make it fit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoverageError {
    #[error("Coverage for {id} has {actual} probe points, universe has {expected}")]
    LengthMismatch {
        id: String,
        expected: usize,
        actual: usize,
    },

    #[error("Probe point {index} is outside a universe of {size}")]
    ProbeOutOfRange { index: usize, size: usize },

    #[error("Duplicate test candidate id: {id}")]
    DuplicateCandidate { id: String },
}

impl SieveErrorCode for CoverageError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
