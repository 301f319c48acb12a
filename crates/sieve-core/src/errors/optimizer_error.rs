//! Optimizer errors.

use super::error_code::{self, SieveErrorCode};
use super::CoverageError;

/// Errors returned by a solve. All of them are fatal to the call: the
/// algorithm is deterministic, so retrying with the same input fails again.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizerError {
    #[error("Invalid optimizer configuration: {0}")]
    InvalidConfiguration(String),

    #[error("No test candidates to optimize")]
    EmptyCandidatePool,

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] CoverageError),
}

impl SieveErrorCode for OptimizerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration(_) => error_code::INVALID_CONFIGURATION,
            Self::EmptyCandidatePool => error_code::EMPTY_CANDIDATE_POOL,
            Self::InvalidInput(e) => e.error_code(),
        }
    }
}
