//! Tests for the sieve error handling system.

use sieve_core::errors::error_code::{self, SieveErrorCode};
use sieve_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let coverage = CoverageError::ProbeOutOfRange { index: 12, size: 10 };
    assert_eq!(coverage.error_code(), error_code::INVALID_INPUT);

    let config = ConfigError::FileNotFound {
        path: "/tmp/sieve.toml".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let empty = OptimizerError::EmptyCandidatePool;
    assert_eq!(empty.error_code(), error_code::EMPTY_CANDIDATE_POOL);

    let invalid = OptimizerError::InvalidConfiguration("no goal".into());
    assert_eq!(invalid.error_code(), error_code::INVALID_CONFIGURATION);
}

#[test]
fn test_coverage_error_converts_to_invalid_input() {
    let err = CoverageError::LengthMismatch {
        id: "LoginTest.rejectsBadPassword".into(),
        expected: 10,
        actual: 8,
    };
    let optimizer: OptimizerError = err.clone().into();
    assert_eq!(optimizer, OptimizerError::InvalidInput(err));
    assert_eq!(optimizer.error_code(), error_code::INVALID_INPUT);
}

#[test]
fn test_coded_string_format() {
    let err = OptimizerError::EmptyCandidatePool;
    assert_eq!(
        err.coded_string(),
        "[EMPTY_CANDIDATE_POOL] No test candidates to optimize"
    );

    let dup = CoverageError::DuplicateCandidate { id: "a".into() };
    assert!(dup.coded_string().starts_with("[INVALID_INPUT] "));
    assert!(dup.coded_string().contains("a"));
}

#[test]
fn test_length_mismatch_message_names_the_test() {
    let err = CoverageError::LengthMismatch {
        id: "CartTest.total".into(),
        expected: 64,
        actual: 63,
    };
    let message = err.to_string();
    assert!(message.contains("CartTest.total"));
    assert!(message.contains("64"));
    assert!(message.contains("63"));
}
