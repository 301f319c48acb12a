//! SieveErrorCode trait for host-facing error reporting.

/// Trait for mapping sieve errors to stable error code strings.
/// Every error enum implements this so a host framework can branch on
/// the code instead of parsing messages.
pub trait SieveErrorCode {
    /// Returns the error code string (e.g., "EMPTY_CANDIDATE_POOL").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const INVALID_CONFIGURATION: &str = "INVALID_CONFIGURATION";
pub const EMPTY_CANDIDATE_POOL: &str = "EMPTY_CANDIDATE_POOL";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
