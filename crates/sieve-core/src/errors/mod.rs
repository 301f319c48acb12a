//! Error handling for sieve.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod coverage_error;
pub mod error_code;
pub mod optimizer_error;

pub use config_error::ConfigError;
pub use coverage_error::CoverageError;
pub use error_code::SieveErrorCode;
pub use optimizer_error::OptimizerError;
