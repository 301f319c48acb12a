//! sieve-core: errors, configuration, tracing, and shared collection types
//! for the sieve test subset optimizer.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
