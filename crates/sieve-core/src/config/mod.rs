//! Configuration system for sieve.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod optimizer_config;
pub mod sieve_config;

pub use optimizer_config::{GoalSetting, OptimizerConfig};
pub use sieve_config::{CliOverrides, SieveConfig};
