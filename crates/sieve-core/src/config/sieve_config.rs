//! Top-level sieve configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::OptimizerConfig;
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "sieve.toml";

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SIEVE_*`)
/// 3. Project config (`sieve.toml` in project root)
/// 4. User config (`~/.sieve/config.toml`)
/// 5. Compiled defaults
///
/// Goal targets resolve as a unit: the highest layer that sets any of them
/// decides the goal.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SieveConfig {
    pub optimizer: OptimizerConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub target_test_count: Option<usize>,
    pub target_coverage: Option<f64>,
    pub target_cost_ms: Option<u64>,
    pub strategy: Option<String>,
    pub parallel_threshold: Option<usize>,
}

impl SieveConfig {
    /// Load configuration with layered resolution rooted at `root`.
    ///
    /// The loaded config is range-validated but is not required to carry a
    /// goal; `OptimizerConfig::goal` enforces that when a solve is built.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a parse error is fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        ::tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SieveConfig) -> Result<(), ConfigError> {
        config.optimizer.validate()
    }

    /// Returns the user config path: `~/.sieve/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut SieveConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SieveConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.optimizer.merge(&file_config.optimizer);
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the lower layer stays in effect.
    fn apply_env_overrides(config: &mut SieveConfig) {
        let mut layer = OptimizerConfig::default();
        if let Ok(val) = std::env::var("SIEVE_TARGET_TEST_COUNT") {
            layer.target_test_count = val.parse::<usize>().ok();
        }
        if let Ok(val) = std::env::var("SIEVE_TARGET_COVERAGE") {
            layer.target_coverage = val.parse::<f64>().ok();
        }
        if let Ok(val) = std::env::var("SIEVE_TARGET_COST_MS") {
            layer.target_cost_ms = val.parse::<u64>().ok();
        }
        if let Ok(val) = std::env::var("SIEVE_STRATEGY") {
            layer.strategy = Some(val);
        }
        if let Ok(val) = std::env::var("SIEVE_PARALLEL_THRESHOLD") {
            layer.parallel_threshold = val.parse::<usize>().ok();
        }
        config.optimizer.merge(&layer);
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SieveConfig, cli: &CliOverrides) {
        config.optimizer.merge(&OptimizerConfig {
            target_test_count: cli.target_test_count,
            target_coverage: cli.target_coverage,
            target_cost_ms: cli.target_cost_ms,
            strategy: cli.strategy.clone(),
            parallel_threshold: cli.parallel_threshold,
        });
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level sieve config directory: `~/.sieve/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".sieve"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
