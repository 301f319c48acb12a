//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Scoring strategy names accepted in `optimizer.strategy`.
pub const STRATEGY_MARGINAL_GAIN: &str = "marginal_gain";
pub const STRATEGY_GAIN_PER_COST: &str = "gain_per_cost";

/// Configuration for the subset optimizer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Select exactly this many tests.
    pub target_test_count: Option<usize>,
    /// Select tests until this coverage fraction (0.0 - 1.0) is reached.
    pub target_coverage: Option<f64>,
    /// Select tests while the summed cost stays within this many milliseconds.
    pub target_cost_ms: Option<u64>,
    /// Candidate scoring strategy. Default: "marginal_gain".
    pub strategy: Option<String>,
    /// Remaining-pool size at which scoring runs in parallel. Default: 512.
    pub parallel_threshold: Option<usize>,
}

/// The single goal a config resolves to, before it is turned into an
/// optimizer goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalSetting {
    TestCount(usize),
    Coverage(f64),
    CostMs(u64),
}

impl OptimizerConfig {
    /// Returns the effective strategy name, defaulting to "marginal_gain".
    pub fn effective_strategy(&self) -> &str {
        self.strategy.as_deref().unwrap_or(STRATEGY_MARGINAL_GAIN)
    }

    /// Returns the effective parallel threshold, defaulting to 512.
    pub fn effective_parallel_threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(512)
    }

    /// Resolve the configured goal. Exactly one target must be set.
    pub fn goal(&self) -> Result<GoalSetting, ConfigError> {
        match (
            self.target_test_count,
            self.target_coverage,
            self.target_cost_ms,
        ) {
            (Some(n), None, None) => Ok(GoalSetting::TestCount(n)),
            (None, Some(f), None) => Ok(GoalSetting::Coverage(f)),
            (None, None, Some(ms)) => Ok(GoalSetting::CostMs(ms)),
            (None, None, None) => Err(ConfigError::ValidationFailed {
                field: "optimizer".to_string(),
                message: "one of target_test_count, target_coverage or target_cost_ms must be set"
                    .to_string(),
            }),
            _ => Err(ConfigError::ValidationFailed {
                field: "optimizer".to_string(),
                message: "only one of target_test_count, target_coverage or target_cost_ms may be set"
                    .to_string(),
            }),
        }
    }

    /// Validate value ranges. Does not require a goal to be present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(coverage) = self.target_coverage {
            if !(0.0..=1.0).contains(&coverage) {
                return Err(ConfigError::ValidationFailed {
                    field: "optimizer.target_coverage".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(ref strategy) = self.strategy {
            if strategy != STRATEGY_MARGINAL_GAIN && strategy != STRATEGY_GAIN_PER_COST {
                return Err(ConfigError::InvalidValue {
                    field: "optimizer.strategy".to_string(),
                    message: format!(
                        "unknown strategy '{strategy}', expected '{STRATEGY_MARGINAL_GAIN}' or '{STRATEGY_GAIN_PER_COST}'"
                    ),
                });
            }
        }
        if self.parallel_threshold == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "optimizer.parallel_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// True when any of the three goal targets is set.
    pub fn has_goal(&self) -> bool {
        self.target_test_count.is_some()
            || self.target_coverage.is_some()
            || self.target_cost_ms.is_some()
    }

    /// Merge `other` into `self`: `Some` values in `other` win.
    ///
    /// The three targets form one setting. A layer that names any goal
    /// replaces the lower layer's goal as a whole, so conflicting targets
    /// only survive when they come from the same layer.
    pub(crate) fn merge(&mut self, other: &OptimizerConfig) {
        if other.has_goal() {
            self.target_test_count = other.target_test_count;
            self.target_coverage = other.target_coverage;
            self.target_cost_ms = other.target_cost_ms;
        }
        if other.strategy.is_some() {
            self.strategy = other.strategy.clone();
        }
        if other.parallel_threshold.is_some() {
            self.parallel_threshold = other.parallel_threshold;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_requires_exactly_one_target() {
        let none = OptimizerConfig::default();
        assert!(none.goal().is_err());

        let one = OptimizerConfig {
            target_coverage: Some(0.8),
            ..Default::default()
        };
        assert_eq!(one.goal().unwrap(), GoalSetting::Coverage(0.8));

        let two = OptimizerConfig {
            target_test_count: Some(50),
            target_cost_ms: Some(30_000),
            ..Default::default()
        };
        assert!(matches!(two.goal(), Err(ConfigError::ValidationFailed { .. })));
    }

    #[test]
    fn test_merge_replaces_goal_of_another_kind() {
        let mut base = OptimizerConfig {
            target_coverage: Some(0.8),
            parallel_threshold: Some(64),
            ..Default::default()
        };
        base.merge(&OptimizerConfig {
            target_cost_ms: Some(5_000),
            ..Default::default()
        });
        assert_eq!(base.goal().unwrap(), GoalSetting::CostMs(5_000));
        assert_eq!(base.target_coverage, None);
        assert_eq!(base.parallel_threshold, Some(64));

        // A layer without a goal leaves the lower goal alone.
        base.merge(&OptimizerConfig {
            strategy: Some(STRATEGY_GAIN_PER_COST.to_string()),
            ..Default::default()
        });
        assert_eq!(base.goal().unwrap(), GoalSetting::CostMs(5_000));
    }

    #[test]
    fn test_effective_defaults() {
        let config = OptimizerConfig::default();
        assert_eq!(config.effective_strategy(), "marginal_gain");
        assert_eq!(config.effective_parallel_threshold(), 512);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let config = OptimizerConfig {
            strategy: Some("fastest".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue { .. })));
    }
}
