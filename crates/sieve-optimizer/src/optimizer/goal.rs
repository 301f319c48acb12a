//! Optimization goals: what a solve stops on.

use std::fmt;

use serde::{Deserialize, Serialize};
use sieve_core::config::GoalSetting;
use sieve_core::errors::OptimizerError;

/// The single stopping condition of one solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum OptimizerGoal {
    /// Select exactly `n` tests, or every test if the pool is smaller.
    ExactCount(usize),
    /// Select tests until the covered fraction reaches the target.
    MinCoverage(f64),
    /// Select tests while the summed cost (ms) stays within the budget.
    MaxCost(u64),
}

impl OptimizerGoal {
    /// Reject goal values a solve cannot act on.
    pub fn validate(&self) -> Result<(), OptimizerError> {
        match *self {
            Self::MinCoverage(fraction) if !(0.0..=1.0).contains(&fraction) => {
                Err(OptimizerError::InvalidConfiguration(format!(
                    "target coverage must be a fraction between 0.0 and 1.0, got {fraction}"
                )))
            }
            _ => Ok(()),
        }
    }
}

impl From<GoalSetting> for OptimizerGoal {
    fn from(setting: GoalSetting) -> Self {
        match setting {
            GoalSetting::TestCount(n) => Self::ExactCount(n),
            GoalSetting::Coverage(f) => Self::MinCoverage(f),
            GoalSetting::CostMs(ms) => Self::MaxCost(ms),
        }
    }
}

impl fmt::Display for OptimizerGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactCount(n) => write!(f, "best test coverage with exactly {n} tests run"),
            Self::MinCoverage(fraction) => write!(
                f,
                "fewest tests reaching at least {:.1}% test coverage",
                fraction * 100.0
            ),
            Self::MaxCost(budget) => write!(
                f,
                "best test coverage for a maximum execution time of {budget}ms"
            ),
        }
    }
}
