//! Serializable plan summary for host reporting.

use serde::{Deserialize, Serialize};

use super::{OptimizationPlan, StopReason};
use crate::optimizer::OptimizerGoal;

/// One selected test as reported to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedTest {
    pub id: String,
    pub cost: u64,
    /// Probe points this test added when it was picked.
    pub gain: usize,
}

/// Flat, serde-friendly view of an `OptimizationPlan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub goal: OptimizerGoal,
    pub selected: Vec<SelectedTest>,
    pub covered_probes: usize,
    pub universe_size: usize,
    pub coverage_fraction: f64,
    pub total_cost: u64,
    pub stop: StopReason,
    pub description: String,
}

impl PlanSummary {
    pub fn from_plan(plan: &OptimizationPlan) -> Self {
        let selected = plan
            .selected_tests()
            .iter()
            .zip(plan.gains())
            .map(|(c, gain)| SelectedTest {
                id: c.id().to_string(),
                cost: c.cost(),
                gain: *gain,
            })
            .collect();
        Self {
            goal: plan.goal(),
            selected,
            covered_probes: plan.covered_probes(),
            universe_size: plan.universe_size(),
            coverage_fraction: plan.coverage_fraction(),
            total_cost: plan.total_cost(),
            stop: plan.stop_reason().clone(),
            description: plan.describe(),
        }
    }
}
