//! The selected subset, its merged coverage, and its cost.

use serde::{Deserialize, Serialize};
use sieve_core::types::FxHashSet;

use super::PlanSummary;
use crate::coverage::{CoverageBits, ProbeUniverse, TestCandidate};
use crate::optimizer::OptimizerGoal;

/// Why the greedy loop stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum StopReason {
    /// The goal's stopping condition fired.
    GoalReached,
    /// Every candidate was selected before the goal was met.
    PoolExhausted,
    /// The next greedy pick would have pushed the total cost past the budget.
    BudgetExceeded { next_id: String, next_cost: u64 },
}

/// Ordered selection produced by one solve.
#[derive(Debug, Clone)]
pub struct OptimizationPlan {
    selections: Vec<TestCandidate>,
    gains: Vec<usize>,
    covered: CoverageBits,
    universe: ProbeUniverse,
    total_cost: u64,
    goal: OptimizerGoal,
    stop_reason: StopReason,
    selected_ids: FxHashSet<String>,
}

impl OptimizationPlan {
    pub(crate) fn new(
        selections: Vec<TestCandidate>,
        gains: Vec<usize>,
        covered: CoverageBits,
        universe: ProbeUniverse,
        goal: OptimizerGoal,
        stop_reason: StopReason,
    ) -> Self {
        let selected_ids = selections.iter().map(|c| c.id().to_string()).collect();
        let total_cost = selections
            .iter()
            .fold(0u64, |sum, c| sum.saturating_add(c.cost()));
        Self {
            selections,
            gains,
            covered,
            universe,
            total_cost,
            goal,
            stop_reason,
            selected_ids,
        }
    }

    /// Whether the test with this id was selected.
    pub fn contains_test_id(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    /// Selected tests in greedy pick order.
    pub fn selected_tests(&self) -> &[TestCandidate] {
        &self.selections
    }

    /// Marginal gain of each selection, in pick order.
    pub fn gains(&self) -> &[usize] {
        &self.gains
    }

    /// OR of every selected test's coverage.
    pub fn covered(&self) -> &CoverageBits {
        &self.covered
    }

    pub fn covered_probes(&self) -> usize {
        self.covered.popcount()
    }

    pub fn universe_size(&self) -> usize {
        self.universe.size()
    }

    /// Covered probe points as a fraction of the universe.
    pub fn coverage_fraction(&self) -> f64 {
        self.universe.fraction(self.covered_probes())
    }

    /// Summed cost of the selection in milliseconds.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn goal(&self) -> OptimizerGoal {
        self.goal
    }

    pub fn stop_reason(&self) -> &StopReason {
        &self.stop_reason
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// One-line human-readable summary of the plan.
    pub fn describe(&self) -> String {
        format!(
            "{} tests with {:.1}% coverage and {}ms expected execution time",
            self.selections.len(),
            self.coverage_fraction() * 100.0,
            self.total_cost
        )
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary::from_plan(self)
    }

    /// Machine-readable summary as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.summary())
    }
}
