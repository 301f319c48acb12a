//! Goal-driven greedy solver.
//!
//! Each step scores every remaining candidate against the accumulated
//! coverage and takes the best one. The goal decides when to stop:
//!
//! - `ExactCount(n)`: after `n` picks.
//! - `MinCoverage(f)`: once the covered fraction reaches `f`.
//! - `MaxCost(b)`: before the pick that would push the total cost past `b`.
//!
//! Every loop ends after at most one step per candidate since each step
//! shrinks the remaining pool.

use std::time::Instant;

use sieve_core::config::OptimizerConfig;
use sieve_core::errors::{CoverageError, OptimizerError};
use sieve_core::types::FxHashSet;
use tracing::{debug, info, info_span};

use super::goal::OptimizerGoal;
use super::ranking::ScoringStrategy;
use super::search::SearchState;
use crate::coverage::{ProbeUniverse, TestCandidate};
use crate::plan::{OptimizationPlan, StopReason};

/// Remaining-pool size at which a step's scoring pass goes parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Configured greedy optimizer. Holds no per-solve state, so one instance
/// can run any number of independent solves, concurrently included.
#[derive(Debug, Clone)]
pub struct SubsetOptimizer {
    goals: Vec<OptimizerGoal>,
    strategy: ScoringStrategy,
    parallel_threshold: usize,
}

impl Default for SubsetOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsetOptimizer {
    pub fn new() -> Self {
        Self {
            goals: Vec::new(),
            strategy: ScoringStrategy::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Build from a resolved `[optimizer]` config table.
    pub fn from_config(config: &OptimizerConfig) -> Result<Self, OptimizerError> {
        config
            .validate()
            .map_err(|e| OptimizerError::InvalidConfiguration(e.to_string()))?;
        let goal = config
            .goal()
            .map_err(|e| OptimizerError::InvalidConfiguration(e.to_string()))?;
        let strategy = config.effective_strategy().parse()?;
        Ok(Self::new()
            .with_goal(goal.into())
            .with_strategy(strategy)
            .with_parallel_threshold(config.effective_parallel_threshold()))
    }

    /// Add a goal. A solve fails unless exactly one goal was added.
    pub fn with_goal(mut self, goal: OptimizerGoal) -> Self {
        self.goals.push(goal);
        self
    }

    pub fn with_target_test_count(self, count: usize) -> Self {
        self.with_goal(OptimizerGoal::ExactCount(count))
    }

    pub fn with_target_coverage(self, fraction: f64) -> Self {
        self.with_goal(OptimizerGoal::MinCoverage(fraction))
    }

    pub fn with_target_cost(self, budget_ms: u64) -> Self {
        self.with_goal(OptimizerGoal::MaxCost(budget_ms))
    }

    pub fn with_strategy(mut self, strategy: ScoringStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Pools smaller than this are scored on the calling thread. Clamped to 1.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    pub fn strategy(&self) -> ScoringStrategy {
        self.strategy
    }

    /// The single configured goal.
    pub fn goal(&self) -> Result<OptimizerGoal, OptimizerError> {
        match self.goals.as_slice() {
            [goal] => {
                goal.validate()?;
                Ok(*goal)
            }
            [] => Err(OptimizerError::InvalidConfiguration(
                "a target test count, coverage or cost must be set".to_string(),
            )),
            many => Err(OptimizerError::InvalidConfiguration(format!(
                "exactly one goal may be set, got {}: {}",
                many.len(),
                many.iter()
                    .map(|g| g.to_string())
                    .collect::<Vec<_>>()
                    .join("; ")
            ))),
        }
    }

    /// Select a subset of `candidates` for the configured goal.
    ///
    /// Every candidate's coverage must span exactly `universe_size` probe
    /// points and ids must be unique. An empty pool is reported as
    /// `EmptyCandidatePool`, never as an empty plan.
    pub fn solve(
        &self,
        candidates: &[TestCandidate],
        universe_size: usize,
    ) -> Result<OptimizationPlan, OptimizerError> {
        if candidates.is_empty() {
            return Err(OptimizerError::EmptyCandidatePool);
        }
        let goal = self.goal()?;
        let universe = ProbeUniverse::new(universe_size);
        validate_candidates(candidates, &universe)?;

        let span = info_span!(
            "solve",
            %goal,
            strategy = %self.strategy,
            candidate_count = candidates.len(),
            universe_size
        );
        let _guard = span.enter();
        let started = Instant::now();

        let mut state = SearchState::new(candidates, universe);
        let stop_reason = match goal {
            OptimizerGoal::ExactCount(n) => self.solve_for_test_count(&mut state, n),
            OptimizerGoal::MinCoverage(f) => self.solve_for_coverage(&mut state, f),
            OptimizerGoal::MaxCost(b) => self.solve_for_cost(&mut state, b),
        };

        let (selections, gains, covered) = state.into_parts();
        let plan = OptimizationPlan::new(
            selections.into_iter().cloned().collect(),
            gains,
            covered,
            universe,
            goal,
            stop_reason,
        );

        info!(
            solve_time_ms = elapsed_ms(started),
            stop = ?plan.stop_reason(),
            "optimizer complete - plan is {}",
            plan.describe()
        );
        Ok(plan)
    }

    fn solve_for_test_count(&self, state: &mut SearchState<'_>, count: usize) -> StopReason {
        for _ in 0..count {
            match state.peek_best(self.strategy, self.parallel_threshold) {
                Some(step) => {
                    log_step(state.selection_count(), step.candidate, step.gain);
                    state.commit(step);
                }
                None => return StopReason::PoolExhausted,
            }
        }
        StopReason::GoalReached
    }

    fn solve_for_coverage(&self, state: &mut SearchState<'_>, target: f64) -> StopReason {
        while state.coverage_fraction() < target {
            match state.peek_best(self.strategy, self.parallel_threshold) {
                Some(step) => {
                    log_step(state.selection_count(), step.candidate, step.gain);
                    state.commit(step);
                }
                None => return StopReason::PoolExhausted,
            }
        }
        StopReason::GoalReached
    }

    /// The pick that would overshoot the budget is never committed, which
    /// leaves the selection, cost and coverage exactly as they were before
    /// that step.
    fn solve_for_cost(&self, state: &mut SearchState<'_>, budget: u64) -> StopReason {
        while let Some(step) = state.peek_best(self.strategy, self.parallel_threshold) {
            let next_cost = step.candidate.cost();
            if state.total_cost().saturating_add(next_cost) > budget {
                debug!(
                    next_id = step.candidate.id(),
                    next_cost,
                    total_cost = state.total_cost(),
                    budget,
                    "next pick exceeds cost budget"
                );
                return StopReason::BudgetExceeded {
                    next_id: step.candidate.id().to_string(),
                    next_cost,
                };
            }
            log_step(state.selection_count(), step.candidate, step.gain);
            state.commit(step);
        }
        StopReason::PoolExhausted
    }
}

/// Solve with the default strategy and a single goal.
pub fn solve(
    candidates: &[TestCandidate],
    universe_size: usize,
    goal: OptimizerGoal,
) -> Result<OptimizationPlan, OptimizerError> {
    SubsetOptimizer::new().with_goal(goal).solve(candidates, universe_size)
}

fn validate_candidates(
    candidates: &[TestCandidate],
    universe: &ProbeUniverse,
) -> Result<(), CoverageError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for candidate in candidates {
        if candidate.coverage().len() != universe.size() {
            return Err(CoverageError::LengthMismatch {
                id: candidate.id().to_string(),
                expected: universe.size(),
                actual: candidate.coverage().len(),
            });
        }
        if !seen.insert(candidate.id()) {
            return Err(CoverageError::DuplicateCandidate {
                id: candidate.id().to_string(),
            });
        }
    }
    Ok(())
}

/// Milliseconds since `started`, saturating at `u64::MAX`.
fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn log_step(step: usize, candidate: &TestCandidate, gain: usize) {
    debug!(step, id = candidate.id(), step_gain = gain, cost = candidate.cost(), "selected");
}
