//! sieve-optimizer: greedy selection of a test subset that approximately
//! maximizes probe-point coverage under a test-count, coverage, or
//! execution-time goal.
//!
//! ```no_run
//! use sieve_optimizer::{solve, CoverageBits, OptimizerGoal, ProbeUniverse, TestCandidate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let universe = ProbeUniverse::new(10);
//! let candidates = vec![
//!     TestCandidate::new("A", CoverageBits::from_indices(10, [0, 1, 2])?, 5, &universe)?,
//!     TestCandidate::new("B", CoverageBits::from_indices(10, [2, 3, 4, 5])?, 5, &universe)?,
//! ];
//! let plan = solve(&candidates, universe.size(), OptimizerGoal::ExactCount(1))?;
//! assert!(plan.contains_test_id("B"));
//! # Ok(())
//! # }
//! ```

pub mod coverage;
pub mod filter;
pub mod optimizer;
pub mod plan;

pub use coverage::{CoverageBits, ProbeUniverse, TestCandidate};
pub use filter::{InclusionFilter, RunEverything, TestDescription};
pub use optimizer::{
    assess_candidates, solve, OptimizerGoal, PoolAssessment, ScoringStrategy, SubsetOptimizer,
};
pub use plan::{OptimizationPlan, PlanSummary, StopReason};
