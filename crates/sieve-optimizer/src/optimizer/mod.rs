//! Subset optimizer: goals, ranking, greedy search, and the goal-driven loop.

pub mod goal;
pub mod preflight;
pub mod ranking;
pub mod search;
pub mod solver;

pub use goal::OptimizerGoal;
pub use preflight::{assess_candidates, PoolAssessment};
pub use ranking::ScoringStrategy;
pub use solver::{solve, SubsetOptimizer, DEFAULT_PARALLEL_THRESHOLD};
