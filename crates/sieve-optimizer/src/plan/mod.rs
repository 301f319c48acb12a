//! Optimization plans: the immutable result of one solve.

pub mod optimization_plan;
pub mod summary;

pub use optimization_plan::{OptimizationPlan, StopReason};
pub use summary::{PlanSummary, SelectedTest};
