//! Inclusion filter: the one capability a host test framework needs from
//! a plan, namely whether to run a discovered test.

use crate::plan::OptimizationPlan;

/// Decides, per discovered test id, whether the host should execute it.
pub trait InclusionFilter {
    fn should_run(&self, test_id: &str) -> bool;

    /// Short label for host-side reporting.
    fn label(&self) -> String;

    /// Non-test nodes (suites, classes) always pass so their children can
    /// be filtered individually.
    fn admits(&self, description: &TestDescription) -> bool {
        !description.is_test || self.should_run(&description.display_name)
    }
}

/// A node in the host's test tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDescription {
    pub display_name: String,
    pub is_test: bool,
}

impl TestDescription {
    pub fn test(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            is_test: true,
        }
    }

    pub fn suite(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            is_test: false,
        }
    }
}

impl InclusionFilter for OptimizationPlan {
    fn should_run(&self, test_id: &str) -> bool {
        self.contains_test_id(test_id)
    }

    fn label(&self) -> String {
        "Optimized subset".to_string()
    }
}

/// Pass-through filter for runs where optimization was skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunEverything;

impl InclusionFilter for RunEverything {
    fn should_run(&self, _test_id: &str) -> bool {
        true
    }

    fn label(&self) -> String {
        "All tests".to_string()
    }
}
