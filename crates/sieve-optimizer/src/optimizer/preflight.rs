//! Pool assessment before a solve.
//!
//! A host calls this to tell "no coverage data" apart from a pool worth
//! optimizing, and runs everything in the first case. The solver itself
//! treats an all-zero pool as valid input.

use crate::coverage::{ProbeUniverse, TestCandidate};

#[derive(Debug, Clone, PartialEq)]
pub enum PoolAssessment {
    /// No candidates at all.
    Empty,
    /// Every candidate covers zero probe points.
    NoCoverage { candidates: usize },
    /// At least one candidate covers something.
    Ready {
        universe: ProbeUniverse,
        max_individual_coverage: f64,
    },
}

impl PoolAssessment {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

pub fn assess_candidates(candidates: &[TestCandidate]) -> PoolAssessment {
    if candidates.is_empty() {
        return PoolAssessment::Empty;
    }
    let max_individual_coverage = candidates
        .iter()
        .map(TestCandidate::individual_coverage)
        .fold(0.0_f64, f64::max);
    if max_individual_coverage == 0.0 {
        tracing::warn!(
            candidates = candidates.len(),
            "all candidates have 0% coverage, test coverage cannot be optimized"
        );
        return PoolAssessment::NoCoverage {
            candidates: candidates.len(),
        };
    }
    PoolAssessment::Ready {
        universe: ProbeUniverse::spanning(candidates),
        max_individual_coverage,
    }
}
