//! A single test together with its coverage and execution cost.

use sieve_core::errors::CoverageError;

use super::{CoverageBits, ProbeUniverse};

/// One selectable test. Immutable once built; the optimizer only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCandidate {
    id: String,
    coverage: CoverageBits,
    /// Estimated execution time in milliseconds.
    cost: u64,
    individual_coverage: f64,
}

impl TestCandidate {
    /// Build a candidate whose coverage spans exactly `universe`.
    pub fn new(
        id: impl Into<String>,
        coverage: CoverageBits,
        cost: u64,
        universe: &ProbeUniverse,
    ) -> Result<Self, CoverageError> {
        let id = id.into();
        if coverage.len() != universe.size() {
            return Err(CoverageError::LengthMismatch {
                id,
                expected: universe.size(),
                actual: coverage.len(),
            });
        }
        let individual_coverage = universe.fraction(coverage.popcount());
        Ok(Self {
            id,
            coverage,
            cost,
            individual_coverage,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coverage(&self) -> &CoverageBits {
        &self.coverage
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Fraction of the universe this test covers on its own.
    pub fn individual_coverage(&self) -> f64 {
        self.individual_coverage
    }
}
