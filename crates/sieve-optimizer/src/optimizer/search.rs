//! Greedy search state and the single selection step.

use rayon::prelude::*;

use super::ranking::{better, ScoringStrategy, Scored};
use crate::coverage::{CoverageBits, ProbeUniverse, TestCandidate};

/// Probe points `candidate` would add to `covered`, given
/// `covered_count == covered.popcount()`.
///
/// Computed from the OR of both vectors. An XOR would also count probe
/// points that are covered already but absent from the candidate.
#[inline]
pub fn marginal_gain(covered: &CoverageBits, covered_count: usize, candidate: &TestCandidate) -> usize {
    covered.or_popcount(candidate.coverage()) - covered_count
}

/// Best remaining candidate against a read-only `covered` snapshot, or
/// `None` once the pool is exhausted.
///
/// Pools of at least `parallel_threshold` candidates are scored on the
/// rayon pool. The ranking is total, so both paths pick the same candidate.
pub fn select_best<'a>(
    remaining: &[&'a TestCandidate],
    covered: &CoverageBits,
    covered_count: usize,
    strategy: ScoringStrategy,
    parallel_threshold: usize,
) -> Option<Scored<'a>> {
    let score = |(position, candidate): (usize, &&'a TestCandidate)| Scored {
        position,
        gain: marginal_gain(covered, covered_count, candidate),
        candidate: *candidate,
    };

    if remaining.len() >= parallel_threshold {
        remaining
            .par_iter()
            .enumerate()
            .map(score)
            .reduce_with(|a, b| better(strategy, a, b))
    } else {
        remaining
            .iter()
            .enumerate()
            .map(score)
            .reduce(|a, b| better(strategy, a, b))
    }
}

/// Working state of one solve. Owns its accumulator; candidates are borrowed.
#[derive(Debug)]
pub struct SearchState<'a> {
    universe: ProbeUniverse,
    remaining: Vec<&'a TestCandidate>,
    selections: Vec<&'a TestCandidate>,
    gains: Vec<usize>,
    covered: CoverageBits,
    covered_count: usize,
    total_cost: u64,
}

impl<'a> SearchState<'a> {
    pub fn new(candidates: &'a [TestCandidate], universe: ProbeUniverse) -> Self {
        Self {
            universe,
            remaining: candidates.iter().collect(),
            selections: Vec::new(),
            gains: Vec::new(),
            covered: CoverageBits::new(universe.size()),
            covered_count: 0,
            total_cost: 0,
        }
    }

    /// Score the pool without changing any state.
    pub fn peek_best(&self, strategy: ScoringStrategy, parallel_threshold: usize) -> Option<Scored<'a>> {
        select_best(
            &self.remaining,
            &self.covered,
            self.covered_count,
            strategy,
            parallel_threshold,
        )
    }

    /// Take a candidate returned by `peek_best` into the selection.
    pub fn commit(&mut self, step: Scored<'a>) {
        let candidate = self.remaining.swap_remove(step.position);
        debug_assert!(std::ptr::eq(candidate, step.candidate));
        self.covered.or_in_place(candidate.coverage());
        self.covered_count += step.gain;
        self.total_cost = self.total_cost.saturating_add(candidate.cost());
        self.selections.push(candidate);
        self.gains.push(step.gain);
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn coverage_fraction(&self) -> f64 {
        self.universe.fraction(self.covered_count)
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn selection_count(&self) -> usize {
        self.selections.len()
    }

    /// Release the accumulated selection.
    pub fn into_parts(self) -> (Vec<&'a TestCandidate>, Vec<usize>, CoverageBits) {
        (self.selections, self.gains, self.covered)
    }
}
