//! Property-based tests for the greedy optimizer's invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - marginal gain against a bit-by-bit count
//!   - covered probes never shrink across the selection sequence
//!   - no candidate is selected twice
//!   - each goal's stopping condition
//!   - plans do not depend on input order

use proptest::prelude::*;

use sieve_optimizer::optimizer::search::marginal_gain;
use sieve_optimizer::{
    solve, CoverageBits, OptimizationPlan, OptimizerGoal, ProbeUniverse, StopReason,
    TestCandidate,
};

// ═══════════════════════════════════════════════════════════════════
// Strategies
// ═══════════════════════════════════════════════════════════════════

/// A universe size and 1-24 candidates spanning it.
fn pool() -> impl Strategy<Value = (usize, Vec<TestCandidate>)> {
    (1usize..200).prop_flat_map(|size| {
        let candidate = (prop::collection::vec(any::<bool>(), size), 0u64..100);
        prop::collection::vec(candidate, 1..24).prop_map(move |raw| {
            let universe = ProbeUniverse::new(size);
            let candidates = raw
                .into_iter()
                .enumerate()
                .map(|(i, (flags, cost))| {
                    TestCandidate::new(
                        format!("t{i:03}"),
                        CoverageBits::from_bools(&flags),
                        cost,
                        &universe,
                    )
                    .unwrap()
                })
                .collect();
            (size, candidates)
        })
    })
}

fn ids(plan: &OptimizationPlan) -> Vec<String> {
    plan.selected_tests().iter().map(|c| c.id().to_string()).collect()
}

fn full_pool_coverage(size: usize, candidates: &[TestCandidate]) -> usize {
    let mut all = CoverageBits::new(size);
    for c in candidates {
        all.or_in_place(c.coverage());
    }
    all.popcount()
}

// ═══════════════════════════════════════════════════════════════════
// Coverage model
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// Marginal gain equals the count of probes set in the candidate but
    /// not in the accumulator.
    #[test]
    fn prop_marginal_gain_matches_brute_force(
        pairs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..300)
    ) {
        let covered_flags: Vec<bool> = pairs.iter().map(|(a, _)| *a).collect();
        let candidate_flags: Vec<bool> = pairs.iter().map(|(_, b)| *b).collect();
        let covered = CoverageBits::from_bools(&covered_flags);
        let universe = ProbeUniverse::new(pairs.len());
        let candidate = TestCandidate::new(
            "c",
            CoverageBits::from_bools(&candidate_flags),
            1,
            &universe,
        ).unwrap();

        let expected = pairs.iter().filter(|(a, b)| *b && !*a).count();
        prop_assert_eq!(marginal_gain(&covered, covered.popcount(), &candidate), expected);
        prop_assert_eq!(covered.difference_count(candidate.coverage()), expected);
    }

    /// Word-level popcount agrees with counting flags.
    #[test]
    fn prop_popcount_matches_flags(flags in prop::collection::vec(any::<bool>(), 0..300)) {
        let bits = CoverageBits::from_bools(&flags);
        prop_assert_eq!(bits.popcount(), flags.iter().filter(|f| **f).count());
        prop_assert_eq!(bits.iter_ones().count(), bits.popcount());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Selection invariants
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// Covered probes never shrink and equal the summed step gains.
    #[test]
    fn prop_coverage_is_monotonic((size, candidates) in pool(), n in 0usize..30) {
        let plan = solve(&candidates, size, OptimizerGoal::ExactCount(n)).unwrap();
        let mut running = CoverageBits::new(size);
        let mut last = 0;
        for (selected, gain) in plan.selected_tests().iter().zip(plan.gains()) {
            running.or_in_place(selected.coverage());
            let now = running.popcount();
            prop_assert!(now >= last);
            prop_assert_eq!(now - last, *gain);
            last = now;
        }
        prop_assert_eq!(&running, plan.covered());
        prop_assert_eq!(plan.covered_probes(), plan.gains().iter().sum::<usize>());
    }

    /// No id appears twice in one plan.
    #[test]
    fn prop_no_reselection((size, candidates) in pool()) {
        let plan = solve(&candidates, size, OptimizerGoal::ExactCount(candidates.len())).unwrap();
        let mut seen = std::collections::HashSet::new();
        for id in ids(&plan) {
            prop_assert!(seen.insert(id));
        }
        prop_assert_eq!(plan.len(), candidates.len());
    }

    /// ExactCount(n) selects min(n, pool size) tests.
    #[test]
    fn prop_exact_count((size, candidates) in pool(), n in 0usize..30) {
        let plan = solve(&candidates, size, OptimizerGoal::ExactCount(n)).unwrap();
        prop_assert_eq!(plan.len(), n.min(candidates.len()));
    }

    /// MinCoverage(f) reaches f, or the whole pool's coverage if f is out of reach.
    #[test]
    fn prop_min_coverage((size, candidates) in pool(), f in 0.0f64..=1.0) {
        let plan = solve(&candidates, size, OptimizerGoal::MinCoverage(f)).unwrap();
        if plan.coverage_fraction() < f {
            prop_assert_eq!(plan.stop_reason(), &StopReason::PoolExhausted);
            prop_assert_eq!(plan.covered_probes(), full_pool_coverage(size, &candidates));
        } else {
            prop_assert_eq!(plan.stop_reason(), &StopReason::GoalReached);
        }
    }

    /// MaxCost(b) stays within budget, and the rejected greedy pick would not.
    #[test]
    fn prop_max_cost((size, candidates) in pool(), budget in 0u64..500) {
        let plan = solve(&candidates, size, OptimizerGoal::MaxCost(budget)).unwrap();
        prop_assert!(plan.total_cost() <= budget);
        let summed: u64 = plan.selected_tests().iter().map(|c| c.cost()).sum();
        prop_assert_eq!(plan.total_cost(), summed);
        match plan.stop_reason() {
            StopReason::BudgetExceeded { next_id, next_cost } => {
                prop_assert!(plan.total_cost() + next_cost > budget);
                prop_assert!(!plan.contains_test_id(next_id));
            }
            StopReason::PoolExhausted => prop_assert_eq!(plan.len(), candidates.len()),
            StopReason::GoalReached => prop_assert!(false, "cost goal never reports GoalReached"),
        }
    }

    /// Same input in any order gives the same plan.
    #[test]
    fn prop_deterministic((size, candidates) in pool(), n in 0usize..30) {
        let goal = OptimizerGoal::ExactCount(n);
        let first = solve(&candidates, size, goal).unwrap();
        let again = solve(&candidates, size, goal).unwrap();
        let reversed: Vec<_> = candidates.iter().rev().cloned().collect();
        let flipped = solve(&reversed, size, goal).unwrap();
        prop_assert_eq!(ids(&first), ids(&again));
        prop_assert_eq!(ids(&first), ids(&flipped));
    }
}
