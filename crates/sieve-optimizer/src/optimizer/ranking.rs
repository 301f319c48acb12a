//! Candidate ranking for one greedy step.
//!
//! The ranking is a total order over candidates with unique ids, so the
//! best candidate of a step does not depend on scan order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sieve_core::config::optimizer_config::{STRATEGY_GAIN_PER_COST, STRATEGY_MARGINAL_GAIN};
use sieve_core::errors::OptimizerError;

use crate::coverage::TestCandidate;

/// How a candidate's marginal gain is turned into a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Most newly covered probe points first; cost only breaks ties.
    #[default]
    MarginalGain,
    /// Most newly covered probe points per millisecond first.
    GainPerCost,
}

impl ScoringStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MarginalGain => STRATEGY_MARGINAL_GAIN,
            Self::GainPerCost => STRATEGY_GAIN_PER_COST,
        }
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoringStrategy {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STRATEGY_MARGINAL_GAIN => Ok(Self::MarginalGain),
            STRATEGY_GAIN_PER_COST => Ok(Self::GainPerCost),
            other => Err(OptimizerError::InvalidConfiguration(format!(
                "unknown scoring strategy '{other}'"
            ))),
        }
    }
}

/// A remaining candidate scored against the current coverage.
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    /// Position in the remaining pool.
    pub position: usize,
    /// Probe points this candidate would newly cover.
    pub gain: usize,
    pub candidate: &'a TestCandidate,
}

/// `Greater` means `a` should be picked before `b`.
pub fn compare(strategy: ScoringStrategy, a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    let primary = match strategy {
        ScoringStrategy::MarginalGain => Ordering::Equal,
        ScoringStrategy::GainPerCost => {
            compare_ratio(a.gain, a.candidate.cost(), b.gain, b.candidate.cost())
        }
    };
    primary
        .then_with(|| a.gain.cmp(&b.gain))
        .then_with(|| b.candidate.cost().cmp(&a.candidate.cost()))
        .then_with(|| b.candidate.id().cmp(a.candidate.id()))
}

/// The better-ranked of two scored candidates.
pub fn better<'a>(strategy: ScoringStrategy, a: Scored<'a>, b: Scored<'a>) -> Scored<'a> {
    if compare(strategy, &a, &b) == Ordering::Less {
        b
    } else {
        a
    }
}

/// Compare `ga / ca` with `gb / cb` exactly.
///
/// Zero cost with positive gain is an infinite ratio. Zero gain is a zero
/// ratio whatever the cost.
fn compare_ratio(ga: usize, ca: u64, gb: usize, cb: u64) -> Ordering {
    let a_inf = ca == 0 && ga > 0;
    let b_inf = cb == 0 && gb > 0;
    match (a_inf, b_inf) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let lhs = ga as u128 * u128::from(cb.max(1));
            let rhs = gb as u128 * u128::from(ca.max(1));
            lhs.cmp(&rhs)
        }
    }
}
