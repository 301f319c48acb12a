//! Probe-point universe shared by every candidate in one run.

use serde::{Deserialize, Serialize};

use super::TestCandidate;

/// Total number of instrumented probe points. Fixed for one optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProbeUniverse {
    size: usize,
}

impl ProbeUniverse {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Smallest universe that fits every candidate's coverage vector.
    pub fn spanning<'a, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = &'a TestCandidate>,
    {
        let size = candidates
            .into_iter()
            .map(|c| c.coverage().len())
            .max()
            .unwrap_or(0);
        Self { size }
    }

    /// `count / size`, or 0.0 for an empty universe.
    pub fn fraction(&self, count: usize) -> f64 {
        if self.size == 0 {
            0.0
        } else {
            count as f64 / self.size as f64
        }
    }
}
