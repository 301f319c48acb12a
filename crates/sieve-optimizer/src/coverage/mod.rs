//! Coverage model: probe-point bit vectors and the test candidates that
//! carry them.

pub mod bits;
pub mod candidate;
pub mod universe;

pub use bits::CoverageBits;
pub use candidate::TestCandidate;
pub use universe::ProbeUniverse;
