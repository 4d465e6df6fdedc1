//! Strongly-typed step counter.

use std::fmt;

/// Monotonically increasing generation counter.
///
/// `StepId(0)` is the freshly initialised (or explicitly seeded) grid.
/// Each committed evolution step advances the counter by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The generation before any step has run.
    pub const ZERO: Self = Self(0);

    /// The id of the generation after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
