//! Majority-vote rule over a square window.
//!
//! The next state of a cell is 1 iff strictly more than half of the
//! `k x k` window centred on it (the cell included) is 1:
//!
//! ```text
//! next = 1  iff  sum > (k * k) / 2      (integer division)
//! ```
//!
//! Ties go to 0. With an odd `k` the window size `k * k` is odd, so an
//! exact tie cannot occur between 0/1 votes.

use cellauto_core::{CellState, RuleError, StateSet};
use cellauto_space::{Neighbourhood, NeighbourhoodSpec};
use rand::Rng;

use crate::rule::{Glyphs, Rule};

/// Majority vote over an odd `side x side` window, off-grid cells voting 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MajorityRule {
    side: u32,
    window: NeighbourhoodSpec,
}

impl MajorityRule {
    /// Build the rule for window side `side`.
    ///
    /// Returns `Err(RuleError::InvalidWindow)` if `side` is zero or even.
    pub fn new(side: u32) -> Result<Self, RuleError> {
        let window =
            NeighbourhoodSpec::square(side).map_err(|_| RuleError::InvalidWindow { side })?;
        Ok(Self { side, window })
    }

    /// Window side length.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Number of cells in the window, centre included.
    ///
    /// Widened to `u64`: any odd side from 65537 up squares past `u32::MAX`.
    pub fn window_area(&self) -> u64 {
        u64::from(self.side).pow(2)
    }

    /// Whether a window sum constitutes a strict majority.
    pub fn is_majority(&self, sum: u32) -> bool {
        u64::from(sum) > self.window_area() / 2
    }
}

impl Glyphs for MajorityRule {
    fn glyph(&self, state: CellState) -> char {
        if state == 1 {
            '+'
        } else {
            '-'
        }
    }
}

impl Rule for MajorityRule {
    fn name(&self) -> &str {
        "Majority"
    }

    fn states(&self) -> StateSet {
        StateSet::BINARY
    }

    fn neighbourhood(&self) -> NeighbourhoodSpec {
        self.window
    }

    fn next_state<G: Rng + ?Sized>(
        &self,
        _current: CellState,
        neighbours: &Neighbourhood,
        _rng: &mut G,
    ) -> CellState {
        u8::from(self.is_majority(neighbours.sum()))
    }
}
