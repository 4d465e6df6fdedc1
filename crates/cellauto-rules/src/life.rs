//! Conway's Game of Life (B3/S23).

use cellauto_core::{CellState, StateSet};
use cellauto_space::{Neighbourhood, NeighbourhoodSpec};
use rand::Rng;

use crate::rule::{Glyphs, Rule};

/// A dead cell.
pub const DEAD: CellState = 0;
/// A live cell.
pub const ALIVE: CellState = 1;

/// Conway's Life over the Moore neighbourhood.
///
/// A live cell survives with 2 or 3 live neighbours; a dead cell is born
/// with exactly 3. Off-grid neighbours count as dead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LifeRule;

impl LifeRule {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Glyphs for LifeRule {
    fn glyph(&self, state: CellState) -> char {
        if state == ALIVE {
            '+'
        } else {
            '-'
        }
    }
}

impl Rule for LifeRule {
    fn name(&self) -> &str {
        "Game of Life"
    }

    fn states(&self) -> StateSet {
        StateSet::BINARY
    }

    fn neighbourhood(&self) -> NeighbourhoodSpec {
        NeighbourhoodSpec::moore()
    }

    fn next_state<G: Rng + ?Sized>(
        &self,
        current: CellState,
        neighbours: &Neighbourhood,
        _rng: &mut G,
    ) -> CellState {
        match (current, neighbours.count(ALIVE)) {
            (ALIVE, 2) | (ALIVE, 3) => ALIVE, // survival
            (DEAD, 3) => ALIVE,               // reproduction
            _ => DEAD,                        // under/overpopulation
        }
    }
}
