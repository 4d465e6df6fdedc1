//! The [`Rule`] trait and the [`Glyphs`] display hook.
//!
//! A rule is a pure per-cell transition. It declares its state set and
//! neighbourhood shape up front; the driver gathers the neighbourhood from
//! the committed grid and asks the rule for the cell's next state.

use cellauto_core::{CellState, StateSet};
use cellauto_space::{Neighbourhood, NeighbourhoodSpec};
use rand::Rng;

/// Maps cell states to display characters for text renderers.
///
/// Object-safe so renderers can take `&dyn Glyphs` regardless of the rule
/// type behind it.
pub trait Glyphs {
    /// Character drawn for `state`.
    ///
    /// Default: the state's base-36 digit, or `'?'` for codes above 35.
    fn glyph(&self, state: CellState) -> char {
        char::from_digit(state as u32, 36).unwrap_or('?')
    }
}

/// A per-cell transition rule for a synchronous grid automaton.
///
/// # Contract
///
/// - `next_state()` MUST return a member of `states()` whenever `current`
///   and every neighbour are members of `states()`.
/// - `&self`: rules are stateless across cells and steps; parameters are
///   fixed at construction.
/// - Randomness comes only from the `rng` argument, so a seeded driver
///   reproduces a run exactly.
///
/// # Examples
///
/// A rule that copies the left neighbour (a shift to the right):
///
/// ```
/// use cellauto_core::{CellState, StateSet};
/// use cellauto_rules::{Glyphs, Rule};
/// use cellauto_space::{Neighbourhood, NeighbourhoodSpec};
/// use rand::Rng;
///
/// struct ShiftRight;
///
/// impl Glyphs for ShiftRight {}
///
/// impl Rule for ShiftRight {
///     fn name(&self) -> &str { "shift_right" }
///     fn states(&self) -> StateSet { StateSet::BINARY }
///     fn neighbourhood(&self) -> NeighbourhoodSpec { NeighbourhoodSpec::linear() }
///     fn next_state<G: Rng + ?Sized>(
///         &self,
///         _current: CellState,
///         neighbours: &Neighbourhood,
///         _rng: &mut G,
///     ) -> CellState {
///         neighbours.values()[0]
///     }
/// }
///
/// let window = Neighbourhood::from(&[1, 0, 0][..]);
/// let mut rng = rand::thread_rng();
/// assert_eq!(ShiftRight.next_state(0, &window, &mut rng), 1);
/// ```
pub trait Rule: Glyphs {
    /// Human-readable name for logs and render headers.
    fn name(&self) -> &str;

    /// The codes this rule reads and writes.
    fn states(&self) -> StateSet;

    /// The neighbourhood the driver extracts for each cell.
    fn neighbourhood(&self) -> NeighbourhoodSpec;

    /// Draw one cell's state for random initialisation.
    ///
    /// Default: uniform over [`states()`](Rule::states).
    fn initial_state<G: Rng + ?Sized>(&self, rng: &mut G) -> CellState {
        let codes = self.states().codes();
        codes[rng.gen_range(0..codes.len())]
    }

    /// The next state of a cell currently in `current` whose neighbourhood
    /// (extracted from the previous committed grid) is `neighbours`.
    fn next_state<G: Rng + ?Sized>(
        &self,
        current: CellState,
        neighbours: &Neighbourhood,
        rng: &mut G,
    ) -> CellState;
}
