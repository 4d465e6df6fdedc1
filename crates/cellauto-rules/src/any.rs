//! Runtime selection among the built-in rules.
//!
//! [`AnyRule`] is a closed tagged union over the four built-in rules. It
//! implements [`Rule`] by static dispatch, so a single driver type can run
//! whichever variant was picked at runtime (e.g. from a menu).

use std::fmt;

use cellauto_core::{CellState, StateSet};
use cellauto_space::{Neighbourhood, NeighbourhoodSpec};
use rand::Rng;

use crate::elementary::ElementaryRule;
use crate::forest_fire::ForestFireRule;
use crate::life::LifeRule;
use crate::majority::MajorityRule;
use crate::rule::{Glyphs, Rule};

/// Discriminant of the built-in automaton variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AutomatonKind {
    /// [`ElementaryRule`].
    Elementary,
    /// [`ForestFireRule`].
    ForestFire,
    /// [`LifeRule`].
    Life,
    /// [`MajorityRule`].
    Majority,
}

impl AutomatonKind {
    /// All variants, in menu order.
    pub const ALL: [Self; 4] = [Self::Elementary, Self::ForestFire, Self::Life, Self::Majority];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Elementary => "Elementary 1D",
            Self::ForestFire => "Forest Fire",
            Self::Life => "Game of Life",
            Self::Majority => "Majority",
        }
    }
}

impl fmt::Display for AutomatonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the built-in rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyRule {
    /// Wolfram elementary 1D rule.
    Elementary(ElementaryRule),
    /// Forest fire.
    ForestFire(ForestFireRule),
    /// Conway's Life.
    Life(LifeRule),
    /// Majority vote.
    Majority(MajorityRule),
}

impl AnyRule {
    /// Which variant this is.
    pub fn kind(&self) -> AutomatonKind {
        match self {
            Self::Elementary(_) => AutomatonKind::Elementary,
            Self::ForestFire(_) => AutomatonKind::ForestFire,
            Self::Life(_) => AutomatonKind::Life,
            Self::Majority(_) => AutomatonKind::Majority,
        }
    }
}

impl From<ElementaryRule> for AnyRule {
    fn from(r: ElementaryRule) -> Self {
        Self::Elementary(r)
    }
}

impl From<ForestFireRule> for AnyRule {
    fn from(r: ForestFireRule) -> Self {
        Self::ForestFire(r)
    }
}

impl From<LifeRule> for AnyRule {
    fn from(r: LifeRule) -> Self {
        Self::Life(r)
    }
}

impl From<MajorityRule> for AnyRule {
    fn from(r: MajorityRule) -> Self {
        Self::Majority(r)
    }
}

impl Glyphs for AnyRule {
    fn glyph(&self, state: CellState) -> char {
        match self {
            Self::Elementary(r) => r.glyph(state),
            Self::ForestFire(r) => r.glyph(state),
            Self::Life(r) => r.glyph(state),
            Self::Majority(r) => r.glyph(state),
        }
    }
}

impl Rule for AnyRule {
    fn name(&self) -> &str {
        self.kind().name()
    }

    fn states(&self) -> StateSet {
        match self {
            Self::Elementary(r) => r.states(),
            Self::ForestFire(r) => r.states(),
            Self::Life(r) => r.states(),
            Self::Majority(r) => r.states(),
        }
    }

    fn neighbourhood(&self) -> NeighbourhoodSpec {
        match self {
            Self::Elementary(r) => r.neighbourhood(),
            Self::ForestFire(r) => r.neighbourhood(),
            Self::Life(r) => r.neighbourhood(),
            Self::Majority(r) => r.neighbourhood(),
        }
    }

    fn initial_state<G: Rng + ?Sized>(&self, rng: &mut G) -> CellState {
        match self {
            Self::Elementary(r) => r.initial_state(rng),
            Self::ForestFire(r) => r.initial_state(rng),
            Self::Life(r) => r.initial_state(rng),
            Self::Majority(r) => r.initial_state(rng),
        }
    }

    fn next_state<G: Rng + ?Sized>(
        &self,
        current: CellState,
        neighbours: &Neighbourhood,
        rng: &mut G,
    ) -> CellState {
        match self {
            Self::Elementary(r) => r.next_state(current, neighbours, rng),
            Self::ForestFire(r) => r.next_state(current, neighbours, rng),
            Self::Life(r) => r.next_state(current, neighbours, rng),
            Self::Majority(r) => r.next_state(current, neighbours, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest_fire::{BURNING, TREE};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn kind_and_name_follow_variant() {
        let rules: [AnyRule; 4] = [
            ElementaryRule::new(30).unwrap().into(),
            ForestFireRule::new(0.5, 0.0).unwrap().into(),
            LifeRule::new().into(),
            MajorityRule::new(3).unwrap().into(),
        ];
        for (rule, kind) in rules.iter().zip(AutomatonKind::ALL) {
            assert_eq!(rule.kind(), kind);
            assert_eq!(rule.name(), kind.name());
        }
    }

    #[test]
    fn delegates_transition_and_glyphs() {
        let rule: AnyRule = ForestFireRule::new(0.5, 0.0).unwrap().into();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let ring = Neighbourhood::from(&[BURNING, 0, 0, 0, 0, 0, 0, 0][..]);
        assert_eq!(rule.next_state(TREE, &ring, &mut rng), BURNING);
        assert_eq!(rule.glyph(BURNING), '!');
        assert_eq!(rule.states().len(), 3);
        assert_eq!(rule.neighbourhood(), NeighbourhoodSpec::moore());
    }

    #[test]
    fn kind_display() {
        assert_eq!(AutomatonKind::Life.to_string(), "Game of Life");
    }
}
