//! Drossel-Schwabl style forest-fire rule.
//!
//! Trees catch fire from any burning Moore neighbour, or spontaneously with
//! a fixed ignition probability. Burning trees burn out in one step.
//! There is no regrowth: empty cells stay empty.
//!
//! Constructed via [`ForestFireRule::new`] or the builder
//! [`ForestFireRule::builder`].

use cellauto_core::{CellState, RuleError, StateSet};
use cellauto_space::{Neighbourhood, NeighbourhoodSpec};
use rand::Rng;

use crate::rule::{Glyphs, Rule};

/// An empty (burnt or never planted) cell.
pub const EMPTY: CellState = 0;
/// A standing tree.
pub const TREE: CellState = 1;
/// A tree burning this step.
pub const BURNING: CellState = 2;

const STATES: StateSet = StateSet::new(&[EMPTY, TREE, BURNING]);

/// The forest-fire transition rule.
///
/// | Current | Next |
/// |---------|------|
/// | `BURNING` | `EMPTY` |
/// | `TREE` with a burning neighbour | `BURNING` |
/// | `TREE` otherwise | `BURNING` with probability `ignition_probability`, else `TREE` |
/// | `EMPTY` | `EMPTY` |
///
/// Random initialisation plants a tree in each cell with probability
/// `tree_density`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForestFireRule {
    tree_density: f64,
    ignition_probability: f64,
}

/// Builder for [`ForestFireRule`].
///
/// Defaults: `tree_density = 0.5`, `ignition_probability = 0.0`.
#[derive(Clone, Copy, Debug)]
pub struct ForestFireRuleBuilder {
    tree_density: f64,
    ignition_probability: f64,
}

fn check_probability(name: &'static str, value: f64) -> Result<f64, RuleError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(RuleError::ProbabilityOutOfRange { name, value });
    }
    Ok(value)
}

impl ForestFireRule {
    /// Build a rule with the given initial tree density and per-step
    /// spontaneous ignition probability.
    ///
    /// Returns `Err(RuleError::ProbabilityOutOfRange)` if either value is
    /// NaN or outside `[0, 1]`.
    pub fn new(tree_density: f64, ignition_probability: f64) -> Result<Self, RuleError> {
        Ok(Self {
            tree_density: check_probability("tree_density", tree_density)?,
            ignition_probability: check_probability(
                "ignition_probability",
                ignition_probability,
            )?,
        })
    }

    /// Create a new builder.
    pub fn builder() -> ForestFireRuleBuilder {
        ForestFireRuleBuilder {
            tree_density: 0.5,
            ignition_probability: 0.0,
        }
    }

    /// Probability that a cell starts as a tree.
    pub fn tree_density(&self) -> f64 {
        self.tree_density
    }

    /// Probability that a tree with no burning neighbour ignites in a step.
    pub fn ignition_probability(&self) -> f64 {
        self.ignition_probability
    }
}

impl ForestFireRuleBuilder {
    /// Set the initial tree density (default: 0.5).
    pub fn tree_density(mut self, tree_density: f64) -> Self {
        self.tree_density = tree_density;
        self
    }

    /// Set the spontaneous ignition probability (default: 0.0).
    pub fn ignition_probability(mut self, ignition_probability: f64) -> Self {
        self.ignition_probability = ignition_probability;
        self
    }

    /// Build the rule, validating both probabilities.
    pub fn build(self) -> Result<ForestFireRule, RuleError> {
        ForestFireRule::new(self.tree_density, self.ignition_probability)
    }
}

impl Glyphs for ForestFireRule {
    fn glyph(&self, state: CellState) -> char {
        match state {
            EMPTY => '=',
            TREE => '+',
            _ => '!',
        }
    }
}

impl Rule for ForestFireRule {
    fn name(&self) -> &str {
        "Forest Fire"
    }

    fn states(&self) -> StateSet {
        STATES
    }

    fn neighbourhood(&self) -> NeighbourhoodSpec {
        NeighbourhoodSpec::moore()
    }

    fn initial_state<G: Rng + ?Sized>(&self, rng: &mut G) -> CellState {
        if rng.gen::<f64>() < self.tree_density {
            TREE
        } else {
            EMPTY
        }
    }

    fn next_state<G: Rng + ?Sized>(
        &self,
        current: CellState,
        neighbours: &Neighbourhood,
        rng: &mut G,
    ) -> CellState {
        match current {
            BURNING => EMPTY,
            TREE => {
                let ignites = neighbours.any(BURNING)
                    || (self.ignition_probability > 0.0
                        && rng.gen::<f64>() < self.ignition_probability);
                if ignites {
                    BURNING
                } else {
                    TREE
                }
            }
            other => other,
        }
    }
}
