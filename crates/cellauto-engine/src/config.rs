//! Automaton configuration, validation, and error types.
//!
//! [`AutomatonConfig`] is the builder-input for constructing an
//! [`Automaton`](crate::Automaton). [`validate()`](AutomatonConfig::validate)
//! checks structural invariants; [`Automaton::new`](crate::Automaton::new)
//! calls it before allocating anything, so invalid parameters fail before
//! any step runs.

use std::error::Error;
use std::fmt;

use cellauto_core::{CellState, RuleError, StateSet};
use cellauto_rules::{ElementaryRule, ForestFireRule, LifeRule, MajorityRule, Rule};
use cellauto_space::{Grid, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating or seeding an automaton.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions or seeded grid shape are invalid.
    Space(SpaceError),
    /// Rule parameters are invalid.
    Rule(RuleError),
    /// An elementary initial row whose length differs from the column count.
    InitialRowLength {
        /// The configured column count.
        expected: u32,
        /// Length of the supplied row.
        got: usize,
    },
    /// A seeded cell holds a code outside the rule's state set.
    InvalidCellState {
        /// Row of the first offending cell.
        row: u32,
        /// Column of the first offending cell.
        col: u32,
        /// The offending code.
        state: CellState,
        /// The codes the rule accepts.
        states: StateSet,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "grid: {e}"),
            Self::Rule(e) => write!(f, "rule: {e}"),
            Self::InitialRowLength { expected, got } => {
                write!(f, "initial row has {got} cells, expected {expected}")
            }
            Self::InvalidCellState {
                row,
                col,
                state,
                states,
            } => write!(
                f,
                "cell ({row}, {col}) has state {state}, expected one of {states}"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Rule(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

// ── InitialState ───────────────────────────────────────────────────

/// How the grid is populated when the automaton is constructed.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InitialState {
    /// Every cell 0.
    #[default]
    Zeroed,
    /// Every cell drawn from the rule's initial distribution.
    Random,
    /// An explicit grid of the configured dimensions.
    Grid(Grid),
}

// ── AutomatonConfig ────────────────────────────────────────────────

/// Everything needed to construct an [`Automaton`](crate::Automaton).
///
/// Fields are public; the preset constructors ([`elementary`](Self::elementary),
/// [`forest_fire`](Self::forest_fire), [`life`](Self::life),
/// [`majority`](Self::majority)) validate rule parameters up front.
#[derive(Clone, Debug)]
pub struct AutomatonConfig<R> {
    /// Number of grid rows (1 for elementary automata).
    pub rows: u32,
    /// Number of grid columns.
    pub cols: u32,
    /// The transition rule.
    pub rule: R,
    /// Seed for the automaton's random source.
    pub seed: u64,
    /// Grid contents at construction.
    pub initial: InitialState,
}

impl<R: Rule> AutomatonConfig<R> {
    /// A zero-initialised configuration with seed 0.
    pub fn new(rows: u32, cols: u32, rule: R) -> Self {
        Self {
            rows,
            cols,
            rule,
            seed: 0,
            initial: InitialState::Zeroed,
        }
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the initial state.
    pub fn with_initial(mut self, initial: InitialState) -> Self {
        self.initial = initial;
        self
    }

    /// Check structural invariants.
    ///
    /// Rejects empty or oversized dimensions and, for an explicit initial
    /// grid, mismatched dimensions or codes outside the rule's state set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SpaceError::EmptySpace.into());
        }
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value > Grid::MAX_DIM {
                return Err(SpaceError::DimensionTooLarge {
                    name,
                    value,
                    max: Grid::MAX_DIM,
                }
                .into());
            }
        }
        if let InitialState::Grid(grid) = &self.initial {
            check_grid(grid, (self.rows, self.cols), self.rule.states())?;
        }
        Ok(())
    }
}

/// Check that `grid` has dimensions `dims` and only codes from `states`.
pub(crate) fn check_grid(grid: &Grid, dims: (u32, u32), states: StateSet) -> Result<(), ConfigError> {
    if grid.dims() != dims {
        return Err(SpaceError::DimensionMismatch {
            expected: dims,
            got: grid.dims(),
        }
        .into());
    }
    for (row, cells) in grid.rows_iter().enumerate() {
        if let Some(col) = cells.iter().position(|&s| !states.contains(s)) {
            return Err(ConfigError::InvalidCellState {
                row: row as u32,
                col: col as u32,
                state: cells[col],
                states,
            });
        }
    }
    Ok(())
}

impl AutomatonConfig<ElementaryRule> {
    /// A single-row elementary automaton seeded with `initial_row`.
    ///
    /// `initial_row` must have exactly `cols` cells, each 0 or 1.
    pub fn elementary(cols: u32, code: u32, initial_row: &[CellState]) -> Result<Self, ConfigError> {
        let rule = ElementaryRule::new(code)?;
        if initial_row.len() != cols as usize {
            return Err(ConfigError::InitialRowLength {
                expected: cols,
                got: initial_row.len(),
            });
        }
        let grid = Grid::from_rows(&[initial_row])?;
        let config = Self::new(1, cols, rule).with_initial(InitialState::Grid(grid));
        config.validate()?;
        Ok(config)
    }
}

impl AutomatonConfig<ForestFireRule> {
    /// A forest-fire automaton. Both probabilities must lie in `[0, 1]`.
    pub fn forest_fire(
        rows: u32,
        cols: u32,
        tree_density: f64,
        ignition_probability: f64,
    ) -> Result<Self, ConfigError> {
        let rule = ForestFireRule::new(tree_density, ignition_probability)?;
        let config = Self::new(rows, cols, rule);
        config.validate()?;
        Ok(config)
    }
}

impl AutomatonConfig<LifeRule> {
    /// A Game of Life automaton.
    pub fn life(rows: u32, cols: u32) -> Result<Self, ConfigError> {
        let config = Self::new(rows, cols, LifeRule::new());
        config.validate()?;
        Ok(config)
    }
}

impl AutomatonConfig<MajorityRule> {
    /// A majority-vote automaton with an odd window side `side`.
    pub fn majority(rows: u32, cols: u32, side: u32) -> Result<Self, ConfigError> {
        let rule = MajorityRule::new(side)?;
        let config = Self::new(rows, cols, rule);
        config.validate()?;
        Ok(config)
    }
}
