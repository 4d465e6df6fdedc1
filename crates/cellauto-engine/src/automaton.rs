//! The synchronous evolution driver.
//!
//! [`Automaton`] owns one [`Grid`], one [`Rule`], and one random source.
//! Each [`step()`](Automaton::step) reads only the committed grid, builds
//! the complete next generation in a fresh buffer, and swaps it in. No cell
//! update can observe another update from the same step.
//!
//! # Ownership model
//!
//! The grid is exclusively owned by the automaton. Readers get either a
//! shared borrow ([`grid()`](Automaton::grid)), which the borrow checker
//! keeps from outliving the next `step()`, or an owned
//! [`snapshot()`](Automaton::snapshot).

use std::time::Instant;

use cellauto_core::StepId;
use cellauto_rules::{LifeRule, Rule};
use cellauto_space::{Grid, Neighbourhood, NeighbourhoodSpec};
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{check_grid, AutomatonConfig, ConfigError, InitialState};
use crate::metrics::{EvolveSummary, StepMetrics};
use crate::render::{NullRenderer, Renderer};

// Compile-time assertion: a seeded automaton can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Automaton<LifeRule>>();
    }
};

/// A grid automaton driven by rule `R` and random source `G`.
///
/// Created from an [`AutomatonConfig`] via [`new()`](Automaton::new)
/// (seeded [`ChaCha8Rng`]) or [`with_rng()`](Automaton::with_rng) (any
/// [`Rng`]).
///
/// # Example
///
/// ```
/// use cellauto_engine::{Automaton, AutomatonConfig};
///
/// let config = AutomatonConfig::life(8, 8).unwrap().with_seed(42);
/// let mut life = Automaton::new(config).unwrap();
/// life.initialize_random_state();
/// let summary = life.evolve(10);
/// assert_eq!(summary.steps, 10);
/// assert_eq!(life.step_id().0, 10);
/// ```
#[derive(Debug)]
pub struct Automaton<R, G = ChaCha8Rng> {
    grid: Grid,
    rule: R,
    neighbourhood: NeighbourhoodSpec,
    step: StepId,
    rng: G,
}

impl<R: Rule> Automaton<R> {
    /// Create an automaton whose random source is a [`ChaCha8Rng`] seeded
    /// from `config.seed`.
    ///
    /// Validates the configuration and populates the grid according to
    /// `config.initial`. Consumes the config.
    pub fn new(config: AutomatonConfig<R>) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rule, G: Rng> Automaton<R, G> {
    /// Create an automaton drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns seeding.
    pub fn with_rng(config: AutomatonConfig<R>, rng: G) -> Result<Self, ConfigError> {
        config.validate()?;
        let AutomatonConfig {
            rows,
            cols,
            rule,
            seed,
            initial,
        } = config;
        let neighbourhood = rule.neighbourhood();
        let mut automaton = Self {
            grid: Grid::new(rows, cols)?,
            rule,
            neighbourhood,
            step: StepId::ZERO,
            rng,
        };
        match initial {
            InitialState::Zeroed => {}
            InitialState::Random => automaton.initialize_random_state(),
            InitialState::Grid(grid) => automaton.grid.commit(grid)?,
        }
        debug!(
            "created {} automaton {}x{} (seed {})",
            automaton.rule.name(),
            rows,
            cols,
            seed
        );
        Ok(automaton)
    }

    /// Assign every cell independently from the rule's initial distribution
    /// and reset the step counter.
    pub fn initialize_random_state(&mut self) {
        let Self {
            ref grid,
            ref rule,
            ref mut rng,
            ..
        } = *self;
        let next = grid.next_generation(|_, _, _| rule.initial_state(rng));
        self.grid = next;
        self.step = StepId::ZERO;
        debug!("{}: randomised {} cells", self.rule.name(), self.grid.cell_count());
    }

    /// Replace the grid with an explicit seed and reset the step counter.
    ///
    /// Rejects grids of other dimensions or holding codes outside the
    /// rule's state set; the current grid is untouched on error.
    pub fn seed_state(&mut self, grid: Grid) -> Result<(), ConfigError> {
        check_grid(&grid, self.grid.dims(), self.rule.states())?;
        self.grid.commit(grid)?;
        self.step = StepId::ZERO;
        debug!("{}: seeded explicit state", self.rule.name());
        Ok(())
    }

    /// Compute the next generation from the committed grid and commit it.
    pub fn step(&mut self) -> StepMetrics {
        let start = Instant::now();
        let Self {
            ref grid,
            ref rule,
            ref neighbourhood,
            ref mut rng,
            ..
        } = *self;
        let mut window = Neighbourhood::with_capacity(neighbourhood.shape().len());
        let next = grid.next_generation(|row, col, current| {
            neighbourhood.extract_into(grid, row, col, &mut window);
            let state = rule.next_state(current, &window, rng);
            debug_assert!(
                rule.states().contains(state),
                "{} produced state {state} outside {}",
                rule.name(),
                rule.states()
            );
            state
        });

        let previous = std::mem::replace(&mut self.grid, next);
        self.step = self.step.next();

        let states = self.rule.states();
        let metrics = StepMetrics {
            step: self.step,
            total_us: start.elapsed().as_micros() as u64,
            changed_cells: self.grid.diff_count(&previous),
            population: states.iter().map(|s| (s, self.grid.count(s))).collect(),
        };
        trace!(
            "{} step {}: {} cells changed in {}us",
            self.rule.name(),
            metrics.step,
            metrics.changed_cells,
            metrics.total_us
        );
        metrics
    }

    /// Run exactly `steps` steps. `evolve(0)` leaves the grid untouched.
    pub fn evolve(&mut self, steps: u64) -> EvolveSummary {
        self.evolve_rendered(steps, &mut NullRenderer)
    }

    /// Run exactly `steps` steps, handing each committed grid to `renderer`.
    pub fn evolve_rendered(&mut self, steps: u64, renderer: &mut dyn Renderer) -> EvolveSummary {
        debug!(
            "{}: evolving {} steps from step {}",
            self.rule.name(),
            steps,
            self.step
        );
        let mut summary = EvolveSummary {
            final_step: self.step,
            ..EvolveSummary::default()
        };
        for _ in 0..steps {
            let metrics = self.step();
            summary.record(&metrics);
            self.render(renderer);
        }
        debug!(
            "{}: reached step {} ({} cell changes)",
            self.rule.name(),
            summary.final_step,
            summary.changed_cells
        );
        summary
    }

    /// Hand the current grid to `renderer` without stepping.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.render(self.step, &self.grid, &self.rule);
    }

    /// The committed grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// An owned copy of the committed grid.
    pub fn snapshot(&self) -> Grid {
        self.grid.snapshot()
    }

    /// Generations run since the last initialisation or seeding.
    pub fn step_id(&self) -> StepId {
        self.step
    }

    /// The transition rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Number of grid rows.
    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    /// Number of grid columns.
    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }
}

impl<R: Rule, G: Rng + SeedableRng> Automaton<R, G> {
    /// Zero the grid, reset the step counter, and reseed the random source.
    pub fn reset(&mut self, seed: u64) {
        self.grid.fill(0);
        self.step = StepId::ZERO;
        self.rng = G::seed_from_u64(seed);
        debug!("{}: reset with seed {}", self.rule.name(), seed);
    }
}
