//! Per-step and per-run metrics for the evolution driver.
//!
//! [`StepMetrics`] captures timing and population data for a single step;
//! [`EvolveSummary`] aggregates a whole [`evolve`](crate::Automaton::evolve)
//! call.

use cellauto_core::{CellState, StepId};

/// Timing and population metrics collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// The generation this step produced.
    pub step: StepId,
    /// Wall-clock time for computing and committing the step, in microseconds.
    pub total_us: u64,
    /// Number of cells whose state changed.
    pub changed_cells: usize,
    /// Cells per state code after the step, in the rule's state order.
    pub population: Vec<(CellState, usize)>,
}

impl StepMetrics {
    /// Population of `state`, or 0 if the rule does not declare it.
    pub fn population_of(&self, state: CellState) -> usize {
        self.population
            .iter()
            .find(|(s, _)| *s == state)
            .map_or(0, |&(_, n)| n)
    }
}

/// Aggregate of one `evolve` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvolveSummary {
    /// Number of steps run.
    pub steps: u64,
    /// Generation id after the last step.
    pub final_step: StepId,
    /// Sum of per-step changed-cell counts.
    pub changed_cells: usize,
    /// Sum of per-step wall-clock times, in microseconds.
    pub total_us: u64,
}

impl EvolveSummary {
    pub(crate) fn record(&mut self, metrics: &StepMetrics) {
        self.steps += 1;
        self.final_step = metrics.step;
        self.changed_cells += metrics.changed_cells;
        self.total_us += metrics.total_us;
    }
}
