//! Benchmark profiles for the cellauto grid automaton engine.
//!
//! Each profile builds a ready-to-run [`AutomatonConfig`] of a fixed size:
//!
//! - [`elementary_profile`]: a 1 x 4096 row under rule 110
//! - [`forest_profile`]: a 256 x 256 forest, density 0.6
//! - [`life_profile`]: a 256 x 256 random Life soup
//! - [`majority_profile`]: a 128 x 128 random grid with a 5 x 5 window

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cellauto_engine::{AutomatonConfig, ConfigError, InitialState};
use cellauto_rules::{ElementaryRule, ForestFireRule, LifeRule, MajorityRule};
use cellauto_space::Grid;

/// Rule 110 across 4096 cells, seeded with a single live cell at the right edge.
pub fn elementary_profile() -> Result<AutomatonConfig<ElementaryRule>, ConfigError> {
    let mut row = vec![0; 4096];
    row[4095] = 1;
    AutomatonConfig::elementary(4096, 110, &row)
}

/// A 256 x 256 forest with density 0.6 and ignition probability 0.0001.
pub fn forest_profile(seed: u64) -> Result<AutomatonConfig<ForestFireRule>, ConfigError> {
    Ok(AutomatonConfig::forest_fire(256, 256, 0.6, 0.0001)?
        .with_seed(seed)
        .with_initial(InitialState::Random))
}

/// A 256 x 256 random Life soup.
pub fn life_profile(seed: u64) -> Result<AutomatonConfig<LifeRule>, ConfigError> {
    Ok(AutomatonConfig::life(256, 256)?
        .with_seed(seed)
        .with_initial(InitialState::Random))
}

/// A 128 x 128 random binary grid smoothed by a 5 x 5 majority window.
pub fn majority_profile(seed: u64) -> Result<AutomatonConfig<MajorityRule>, ConfigError> {
    Ok(AutomatonConfig::majority(128, 128, 5)?
        .with_seed(seed)
        .with_initial(InitialState::Random))
}

/// A `rows x cols` grid with every third cell set, for extraction benches.
pub fn striped_grid(rows: u32, cols: u32) -> Result<Grid, cellauto_space::SpaceError> {
    let cells = (0..rows as usize * cols as usize)
        .map(|i| u8::from(i % 3 == 0))
        .collect();
    Grid::from_cells(rows, cols, cells)
}
