//! cellauto: discrete-state grid automata.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! cellauto sub-crates. For most users, adding `cellauto` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cellauto::prelude::*;
//!
//! // Rule 90 from a single live cell draws a Sierpinski triangle.
//! let config = AutomatonConfig::elementary(7, 90, &[0, 0, 0, 1, 0, 0, 0]).unwrap();
//! let mut ca = Automaton::new(config).unwrap();
//! let mut text = TextRenderer::without_header();
//! ca.evolve_rendered(3, &mut text);
//! assert_eq!(ca.grid().row(0), Some(&[1, 0, 1, 0, 1, 0, 1][..]));
//!
//! // A forest fire on a random 16x16 forest, reproducible from its seed.
//! let config = AutomatonConfig::forest_fire(16, 16, 0.6, 0.01)
//!     .unwrap()
//!     .with_seed(7)
//!     .with_initial(InitialState::Random);
//! let mut forest = Automaton::new(config).unwrap();
//! let summary = forest.evolve(20);
//! assert_eq!(summary.final_step, StepId(20));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cellauto-core` | State codes, state sets, step ids, rule errors |
//! | [`space`] | `cellauto-space` | The grid and neighbourhood extraction |
//! | [`rules`] | `cellauto-rules` | The `Rule` trait and the four built-in rules |
//! | [`engine`] | `cellauto-engine` | Configuration, the evolution driver, renderers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`cellauto-core`).
///
/// [`types::CellState`], [`types::StateSet`], [`types::StepId`], and
/// [`types::RuleError`].
pub use cellauto_core as types;

/// Grids and neighbourhoods (`cellauto-space`).
pub use cellauto_space as space;

/// Transition rules (`cellauto-rules`).
///
/// Implement [`rules::Rule`] to add a new automaton; the built-in rules are
/// [`rules::ElementaryRule`], [`rules::ForestFireRule`],
/// [`rules::LifeRule`], and [`rules::MajorityRule`].
pub use cellauto_rules as rules;

/// The evolution driver (`cellauto-engine`).
pub use cellauto_engine as engine;

/// Common imports for typical cellauto usage.
///
/// ```rust
/// use cellauto::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use cellauto_core::{CellState, RuleError, StateSet, StepId};

    // Space
    pub use cellauto_space::{Grid, Neighbourhood, NeighbourhoodSpec, Shape, SpaceError};

    // Rules
    pub use cellauto_rules::{
        AnyRule, AutomatonKind, ElementaryRule, ForestFireRule, Glyphs, LifeRule, MajorityRule,
        Rule,
    };

    // Engine
    pub use cellauto_engine::{
        Automaton, AutomatonConfig, ConfigError, EvolveSummary, InitialState, NullRenderer,
        RecordingRenderer, Renderer, StepMetrics, TextRenderer,
    };
}
