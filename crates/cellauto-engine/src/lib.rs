//! Synchronous evolution driver for cellauto grid automata.
//!
//! This crate ties a [`Grid`](cellauto_space::Grid) to a
//! [`Rule`](cellauto_rules::Rule) and advances them together:
//!
//! - [`config`]: [`AutomatonConfig`], preset constructors, and
//!   [`ConfigError`]. All parameter checks happen here, before any step runs.
//! - [`automaton`]: [`Automaton`], the double-buffered driver with an
//!   injectable random source.
//! - [`render`]: the [`Renderer`] hook plus [`TextRenderer`],
//!   [`RecordingRenderer`], and [`NullRenderer`].
//! - [`metrics`]: [`StepMetrics`] per step and [`EvolveSummary`] per run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod config;
pub mod metrics;
pub mod render;

pub use automaton::Automaton;
pub use config::{AutomatonConfig, ConfigError, InitialState};
pub use metrics::{EvolveSummary, StepMetrics};
pub use render::{NullRenderer, RecordingRenderer, Renderer, TextRenderer};
