//! Core types for the cellauto grid automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: cell state
//! codes, the declared state set of a rule, the step counter, and the
//! construction errors raised by rule parameters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod state;

pub use error::RuleError;
pub use id::StepId;
pub use state::{CellState, StateSet};
