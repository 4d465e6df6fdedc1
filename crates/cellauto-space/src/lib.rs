//! Cell grids and neighbourhood extraction for cellauto.
//!
//! This crate defines the [`Grid`] that every automaton evolves and the
//! [`NeighbourhoodSpec`] shapes rules read it through.
//!
//! # Shapes
//!
//! - [`Shape::Linear`]: left, centre, right (elementary 1D rules)
//! - [`Shape::Moore`]: the 8 surrounding cells (forest-fire, Life)
//! - [`Shape::Square`]: an odd `k x k` window including the centre (majority)
//!
//! Off-grid positions always read as the neighbourhood's fill value, which is
//! [`BOUNDARY_FILL`] (0) unless overridden. There is no wraparound.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod neighbourhood;

pub use error::SpaceError;
pub use grid::{Grid, BOUNDARY_FILL};
pub use neighbourhood::{Neighbourhood, NeighbourhoodSpec, Shape};
