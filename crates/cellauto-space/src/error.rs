//! Error types for grid construction and access.

use std::fmt;

/// Errors arising from grid construction, seeding, or window shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// Nested row input whose rows have differing lengths.
    RaggedRows {
        /// Index of the first row whose length differs from row 0.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },
    /// A flat cell buffer whose length is not `rows * cols`.
    CellCountMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied buffer.
        got: usize,
    },
    /// A grid with different dimensions was offered as a replacement.
    DimensionMismatch {
        /// `(rows, cols)` of the live grid.
        expected: (u32, u32),
        /// `(rows, cols)` of the offered grid.
        got: (u32, u32),
    },
    /// A write targeted a cell outside the grid.
    CoordOutOfBounds {
        /// The offending `(row, col)`.
        coord: (i32, i32),
        /// `(rows, cols)` of the grid.
        bounds: (u32, u32),
    },
    /// A square window side that is zero or even.
    InvalidWindow {
        /// The rejected side length.
        side: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::RaggedRows { row, expected, got } => {
                write!(f, "row {row} has {got} cells, expected {expected}")
            }
            Self::CellCountMismatch { expected, got } => {
                write!(f, "expected {expected} cells, got {got}")
            }
            Self::DimensionMismatch { expected, got } => write!(
                f,
                "grid is {}x{}, replacement is {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            Self::CoordOutOfBounds { coord, bounds } => write!(
                f,
                "coordinate ({}, {}) out of bounds: [0, {}) x [0, {})",
                coord.0, coord.1, bounds.0, bounds.1
            ),
            Self::InvalidWindow { side } => {
                write!(f, "window side must be odd and at least 1, got {side}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
