//! Well-known starting patterns.

use cellauto_core::CellState;
use cellauto_space::Grid;

use crate::grid_from_art;

/// A horizontal blinker centred in a 5x5 grid. Period 2 under Life.
pub fn blinker() -> Grid {
    grid_from_art(&[".....", ".....", ".###.", ".....", "....."])
}

/// The blinker's other phase.
pub fn blinker_vertical() -> Grid {
    grid_from_art(&[".....", "..#..", "..#..", "..#..", "....."])
}

/// A 2x2 block in a 4x4 grid. Still life.
pub fn block() -> Grid {
    grid_from_art(&["....", ".##.", ".##.", "...."])
}

/// A glider in the top-left corner of an 8x8 grid.
pub fn glider() -> Grid {
    grid_from_art(&[
        ".#......", "..#.....", "###.....", "........", "........", "........", "........",
        "........",
    ])
}

/// A single live cell in the middle of a `1 x width` row. `width` must be odd.
pub fn centre_seed(width: usize) -> Vec<CellState> {
    let mut row = vec![0; width];
    row[width / 2] = 1;
    row
}
