//! Neighbourhood shapes and extraction from a committed grid.
//!
//! A [`NeighbourhoodSpec`] names a shape and the fill value used for
//! off-grid positions. [`NeighbourhoodSpec::extract`] gathers the states of
//! a cell's neighbours into a [`Neighbourhood`] in a fixed, row-major order.

use crate::error::SpaceError;
use crate::grid::{Grid, BOUNDARY_FILL};
use cellauto_core::CellState;
use smallvec::SmallVec;

/// Moore offsets in row-major order, centre excluded.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The cells a rule looks at around `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `[(row, col-1), (row, col), (row, col+1)]`: the 1D radius-1 window.
    Linear,
    /// The 8 cells surrounding `(row, col)`, centre excluded.
    Moore,
    /// A `side x side` window centred on `(row, col)`, centre included.
    /// `side` is odd.
    Square {
        /// Window side length.
        side: u32,
    },
}

impl Shape {
    /// Number of states an extraction of this shape yields.
    pub fn len(&self) -> usize {
        match self {
            Self::Linear => 3,
            Self::Moore => 8,
            Self::Square { side } => (*side as usize) * (*side as usize),
        }
    }

    /// Always returns `false`; every shape has at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// How to gather neighbour states for a cell.
///
/// # Examples
///
/// ```
/// use cellauto_space::{Grid, NeighbourhoodSpec};
///
/// let grid = Grid::from_rows(&[[1, 0, 1]]).unwrap();
/// let window = NeighbourhoodSpec::linear().extract(&grid, 0, 0);
/// // Off-grid left neighbour reads as 0.
/// assert_eq!(window.values(), &[0, 1, 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NeighbourhoodSpec {
    shape: Shape,
    fill: CellState,
}

impl NeighbourhoodSpec {
    /// The 1D radius-1 window, fill 0.
    pub const fn linear() -> Self {
        Self {
            shape: Shape::Linear,
            fill: BOUNDARY_FILL,
        }
    }

    /// The Moore ring of radius 1, fill 0.
    pub const fn moore() -> Self {
        Self {
            shape: Shape::Moore,
            fill: BOUNDARY_FILL,
        }
    }

    /// A `side x side` centred window, fill 0.
    ///
    /// Returns `Err(SpaceError::InvalidWindow)` unless `side` is odd; an
    /// even window has no centre cell.
    pub fn square(side: u32) -> Result<Self, SpaceError> {
        if side % 2 == 0 {
            return Err(SpaceError::InvalidWindow { side });
        }
        Ok(Self {
            shape: Shape::Square { side },
            fill: BOUNDARY_FILL,
        })
    }

    /// Use `fill` instead of 0 for off-grid positions.
    pub fn with_fill(mut self, fill: CellState) -> Self {
        self.fill = fill;
        self
    }

    /// The shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The off-grid fill value.
    pub fn fill(&self) -> CellState {
        self.fill
    }

    /// Gather the neighbourhood of `(row, col)` from `grid`.
    pub fn extract(&self, grid: &Grid, row: u32, col: u32) -> Neighbourhood {
        let mut out = Neighbourhood::with_capacity(self.shape.len());
        self.extract_into(grid, row, col, &mut out);
        out
    }

    /// Like [`extract`](Self::extract), reusing `out`'s storage.
    pub fn extract_into(&self, grid: &Grid, row: u32, col: u32, out: &mut Neighbourhood) {
        out.values.clear();
        let (r, c) = (row as i32, col as i32);
        match self.shape {
            Shape::Linear => {
                for dc in -1..=1 {
                    out.values.push(grid.get_or(r, c.saturating_add(dc), self.fill));
                }
            }
            Shape::Moore => {
                for (dr, dc) in MOORE_OFFSETS {
                    out.values
                        .push(grid.get_or(r.saturating_add(dr), c.saturating_add(dc), self.fill));
                }
            }
            Shape::Square { side } => {
                let half = (side / 2) as i32;
                for dr in -half..=half {
                    for dc in -half..=half {
                        let state = grid.get_or(r.saturating_add(dr), c.saturating_add(dc), self.fill);
                        out.values.push(state);
                    }
                }
            }
        }
    }
}

/// The extracted states around one cell, in the shape's fixed order.
///
/// Windows of up to 9 cells (every shape except squares wider than 3)
/// are stored inline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighbourhood {
    values: SmallVec<[CellState; 9]>,
}

impl Neighbourhood {
    /// An empty buffer with room for `n` states.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            values: SmallVec::with_capacity(n),
        }
    }

    /// The states in extraction order.
    pub fn values(&self) -> &[CellState] {
        &self.values
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been extracted yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all state codes.
    pub fn sum(&self) -> u32 {
        self.values.iter().map(|&s| s as u32).sum()
    }

    /// Number of positions in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.values.iter().filter(|&&s| s == state).count()
    }

    /// Whether any position is in `state`.
    pub fn any(&self, state: CellState) -> bool {
        self.values.contains(&state)
    }
}

impl From<&[CellState]> for Neighbourhood {
    fn from(values: &[CellState]) -> Self {
        Self {
            values: SmallVec::from_slice(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbered(rows: u32, cols: u32) -> Grid {
        let cells = (0..rows * cols).map(|i| (i + 1) as u8).collect();
        Grid::from_cells(rows, cols, cells).unwrap()
    }

    // ── Linear window ───────────────────────────────────────────

    #[test]
    fn linear_interior_is_left_centre_right() {
        let grid = Grid::from_rows(&[[3, 4, 5, 6]]).unwrap();
        let n = NeighbourhoodSpec::linear().extract(&grid, 0, 2);
        assert_eq!(n.values(), &[4, 5, 6]);
    }

    #[test]
    fn linear_ends_read_fill() {
        let grid = Grid::from_rows(&[[3, 4, 5]]).unwrap();
        let spec = NeighbourhoodSpec::linear();
        assert_eq!(spec.extract(&grid, 0, 0).values(), &[0, 3, 4]);
        assert_eq!(spec.extract(&grid, 0, 2).values(), &[4, 5, 0]);
    }

    // ── Moore ring ──────────────────────────────────────────────

    #[test]
    fn moore_interior_excludes_centre() {
        let grid = numbered(3, 3);
        let n = NeighbourhoodSpec::moore().extract(&grid, 1, 1);
        assert_eq!(n.values(), &[1, 2, 3, 4, 6, 7, 8, 9]);
        assert!(!n.any(5));
    }

    #[test]
    fn moore_corner_fills_off_grid() {
        let grid = numbered(3, 3);
        let n = NeighbourhoodSpec::moore().extract(&grid, 0, 0);
        assert_eq!(n.values(), &[0, 0, 0, 0, 2, 0, 4, 5]);
        assert_eq!(n.count(0), 5);
    }

    #[test]
    fn moore_custom_fill() {
        let grid = Grid::new(1, 1).unwrap();
        let n = NeighbourhoodSpec::moore().with_fill(2).extract(&grid, 0, 0);
        assert_eq!(n.count(2), 8);
    }

    // ── Square window ───────────────────────────────────────────

    #[test]
    fn square_three_includes_centre() {
        let grid = numbered(3, 3);
        let spec = NeighbourhoodSpec::square(3).unwrap();
        let n = spec.extract(&grid, 1, 1);
        assert_eq!(n.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(n.sum(), 45);
    }

    #[test]
    fn square_one_is_centre_only() {
        let grid = numbered(2, 2);
        let n = NeighbourhoodSpec::square(1).unwrap().extract(&grid, 1, 0);
        assert_eq!(n.values(), &[3]);
    }

    #[test]
    fn square_five_spills_past_inline_capacity() {
        let grid = numbered(2, 2);
        let n = NeighbourhoodSpec::square(5).unwrap().extract(&grid, 0, 0);
        assert_eq!(n.len(), 25);
        assert_eq!(n.sum(), 1 + 2 + 3 + 4);
    }

    #[test]
    fn square_rejects_even_and_zero_sides() {
        assert_eq!(
            NeighbourhoodSpec::square(4),
            Err(SpaceError::InvalidWindow { side: 4 })
        );
        assert_eq!(
            NeighbourhoodSpec::square(0),
            Err(SpaceError::InvalidWindow { side: 0 })
        );
    }

    #[test]
    fn extract_into_reuses_buffer() {
        let grid = numbered(3, 3);
        let spec = NeighbourhoodSpec::moore();
        let mut buf = Neighbourhood::default();
        spec.extract_into(&grid, 0, 0, &mut buf);
        spec.extract_into(&grid, 2, 2, &mut buf);
        assert_eq!(buf.values(), &[5, 6, 0, 8, 0, 0, 0, 0]);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn extraction_length_matches_shape(
            rows in 1u32..7,
            cols in 1u32..7,
            r in 0u32..7,
            c in 0u32..7,
            half in 0u32..3,
        ) {
            let r = r % rows;
            let c = c % cols;
            let grid = numbered(rows, cols);
            for spec in [
                NeighbourhoodSpec::linear(),
                NeighbourhoodSpec::moore(),
                NeighbourhoodSpec::square(2 * half + 1).unwrap(),
            ] {
                prop_assert_eq!(spec.extract(&grid, r, c).len(), spec.shape().len());
            }
        }

        #[test]
        fn square_sum_matches_in_bounds_scan(
            rows in 1u32..7,
            cols in 1u32..7,
            r in 0u32..7,
            c in 0u32..7,
            half in 0u32..3,
        ) {
            let r = r % rows;
            let c = c % cols;
            let grid = numbered(rows, cols);
            let side = 2 * half + 1;
            let n = NeighbourhoodSpec::square(side).unwrap().extract(&grid, r, c);

            let h = half as i32;
            let mut expected = 0u32;
            for gr in 0..rows as i32 {
                for gc in 0..cols as i32 {
                    if (gr - r as i32).abs() <= h && (gc - c as i32).abs() <= h {
                        expected += grid.get(gr, gc) as u32;
                    }
                }
            }
            prop_assert_eq!(n.sum(), expected);
        }
    }
}
