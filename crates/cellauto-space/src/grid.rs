//! Row-major 2D cell grid with fixed dimensions.

use crate::error::SpaceError;
use cellauto_core::CellState;

/// State returned for positions outside the grid.
pub const BOUNDARY_FILL: CellState = 0;

/// A `rows x cols` matrix of cell states, stored row-major.
///
/// Dimensions are fixed at construction. The only way to change the whole
/// grid is [`commit`](Grid::commit), which swaps in a replacement of the
/// same shape; a one-dimensional automaton uses a single-row grid.
///
/// Reads through [`get`](Grid::get) accept signed coordinates and resolve
/// anything off-grid to [`BOUNDARY_FILL`], so neighbourhood code never has
/// to special-case edges.
///
/// # Examples
///
/// ```
/// use cellauto_space::Grid;
///
/// let mut grid = Grid::new(3, 4).unwrap();
/// grid.set(1, 2, 1).unwrap();
/// assert_eq!(grid.get(1, 2), 1);
/// assert_eq!(grid.get(-1, 2), 0); // off-grid reads the fill value
/// assert_eq!(grid.count(1), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a zero-filled grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![0; (rows as usize) * (cols as usize)],
        })
    }

    /// Create a grid from a row-major cell buffer of length `rows * cols`.
    pub fn from_cells(rows: u32, cols: u32, cells: Vec<CellState>) -> Result<Self, SpaceError> {
        check_dims(rows, cols)?;
        let expected = (rows as usize) * (cols as usize);
        if cells.len() != expected {
            return Err(SpaceError::CellCountMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid from nested rows. Every row must have the same length.
    ///
    /// ```
    /// use cellauto_space::Grid;
    ///
    /// let grid = Grid::from_rows(&[[0, 1, 0], [1, 1, 1]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 3));
    /// assert_eq!(grid.row(1), Some(&[1, 1, 1][..]));
    /// ```
    pub fn from_rows<R: AsRef<[CellState]>>(rows: &[R]) -> Result<Self, SpaceError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(SpaceError::RaggedRows {
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        let n_rows = u32::try_from(rows.len()).map_err(|_| SpaceError::DimensionTooLarge {
            name: "rows",
            value: u32::MAX,
            max: Self::MAX_DIM,
        })?;
        let n_cols = u32::try_from(width).map_err(|_| SpaceError::DimensionTooLarge {
            name: "cols",
            value: u32::MAX,
            max: Self::MAX_DIM,
        })?;
        Self::from_cells(n_rows, n_cols, cells)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    /// State at `(row, col)`, or `None` if off-grid.
    pub fn cell(&self, row: i32, col: i32) -> Option<CellState> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// State at `(row, col)`, or [`BOUNDARY_FILL`] if off-grid.
    pub fn get(&self, row: i32, col: i32) -> CellState {
        self.get_or(row, col, BOUNDARY_FILL)
    }

    /// State at `(row, col)`, or `fill` if off-grid.
    pub fn get_or(&self, row: i32, col: i32, fill: CellState) -> CellState {
        self.cell(row, col).unwrap_or(fill)
    }

    /// Overwrite one cell.
    ///
    /// Used for explicit seeding before a run; evolution replaces the grid
    /// wholesale through [`commit`](Grid::commit) instead.
    pub fn set(&mut self, row: i32, col: i32, state: CellState) -> Result<(), SpaceError> {
        let i = self
            .index(row, col)
            .ok_or(SpaceError::CoordOutOfBounds {
                coord: (row, col),
                bounds: (self.rows, self.cols),
            })?;
        self.cells[i] = state;
        Ok(())
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// An owned copy of the current contents.
    ///
    /// The copy shares nothing with the live buffer, so it stays valid
    /// across later commits.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Replace the whole grid with `next`, discarding the old buffer.
    ///
    /// Fails without modifying `self` if `next` has different dimensions.
    pub fn commit(&mut self, next: Grid) -> Result<(), SpaceError> {
        if next.dims() != self.dims() {
            return Err(SpaceError::DimensionMismatch {
                expected: self.dims(),
                got: next.dims(),
            });
        }
        *self = next;
        Ok(())
    }

    /// Build a grid of the same shape, cell by cell, in row-major order.
    ///
    /// `f` receives `(row, col, current_state)` and returns the new state.
    /// `self` is only read, so every call sees the same generation.
    pub fn next_generation(&self, mut f: impl FnMut(u32, u32, CellState) -> CellState) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let current = self.cells[(row as usize) * (self.cols as usize) + col as usize];
                cells.push(f(row, col, current));
            }
        }
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Row `r` as a slice, or `None` if `r >= rows`.
    pub fn row(&self, r: u32) -> Option<&[CellState]> {
        if r >= self.rows {
            return None;
        }
        let start = (r as usize) * (self.cols as usize);
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Iterate over rows top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.cols as usize)
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Number of cells whose state differs between `self` and `other`.
    ///
    /// Grids of different dimensions compare cell-by-cell over the shorter
    /// buffer; callers only compare grids of one automaton.
    pub fn diff_count(&self, other: &Grid) -> usize {
        self.cells
            .iter()
            .zip(&other.cells)
            .filter(|(a, b)| a != b)
            .count()
    }
}

fn check_dims(rows: u32, cols: u32) -> Result<(), SpaceError> {
    if rows == 0 || cols == 0 {
        return Err(SpaceError::EmptySpace);
    }
    if rows > Grid::MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: Grid::MAX_DIM,
        });
    }
    if cols > Grid::MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: Grid::MAX_DIM,
        });
    }
    Ok(())
}
