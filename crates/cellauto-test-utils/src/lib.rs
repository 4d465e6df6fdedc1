//! Test fixtures and mock random sources for cellauto development.
//!
//! Grids are written as ASCII art ([`grid_from_art`]) so scenario tests
//! read like the patterns they check. [`FixedRng`] pins every random draw
//! to one value for exercising probabilistic branches deterministically.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use cellauto_core::CellState;
use cellauto_space::Grid;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Map one art character to a state code.
///
/// `.` `-` `=` `0` are 0, `+` `#` `1` are 1, `!` `2` are 2. Any other
/// digit maps to its value.
pub fn state_from_char(c: char) -> CellState {
    match c {
        '.' | '-' | '=' => 0,
        '+' | '#' => 1,
        '!' => 2,
        _ => match c.to_digit(10) {
            Some(d) => d as CellState,
            None => panic!("unrecognised grid art character {c:?}"),
        },
    }
}

/// Build a grid from equal-length lines of art. Panics on bad input.
pub fn grid_from_art(lines: &[&str]) -> Grid {
    let rows: Vec<Vec<CellState>> = lines
        .iter()
        .map(|line| line.chars().map(state_from_char).collect())
        .collect();
    Grid::from_rows(&rows).expect("grid art must be non-empty and rectangular")
}

/// Render a binary or three-state grid back to art using `.`, `#`, `!`.
pub fn grid_to_art(grid: &Grid) -> Vec<String> {
    grid.rows_iter()
        .map(|row| {
            row.iter()
                .map(|&s| match s {
                    0 => '.',
                    1 => '#',
                    2 => '!',
                    n => char::from_digit(u32::from(n), 36).unwrap_or('?'),
                })
                .collect()
        })
        .collect()
}

/// A seeded ChaCha8 source, the same generator the engine uses by default.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A random source that returns the same word forever.
///
/// `FixedRng::low()` makes every `gen::<f64>()` draw 0.0, so any
/// probability above zero fires. `FixedRng::high()` makes every draw just
/// below 1.0, so only probability 1.0 fires.
#[derive(Clone, Copy, Debug)]
pub struct FixedRng(pub u64);

impl FixedRng {
    pub fn low() -> Self {
        Self(0)
    }

    pub fn high() -> Self {
        Self(u64::MAX)
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for (i, b) in dest.iter_mut().enumerate() {
            *b = bytes[i % 8];
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn art_round_trips_through_grid() {
        let art = ["#.!", "..#"];
        let grid = grid_from_art(&art);
        assert_eq!(grid.dims(), (2, 3));
        assert_eq!(grid.as_slice(), &[1, 0, 2, 0, 0, 1]);
        assert_eq!(grid_to_art(&grid), vec!["#.!", "..#"]);
    }

    #[test]
    fn forest_glyphs_parse() {
        let grid = grid_from_art(&["=+!"]);
        assert_eq!(grid.as_slice(), &[0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "rectangular")]
    fn ragged_art_panics() {
        grid_from_art(&["##", "#"]);
    }

    #[test]
    fn fixed_rng_extremes() {
        assert_eq!(FixedRng::low().gen::<f64>(), 0.0);
        let high: f64 = FixedRng::high().gen();
        assert!(high < 1.0 && high > 0.999);
    }
}
