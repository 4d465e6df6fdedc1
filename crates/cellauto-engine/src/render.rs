//! Render hook and the reference text renderer.
//!
//! The driver hands each committed grid to a [`Renderer`]; what happens to
//! it (console, GUI, recording for tests) is up to the implementation.

use cellauto_core::StepId;
use cellauto_rules::Glyphs;
use cellauto_space::Grid;

/// Receives the grid after initialisation and after every committed step.
pub trait Renderer {
    /// Consume one frame. `grid` is the committed grid for `step`.
    fn render(&mut self, step: StepId, grid: &Grid, glyphs: &dyn Glyphs);
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _step: StepId, _grid: &Grid, _glyphs: &dyn Glyphs) {}
}

/// Keeps an owned copy of every frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<(StepId, Grid)>,
}

impl RecordingRenderer {
    /// An empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames in the order they were rendered.
    pub fn frames(&self) -> &[(StepId, Grid)] {
        &self.frames
    }

    /// The most recent frame's grid.
    pub fn last(&self) -> Option<&Grid> {
        self.frames.last().map(|(_, g)| g)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, step: StepId, grid: &Grid, _glyphs: &dyn Glyphs) {
        self.frames.push((step, grid.snapshot()));
    }
}

/// Accumulates frames as console text.
///
/// Each frame is a `Step N` header (unless disabled), one line per row with
/// every cell drawn as its glyph followed by a space, and a blank line.
///
/// ```
/// use cellauto_core::StepId;
/// use cellauto_engine::{Renderer, TextRenderer};
/// use cellauto_rules::LifeRule;
/// use cellauto_space::Grid;
///
/// let grid = Grid::from_rows(&[[0, 1], [1, 0]]).unwrap();
/// let mut text = TextRenderer::new();
/// text.render(StepId(1), &grid, &LifeRule);
/// assert_eq!(text.as_str(), "Step 1\n- + \n+ - \n\n");
/// ```
#[derive(Clone, Debug)]
pub struct TextRenderer {
    out: String,
    header: bool,
}

impl TextRenderer {
    /// A renderer that writes `Step N` headers.
    pub fn new() -> Self {
        Self {
            out: String::new(),
            header: true,
        }
    }

    /// A renderer that writes grid rows only.
    pub fn without_header() -> Self {
        Self {
            out: String::new(),
            header: false,
        }
    }

    /// Everything rendered so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take the accumulated text.
    pub fn into_string(self) -> String {
        self.out
    }

    /// Discard accumulated text.
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Format one grid without a header or trailing blank line.
    pub fn grid_text(grid: &Grid, glyphs: &dyn Glyphs) -> String {
        let mut out = String::with_capacity(grid.cell_count() * 2 + grid.rows() as usize);
        for row in grid.rows_iter() {
            for &cell in row {
                out.push(glyphs.glyph(cell));
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, step: StepId, grid: &Grid, glyphs: &dyn Glyphs) {
        if self.header {
            self.out.push_str(&format!("Step {step}\n"));
        }
        self.out.push_str(&Self::grid_text(grid, glyphs));
        self.out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellauto_rules::ForestFireRule;

    #[test]
    fn forest_glyphs_in_text() {
        let grid = Grid::from_rows(&[[0, 1, 2]]).unwrap();
        let rule = ForestFireRule::new(0.5, 0.0).unwrap();
        assert_eq!(TextRenderer::grid_text(&grid, &rule), "= + ! \n");
    }

    #[test]
    fn frames_accumulate() {
        let grid = Grid::from_rows(&[[1, 0]]).unwrap();
        let rule = cellauto_rules::ElementaryRule::new(90).unwrap();
        let mut text = TextRenderer::without_header();
        text.render(StepId(0), &grid, &rule);
        text.render(StepId(1), &grid, &rule);
        assert_eq!(text.as_str(), "1 0 \n\n1 0 \n\n");
        text.clear();
        assert!(text.as_str().is_empty());
    }

    #[test]
    fn recording_keeps_independent_copies() {
        let mut grid = Grid::from_rows(&[[1, 0]]).unwrap();
        let rule = cellauto_rules::LifeRule::new();
        let mut rec = RecordingRenderer::new();
        rec.render(StepId(0), &grid, &rule);
        grid.fill(0);
        rec.render(StepId(1), &grid, &rule);
        assert_eq!(rec.frames().len(), 2);
        assert_eq!(rec.frames()[0].1.as_slice(), &[1, 0]);
        assert_eq!(rec.last().map(Grid::as_slice), Some(&[0, 0][..]));
    }
}
