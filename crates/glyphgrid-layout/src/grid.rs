use crate::error::{ErrorKind, ParseError};
use crate::entity::EntityKind;
use crate::glyph::{is_entity_marker, marker_kind, BLANK};

// ── GridDims ──────────────────────────────────────────────────────────────

/// Grid size in cells.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GridDims {
    pub width: usize,
    pub height: usize,
}

impl GridDims {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Derive dimensions from the layout text itself.
    ///
    /// The grid is every line up to the first property line (one containing
    /// `->`); its width is the longest of those lines in characters. Used by
    /// tooling that has no configuration file to read the real size from.
    pub fn infer(src: &str) -> Self {
        let grid_lines: Vec<&str> = src.lines().take_while(|l| !l.contains("->")).collect();
        let width = grid_lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Self { width, height: grid_lines.len() }
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.width * self.height
    }
}

// ── Marker ────────────────────────────────────────────────────────────────

/// An unconsumed entity marker found by [`Grid::find_marker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub row: usize,
    pub col: usize,
    pub kind: EntityKind,
}

// ── Grid ──────────────────────────────────────────────────────────────────

/// Fixed-size character grid, addressed by `(row, col)`.
///
/// Each cell carries a *consumed* flag next to its raw character. Walkers
/// consume the cells they trace; a consumed cell reads as [`BLANK`] through
/// [`Grid::glyph`] and is never reported as a marker again, while
/// [`Grid::get`] keeps returning the authored character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: GridDims,
    cells: Vec<char>,
    consumed: Vec<bool>,
}

impl Grid {
    /// A blank grid. The dimensions never change afterwards.
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            cells: vec![BLANK; dims.cell_count()],
            consumed: vec![false; dims.cell_count()],
        }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, ParseError> {
        if row >= self.dims.height || col >= self.dims.width {
            return Err(ParseError::at_cell(ErrorKind::OutOfBounds { row, col }, row, col));
        }
        Ok(row * self.dims.width + col)
    }

    /// Raw character at `(row, col)`, consumed or not.
    pub fn get(&self, row: usize, col: usize) -> Result<char, ParseError> {
        let i = self.index(row, col)?;
        Ok(self.cells[i])
    }

    /// Write a character. The cell becomes unconsumed.
    pub fn set(&mut self, row: usize, col: usize, ch: char) -> Result<(), ParseError> {
        let i = self.index(row, col)?;
        self.cells[i] = ch;
        self.consumed[i] = false;
        Ok(())
    }

    /// Character as the walkers see it: consumed cells read as blank.
    pub fn glyph(&self, row: usize, col: usize) -> Result<char, ParseError> {
        let i = self.index(row, col)?;
        Ok(if self.consumed[i] { BLANK } else { self.cells[i] })
    }

    pub fn consume(&mut self, row: usize, col: usize) -> Result<(), ParseError> {
        let i = self.index(row, col)?;
        self.consumed[i] = true;
        Ok(())
    }

    pub fn is_consumed(&self, row: usize, col: usize) -> Result<bool, ParseError> {
        let i = self.index(row, col)?;
        Ok(self.consumed[i])
    }

    /// Reset every cell to blank and unconsumed.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
        self.consumed.fill(false);
    }

    /// Copy the first `height` lines into the grid, at most `width` characters
    /// each, starting at column 0. Cells past the end of a short line keep
    /// their current content. Returns how many lines were taken.
    pub fn fill_from_lines<'a, I>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut taken = 0;
        for (row, line) in lines.into_iter().take(self.dims.height).enumerate() {
            for (col, ch) in line.chars().take(self.dims.width).enumerate() {
                let i = row * self.dims.width + col;
                self.cells[i] = ch;
                self.consumed[i] = false;
            }
            taken += 1;
        }
        taken
    }

    /// First unconsumed marker glyph in row-major order.
    pub fn find_marker(&self) -> Option<Marker> {
        self.cells
            .iter()
            .zip(&self.consumed)
            .enumerate()
            .find_map(|(i, (&ch, &used))| {
                if used {
                    return None;
                }
                let kind = marker_kind(ch)?;
                Some(Marker { row: i / self.dims.width, col: i % self.dims.width, kind })
            })
    }

    /// Number of unconsumed marker glyphs left in the grid.
    pub fn marker_count(&self) -> usize {
        self.cells
            .iter()
            .zip(&self.consumed)
            .filter(|&(&ch, &used)| !used && is_entity_marker(ch))
            .count()
    }

    /// The visible grid as text, one string per row, consumed cells blanked.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.dims.height)
            .map(|row| {
                let start = row * self.dims.width;
                (start..start + self.dims.width)
                    .map(|i| if self.consumed[i] { BLANK } else { self.cells[i] })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: usize, h: usize) -> Grid { Grid::new(GridDims::new(w, h)) }

    // ── access ────────────────────────────────────────────────────────────

    #[test]
    fn new_grid_is_blank() {
        let g = grid(3, 2);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(g.get(row, col).unwrap(), ' ');
            }
        }
    }

    #[test]
    fn set_then_get() {
        let mut g = grid(3, 2);
        g.set(1, 2, 'x').unwrap();
        assert_eq!(g.get(1, 2).unwrap(), 'x');
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut g = grid(3, 2);
        let e = g.get(2, 0).unwrap_err();
        assert_eq!(e.kind, ErrorKind::OutOfBounds { row: 2, col: 0 });
        assert!(g.set(0, 3, 'x').is_err());
        assert!(g.consume(5, 5).is_err());
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn fill_truncates_long_lines_and_pads_short_ones() {
        let mut g = grid(4, 2);
        let taken = g.fill_from_lines(["abcdef", "xy"]);
        assert_eq!(taken, 2);
        assert_eq!(g.to_lines(), vec!["abcd".to_string(), "xy  ".to_string()]);
    }

    #[test]
    fn fill_leaves_extra_lines_alone() {
        let mut g = grid(2, 1);
        let lines = ["ab", "cd", "ef"];
        assert_eq!(g.fill_from_lines(lines), 1);
        assert_eq!(g.to_lines(), vec!["ab".to_string()]);
    }

    #[test]
    fn fill_with_fewer_lines_than_rows() {
        let mut g = grid(2, 3);
        assert_eq!(g.fill_from_lines(["ab"]), 1);
        assert_eq!(g.get(2, 1).unwrap(), ' ');
    }

    // ── consumption ───────────────────────────────────────────────────────

    #[test]
    fn consumed_cell_reads_blank_but_keeps_raw_char() {
        let mut g = grid(2, 1);
        g.set(0, 0, '+').unwrap();
        g.consume(0, 0).unwrap();
        assert_eq!(g.glyph(0, 0).unwrap(), ' ');
        assert_eq!(g.get(0, 0).unwrap(), '+');
        assert!(g.is_consumed(0, 0).unwrap());
    }

    #[test]
    fn find_marker_is_row_major_and_skips_consumed() {
        let mut g = grid(4, 2);
        g.fill_from_lines(["  ( ", "[   "]);
        assert_eq!(g.find_marker(), Some(Marker { row: 0, col: 2, kind: EntityKind::Button }));
        g.consume(0, 2).unwrap();
        assert_eq!(g.find_marker(), Some(Marker { row: 1, col: 0, kind: EntityKind::Field }));
        assert_eq!(g.marker_count(), 1);
        g.consume(1, 0).unwrap();
        assert_eq!(g.find_marker(), None);
    }

    #[test]
    fn clear_resets_cells_and_flags() {
        let mut g = grid(1, 1);
        g.set(0, 0, '{').unwrap();
        g.consume(0, 0).unwrap();
        g.clear();
        assert_eq!(g.get(0, 0).unwrap(), ' ');
        assert!(!g.is_consumed(0, 0).unwrap());
    }

    // ── infer ─────────────────────────────────────────────────────────────

    #[test]
    fn infer_stops_at_first_property_line() {
        let dims = GridDims::infer("[ab]\n+--+ x\nab -> x=1\n");
        assert_eq!(dims, GridDims::new(6, 2));
    }

    #[test]
    fn infer_empty_source() {
        assert_eq!(GridDims::infer(""), GridDims::new(0, 0));
    }
}
