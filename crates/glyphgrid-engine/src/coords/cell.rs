use super::Vec2;

/// A grid cell position: `col` counts right, `row` counts down.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CellPoint {
    pub col: usize,
    pub row: usize,
}

impl CellPoint {
    #[inline]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Size of one grid cell in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellSize {
    pub w: u32,
    pub h: u32,
}

impl CellSize {
    #[inline]
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Cell under a pixel position. `None` for positions left of or above the
    /// grid, non-finite positions, or a zero cell size.
    pub fn cell_at(self, p: Vec2) -> Option<CellPoint> {
        if self.w == 0 || self.h == 0 || !p.is_finite() || p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let col = (p.x / self.w as f32).floor() as usize;
        let row = (p.y / self.h as f32).floor() as usize;
        Some(CellPoint::new(col, row))
    }

    /// Pixel position of a cell's top-left corner.
    #[inline]
    pub fn origin_of(self, cell: CellPoint) -> Vec2 {
        Vec2::new((cell.col as u64 * self.w as u64) as f32, (cell.row as u64 * self.h as u64) as f32)
    }
}
