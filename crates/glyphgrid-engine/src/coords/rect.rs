use super::{CellPoint, CellSize, Vec2};

/// Inclusive rectangle of grid cells: both `right` and `bottom` are inside.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CellRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl CellRect {
    /// Rectangle covering `width × height` cells from `(x, y)`.
    /// `None` when either extent is zero.
    pub fn from_extent(x: usize, y: usize, width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            left: x,
            top: y,
            right: x + width - 1,
            bottom: y + height - 1,
        })
    }

    #[inline]
    pub fn width(self) -> usize {
        self.right - self.left + 1
    }

    #[inline]
    pub fn height(self) -> usize {
        self.bottom - self.top + 1
    }

    /// Inclusive containment: `[left, right] × [top, bottom]`.
    #[inline]
    pub fn contains(self, p: CellPoint) -> bool {
        p.col >= self.left && p.col <= self.right && p.row >= self.top && p.row <= self.bottom
    }

    /// Position of `p` relative to the rectangle's top-left cell.
    pub fn local(self, p: CellPoint) -> Option<CellPoint> {
        self.contains(p).then(|| CellPoint::new(p.col - self.left, p.row - self.top))
    }

    /// Pixel origin and size of the rectangle.
    pub fn to_pixels(self, size: CellSize) -> (Vec2, Vec2) {
        let origin = size.origin_of(CellPoint::new(self.left, self.top));
        let extent = size.origin_of(CellPoint::new(self.width(), self.height()));
        (origin, extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: usize, y: usize, w: usize, h: usize) -> CellRect {
        CellRect::from_extent(x, y, w, h).unwrap()
    }

    #[test]
    fn from_extent_is_inclusive() {
        let rect = r(2, 1, 3, 2);
        assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (2, 1, 4, 2));
        assert_eq!((rect.width(), rect.height()), (3, 2));
    }

    #[test]
    fn zero_extent_has_no_rect() {
        assert!(CellRect::from_extent(0, 0, 0, 1).is_none());
        assert!(CellRect::from_extent(0, 0, 1, 0).is_none());
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_corners() {
        let rect = r(2, 1, 3, 2);
        assert!(rect.contains(CellPoint::new(2, 1)));
        assert!(rect.contains(CellPoint::new(4, 2)));
    }

    #[test]
    fn contains_outside() {
        let rect = r(2, 1, 3, 2);
        assert!(!rect.contains(CellPoint::new(5, 2)));
        assert!(!rect.contains(CellPoint::new(2, 3)));
        assert!(!rect.contains(CellPoint::new(1, 1)));
    }

    #[test]
    fn local_offsets() {
        let rect = r(2, 1, 3, 2);
        assert_eq!(rect.local(CellPoint::new(3, 2)), Some(CellPoint::new(1, 1)));
        assert_eq!(rect.local(CellPoint::new(0, 0)), None);
    }

    #[test]
    fn to_pixels_scales() {
        let (origin, size) = r(2, 1, 3, 2).to_pixels(CellSize::new(10, 20));
        assert_eq!(origin, Vec2::new(20.0, 20.0));
        assert_eq!(size, Vec2::new(30.0, 40.0));
    }
}
