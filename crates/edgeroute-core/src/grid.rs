//! The [`WalkGrid`] type: a 2D occupancy grid of walkable/blocked cells.
//!
//! Unlike a shared-buffer view, a `WalkGrid` owns its storage outright: each
//! routing call builds one, searches it, and drops it.

use std::fmt;

use crate::geom::{Point, Range};

/// A rectangular grid of walkable flags, addressed by [`Point`] from `(0, 0)`.
///
/// Points outside the grid are never walkable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkGrid {
    cells: Vec<bool>,
    bounds: Range,
}

impl WalkGrid {
    /// Create a new grid of the given dimensions with every cell walkable.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![true; (w as usize) * (h as usize)],
            bounds: Range::new(0, 0, w, h),
        }
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }

    /// Whether the cell at `p` is walkable. Out-of-bounds cells are not.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// Set the walkable flag at `p`. No-op if `p` is outside bounds.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i] = walkable;
        }
    }

    /// Mark every cell of `rng` that lies inside the grid as blocked and
    /// return how many cells that covered.
    pub fn block(&mut self, rng: Range) -> usize {
        let clipped = self.bounds.intersect(rng);
        for p in clipped.iter() {
            self.set_walkable(p, false);
        }
        clipped.len()
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&w| !w).count()
    }

    /// Row-major iterator over `(Point, walkable)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.bounds.iter().map(|p| (p, self.is_walkable(p)))
    }
}

impl fmt::Display for WalkGrid {
    /// One text row per grid row, `.` for walkable and `#` for blocked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let ch = if self.is_walkable(Point::new(x, y)) { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
            if y + 1 < self.height() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_walkable() {
        let g = WalkGrid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert!(g.iter().all(|(_, w)| w));
        assert_eq!(g.blocked_count(), 0);
    }

    #[test]
    fn out_of_bounds_is_blocked() {
        let mut g = WalkGrid::new(2, 2);
        assert!(!g.is_walkable(Point::new(-1, 0)));
        assert!(!g.is_walkable(Point::new(2, 0)));
        g.set_walkable(Point::new(5, 5), true);
        assert!(!g.is_walkable(Point::new(5, 5)));
    }

    #[test]
    fn block_clips_to_bounds() {
        let mut g = WalkGrid::new(4, 4);
        let covered = g.block(Range::new(2, 2, 10, 10));
        assert_eq!(covered, 4);
        assert_eq!(g.blocked_count(), 4);
        assert!(!g.is_walkable(Point::new(3, 3)));
        assert!(g.is_walkable(Point::new(1, 1)));
    }

    #[test]
    fn set_walkable_reopens_cell() {
        let mut g = WalkGrid::new(3, 3);
        g.block(Range::new(0, 0, 3, 3));
        g.set_walkable(Point::new(1, 1), true);
        assert!(g.is_walkable(Point::new(1, 1)));
        assert_eq!(g.blocked_count(), 8);
    }

    #[test]
    fn display_draws_rows() {
        let mut g = WalkGrid::new(3, 2);
        g.set_walkable(Point::new(1, 0), false);
        assert_eq!(g.to_string(), ".#.\n...");
    }

    #[test]
    fn negative_size_is_empty() {
        let g = WalkGrid::new(-3, 2);
        assert_eq!(g.bounds().len(), 0);
        assert!(!g.is_walkable(Point::new(0, 0)));
    }
}
