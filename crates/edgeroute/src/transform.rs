//! Affine mapping between diagram space and grid space.
//!
//! The graph box's top-left corner lands on grid cell `(1, 1)`, leaving row 0
//! and column 0 as a walkable border.

use edgeroute_core::{Point, Position};

use crate::bbox::round_to;

/// Diagram → grid: `(p - origin) / ratio + 1`.
#[inline]
pub fn to_grid(p: Position, origin_x: f64, origin_y: f64, ratio: f64) -> Position {
    Position::new((p.x - origin_x) / ratio + 1.0, (p.y - origin_y) / ratio + 1.0)
}

/// Grid → diagram: `(p - 1) * ratio + origin`. Exact inverse of [`to_grid`].
#[inline]
pub fn to_diagram(p: Position, origin_x: f64, origin_y: f64, ratio: f64) -> Position {
    Position::new((p.x - 1.0) * ratio + origin_x, (p.y - 1.0) * ratio + origin_y)
}

/// A fixed origin and ratio, with helpers for whole grid cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransform {
    pub origin: Position,
    pub ratio: f64,
}

impl GridTransform {
    pub fn new(origin: Position, ratio: f64) -> Self {
        Self { origin, ratio }
    }

    #[inline]
    pub fn to_grid(&self, p: Position) -> Position {
        to_grid(p, self.origin.x, self.origin.y, self.ratio)
    }

    #[inline]
    pub fn to_diagram(&self, p: Position) -> Position {
        to_diagram(p, self.origin.x, self.origin.y, self.ratio)
    }

    /// The grid cell a diagram point falls on after snapping it to the
    /// nearest multiple of the ratio.
    pub fn cell_of(&self, p: Position) -> Point {
        let snapped = Position::new(round_to(p.x, self.ratio), round_to(p.y, self.ratio));
        let g = self.to_grid(snapped);
        Point::new(g.x.round() as i32, g.y.round() as i32)
    }

    /// The grid cell whose corner sits at an already grid-aligned diagram
    /// point.
    pub fn aligned_cell(&self, p: Position) -> Point {
        let g = self.to_grid(p);
        Point::new(g.x.round() as i32, g.y.round() as i32)
    }

    /// Diagram position of a grid cell.
    #[inline]
    pub fn cell_to_diagram(&self, cell: Point) -> Position {
        self.to_diagram(Position::new(f64::from(cell.x), f64::from(cell.y)))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;

    #[test]
    fn origin_maps_to_cell_one() {
        let t = GridTransform::new(Position::new(-30.0, -80.0), 10.0);
        assert_eq!(t.to_grid(Position::new(-30.0, -80.0)), Position::new(1.0, 1.0));
        assert_eq!(t.cell_to_diagram(Point::new(0, 0)), Position::new(-40.0, -90.0));
        assert_eq!(t.aligned_cell(Position::new(110.0, 60.0)), Point::new(15, 15));
    }

    #[test]
    fn snapping_rounds_to_nearest_cell() {
        let t = GridTransform::new(Position::new(-30.0, -30.0), 10.0);
        assert_eq!(t.cell_of(Position::new(100.0, 25.0)), Point::new(14, 7));
        assert_eq!(t.cell_of(Position::new(104.9, 24.9)), Point::new(14, 6));
        assert_eq!(t.cell_of(Position::new(-30.0, -30.0)), Point::new(1, 1));
    }

    #[test]
    fn round_trip_is_identity() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let p = Position::new(rng.random_range(-1e4..1e4), rng.random_range(-1e4..1e4));
            let ox = rng.random_range(-1e3..1e3);
            let oy = rng.random_range(-1e3..1e3);
            let ratio = f64::from(rng.random_range(1..50));
            let back = to_diagram(to_grid(p, ox, oy, ratio), ox, oy, ratio);
            assert!((back.x - p.x).abs() < 1e-9, "{p} -> {back}");
            assert!((back.y - p.y).abs() < 1e-9, "{p} -> {back}");
        }
    }

    #[test]
    fn lattice_round_trip_is_exact() {
        let t = GridTransform::new(Position::new(-40.0, 20.0), 10.0);
        for x in -5..30 {
            for y in -5..30 {
                let cell = Point::new(x, y);
                assert_eq!(t.aligned_cell(t.cell_to_diagram(cell)), cell);
            }
        }
    }
}
