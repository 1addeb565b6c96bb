use std::f64::consts::SQRT_2;

use edgeroute_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Octile distance: shortest path length when diagonal steps cost √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = f64::from((a.x - b.x).abs());
    let dy = f64::from((a.y - b.y).abs());
    (SQRT_2 - 1.0) * dx.min(dy) + dx.max(dy)
}
