use std::f64::consts::SQRT_2;

use edgeroute_core::Point;

use crate::distance::{manhattan, octile};

/// Orthogonal neighbor offsets: ↑, →, ↓, ←.
const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Diagonal neighbor offsets: ↗, ↘, ↙, ↖.
const DIAGONAL: [Point; 4] = [
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Whether diagonal moves are allowed during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MovementPolicy {
    /// Only the four axis-aligned neighbors; Manhattan heuristic.
    Orthogonal,
    /// All eight neighbors, diagonals costing √2; octile heuristic.
    #[default]
    Diagonal,
}

impl MovementPolicy {
    /// Cost of a single step between adjacent cells: 1 orthogonally, √2
    /// diagonally.
    #[inline]
    pub fn step_cost(self, from: Point, to: Point) -> f64 {
        if from.is_diagonal_to(to) { SQRT_2 } else { 1.0 }
    }

    /// Admissible and consistent distance estimate for this movement model.
    #[inline]
    pub fn heuristic(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Orthogonal => f64::from(manhattan(from, to)),
            Self::Diagonal => octile(from, to),
        }
    }
}

/// Append the neighbors of `p` permitted by `policy` into `buf`, keeping only
/// those for which `keep` returns `true`.
///
/// Orthogonal neighbors always come first (↑ → ↓ ←), then the diagonals
/// (↗ ↘ ↙ ↖) under [`MovementPolicy::Diagonal`].
pub fn push_neighbors(
    buf: &mut Vec<Point>,
    policy: MovementPolicy,
    p: Point,
    keep: impl Fn(Point) -> bool,
) {
    push_kept(buf, p, &CARDINAL, &keep);
    if policy == MovementPolicy::Diagonal {
        push_kept(buf, p, &DIAGONAL, &keep);
    }
}

fn push_kept(buf: &mut Vec<Point>, p: Point, dirs: &[Point], keep: &impl Fn(Point) -> bool) {
    for &d in dirs {
        let n = p + d;
        if keep(n) {
            buf.push(n);
        }
    }
}
