//! A* pathfinding over 2D grids.
//!
//! The search itself lives on [`PathRange`], which owns the per-cell search
//! metadata as a side-table so the grid being searched is never mutated:
//!
//! - **A\*** shortest-path search ([`PathRange::astar_path`]) with a stable,
//!   first-opened tie-break
//! - **Movement policies** ([`MovementPolicy`]): 4-directional with a
//!   Manhattan heuristic, or 8-directional with an octile heuristic
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |

mod astar;
mod distance;
mod neighbors;
mod pathrange;
mod traits;

pub use distance::{manhattan, octile};
pub use neighbors::{MovementPolicy, push_neighbors};
pub use pathrange::PathRange;
pub use traits::{AstarPather, Pather, WeightedPather};
