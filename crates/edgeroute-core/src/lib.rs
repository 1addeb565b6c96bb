//! **edgeroute-core**: geometry primitives and occupancy grids.
//!
//! This crate provides the foundational types shared across the *edgeroute*
//! crates: integer grid coordinates ([`Point`], [`Range`]), continuous
//! diagram coordinates ([`Position`], [`Rect`]) and the walkable-cell
//! [`WalkGrid`] that pathfinding runs on.

pub mod geom;
pub mod grid;

pub use geom::{Point, Position, Range, RangeIter, Rect};
pub use grid::WalkGrid;
