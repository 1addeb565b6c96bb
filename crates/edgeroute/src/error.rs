//! Error types for edge routing.

use edgeroute_core::{Point, Position};
use thiserror::Error;

/// Why a [`route`](crate::route()) call produced no path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// The search frontier was exhausted before reaching the end cell.
    #[error("no path found from grid cell {start} to {end}")]
    NoPathFound { start: Point, end: Point },

    #[error("invalid routing input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Inputs rejected before a grid is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("no nodes to build a routing grid from")]
    NoNodes,

    #[error("{what} is not a finite number")]
    NonFinite { what: String },

    #[error("grid resolution must be at least 1")]
    ZeroGridResolution,

    #[error("routing grid of {width}x{height} cells exceeds the limit of {max} cells")]
    GridTooLarge { width: u64, height: u64, max: u64 },

    #[error("{endpoint} endpoint {position} maps to grid cell {cell} outside the routing grid")]
    EndpointOutsideGrid {
        endpoint: Endpoint,
        position: Position,
        cell: Point,
    },
}

/// Which end of the edge an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}
