//! Rasterizes node boxes into a walkable/blocked grid.

use edgeroute_core::{Point, Position, Range, WalkGrid};
use edgeroute_paths::{AstarPather, MovementPolicy, Pather, WeightedPather, push_neighbors};

use crate::bbox::{GraphBox, NodeBox};
use crate::error::{Endpoint, InputError};
use crate::transform::GridTransform;

/// The side of its node an edge endpoint is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HandleSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl HandleSide {
    /// Unit grid step pointing away from the node.
    pub fn step(self) -> Point {
        match self {
            Self::Top => Point::new(0, -1),
            Self::Right => Point::new(1, 0),
            Self::Bottom => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
        }
    }
}

/// One edge endpoint in diagram space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeEnd {
    pub position: Position,
    pub side: Option<HandleSide>,
}

/// A built grid plus the cells the search runs between.
#[derive(Debug, Clone)]
pub struct Occupancy {
    pub grid: WalkGrid,
    pub start: Point,
    pub end: Point,
    pub transform: GridTransform,
}

/// Build the occupancy grid for one edge.
///
/// The grid spans the graph box with one extra walkable cell on every side.
/// Every cell covered by a node box is blocked. The source and target cells
/// are then forced walkable. An endpoint with a [`HandleSide`] additionally
/// gets a walkable corridor carved outward from its cell until the corridor
/// meets an already walkable cell, and its search cell becomes the neighbor
/// one step outward.
pub fn build_grid(
    graph_box: &GraphBox,
    node_boxes: &[NodeBox],
    source: EdgeEnd,
    target: EdgeEnd,
    ratio: f64,
    max_cells: u64,
) -> Result<Occupancy, InputError> {
    let transform = GridTransform::new(graph_box.top_left(), ratio);
    // Sized in f64: a huge but finite diagram must hit the cap, not overflow.
    let columns = (graph_box.width() / ratio).ceil() + 2.0;
    let rows = (graph_box.height() / ratio).ceil() + 2.0;
    let fits = columns * rows <= max_cells as f64
        && columns <= f64::from(i32::MAX)
        && rows <= f64::from(i32::MAX);
    if !fits {
        // Float to int casts saturate, so this reports u64::MAX at worst.
        let (width, height) = (columns as u64, rows as u64);
        log::warn!("refusing {width}x{height} routing grid (limit {max_cells} cells)");
        return Err(InputError::GridTooLarge {
            width,
            height,
            max: max_cells,
        });
    }
    let (columns, rows) = (columns as i32, rows as i32);

    let mut grid = WalkGrid::new(columns, rows);
    for nb in node_boxes {
        let min = transform.aligned_cell(nb.top_left());
        let max = transform.aligned_cell(nb.bottom_right());
        grid.block(Range::new(min.x, min.y, max.x, max.y));
    }

    let start = open_endpoint(&mut grid, &transform, source, Endpoint::Source)?;
    let end = open_endpoint(&mut grid, &transform, target, Endpoint::Target)?;

    log::debug!(
        "occupancy grid {columns}x{rows}, {} blocked, start {start}, end {end}",
        grid.blocked_count()
    );
    log::trace!("occupancy grid:\n{grid}");

    Ok(Occupancy {
        grid,
        start,
        end,
        transform,
    })
}

/// Force an endpoint's cell walkable and return the cell the search uses.
fn open_endpoint(
    grid: &mut WalkGrid,
    transform: &GridTransform,
    endpoint: EdgeEnd,
    which: Endpoint,
) -> Result<Point, InputError> {
    let cell = transform.cell_of(endpoint.position);
    if !grid.contains(cell) {
        return Err(InputError::EndpointOutsideGrid {
            endpoint: which,
            position: endpoint.position,
            cell,
        });
    }
    grid.set_walkable(cell, true);

    let Some(side) = endpoint.side else {
        return Ok(cell);
    };
    let step = side.step();
    let mut p = cell + step;
    while grid.contains(p) && !grid.is_walkable(p) {
        grid.set_walkable(p, true);
        p = p + step;
    }
    let next = cell + step;
    if grid.contains(next) {
        grid.set_walkable(next, true);
        Ok(next)
    } else {
        Ok(cell)
    }
}

/// Pather over an occupancy grid under a movement policy.
pub struct GridPather<'a> {
    pub grid: &'a WalkGrid,
    pub policy: MovementPolicy,
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        push_neighbors(buf, self.policy, p, |n| self.grid.is_walkable(n));
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> f64 {
        self.policy.step_cost(from, to)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self.policy.heuristic(from, to)
    }
}
