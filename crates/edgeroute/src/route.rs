//! The routing entry point.

use edgeroute_core::{Point, Position};
use edgeroute_paths::PathRange;

use crate::bbox::{BoundingBoxes, DiagramNode, GraphBox, bounding_boxes};
use crate::debug::{DebugBox, DebugPublisher, DebugSink};
use crate::error::{InputError, RoutingError};
use crate::occupancy::{EdgeEnd, GridPather, HandleSide, build_grid};
use crate::options::RouteOptions;
use crate::render;

/// One edge to route and the nodes it must avoid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteInput {
    pub source: Position,
    pub target: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub source_side: Option<HandleSide>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_side: Option<HandleSide>,
    pub nodes: Vec<DiagramNode>,
}

impl RouteInput {
    pub fn new(source: Position, target: Position, nodes: Vec<DiagramNode>) -> Self {
        Self {
            source,
            target,
            source_side: None,
            target_side: None,
            nodes,
        }
    }

    pub fn with_source_side(mut self, side: HandleSide) -> Self {
        self.source_side = Some(side);
        self
    }

    pub fn with_target_side(mut self, side: HandleSide) -> Self {
        self.target_side = Some(side);
        self
    }
}

/// A routed edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Route {
    /// SVG path data from the true source to the true target.
    pub path_string: String,
    /// Label anchor in diagram space.
    pub midpoint: Position,
    /// Grid cells visited, start to end inclusive.
    pub cells: Vec<Point>,
    /// `cells` mapped back to diagram space.
    pub points: Vec<Position>,
}

/// Route one edge around `input.nodes`.
///
/// Pure: no state survives the call, so edges may be routed in any order or
/// in parallel.
pub fn route(input: &RouteInput, options: &RouteOptions) -> Result<Route, RoutingError> {
    compute(input, options).map(|(route, _)| route)
}

/// [`route`], then hand the graph box to `debug` if routing succeeded.
pub fn route_with_debug<S: DebugSink>(
    input: &RouteInput,
    options: &RouteOptions,
    debug: &mut DebugPublisher<S>,
) -> Result<Route, RoutingError> {
    let (route, graph_box) = compute(input, options)?;
    debug.publish(DebugBox::from(&graph_box));
    Ok(route)
}

fn compute(input: &RouteInput, options: &RouteOptions) -> Result<(Route, GraphBox), RoutingError> {
    let ratio = options.resolution()?;
    let padding = options.padding();
    for (what, p) in [("source", input.source), ("target", input.target)] {
        if !p.is_finite() {
            return Err(InputError::NonFinite {
                what: format!("{what} position"),
            }
            .into());
        }
    }

    let BoundingBoxes {
        node_boxes,
        graph_box,
    } = bounding_boxes(&input.nodes, padding, ratio)?;

    let occupancy = build_grid(
        &graph_box,
        &node_boxes,
        EdgeEnd {
            position: input.source,
            side: input.source_side,
        },
        EdgeEnd {
            position: input.target,
            side: input.target_side,
        },
        ratio,
        options.max_grid_cells,
    )?;

    let (start, end) = (occupancy.start, occupancy.end);
    let mut range = PathRange::new(occupancy.grid.bounds());
    let pather = GridPather {
        grid: &occupancy.grid,
        policy: options.movement_policy,
    };
    let Some(cells) = range.astar_path(&pather, start, end) else {
        log::debug!(
            "no route {} -> {} after {} expansions",
            input.source,
            input.target,
            range.expanded()
        );
        return Err(RoutingError::NoPathFound { start, end });
    };

    let points: Vec<Position> = cells
        .iter()
        .map(|&c| occupancy.transform.cell_to_diagram(c))
        .collect();
    let Some(midpoint) = render::midpoint(&points) else {
        return Err(RoutingError::NoPathFound { start, end });
    };
    let path_string = options
        .curve_style
        .drawer()
        .draw(input.source, input.target, &points);

    log::debug!(
        "routed {} -> {}: {} cells, cost {:.3}, {} expansions",
        input.source,
        input.target,
        cells.len(),
        range.astar_cost(end).unwrap_or(f64::NAN),
        range.expanded()
    );

    Ok((
        Route {
            path_string,
            midpoint,
            cells,
            points,
        },
        graph_box,
    ))
}
