//! **edgeroute**: obstacle-aware edge routing for node-link diagrams.
//!
//! Given an edge's source and target positions and the rectangles of every
//! node on the diagram, [`route`] finds a path that goes around the nodes and
//! returns it as SVG path data together with a label anchor.
//!
//! A call runs these stages, each usable on its own:
//!
//! 1. [`bounding_boxes`]: pad every node and compute the enclosing graph box.
//! 2. [`build_grid`]: rasterize the node boxes into an occupancy grid and open
//!    the endpoints.
//! 3. A* over the grid ([`PathRange::astar_path`]) under a [`MovementPolicy`].
//! 4. Map the cells back through the [`GridTransform`] and draw them with the
//!    [`CurveStyle`]'s [`PathDrawer`].
//!
//! ```
//! use edgeroute::{DiagramNode, Position, RouteInput, RouteOptions, route};
//!
//! let input = RouteInput::new(
//!     Position::new(120.0, 25.0),
//!     Position::new(280.0, 25.0),
//!     vec![
//!         DiagramNode::new("a", 0.0, 0.0, 100.0, 50.0),
//!         DiagramNode::new("b", 300.0, 0.0, 100.0, 50.0),
//!     ],
//! );
//! let r = route(&input, &RouteOptions::default()).unwrap();
//! assert!(r.path_string.starts_with("M120,25"));
//! assert_eq!(r.midpoint, Position::new(200.0, 30.0));
//! ```

pub mod bbox;
pub mod debug;
pub mod error;
pub mod occupancy;
pub mod options;
pub mod render;
pub mod route;
pub mod transform;

pub use bbox::{BoundingBoxes, DiagramNode, GraphBox, NodeBox, bounding_boxes};
pub use debug::{DebugBox, DebugPublisher, DebugSink};
pub use error::{Endpoint, InputError, RoutingError};
pub use occupancy::{EdgeEnd, GridPather, HandleSide, Occupancy, build_grid};
pub use options::{EdgePreset, RouteOptions};
pub use render::{CurveStyle, PathDrawer, SmoothDrawer, StraightDrawer};
pub use route::{Route, RouteInput, route, route_with_debug};
pub use transform::GridTransform;

pub use edgeroute_core::{Point, Position, Range, Rect, WalkGrid};
pub use edgeroute_paths::{MovementPolicy, PathRange};
