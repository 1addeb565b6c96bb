//! Padded, grid-aligned node rectangles and the box enclosing the diagram.

use edgeroute_core::{Position, Rect};

use crate::error::InputError;

/// A node as laid out on the diagram: top-left anchored position plus its
/// measured size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagramNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DiagramNode {
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// The node's raw rectangle, with each dimension clamped to at least 1px.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.x, self.y, self.width.max(1.0), self.height.max(1.0))
    }
}

/// A node's rectangle grown by the padding and rounded outward to the grid
/// grain, so the rasterized obstacle always covers the whole node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub id: String,
    /// Measured width, clamped to at least 1px.
    pub width: f64,
    /// Measured height, clamped to at least 1px.
    pub height: f64,
    pub rect: Rect,
}

impl NodeBox {
    pub fn top_left(&self) -> Position {
        self.rect.top_left()
    }

    pub fn top_right(&self) -> Position {
        self.rect.top_right()
    }

    pub fn bottom_left(&self) -> Position {
        self.rect.bottom_left()
    }

    pub fn bottom_right(&self) -> Position {
        self.rect.bottom_right()
    }
}

/// Union of every [`NodeBox`] plus a further margin; the routing grid's
/// extent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphBox {
    pub rect: Rect,
}

impl GraphBox {
    pub fn x_min(&self) -> f64 {
        self.rect.min.x
    }

    pub fn x_max(&self) -> f64 {
        self.rect.max.x
    }

    pub fn y_min(&self) -> f64 {
        self.rect.min.y
    }

    pub fn y_max(&self) -> f64 {
        self.rect.max.y
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    pub fn top_left(&self) -> Position {
        self.rect.top_left()
    }
}

/// Output of [`bounding_boxes`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBoxes {
    pub node_boxes: Vec<NodeBox>,
    pub graph_box: GraphBox,
}

/// Round `value` down to a multiple of `grain`. A grain of 0 leaves it as is.
#[inline]
pub fn round_down(value: f64, grain: f64) -> f64 {
    if grain > 0.0 { (value / grain).floor() * grain } else { value }
}

/// Round `value` up to a multiple of `grain`. A grain of 0 leaves it as is.
#[inline]
pub fn round_up(value: f64, grain: f64) -> f64 {
    if grain > 0.0 { (value / grain).ceil() * grain } else { value }
}

/// Round `value` to the nearest multiple of `grain`, halves away from zero.
#[inline]
pub fn round_to(value: f64, grain: f64) -> f64 {
    if grain > 0.0 { (value / grain).round() * grain } else { value }
}

/// Build the padded box of every node and the enclosing graph box.
///
/// Each node rectangle grows by `padding` on every side; its top/left edges
/// then round down and its bottom/right edges round up to `grain`. The graph
/// box is the extent of all node boxes, grown by `2 * padding` and rounded
/// outward the same way.
pub fn bounding_boxes(
    nodes: &[DiagramNode],
    padding: f64,
    grain: f64,
) -> Result<BoundingBoxes, InputError> {
    let mut extent: Option<Rect> = None;
    let mut node_boxes = Vec::with_capacity(nodes.len());

    for node in nodes {
        if ![node.x, node.y, node.width, node.height].iter().all(|v| v.is_finite()) {
            return Err(InputError::NonFinite {
                what: format!("geometry of node {:?}", node.id),
            });
        }
        let raw = node.rect();
        let padded = raw.expand(padding);
        let rect = Rect::new(
            round_down(padded.min.x, grain),
            round_down(padded.min.y, grain),
            round_up(padded.max.x, grain),
            round_up(padded.max.y, grain),
        );
        extent = Some(extent.map_or(rect, |e| e.union(rect)));
        node_boxes.push(NodeBox {
            id: node.id.clone(),
            width: raw.width(),
            height: raw.height(),
            rect,
        });
    }

    let extent = extent.ok_or(InputError::NoNodes)?;
    let margin = padding * 2.0;
    let graph_box = GraphBox {
        rect: Rect::new(
            round_down(extent.min.x - margin, grain),
            round_down(extent.min.y - margin, grain),
            round_up(extent.max.x + margin, grain),
            round_up(extent.max.y + margin, grain),
        ),
    };

    Ok(BoundingBoxes {
        node_boxes,
        graph_box,
    })
}
