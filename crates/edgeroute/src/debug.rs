//! Side channel exposing each computed graph box to an observer.

use crate::bbox::GraphBox;

/// A graph box in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&GraphBox> for DebugBox {
    fn from(g: &GraphBox) -> Self {
        Self {
            x: g.x_min(),
            y: g.y_min(),
            width: g.width(),
            height: g.height(),
        }
    }
}

/// Receives debug boxes.
pub trait DebugSink {
    fn publish(&mut self, graph_box: DebugBox);
}

impl<F: FnMut(DebugBox)> DebugSink for F {
    fn publish(&mut self, graph_box: DebugBox) {
        self(graph_box)
    }
}

/// Forwards boxes to a sink, skipping any box equal to the last one sent.
pub struct DebugPublisher<S> {
    sink: S,
    last: Option<DebugBox>,
}

impl<S: DebugSink> DebugPublisher<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, last: None }
    }

    /// The most recently forwarded box.
    pub fn last(&self) -> Option<DebugBox> {
        self.last
    }

    /// Forward `graph_box` unless it repeats the previous one. Returns
    /// whether the sink was called.
    pub fn publish(&mut self, graph_box: DebugBox) -> bool {
        if self.last == Some(graph_box) {
            return false;
        }
        self.last = Some(graph_box);
        self.sink.publish(graph_box);
        true
    }
}
