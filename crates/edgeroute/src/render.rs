//! Serializes a routed path as SVG path data.

use std::fmt::Write;

use edgeroute_core::Position;

/// How the routed points are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurveStyle {
    /// Quadratic Bézier chain rounding every corner.
    #[default]
    Smooth,
    /// Polyline through every point.
    Straight,
}

impl CurveStyle {
    pub fn drawer(self) -> &'static dyn PathDrawer {
        match self {
            Self::Smooth => &SmoothDrawer,
            Self::Straight => &StraightDrawer,
        }
    }
}

/// Turns the true endpoints and the routed diagram-space points between them
/// into SVG path data.
pub trait PathDrawer {
    fn draw(&self, source: Position, target: Position, points: &[Position]) -> String;
}

/// `M source L p0 L p1 … L target`, each command as `"{cmd} {x}, {y} "`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightDrawer;

impl PathDrawer for StraightDrawer {
    fn draw(&self, source: Position, target: Position, points: &[Position]) -> String {
        let mut out = String::with_capacity(16 * (points.len() + 2));
        push_line_cmd(&mut out, 'M', source);
        for &p in points {
            push_line_cmd(&mut out, 'L', p);
        }
        push_line_cmd(&mut out, 'L', target);
        out
    }
}

/// Rounds corners with quadratic Béziers.
///
/// Over the control sequence `[source, points…, target]`, segment `i` uses
/// control point `c[i]` and ends at the midpoint of `c[i]` and `c[i + 1]`.
/// A final line lands exactly on `target`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothDrawer;

impl PathDrawer for SmoothDrawer {
    fn draw(&self, source: Position, target: Position, points: &[Position]) -> String {
        let controls: Vec<Position> = std::iter::once(source)
            .chain(points.iter().copied())
            .chain(std::iter::once(target))
            .collect();

        let mut out = String::with_capacity(24 * controls.len());
        push_cmd(&mut out, 'M', source);
        for pair in controls.windows(2) {
            let end = pair[0].midpoint(pair[1]);
            out.push(' ');
            push_cmd(&mut out, 'Q', pair[0]);
            out.push(' ');
            push_xy(&mut out, end);
        }
        out.push(' ');
        push_cmd(&mut out, 'L', target);
        out
    }
}

// Writing to a String cannot fail. Adding 0.0 turns -0 into 0.

fn push_line_cmd(out: &mut String, cmd: char, p: Position) {
    let _ = write!(out, "{cmd} {}, {} ", p.x + 0.0, p.y + 0.0);
}

fn push_cmd(out: &mut String, cmd: char, p: Position) {
    out.push(cmd);
    push_xy(out, p);
}

fn push_xy(out: &mut String, p: Position) {
    let _ = write!(out, "{},{}", p.x + 0.0, p.y + 0.0);
}

/// Label anchor: the routed point at index `len / 2`, or `None` for an empty
/// path.
pub fn midpoint(points: &[Position]) -> Option<Position> {
    points.get(points.len() / 2).copied()
}
