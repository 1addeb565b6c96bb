//! Per-call routing configuration.

use edgeroute_paths::MovementPolicy;

use crate::error::InputError;
use crate::render::CurveStyle;

/// Default diagram pixels per grid cell.
pub const DEFAULT_GRID_RESOLUTION: f64 = 10.0;
/// Default margin kept around every node.
pub const DEFAULT_NODE_PADDING: f64 = 10.0;
/// Default cap on grid cells, bounding the cost of a single search.
pub const DEFAULT_MAX_GRID_CELLS: u64 = 1_000_000;

/// The three stock edge flavors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EdgePreset {
    /// Diagonal moves, smoothed curve.
    #[default]
    Bezier,
    /// Diagonal moves, polyline.
    Straight,
    /// Axis-aligned moves, polyline.
    Step,
}

/// Options for a single [`route`](crate::route()) call.
///
/// Resolution and padding are rounded to whole pixels before use; negative
/// values clamp to 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RouteOptions {
    /// Diagram pixels per grid cell side.
    pub grid_resolution: f64,
    /// Margin added around every node before rasterizing it.
    pub node_padding: f64,
    pub movement_policy: MovementPolicy,
    pub curve_style: CurveStyle,
    /// Largest grid (columns × rows) a call may allocate.
    pub max_grid_cells: u64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            grid_resolution: DEFAULT_GRID_RESOLUTION,
            node_padding: DEFAULT_NODE_PADDING,
            movement_policy: MovementPolicy::default(),
            curve_style: CurveStyle::default(),
            max_grid_cells: DEFAULT_MAX_GRID_CELLS,
        }
    }
}

impl RouteOptions {
    /// Default options with the movement policy and curve of `preset`.
    pub fn preset(preset: EdgePreset) -> Self {
        let (movement_policy, curve_style) = match preset {
            EdgePreset::Bezier => (MovementPolicy::Diagonal, CurveStyle::Smooth),
            EdgePreset::Straight => (MovementPolicy::Diagonal, CurveStyle::Straight),
            EdgePreset::Step => (MovementPolicy::Orthogonal, CurveStyle::Straight),
        };
        Self {
            movement_policy,
            curve_style,
            ..Self::default()
        }
    }

    pub fn with_grid_resolution(mut self, resolution: f64) -> Self {
        self.grid_resolution = resolution;
        self
    }

    pub fn with_node_padding(mut self, padding: f64) -> Self {
        self.node_padding = padding;
        self
    }

    pub fn with_movement_policy(mut self, policy: MovementPolicy) -> Self {
        self.movement_policy = policy;
        self
    }

    pub fn with_curve_style(mut self, style: CurveStyle) -> Self {
        self.curve_style = style;
        self
    }

    pub fn with_max_grid_cells(mut self, max: u64) -> Self {
        self.max_grid_cells = max;
        self
    }

    /// Grid resolution as a whole number of pixels, at least 1.
    pub(crate) fn resolution(&self) -> Result<f64, InputError> {
        let r = to_whole(self.grid_resolution);
        if r < 1.0 {
            return Err(InputError::ZeroGridResolution);
        }
        Ok(r)
    }

    /// Node padding as a whole, non-negative number of pixels.
    pub(crate) fn padding(&self) -> f64 {
        to_whole(self.node_padding)
    }
}

/// Round to the nearest integer, mapping negatives and NaN to 0.
fn to_whole(value: f64) -> f64 {
    let r = value.round();
    if r.is_nan() || r < 0.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = RouteOptions::default();
        assert_eq!(o.grid_resolution, 10.0);
        assert_eq!(o.node_padding, 10.0);
        assert_eq!(o.movement_policy, MovementPolicy::Diagonal);
        assert_eq!(o.curve_style, CurveStyle::Smooth);
        assert_eq!(o, RouteOptions::preset(EdgePreset::Bezier));
    }

    #[test]
    fn step_preset_is_orthogonal_polyline() {
        let o = RouteOptions::preset(EdgePreset::Step);
        assert_eq!(o.movement_policy, MovementPolicy::Orthogonal);
        assert_eq!(o.curve_style, CurveStyle::Straight);
        let o = RouteOptions::preset(EdgePreset::Straight);
        assert_eq!(o.movement_policy, MovementPolicy::Diagonal);
    }

    #[test]
    fn values_are_sanitized() {
        let o = RouteOptions::default()
            .with_grid_resolution(7.6)
            .with_node_padding(-3.0);
        assert_eq!(o.resolution(), Ok(8.0));
        assert_eq!(o.padding(), 0.0);
        assert_eq!(
            RouteOptions::default().with_grid_resolution(0.4).resolution(),
            Err(InputError::ZeroGridResolution)
        );
        assert_eq!(
            RouteOptions::default().with_grid_resolution(f64::NAN).resolution(),
            Err(InputError::ZeroGridResolution)
        );
    }
}
