//! Flat point-cloud arrays for presentation consumers.
use crate::coverage::engine::CoverageRun;

/// Positions, colors, and widths shaped for a GPU point-cloud renderer.
///
/// The arrays are parallel: index `i` in each refers to the same sample, in
/// the run's emitter-major order. The crate performs no rendering; consumers
/// upload these as-is.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    /// Sample positions as `[x, y, z]`.
    pub positions: Vec<[f32; 3]>,
    /// Sample colors as `[r, g, b]` with channels in `[0, 1]`.
    pub colors: Vec<[f32; 3]>,
    /// Per-point width, filled from the run's configured point size.
    pub widths: Vec<f32>,
}

impl PointCloud {
    /// Build flat arrays from a run.
    pub fn from_run(run: &CoverageRun) -> Self {
        let mut positions = Vec::with_capacity(run.points.len());
        let mut colors = Vec::with_capacity(run.points.len());

        for point in &run.points {
            positions.push(point.position.to_array());
            colors.push(point.color.to_array());
        }

        Self {
            positions,
            colors,
            widths: vec![run.config.point_size; run.points.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
