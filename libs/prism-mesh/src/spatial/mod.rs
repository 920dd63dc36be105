//! Grid-based spatial polygon index.
//!
//! Precomputes a fixed-resolution grid over a polygon's (slightly expanded)
//! bounding box, classifying every cell as inside, outside, or boundary.
//! Queries stay exact: `is_inside` always falls back to ray casting, so the
//! grid is a classification cache for reuse and diagnostics rather than a
//! hot-path shortcut. An index snapshots its polygon at construction and is
//! immutable afterward; build a fresh index per polygon instance.

use config::constants::{SPATIAL_BBOX_MARGIN, SPATIAL_GRID_RESOLUTION};

use crate::core::polygon::Polygon2D;
use crate::core::segment::Segment2D;
use crate::core::vec2::Vec2;

// =============================================================================
// CELL CLASSIFICATION
// =============================================================================

/// Classification of a grid cell against the indexed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// All sampled points of the cell lie inside the polygon.
    Inside,
    /// All sampled points lie outside and no polygon edge touches the cell.
    Outside,
    /// The cell straddles the polygon boundary.
    Boundary,
}

// =============================================================================
// SPATIAL POLYGON INDEX
// =============================================================================

/// Precomputed point-containment index for one polygon.
///
/// ## Example
///
/// ```rust
/// use prism_mesh::{Polygon2D, SpatialPolygonIndex, Vec2};
///
/// let poly = Polygon2D::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(10.0, 0.0),
///     Vec2::new(10.0, 10.0),
///     Vec2::new(0.0, 10.0),
/// ])?;
/// let index = SpatialPolygonIndex::build(&poly, 1e-10);
/// assert!(index.is_inside(Vec2::new(5.0, 5.0)));
/// assert!(!index.is_inside(Vec2::new(20.0, 5.0)));
/// # Ok::<(), prism_mesh::MesherError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpatialPolygonIndex {
    polygon: Polygon2D,
    min: Vec2,
    max: Vec2,
    resolution: usize,
    cells: Vec<CellClass>,
    epsilon: f64,
}

impl SpatialPolygonIndex {
    /// Builds an index over a snapshot of the polygon.
    ///
    /// The bounding box is expanded by 1% per side to avoid boundary
    /// classification artifacts, then partitioned into a fixed grid
    /// (default 64 x 64).
    #[must_use]
    pub fn build(polygon: &Polygon2D, epsilon: f64) -> Self {
        Self::build_with_resolution(polygon, epsilon, SPATIAL_GRID_RESOLUTION)
    }

    /// Builds an index with an explicit grid resolution.
    #[must_use]
    pub fn build_with_resolution(polygon: &Polygon2D, epsilon: f64, resolution: usize) -> Self {
        let resolution = resolution.max(1);
        let (bb_min, bb_max) = polygon.bounding_box();
        let extent = bb_max - bb_min;
        let margin = Vec2::new(
            (extent.x * SPATIAL_BBOX_MARGIN).max(epsilon),
            (extent.y * SPATIAL_BBOX_MARGIN).max(epsilon),
        );
        let min = bb_min - margin;
        let max = bb_max + margin;

        let polygon = polygon.clone();
        let cell = (max - min) / resolution as f64;
        let mut cells = Vec::with_capacity(resolution * resolution);
        for iy in 0..resolution {
            for ix in 0..resolution {
                let lo = min + Vec2::new(ix as f64 * cell.x, iy as f64 * cell.y);
                let hi = lo + cell;
                cells.push(classify_cell(&polygon, lo, hi, epsilon));
            }
        }

        Self {
            polygon,
            min,
            max,
            resolution,
            cells,
            epsilon,
        }
    }

    /// Exact point-containment query.
    ///
    /// 1. Rejects points outside the margined bounding box.
    /// 2. Points within tolerance of a polygon edge count as inside.
    /// 3. Otherwise falls back to exact ray casting against the full
    ///    vertex list, unconditionally.
    #[must_use]
    pub fn is_inside(&self, p: Vec2) -> bool {
        if p.x < self.min.x || p.x > self.max.x || p.y < self.min.y || p.y > self.max.y {
            return false;
        }

        let edge_tolerance = self.epsilon.max(1e-12);
        for edge in self.polygon.edges() {
            if edge.distance_to_point(p) <= edge_tolerance {
                return true;
            }
        }

        self.polygon.contains_point(p)
    }

    /// Cached classification of the grid cell containing the point.
    ///
    /// `None` for points outside the margined bounding box. This is a
    /// diagnostic/reuse surface; `is_inside` does not consult it.
    #[must_use]
    pub fn classification(&self, p: Vec2) -> Option<CellClass> {
        if p.x < self.min.x || p.x > self.max.x || p.y < self.min.y || p.y > self.max.y {
            return None;
        }
        let cell = (self.max - self.min) / self.resolution as f64;
        let ix = (((p.x - self.min.x) / cell.x) as usize).min(self.resolution - 1);
        let iy = (((p.y - self.min.y) / cell.y) as usize).min(self.resolution - 1);
        Some(self.cells[iy * self.resolution + ix])
    }

    /// The margined bounding box as `(min, max)`.
    #[must_use]
    pub fn bounding_box(&self) -> (Vec2, Vec2) {
        (self.min, self.max)
    }

    /// Grid resolution per axis.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }
}

/// Classifies one cell by sampling its four corners and center, plus an
/// edge-overlap check to distinguish `Outside` from `Boundary`.
fn classify_cell(polygon: &Polygon2D, lo: Vec2, hi: Vec2, epsilon: f64) -> CellClass {
    let samples = [
        lo,
        Vec2::new(hi.x, lo.y),
        hi,
        Vec2::new(lo.x, hi.y),
        (lo + hi) / 2.0,
    ];
    let inside_count = samples
        .iter()
        .filter(|&&p| polygon.contains_point(p))
        .count();

    if inside_count == samples.len() {
        return CellClass::Inside;
    }
    if inside_count == 0 {
        let crossed = polygon
            .edges()
            .any(|edge: Segment2D| edge.intersects_rect(lo, hi, epsilon));
        if !crossed {
            return CellClass::Outside;
        }
    }
    CellClass::Boundary
}

#[cfg(test)]
mod tests;
