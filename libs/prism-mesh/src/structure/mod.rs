//! Prism structure definition.
//!
//! A `PrismStructureDefinition` is the immutable description of what gets
//! meshed: one footprint polygon, an elevation range, interior holes,
//! constraint segments pinned to elevations, free injected geometry, and
//! internal surfaces. Every `add_*` operation returns a new instance, so a
//! definition is never aliased between its pre- and post-mutation states.

use serde::{Deserialize, Serialize};

use crate::core::polygon::Polygon2D;
use crate::core::segment::{Segment2D, Segment3D};
use crate::core::vec3::Vec3;
use crate::error::{MesherError, MesherResult};

// =============================================================================
// MESHING GEOMETRY
// =============================================================================

/// Free-form geometry injected into the mesh: points and 3D segments.
///
/// Points and segments pass through to the output mesh unchanged; their Z
/// coordinates additionally become mandatory levels for side-face
/// subdivision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshingGeometry {
    /// Free points carried into the output mesh.
    pub points: Vec<Vec3>,
    /// Free 3D segments carried into the output mesh.
    pub segments: Vec<Segment3D>,
}

impl MeshingGeometry {
    /// Creates an empty geometry bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new bag with the point appended.
    #[must_use]
    pub fn add_point(&self, point: Vec3) -> Self {
        let mut next = self.clone();
        next.points.push(point);
        next
    }

    /// Returns a new bag with the segment appended.
    #[must_use]
    pub fn add_segment(&self, segment: Segment3D) -> Self {
        let mut next = self.clone();
        next.segments.push(segment);
        next
    }
}

// =============================================================================
// INTERNAL SURFACE
// =============================================================================

/// A horizontal interior plate at a fixed elevation, independent of the
/// prism's extrusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalSurface {
    /// Outline of the plate.
    pub outline: Polygon2D,
    /// The single elevation the plate occupies.
    pub elevation: f64,
}

impl InternalSurface {
    /// Creates an internal surface.
    pub fn new(outline: Polygon2D, elevation: f64) -> Self {
        Self { outline, elevation }
    }
}

// =============================================================================
// CONSTRAINT SEGMENT
// =============================================================================

/// A 2D segment tagged with a mandatory elevation.
///
/// The elevation must appear as a mesh level; the segment's 2D extent also
/// drives segment-band refinement in the rectangle cap path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSegment {
    /// Planar extent of the constraint.
    pub segment: Segment2D,
    /// Elevation pinned by the constraint, within the structure's range.
    pub z: f64,
}

// =============================================================================
// PRISM STRUCTURE DEFINITION
// =============================================================================

/// Immutable description of a prism to be meshed.
///
/// ## Example
///
/// ```rust
/// use prism_mesh::{Polygon2D, PrismStructureDefinition, Vec2};
///
/// let footprint = Polygon2D::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(10.0, 0.0),
///     Vec2::new(10.0, 10.0),
///     Vec2::new(0.0, 10.0),
/// ])?;
/// let hole = Polygon2D::new(vec![
///     Vec2::new(4.0, 4.0),
///     Vec2::new(6.0, 4.0),
///     Vec2::new(6.0, 6.0),
///     Vec2::new(4.0, 6.0),
/// ])?;
///
/// let base = PrismStructureDefinition::new(footprint, 0.0, 3.0)?;
/// let with_hole = base.add_hole(hole);
/// assert_eq!(base.holes.len(), 0);
/// assert_eq!(with_hole.holes.len(), 1);
/// # Ok::<(), prism_mesh::MesherError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrismStructureDefinition {
    /// Outer footprint polygon.
    pub footprint: Polygon2D,
    /// Base elevation of the extrusion.
    pub base_elevation: f64,
    /// Top elevation of the extrusion; strictly greater than the base.
    pub top_elevation: f64,
    /// Interior hole polygons. Assumed (not asserted) to lie inside the
    /// footprint.
    pub holes: Vec<Polygon2D>,
    /// Constraint segments with mandatory elevations.
    pub constraint_segments: Vec<ConstraintSegment>,
    /// Free injected geometry.
    pub geometry: MeshingGeometry,
    /// Internal surfaces at fixed elevations.
    pub internal_surfaces: Vec<InternalSurface>,
}

impl PrismStructureDefinition {
    /// Creates a prism from a footprint and an elevation range.
    ///
    /// ## Errors
    ///
    /// `InvalidStructure` when `top <= base`.
    pub fn new(footprint: Polygon2D, base_elevation: f64, top_elevation: f64) -> MesherResult<Self> {
        if !(top_elevation > base_elevation) {
            return Err(MesherError::InvalidStructure(format!(
                "top elevation ({top_elevation}) must be greater than base elevation ({base_elevation})"
            )));
        }
        Ok(Self {
            footprint,
            base_elevation,
            top_elevation,
            holes: Vec::new(),
            constraint_segments: Vec::new(),
            geometry: MeshingGeometry::new(),
            internal_surfaces: Vec::new(),
        })
    }

    /// Returns a new definition with the hole appended.
    ///
    /// The hole is assumed to lie inside the footprint; this is not
    /// asserted.
    #[must_use]
    pub fn add_hole(&self, hole: Polygon2D) -> Self {
        let mut next = self.clone();
        next.holes.push(hole);
        next
    }

    /// Returns a new definition with a constraint segment appended.
    ///
    /// ## Errors
    ///
    /// `InvalidStructure` when `z` lies outside `[base, top]`.
    pub fn add_constraint_segment(&self, segment: Segment2D, z: f64) -> MesherResult<Self> {
        if z < self.base_elevation || z > self.top_elevation {
            return Err(MesherError::InvalidStructure(format!(
                "constraint elevation {z} outside [{}, {}]",
                self.base_elevation, self.top_elevation
            )));
        }
        let mut next = self.clone();
        next.constraint_segments.push(ConstraintSegment { segment, z });
        Ok(next)
    }

    /// Returns a new definition with the geometry bag replaced.
    #[must_use]
    pub fn with_geometry(&self, geometry: MeshingGeometry) -> Self {
        let mut next = self.clone();
        next.geometry = geometry;
        next
    }

    /// Returns a new definition with an internal surface appended.
    #[must_use]
    pub fn add_internal_surface(&self, surface: InternalSurface) -> Self {
        let mut next = self.clone();
        next.internal_surfaces.push(surface);
        next
    }

    /// Extrusion height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top_elevation - self.base_elevation
    }
}

#[cfg(test)]
mod tests;
