//! # Mesh Module
//!
//! Persistent-value mesh containers for meshing output.
//!
//! ## Structure
//!
//! - `Quad` / `Triangle` - pure value face types, no identity
//! - `ImmutableMesh` - persistent collections of faces, points, segments
//! - `indexed` - deduplicated vertex/face representation for export
//!
//! ## Example
//!
//! ```rust
//! use prism_mesh::{ImmutableMesh, Quad, Vec3};
//!
//! let mesh = ImmutableMesh::new();
//! let quad = Quad::new(
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(1.0, 1.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! );
//! let next = mesh.add_quad(quad);
//! assert_eq!(mesh.quads.len(), 0);
//! assert_eq!(next.quads.len(), 1);
//! ```

pub mod indexed;

use serde::{Deserialize, Serialize};

use crate::core::segment::Segment3D;
use crate::core::vec3::Vec3;

// =============================================================================
// FACE TYPES
// =============================================================================

/// A quadrilateral face: four ordered vertices plus an optional quality
/// score assigned by the cap-quality pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    /// First vertex.
    pub a: Vec3,
    /// Second vertex.
    pub b: Vec3,
    /// Third vertex.
    pub c: Vec3,
    /// Fourth vertex.
    pub d: Vec3,
    /// Shape quality in `[0, 1]`, when scored.
    pub quality: Option<f64>,
}

impl Quad {
    /// Creates an unscored quad.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        Self {
            a,
            b,
            c,
            d,
            quality: None,
        }
    }

    /// Returns this quad carrying a quality score.
    #[must_use]
    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = Some(quality);
        self
    }

    /// The four vertices in order.
    #[must_use]
    pub fn vertices(&self) -> [Vec3; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Surface area, as the sum of the two diagonal-split triangles.
    #[must_use]
    pub fn area(&self) -> f64 {
        Triangle::new(self.a, self.b, self.c).area() + Triangle::new(self.a, self.c, self.d).area()
    }

    /// Splits along the `a-c` diagonal into two triangles.
    #[must_use]
    pub fn split(&self) -> (Triangle, Triangle) {
        (
            Triangle::new(self.a, self.b, self.c),
            Triangle::new(self.a, self.c, self.d),
        )
    }
}

/// A triangular face: three ordered vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex.
    pub a: Vec3,
    /// Second vertex.
    pub b: Vec3,
    /// Third vertex.
    pub c: Vec3,
}

impl Triangle {
    /// Creates a triangle.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Surface area.
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.b - self.a).cross(self.c - self.a).length() / 2.0
    }
}

// =============================================================================
// IMMUTABLE MESH
// =============================================================================

/// Persistent-value mesh: every mutator returns a new instance.
///
/// Structural equality is deep sequence comparison over all four
/// collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImmutableMesh {
    /// Quadrilateral faces.
    pub quads: Vec<Quad>,
    /// Triangular faces.
    pub triangles: Vec<Triangle>,
    /// Auxiliary free points.
    pub points: Vec<Vec3>,
    /// Internal 3D segments.
    pub internal_segments: Vec<Segment3D>,
}

impl ImmutableMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new mesh with the quad appended.
    #[must_use]
    pub fn add_quad(&self, quad: Quad) -> Self {
        let mut next = self.clone();
        next.quads.push(quad);
        next
    }

    /// Returns a new mesh with the triangle appended.
    #[must_use]
    pub fn add_triangle(&self, triangle: Triangle) -> Self {
        let mut next = self.clone();
        next.triangles.push(triangle);
        next
    }

    /// Returns a new mesh with the point appended.
    #[must_use]
    pub fn add_point(&self, point: Vec3) -> Self {
        let mut next = self.clone();
        next.points.push(point);
        next
    }

    /// Returns a new mesh with the internal segment appended.
    #[must_use]
    pub fn add_internal_segment(&self, segment: Segment3D) -> Self {
        let mut next = self.clone();
        next.internal_segments.push(segment);
        next
    }

    /// Returns a new mesh containing both meshes' contents.
    #[must_use]
    pub fn merge(&self, other: &ImmutableMesh) -> Self {
        let mut next = self.clone();
        next.quads.extend_from_slice(&other.quads);
        next.triangles.extend_from_slice(&other.triangles);
        next.points.extend_from_slice(&other.points);
        next.internal_segments
            .extend_from_slice(&other.internal_segments);
        next
    }

    /// Total face count (quads + triangles).
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.quads.len() + self.triangles.len()
    }

    /// True when the mesh carries no geometry at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
            && self.triangles.is_empty()
            && self.points.is_empty()
            && self.internal_segments.is_empty()
    }
}

#[cfg(test)]
mod tests;
