//! Indexed mesh conversion.
//!
//! Converts an [`ImmutableMesh`](crate::mesh::ImmutableMesh) into a
//! deduplicated vertex array plus integer-indexed faces, the representation
//! exporters consume. Vertices are welded when they quantize to the same
//! epsilon-sized cell, so coordinates that the core produced exact-equal
//! modulo epsilon always share one index (no missed welds, no spurious
//! splits).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;
use crate::mesh::ImmutableMesh;

/// Deduplicated, integer-indexed mesh representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexedMesh {
    /// Deduplicated vertex positions.
    pub vertices: Vec<Vec3>,
    /// Quad faces as vertex-index 4-tuples.
    pub quads: Vec<[u32; 4]>,
    /// Triangle faces as vertex-index 3-tuples.
    pub triangles: Vec<[u32; 3]>,
    /// Indices of auxiliary free points.
    pub points: Vec<u32>,
    /// Internal segments as vertex-index pairs.
    pub segments: Vec<[u32; 2]>,
}

impl IndexedMesh {
    /// Builds an indexed mesh from a value mesh, welding vertices within
    /// `epsilon`.
    #[must_use]
    pub fn from_mesh(mesh: &ImmutableMesh, epsilon: f64) -> Self {
        let mut welder = VertexWelder::new(epsilon);
        let mut indexed = Self::default();

        for quad in &mesh.quads {
            let [a, b, c, d] = quad.vertices();
            indexed.quads.push([
                welder.index_of(a, &mut indexed.vertices),
                welder.index_of(b, &mut indexed.vertices),
                welder.index_of(c, &mut indexed.vertices),
                welder.index_of(d, &mut indexed.vertices),
            ]);
        }
        for tri in &mesh.triangles {
            indexed.triangles.push([
                welder.index_of(tri.a, &mut indexed.vertices),
                welder.index_of(tri.b, &mut indexed.vertices),
                welder.index_of(tri.c, &mut indexed.vertices),
            ]);
        }
        for &point in &mesh.points {
            let idx = welder.index_of(point, &mut indexed.vertices);
            indexed.points.push(idx);
        }
        for segment in &mesh.internal_segments {
            indexed.segments.push([
                welder.index_of(segment.a, &mut indexed.vertices),
                welder.index_of(segment.b, &mut indexed.vertices),
            ]);
        }

        indexed
    }

    /// Builds an indexed mesh with the default weld tolerance.
    #[must_use]
    pub fn from_mesh_default(mesh: &ImmutableMesh) -> Self {
        Self::from_mesh(mesh, config::constants::VERTEX_WELD_EPSILON)
    }

    /// Number of deduplicated vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Counts edges shared by other than exactly two faces.
    ///
    /// Zero means the face set forms a closed 2-manifold surface. Edges
    /// are undirected; degenerate (self-loop) edges from collapsed quads
    /// are skipped rather than counted.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        let mut edge_uses: HashMap<(u32, u32), usize> = HashMap::new();
        let mut record = |i: u32, j: u32| {
            if i == j {
                return;
            }
            let key = (i.min(j), i.max(j));
            *edge_uses.entry(key).or_insert(0) += 1;
        };

        for quad in &self.quads {
            for k in 0..4 {
                record(quad[k], quad[(k + 1) % 4]);
            }
        }
        for tri in &self.triangles {
            for k in 0..3 {
                record(tri[k], tri[(k + 1) % 3]);
            }
        }

        edge_uses.values().filter(|&&count| count != 2).count()
    }
}

/// Epsilon-quantizing vertex welder.
struct VertexWelder {
    epsilon: f64,
    lookup: HashMap<(i64, i64, i64), u32>,
}

impl VertexWelder {
    fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.max(f64::MIN_POSITIVE),
            lookup: HashMap::new(),
        }
    }

    fn index_of(&mut self, v: Vec3, vertices: &mut Vec<Vec3>) -> u32 {
        let key = (
            (v.x / self.epsilon).round() as i64,
            (v.y / self.epsilon).round() as i64,
            (v.z / self.epsilon).round() as i64,
        );
        *self.lookup.entry(key).or_insert_with(|| {
            let idx = vertices.len() as u32;
            vertices.push(v);
            idx
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::segment::Segment3D;
    use crate::mesh::{Quad, Triangle};

    fn unit_quad(z: f64) -> Quad {
        Quad::new(
            Vec3::new(0.0, 0.0, z),
            Vec3::new(1.0, 0.0, z),
            Vec3::new(1.0, 1.0, z),
            Vec3::new(0.0, 1.0, z),
        )
    }

    #[test]
    fn test_vertices_welded_across_faces() {
        let mesh = ImmutableMesh::new()
            .add_quad(unit_quad(0.0))
            .add_triangle(Triangle::new(
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.5, -1.0, 0.0),
            ));
        let indexed = IndexedMesh::from_mesh(&mesh, 1e-8);
        // Quad has 4 unique vertices; triangle shares 2 of them.
        assert_eq!(indexed.vertex_count(), 5);
        assert_eq!(indexed.quads.len(), 1);
        assert_eq!(indexed.triangles.len(), 1);
    }

    #[test]
    fn test_nearby_vertices_weld_within_epsilon() {
        let mesh = ImmutableMesh::new()
            .add_point(Vec3::new(0.0, 0.0, 0.0))
            .add_point(Vec3::new(1e-10, -1e-10, 0.0));
        let indexed = IndexedMesh::from_mesh(&mesh, 1e-8);
        assert_eq!(indexed.vertex_count(), 1);
        assert_eq!(indexed.points, vec![0, 0]);
    }

    #[test]
    fn test_distinct_vertices_not_welded() {
        let mesh = ImmutableMesh::new()
            .add_point(Vec3::new(0.0, 0.0, 0.0))
            .add_point(Vec3::new(0.5, 0.0, 0.0));
        let indexed = IndexedMesh::from_mesh(&mesh, 1e-8);
        assert_eq!(indexed.vertex_count(), 2);
    }

    #[test]
    fn test_segments_indexed() {
        let mesh = ImmutableMesh::new().add_internal_segment(Segment3D::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ));
        let indexed = IndexedMesh::from_mesh(&mesh, 1e-8);
        assert_eq!(indexed.segments, vec![[0, 1]]);
    }

    #[test]
    fn test_open_quad_sheet_has_boundary_edges() {
        let mesh = ImmutableMesh::new().add_quad(unit_quad(0.0));
        let indexed = IndexedMesh::from_mesh(&mesh, 1e-8);
        // A lone quad: all 4 edges used once.
        assert_eq!(indexed.non_manifold_edge_count(), 4);
    }

    #[test]
    fn test_closed_box_is_manifold() {
        // Axis-aligned unit cube as 6 quads.
        let p = |x: f64, y: f64, z: f64| Vec3::new(x, y, z);
        let mesh = ImmutableMesh::new()
            .add_quad(Quad::new(p(0., 0., 0.), p(0., 1., 0.), p(1., 1., 0.), p(1., 0., 0.)))
            .add_quad(Quad::new(p(0., 0., 1.), p(1., 0., 1.), p(1., 1., 1.), p(0., 1., 1.)))
            .add_quad(Quad::new(p(0., 0., 0.), p(1., 0., 0.), p(1., 0., 1.), p(0., 0., 1.)))
            .add_quad(Quad::new(p(1., 0., 0.), p(1., 1., 0.), p(1., 1., 1.), p(1., 0., 1.)))
            .add_quad(Quad::new(p(1., 1., 0.), p(0., 1., 0.), p(0., 1., 1.), p(1., 1., 1.)))
            .add_quad(Quad::new(p(0., 1., 0.), p(0., 0., 0.), p(0., 0., 1.), p(0., 1., 1.)));
        let indexed = IndexedMesh::from_mesh(&mesh, 1e-8);
        assert_eq!(indexed.vertex_count(), 8);
        assert_eq!(indexed.non_manifold_edge_count(), 0);
    }
}
