//! Generic tessellation path for cap generation.
//!
//! Fan triangulation from the first footprint vertex, one triangle per fan
//! wedge per requested cap. Winding is reversed for the bottom cap so both
//! caps keep outward-facing normals. Holes are not subtracted from the fan
//! and no adaptive refinement is applied; that is the current contract of
//! this path, not an oversight.

use crate::caps::CapPlane;
use crate::core::polygon::Polygon2D;
use crate::core::vec3::at_elevation;
use crate::mesh::Triangle;

/// Generates cap triangles for an arbitrary footprint.
pub fn generate(footprint: &Polygon2D, caps: &[CapPlane], out: &mut Vec<Triangle>) {
    let vertices = footprint.vertices();
    if vertices.len() < 3 {
        return;
    }

    for cap in caps {
        let v0 = at_elevation(vertices[0], cap.z);
        for i in 1..vertices.len() - 1 {
            let v1 = at_elevation(vertices[i], cap.z);
            let v2 = at_elevation(vertices[i + 1], cap.z);
            if cap.facing_up {
                out.push(Triangle::new(v0, v1, v2));
            } else {
                out.push(Triangle::new(v0, v2, v1));
            }
        }
    }
}
