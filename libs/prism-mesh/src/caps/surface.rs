//! Internal surface generation.
//!
//! Internal surfaces are horizontal plates at a single declared elevation,
//! generated independently of the prism's caps and without extrusion. The
//! outline's bounding box is subdivided into a fixed 2x2 grid of quads; a
//! deliberately simple fallback that is not meant to match the fidelity of
//! the cap paths.

use crate::core::vec3::Vec3;
use crate::mesh::Quad;
use crate::structure::InternalSurface;

/// Number of cells per axis for the internal-surface grid.
const SURFACE_GRID: usize = 2;

/// Generates the quads of one internal surface at its elevation.
pub fn generate(surface: &InternalSurface, out: &mut Vec<Quad>) {
    let (min, max) = surface.outline.bounding_box();
    let z = surface.elevation;
    let step = (max - min) / SURFACE_GRID as f64;

    for iy in 0..SURFACE_GRID {
        for ix in 0..SURFACE_GRID {
            let x0 = min.x + step.x * ix as f64;
            let x1 = min.x + step.x * (ix + 1) as f64;
            let y0 = min.y + step.y * iy as f64;
            let y1 = min.y + step.y * (iy + 1) as f64;
            out.push(Quad::new(
                Vec3::new(x0, y0, z),
                Vec3::new(x1, y0, z),
                Vec3::new(x1, y1, z),
                Vec3::new(x0, y1, z),
            ));
        }
    }
}
