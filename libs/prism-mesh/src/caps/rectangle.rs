//! Rectangle fast path for cap generation.
//!
//! Builds an adaptive grid over an axis-aligned rectangular footprint:
//! uniform divisions at the XY target spacing, extra division lines at the
//! refined spacing inside the band around each hole and each constraint
//! segment, and one quad per surviving cell per requested cap plane. A
//! cell is dropped when its center lies inside any hole; this cell-center
//! sampling is a deliberate conservative approximation, a cell may still
//! partially overlap a hole boundary.

use crate::caps::{CapPlane, CapScratch};
use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;
use crate::mesh::Quad;
use crate::options::MesherOptions;
use crate::spatial::SpatialPolygonIndex;
use crate::structure::PrismStructureDefinition;

/// Generates cap quads over a rectangular footprint.
///
/// The caller has already established that the footprint is an
/// axis-aligned rectangle.
pub fn generate(
    structure: &PrismStructureDefinition,
    options: &MesherOptions,
    caps: &[CapPlane],
    scratch: &mut CapScratch,
    out: &mut Vec<Quad>,
) {
    if caps.is_empty() {
        return;
    }

    let (min, max) = structure.footprint.bounding_box();
    scratch.reset();
    build_axis_divisions(structure, options, min.x, max.x, Axis::X, &mut scratch.x_divisions);
    build_axis_divisions(structure, options, min.y, max.y, Axis::Y, &mut scratch.y_divisions);

    let hole_indices: Vec<SpatialPolygonIndex> = structure
        .holes
        .iter()
        .map(|hole| SpatialPolygonIndex::build(hole, options.epsilon))
        .collect();

    let xs = &scratch.x_divisions;
    let ys = &scratch.y_divisions;
    for iy in 0..ys.len() - 1 {
        for ix in 0..xs.len() - 1 {
            let (x0, x1) = (xs[ix], xs[ix + 1]);
            let (y0, y1) = (ys[iy], ys[iy + 1]);
            let center = Vec2::new((x0 + x1) / 2.0, (y0 + y1) / 2.0);

            if hole_indices.iter().any(|index| index.is_inside(center)) {
                continue;
            }

            for cap in caps {
                out.push(cell_quad(x0, x1, y0, y1, cap));
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Builds the sorted, deduplicated division coordinates for one axis.
fn build_axis_divisions(
    structure: &PrismStructureDefinition,
    options: &MesherOptions,
    lo: f64,
    hi: f64,
    axis: Axis,
    divisions: &mut Vec<f64>,
) {
    let extent = hi - lo;

    // Base uniform divisions at the XY target.
    let count = ((extent / options.target_edge_length_xy).round() as usize).max(1);
    for i in 0..=count {
        divisions.push(lo + extent * (i as f64 / count as f64));
    }

    // Refinement lines inside hole bands.
    if let Some(refinement) = options.hole_refinement {
        if refinement.band > 0.0 {
            for hole in &structure.holes {
                let (h_min, h_max) = hole.bounding_box();
                let (zone_lo, zone_hi) = match axis {
                    Axis::X => (h_min.x, h_max.x),
                    Axis::Y => (h_min.y, h_max.y),
                };
                inject_refined(
                    divisions,
                    (zone_lo - refinement.band).max(lo),
                    (zone_hi + refinement.band).min(hi),
                    refinement.refined_length,
                );
            }
        }
    }

    // Refinement lines inside constraint-segment bands.
    if let Some(refinement) = options.segment_refinement {
        if refinement.band > 0.0 {
            for constraint in &structure.constraint_segments {
                let (s_min, s_max) = constraint.segment.bounding_box();
                let (zone_lo, zone_hi) = match axis {
                    Axis::X => (s_min.x, s_max.x),
                    Axis::Y => (s_min.y, s_max.y),
                };
                inject_refined(
                    divisions,
                    (zone_lo - refinement.band).max(lo),
                    (zone_hi + refinement.band).min(hi),
                    refinement.refined_length,
                );
            }
        }
    }

    divisions.sort_by(|a, b| a.total_cmp(b));
    divisions.dedup_by(|a, b| (*a - *b).abs() <= options.epsilon);
}

/// Injects division lines at `spacing` intervals across `[zone_lo, zone_hi]`.
fn inject_refined(divisions: &mut Vec<f64>, zone_lo: f64, zone_hi: f64, spacing: f64) {
    if zone_hi <= zone_lo {
        return;
    }
    let mut x = zone_lo;
    while x < zone_hi {
        divisions.push(x);
        x += spacing;
    }
    divisions.push(zone_hi);
}

/// One grid cell as a quad with cap-appropriate winding.
fn cell_quad(x0: f64, x1: f64, y0: f64, y1: f64, cap: &CapPlane) -> Quad {
    let z = cap.z;
    if cap.facing_up {
        // CCW viewed from above: outward normal +Z.
        Quad::new(
            Vec3::new(x0, y0, z),
            Vec3::new(x1, y0, z),
            Vec3::new(x1, y1, z),
            Vec3::new(x0, y1, z),
        )
    } else {
        // Reversed winding: outward normal -Z.
        Quad::new(
            Vec3::new(x0, y0, z),
            Vec3::new(x0, y1, z),
            Vec3::new(x1, y1, z),
            Vec3::new(x1, y0, z),
        )
    }
}
