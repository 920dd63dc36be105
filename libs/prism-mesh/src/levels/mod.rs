//! Z-level construction.
//!
//! Merges a uniform vertical subdivision (driven by the Z edge-length
//! target) with every mandatory elevation implied by the structure:
//! constraint segments, injected points and 3D segments, and internal
//! surfaces. Side-face generation and caps both consume the resulting
//! sorted, deduplicated level list.

use crate::options::MesherOptions;
use crate::structure::PrismStructureDefinition;

/// Builds the sorted, deduplicated list of Z levels for `[z0, z1]`.
///
/// Guarantees:
/// - contains `z0` and `z1`
/// - contains every in-range mandatory elevation from the structure
/// - strictly increasing, deduplicated with the configured epsilon
/// - a degenerate range (`z1 == z0` within epsilon) yields `[z0]`
///
/// Never fails for a valid structure; an invalid Z target is rejected
/// earlier at options validation.
#[must_use]
pub fn build_z_levels(
    z0: f64,
    z1: f64,
    options: &MesherOptions,
    structure: &PrismStructureDefinition,
) -> Vec<f64> {
    let epsilon = options.epsilon;
    if (z1 - z0).abs() <= epsilon {
        return vec![z0];
    }

    let extent = z1 - z0;
    let divisions = ((extent / options.target_edge_length_z).round() as usize).max(1);

    let mut levels = Vec::with_capacity(divisions + 1);
    for i in 0..=divisions {
        levels.push(z0 + extent * (i as f64 / divisions as f64));
    }

    for constraint in &structure.constraint_segments {
        push_in_range(&mut levels, constraint.z, z0, z1, epsilon);
    }
    for point in &structure.geometry.points {
        push_in_range(&mut levels, point.z, z0, z1, epsilon);
    }
    for segment in &structure.geometry.segments {
        push_in_range(&mut levels, segment.a.z, z0, z1, epsilon);
        push_in_range(&mut levels, segment.b.z, z0, z1, epsilon);
    }
    for surface in &structure.internal_surfaces {
        push_in_range(&mut levels, surface.elevation, z0, z1, epsilon);
    }

    levels.sort_by(|a, b| a.total_cmp(b));
    levels.dedup_by(|a, b| (*a - *b).abs() <= epsilon);
    levels
}

fn push_in_range(levels: &mut Vec<f64>, z: f64, z0: f64, z1: f64, epsilon: f64) {
    if z >= z0 - epsilon && z <= z1 + epsilon {
        levels.push(z);
    }
}
