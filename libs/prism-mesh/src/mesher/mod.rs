//! Meshing orchestration.
//!
//! `mesh` is the principal synchronous entry point: validate options, build
//! Z levels, emit side-face quads for the footprint and hole walls, generate
//! caps through the selected strategy, add internal surfaces, score cap
//! quads, and pass injected geometry through. Deterministic for identical
//! inputs; all state is local to the call.
//!
//! `mesh_batch` fans independent structures out across a bounded worker
//! pool. Failures stay isolated to their own result slot, and cancellation
//! is cooperative, checked between structure-level units of work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use crate::caps::{rectangle, surface, tessellation, CapPlane, CapScratch, CapStrategy};
use crate::core::polygon::Polygon2D;
use crate::core::vec3::at_elevation;
use crate::error::{MesherError, MesherResult};
use crate::levels::build_z_levels;
use crate::mesh::{ImmutableMesh, Quad};
use crate::options::MesherOptions;
use crate::quality::apply_cap_quality;
use crate::structure::PrismStructureDefinition;

// =============================================================================
// SINGLE-STRUCTURE ENTRY POINT
// =============================================================================

/// Meshes one prism structure.
///
/// ## Errors
///
/// Only configuration errors surface here (as `InvalidOptions`); a valid
/// structure with valid options always meshes.
///
/// ## Example
///
/// ```rust
/// use prism_mesh::{mesh, MesherOptions, Polygon2D, PrismStructureDefinition, Vec2};
///
/// let footprint = Polygon2D::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(20.0, 0.0),
///     Vec2::new(20.0, 10.0),
///     Vec2::new(0.0, 10.0),
/// ])?;
/// let structure = PrismStructureDefinition::new(footprint, 0.0, 5.0)?;
/// let result = mesh(&structure, &MesherOptions::default())?;
/// assert!(!result.quads.is_empty());
/// # Ok::<(), prism_mesh::MesherError>(())
/// ```
pub fn mesh(
    structure: &PrismStructureDefinition,
    options: &MesherOptions,
) -> MesherResult<ImmutableMesh> {
    let mut options = options.clone();
    options.validate()?;
    let options = options;

    let levels = build_z_levels(
        structure.base_elevation,
        structure.top_elevation,
        &options,
        structure,
    );

    // Side faces: footprint walls plus hole walls (reversed winding so the
    // wall normals point away from the solid material).
    let mut side_quads = Vec::new();
    emit_side_faces(&structure.footprint, &levels, &options, false, &mut side_quads);
    for hole in &structure.holes {
        emit_side_faces(hole, &levels, &options, true, &mut side_quads);
    }

    // Caps through the strategy selected once per footprint.
    let caps = requested_caps(structure, &options);
    let mut cap_quads = Vec::new();
    let mut cap_triangles = Vec::new();
    let mut scratch = CapScratch::new();
    match CapStrategy::select(&structure.footprint, options.epsilon) {
        CapStrategy::Rectangle => {
            rectangle::generate(structure, &options, &caps, &mut scratch, &mut cap_quads);
        }
        CapStrategy::Tessellation => {
            tessellation::generate(&structure.footprint, &caps, &mut cap_triangles);
        }
    }

    // Internal surfaces join the cap quads for quality scoring.
    for internal in &structure.internal_surfaces {
        surface::generate(internal, &mut cap_quads);
    }

    let (scored_quads, fallback_triangles) = apply_cap_quality(cap_quads, &options);

    let mut result = ImmutableMesh::new();
    result.quads = side_quads;
    result.quads.extend(scored_quads);
    result.triangles = cap_triangles;
    result.triangles.extend(fallback_triangles);
    result.points = structure.geometry.points.clone();
    result.internal_segments = structure.geometry.segments.clone();
    Ok(result)
}

/// Cap planes requested by the options.
fn requested_caps(structure: &PrismStructureDefinition, options: &MesherOptions) -> Vec<CapPlane> {
    let mut caps = Vec::with_capacity(2);
    if options.generate_bottom_cap {
        caps.push(CapPlane {
            z: structure.base_elevation,
            facing_up: false,
        });
    }
    if options.generate_top_cap {
        caps.push(CapPlane {
            z: structure.top_elevation,
            facing_up: true,
        });
    }
    caps
}

/// Emits wall quads for one ring across all level pairs.
///
/// Each ring edge is subdivided at the XY target; `reverse` flips the quad
/// winding for hole rings.
fn emit_side_faces(
    ring: &Polygon2D,
    levels: &[f64],
    options: &MesherOptions,
    reverse: bool,
    out: &mut Vec<Quad>,
) {
    for edge in ring.edges() {
        let pieces = ((edge.length() / options.target_edge_length_xy).ceil() as usize).max(1);
        for k in 0..pieces {
            let t0 = k as f64 / pieces as f64;
            let t1 = (k + 1) as f64 / pieces as f64;
            let p0 = edge.a + (edge.b - edge.a) * t0;
            let p1 = edge.a + (edge.b - edge.a) * t1;

            for pair in levels.windows(2) {
                let (z_lo, z_hi) = (pair[0], pair[1]);
                let quad = if reverse {
                    Quad::new(
                        at_elevation(p1, z_lo),
                        at_elevation(p0, z_lo),
                        at_elevation(p0, z_hi),
                        at_elevation(p1, z_hi),
                    )
                } else {
                    Quad::new(
                        at_elevation(p0, z_lo),
                        at_elevation(p1, z_lo),
                        at_elevation(p1, z_hi),
                        at_elevation(p0, z_hi),
                    )
                };
                out.push(quad);
            }
        }
    }
}

// =============================================================================
// BATCH MESHING
// =============================================================================

/// Cooperative cancellation flag shared between a caller and batch workers.
///
/// Checked between structure-level units of work, never mid-algorithm.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// True when cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Configuration for batch meshing.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Upper bound on worker threads; `None` uses the global pool.
    pub max_parallelism: Option<usize>,
    /// Cancellation token checked before each structure.
    pub cancel: CancellationToken,
}

/// Meshes independent structures in parallel.
///
/// Each structure gets its own result slot; one structure's failure never
/// aborts its siblings. Structures not yet started when cancellation is
/// requested yield `MesherError::Cancelled`.
#[must_use]
pub fn mesh_batch(
    structures: &[PrismStructureDefinition],
    options: &MesherOptions,
    batch: &BatchOptions,
) -> Vec<MesherResult<ImmutableMesh>> {
    let work = |structure: &PrismStructureDefinition| {
        if batch.cancel.is_cancelled() {
            return Err(MesherError::Cancelled);
        }
        mesh(structure, options)
    };

    match batch.max_parallelism {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads.max(1))
                .build();
            match pool {
                Ok(pool) => pool.install(|| structures.par_iter().map(work).collect()),
                // Pool construction can fail on restricted platforms; the
                // global pool preserves semantics.
                Err(_) => structures.par_iter().map(work).collect(),
            }
        }
        None => structures.par_iter().map(work).collect(),
    }
}
