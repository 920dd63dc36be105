//! # Configuration Constants
//!
//! Centralized constants for the prism meshing pipeline. All geometry
//! tolerances, spatial-index parameters, and safety bounds are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Spatial Index**: Grid classification parameters
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::GEOMETRIC_EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < GEOMETRIC_EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const GEOMETRIC_EPSILON: f64 = 1e-10;

/// Epsilon for vertex deduplication when building an indexed mesh.
///
/// Slightly larger tolerance used when welding nearly-identical vertices.
/// This cleans up numerical noise between cap, side, and surface generation
/// without merging genuinely distinct mesh vertices.
pub const VERTEX_WELD_EPSILON: f64 = 1e-8;

// =============================================================================
// SPATIAL INDEX CONSTANTS
// =============================================================================

/// Grid resolution (cells per axis) for the spatial polygon index.
///
/// The index partitions a polygon's bounding box into an N x N grid and
/// classifies each cell as inside, outside, or boundary.
pub const SPATIAL_GRID_RESOLUTION: usize = 64;

/// Fractional bounding-box margin applied before grid construction.
///
/// Expanding the box by 1% per side avoids classification artifacts for
/// polygon vertices lying exactly on the box.
pub const SPATIAL_BBOX_MARGIN: f64 = 0.01;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Upper bound for target edge lengths accepted by the mesher options.
///
/// Edge lengths beyond this produce degenerate single-cell meshes for any
/// realistic structure and almost always indicate a unit mix-up.
pub const MAX_EDGE_LENGTH: f64 = 1e6;

/// Upper bound for refinement band widths around holes and segments.
pub const MAX_REFINEMENT_BAND: f64 = 1e4;
