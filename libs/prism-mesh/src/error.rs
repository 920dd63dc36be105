//! # Error Types
//!
//! Error types for prism meshing operations. All errors are explicit and
//! provide clear debugging information.
//!
//! ## Error Policy
//!
//! - Configuration errors surface at options validation, never mid-mesh
//! - Structural invariant violations surface at construction
//! - Degenerate geometry surfaces at polygon validation (except via the
//!   trusted `new_unchecked` path)
//! - Every public failure carries a stable code or category plus a
//!   human-readable description

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during prism meshing operations.
///
/// ## Example
///
/// ```rust
/// use prism_mesh::{MesherError, MesherOptions};
///
/// let mut options = MesherOptions::default();
/// options.target_edge_length_xy = -1.0;
/// match options.validate() {
///     Err(MesherError::InvalidOptions { code, .. }) => assert_eq!(code, "edge_length_xy"),
///     other => panic!("expected options error, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MesherError {
    /// Invalid mesher configuration.
    ///
    /// Carries a stable machine-readable code and a description.
    #[error("Invalid options [{code}]: {message}")]
    InvalidOptions {
        /// Stable error code, e.g. `"edge_length_xy"` or `"quality_range"`.
        code: &'static str,
        /// Human-readable description of the violation.
        message: String,
    },

    /// A supplied polygon violates a validation invariant.
    ///
    /// Raised for fewer than three vertices, near-zero area, duplicate or
    /// near-coincident vertices, or self-intersection.
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    /// A structure definition violates one of its invariants.
    ///
    /// Raised for `top <= base` elevations or constraint elevations outside
    /// the structure's range.
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    /// A batch meshing run was cancelled before this structure was meshed.
    #[error("Meshing cancelled")]
    Cancelled,
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for meshing operations.
///
/// ## Example
///
/// ```rust
/// use prism_mesh::error::MesherResult;
/// use prism_mesh::ImmutableMesh;
///
/// fn build_mesh() -> MesherResult<ImmutableMesh> {
///     Ok(ImmutableMesh::new())
/// }
/// ```
pub type MesherResult<T> = Result<T, MesherError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let opts_err = MesherError::InvalidOptions {
            code: "edge_length_xy",
            message: "must be positive".to_string(),
        };
        assert!(opts_err.to_string().contains("edge_length_xy"));
        assert!(opts_err.to_string().contains("must be positive"));

        let poly_err = MesherError::InvalidPolygon("self-intersection".to_string());
        assert!(poly_err.to_string().contains("self-intersection"));
    }

    /// Test error types are Send + Sync for parallel batch meshing.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MesherError>();
    }
}
