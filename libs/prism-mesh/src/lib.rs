//! # Prism Mesh
//!
//! Quad-dominant surface meshing for extruded polygon prisms.
//!
//! A prism is a 2D footprint polygon extruded between a base and a top
//! elevation. This crate converts such a prism into a 3D surface mesh:
//! side-face quads along the footprint (and hole) walls, optional top and
//! bottom caps, and quads for internal surfaces at fixed elevations.
//!
//! ## Pipeline
//!
//! ```text
//! PrismStructureDefinition + MesherOptions
//!       |
//! Z-Level Builder ---> side faces
//! Cap Engine      ---> caps (rectangle fast path or fan tessellation)
//!       |
//! ImmutableMesh ---> IndexedMesh (deduplicated vertices, indexed faces)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use prism_mesh::{mesh, MesherOptions, Polygon2D, PrismStructureDefinition, Vec2};
//!
//! let footprint = Polygon2D::new(vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(20.0, 0.0),
//!     Vec2::new(20.0, 10.0),
//!     Vec2::new(0.0, 10.0),
//! ])?;
//! let structure = PrismStructureDefinition::new(footprint, 0.0, 5.0)?;
//! let options = MesherOptions::default();
//!
//! let result = mesh(&structure, &options)?;
//! assert!(result.quads.len() > 0);
//! # Ok::<(), prism_mesh::MesherError>(())
//! ```

pub mod caps;
pub mod core;
pub mod error;
pub mod levels;
pub mod mesh;
pub mod mesher;
pub mod options;
pub mod quality;
pub mod spatial;
pub mod structure;

pub use crate::core::polygon::Polygon2D;
pub use crate::core::segment::{Segment2D, Segment3D};
pub use crate::core::vec2::Vec2;
pub use crate::core::vec3::Vec3;
pub use crate::error::{MesherError, MesherResult};
pub use crate::mesh::indexed::IndexedMesh;
pub use crate::mesh::{ImmutableMesh, Quad, Triangle};
pub use crate::mesher::{mesh, mesh_batch, BatchOptions, CancellationToken};
pub use crate::options::{MesherOptions, RefinementOptions};
pub use crate::spatial::SpatialPolygonIndex;
pub use crate::structure::{
    ConstraintSegment, InternalSurface, MeshingGeometry, PrismStructureDefinition,
};
