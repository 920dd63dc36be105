//! Geometry kernel: vector types, segments, and validated polygons.
//!
//! All predicates work in `f64`. The vector types are re-exports of glam's
//! double-precision vectors, so arithmetic, dot/cross products, lengths, and
//! normalization come from glam.

pub mod polygon;
pub mod segment;
pub mod vec2;
pub mod vec3;

pub use polygon::Polygon2D;
pub use segment::{Segment2D, Segment3D};
pub use vec2::Vec2;
pub use vec3::Vec3;
