//! 3D vector definitions for the geometry kernel.
//!
//! Provides type alias for `glam::DVec3` and common utilities.

pub use glam::DVec3 as Vec3;

use crate::core::vec2::Vec2;

/// Creates a zero vector using `glam::DVec3`.
///
/// # Examples
/// ```
/// use prism_mesh::core::vec3::zero;
/// use prism_mesh::core::vec3::Vec3;
///
/// let v = zero();
/// assert_eq!(v, Vec3::new(0.0, 0.0, 0.0));
/// ```
pub fn zero() -> Vec3 {
    Vec3::new(0.0, 0.0, 0.0)
}

/// Lifts a 2D point to 3D at the given elevation.
pub fn at_elevation(p: Vec2, z: f64) -> Vec3 {
    Vec3::new(p.x, p.y, z)
}
