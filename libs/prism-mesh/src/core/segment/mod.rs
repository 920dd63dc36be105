//! Segment value types and distance/intersection predicates.
//!
//! `Segment2D` carries the planar predicates used by polygon validation and
//! by the spatial index (point distance, segment intersection, rectangle
//! overlap). `Segment3D` is a plain value type for injected geometry and
//! internal mesh segments.

use serde::{Deserialize, Serialize};

use crate::core::vec2::{cross, Vec2};
use crate::core::vec3::Vec3;

// =============================================================================
// SEGMENT 2D
// =============================================================================

/// A 2D line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment2D {
    /// Start point.
    pub a: Vec2,
    /// End point.
    pub b: Vec2,
}

impl Segment2D {
    /// Creates a segment between two points.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        (self.b - self.a).length()
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounding_box(&self) -> (Vec2, Vec2) {
        (self.a.min(self.b), self.a.max(self.b))
    }

    /// Distance from a point to this segment.
    ///
    /// A near-zero-length segment is treated as a point rather than an
    /// error; callers always get a finite distance.
    pub fn distance_to_point(&self, p: Vec2) -> f64 {
        let d = self.b - self.a;
        let len_sq = d.length_squared();
        if len_sq <= f64::EPSILON {
            return (p - self.a).length();
        }
        let t = ((p - self.a).dot(d) / len_sq).clamp(0.0, 1.0);
        (p - (self.a + d * t)).length()
    }

    /// Tests whether two segments intersect (proper crossing or touching).
    pub fn intersects(&self, other: &Segment2D, epsilon: f64) -> bool {
        let d1 = orient(other.a, other.b, self.a);
        let d2 = orient(other.a, other.b, self.b);
        let d3 = orient(self.a, self.b, other.a);
        let d4 = orient(self.a, self.b, other.b);

        if ((d1 > epsilon && d2 < -epsilon) || (d1 < -epsilon && d2 > epsilon))
            && ((d3 > epsilon && d4 < -epsilon) || (d3 < -epsilon && d4 > epsilon))
        {
            return true;
        }

        // Collinear or touching endpoints
        (d1.abs() <= epsilon && on_segment(other.a, other.b, self.a, epsilon))
            || (d2.abs() <= epsilon && on_segment(other.a, other.b, self.b, epsilon))
            || (d3.abs() <= epsilon && on_segment(self.a, self.b, other.a, epsilon))
            || (d4.abs() <= epsilon && on_segment(self.a, self.b, other.b, epsilon))
    }

    /// Tests whether this segment intersects an axis-aligned rectangle.
    ///
    /// True when either endpoint lies inside the rectangle or the segment
    /// crosses one of its four edges.
    pub fn intersects_rect(&self, min: Vec2, max: Vec2, epsilon: f64) -> bool {
        let inside = |p: Vec2| {
            p.x >= min.x - epsilon
                && p.x <= max.x + epsilon
                && p.y >= min.y - epsilon
                && p.y <= max.y + epsilon
        };
        if inside(self.a) || inside(self.b) {
            return true;
        }

        let corners = [
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ];
        for i in 0..4 {
            let edge = Segment2D::new(corners[i], corners[(i + 1) % 4]);
            if self.intersects(&edge, epsilon) {
                return true;
            }
        }
        false
    }
}

/// Signed orientation of `c` relative to the directed line `a -> b`.
fn orient(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    cross(b - a, c - a)
}

/// Tests whether `p` lies within the bounding box of collinear segment `ab`.
fn on_segment(a: Vec2, b: Vec2, p: Vec2, epsilon: f64) -> bool {
    p.x >= a.x.min(b.x) - epsilon
        && p.x <= a.x.max(b.x) + epsilon
        && p.y >= a.y.min(b.y) - epsilon
        && p.y <= a.y.max(b.y) + epsilon
}

// =============================================================================
// SEGMENT 3D
// =============================================================================

/// A 3D line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment3D {
    /// Start point.
    pub a: Vec3,
    /// End point.
    pub b: Vec3,
}

impl Segment3D {
    /// Creates a segment between two points.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { a, b }
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        (self.b - self.a).length()
    }
}

#[cfg(test)]
mod tests;
