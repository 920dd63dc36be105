//! Validated 2D polygon type.
//!
//! A `Polygon2D` is an ordered vertex loop with enforced invariants:
//! at least three vertices, counter-clockwise winding (clockwise input is
//! auto-reversed), non-zero signed area, no duplicate or near-coincident
//! consecutive vertices, and no self-intersection. Constructed once,
//! immutable thereafter.

use serde::{Deserialize, Serialize};

use config::constants::GEOMETRIC_EPSILON;

use crate::core::segment::Segment2D;
use crate::core::vec2::Vec2;
use crate::error::{MesherError, MesherResult};

/// An immutable, validated 2D polygon with counter-clockwise winding.
///
/// ## Example
///
/// ```rust
/// use prism_mesh::{Polygon2D, Vec2};
///
/// // Clockwise input is reversed to counter-clockwise.
/// let poly = Polygon2D::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(0.0, 1.0),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(1.0, 0.0),
/// ])?;
/// assert!(poly.signed_area() > 0.0);
/// # Ok::<(), prism_mesh::MesherError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon2D {
    vertices: Vec<Vec2>,
}

impl Polygon2D {
    /// Creates a validated polygon.
    ///
    /// Clockwise input is reversed so the stored winding is always
    /// counter-clockwise.
    ///
    /// ## Errors
    ///
    /// - fewer than three vertices
    /// - duplicate or near-coincident consecutive vertices
    /// - near-zero signed area (collinear vertex loop)
    /// - self-intersecting outline
    pub fn new(vertices: Vec<Vec2>) -> MesherResult<Self> {
        if vertices.len() < 3 {
            return Err(MesherError::InvalidPolygon(format!(
                "need at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        let n = vertices.len();
        for i in 0..n {
            let j = (i + 1) % n;
            if (vertices[i] - vertices[j]).length() < GEOMETRIC_EPSILON {
                return Err(MesherError::InvalidPolygon(format!(
                    "vertices {i} and {j} are coincident"
                )));
            }
        }

        let area = signed_area_of(&vertices);
        if area.abs() < GEOMETRIC_EPSILON {
            return Err(MesherError::InvalidPolygon(
                "signed area is zero (degenerate vertex loop)".to_string(),
            ));
        }

        let mut vertices = vertices;
        if area < 0.0 {
            vertices.reverse();
        }

        if has_self_intersection(&vertices) {
            return Err(MesherError::InvalidPolygon(
                "outline is self-intersecting".to_string(),
            ));
        }

        Ok(Self { vertices })
    }

    /// Creates a polygon without validation, for trusted callers.
    ///
    /// The caller guarantees the invariants of [`Polygon2D::new`]; feeding
    /// degenerate geometry through this path produces undefined meshing
    /// output, not a panic.
    pub fn new_unchecked(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    /// The vertex loop in counter-clockwise order.
    #[must_use]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the polygon has no vertices (only possible via
    /// `new_unchecked`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Signed area via the shoelace formula; positive for CCW winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_of(&self.vertices)
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Axis-aligned bounding box as `(min, max)`.
    #[must_use]
    pub fn bounding_box(&self) -> (Vec2, Vec2) {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for &v in &self.vertices[1..] {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    /// Iterates over the polygon's edges as segments.
    pub fn edges(&self) -> impl Iterator<Item = Segment2D> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2D::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Point-in-polygon test by horizontal-ray crossing parity.
    ///
    /// Ties at edge-endpoint Y coordinates are resolved by the half-open
    /// edge test `(yi > y) != (yj > y)` so a vertex lying exactly on the
    /// ray is not double-counted.
    #[must_use]
    pub fn contains_point(&self, p: Vec2) -> bool {
        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > p.y) != (vj.y > p.y) {
                let x_cross = vj.x + (p.y - vj.y) / (vi.y - vj.y) * (vi.x - vj.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Detects an axis-aligned rectangle by exact corner matching.
    ///
    /// True only for a four-vertex polygon whose vertices coincide (within
    /// `epsilon`) with the four corners of its own bounding box.
    #[must_use]
    pub fn is_axis_aligned_rectangle(&self, epsilon: f64) -> bool {
        if self.vertices.len() != 4 {
            return false;
        }
        let (min, max) = self.bounding_box();
        let corners = [
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ];
        let mut matched = [false; 4];
        for &v in &self.vertices {
            let hit = corners
                .iter()
                .position(|&c| (v - c).length() <= epsilon);
            match hit {
                Some(k) if !matched[k] => matched[k] = true,
                _ => return false,
            }
        }
        matched.iter().all(|&m| m)
    }
}

/// Shoelace signed area of a vertex loop.
fn signed_area_of(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Tests every non-adjacent edge pair for intersection.
fn has_self_intersection(vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    for i in 0..n {
        let e1 = Segment2D::new(vertices[i], vertices[(i + 1) % n]);
        for j in (i + 1)..n {
            // Skip edges sharing a vertex with edge i
            if j == i || (j + 1) % n == i || j == (i + 1) % n {
                continue;
            }
            let e2 = Segment2D::new(vertices[j], vertices[(j + 1) % n]);
            if e1.intersects(&e2, GEOMETRIC_EPSILON) {
                return true;
            }
        }
    }
    false
}
