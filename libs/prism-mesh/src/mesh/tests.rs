use super::*;
use approx::assert_relative_eq;

fn unit_quad() -> Quad {
    Quad::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    )
}

#[test]
fn test_mesh_new_is_empty() {
    let mesh = ImmutableMesh::new();
    assert!(mesh.is_empty());
    assert_eq!(mesh.face_count(), 0);
}

#[test]
fn test_add_quad_is_persistent() {
    let mesh = ImmutableMesh::new();
    let next = mesh.add_quad(unit_quad());
    assert!(mesh.quads.is_empty());
    assert_eq!(next.quads.len(), 1);
}

#[test]
fn test_add_triangle_is_persistent() {
    let mesh = ImmutableMesh::new();
    let tri = Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let next = mesh.add_triangle(tri);
    assert!(mesh.triangles.is_empty());
    assert_eq!(next.triangles.len(), 1);
}

#[test]
fn test_merge() {
    let a = ImmutableMesh::new().add_quad(unit_quad());
    let b = ImmutableMesh::new()
        .add_point(Vec3::new(1.0, 2.0, 3.0))
        .add_internal_segment(Segment3D::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ));
    let merged = a.merge(&b);
    assert_eq!(merged.quads.len(), 1);
    assert_eq!(merged.points.len(), 1);
    assert_eq!(merged.internal_segments.len(), 1);
    // Sources untouched.
    assert!(a.points.is_empty());
    assert!(b.quads.is_empty());
}

#[test]
fn test_structural_equality() {
    let a = ImmutableMesh::new().add_quad(unit_quad());
    let b = ImmutableMesh::new().add_quad(unit_quad());
    assert_eq!(a, b);
    let c = b.add_point(Vec3::new(0.0, 0.0, 0.0));
    assert_ne!(a, c);
}

#[test]
fn test_quad_area() {
    assert_relative_eq!(unit_quad().area(), 1.0);
}

#[test]
fn test_triangle_area() {
    let tri = Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    );
    assert_relative_eq!(tri.area(), 2.0);
}

#[test]
fn test_quad_split_preserves_area() {
    let quad = unit_quad();
    let (t1, t2) = quad.split();
    assert_relative_eq!(t1.area() + t2.area(), quad.area());
}

#[test]
fn test_quality_attachment() {
    let quad = unit_quad().with_quality(0.75);
    assert_eq!(quad.quality, Some(0.75));
}
