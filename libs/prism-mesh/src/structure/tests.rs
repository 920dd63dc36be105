use super::*;
use crate::core::vec2::Vec2;

fn footprint() -> Polygon2D {
    Polygon2D::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ])
    .unwrap()
}

fn hole() -> Polygon2D {
    Polygon2D::new(vec![
        Vec2::new(4.0, 4.0),
        Vec2::new(6.0, 4.0),
        Vec2::new(6.0, 6.0),
        Vec2::new(4.0, 6.0),
    ])
    .unwrap()
}

#[test]
fn test_elevation_range_enforced() {
    assert!(PrismStructureDefinition::new(footprint(), 0.0, 5.0).is_ok());
    assert!(PrismStructureDefinition::new(footprint(), 5.0, 5.0).is_err());
    assert!(PrismStructureDefinition::new(footprint(), 5.0, 0.0).is_err());
}

#[test]
fn test_add_hole_is_persistent() {
    let base = PrismStructureDefinition::new(footprint(), 0.0, 5.0).unwrap();
    let with_hole = base.add_hole(hole());
    assert!(base.holes.is_empty());
    assert_eq!(with_hole.holes.len(), 1);
}

#[test]
fn test_constraint_z_range_enforced() {
    let base = PrismStructureDefinition::new(footprint(), 0.0, 5.0).unwrap();
    let seg = Segment2D::new(Vec2::new(1.0, 1.0), Vec2::new(9.0, 1.0));

    let ok = base.add_constraint_segment(seg, 2.5).unwrap();
    assert_eq!(ok.constraint_segments.len(), 1);
    assert!(base.constraint_segments.is_empty());

    assert!(base.add_constraint_segment(seg, -1.0).is_err());
    assert!(base.add_constraint_segment(seg, 5.1).is_err());
    // Boundary elevations are allowed.
    assert!(base.add_constraint_segment(seg, 0.0).is_ok());
    assert!(base.add_constraint_segment(seg, 5.0).is_ok());
}

#[test]
fn test_geometry_bag_is_persistent() {
    let empty = MeshingGeometry::new();
    let one = empty.add_point(Vec3::new(1.0, 2.0, 3.0));
    let two = one.add_segment(Segment3D::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
    ));

    assert!(empty.points.is_empty());
    assert_eq!(one.points.len(), 1);
    assert!(one.segments.is_empty());
    assert_eq!(two.segments.len(), 1);
}

#[test]
fn test_internal_surface_append() {
    let base = PrismStructureDefinition::new(footprint(), 0.0, 5.0).unwrap();
    let surface = InternalSurface::new(hole(), 2.0);
    let next = base.add_internal_surface(surface);
    assert_eq!(next.internal_surfaces.len(), 1);
    assert_eq!(next.internal_surfaces[0].elevation, 2.0);
}

#[test]
fn test_height() {
    let s = PrismStructureDefinition::new(footprint(), -2.0, 3.0).unwrap();
    assert_eq!(s.height(), 5.0);
}
