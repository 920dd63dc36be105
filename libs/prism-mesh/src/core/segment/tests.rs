use super::*;
use approx::assert_relative_eq;

const EPS: f64 = 1e-10;

#[test]
fn test_length() {
    let s = Segment2D::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
    assert_relative_eq!(s.length(), 5.0);
}

#[test]
fn test_distance_to_point_perpendicular() {
    let s = Segment2D::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    assert_relative_eq!(s.distance_to_point(Vec2::new(5.0, 3.0)), 3.0);
}

#[test]
fn test_distance_to_point_beyond_endpoint() {
    let s = Segment2D::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    assert_relative_eq!(s.distance_to_point(Vec2::new(13.0, 4.0)), 5.0);
}

#[test]
fn test_distance_degenerate_segment_is_point_distance() {
    let s = Segment2D::new(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
    assert_relative_eq!(s.distance_to_point(Vec2::new(5.0, 6.0)), 5.0);
}

#[test]
fn test_proper_crossing() {
    let s1 = Segment2D::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
    let s2 = Segment2D::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0));
    assert!(s1.intersects(&s2, EPS));
}

#[test]
fn test_disjoint_segments() {
    let s1 = Segment2D::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
    let s2 = Segment2D::new(Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0));
    assert!(!s1.intersects(&s2, EPS));
}

#[test]
fn test_touching_endpoint_counts_as_intersection() {
    let s1 = Segment2D::new(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0));
    let s2 = Segment2D::new(Vec2::new(5.0, 0.0), Vec2::new(5.0, 5.0));
    assert!(s1.intersects(&s2, EPS));
}

#[test]
fn test_intersects_rect() {
    let min = Vec2::new(0.0, 0.0);
    let max = Vec2::new(1.0, 1.0);

    // Endpoint inside
    let s = Segment2D::new(Vec2::new(0.5, 0.5), Vec2::new(5.0, 5.0));
    assert!(s.intersects_rect(min, max, EPS));

    // Crosses straight through
    let s = Segment2D::new(Vec2::new(-1.0, 0.5), Vec2::new(2.0, 0.5));
    assert!(s.intersects_rect(min, max, EPS));

    // Entirely outside
    let s = Segment2D::new(Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0));
    assert!(!s.intersects_rect(min, max, EPS));
}

#[test]
fn test_segment3d_length() {
    let s = Segment3D::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 7.0));
    assert_relative_eq!(s.length(), 7.0);
}
