use super::*;

const EPS: f64 = 1e-10;

fn square(size: f64) -> Polygon2D {
    Polygon2D::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(size, 0.0),
        Vec2::new(size, size),
        Vec2::new(0.0, size),
    ])
    .unwrap()
}

fn l_shape() -> Polygon2D {
    Polygon2D::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(4.0, 2.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(2.0, 4.0),
        Vec2::new(0.0, 4.0),
    ])
    .unwrap()
}

#[test]
fn test_bbox_has_margin() {
    let index = SpatialPolygonIndex::build(&square(10.0), EPS);
    let (min, max) = index.bounding_box();
    assert!(min.x < 0.0 && min.y < 0.0);
    assert!(max.x > 10.0 && max.y > 10.0);
}

#[test]
fn test_is_inside_basic() {
    let index = SpatialPolygonIndex::build(&square(10.0), EPS);
    assert!(index.is_inside(Vec2::new(5.0, 5.0)));
    assert!(!index.is_inside(Vec2::new(11.0, 5.0)));
    assert!(!index.is_inside(Vec2::new(-5.0, 5.0)));
}

#[test]
fn test_boundary_counts_as_inside() {
    let index = SpatialPolygonIndex::build(&square(10.0), EPS);
    assert!(index.is_inside(Vec2::new(0.0, 5.0)));
    assert!(index.is_inside(Vec2::new(10.0, 10.0)));
}

#[test]
fn test_outside_margined_bbox_rejected_fast() {
    let index = SpatialPolygonIndex::build(&square(10.0), EPS);
    assert!(!index.is_inside(Vec2::new(100.0, 100.0)));
    assert_eq!(index.classification(Vec2::new(100.0, 100.0)), None);
}

#[test]
fn test_cell_classification_categories() {
    let index = SpatialPolygonIndex::build(&square(10.0), EPS);
    assert_eq!(
        index.classification(Vec2::new(5.0, 5.0)),
        Some(CellClass::Inside)
    );
    assert_eq!(
        index.classification(Vec2::new(0.0, 0.0)),
        Some(CellClass::Boundary)
    );
}

#[test]
fn test_concave_notch_is_outside() {
    let index = SpatialPolygonIndex::build(&l_shape(), EPS);
    assert!(index.is_inside(Vec2::new(1.0, 3.0)));
    assert!(index.is_inside(Vec2::new(3.0, 1.0)));
    assert!(!index.is_inside(Vec2::new(3.5, 3.5)));
}

#[test]
fn test_consistency_with_exact_ray_casting() {
    // Property: away from the boundary tolerance, the index agrees with
    // the exact predicate everywhere.
    let poly = l_shape();
    let index = SpatialPolygonIndex::build(&poly, EPS);
    let mut checked = 0;
    for ix in 0..40 {
        for iy in 0..40 {
            let p = Vec2::new(-1.0 + ix as f64 * 0.17 + 0.013, -1.0 + iy as f64 * 0.17 + 0.007);
            let on_edge = poly.edges().any(|e| e.distance_to_point(p) <= 1e-9);
            if on_edge {
                continue;
            }
            assert_eq!(index.is_inside(p), poly.contains_point(p), "mismatch at {p:?}");
            checked += 1;
        }
    }
    assert!(checked > 1000);
}

#[test]
fn test_low_resolution_index_still_exact() {
    let poly = l_shape();
    let index = SpatialPolygonIndex::build_with_resolution(&poly, EPS, 2);
    assert!(index.is_inside(Vec2::new(1.0, 1.0)));
    assert!(!index.is_inside(Vec2::new(3.9, 3.9)));
}
