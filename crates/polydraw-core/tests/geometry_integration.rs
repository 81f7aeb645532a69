//! Integration tests for the geometry core.

use polydraw_core::{overlaps, Error, Shape, Vec2, WorldShape, POINT_RADIUS};

#[test]
fn test_rectangle_scenario() {
    let rect = Shape::axis_aligned_rect(Vec2::new(75.0, 105.0), Vec2::new(50.0, 50.0)).unwrap();

    assert_eq!(
        rect.vertices(),
        &[
            Vec2::new(75.0, 105.0),
            Vec2::new(125.0, 105.0),
            Vec2::new(75.0, 155.0),
            Vec2::new(125.0, 155.0),
        ]
    );
    assert!((rect.center().x - 100.0).abs() < 1e-9);
    assert!((rect.center().y - 130.0).abs() < 1e-9);
}

#[test]
fn test_degenerate_rectangle_fails_construction() {
    // No partial shape escapes; the call itself errors.
    for size in [Vec2::new(0.0, 40.0), Vec2::new(40.0, 0.0), Vec2::new(0.0, 0.0)] {
        let result = Shape::axis_aligned_rect(Vec2::new(5.0, 5.0), size);
        assert!(
            matches!(result, Err(Error::InvalidGeometry { .. })),
            "size {size:?} should be rejected"
        );
    }
}

#[test]
fn test_cursor_probe_against_rectangle() {
    let rect = Shape::axis_aligned_rect(Vec2::new(75.0, 105.0), Vec2::new(50.0, 50.0)).unwrap();
    let target = WorldShape::Shape(&rect);

    // Cursor at the rectangle's center is an obvious hit.
    assert!(overlaps(&WorldShape::Point(Vec2::new(100.0, 130.0)), &target));

    // The bounding circle reaches sqrt(2) * 25 from the center; probe
    // just inside and just outside that reach plus the cursor radius.
    let reach = rect.bounding_radius() + POINT_RADIUS;
    let inside = WorldShape::Point(Vec2::new(100.0 + reach - 0.5, 130.0));
    let outside = WorldShape::Point(Vec2::new(100.0 + reach + 0.5, 130.0));
    assert!(overlaps(&inside, &target));
    assert!(!overlaps(&outside, &target));
}

#[test]
fn test_freeform_shape_radius_scenario() {
    let shape = Shape::freeform(
        Vec2::new(0.0, 0.0),
        [
            Vec2::new(352.0, 168.0),
            Vec2::new(396.0, 199.0),
            Vec2::new(441.0, 166.0),
            Vec2::new(390.0, 136.0),
        ],
        [
            (Vec2::new(352.0, 168.0), Vec2::new(396.0, 199.0)),
            (Vec2::new(396.0, 199.0), Vec2::new(441.0, 166.0)),
        ],
    );

    // Farthest vertex is (441, 166).
    assert!((shape.bounding_radius() - 471.05).abs() < 0.01);
}
