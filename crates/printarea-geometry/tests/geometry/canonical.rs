use printarea_core::GeometryError;
use printarea_geometry::{canonicalize, max_allowed_rect, BoundaryPolygon, Rectangle, Vec2};

const EPS: f64 = 1e-9;

fn reference() -> Rectangle {
    // 16 wide, 10 tall
    Rectangle::from([[0.0, 10.0], [16.0, 10.0], [16.0, 0.0], [0.0, 0.0]])
}

fn shifted(rect: &Rectangle, by: usize) -> Rectangle {
    let c = rect.corners();
    Rectangle::new(std::array::from_fn(|i| c[(i + by) % 4]))
}

#[test]
fn test_canonical_rectangle_is_unchanged() {
    let reference = reference();
    let result = canonicalize(&reference, &reference).unwrap();
    assert!(result.approx_eq(&reference, EPS));
}

#[test]
fn test_every_starting_corner_maps_back_to_northwest_first() {
    let reference = reference();
    for by in 0..4 {
        let candidate = shifted(&reference, by);
        let result = canonicalize(&candidate, &reference).unwrap();
        assert!(
            result.approx_eq(&reference, EPS),
            "start offset {by}: got {:?}",
            result.to_array()
        );
    }
}

#[test]
fn test_rotated_references() {
    // Reference rotated 0, 90, 180 and -90 degrees about its centre; the
    // candidate is the same rectangle listed from its southwest corner.
    for degrees in [0.0_f64, 90.0, 180.0, -90.0] {
        let mut reference = reference();
        reference.rotate_about(reference.center(), -degrees.to_radians());

        let candidate = shifted(&reference, 3);
        let result = canonicalize(&candidate, &reference).unwrap();
        assert!(
            result.approx_eq(&reference, 1e-6),
            "{degrees} degrees: got {:?}",
            result.to_array()
        );
    }
}

#[test]
fn test_square_is_disambiguated_by_position() {
    let square = Rectangle::from([[0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]);
    for by in 0..4 {
        let result = canonicalize(&shifted(&square, by), &square).unwrap();
        assert!(result.approx_eq(&square, EPS), "start offset {by}");
    }
}

#[test]
fn test_quarter_turn_example() {
    let rect = Rectangle::from([[0.0, 8.0], [16.0, 8.0], [16.0, 0.0], [0.0, 0.0]]);
    let reference = Rectangle::from([[16.0, 8.0], [16.0, -2.0], [0.0, -2.0], [0.0, 8.0]]);

    let result = canonicalize(&rect, &reference).unwrap();

    // The first corner sits at the reference's southwest slot, so the
    // corner that follows it becomes northwest.
    assert_eq!(result.north_west(), Vec2::new(16.0, 8.0));
    assert_eq!(result.north_east(), Vec2::new(16.0, 0.0));
    assert_eq!(result.south_west(), Vec2::new(0.0, 8.0));
    // Southeast is rebuilt by a half turn about the centre (midpoint of
    // northeast and southwest) and lands on (0, 0). Landing on (0, 8) would
    // need the midpoint of northwest and southwest as centre, which puts
    // southeast on top of southwest and breaks the rectangle.
    assert!(result.south_east().approx_eq(Vec2::new(0.0, 0.0), 1e-12));
}

#[test]
fn test_solver_output_is_restored_to_reference_order() {
    let boundary = BoundaryPolygon::from([[0.0, 8.0], [16.0, 8.0], [16.0, -12.0], [0.0, -12.0]]);
    // Northwest-first rectangle hanging over the left edge.
    let current = Rectangle::from([[-10.0, 10.0], [2.0, 10.0], [2.0, 6.0], [-10.0, 6.0]]);

    let solved = max_allowed_rect(&current, &boundary, None).unwrap();
    // The solver anchors on the only inside corner, the southeast one.
    assert_eq!(solved.north_west(), Vec2::new(2.0, 6.0));

    let result = canonicalize(&solved, &current).unwrap();
    let expected = Rectangle::from([[0.0, 8.0], [2.0, 8.0], [2.0, 6.0], [0.0, 6.0]]);
    assert!(
        result.approx_eq(&expected, EPS),
        "got {:?}",
        result.to_array()
    );
}

#[test]
fn test_unrelated_rectangles_are_ambiguous() {
    let reference = reference();
    let unrelated = Rectangle::from([[100.0, 100.0], [101.0, 100.0], [101.0, 99.0], [100.0, 99.0]]);
    assert!(matches!(
        canonicalize(&unrelated, &reference),
        Err(GeometryError::AmbiguousCorners { .. })
    ));
}
