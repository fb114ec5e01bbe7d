use na::Vector2;
use sat2d::math::{Isometry, Point, Real};
use sat2d::query::{self, sat};
use sat2d::shape::{Polygon, Shape};

#[test]
fn separated_squares_do_not_overlap() {
    let square = Polygon::rectangle(1.0, 1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(2.5, 0.0);

    assert!(sat::penetration_polygon_polygon(&pos1, &square, &pos2, &square).is_none());
    assert_eq!(
        sat::mtv_polygon_polygon(&pos1, &square, &pos2, &square),
        Vector2::zeros()
    );
}

#[test]
fn touching_squares_overlap_with_zero_depth() {
    let square = Polygon::rectangle(1.0, 1.0);
    let pen = sat::penetration_polygon_polygon(
        &Isometry::identity(),
        &square,
        &Isometry::translation(2.0, 0.0),
        &square,
    )
    .expect("touching polygons overlap");

    assert_relative_eq!(pen.depth, 0.0);
}

#[test]
fn overlapping_squares_use_the_smallest_overlap() {
    let square = Polygon::rectangle(1.0, 1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(1.5, 0.2);

    let pen = sat::penetration_polygon_polygon(&pos1, &square, &pos2, &square).unwrap();
    assert_relative_eq!(pen.depth, 0.5, epsilon = 1.0e-5);
    assert_relative_eq!(*pen.axis, Vector2::new(1.0, 0.0), epsilon = 1.0e-5);

    let mtv = sat::mtv_polygon_polygon(&pos1, &square, &pos2, &square);
    assert_relative_eq!(mtv, Vector2::new(-0.5, 0.0), epsilon = 1.0e-5);

    // Swapping the polygons reverses the MTV.
    let mtv21 = sat::mtv_polygon_polygon(&pos2, &square, &pos1, &square);
    assert_relative_eq!(mtv21, Vector2::new(0.5, 0.0), epsilon = 1.0e-5);
}

#[test]
fn rotated_square_against_axis_aligned_square() {
    let square = Polygon::rectangle(1.0, 1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::new(Vector2::new(2.2, 0.0), core::f64::consts::FRAC_PI_4 as Real);

    let pen = sat::penetration_polygon_polygon(&pos1, &square, &pos2, &square).unwrap();
    let expected = (2.0 as Real).sqrt() - 1.2;
    assert_relative_eq!(pen.depth, expected, epsilon = 1.0e-4);
    assert!(pen.axis.x > 0.99);

    // Pushed a bit further away, the diamond corner no longer reaches the square.
    let pos2 = Isometry::new(Vector2::new(2.5, 0.0), core::f64::consts::FRAC_PI_4 as Real);
    assert!(sat::penetration_polygon_polygon(&pos1, &square, &pos2, &square).is_none());
}

#[test]
fn coincident_squares_use_the_first_edge_normal() {
    let square = Polygon::rectangle(1.0, 1.0);
    let pos = Isometry::translation(2.0, 3.0);

    let pen = sat::penetration_polygon_polygon(&pos, &square, &pos, &square).unwrap();
    assert_relative_eq!(pen.depth, 2.0, epsilon = 1.0e-5);
    assert_relative_eq!(*pen.axis, Vector2::new(0.0, -1.0), epsilon = 1.0e-5);
    assert_relative_eq!(
        sat::mtv_polygon_polygon(&pos, &square, &pos, &square),
        Vector2::new(0.0, 2.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn triangles_with_a_degenerate_edge() {
    let triangle = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(0.0, 2.0),
    ]);
    let square = Polygon::rectangle(0.5, 0.5);

    // The square sits right on the hypotenuse of the triangle.
    let inside = Isometry::translation(1.0, 1.0);
    assert!(sat::penetration_polygon_polygon(&Isometry::identity(), &triangle, &inside, &square).is_some());

    let outside = Isometry::translation(2.0, 2.0);
    assert!(
        sat::penetration_polygon_polygon(&Isometry::identity(), &triangle, &outside, &square)
            .is_none()
    );
}

#[test]
fn degenerate_polygons_never_intersect() {
    let segment = Shape::Polygon(Polygon::new(vec![Point::new(-1.0, 0.0), Point::new(1.0, 0.0)]));
    let square = Shape::Polygon(Polygon::rectangle(1.0, 1.0));
    let pos = Isometry::identity();

    assert!(!query::intersection_test(&pos, &segment, &pos, &square));
    assert!(!query::intersection_test(&pos, &square, &pos, &segment));
    assert!(query::intersection_test(&pos, &square, &pos, &square));
}
