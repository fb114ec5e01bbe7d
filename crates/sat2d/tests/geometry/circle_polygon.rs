use na::Vector2;
use sat2d::math::{Isometry, Real};
use sat2d::query::{self, sat};
use sat2d::shape::{Circle, Polygon, Shape};

#[test]
fn circle_against_polygon_face() {
    let circle = Circle::with_radius(0.5);
    let square = Polygon::rectangle(1.0, 1.0);
    let circle_pos = Isometry::translation(1.25, 0.0);

    let pen =
        sat::penetration_circle_polygon(&circle_pos, &circle, &Isometry::identity(), &square)
            .unwrap();
    assert_relative_eq!(pen.depth, 0.25, epsilon = 1.0e-5);
    // From the circle toward the polygon.
    assert_relative_eq!(*pen.axis, Vector2::new(-1.0, 0.0), epsilon = 1.0e-5);

    // The generic query orients the axis from the first shape toward the second one.
    let pen = query::penetration(
        &Isometry::identity(),
        &Shape::Polygon(square),
        &circle_pos,
        &Shape::Circle(circle),
    )
    .unwrap();
    assert_relative_eq!(*pen.axis, Vector2::new(1.0, 0.0), epsilon = 1.0e-5);
}

#[test]
fn circle_against_polygon_corner() {
    let circle = Circle::with_radius(1.0);
    let square = Polygon::rectangle(1.0, 1.0);

    let pen = sat::penetration_circle_polygon(
        &Isometry::translation(1.5, 1.5),
        &circle,
        &Isometry::identity(),
        &square,
    )
    .unwrap();

    let half_sqrt2 = (0.5 as Real).sqrt();
    assert_relative_eq!(pen.depth, 1.0 - half_sqrt2, epsilon = 1.0e-5);
    assert_relative_eq!(
        *pen.axis,
        Vector2::new(-half_sqrt2, -half_sqrt2),
        epsilon = 1.0e-5
    );
}

#[test]
fn corner_axis_separates_circle_outside_the_corner() {
    // The face normals alone would report a contact: the vertex axis separates the shapes.
    let circle = Circle::with_radius(0.5);
    let square = Polygon::rectangle(1.0, 1.0);

    assert!(sat::penetration_circle_polygon(
        &Isometry::translation(1.5, 1.5),
        &circle,
        &Isometry::identity(),
        &square,
    )
    .is_none());
}

#[test]
fn circle_centered_on_a_polygon_vertex() {
    let circle = Circle::with_radius(0.5);
    let square = Polygon::rectangle(1.0, 1.0);

    // No vertex axis: every face overlaps by the radius and the first face normal wins.
    let pen = sat::penetration_circle_polygon(
        &Isometry::translation(1.0, -1.0),
        &circle,
        &Isometry::identity(),
        &square,
    )
    .unwrap();
    assert_relative_eq!(pen.depth, 0.5, epsilon = 1.0e-5);
    assert_relative_eq!(*pen.axis, Vector2::new(0.0, -1.0), epsilon = 1.0e-5);
    assert_relative_eq!(pen.mtv(), Vector2::new(0.0, 0.5), epsilon = 1.0e-5);
}

#[test]
fn circle_inside_polygon() {
    let circle = Circle::with_radius(0.5);
    let square = Polygon::rectangle(2.0, 2.0);

    let pen = sat::penetration_circle_polygon(
        &Isometry::translation(0.5, 0.0),
        &circle,
        &Isometry::identity(),
        &square,
    )
    .unwrap();
    assert_relative_eq!(pen.depth, 1.0, epsilon = 1.0e-5);
}

#[test]
fn degenerate_circle_never_intersects() {
    let circle = Shape::Circle(Circle::with_radius(0.0));
    let square = Shape::Polygon(Polygon::rectangle(1.0, 1.0));
    let pos = Isometry::identity();

    assert!(query::penetration(&pos, &circle, &pos, &square).is_none());
    assert!(query::penetration(&pos, &square, &pos, &circle).is_none());
}
