use crate::math::{Isometry, Real};
use crate::query::sat;
use crate::query::Penetration;
use crate::shape::Shape;

/// Computes the penetration between two shapes, if they overlap.
///
/// The returned axis points from `shape1` toward `shape2`. Returns `None` if
/// the shapes are separated or if either of them is degenerate (a polygon with
/// less than three vertices or a circle with a non-positive radius). Shapes that
/// are exactly touching overlap with a depth of zero.
///
/// ```
/// use sat2d::math::Isometry;
/// use sat2d::query;
/// use sat2d::shape::{Circle, Polygon, Shape};
///
/// let square = Shape::Polygon(Polygon::rectangle(1.0, 1.0));
/// let circle = Shape::Circle(Circle::with_radius(0.5));
///
/// let pen = query::penetration(
///     &Isometry::identity(),
///     &square,
///     &Isometry::translation(1.25, 0.0),
///     &circle,
/// )
/// .expect("the shapes overlap");
///
/// assert!((pen.depth - 0.25).abs() < 1.0e-5);
/// assert!(pen.axis.x > 0.99);
/// ```
pub fn penetration(
    pos1: &Isometry<Real>,
    shape1: &Shape,
    pos2: &Isometry<Real>,
    shape2: &Shape,
) -> Option<Penetration> {
    if shape1.is_degenerate() || shape2.is_degenerate() {
        return None;
    }

    match (shape1, shape2) {
        (Shape::Polygon(p1), Shape::Polygon(p2)) => {
            sat::penetration_polygon_polygon(pos1, p1, pos2, p2)
        }
        (Shape::Circle(c1), Shape::Circle(c2)) => {
            sat::penetration_circle_circle(pos1, c1, pos2, c2)
        }
        (Shape::Circle(c1), Shape::Polygon(p2)) => {
            sat::penetration_circle_polygon(pos1, c1, pos2, p2)
        }
        (Shape::Polygon(p1), Shape::Circle(c2)) => {
            sat::penetration_circle_polygon(pos2, c2, pos1, p1).map(|pen| pen.flipped())
        }
    }
}

/// Tests whether two shapes overlap.
///
/// Touching shapes are considered intersecting.
pub fn intersection_test(
    pos1: &Isometry<Real>,
    shape1: &Shape,
    pos2: &Isometry<Real>,
    shape2: &Shape,
) -> bool {
    penetration(pos1, shape1, pos2, shape2).is_some()
}
