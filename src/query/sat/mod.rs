//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis
//! onto which their projections do not overlap. For 2D convex polygons, the
//! candidate axes are the edge normals of both polygons. A circle has no edges,
//! so the test between a circle and a polygon adds the axis joining the circle
//! center to the closest polygon vertex.
//!
//! When no candidate axis separates the shapes, the axis with the smallest
//! overlap gives the direction and length of the minimum translation vector
//! (MTV) that pushes them apart.
//!
//! # Example
//!
//! ```rust
//! use sat2d::math::Isometry;
//! use sat2d::query::sat;
//! use sat2d::shape::Polygon;
//!
//! let square = Polygon::rectangle(1.0, 1.0);
//! let pos1 = Isometry::identity();
//! let pos2 = Isometry::translation(1.5, 0.0);
//!
//! let pen = sat::penetration_polygon_polygon(&pos1, &square, &pos2, &square).unwrap();
//! assert!((pen.depth - 0.5).abs() < 1.0e-5);
//!
//! // Moving the first square by the MTV separates both squares.
//! let mtv = sat::mtv_polygon_polygon(&pos1, &square, &pos2, &square);
//! assert!((mtv.x + 0.5).abs() < 1.0e-5);
//! ```
//!
//! Every function here returns an axis pointing from the first shape toward the second one.

pub use self::sat_circle_circle::*;
pub use self::sat_circle_polygon::*;
pub use self::sat_polygon_polygon::*;

use crate::math::{Point, Real, UnitVector};
use crate::query::{Penetration, Projection};

mod sat_circle_circle;
mod sat_circle_polygon;
mod sat_polygon_polygon;

/// Finds the candidate axis with the smallest overlap between two projected shapes.
///
/// `project2` computes the projection of the second shape. Returns `None` as
/// soon as one axis separates the shapes, or if there was no axis to test.
/// The first axis wins ties. The returned axis is not oriented.
pub(crate) fn find_min_overlap_axis(
    points1: &[Point<Real>],
    axes: impl IntoIterator<Item = UnitVector<Real>>,
    mut project2: impl FnMut(&UnitVector<Real>) -> Option<Projection>,
) -> Option<Penetration> {
    let mut best: Option<Penetration> = None;

    for axis in axes {
        let proj1 = Projection::of_points(points1, &axis)?;
        let proj2 = project2(&axis)?;

        if proj1.is_separated_from(&proj2) {
            return None;
        }

        let overlap = proj1.overlap(&proj2);

        if best.map(|b| overlap < b.depth).unwrap_or(true) {
            best = Some(Penetration::new(axis, overlap));
        }
    }

    best
}
