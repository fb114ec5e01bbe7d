use crate::math::{Isometry, Real, Vector};
use crate::query::sat::find_min_overlap_axis;
use crate::query::{Penetration, Projection};
use crate::shape::Polygon;
use crate::utils;

/// Computes the penetration between two convex polygons using the edge normals of both as candidate axes.
///
/// The returned axis points from the centroid of `poly1` toward the centroid
/// of `poly2`, or is the outward normal of the minimum overlap edge if both
/// centroids project to the same value on it. Returns `None` if one of the edge normals separates the
/// polygons, or if neither polygon has a non-degenerate edge.
///
/// Projections that only touch are not separated: such polygons overlap with
/// a depth of zero.
pub fn penetration_polygon_polygon(
    pos1: &Isometry<Real>,
    poly1: &Polygon,
    pos2: &Isometry<Real>,
    poly2: &Polygon,
) -> Option<Penetration> {
    let points1 = poly1.transformed_points(pos1);
    let points2 = poly2.transformed_points(pos2);

    let axes = utils::ccw_face_normals(&points1).chain(utils::ccw_face_normals(&points2));
    let pen = find_min_overlap_axis(&points1, axes, |axis| {
        Projection::of_points(&points2, axis)
    })?;

    let dir = utils::center(&points1) - utils::center(&points2);

    if pen.axis.dot(&dir) > 0.0 {
        Some(pen.flipped())
    } else {
        Some(pen)
    }
}

/// Computes the minimum translation vector to apply to `poly1` to push it out of `poly2`.
///
/// Returns the zero vector if the polygons do not overlap.
pub fn mtv_polygon_polygon(
    pos1: &Isometry<Real>,
    poly1: &Polygon,
    pos2: &Isometry<Real>,
    poly2: &Polygon,
) -> Vector<Real> {
    penetration_polygon_polygon(pos1, poly1, pos2, poly2)
        .map(|pen| pen.mtv())
        .unwrap_or_else(Vector::zeros)
}
