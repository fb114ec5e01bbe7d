use crate::math::{Isometry, Point, Real, UnitVector, NEARLY_ZERO};
use crate::query::sat::find_min_overlap_axis;
use crate::query::{Penetration, Projection};
use crate::shape::{Circle, Polygon};
use crate::utils;

/// Computes the penetration between a circle and a convex polygon.
///
/// The candidate axes are the edge normals of the polygon, plus the axis
/// joining the circle center to the closest polygon vertex (unless the center
/// lies on that vertex). The returned axis points from the circle toward the
/// polygon, i.e., opposite to the direction from the closest vertex to the
/// circle center. If the circle center lies on the closest vertex, the
/// outward normal of the minimum overlap edge is returned as is.
pub fn penetration_circle_polygon(
    pos1: &Isometry<Real>,
    circle: &Circle,
    pos2: &Isometry<Real>,
    polygon: &Polygon,
) -> Option<Penetration> {
    let center = circle.world_center(pos1);
    let points = polygon.transformed_points(pos2);
    let closest = closest_vertex(&center, &points)?;

    let vertex_axis = UnitVector::try_new(closest - center, NEARLY_ZERO);
    let axes = utils::ccw_face_normals(&points).chain(vertex_axis);

    // The polygon plays the role of the first shape for the projections.
    let pen = find_min_overlap_axis(&points, axes, |axis| {
        Some(Projection::of_circle(&center, circle.radius, axis))
    })?;

    if pen.axis.dot(&(center - closest)) > 0.0 {
        Some(pen.flipped())
    } else {
        Some(pen)
    }
}

/// The first of the vertices closest to `pt`.
fn closest_vertex(pt: &Point<Real>, vertices: &[Point<Real>]) -> Option<Point<Real>> {
    let mut best = None;
    let mut best_dist = Real::MAX;

    for vtx in vertices {
        let dist = na::distance_squared(pt, vtx);

        if dist < best_dist {
            best_dist = dist;
            best = Some(*vtx);
        }
    }

    best
}
