use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// Computes the direction pointing toward the right-hand-side of the oriented edge `a -> b`.
///
/// For a polygon with counter-clockwise vertices, this is the outward normal of the edge.
/// Returns `None` if the edge is degenerate.
#[inline]
pub fn ccw_face_normal(a: &Point<Real>, b: &Point<Real>) -> Option<UnitVector<Real>> {
    let ab = b - a;
    let res = Vector::new(ab.y, -ab.x);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}

/// Iterates through the edge normals of the closed polyline `points`.
///
/// The last point is connected to the first one. Degenerate edges have no normal
/// and are skipped.
pub fn ccw_face_normals(points: &[Point<Real>]) -> impl Iterator<Item = UnitVector<Real>> + '_ {
    (0..points.len()).filter_map(move |i1| {
        let i2 = (i1 + 1) % points.len();
        let normal = ccw_face_normal(&points[i1], &points[i2]);

        if normal.is_none() {
            log::trace!("Skipping the degenerate edge {i1} -> {i2}.");
        }

        normal
    })
}
