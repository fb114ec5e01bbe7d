use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Returns the origin if `pts` is empty.
///
/// ```
/// use sat2d::math::Point;
/// use sat2d::utils::center;
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
///
/// assert_eq!(center(&square), Point::new(1.0, 1.0));
/// assert_eq!(center(&[]), Point::origin());
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    if pts.is_empty() {
        return Point::origin();
    }

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));

    pts.iter()
        .fold(Point::origin(), |acc, pt| acc + pt.coords * denom)
}
