use crate::math::{Point, Real, UnitVector};

/// The interval covered by a shape once projected on an axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// The smallest projected value.
    pub min: Real,
    /// The largest projected value.
    pub max: Real,
}

impl Projection {
    /// Creates a new projection interval.
    #[inline]
    pub fn new(min: Real, max: Real) -> Self {
        Projection { min, max }
    }

    /// Projects a set of points onto `axis`.
    ///
    /// Returns `None` if `points` is empty.
    pub fn of_points(points: &[Point<Real>], axis: &UnitVector<Real>) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let first = first.coords.dot(axis);

        Some(rest.iter().fold(Projection::new(first, first), |proj, pt| {
            let dot = pt.coords.dot(axis);
            Projection::new(proj.min.min(dot), proj.max.max(dot))
        }))
    }

    /// Projects the circle with the given world-space center and radius onto `axis`.
    #[inline]
    pub fn of_circle(center: &Point<Real>, radius: Real, axis: &UnitVector<Real>) -> Self {
        let proj = center.coords.dot(axis);
        Projection::new(proj - radius, proj + radius)
    }

    /// Is there a gap between these two intervals?
    ///
    /// Intervals that merely touch are not separated.
    #[inline]
    pub fn is_separated_from(&self, other: &Projection) -> bool {
        self.max < other.min || other.max < self.min
    }

    /// The length of the intersection of the two intervals.
    ///
    /// This is negative if the intervals are separated.
    #[inline]
    pub fn overlap(&self, other: &Projection) -> Real {
        self.max.min(other.max) - self.min.max(other.min)
    }
}
