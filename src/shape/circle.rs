use crate::math::{Isometry, Point, Real, Vector};
use na::RealField;

/// A circle shape.
///
/// The center is an offset from the origin of the body carrying the circle,
/// so a circle attached to a body at `pos` lies at `pos * center` in world-space.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Circle {
    /// The local-space center of the circle.
    pub center: Point<Real>,
    /// The radius of the circle.
    pub radius: Real,
}

impl Default for Circle {
    fn default() -> Self {
        Circle::with_radius(100.0)
    }
}

impl Circle {
    /// Creates a new circle with the given local center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Circle {
        Circle { center, radius }
    }

    /// Creates a new circle centered at the local origin.
    #[inline]
    pub fn with_radius(radius: Real) -> Circle {
        Circle::new(Point::origin(), radius)
    }

    /// Replaces both the local center and the radius of this circle.
    #[inline]
    pub fn set(&mut self, x: Real, y: Real, radius: Real) {
        self.center = Point::new(x, y);
        self.radius = radius;
    }

    /// Is this circle unable to take part in collision detection?
    ///
    /// A circle with a zero or negative radius is degenerate.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }

    /// The center of this circle once its body is placed at `pos`.
    #[inline]
    pub fn world_center(&self, pos: &Isometry<Real>) -> Point<Real> {
        pos * self.center
    }

    /// Discretizes the boundary of this circle into `nsubdivs` segments.
    ///
    /// The returned points are in local-space and implicitly closed. Nothing is
    /// returned for a degenerate circle or when `nsubdivs < 3`.
    pub fn to_polyline(&self, nsubdivs: u32) -> Vec<Point<Real>> {
        if nsubdivs < 3 || self.is_degenerate() {
            return Vec::new();
        }

        let dtheta = Real::two_pi() / na::convert::<f64, Real>(nsubdivs as f64);

        (0..nsubdivs)
            .map(|i| {
                let theta = dtheta * na::convert::<f64, Real>(i as f64);
                self.center + Vector::new(theta.cos(), theta.sin()) * self.radius
            })
            .collect()
    }
}
