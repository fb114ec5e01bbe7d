use crate::math::{Isometry, Real, UnitVector, Vector, NEARLY_ZERO};
use crate::query::Penetration;
use crate::shape::Circle;
use na::ComplexField;

/// Computes the penetration between two circles.
///
/// The circles overlap if the distance between their centers does not exceed
/// the sum of their radii. The axis points from the center of `circle1` toward
/// the center of `circle2`. If both centers coincide, the axis is `+x` and the
/// depth is the sum of the radii.
#[inline]
pub fn penetration_circle_circle(
    pos1: &Isometry<Real>,
    circle1: &Circle,
    pos2: &Isometry<Real>,
    circle2: &Circle,
) -> Option<Penetration> {
    let center1 = circle1.world_center(pos1);
    let center2 = circle2.world_center(pos2);
    let delta = center2 - center1;
    let distance_squared = delta.norm_squared();
    let sum_radius = circle1.radius + circle2.radius;

    if distance_squared > sum_radius * sum_radius {
        return None;
    }

    let distance = ComplexField::sqrt(distance_squared);

    if distance > NEARLY_ZERO {
        let axis = UnitVector::new_unchecked(delta / distance);
        Some(Penetration::new(axis, sum_radius - distance))
    } else {
        Some(Penetration::new(Vector::x_axis(), sum_radius))
    }
}
