use crate::math::{Real, UnitVector, Vector};

/// Depth and direction of the overlap between two shapes.
///
/// The axis points from the first shape toward the second one: translating the
/// first shape by [`Penetration::mtv`] (or the second one by its opposite)
/// separates them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration {
    /// The unit axis along which the shapes overlap the least.
    pub axis: UnitVector<Real>,
    /// The overlap length along `axis`. Zero when the shapes are exactly touching.
    pub depth: Real,
}

impl Penetration {
    /// Creates a new penetration.
    #[inline]
    pub fn new(axis: UnitVector<Real>, depth: Real) -> Self {
        Penetration { axis, depth }
    }

    /// The minimum translation vector to apply to the first shape to separate it from the second.
    #[inline]
    pub fn mtv(&self) -> Vector<Real> {
        -*self.axis * self.depth
    }

    /// Swaps the role of both shapes by reversing the axis.
    #[inline]
    pub fn flip(&mut self) {
        self.axis = -self.axis;
    }

    /// Returns a new penetration with the role of both shapes swapped.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}
