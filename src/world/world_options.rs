use crate::math::{Real, NEARLY_ZERO};

/// Configuration of a [`CollisionWorld`](crate::world::CollisionWorld).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldOptions {
    /// Extra distance a blocking circle is pushed by when separated from a polygon.
    ///
    /// This leaves a small gap so that the pair does not keep touching.
    pub circle_polygon_nudge: Real,
    /// Overlap depths below this value are reported but not resolved.
    pub epsilon: Real,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            circle_polygon_nudge: 0.01,
            epsilon: NEARLY_ZERO,
        }
    }
}
