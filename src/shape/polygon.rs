use crate::math::{Isometry, Point, Real, UnitVector};
use crate::utils;

/// Error indicating that a polygon operation was given invalid input.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A polygon taking part in collision detection needs at least three vertices.
    #[error("a polygon needs at least 3 vertices, {count} were given.")]
    NotEnoughVertices {
        /// The number of vertices given.
        count: usize,
    },
    /// The vertex index does not exist on this polygon.
    #[error("the vertex index {index} is out of bounds for a polygon with {len} vertices.")]
    VertexIndexOutOfBounds {
        /// The invalid index.
        index: usize,
        /// The number of vertices of the polygon.
        len: usize,
    },
}

/// A 2D convex polygon described by its local-space vertices.
///
/// Two consecutive vertices determine an edge, and the last vertex is
/// implicitly connected to the first one. Convexity is not checked: the
/// separating axis test assumes it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point<Real>>,
}

impl Polygon {
    /// Creates a polygon from its local-space vertices, without any validation.
    pub fn new(points: Vec<Point<Real>>) -> Self {
        Polygon { points }
    }

    /// Creates a polygon from its local-space vertices.
    ///
    /// Fails if fewer than three vertices are given.
    pub fn try_new(points: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        if points.len() < 3 {
            return Err(PolygonError::NotEnoughVertices {
                count: points.len(),
            });
        }

        Ok(Polygon { points })
    }

    /// Creates an axis-aligned rectangle centered at the local origin.
    pub fn rectangle(half_width: Real, half_height: Real) -> Self {
        Polygon::new(vec![
            Point::new(-half_width, -half_height),
            Point::new(half_width, -half_height),
            Point::new(half_width, half_height),
            Point::new(-half_width, half_height),
        ])
    }

    /// The local-space vertices of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this polygon have no vertex at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Is this polygon unable to take part in collision detection?
    ///
    /// A polygon with less than three vertices is degenerate.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Appends a vertex at the end of this polygon.
    pub fn push_point(&mut self, x: Real, y: Real) {
        self.points.push(Point::new(x, y));
    }

    /// Replaces the `i`-th vertex of this polygon.
    ///
    /// The polygon is left untouched if `i` is out of bounds.
    pub fn set_point(&mut self, i: usize, x: Real, y: Real) -> Result<(), PolygonError> {
        let len = self.points.len();
        let pt = self
            .points
            .get_mut(i)
            .ok_or(PolygonError::VertexIndexOutOfBounds { index: i, len })?;
        *pt = Point::new(x, y);
        Ok(())
    }

    /// Removes all the vertices of this polygon.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The vertices of this polygon once its body is placed at `pos`.
    pub fn transformed_points(&self, pos: &Isometry<Real>) -> Vec<Point<Real>> {
        self.points.iter().map(|pt| pos * pt).collect()
    }

    /// The edge normals of this polygon once its body is placed at `pos`.
    ///
    /// Degenerate edges (two identical consecutive vertices) have no normal and are skipped,
    /// so the result may have less elements than the polygon has edges.
    pub fn transformed_normals(&self, pos: &Isometry<Real>) -> Vec<UnitVector<Real>> {
        let points = self.transformed_points(pos);
        utils::ccw_face_normals(&points).collect()
    }

    /// The average of the vertices of this polygon once its body is placed at `pos`.
    ///
    /// This is the origin if the polygon has no vertex.
    pub fn world_centroid(&self, pos: &Isometry<Real>) -> Point<Real> {
        utils::center(&self.transformed_points(pos))
    }

    /// The world-space edges of this polygon, as segment endpoints.
    ///
    /// Nothing is returned if the polygon has less than two vertices.
    pub fn to_outline(&self, pos: &Isometry<Real>) -> Vec<[Point<Real>; 2]> {
        if self.points.len() < 2 {
            return Vec::new();
        }

        let points = self.transformed_points(pos);
        (0..points.len())
            .map(|i1| [points[i1], points[(i1 + 1) % points.len()]])
            .collect()
    }
}
