use crate::math::{Isometry, Point, Real};
use crate::shape::{Circle, Polygon};

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A circle shape.
    Circle = 0,
    /// A convex polygon shape.
    Polygon,
}

/// A shape that can take part in SAT collision detection.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A circle shape.
    Circle(Circle),
    /// A convex polygon shape.
    Polygon(Polygon),
}

impl Shape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Polygon(_) => ShapeType::Polygon,
        }
    }

    /// Converts this shape into a circle, if it is one.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            Shape::Polygon(_) => None,
        }
    }

    /// Converts this shape into a mutable circle, if it is one.
    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            Shape::Polygon(_) => None,
        }
    }

    /// Converts this shape into a polygon, if it is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            Shape::Circle(_) => None,
        }
    }

    /// Converts this shape into a mutable polygon, if it is one.
    pub fn as_polygon_mut(&mut self) -> Option<&mut Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            Shape::Circle(_) => None,
        }
    }

    /// Is this shape unable to take part in collision detection?
    pub fn is_degenerate(&self) -> bool {
        match self {
            Shape::Circle(c) => c.is_degenerate(),
            Shape::Polygon(p) => p.is_degenerate(),
        }
    }

    /// The world-space center of this shape once its body is placed at `pos`.
    ///
    /// For polygons, this is the average of the world-space vertices.
    pub fn world_centroid(&self, pos: &Isometry<Real>) -> Point<Real> {
        match self {
            Shape::Circle(c) => c.world_center(pos),
            Shape::Polygon(p) => p.world_centroid(pos),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
