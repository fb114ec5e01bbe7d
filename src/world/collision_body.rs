use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Shape;
use crate::world::CollisionResponse;

/// The unique identifier of a body inside of a [`CollisionWorld`](crate::world::CollisionWorld).
///
/// The handle of a removed body may be given to a body inserted afterward.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(pub(crate) usize);

impl BodyHandle {
    /// The index of the body inside of its world storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A shape placed in the world, together with the way it reacts to overlaps.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionBody {
    shape: Shape,
    position: Isometry<Real>,
    response: CollisionResponse,
    pub(crate) colliding: bool,
    /// Arbitrary data attached to this body by the user.
    pub user_data: u128,
}

impl CollisionBody {
    /// Creates a new body with the given shape, at the origin, with the [`CollisionResponse::Overlap`] response.
    pub fn new(shape: impl Into<Shape>) -> Self {
        CollisionBody {
            shape: shape.into(),
            position: Isometry::identity(),
            response: CollisionResponse::default(),
            colliding: false,
            user_data: 0,
        }
    }

    /// Sets the initial position of this body.
    pub fn with_position(mut self, position: Isometry<Real>) -> Self {
        self.position = position;
        self
    }

    /// Sets the initial translation of this body.
    pub fn with_translation(mut self, x: Real, y: Real) -> Self {
        self.position.translation.vector = Vector::new(x, y);
        self
    }

    /// Sets the collision response of this body.
    pub fn with_response(mut self, response: CollisionResponse) -> Self {
        self.response = response;
        self
    }

    /// Sets the user data of this body.
    pub fn with_user_data(mut self, user_data: u128) -> Self {
        self.user_data = user_data;
        self
    }

    /// The shape of this body.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// A mutable reference to the shape of this body.
    #[inline]
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// The world-space position of this body.
    #[inline]
    pub fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    /// Sets the world-space position of this body.
    #[inline]
    pub fn set_position(&mut self, position: Isometry<Real>) {
        self.position = position;
    }

    /// Moves this body by `offset`, expressed in world-space.
    #[inline]
    pub fn translate(&mut self, offset: &Vector<Real>) {
        self.position.translation.vector += offset;
    }

    /// The collision response of this body.
    #[inline]
    pub fn response(&self) -> CollisionResponse {
        self.response
    }

    /// Sets the collision response of this body.
    #[inline]
    pub fn set_response(&mut self, response: CollisionResponse) {
        self.response = response;
    }

    /// Was this body overlapping any other body during the last world step?
    #[inline]
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// The world-space center of the shape of this body.
    #[inline]
    pub fn world_centroid(&self) -> Point<Real> {
        self.shape.world_centroid(&self.position)
    }

    /// Can this body be tested against other bodies?
    #[inline]
    pub(crate) fn is_active(&self) -> bool {
        !self.response.is_ignored() && !self.shape.is_degenerate()
    }
}
