//! A world of bodies tested against each other once per step.
//!
//! Every registered body carries a [`Shape`](crate::shape::Shape), a position and a
//! [`CollisionResponse`]. Each call to [`CollisionWorld::step`] tests every pair of
//! bodies, reports the pairs that started or stopped overlapping through an
//! [`EventHandler`], and pushes apart the pairs where at least one body blocks.

pub use self::collision_body::{BodyHandle, CollisionBody};
pub use self::collision_event::{CollisionEvent, EventHandler};
pub use self::collision_response::CollisionResponse;
pub use self::collision_world::CollisionWorld;
pub use self::world_options::WorldOptions;

mod collision_body;
mod collision_event;
mod collision_response;
mod collision_world;
mod world_options;
