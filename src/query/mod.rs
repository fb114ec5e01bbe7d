//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::penetration()`] to compute the axis and depth of the overlap between two shapes.
//! * [`query::intersection_test()`] to determine if two shapes are intersecting or not.
//!
//! # Specific cases
//! The functions exported by the [`sat`] submodule are more specific versions of the ones described above.
//! They have the form `[operation]_[shape1]_[shape2]()`, e.g., `penetration_circle_polygon`, and skip the
//! dispatch on the shape types as well as the degeneracy checks.
//!
//! [`query::penetration()`]: crate::query::penetration
//! [`query::intersection_test()`]: crate::query::intersection_test

pub use self::penetration::{intersection_test, penetration, Penetration};
pub use self::projection::Projection;

mod penetration;
mod projection;
pub mod sat;
