/*!
sat2d
========

**sat2d** is a 2-dimensional collision library based on the Separating Axis
Theorem, written with the rust programming language.

It detects overlaps between convex polygons and circles, computes the minimum
translation vector separating them, and steps a [`world::CollisionWorld`] that
reports when pairs of bodies start and stop overlapping.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive. Disable the default features to use `f64`.");
#[cfg(not(any(feature = "f32", feature = "f64")))]
std::compile_error!("One of the `f32` or `f64` features must be enabled.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod host_module;
pub mod query;
pub mod shape;
pub mod utils;
pub mod world;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(all(feature = "f32", not(feature = "f64")))]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Point2, Translation2, UnitVector2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// Lengths and overlap depths below this value are treated as zero.
    pub const NEARLY_ZERO: Real = 1.0e-4;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;

    /// The translation type.
    pub use Translation2 as Translation;
}
