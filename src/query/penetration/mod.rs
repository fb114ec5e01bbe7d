//! Implementation details of the `penetration` and `intersection_test` functions.

pub use self::penetration::Penetration;
pub use self::penetration_shape_shape::{intersection_test, penetration};

mod penetration;
mod penetration_shape_shape;
