//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::{ccw_face_normal, ccw_face_normals};
pub use self::center::center;
pub use self::sorted_pair::SortedPair;

mod ccw_face_normal;
mod center;
mod sorted_pair;
