//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::point_in_poly2d::point_in_poly2d;
pub use self::segments_intersection::{
    segments_intersection2d, segments_touch2d, Orientation, SegmentsIntersection,
};

mod center;
mod point_in_poly2d;
mod segments_intersection;
