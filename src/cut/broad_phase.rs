use crate::shape::{Polygon, Stroke};
use crate::utils;

/// Tests if `stroke` may cut `polygon`, both being expressed in the same frame.
///
/// The stroke touches the polygon if any of its points lies inside of the
/// polygon, or if any of its segments touches any polygon edge. A stroke
/// that touches the polygon may still fail to split it.
///
/// The stroke tested here is the raw one, before extension, so a stroke that
/// stops short of a piece does not touch it even if its extension would.
pub fn stroke_touches_polygon(stroke: &Stroke, polygon: &Polygon) -> bool {
    if !stroke.aabb().intersects(&polygon.local_aabb()) {
        return false;
    }

    if stroke
        .points()
        .iter()
        .any(|pt| polygon.contains_local_point(pt))
    {
        return true;
    }

    stroke.segments().any(|(_, a, b)| {
        polygon
            .edges()
            .any(|(_, c, d)| utils::segments_touch2d(&a, &b, &c, &d))
    })
}
