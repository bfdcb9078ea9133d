use crate::math::{Point, Real};
use crate::shape::{Polygon, Stroke};
use crate::utils;
use alloc::vec::Vec;
use ordered_float::OrderedFloat;

/// A crossing between a stroke segment and a polygon edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IntersectionRecord {
    /// The crossing point.
    pub point: Point<Real>,
    /// Index of the stroke segment `[points[i], points[i + 1]]` containing the crossing.
    pub stroke_segment: usize,
    /// Index of the polygon edge `[vertices[j], vertices[(j + 1) % n]]` containing the crossing.
    pub piece_edge: usize,
    /// Position of the crossing along its stroke segment, in `[0, 1]`.
    pub stroke_param: Real,
}

/// Computes every crossing between the segments of `stroke` and the edges of `polygon`.
///
/// The records are sorted in stroke-traversal order: by stroke segment,
/// then by position along that segment. Crossings found at the same position
/// of the same segment (e.g. when the stroke passes through a polygon vertex)
/// keep the order of the polygon edges.
///
/// Parallel pairs, including collinear overlapping ones, never yield a record.
pub fn stroke_polygon_intersections(stroke: &Stroke, polygon: &Polygon) -> Vec<IntersectionRecord> {
    let mut result = Vec::new();

    for (i, a, b) in stroke.segments() {
        let first = result.len();

        for (j, c, d) in polygon.edges() {
            if let Some(inter) = utils::segments_intersection2d(&a, &b, &c, &d) {
                result.push(IntersectionRecord {
                    point: inter.point,
                    stroke_segment: i,
                    piece_edge: j,
                    stroke_param: inter.param1,
                });
            }
        }

        // Stable sort, records of the same segment were pushed in edge order.
        result[first..].sort_by_key(|rec| OrderedFloat(rec.stroke_param));
    }

    result
}
