use crate::math::{Real, DEFAULT_EPSILON};
use crate::shape::{Polygon, Stroke};

/// Extends `stroke` so that it fully traverses the bounding box of `target`.
///
/// Both ends of the stroke are pushed outward by the diagonal length of the
/// AABB of `target`, which must be expressed in the same frame as the stroke
/// (usually world-space). A point is prepended before the first point along
/// the reversed first segment, and another is appended after the last one
/// along the last segment. The new endpoints end up outside of the target's
/// bounding box whenever the stroke starts and ends inside of that box.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use cleave2d::cut::extend_stroke;
/// use cleave2d::math::{Point, Vector};
/// use cleave2d::shape::{Polygon, Stroke};
///
/// let square = Polygon::rectangle(Vector::new(50.0, 50.0)).unwrap();
/// let stroke = Stroke::from_segment(Point::new(-20.0, 0.0), Point::new(20.0, 0.0)).unwrap();
/// let extended = extend_stroke(&stroke, &square);
///
/// assert_eq!(extended.num_points(), 4);
/// assert!(!square.local_aabb().contains_local_point(&extended.first()));
/// assert!(!square.local_aabb().contains_local_point(&extended.last()));
/// # }
/// ```
pub fn extend_stroke(stroke: &Stroke, target: &Polygon) -> Stroke {
    let distance = target.local_aabb().diagonal_length();
    extend_stroke_by(stroke, distance)
}

/// Extends both ends of `stroke` by `distance`.
///
/// An end whose boundary segment is too short to be normalized (length
/// smaller than [`DEFAULT_EPSILON`]) is left as is. A non-finite or negative
/// distance leaves the stroke unchanged.
pub fn extend_stroke_by(stroke: &Stroke, distance: Real) -> Stroke {
    let mut result = stroke.clone();

    if !distance.is_finite() || distance < 0.0 {
        log::warn!("Cannot extend a stroke by the distance {}.", distance);
        return result;
    }

    let pts = stroke.points();
    let n = pts.len();

    match (pts[0] - pts[1]).try_normalize(DEFAULT_EPSILON) {
        Some(dir) => result.prepend(pts[0] + dir * distance),
        None => log::trace!("Stroke start is degenerate, not extended."),
    }

    match (pts[n - 1] - pts[n - 2]).try_normalize(DEFAULT_EPSILON) {
        Some(dir) => result.append(pts[n - 1] + dir * distance),
        None => log::trace!("Stroke end is degenerate, not extended."),
    }

    result
}
