use crate::math::{Point, Real};

/// Computes the vertex center of a set of points.
///
/// Every point is weighted equally, so this is the arithmetic mean of the
/// points and not the area-weighted centroid of the polygon they may
/// describe. Pieces are anchored on this point.
///
/// Returns `None` if `pts` is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use cleave2d::utils::center;
/// use cleave2d::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(100.0, 0.0),
///     Point::new(100.0, 50.0),
///     Point::new(0.0, 50.0),
/// ];
///
/// assert_eq!(center(&points), Some(Point::new(50.0, 25.0)));
/// assert_eq!(center(&[]), None);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Option<Point<Real>> {
    let (first, rest) = pts.split_first()?;
    let denom = 1.0 / pts.len() as Real;
    let mut res = *first * denom;

    for pt in rest {
        res += pt.coords * denom;
    }

    Some(res)
}
