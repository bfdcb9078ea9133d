use super::{extend_stroke, stroke_polygon_intersections, IntersectionRecord};
use crate::math::{Point, Real};
use crate::shape::{Polygon, Stroke};
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Tolerances for splitting a polygon along a stroke.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "f32")] {
/// # use cleave2d::cut::SplitTolerances;
/// // Use default tolerances (recommended for most cases).
/// let default_tol = SplitTolerances::default();
///
/// // Or merge vertices closer than half a pixel.
/// let custom_tol = SplitTolerances {
///     duplicate_epsilon: 0.5,
///     ..SplitTolerances::default()
/// };
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SplitTolerances {
    /// Two consecutive hull vertices closer than this (on each axis) are merged.
    pub duplicate_epsilon: Real,
    /// A hull vertex is removed if the sine of the angle its two edges make is
    /// smaller than this, i.e., if it lies on the line joining its neighbors.
    pub collinear_epsilon: Real,
}

impl Default for SplitTolerances {
    fn default() -> Self {
        Self {
            duplicate_epsilon: Real::EPSILON * 100.0,
            collinear_epsilon: 1.0e-4,
        }
    }
}

/// The result of splitting a polygon along a stroke.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonSplit {
    /// Both hulls are valid polygons.
    ///
    /// The first one lies on the boundary walked from the entry crossing to the
    /// exit crossing, the second one on the boundary walked from the exit
    /// crossing back to the entry crossing.
    Pair(Polygon, Polygon),
    /// Only the first hull is valid, the second one had fewer than three vertices.
    First(Polygon),
    /// Only the second hull is valid, the first one had fewer than three vertices.
    Second(Polygon),
    /// Neither hull is valid.
    Degenerate,
    /// The stroke crosses the polygon boundary fewer than two times.
    Untouched,
}

impl PolygonSplit {
    /// The number of valid hulls.
    pub fn num_hulls(&self) -> usize {
        match self {
            Self::Pair(..) => 2,
            Self::First(_) | Self::Second(_) => 1,
            Self::Degenerate | Self::Untouched => 0,
        }
    }

    /// Consumes `self` and returns its valid hulls.
    pub fn into_hulls(self) -> Vec<Polygon> {
        match self {
            Self::Pair(a, b) => alloc::vec![a, b],
            Self::First(a) => alloc::vec![a],
            Self::Second(b) => alloc::vec![b],
            Self::Degenerate | Self::Untouched => Vec::new(),
        }
    }
}

impl Polygon {
    /// Splits this polygon along `stroke`, both being expressed in the same frame.
    ///
    /// The stroke is first extended with [`extend_stroke`] so that it can't stop
    /// partway into the polygon. Only the first and last crossings matter: if
    /// the stroke goes in and out several times, it still yields at most two
    /// hulls.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use cleave2d::cut::{PolygonSplit, SplitTolerances};
    /// use cleave2d::math::{Point, Vector};
    /// use cleave2d::shape::{Polygon, Stroke};
    ///
    /// let square = Polygon::rectangle(Vector::new(50.0, 50.0)).unwrap();
    /// let stroke = Stroke::from_segment(Point::new(-10.0, 0.0), Point::new(10.0, 0.0)).unwrap();
    ///
    /// match square.split_with_stroke(&stroke, &SplitTolerances::default()) {
    ///     PolygonSplit::Pair(top, bottom) => {
    ///         assert!((top.area() - 5000.0).abs() < 1.0e-2);
    ///         assert!((bottom.area() - 5000.0).abs() < 1.0e-2);
    ///     }
    ///     _ => unreachable!(),
    /// }
    /// # }
    /// ```
    pub fn split_with_stroke(&self, stroke: &Stroke, tolerances: &SplitTolerances) -> PolygonSplit {
        let extended = extend_stroke(stroke, self);
        let intersections = stroke_polygon_intersections(&extended, self);
        split_polygon_with_path(self, &extended, &intersections, tolerances)
    }
}

/// Splits `polygon` into two hulls, using the first and last crossings of `intersections`.
///
/// The `intersections` must have been computed by
/// [`stroke_polygon_intersections`] between `stroke` and `polygon`. Interior
/// crossings are ignored. The hulls are expressed in the same frame as
/// `polygon`, share the cut path as a common boundary, and keep the winding of
/// `polygon`.
pub fn split_polygon_with_path(
    polygon: &Polygon,
    stroke: &Stroke,
    intersections: &[IntersectionRecord],
    tolerances: &SplitTolerances,
) -> PolygonSplit {
    let (entry, exit) = match (intersections.first(), intersections.last()) {
        (Some(entry), Some(exit)) if intersections.len() >= 2 => (entry, exit),
        _ => return PolygonSplit::Untouched,
    };

    let [hull1, hull2] = hulls_along_path(polygon.vertices(), stroke.points(), entry, exit);
    let hull1 = into_valid_hull(hull1, tolerances);
    let hull2 = into_valid_hull(hull2, tolerances);

    match (hull1, hull2) {
        (Some(a), Some(b)) => PolygonSplit::Pair(a, b),
        (Some(a), None) => PolygonSplit::First(a),
        (None, Some(b)) => PolygonSplit::Second(b),
        (None, None) => PolygonSplit::Degenerate,
    }
}

/// Builds the two raw hulls on each side of the cut path, without any cleanup.
fn hulls_along_path(
    vertices: &[Point<Real>],
    stroke: &[Point<Real>],
    entry: &IntersectionRecord,
    exit: &IntersectionRecord,
) -> [Vec<Point<Real>>; 2] {
    let n = vertices.len();

    // The stroke points strictly between the two crossings.
    let interior = stroke
        .get(entry.stroke_segment + 1..exit.stroke_segment + 1)
        .unwrap_or(&[]);

    // Number of polygon vertices walked from one crossing to the other.
    let mut walk1 = (exit.piece_edge + n - entry.piece_edge) % n;
    let mut walk2 = (entry.piece_edge + n - exit.piece_edge) % n;

    if entry.piece_edge == exit.piece_edge {
        // The stroke bites the polygon through a single edge. One side is the
        // bite itself, the other one goes all the way around the boundary.
        let (a, b) = (vertices[entry.piece_edge], vertices[(entry.piece_edge + 1) % n]);
        if (exit.point - entry.point).dot(&(b - a)) >= 0.0 {
            walk2 = n;
        } else {
            walk1 = n;
        }
    }

    let mut hull1 = Vec::with_capacity(walk1 + interior.len() + 2);
    hull1.push(entry.point);
    hull1.extend((1..=walk1).map(|k| vertices[(entry.piece_edge + k) % n]));
    hull1.push(exit.point);
    hull1.extend(interior.iter().rev());

    let mut hull2 = Vec::with_capacity(walk2 + interior.len() + 2);
    hull2.push(exit.point);
    hull2.extend((1..=walk2).map(|k| vertices[(exit.piece_edge + k) % n]));
    hull2.push(entry.point);
    hull2.extend(interior.iter());

    [hull1, hull2]
}

/// Merges consecutive duplicate vertices, removes collinear ones, then validates the hull.
fn into_valid_hull(mut hull: Vec<Point<Real>>, tolerances: &SplitTolerances) -> Option<Polygon> {
    let eps = tolerances.duplicate_epsilon;
    hull.dedup_by(|b, a| relative_eq!(*a, *b, epsilon = eps));

    while hull.len() > 1 && relative_eq!(hull[0], hull[hull.len() - 1], epsilon = eps) {
        let _ = hull.pop();
    }

    remove_collinear_vertices(&mut hull, tolerances.collinear_epsilon);

    if hull.len() < 3 {
        log::trace!("Dropping degenerate hull with {} vertices.", hull.len());
        return None;
    }

    Polygon::new(hull).ok()
}

/// Removes, until none is left, the vertices lying on the line joining their
/// two neighbors. Straight stroke points along the cut path end up here.
fn remove_collinear_vertices(hull: &mut Vec<Point<Real>>, sin_eps: Real) {
    while hull.len() >= 3 {
        let n = hull.len();
        let collinear = (0..n).find(|&i| {
            let a = hull[(i + n - 1) % n];
            let b = hull[i];
            let c = hull[(i + 1) % n];
            let (ab, bc) = (b - a, c - b);
            ab.perp(&bc).abs() <= sin_eps * ab.norm() * bc.norm()
        });

        match collinear {
            Some(i) => {
                let _ = hull.remove(i);
            }
            None => break,
        }
    }
}
