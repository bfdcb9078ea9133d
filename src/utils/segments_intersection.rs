use crate::math::{Point, Real};
use num::Zero;

/// Intersection point between two segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentsIntersection {
    /// The intersection point.
    pub point: Point<Real>,
    /// Parameter of the intersection on the first segment `[a, b]`, in `[0, 1]`.
    ///
    /// The intersection point is `a + (b - a) * param1`.
    pub param1: Real,
    /// Parameter of the intersection on the second segment `[c, d]`, in `[0, 1]`.
    pub param2: Real,
}

/// Computes the intersection point between the segments `[a, b]` and `[c, d]`.
///
/// Both segments are expressed parametrically and the intersection is
/// accepted only if both parameters lie in `[0, 1]`, bounds included, so a
/// segment ending exactly on the other one intersects it.
///
/// Parallel segments (including collinear overlapping ones) have a zero
/// denominator and yield `None`: no attempt is made at computing their
/// overlap.
pub fn segments_intersection2d(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> Option<SegmentsIntersection> {
    let ab = b - a;
    let cd = d - c;
    let ca = a - c;
    let denom = ab.perp(&cd);

    if denom.is_zero() {
        return None;
    }

    let param1 = cd.perp(&ca) / denom;
    let param2 = ab.perp(&ca) / denom;

    // NaN parameters fail these tests as well.
    if param1 >= 0.0 && param1 <= 1.0 && param2 >= 0.0 && param2 <= 1.0 {
        Some(SegmentsIntersection {
            point: a + ab * param1,
            param1,
            param2,
        })
    } else {
        None
    }
}

/// The orientation of a triangle, i.e., the side of the line `[a, b]` the point `c` lies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// `c` is on the left of `[a, b]` (counter-clockwise triangle).
    Ccw,
    /// `c` is on the right of `[a, b]` (clockwise triangle).
    Cw,
    /// The three points are exactly collinear.
    Collinear,
}

impl Orientation {
    /// The orientation of the triangle `a, b, c`.
    pub fn of(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Self {
        let det = (b - a).perp(&(c - a));

        if det > 0.0 {
            Orientation::Ccw
        } else if det < 0.0 {
            Orientation::Cw
        } else {
            Orientation::Collinear
        }
    }
}

/// Tests if the segments `[a, b]` and `[c, d]` touch.
///
/// Unlike [`segments_intersection2d`], this is a pure predicate based on
/// orientation tests: collinear overlapping segments and segments sharing an
/// endpoint touch.
pub fn segments_touch2d(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> bool {
    let o1 = Orientation::of(c, d, a);
    let o2 = Orientation::of(c, d, b);
    let o3 = Orientation::of(a, b, c);
    let o4 = Orientation::of(a, b, d);

    let straddles = |o1: Orientation, o2: Orientation| {
        matches!(
            (o1, o2),
            (Orientation::Ccw, Orientation::Cw) | (Orientation::Cw, Orientation::Ccw)
        )
    };

    if straddles(o1, o2) && straddles(o3, o4) {
        return true;
    }

    (o1 == Orientation::Collinear && in_bounding_box(c, d, a))
        || (o2 == Orientation::Collinear && in_bounding_box(c, d, b))
        || (o3 == Orientation::Collinear && in_bounding_box(a, b, c))
        || (o4 == Orientation::Collinear && in_bounding_box(a, b, d))
}

// Checks that `c` is in the bounding box of `[a, b]`.
// Assumes the three points are collinear.
fn in_bounding_box(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    c.x <= a.x.max(b.x) && c.x >= a.x.min(b.x) && c.y <= a.y.max(b.y) && c.y >= a.y.min(b.y)
}
