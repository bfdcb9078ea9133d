use crate::math::{Point, Real};

/// Tests if the given point is inside an arbitrary closed polygon, with any orientation.
///
/// This uses the crossing-number rule: a horizontal ray is cast from `pt`
/// toward `+x` and the point is inside if the ray crosses the boundary an odd
/// number of times. The polygon is implicitly closed: its last and first
/// vertices are connected by an edge.
///
/// Points lying exactly on the boundary may be reported either way.
pub fn point_in_poly2d(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    if poly.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = poly.len() - 1;

    for (i, pi) in poly.iter().enumerate() {
        let pj = &poly[j];

        if (pi.y > pt.y) != (pj.y > pt.y) {
            // The edge straddles the ray's line so `pj.y - pi.y` can't be zero.
            let x_cross = (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x;
            if pt.x < x_cross {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}
