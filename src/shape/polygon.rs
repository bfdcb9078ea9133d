use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::utils;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Error indicating that a polygon could not be built from a set of vertices.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A polygon must have at least three vertices.
    #[error("a polygon needs at least 3 vertices, found {0}.")]
    TooFewVertices(usize),
    /// One vertex has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite coordinate.")]
    NonFiniteVertex(usize),
}

/// The winding order of a polygon's vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winding {
    /// The vertices are given in counter-clockwise order (positive signed area).
    CounterClockwise,
    /// The vertices are given in clockwise order (negative signed area).
    Clockwise,
    /// The polygon has a zero signed area.
    Degenerate,
}

/// A closed planar polygon, the outline of a piece.
///
/// The polygon is implicitly closed: `vertices[n - 1]` and `vertices[0]` are
/// connected by an edge. The `i`-th edge goes from `vertices[i]` to
/// `vertices[(i + 1) % n]`.
///
/// A polygon always has at least three vertices, all of them finite. It is
/// expected, but not checked, to be simple (not self-intersecting); either
/// winding is accepted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
}

impl Polygon {
    /// Builds a new polygon from its ordered vertices.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use cleave2d::math::Point;
    /// use cleave2d::shape::{Polygon, PolygonError};
    ///
    /// let square = Polygon::new(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(100.0, 0.0),
    ///     Point::new(100.0, 100.0),
    ///     Point::new(0.0, 100.0),
    /// ])
    /// .unwrap();
    /// assert_eq!(square.area(), 10_000.0);
    ///
    /// let segment = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
    /// assert_eq!(segment, Err(PolygonError::TooFewVertices(2)));
    /// # }
    /// ```
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }

        if let Some(i) = vertices
            .iter()
            .position(|pt| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(PolygonError::NonFiniteVertex(i));
        }

        Ok(Self { vertices })
    }

    /// An axis-aligned rectangle centered at the origin, in counter-clockwise order.
    pub fn rectangle(half_extents: Vector<Real>) -> Result<Self, PolygonError> {
        let aabb = Aabb::new((-half_extents).into(), half_extents.into());
        Self::new(aabb.vertices().to_vec())
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// Consumes `self` and returns its vertices.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point<Real>> {
        self.vertices
    }

    /// The number of vertices (which is also the number of edges) of this polygon.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The `i`-th edge of this polygon.
    ///
    /// # Panics
    /// Panics if `i >= self.num_vertices()`.
    #[inline]
    pub fn edge(&self, i: usize) -> (Point<Real>, Point<Real>) {
        let j = (i + 1) % self.vertices.len();
        (self.vertices[i], self.vertices[j])
    }

    /// Iterates through the edges of this polygon, with their index.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (usize, Point<Real>, Point<Real>)> + '_ {
        (0..self.vertices.len()).map(move |i| {
            let (a, b) = self.edge(i);
            (i, a, b)
        })
    }

    /// The signed area of this polygon, computed with the shoelace formula.
    ///
    /// Positive for counter-clockwise polygons.
    pub fn signed_area(&self) -> Real {
        signed_area(&self.vertices)
    }

    /// The area of this polygon.
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    /// The winding order of this polygon's vertices.
    pub fn winding(&self) -> Winding {
        let area = self.signed_area();

        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// The arithmetic mean of this polygon's vertices.
    pub fn vertex_center(&self) -> Point<Real> {
        utils::center(&self.vertices).unwrap_or_else(Point::origin)
    }

    /// The AABB of this polygon in its local frame.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.vertices)
    }

    /// The AABB of this polygon transformed by `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        Aabb::from_transformed_points(pos, &self.vertices)
    }

    /// This polygon with every vertex transformed by `pos`.
    #[must_use]
    pub fn transformed(&self, pos: &Isometry<Real>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|pt| pos * pt).collect(),
        }
    }

    /// This polygon with every vertex translated by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|pt| pt + shift).collect(),
        }
    }

    /// This polygon uniformly scaled by `factor` with respect to its local origin.
    ///
    /// Returns `None` if `factor` is not a finite, strictly positive number.
    #[must_use]
    pub fn scaled(&self, factor: Real) -> Option<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return None;
        }

        Some(Self {
            vertices: self.vertices.iter().map(|pt| pt * factor).collect(),
        })
    }

    /// Tests if a point, expressed in the same frame as this polygon, is inside of it.
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        utils::point_in_poly2d(pt, &self.vertices)
    }
}

/// The signed area of the closed polygon described by `vertices`.
pub(crate) fn signed_area(vertices: &[Point<Real>]) -> Real {
    let mut twice_area = 0.0;

    for (i, a) in vertices.iter().enumerate() {
        let b = &vertices[(i + 1) % vertices.len()];
        twice_area += a.x * b.y - b.x * a.y;
    }

    twice_area * 0.5
}
