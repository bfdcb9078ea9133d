//! Axis Aligned Bounding Box.

use crate::math::{Isometry, Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// The box is defined by its minimum and maximum corners. Pieces use it to
/// decide how far a stroke must be extended so that it traverses them
/// completely, and to reject strokes that cannot possibly touch them.
///
/// **Invariant**: `mins.x ≤ maxs.x` and `mins.y ≤ maxs.y`, except for the
/// inverted box returned by [`Aabb::new_invalid`].
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use cleave2d::bounding_volume::Aabb;
/// use cleave2d::math::Point;
///
/// let aabb = Aabb::from_points([
///     Point::new(0.0, 0.0),
///     Point::new(30.0, 0.0),
///     Point::new(30.0, 40.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point::new(0.0, 0.0));
/// assert_eq!(aabb.maxs, Point::new(30.0, 40.0));
/// assert_eq!(aabb.diagonal_length(), 50.0);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its two extremal corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Merging any point into it with [`Aabb::take_point`] yields the AABB of
    /// that single point.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns an invalid AABB (see [`Aabb::new_invalid`]) if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(pt);
        }

        result
    }

    /// Creates a new AABB that tightly encloses a set of points (references).
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        Self::from_points(pts.into_iter().copied())
    }

    /// Creates a new AABB enclosing the points of `pts` transformed by `m`.
    pub fn from_transformed_points<'a, I>(m: &Isometry<Real>, pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        Self::from_points(pts.into_iter().map(|pt| m * pt))
    }

    /// Is this AABB valid, i.e., are its `mins` smaller than its `maxs` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..DIM).all(|i| self.mins[i] <= self.maxs[i])
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() * 0.5
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The length of the diagonal of this AABB.
    ///
    /// Any segment starting inside of this AABB and longer than its diagonal
    /// ends outside of it.
    #[inline]
    pub fn diagonal_length(&self) -> Real {
        self.extents().norm()
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Enlarges this AABB so it also contains `other`.
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// Enlarges this AABB by `margin` along every direction.
    #[inline]
    #[must_use]
    pub fn loosened(&self, margin: Real) -> Aabb {
        assert!(margin >= 0.0, "The loosening margin must be positive.");
        Aabb::new(
            self.mins + Vector::repeat(-margin),
            self.maxs + Vector::repeat(margin),
        )
    }

    /// Does this AABB contain a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Does this AABB intersect `other`? Touching boxes intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// The four corners of this AABB, in counter-clockwise order.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [
            Point::new(self.mins.x, self.mins.y),
            Point::new(self.maxs.x, self.mins.y),
            Point::new(self.maxs.x, self.maxs.y),
            Point::new(self.mins.x, self.maxs.y),
        ]
    }
}
