use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use alloc::vec::Vec;

/// Error indicating that a stroke could not be built from a set of points.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum StrokeError {
    /// A stroke must have at least two points.
    #[error("a stroke needs at least 2 points, found {0}.")]
    TooFewPoints(usize),
    /// One point has a NaN or infinite coordinate.
    #[error("the stroke point {0} has a non-finite coordinate.")]
    NonFinitePoint(usize),
}

/// An ordered path drawn by the user, in world-space.
///
/// A stroke has at least two points. It does not need to be simple nor
/// convex, and two consecutive points may coincide. The `i`-th segment goes
/// from `points[i]` to `points[i + 1]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Stroke {
    points: Vec<Point<Real>>,
}

impl Stroke {
    /// Builds a stroke from its ordered points.
    pub fn new(points: Vec<Point<Real>>) -> Result<Self, StrokeError> {
        if points.len() < 2 {
            return Err(StrokeError::TooFewPoints(points.len()));
        }

        if let Some(i) = points
            .iter()
            .position(|pt| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(StrokeError::NonFinitePoint(i));
        }

        Ok(Self { points })
    }

    /// Builds a stroke made of a single segment.
    pub fn from_segment(a: Point<Real>, b: Point<Real>) -> Result<Self, StrokeError> {
        Self::new(alloc::vec![a, b])
    }

    /// The points of this stroke.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Consumes `self` and returns its points.
    #[inline]
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }

    /// The number of points of this stroke.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The number of segments of this stroke.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.points.len() - 1
    }

    /// The first point of this stroke.
    #[inline]
    pub fn first(&self) -> Point<Real> {
        self.points[0]
    }

    /// The last point of this stroke.
    #[inline]
    pub fn last(&self) -> Point<Real> {
        self.points[self.points.len() - 1]
    }

    /// Iterates through the segments of this stroke, with their index.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = (usize, Point<Real>, Point<Real>)> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .map(|(i, seg)| (i, seg[0], seg[1]))
    }

    /// The total length of this stroke.
    pub fn length(&self) -> Real {
        self.segments().map(|(_, a, b)| na::distance(&a, &b)).sum()
    }

    /// The AABB of this stroke's points.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.points)
    }

    /// Adds a point at the beginning of this stroke.
    pub(crate) fn prepend(&mut self, pt: Point<Real>) {
        self.points.insert(0, pt);
    }

    /// Adds a point at the end of this stroke.
    pub(crate) fn append(&mut self, pt: Point<Real>) {
        self.points.push(pt);
    }
}

/// Accumulates pointer samples into a [`Stroke`].
///
/// Pointer events are not guaranteed to be spaced apart: the sampler drops
/// any sample closer than `min_spacing` to the previously kept one, as well as
/// non-finite samples.
#[derive(Clone, Debug, Default)]
pub struct StrokeSampler {
    points: Vec<Point<Real>>,
    min_spacing: Real,
}

impl StrokeSampler {
    /// A sampler that drops samples closer than `min_spacing` to the last kept sample.
    ///
    /// A zero spacing keeps every sample, including exact duplicates.
    pub fn new(min_spacing: Real) -> Self {
        Self {
            points: Vec::new(),
            min_spacing: min_spacing.max(0.0),
        }
    }

    /// Discards any pending sample and starts a new stroke at `pt`.
    pub fn begin(&mut self, pt: Point<Real>) {
        self.points.clear();
        let _ = self.push(pt);
    }

    /// Adds a sample to the stroke being drawn.
    ///
    /// Returns `true` if the sample was kept.
    pub fn push(&mut self, pt: Point<Real>) -> bool {
        if !pt.x.is_finite() || !pt.y.is_finite() {
            return false;
        }

        if let Some(last) = self.points.last() {
            if self.min_spacing > 0.0 && na::distance(last, &pt) < self.min_spacing {
                return false;
            }
        }

        self.points.push(pt);
        true
    }

    /// The samples kept so far.
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Is a stroke currently being sampled?
    pub fn is_drawing(&self) -> bool {
        !self.points.is_empty()
    }

    /// Ends the stroke being drawn.
    ///
    /// Returns `None` if fewer than two samples were kept. The sampler is
    /// empty afterward in both cases.
    pub fn finish(&mut self) -> Option<Stroke> {
        Stroke::new(core::mem::take(&mut self.points)).ok()
    }

    /// Discards the stroke being drawn.
    pub fn cancel(&mut self) {
        self.points.clear();
    }
}
