use super::{
    extend_stroke, split_polygon_with_path, stroke_polygon_intersections, PolygonSplit,
    SplitTolerances,
};
use crate::math::Real;
use crate::piece::{Piece, PieceFactory};
use crate::shape::Stroke;
use arrayvec::ArrayVec;

// Relative area difference below which a lone hull is the piece itself.
const SAME_AREA_TOLERANCE: Real = 1.0e-4;

/// The stages a piece goes through while being cut.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CutStage {
    /// The raw stroke was received.
    ReceivedStroke,
    /// The stroke was extended through the piece's bounding box.
    Extended,
    /// At least two crossings with the piece's outline were found.
    IntersectionsFound,
    /// The two hulls were built and cleaned up.
    HullsBuilt,
    /// New pieces were built from the valid hulls.
    PiecesFactored,
    /// The new pieces are ready to replace the cut piece.
    Committed,
}

/// The reason why a stroke left a piece untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CutRejection {
    /// The extended stroke crosses the piece outline fewer than two times.
    NoIntersection {
        /// The number of crossings found.
        found: usize,
    },
    /// Neither hull had at least three distinct vertices.
    DegenerateHulls,
    /// The only valid hull covers the whole piece, e.g. when the stroke grazes a corner.
    NothingCut,
}

/// The outcome of cutting a single piece.
#[derive(Clone, Debug)]
pub enum PieceCut {
    /// The piece is kept unchanged.
    NoOp(CutRejection),
    /// Only one hull was valid, and it is smaller than the piece: the piece is
    /// replaced by a single new piece.
    Partial(Piece),
    /// The piece is replaced by two new pieces.
    Split(Piece, Piece),
}

impl PieceCut {
    /// Did this cut leave the piece unchanged?
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp(_))
    }

    /// Consumes `self` and returns the pieces replacing the cut one.
    pub fn into_pieces(self) -> ArrayVec<Piece, 2> {
        let mut result = ArrayVec::new();

        match self {
            Self::NoOp(_) => {}
            Self::Partial(piece) => result.push(piece),
            Self::Split(a, b) => {
                result.push(a);
                result.push(b);
            }
        }

        result
    }
}

/// Cuts `piece` along the world-space `stroke`.
///
/// This runs the whole per-piece pipeline: the stroke is extended through
/// the piece's world polygon, intersected with it, the polygon is split
/// along the first and last crossings, and a new piece is built for each
/// valid hull. `piece` itself is never modified: on success, the caller is
/// responsible for replacing it with the returned pieces.
pub fn cut_piece(
    piece: &Piece,
    stroke: &Stroke,
    factory: &PieceFactory,
    tolerances: &SplitTolerances,
) -> PieceCut {
    log::trace!("{:?}: {} points.", CutStage::ReceivedStroke, stroke.num_points());
    let polygon = piece.world_polygon();

    let extended = extend_stroke(stroke, &polygon);
    log::trace!("{:?}: {} points.", CutStage::Extended, extended.num_points());

    let intersections = stroke_polygon_intersections(&extended, &polygon);
    if intersections.len() < 2 {
        log::trace!("No-op: {} crossing(s).", intersections.len());
        return PieceCut::NoOp(CutRejection::NoIntersection {
            found: intersections.len(),
        });
    }
    log::trace!(
        "{:?}: {} crossings.",
        CutStage::IntersectionsFound,
        intersections.len()
    );

    let split = split_polygon_with_path(&polygon, &extended, &intersections, tolerances);
    log::trace!("{:?}: {} valid hull(s).", CutStage::HullsBuilt, split.num_hulls());

    match &split {
        PolygonSplit::Degenerate | PolygonSplit::Untouched => {
            return PieceCut::NoOp(CutRejection::DegenerateHulls);
        }
        PolygonSplit::First(hull) | PolygonSplit::Second(hull)
            if relative_eq!(
                hull.area(),
                polygon.area(),
                max_relative = SAME_AREA_TOLERANCE
            ) =>
        {
            log::trace!("No-op: the only valid hull is the whole piece.");
            return PieceCut::NoOp(CutRejection::NothingCut);
        }
        _ => {}
    }

    let mut pieces = factory.build_split(split, piece).into_iter();
    log::trace!("{:?}", CutStage::PiecesFactored);

    let result = match (pieces.next(), pieces.next()) {
        (Some(a), Some(b)) => PieceCut::Split(a, b),
        (Some(a), None) => PieceCut::Partial(a),
        _ => PieceCut::NoOp(CutRejection::DegenerateHulls),
    };

    if !result.is_noop() {
        log::trace!("{:?}", CutStage::Committed);
    }

    result
}
