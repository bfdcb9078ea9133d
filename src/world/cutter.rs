use super::{CutConfig, PieceId, PieceSet};
use crate::cut::{self, CutRejection, PieceCut};
use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::piece::{Piece, PieceFactory};
use crate::shape::Stroke;
use alloc::vec::Vec;
use smallvec::SmallVec;

/// A piece added to a [`PieceSet`] by a cut.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AddedPiece {
    /// The identifier of the new piece.
    pub id: PieceId,
    /// The identifier the cut piece had before being removed.
    pub parent: PieceId,
    /// The impulse to apply to the new piece so that it drifts away from its sibling.
    ///
    /// `None` if the new piece is centered on its parent.
    pub impulse: Option<Vector<Real>>,
}

/// What a collection-level cut changed.
///
/// Identifiers in `removed` are no longer valid in the returned set, but
/// may have been reused by pieces of `added`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CutReport {
    /// The pieces consumed by the cut.
    pub removed: Vec<PieceId>,
    /// The pieces produced by the cut.
    pub added: Vec<AddedPiece>,
    /// The pieces touched by the stroke but left unchanged, with the reason why.
    pub rejected: Vec<(PieceId, CutRejection)>,
}

impl CutReport {
    /// Did the cut change nothing?
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Applies strokes to a whole set of pieces.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Cutter {
    config: CutConfig,
    factory: PieceFactory,
}

impl Cutter {
    /// A cutter with the given parameters.
    pub fn new(config: CutConfig) -> Self {
        Self {
            config,
            factory: PieceFactory::new(config.density),
        }
    }

    /// The parameters of this cutter.
    pub fn config(&self) -> &CutConfig {
        &self.config
    }

    /// The factory building the new pieces.
    pub fn factory(&self) -> &PieceFactory {
        &self.factory
    }

    /// Cuts every piece of `pieces` touched by the world-space `stroke`.
    ///
    /// Each piece is cut independently, against the set as it was before the
    /// cut: pieces produced by this stroke are never cut again by it. The
    /// set is updated only once every piece has been resolved, and returned
    /// along with the list of changes. Pieces the stroke doesn't touch keep
    /// their identifier.
    pub fn cut(&self, mut pieces: PieceSet, stroke: &Stroke) -> (PieceSet, CutReport) {
        let mut report = CutReport::default();

        if stroke.num_points() < self.config.min_stroke_points {
            log::debug!(
                "Ignoring stroke with {} points (minimum {}).",
                stroke.num_points(),
                self.config.min_stroke_points
            );
            return (pieces, report);
        }

        let mut outcomes: SmallVec<[(PieceId, PieceCut); 4]> = SmallVec::new();

        for (id, piece) in pieces.iter() {
            if !cut::stroke_touches_polygon(stroke, &piece.world_polygon()) {
                continue;
            }

            let outcome = cut::cut_piece(piece, stroke, &self.factory, &self.config.tolerances);
            log::debug!("Cutting piece {:?}: {}.", id, outcome_name(&outcome));
            outcomes.push((id, outcome));
        }

        for (id, outcome) in outcomes {
            if let PieceCut::NoOp(reason) = outcome {
                report.rejected.push((id, reason));
                continue;
            }

            let Some(parent) = pieces.remove(id) else {
                continue;
            };
            report.removed.push(id);

            for child in outcome.into_pieces() {
                let impulse = self.separation_impulse(&parent, &child);
                let child_id = pieces.insert(child);
                report.added.push(AddedPiece {
                    id: child_id,
                    parent: id,
                    impulse,
                });
            }
        }

        log::debug!(
            "Cut done: {} removed, {} added, {} rejected, {} pieces left.",
            report.removed.len(),
            report.added.len(),
            report.rejected.len(),
            pieces.len()
        );

        (pieces, report)
    }

    /// Replaces the piece `id` by a copy scaled by `factor`.
    ///
    /// Returns the identifier of the new piece, or `None` if `id` doesn't
    /// exist or `factor` is invalid, in which case `pieces` is left unchanged.
    pub fn resize(&self, pieces: &mut PieceSet, id: PieceId, factor: Real) -> Option<PieceId> {
        let resized = self.factory.resize(pieces.get(id)?, factor)?;
        let _ = pieces.remove(id);
        Some(pieces.insert(resized))
    }

    fn separation_impulse(&self, parent: &Piece, child: &Piece) -> Option<Vector<Real>> {
        let dir = child.position.translation.vector - parent.position.translation.vector;
        let dir = dir.try_normalize(DEFAULT_EPSILON)?;
        Some(dir * (self.config.separation_impulse * child.area()))
    }
}

fn outcome_name(outcome: &PieceCut) -> &'static str {
    match outcome {
        PieceCut::NoOp(CutRejection::NoIntersection { .. }) => "no intersection",
        PieceCut::NoOp(CutRejection::DegenerateHulls) => "degenerate hulls",
        PieceCut::NoOp(CutRejection::NothingCut) => "nothing cut",
        PieceCut::Partial(_) => "partial",
        PieceCut::Split(..) => "split",
    }
}
