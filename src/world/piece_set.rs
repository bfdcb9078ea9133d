use crate::math::{Point, Real};
use crate::piece::Piece;
use slab::Slab;

/// The identifier of a piece inside of a [`PieceSet`].
///
/// Identifiers of removed pieces may be reused by pieces inserted later.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    /// The raw index of this identifier.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The set of pieces currently alive.
#[derive(Clone, Debug, Default)]
pub struct PieceSet {
    pieces: Slab<Piece>,
}

impl PieceSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of pieces in this set.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Adds a piece to this set.
    pub fn insert(&mut self, piece: Piece) -> PieceId {
        PieceId(self.pieces.insert(piece))
    }

    /// Removes a piece from this set.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        self.pieces.try_remove(id.0)
    }

    /// Does this set contain the piece `id`?
    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.contains(id.0)
    }

    /// The piece with the identifier `id`.
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// The piece with the identifier `id`.
    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.0)
    }

    /// Iterates through the pieces of this set.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter().map(|(i, piece)| (PieceId(i), piece))
    }

    /// Iterates mutably through the pieces of this set.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PieceId, &mut Piece)> {
        self.pieces.iter_mut().map(|(i, piece)| (PieceId(i), piece))
    }

    /// Removes every piece from this set.
    pub fn clear(&mut self) {
        self.pieces.clear()
    }

    /// The total area covered by the pieces of this set.
    pub fn total_area(&self) -> Real {
        self.pieces.iter().map(|(_, piece)| piece.area()).sum()
    }

    /// The first piece, in iteration order, containing the world-space point `pt`.
    pub fn piece_at(&self, pt: &Point<Real>) -> Option<PieceId> {
        self.iter()
            .find(|(_, piece)| piece.contains_point(pt))
            .map(|(id, _)| id)
    }
}

impl core::ops::Index<PieceId> for PieceSet {
    type Output = Piece;

    fn index(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }
}
