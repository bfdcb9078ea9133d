use super::{CutReport, PieceId, PieceSet};
use crate::math::{Isometry, Real, Vector};
use crate::piece::Piece;
use alloc::collections::BTreeMap;
use core::fmt::Debug;

/// The rigid-body engine simulating the pieces.
///
/// The engine owns the pose of every body. Bodies are created from the
/// outline, density and material of a piece, at the piece's current pose.
pub trait PhysicsAdapter {
    /// The handle identifying a body inside of the engine.
    type Handle: Copy + Eq + Debug;

    /// Creates the rigid body of `piece`.
    fn insert_body(&mut self, piece: &Piece) -> Self::Handle;
    /// Removes a body from the simulation.
    fn remove_body(&mut self, handle: Self::Handle);
    /// The current pose of a body, if it exists.
    fn body_position(&self, handle: Self::Handle) -> Option<Isometry<Real>>;
    /// Pins a body in place, or releases it.
    fn set_static(&mut self, handle: Self::Handle, is_static: bool);
    /// Applies an impulse at the center of a body.
    fn apply_impulse(&mut self, handle: Self::Handle, impulse: Vector<Real>);
}

/// Mirrors the changes of a [`PieceSet`] onto a [`PhysicsAdapter`].
///
/// The piece set stays the single owner of the geometry; the sync only keeps
/// track of which body simulates which piece.
#[derive(Debug)]
pub struct PhysicsSync<P: PhysicsAdapter> {
    adapter: P,
    bodies: BTreeMap<PieceId, P::Handle>,
}

impl<P: PhysicsAdapter> PhysicsSync<P> {
    /// Wraps an engine with no registered pieces.
    pub fn new(adapter: P) -> Self {
        Self {
            adapter,
            bodies: BTreeMap::new(),
        }
    }

    /// The wrapped engine.
    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    /// The wrapped engine.
    pub fn adapter_mut(&mut self) -> &mut P {
        &mut self.adapter
    }

    /// Unwraps the engine.
    pub fn into_adapter(self) -> P {
        self.adapter
    }

    /// The body simulating the piece `id`.
    pub fn handle(&self, id: PieceId) -> Option<P::Handle> {
        self.bodies.get(&id).copied()
    }

    /// The number of registered bodies.
    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// Creates a body for each piece of `pieces` that doesn't have one yet.
    pub fn spawn(&mut self, pieces: &PieceSet) {
        for (id, piece) in pieces.iter() {
            if !self.bodies.contains_key(&id) {
                let _ = self.insert(id, piece);
            }
        }
    }

    /// Removes every body, for example before loading a new image.
    pub fn clear(&mut self) {
        for (_, handle) in core::mem::take(&mut self.bodies) {
            self.adapter.remove_body(handle);
        }
    }

    /// Copies the pose of every body into its piece.
    pub fn pull_positions(&self, pieces: &mut PieceSet) {
        for (id, piece) in pieces.iter_mut() {
            let pos = self
                .handle(id)
                .and_then(|handle| self.adapter.body_position(handle));

            if let Some(pos) = pos {
                piece.set_position(pos);
            }
        }
    }

    /// Applies the changes of a cut: removes the consumed bodies, creates the
    /// new ones, and pushes them apart.
    ///
    /// `pieces` is the set returned along with `report`. Nothing is sent to
    /// the engine if the cut changed nothing.
    pub fn apply(&mut self, report: &CutReport, pieces: &PieceSet) {
        if report.is_noop() {
            return;
        }

        // Removals first: identifiers of removed pieces may be reused by new ones.
        for id in &report.removed {
            self.remove(*id);
        }

        for added in &report.added {
            let Some(piece) = pieces.get(added.id) else {
                log::warn!("Cannot create a body for the unknown piece {:?}.", added.id);
                continue;
            };

            let handle = self.insert(added.id, piece);
            if let Some(impulse) = added.impulse {
                self.adapter.apply_impulse(handle, impulse);
            }
        }
    }

    /// Replaces the body of the piece `old` by a body for the piece `new`.
    pub fn replace(&mut self, old: PieceId, new: PieceId, pieces: &PieceSet) {
        self.remove(old);

        match pieces.get(new) {
            Some(piece) => {
                let _ = self.insert(new, piece);
            }
            None => log::warn!("Cannot create a body for the unknown piece {:?}.", new),
        }
    }

    /// Pins the piece `id` in place, or releases it.
    pub fn set_static(&mut self, id: PieceId, is_static: bool, pieces: &mut PieceSet) {
        if let Some(piece) = pieces.get_mut(id) {
            piece.set_static(is_static);
        }

        match self.handle(id) {
            Some(handle) => self.adapter.set_static(handle, is_static),
            None => log::warn!("The piece {:?} has no body.", id),
        }
    }

    fn insert(&mut self, id: PieceId, piece: &Piece) -> P::Handle {
        let handle = self.adapter.insert_body(piece);

        if let Some(previous) = self.bodies.insert(id, handle) {
            log::warn!("The piece {:?} already had a body, removing it.", id);
            self.adapter.remove_body(previous);
        }

        handle
    }

    fn remove(&mut self, id: PieceId) {
        match self.bodies.remove(&id) {
            Some(handle) => self.adapter.remove_body(handle),
            None => log::warn!("The piece {:?} has no body to remove.", id),
        }
    }
}
