use cleave2d::math::{Isometry, Point, Real, Vector};
use cleave2d::piece::{Bitmap, ImageFit, Piece, PieceFactory, SharedTexture};
use cleave2d::shape::Stroke;
use cleave2d::world::{Cutter, PhysicsAdapter, PhysicsSync, PieceSet};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Insert(u32),
    Remove(u32),
    SetStatic(u32, bool),
    Impulse(u32),
}

// A fake engine recording every call it receives.
#[derive(Default, Debug)]
struct RecordingEngine {
    next_handle: u32,
    bodies: HashMap<u32, Isometry<Real>>,
    calls: Vec<Call>,
}

impl PhysicsAdapter for RecordingEngine {
    type Handle = u32;

    fn insert_body(&mut self, piece: &Piece) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        let _ = self.bodies.insert(handle, *piece.position());
        self.calls.push(Call::Insert(handle));
        handle
    }

    fn remove_body(&mut self, handle: u32) {
        assert!(self.bodies.remove(&handle).is_some(), "body {handle} removed twice");
        self.calls.push(Call::Remove(handle));
    }

    fn body_position(&self, handle: u32) -> Option<Isometry<Real>> {
        self.bodies.get(&handle).copied()
    }

    fn set_static(&mut self, handle: u32, is_static: bool) {
        self.calls.push(Call::SetStatic(handle, is_static));
    }

    fn apply_impulse(&mut self, handle: u32, _impulse: Vector<Real>) {
        self.calls.push(Call::Impulse(handle));
    }
}

fn image_set() -> PieceSet {
    let texture = SharedTexture::new(Bitmap::filled(400, 300, [0; 4]).unwrap());
    let image = PieceFactory::default()
        .initial_piece(texture, &ImageFit::default())
        .unwrap();
    let mut pieces = PieceSet::new();
    let _ = pieces.insert(image);
    pieces
}

#[test]
fn cut_removes_the_parent_body_once() {
    let pieces = image_set();
    let mut sync = PhysicsSync::new(RecordingEngine::default());
    sync.spawn(&pieces);
    assert_eq!(sync.adapter().calls, vec![Call::Insert(0)]);

    // The image covers [300, 700] x [200, 500].
    let stroke = Stroke::from_segment(Point::new(250.0, 350.0), Point::new(750.0, 350.0)).unwrap();
    let (pieces, report) = Cutter::default().cut(pieces, &stroke);
    sync.apply(&report, &pieces);

    assert_eq!(
        sync.adapter().calls,
        vec![
            Call::Insert(0),
            Call::Remove(0),
            Call::Insert(1),
            Call::Impulse(1),
            Call::Insert(2),
            Call::Impulse(2),
        ]
    );
    assert_eq!(sync.num_bodies(), 2);
    assert_eq!(sync.adapter().bodies.len(), 2);
    for added in &report.added {
        assert!(sync.handle(added.id).is_some());
    }
}

#[test]
fn rejected_cut_does_not_call_the_engine() {
    let pieces = image_set();
    let mut sync = PhysicsSync::new(RecordingEngine::default());
    sync.spawn(&pieces);

    let stroke = Stroke::from_segment(Point::new(0.0, 650.0), Point::new(900.0, 650.0)).unwrap();
    let (pieces, report) = Cutter::default().cut(pieces, &stroke);
    sync.apply(&report, &pieces);

    assert!(report.is_noop());
    assert_eq!(sync.adapter().calls, vec![Call::Insert(0)]);
    assert_eq!(pieces.len(), 1);
}

#[test]
fn positions_are_pulled_from_the_engine() {
    let mut pieces = image_set();
    let mut sync = PhysicsSync::new(RecordingEngine::default());
    sync.spawn(&pieces);

    let moved = Isometry::new(Vector::new(10.0, 20.0), 0.5);
    let _ = sync.adapter_mut().bodies.insert(0, moved);
    sync.pull_positions(&mut pieces);

    let (_, piece) = pieces.iter().next().unwrap();
    assert_eq!(piece.position(), &moved);
}

#[test]
fn pickup_releases_and_resize_replaces() {
    let mut pieces = image_set();
    let mut sync = PhysicsSync::new(RecordingEngine::default());
    sync.spawn(&pieces);

    let id = pieces.piece_at(&Point::new(500.0, 350.0)).unwrap();
    assert!(pieces[id].is_static());
    sync.set_static(id, false, &mut pieces);
    assert!(!pieces[id].is_static());

    let new_id = Cutter::default().resize(&mut pieces, id, 0.5).unwrap();
    sync.replace(id, new_id, &pieces);

    assert_eq!(
        sync.adapter().calls,
        vec![
            Call::Insert(0),
            Call::SetStatic(0, false),
            Call::Remove(0),
            Call::Insert(1),
        ]
    );
    assert_eq!(sync.handle(new_id), Some(1));

    sync.clear();
    assert_eq!(sync.num_bodies(), 0);
    assert!(sync.into_adapter().bodies.is_empty());
}
