use cleave2d::cut::CutRejection;
use cleave2d::math::{Isometry, Point, Real, Vector};
use cleave2d::piece::{Bitmap, ImageFit, Piece, PieceFactory, SharedTexture};
use cleave2d::shape::{Polygon, Stroke};
use cleave2d::world::{CutConfig, Cutter, PieceSet};

fn square_at(x: Real, y: Real) -> Piece {
    let texture = SharedTexture::new(Bitmap::filled(8, 8, [0; 4]).unwrap());
    let shape = Polygon::rectangle(Vector::new(50.0, 50.0)).unwrap();
    Piece::new(
        shape,
        Isometry::translation(x, y),
        texture,
        Vector::new(100.0, 100.0),
        0.001,
    )
}

#[test]
fn only_touched_pieces_are_cut() {
    let mut pieces = PieceSet::new();
    let left = pieces.insert(square_at(100.0, 100.0));
    let right = pieces.insert(square_at(400.0, 100.0));

    // Crosses the left square only.
    let stroke = Stroke::from_segment(Point::new(40.0, 100.0), Point::new(160.0, 100.0)).unwrap();
    let (pieces, report) = Cutter::default().cut(pieces, &stroke);

    assert_eq!(report.removed, vec![left]);
    assert_eq!(report.added.len(), 2);
    assert!(report.added.iter().all(|added| added.parent == left));
    assert!(report.rejected.is_empty());

    assert_eq!(pieces.len(), 3);
    assert!(pieces.contains(right));
    assert_eq!(pieces[right].position(), &Isometry::translation(400.0, 100.0));
    assert_relative_eq!(pieces.total_area(), 20_000.0, max_relative = 1.0e-4);

    // The new pieces are pushed away from each other.
    let impulses: Vec<_> = report.added.iter().map(|a| a.impulse.unwrap()).collect();
    assert!(impulses[0].dot(&impulses[1]) < 0.0);
    for added in &report.added {
        let piece = &pieces[added.id];
        let expected = 0.0005 * piece.area();
        assert_relative_eq!(added.impulse.unwrap().norm(), expected, max_relative = 1.0e-4);
    }
}

#[test]
fn one_stroke_can_cut_several_pieces() {
    let mut pieces = PieceSet::new();
    let a = pieces.insert(square_at(100.0, 100.0));
    let b = pieces.insert(square_at(300.0, 100.0));

    let stroke = Stroke::new(vec![
        Point::new(0.0, 90.0),
        Point::new(200.0, 100.0),
        Point::new(400.0, 110.0),
    ])
    .unwrap();
    let (pieces, report) = Cutter::default().cut(pieces, &stroke);

    assert_eq!(report.removed, vec![a, b]);
    assert_eq!(report.added.len(), 4);
    assert_eq!(pieces.len(), 4);
    assert_relative_eq!(pieces.total_area(), 20_000.0, max_relative = 1.0e-4);
}

#[test]
fn short_strokes_are_ignored() {
    let mut pieces = PieceSet::new();
    let id = pieces.insert(square_at(100.0, 100.0));
    let cutter = Cutter::new(CutConfig {
        min_stroke_points: 5,
        ..CutConfig::default()
    });

    let stroke = Stroke::from_segment(Point::new(0.0, 100.0), Point::new(200.0, 100.0)).unwrap();
    let (pieces, report) = cutter.cut(pieces, &stroke);

    assert!(report.is_noop());
    assert!(report.rejected.is_empty());
    assert!(pieces.contains(id));
    assert_eq!(pieces.len(), 1);
}

#[test]
fn taps_are_rejected() {
    let mut pieces = PieceSet::new();
    let id = pieces.insert(square_at(100.0, 100.0));

    let tap = Stroke::from_segment(Point::new(90.0, 90.0), Point::new(90.0, 90.0)).unwrap();
    let (pieces, report) = Cutter::default().cut(pieces, &tap);

    assert!(report.is_noop());
    assert_eq!(
        report.rejected,
        vec![(id, CutRejection::NoIntersection { found: 0 })]
    );
    assert_eq!(pieces[id].shape(), &Polygon::rectangle(Vector::new(50.0, 50.0)).unwrap());
}

#[test]
fn resize_replaces_the_piece() {
    let factory = PieceFactory::default();
    let texture = SharedTexture::new(Bitmap::filled(200, 100, [0; 4]).unwrap());
    let mut pieces = PieceSet::new();
    let id = pieces.insert(
        factory
            .initial_piece(texture, &ImageFit::default())
            .unwrap(),
    );

    let cutter = Cutter::default();
    let area = pieces[id].area();
    let new_id = cutter.resize(&mut pieces, id, 1.5).unwrap();

    assert_eq!(pieces.len(), 1);
    assert_relative_eq!(pieces[new_id].area(), area * 2.25, max_relative = 1.0e-5);
    assert!(!pieces[new_id].is_static());

    assert!(cutter.resize(&mut pieces, new_id, -1.0).is_none());
    assert!(pieces.contains(new_id));
}

#[test]
fn picking_after_a_cut() {
    let mut pieces = PieceSet::new();
    let _ = pieces.insert(square_at(100.0, 100.0));

    let stroke = Stroke::from_segment(Point::new(40.0, 100.0), Point::new(160.0, 100.0)).unwrap();
    let (pieces, report) = Cutter::default().cut(pieces, &stroke);

    let upper = pieces.piece_at(&Point::new(100.0, 130.0)).unwrap();
    let lower = pieces.piece_at(&Point::new(100.0, 70.0)).unwrap();
    assert_ne!(upper, lower);
    assert!(report.added.iter().any(|added| added.id == upper));
    assert!(report.added.iter().any(|added| added.id == lower));
    assert!(pieces.piece_at(&Point::new(100.0, 300.0)).is_none());
}

#[test]
fn grazing_a_corner_keeps_the_piece() {
    let mut pieces = PieceSet::new();
    let id = pieces.insert(square_at(100.0, 100.0));

    let stroke = Stroke::from_segment(Point::new(40.0, 60.0), Point::new(60.0, 40.0)).unwrap();
    let (pieces, report) = Cutter::default().cut(pieces, &stroke);

    assert!(report.is_noop());
    assert_eq!(report.rejected, vec![(id, CutRejection::NothingCut)]);
    assert_eq!(pieces.len(), 1);
    assert_eq!(pieces[id].position(), &Isometry::translation(100.0, 100.0));
}
