// Randomized checks of the splitting invariants on convex polygons.

use cleave2d::cut::{cut_piece, PieceCut, PolygonSplit, SplitTolerances};
use cleave2d::math::{Isometry, Point, Real, Vector};
use cleave2d::piece::{Bitmap, Piece, PieceFactory, SharedTexture};
use cleave2d::shape::{Polygon, Stroke};
use oorandom::Rand32;

const RADIUS: Real = 150.0;

fn rand_real(rng: &mut Rand32) -> Real {
    rng.rand_float() as Real
}

fn rand_dir(rng: &mut Rand32) -> Vector<Real> {
    let angle = rand_real(rng) * std::f64::consts::TAU as Real;
    Vector::new(angle.cos(), angle.sin())
}

// A convex polygon with its vertices on a circle, in counter-clockwise order.
//
// The angles are jittered around evenly spaced values so that the polygon
// never degenerates into a sliver.
fn random_convex_polygon(rng: &mut Rand32, center: Point<Real>) -> Polygon {
    let n = 4 + rng.rand_range(0..12);
    let step = std::f64::consts::TAU as Real / n as Real;
    let vertices = (0..n)
        .map(|k| {
            let angle = (k as Real + rand_real(rng) * 0.5) * step;
            center + Vector::new(angle.cos(), angle.sin()) * RADIUS
        })
        .collect();
    Polygon::new(vertices).unwrap()
}

// A short straight stroke around a point strictly inside of `polygon`.
fn random_inner_stroke(rng: &mut Rand32, polygon: &Polygon) -> Stroke {
    let vertices = polygon.vertices();
    let i = rng.rand_range(0..vertices.len() as u32) as usize;
    let j = (i + 1) % vertices.len();
    let center = polygon.vertex_center();
    // Somewhere within the triangle (center, vi, vj), away from the boundary.
    let (u, v) = (rand_real(rng) * 0.45, rand_real(rng) * 0.45);
    let pt = center + (vertices[i] - center) * u + (vertices[j] - center) * v;
    let dir = rand_dir(rng);
    Stroke::from_segment(pt - dir, pt + dir).unwrap()
}

fn piece_from(polygon: Polygon) -> Piece {
    let texture = SharedTexture::new(Bitmap::filled(2, 2, [0; 4]).unwrap());
    Piece::new(
        polygon,
        Isometry::identity(),
        texture,
        Vector::new(400.0, 400.0),
        0.001,
    )
}

#[test]
fn split_conserves_area() {
    let mut rng = Rand32::new(42);
    let tolerances = SplitTolerances::default();

    for _ in 0..500 {
        let polygon = random_convex_polygon(&mut rng, Point::new(500.0, 350.0));
        let stroke = random_inner_stroke(&mut rng, &polygon);
        let split = polygon.split_with_stroke(&stroke, &tolerances);

        let (a, b) = match split {
            PolygonSplit::Pair(a, b) => (a, b),
            other => panic!("{:?} was not split by {:?}: {:?}", polygon, stroke, other),
        };

        assert!(a.num_vertices() >= 3 && b.num_vertices() >= 3);
        assert_relative_eq!(
            a.area() + b.area(),
            polygon.area(),
            max_relative = 1.0e-3
        );

        // No sample point lies inside of both hulls.
        for _ in 0..20 {
            let pt = random_inner_stroke(&mut rng, &polygon).first();
            let dist_to_cut = (pt - stroke.first()).perp(&(stroke.last() - stroke.first())).abs()
                / (stroke.last() - stroke.first()).norm();
            if dist_to_cut > 1.0e-2 {
                assert!(!(a.contains_local_point(&pt) && b.contains_local_point(&pt)));
            }
        }
    }
}

#[test]
fn cut_pieces_have_consistent_densities() {
    let mut rng = Rand32::new(7);
    let factory = PieceFactory::default();
    let tolerances = SplitTolerances::default();

    for _ in 0..200 {
        let polygon = random_convex_polygon(&mut rng, Point::new(0.0, 0.0));
        let stroke = random_inner_stroke(&mut rng, &polygon);
        let piece = piece_from(polygon);

        match cut_piece(&piece, &stroke, &factory, &tolerances) {
            PieceCut::Split(a, b) => {
                assert!(a.shape().num_vertices() >= 3 && b.shape().num_vertices() >= 3);
                let (small, large) = if a.area() <= b.area() { (a, b) } else { (b, a) };
                assert!(small.density() >= large.density());
                assert!(small.density() <= factory.density.base_density + factory.density.spread_factor);
                assert!(large.density() >= factory.density.base_density);
            }
            other => panic!("unexpected cut: {:?}", other),
        }
    }
}

#[test]
fn strokes_missing_the_polygon_are_noops() {
    let mut rng = Rand32::new(1234);
    let tolerances = SplitTolerances::default();
    let center = Point::new(-40.0, 80.0);

    for _ in 0..500 {
        let polygon = random_convex_polygon(&mut rng, center);
        // A stroke along a line passing further than RADIUS from the center.
        let dir = rand_dir(&mut rng);
        let normal = Vector::new(-dir.y, dir.x);
        let offset = RADIUS * (1.01 + rand_real(&mut rng));
        let start = center + normal * offset + dir * (rand_real(&mut rng) * 400.0 - 200.0);
        let stroke = Stroke::new(vec![start, start + dir * 30.0, start + dir * 60.0]).unwrap();

        let before = polygon.clone();
        assert_eq!(
            polygon.split_with_stroke(&stroke, &tolerances),
            PolygonSplit::Untouched
        );
        assert_eq!(polygon, before);
    }
}
