use cleave2d::cut::{cut_piece, SplitTolerances};
use cleave2d::math::{Isometry, Point, Real, Vector};
use cleave2d::piece::{Bitmap, ImageFit, PieceFactory, SharedTexture};
use cleave2d::shape::Stroke;

#[test]
fn texture_coordinates_survive_successive_cuts() {
    let factory = PieceFactory::default();
    let texture = SharedTexture::new(Bitmap::filled(640, 480, [10, 20, 30, 255]).unwrap());
    let mut image = factory
        .initial_piece(texture, &ImageFit::default())
        .unwrap();
    image.set_position(Isometry::new(Vector::new(480.0, 330.0), 0.3));

    // Two world points on each side of the first cut.
    let probes = [
        image.position() * Point::new(-100.0, -80.0),
        image.position() * Point::new(120.0, 90.0),
    ];
    let uvs = probes.map(|pt| image.world_texture_uv(&pt));

    let stroke = Stroke::new(vec![
        image.position() * Point::new(-50.0, 60.0),
        image.position() * Point::new(0.0, 0.0),
        image.position() * Point::new(50.0, -60.0),
    ])
    .unwrap();
    let children = cut_piece(&image, &stroke, &factory, &SplitTolerances::default()).into_pieces();
    assert_eq!(children.len(), 2);

    for (probe, uv) in probes.iter().zip(uvs.iter()) {
        let owner = children
            .iter()
            .find(|child| child.contains_point(probe))
            .expect("every probe lies in exactly one child");
        assert_relative_eq!(owner.world_texture_uv(probe), *uv, epsilon = 1.0e-4);
    }

    // Move and turn one child around, then cut it again along a vertical line.
    let mut child = children[0].clone();
    let probe = child.position() * Point::new(0.0, 0.0);
    let uv = child.world_texture_uv(&probe);
    let new_pos = Isometry::new(Vector::new(100.0, 100.0), -1.2 as Real);
    let moved_probe = new_pos * child.position().inverse_transform_point(&probe);
    child.set_position(new_pos);
    assert_relative_eq!(child.world_texture_uv(&moved_probe), uv, epsilon = 1.0e-4);

    let stroke = Stroke::from_segment(
        moved_probe + Vector::new(10.0, -5.0),
        moved_probe + Vector::new(10.0, 5.0),
    )
    .unwrap();
    let grandchildren = cut_piece(&child, &stroke, &factory, &SplitTolerances::default());
    let owner = grandchildren
        .into_pieces()
        .into_iter()
        .find(|piece| piece.contains_point(&moved_probe))
        .expect("the probe lies in one of the grandchildren");
    assert_relative_eq!(owner.world_texture_uv(&moved_probe), uv, epsilon = 1.0e-4);
}

#[test]
fn initial_piece_covers_the_whole_texture() {
    let factory = PieceFactory::default();
    let texture = SharedTexture::new(Bitmap::filled(300, 900, [0; 4]).unwrap());
    let image = factory
        .initial_piece(texture, &ImageFit::default())
        .unwrap();

    let uvs = image.vertex_uvs();
    assert_relative_eq!(uvs[0], Point::new(0.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(uvs[1], Point::new(1.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(uvs[2], Point::new(1.0, 1.0), epsilon = 1.0e-5);
    assert_relative_eq!(uvs[3], Point::new(0.0, 1.0), epsilon = 1.0e-5);
}
