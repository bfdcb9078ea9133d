mod common_macroquad2d;

use std::collections::HashMap;

use cleave2d::math::{Isometry, Point, Real, Vector};
use cleave2d::piece::{Bitmap, ImageFit, Piece, PieceFactory, SharedTexture};
use cleave2d::shape::StrokeSampler;
use cleave2d::world::{Cutter, PhysicsAdapter, PhysicsSync, PieceSet};
use common_macroquad2d::{draw_polygon, draw_polyline, easy_draw_text, mquad_from_na, na_from_mquad};
use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;

const CANVAS_WIDTH: f32 = 1000.0;
const CANVAS_HEIGHT: f32 = 700.0;
const GRAVITY: f32 = 600.0;
// Impulses are expressed per simulation step at 60Hz.
const IMPULSE_SCALE: f32 = 60.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "cleave2d::world::Cutter".to_owned(),
        window_width: CANVAS_WIDTH as i32,
        window_height: CANVAS_HEIGHT as i32,
        ..Default::default()
    }
}

/// A tiny rigid-body integrator: gravity, a bouncy floor, no piece-piece contacts.
#[derive(Default)]
struct ToyEngine {
    next_handle: u32,
    bodies: HashMap<u32, ToyBody>,
}

struct ToyBody {
    position: Isometry<Real>,
    linvel: Vector<Real>,
    angvel: Real,
    mass: Real,
    restitution: Real,
    is_static: bool,
    outline: Vec<Point<Real>>,
}

impl ToyEngine {
    fn step(&mut self, dt: Real) {
        for body in self.bodies.values_mut() {
            if body.is_static {
                continue;
            }

            body.linvel.y += GRAVITY * dt;
            body.position.translation.vector += body.linvel * dt;
            body.position.rotation *= nalgebra::UnitComplex::new(body.angvel * dt);

            let lowest = body
                .outline
                .iter()
                .map(|pt| (body.position * pt).y)
                .fold(Real::MIN, Real::max);
            if lowest > CANVAS_HEIGHT {
                body.position.translation.vector.y -= lowest - CANVAS_HEIGHT;
                if body.linvel.y > 0.0 {
                    body.linvel.y *= -body.restitution;
                    body.linvel.x *= 0.9;
                    body.angvel *= 0.9;
                }
            }
        }
    }
}

impl PhysicsAdapter for ToyEngine {
    type Handle = u32;

    fn insert_body(&mut self, piece: &Piece) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        let body = ToyBody {
            position: *piece.position(),
            linvel: Vector::zeros(),
            angvel: 0.0,
            mass: piece.mass(),
            restitution: piece.material().restitution,
            is_static: piece.is_static(),
            outline: piece.shape().vertices().to_vec(),
        };
        let _ = self.bodies.insert(handle, body);
        handle
    }

    fn remove_body(&mut self, handle: u32) {
        let _ = self.bodies.remove(&handle);
    }

    fn body_position(&self, handle: u32) -> Option<Isometry<Real>> {
        self.bodies.get(&handle).map(|body| body.position)
    }

    fn set_static(&mut self, handle: u32, is_static: bool) {
        if let Some(body) = self.bodies.get_mut(&handle) {
            body.is_static = is_static;
        }
    }

    fn apply_impulse(&mut self, handle: u32, impulse: Vector<Real>) {
        if let Some(body) = self.bodies.get_mut(&handle) {
            if body.mass > 0.0 {
                body.linvel += impulse * IMPULSE_SCALE / body.mass;
                body.angvel += impulse.x.signum() * 0.5;
            }
        }
    }
}

fn checkerboard(width: u32, height: u32) -> Bitmap {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let light = ((x / 32) + (y / 32)) % 2 == 0;
            let shade = (255 * x / width) as u8;
            rgba.extend_from_slice(&if light {
                [240, shade, 120, 255]
            } else {
                [40, 60, 255 - shade, 255]
            });
        }
    }
    Bitmap::new(width, height, rgba).unwrap()
}

fn draw_piece(piece: &Piece, texture: &Texture2D) {
    let outline = piece.world_polygon();
    let uvs = piece.vertex_uvs();
    let vertices: Vec<_> = outline
        .vertices()
        .iter()
        .zip(uvs.iter())
        .map(|(pt, uv)| Vertex::new(pt.x, pt.y, 0.0, uv.x, uv.y, WHITE))
        .collect();
    // Pieces are convex: a triangle fan covers them.
    let indices: Vec<u16> = (1..vertices.len() as u16 - 1)
        .flat_map(|i| [0, i, i + 1])
        .collect();

    draw_mesh(&Mesh {
        vertices,
        indices,
        texture: Some(texture.clone()),
    });
    draw_polygon(outline.vertices(), Color::new(1.0, 1.0, 1.0, 0.3));
}

fn reset(
    factory: &PieceFactory,
    texture: &SharedTexture,
) -> (PieceSet, PhysicsSync<ToyEngine>) {
    let mut pieces = PieceSet::new();
    let fit = ImageFit {
        canvas_width: CANVAS_WIDTH,
        canvas_height: CANVAS_HEIGHT,
        ..ImageFit::default()
    };
    if let Some(image) = factory.initial_piece(texture.clone(), &fit) {
        let _ = pieces.insert(image);
    }

    let mut sync = PhysicsSync::new(ToyEngine::default());
    sync.spawn(&pieces);
    (pieces, sync)
}

#[macroquad::main(window_conf)]
async fn main() {
    let bitmap = checkerboard(512, 384);
    let gpu_texture = Texture2D::from_rgba8(512, 384, bitmap.rgba());
    let texture = SharedTexture::new(bitmap);

    let cutter = Cutter::default();
    let (mut pieces, mut sync) = reset(cutter.factory(), &texture);
    let mut sampler = StrokeSampler::new(2.0);

    loop {
        clear_background(BLACK);
        let mouse = na_from_mquad(Vec2::from(mouse_position()));

        if is_mouse_button_pressed(MouseButton::Left) {
            sampler.begin(mouse);
        } else if is_mouse_button_down(MouseButton::Left) {
            let _ = sampler.push(mouse);
        } else if is_mouse_button_released(MouseButton::Left) {
            if let Some(stroke) = sampler.finish() {
                let (new_pieces, report) = cutter.cut(pieces, &stroke);
                sync.apply(&report, &new_pieces);
                pieces = new_pieces;
            }
        }

        if is_mouse_button_pressed(MouseButton::Right) {
            if let Some(id) = pieces.piece_at(&mouse) {
                sync.set_static(id, false, &mut pieces);
            }
        }

        let factor = if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
            Some(1.1)
        } else if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
            Some(0.9)
        } else {
            None
        };
        if let (Some(factor), Some(id)) = (factor, pieces.piece_at(&mouse)) {
            if let Some(new_id) = cutter.resize(&mut pieces, id, factor) {
                sync.replace(id, new_id, &pieces);
            }
        }

        if is_key_pressed(KeyCode::R) {
            (pieces, sync) = reset(cutter.factory(), &texture);
        }

        sync.adapter_mut().step(get_frame_time().min(1.0 / 30.0));
        sync.pull_positions(&mut pieces);

        for (_, piece) in pieces.iter() {
            draw_piece(piece, &gpu_texture);
        }
        draw_polyline(sampler.points(), 3.0, RED);
        if let Some(last) = sampler.points().last() {
            let last = mquad_from_na(*last);
            draw_circle(last.x, last.y, 4.0, RED);
        }

        easy_draw_text(&format!(
            "Pieces: {}. Drag to cut, right click to drop, +/- to resize, R to reset.",
            pieces.len()
        ));

        next_frame().await
    }
}
