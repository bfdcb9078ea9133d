use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use macroquad::prelude::*;
use macroquad::{
    color::{Color, WHITE},
    math::Vec2,
    shapes::draw_line,
};
use nalgebra::{Point2, Vector2};
use cleave2d::math::Real;

/// As this file is used as a module from other examples,
/// rustc warns about dead code:
/// - `main()` is needed for this file to be included in examples
/// - For other functions, they may be "dead code" for an example, but not for others.
#[allow(dead_code)]
fn main() {
    println!(
        "This module contains helper functions to use macroquad,
    isolated from the rest of the examples for the sake of simplicity."
    );
}

/// Converts a [`nalgebra::Point2`] to a [`Vec2`], which is used by [`macroquad`]
#[allow(dead_code)]
pub fn mquad_from_na(a: Point2<Real>) -> Vec2 {
    Vec2::new(a.x, a.y)
}

/// Converts a [`Vec2`] to a [`nalgebra::Point2`], which is used by [`cleave2d`]
#[allow(dead_code)]
pub fn na_from_mquad(a: Vec2) -> Point2<Real> {
    Point2::new(a.x, a.y)
}

/// Draws a text in the top left corner of the screen.
///
/// This uses a hardcoded position, size, color.
#[allow(dead_code)]
pub fn easy_draw_text(text: &str) {
    macroquad::text::draw_text(text, 10.0, 48.0 + 18.0, 30.0, WHITE);
}

/// Returns [lissajous curve](https://en.wikipedia.org/wiki/Lissajous_curve) coordinates for time `t`.
///
/// This uses hardcoded parameters to have an arbitrary pleasing trajectory.
#[allow(dead_code)]
pub fn lissajous(t: f32) -> Vector2<Real> {
    let x = (3.0 * t + FRAC_PI_2).sin();
    let y = (2.0 * t + FRAC_PI_4).sin();
    Vector2::new(x, y)
}

/// Uses [`macroquad`] to display the open polyline passed as parameter.
#[allow(dead_code)]
pub fn draw_polyline(points: &[Point2<Real>], thickness: f32, color: Color) {
    for seg in points.windows(2) {
        draw_line(seg[0].x, seg[0].y, seg[1].x, seg[1].y, thickness, color);
    }
}

/// Uses [`macroquad`] to display a wireframe of the closed polygon.
#[allow(dead_code)]
pub fn draw_polygon(polygon: &[Point2<Real>], color: Color) {
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        draw_line(a.x, a.y, b.x, b.y, 2.0, color);
    }
}

/// Uses [`macroquad`] to display the a cross, representing a point.
#[allow(dead_code)]
pub fn draw_point(point: Point2<Real>, color: Color) {
    let edge_len = 5.0;
    draw_line(
        point.x - edge_len,
        point.y,
        point.x + edge_len,
        point.y,
        2.0,
        color,
    );
    draw_line(
        point.x,
        point.y - edge_len,
        point.x,
        point.y + edge_len,
        2.0,
        color,
    );
}
