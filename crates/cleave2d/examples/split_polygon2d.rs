mod common_macroquad2d;

use cleave2d::cut::{extend_stroke, stroke_polygon_intersections, PolygonSplit, SplitTolerances};
use cleave2d::shape::{Polygon, Stroke};
use common_macroquad2d::{draw_point, draw_polygon, draw_polyline, easy_draw_text, lissajous};
use macroquad::prelude::*;
use nalgebra::{Point2, Vector2};

#[macroquad::main("cleave2d::shape::Polygon::split_with_stroke")]
async fn main() {
    let center = Point2::new(400.0, 300.0);
    let star: Vec<_> = (0..10)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / 10.0;
            let radius = if i % 2 == 0 { 220.0 } else { 120.0 };
            center + Vector2::new(angle.cos(), angle.sin()) * radius
        })
        .collect();
    let polygon = Polygon::new(star).unwrap();
    let tolerances = SplitTolerances::default();

    for i in 0.. {
        clear_background(BLACK);

        let t = i as f32 * 0.01;
        let stroke = Stroke::new(vec![
            center + lissajous(t) * 150.0,
            center + lissajous(t + 0.7) * 60.0,
            center + lissajous(t + 1.4) * 150.0,
        ])
        .unwrap();
        let extended = extend_stroke(&stroke, &polygon);

        for inter in stroke_polygon_intersections(&extended, &polygon) {
            draw_point(inter.point, YELLOW);
        }

        let split = polygon.split_with_stroke(&stroke, &tolerances);
        easy_draw_text(&format!("Valid hulls: {}", split.num_hulls()));

        match split {
            PolygonSplit::Pair(a, b) => {
                draw_polygon(a.vertices(), GREEN);
                draw_polygon(b.vertices(), BLUE);
            }
            PolygonSplit::First(hull) | PolygonSplit::Second(hull) => {
                draw_polygon(hull.vertices(), GREEN);
            }
            PolygonSplit::Degenerate | PolygonSplit::Untouched => {
                draw_polygon(polygon.vertices(), WHITE);
            }
        }

        draw_polyline(extended.points(), 1.0, DARKGRAY);
        draw_polyline(stroke.points(), 3.0, RED);

        next_frame().await
    }
}
