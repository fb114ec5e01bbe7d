use macroquad::prelude::*;
use nalgebra::{Point2, Vector2};
use sat2d::math::{Isometry, Real};
use sat2d::shape::{Circle, Polygon, Shape};
use sat2d::world::{CollisionEvent, CollisionResponse, CollisionWorld};

const RENDER_SCALE: f32 = 40.0;

#[macroquad::main("sat2d::world::CollisionWorld")]
async fn main() {
    let mut world = CollisionWorld::new();

    let _wall = world.insert_polygon(
        Polygon::rectangle(0.5, 4.0),
        Isometry::translation(4.0, 0.0),
        CollisionResponse::Block,
    );
    let crate_box = world.insert_polygon(
        Polygon::rectangle(1.0, 1.0),
        Isometry::new(Vector2::new(-4.0, 2.0), 0.4),
        CollisionResponse::Overlap,
    );
    let _pentagon = world.insert_polygon(
        Polygon::new(
            (0..5)
                .map(|i| {
                    let angle = i as Real * std::f64::consts::TAU as Real / 5.0;
                    Point2::new(angle.cos(), angle.sin())
                })
                .collect(),
        ),
        Isometry::translation(-1.0, -2.5),
        CollisionResponse::Overlap,
    );
    let ball = world.insert_circle(
        Circle::with_radius(0.75),
        Isometry::identity(),
        CollisionResponse::Block,
    );
    let marble = world.insert_circle(
        Circle::with_radius(0.4),
        Isometry::translation(0.0, 3.0),
        CollisionResponse::Overlap,
    );

    let mut events: Vec<CollisionEvent> = Vec::new();
    let shift = Point2::new(screen_width() / 2.0, screen_height() / 2.0);

    loop {
        let t = get_time() as Real;
        clear_background(BLACK);

        // The ball sweeps toward the wall, the marble orbits the scene.
        let ball_pos = Isometry::translation(t.sin() * 5.0, (t * 0.7).sin() * 2.0);
        if let Some(body) = world.get_mut(ball) {
            body.set_position(ball_pos);
        }
        if let Some(body) = world.get_mut(marble) {
            body.set_position(Isometry::translation((t * 1.3).cos() * 3.0, (t * 1.3).sin() * 3.0));
        }
        if let Some(body) = world.get_mut(crate_box) {
            let mut pos = *body.position();
            pos.rotation = nalgebra::UnitComplex::new(t * 0.5);
            body.set_position(pos);
        }

        events.clear();
        world.step(&mut events);
        for event in &events {
            println!("{event:?}");
        }

        for (_, body) in world.iter() {
            let color = if body.is_colliding() { RED } else { GREEN };
            draw_body(body.shape(), body.position(), shift, color);
        }

        draw_text(
            &format!("overlapping pairs: {}", world.overlapping_pairs().count()),
            10.0,
            30.0,
            30.0,
            WHITE,
        );

        next_frame().await
    }
}

fn draw_body(shape: &Shape, pos: &Isometry<Real>, shift: Point2<f32>, color: Color) {
    match shape {
        Shape::Polygon(polygon) => {
            for [a, b] in polygon.to_outline(pos) {
                draw_segment(a, b, shift, color);
            }
        }
        Shape::Circle(circle) => {
            let outline = circle.to_polyline(32);
            let points: Vec<_> = outline.iter().map(|pt| pos * pt).collect();
            for i in 0..points.len() {
                draw_segment(points[i], points[(i + 1) % points.len()], shift, color);
            }
        }
    }
}

fn draw_segment(a: Point2<Real>, b: Point2<Real>, shift: Point2<f32>, color: Color) {
    draw_line(
        a.x as f32 * RENDER_SCALE + shift.x,
        -(a.y as f32) * RENDER_SCALE + shift.y,
        b.x as f32 * RENDER_SCALE + shift.x,
        -(b.y as f32) * RENDER_SCALE + shift.y,
        2.0,
        color,
    );
}
