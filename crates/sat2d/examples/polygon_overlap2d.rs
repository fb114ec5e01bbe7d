use nalgebra::Vector2;
use sat2d::math::{Isometry, Real};
use sat2d::query::{self, sat};
use sat2d::shape::{Circle, Polygon, Shape};

fn main() {
    let square = Polygon::rectangle(1.0, 1.0);
    let triangle = Polygon::try_new(vec![
        [-1.0, -1.0].into(),
        [1.0, -1.0].into(),
        [0.0, 1.0].into(),
    ])
    .expect("a triangle has enough vertices");

    let pos1 = Isometry::identity();
    let pos2 = Isometry::new(Vector2::new(1.5, 0.5), 0.3);

    match sat::penetration_polygon_polygon(&pos1, &square, &pos2, &triangle) {
        Some(pen) => println!(
            "Square and triangle overlap by {} along {:?}. Move the square by {:?}.",
            pen.depth,
            pen.axis,
            pen.mtv()
        ),
        None => println!("Square and triangle are separated."),
    }

    let ball = Shape::Circle(Circle::with_radius(0.5));
    let square = Shape::Polygon(square);

    for i in 0..6 {
        let pos = Isometry::translation(0.5 + i as Real * 0.25, 0.8);
        let status = match query::penetration(&pos1, &square, &pos, &ball) {
            Some(pen) => format!("overlapping (depth: {:.3})", pen.depth),
            None => "separated".to_string(),
        };
        println!("Ball at {}: {}", pos.translation.vector.transpose(), status);
    }
}
