use na::Vector2;
use sat2d::math::Isometry;
use sat2d::shape::{Circle, Polygon};
use sat2d::world::{CollisionEvent, CollisionResponse, CollisionWorld, WorldOptions};

#[test]
fn blocking_polygons_are_pushed_apart_evenly() {
    let mut world = CollisionWorld::new();
    let a = world.insert_polygon(
        Polygon::rectangle(1.0, 1.0),
        Isometry::identity(),
        CollisionResponse::Block,
    );
    // A single blocking body is enough to resolve the pair.
    let b = world.insert_polygon(
        Polygon::rectangle(1.0, 1.0),
        Isometry::translation(1.5, 0.0),
        CollisionResponse::Overlap,
    );

    let mut events = Vec::new();
    world.step(&mut events);
    assert_eq!(events, vec![CollisionEvent::Started(a, b)]);
    assert_relative_eq!(
        world.get(a).unwrap().position().translation.vector,
        Vector2::new(-0.25, 0.0),
        epsilon = 1.0e-5
    );
    assert_relative_eq!(
        world.get(b).unwrap().position().translation.vector,
        Vector2::new(1.75, 0.0),
        epsilon = 1.0e-5
    );

    // The squares now touch: they still overlap, with nothing left to resolve.
    events.clear();
    world.step(&mut events);
    assert!(events.is_empty());
    assert!(world.is_overlapping(a, b));
    assert_relative_eq!(
        world.get(b).unwrap().position().translation.vector,
        Vector2::new(1.75, 0.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn blocking_circles_are_pushed_apart_evenly() {
    let mut world = CollisionWorld::new();
    let a = world.insert_circle(
        Circle::with_radius(1.0),
        Isometry::identity(),
        CollisionResponse::Block,
    );
    let b = world.insert_circle(
        Circle::with_radius(1.0),
        Isometry::translation(1.5, 0.0),
        CollisionResponse::Block,
    );

    world.step(&mut ());
    assert_relative_eq!(
        world.get(a).unwrap().position().translation.vector,
        Vector2::new(-0.25, 0.0),
        epsilon = 1.0e-5
    );
    assert_relative_eq!(
        world.get(b).unwrap().position().translation.vector,
        Vector2::new(1.75, 0.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn blocking_circle_is_nudged_away_from_polygon() {
    let mut world = CollisionWorld::new();
    let square = world.insert_polygon(
        Polygon::rectangle(1.0, 1.0),
        Isometry::identity(),
        CollisionResponse::Block,
    );
    let ball = world.insert_circle(
        Circle::with_radius(0.5),
        Isometry::translation(1.25, 0.0),
        CollisionResponse::Block,
    );

    let mut events = Vec::new();
    world.step(&mut events);
    assert_eq!(events, vec![CollisionEvent::Started(square, ball)]);
    assert_relative_eq!(
        world.get(square).unwrap().position().translation.vector,
        Vector2::new(-0.25, 0.0),
        epsilon = 1.0e-5
    );
    assert_relative_eq!(
        world.get(ball).unwrap().position().translation.vector,
        Vector2::new(1.51, 0.0),
        epsilon = 1.0e-5
    );

    events.clear();
    world.step(&mut events);
    assert_eq!(events, vec![CollisionEvent::Stopped(square, ball)]);
}

#[test]
fn circle_polygon_nudge_is_configurable() {
    let mut world = CollisionWorld::with_options(WorldOptions {
        circle_polygon_nudge: 0.0,
        ..WorldOptions::default()
    });
    let _ = world.insert_polygon(
        Polygon::rectangle(1.0, 1.0),
        Isometry::identity(),
        CollisionResponse::Block,
    );
    let ball = world.insert_circle(
        Circle::with_radius(0.5),
        Isometry::translation(1.25, 0.0),
        CollisionResponse::Overlap,
    );

    world.step(&mut ());
    assert_relative_eq!(
        world.get(ball).unwrap().position().translation.vector,
        Vector2::new(1.5, 0.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn ignored_bodies_are_never_pushed() {
    let mut world = CollisionWorld::new();
    let _ = world.insert_polygon(
        Polygon::rectangle(1.0, 1.0),
        Isometry::identity(),
        CollisionResponse::Block,
    );
    let ghost = world.insert_polygon(
        Polygon::rectangle(1.0, 1.0),
        Isometry::translation(0.5, 0.0),
        CollisionResponse::Ignore,
    );

    world.step(&mut ());
    assert_eq!(
        world.get(ghost).unwrap().position(),
        &Isometry::translation(0.5, 0.0)
    );
}
