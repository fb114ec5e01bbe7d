use sat2d::math::Isometry;
use sat2d::shape::{Circle, Polygon};
use sat2d::world::{CollisionEvent, CollisionResponse, CollisionWorld};

#[test]
fn removing_an_overlapping_body_stops_its_overlaps() {
    let mut world = CollisionWorld::new();
    let square = world.insert_polygon(
        Polygon::rectangle(1.0, 1.0),
        Isometry::identity(),
        CollisionResponse::Overlap,
    );
    let ball = world.insert_circle(
        Circle::with_radius(0.5),
        Isometry::translation(1.25, 0.0),
        CollisionResponse::Overlap,
    );

    let mut events = Vec::new();
    world.step(&mut events);
    events.clear();

    assert!(world.remove(ball).is_some());
    assert!(!world.contains(ball));
    assert!(world.get(ball).is_none());
    assert!(world.remove(ball).is_none());
    assert!(!world.is_overlapping(square, ball));
    assert_eq!(world.len(), 1);

    world.step(&mut events);
    assert_eq!(events, vec![CollisionEvent::Stopped(square, ball)]);
    assert!(!world.get(square).unwrap().is_colliding());

    events.clear();
    world.step(&mut events);
    assert!(events.is_empty());
}

#[test]
fn reused_handles_report_the_removal_before_the_new_overlap() {
    let mut world = CollisionWorld::new();
    let square = world.insert_polygon(
        Polygon::rectangle(1.0, 1.0),
        Isometry::identity(),
        CollisionResponse::Overlap,
    );
    let ball = world.insert_circle(
        Circle::with_radius(0.5),
        Isometry::translation(1.25, 0.0),
        CollisionResponse::Overlap,
    );
    world.step(&mut ());

    let _ = world.remove(ball);
    let other = world.insert_polygon(
        Polygon::rectangle(0.5, 0.5),
        Isometry::translation(1.0, 1.0),
        CollisionResponse::Overlap,
    );
    assert_eq!(other, ball);

    let mut events = Vec::new();
    world.step(&mut events);
    assert_eq!(
        events,
        vec![
            CollisionEvent::Stopped(square, ball),
            CollisionEvent::Started(square, other),
        ]
    );
}

#[test]
fn removing_every_body_empties_the_world() {
    let mut world = CollisionWorld::new();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            world.insert_circle(
                Circle::with_radius(1.0),
                Isometry::translation(i as sat2d::math::Real, 0.0),
                CollisionResponse::Block,
            )
        })
        .collect();
    world.step(&mut ());

    for handle in handles {
        assert!(world.remove(handle).is_some());
    }

    let mut events = Vec::new();
    world.step(&mut events);
    assert!(world.is_empty());
    assert!(events.iter().all(|event| event.stopped()));
    assert_eq!(world.overlapping_pairs().count(), 0);
}
