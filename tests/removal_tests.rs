use sketchbody::{Ball, BodyOptions, ConnectOptions, World, WorldConfig};

fn make_world() -> World {
    World::new(WorldConfig::manual())
}

#[test]
fn forgetting_a_body_cascades_to_its_connections() {
    let mut world = make_world();
    let a = world.make_ball(100.0, 100.0, 20.0, BodyOptions::default());
    let b = world.make_ball(200.0, 100.0, 20.0, BodyOptions::default());
    let c = world.connect(a, b, ConnectOptions::default()).unwrap();

    world.forget(a);

    assert!(!world.is_active(a));
    assert!(!world.is_active(c));
    assert!(world.is_active(b));
    assert!(world.connections_of(b).is_empty());
    assert_eq!(world.body_count(), 1);
    assert_eq!(world.connection_count(), 0);
}

#[test]
fn forgetting_a_connection_unlinks_both_endpoints() {
    let mut world = make_world();
    let a = world.make_ball(0.0, 0.0, 10.0, BodyOptions::default());
    let b = world.make_ball(50.0, 0.0, 10.0, BodyOptions::default());
    let c = world.connect(a, b, ConnectOptions::default()).unwrap();

    world.forget(c);

    assert!(!world.is_active(c));
    assert!(world.is_active(a));
    assert!(world.is_active(b));
    assert!(world.connections_of(a).is_empty());
    assert!(world.connections_of(b).is_empty());
}

#[test]
fn double_forget_is_a_no_op() {
    let mut world = make_world();
    let a = world.make_ball(0.0, 0.0, 10.0, BodyOptions::default());
    let b = world.make_ball(50.0, 0.0, 10.0, BodyOptions::default());
    let c = world.connect(a, b, ConnectOptions::default()).unwrap();

    world.forget(c);
    world.forget(c);
    world.forget(a);
    world.forget(a);

    assert!(!world.is_active(a));
    assert!(!world.is_active(c));
    assert_eq!(world.body_count(), 1);
}

#[test]
fn forgetting_none_is_a_no_op() {
    let mut world = make_world();
    world.forget(None::<Ball>);
    assert_eq!(world.body_count(), 0);
}

#[test]
fn stale_handles_stop_resolving() {
    let mut world = make_world();
    let ball = world.make_ball(10.0, 10.0, 10.0, BodyOptions::default());
    world.forget(ball);

    assert_eq!(world.position(ball), None);
    assert_eq!(world.velocity(ball), None);
    assert_eq!(world.angle(ball), None);
    assert_eq!(world.width(ball), None);
    assert!(!world.is_frozen(ball));
}

#[test]
fn a_recycled_slot_does_not_revive_old_handles() {
    let mut world = make_world();
    let old = world.make_ball(10.0, 10.0, 10.0, BodyOptions::default());
    world.forget(old);
    let fresh = world.make_ball(99.0, 99.0, 10.0, BodyOptions::default());

    assert!(!world.is_active(old));
    assert_eq!(world.position(old), None);
    assert_eq!(world.x(fresh), Some(99.0));
}

#[test]
fn connecting_a_forgotten_body_yields_nothing() {
    let mut world = make_world();
    let a = world.make_ball(0.0, 0.0, 10.0, BodyOptions::default());
    let b = world.make_ball(50.0, 0.0, 10.0, BodyOptions::default());
    world.forget(a);

    assert!(world.connect(a, b, ConnectOptions::default()).is_none());
    assert_eq!(world.connection_count(), 0);
}
