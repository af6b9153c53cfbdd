use glam::Vec2;
use sketchbody::{BodyOptions, ConnectOptions, DrawOp, Recorder, World, WorldConfig};

#[test]
fn a_spring_hung_ball_settles_below_its_anchor() {
    let mut world = World::new(WorldConfig::manual());
    let ceiling = world.make_barrier(300.0, 50.0, 100.0, 20.0, BodyOptions::default());
    // Start the bob off to one side so it has to swing in under the anchor.
    let bob = world.make_ball(330.0, 200.0, 40.0, BodyOptions::default());

    let rest_length = Vec2::new(330.0, 200.0).distance(Vec2::new(300.0, 50.0));
    world
        .connect(ceiling, bob, ConnectOptions::default().with_stiffness(0.1))
        .unwrap();

    let anchor = Vec2::new(300.0, 50.0);
    let mut max_stretch = 0.0f32;
    for _ in 0..600 {
        world.manual_tick();
        let stretch = world.position(bob).unwrap().distance(anchor) - rest_length;
        max_stretch = max_stretch.max(stretch);
    }

    let position = world.position(bob).unwrap();
    assert!(
        (position.x - 300.0).abs() < 5.0,
        "bob should hang under the anchor, ended at {position}"
    );
    assert!(position.y > 150.0, "bob should hang below, ended at {position}");
    assert!(
        max_stretch < 10.0,
        "spring stretched {max_stretch} px past its rest length"
    );
}

#[test]
fn rest_length_defaults_to_the_creation_distance() {
    let mut world = World::new(WorldConfig::manual());
    world.zero_gravity();
    let a = world.make_ball(100.0, 100.0, 20.0, BodyOptions::default());
    let b = world.make_ball(200.0, 100.0, 20.0, BodyOptions::default());
    world.connect(a, b, ConnectOptions::default()).unwrap();

    // Already at rest length, so the spring exerts no pull.
    for _ in 0..60 {
        world.manual_tick();
    }
    let distance = world
        .position(a)
        .unwrap()
        .distance(world.position(b).unwrap());
    assert!((99.0..=101.0).contains(&distance), "distance drifted to {distance}");
}

#[test]
fn a_short_rest_length_pulls_the_endpoints_together() {
    let mut world = World::new(WorldConfig::manual());
    world.zero_gravity();
    let a = world.make_ball(100.0, 100.0, 40.0, BodyOptions::default());
    let b = world.make_ball(200.0, 100.0, 40.0, BodyOptions::default());
    world
        .connect(
            a,
            b,
            ConnectOptions::default().with_length(50.0).with_stiffness(0.1),
        )
        .unwrap();

    for _ in 0..600 {
        world.manual_tick();
    }
    let distance = world
        .position(a)
        .unwrap()
        .distance(world.position(b).unwrap());
    assert!(
        (40.0..=60.0).contains(&distance),
        "endpoints ended {distance} px apart"
    );
}

#[test]
fn show_draws_between_each_endpoints_own_anchor() {
    let mut world = World::new(WorldConfig::manual());
    let a = world.make_barrier(100.0, 100.0, 20.0, 20.0, BodyOptions::default());
    let b = world.make_barrier(200.0, 100.0, 20.0, 20.0, BodyOptions::default());
    let c = world
        .connect(
            a,
            b,
            ConnectOptions::default()
                .with_point_a(Vec2::new(0.0, 10.0))
                .with_point_b(Vec2::new(0.0, -10.0)),
        )
        .unwrap();

    let mut canvas = Recorder::new(600.0, 600.0);
    c.show(&world, &mut canvas);

    assert_eq!(
        canvas.ops(),
        &[DrawOp::Line {
            from: Vec2::new(100.0, 110.0),
            to: Vec2::new(200.0, 90.0),
        }]
    );
}

#[test]
fn anchor_offsets_follow_their_body_rotation() {
    let mut world = World::new(WorldConfig::manual());
    let a = world.make_barrier(100.0, 100.0, 20.0, 20.0, BodyOptions::default());
    let b = world.make_barrier(200.0, 100.0, 20.0, 20.0, BodyOptions::default());
    let c = world
        .connect(a, b, ConnectOptions::default().with_point_a(Vec2::new(10.0, 0.0)))
        .unwrap();

    world.set_angle(a, std::f32::consts::FRAC_PI_2);

    let mut canvas = Recorder::new(600.0, 600.0);
    c.show(&world, &mut canvas);

    let [DrawOp::Line { from, to }] = canvas.ops() else {
        panic!("expected a single line");
    };
    approx::assert_relative_eq!(from.x, 100.0, epsilon = 1e-3);
    approx::assert_relative_eq!(from.y, 110.0, epsilon = 1e-3);
    assert_eq!(*to, Vec2::new(200.0, 100.0));
}

#[test]
fn showing_a_forgotten_connection_draws_nothing() {
    let mut world = World::new(WorldConfig::manual());
    let a = world.make_ball(0.0, 0.0, 10.0, BodyOptions::default());
    let b = world.make_ball(50.0, 0.0, 10.0, BodyOptions::default());
    let c = world.connect(a, b, ConnectOptions::default()).unwrap();
    world.forget(c);

    let mut canvas = Recorder::new(600.0, 600.0);
    c.show(&world, &mut canvas);
    assert!(canvas.ops().is_empty());
}

#[test]
fn both_endpoints_list_a_new_connection() {
    let mut world = World::new(WorldConfig::manual());
    let a = world.make_ball(0.0, 0.0, 10.0, BodyOptions::default());
    let b = world.make_ball(50.0, 0.0, 10.0, BodyOptions::default());
    let c = world.connect(a, b, ConnectOptions::default()).unwrap();

    assert_eq!(world.connections_of(a), vec![c]);
    assert_eq!(world.connections_of(b), vec![c]);
    assert_eq!(world.connection_count(), 1);
}
