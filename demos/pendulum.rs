//! Terminal port of the pendulum sketch: a ball swung from a ceiling
//! barrier on a stiff spring, nudged by a scripted mouse drag.

use sketchbody::*;

fn main() {
    env_logger::init();

    let mut world = World::new(WorldConfig::manual());
    let mut canvas = Recorder::new(600.0, 600.0);
    world.attach_canvas(&canvas);
    world.mouse_interaction(Some(&canvas));

    let ceiling = world.make_barrier(300.0, -100.0, 1000.0, 240.0, BodyOptions::default());
    let bob = world.make_ball(300.0, 250.0, 70.0, BodyOptions::default().with_friction_air(0.0));
    let string = world
        .connect(
            ceiling,
            bob,
            ConnectOptions::default()
                .with_stiffness(0.8)
                .with_point_a(Vec2::new(0.0, 120.0)),
        )
        .expect("both endpoints are live");

    // Drag the bob to the side and let go.
    world.mouse_pressed(canvas.surface(), Vec2::new(300.0, 250.0));
    world.mouse_moved(canvas.surface(), Vec2::new(450.0, 250.0));
    for _ in 0..60 {
        world.manual_tick();
    }
    world.mouse_released(canvas.surface());

    for second in 0..8 {
        for _ in 0..60 {
            world.manual_tick();
        }
        let position = world.position(bob).unwrap();
        println!("t={second}s  bob at ({:.1}, {:.1})", position.x, position.y);
    }

    canvas.clear();
    string.show(&world, &mut canvas);
    world.show(&ceiling, &mut canvas);
    world.show(&bob, &mut canvas);
    println!("frame recorded {} draw ops", canvas.ops().len());
}
