//! Terminal port of the falling-ball sketch: one ball dropping onto a
//! bouncy floor, printed once per simulated second.

use sketchbody::*;

fn main() {
    env_logger::init();

    let mut world = World::new(WorldConfig::manual());
    let mut canvas = Recorder::new(600.0, 600.0);
    world.attach_canvas(&canvas);

    let floor = world.make_barrier(
        300.0,
        590.0,
        600.0,
        20.0,
        BodyOptions::default().with_restitution(0.8),
    );
    let ball = world.make_ball(300.0, 50.0, 40.0, BodyOptions::default().with_restitution(0.8));

    for second in 0..10 {
        for _ in 0..60 {
            world.manual_tick();
        }
        let position = world.position(ball).unwrap();
        println!("t={second}s  ball at ({:.1}, {:.1})", position.x, position.y);
    }

    canvas.clear();
    world.show(&ball, &mut canvas);
    world.show(&floor, &mut canvas);
    println!("frame recorded {} draw ops", canvas.ops().len());
}
