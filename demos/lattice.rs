//! Terminal port of the lattice sketch: a grid of balls joined by loose
//! springs collapsing onto a floor, with one ball forgotten mid-run the
//! way the original sketch does on a mouse click.

use sketchbody::*;

const BALLS_PER_SIDE: usize = 5;
const GAP: f32 = 80.0;

fn main() {
    env_logger::init();

    let mut world = World::new(WorldConfig::manual());
    let mut canvas = Recorder::new(600.0, 600.0);
    world.attach_canvas(&canvas);

    world.make_barrier(
        300.0,
        600.0,
        600.0,
        50.0,
        BodyOptions::default().with_restitution(1.0),
    );

    let mut balls = Vec::new();
    for row in 0..BALLS_PER_SIDE {
        for col in 0..BALLS_PER_SIDE {
            balls.push(world.make_ball(
                140.0 + col as f32 * GAP,
                -160.0 + row as f32 * GAP,
                30.0,
                BodyOptions::default().with_restitution(1.0),
            ));
        }
    }

    let springs = ConnectOptions::default().with_stiffness(0.1);
    let mut connections = Vec::new();
    for row in 0..BALLS_PER_SIDE {
        for col in 0..BALLS_PER_SIDE {
            let here = balls[row * BALLS_PER_SIDE + col];
            if col + 1 < BALLS_PER_SIDE {
                connections.extend(world.connect(here, balls[row * BALLS_PER_SIDE + col + 1], springs));
            }
            if row + 1 < BALLS_PER_SIDE {
                connections.extend(world.connect(here, balls[(row + 1) * BALLS_PER_SIDE + col], springs));
            }
        }
    }
    println!(
        "lattice: {} balls, {} springs",
        world.body_count() - 1,
        world.connection_count()
    );

    for second in 0..6 {
        for _ in 0..60 {
            world.manual_tick();
        }
        if second == 2 {
            // Snip the center ball out, springs and all.
            world.forget(balls[balls.len() / 2]);
            println!("forgot the center ball");
        }
        println!(
            "t={}s  {} balls, {} springs still live",
            second + 1,
            world.body_count() - 1,
            world.connection_count()
        );
    }

    canvas.clear();
    for connection in &connections {
        if world.is_active(*connection) {
            connection.show(&world, &mut canvas);
        }
    }
    for ball in &balls {
        if world.is_active(*ball) {
            world.show(ball, &mut canvas);
        }
    }
    println!("frame recorded {} draw ops", canvas.ops().len());
}
