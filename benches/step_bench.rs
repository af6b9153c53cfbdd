use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sketchbody::{BodyOptions, ConnectOptions, World, WorldConfig};
use std::hint::black_box;

/// Grid of spring-connected balls above a floor, the heaviest shape the
/// bundled demos produce.
fn prepare_lattice(side: usize) -> World {
    let mut world = World::new(WorldConfig::manual());
    world.make_barrier(300.0, 600.0, 600.0, 50.0, BodyOptions::default());

    let gap = 40.0;
    let mut balls = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            balls.push(world.make_ball(
                100.0 + col as f32 * gap,
                50.0 + row as f32 * gap,
                20.0,
                BodyOptions::default(),
            ));
        }
    }

    let springs = ConnectOptions::default().with_stiffness(0.1);
    for row in 0..side {
        for col in 0..side {
            let here = balls[row * side + col];
            if col + 1 < side {
                world.connect(here, balls[row * side + col + 1], springs);
            }
            if row + 1 < side {
                world.connect(here, balls[(row + 1) * side + col], springs);
            }
        }
    }
    world
}

fn bench_lattice_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_step");
    for &side in &[5usize, 10, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            let mut world = prepare_lattice(side);
            b.iter(|| {
                world.manual_tick();
                black_box(world.steps_taken())
            })
        });
    }
    group.finish();
}

fn bench_create_forget_churn(c: &mut Criterion) {
    c.bench_function("create_forget_churn", |b| {
        let mut world = World::new(WorldConfig::manual());
        b.iter(|| {
            let a = world.make_ball(100.0, 100.0, 20.0, BodyOptions::default());
            let bb = world.make_ball(200.0, 100.0, 20.0, BodyOptions::default());
            world.connect(a, bb, ConnectOptions::default());
            world.manual_tick();
            world.forget(a);
            world.forget(bb);
            black_box(world.body_count())
        })
    });
}

criterion_group!(benches, bench_lattice_step, bench_create_forget_churn);
criterion_main!(benches);
