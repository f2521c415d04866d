use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

use hitbox_rs::Hitbox;
use hitbox_rs::geometry::primitives::{Circle, Group, GroupMember, Rect, Vector};

criterion_main!(benches);
criterion_group!(benches, raycast_group_bench, collision_group_bench, resolve_group_bench);

const N_MEMBERS: usize = 64;
const N_QUERIES: usize = 1000;
const WORLD_SIZE: f64 = 100.0;

fn raycast_group_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let obstacles = create_obstacles(&mut rng);
    let rays = (0..N_QUERIES)
        .map(|_| (random_vector(&mut rng), random_vector(&mut rng)))
        .collect::<Vec<_>>();

    c.bench_function("raycast_group", |b| {
        b.iter(|| {
            for (a, end) in &rays {
                let _ = black_box(obstacles.intersects_line(a, end));
            }
        })
    });
}

fn collision_group_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let obstacles = create_obstacles(&mut rng);
    let probes = (0..N_QUERIES)
        .map(|_| Hitbox::Circle(Circle::new(random_vector(&mut rng), 1.5)))
        .collect::<Vec<_>>();

    c.bench_function("collision_group", |b| {
        b.iter(|| {
            for probe in &probes {
                let _ = black_box(probe.collides_with(&obstacles));
            }
        })
    });
}

fn resolve_group_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(2);
    let obstacles = create_obstacles(&mut rng);
    let probes = (0..N_QUERIES)
        .map(|_| Hitbox::Circle(Circle::new(random_vector(&mut rng), 1.5)))
        .collect::<Vec<_>>();

    c.bench_function("resolve_group", |b| {
        b.iter(|| {
            for probe in &probes {
                let mut moved = probe.clone();
                let _ = black_box(moved.resolve_collision(&obstacles));
            }
        })
    });
}

/// Group of randomly placed circles and rectangles
fn create_obstacles(rng: &mut SmallRng) -> Hitbox {
    let members = (0..N_MEMBERS)
        .map(|i| -> GroupMember {
            let center = random_vector(rng);
            match i % 2 {
                0 => Circle::new(center, rng.random_range(0.5..3.0)).into(),
                _ => Rect::from_size(
                    rng.random_range(1.0..6.0),
                    rng.random_range(1.0..6.0),
                    center,
                )
                .into(),
            }
        })
        .collect();
    Hitbox::Group(Group::try_new(members).unwrap())
}

fn random_vector(rng: &mut SmallRng) -> Vector {
    Vector::new(
        rng.random_range(0.0..WORLD_SIZE),
        rng.random_range(0.0..WORLD_SIZE),
    )
}
