//! Compare les politiques de découpage sur une explosion et sur un tick complet.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::num::NonZeroUsize;

use fireworks_parallel::physic_engine::{PhysicConfigBuilder, Rocket};
use fireworks_parallel::{PhysicEngine, PhysicEngineFireworks, Schedule, WorkerPool};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_explosion(c: &mut Criterion) {
    let pool = WorkerPool::with_available_parallelism().expect("worker pool");
    let mut group = c.benchmark_group("explosion_2000_particles");

    for schedule in Schedule::ALL {
        for chunk in [1usize, 16, 128] {
            let config = PhysicConfigBuilder::default()
                .particles_per_explosion(2000)
                .schedule(schedule)
                .chunk_size(NonZeroUsize::new(chunk).expect("non zero"))
                .build()
                .expect("config");

            group.bench_with_input(
                BenchmarkId::new(schedule.as_str(), chunk),
                &config,
                |b, config| {
                    let mut rng = StdRng::seed_from_u64(7);
                    b.iter(|| {
                        let mut rocket = Rocket::new(512.0, config, &mut rng);
                        rocket.explode(&pool, config);
                        black_box(rocket.particles().len())
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_simulation_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_tick");

    for schedule in Schedule::ALL {
        let config = PhysicConfigBuilder::default()
            .particles_per_explosion(500)
            .schedule(schedule)
            .chunk_size(NonZeroUsize::new(8).expect("non zero"))
            .rocket_spawn_probability(0.2)
            .seed(Some(42))
            .build()
            .expect("config");
        let mut engine = PhysicEngineFireworks::new(&config).expect("engine");
        // régime établi : des fusées à tous les stades
        for _ in 0..400 {
            engine.tick();
        }

        group.bench_function(schedule.as_str(), |b| b.iter(|| black_box(engine.tick())));
    }
    group.finish();
}

criterion_group!(benches, bench_explosion, bench_simulation_tick);
criterion_main!(benches);
