//! Benchmarks for the generation transition.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use gridlife::{Simulation, SimulationConfig, engine::next_generation};

fn bench_generation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_step");

    for (rows, cols) in [(30, 50), (30, 100), (256, 256)] {
        for team_mode in [false, true] {
            let config = SimulationConfig {
                rows,
                cols,
                team_mode,
                rng_seed: Some(7),
                ..SimulationConfig::default()
            };
            let mut sim = Simulation::new(config).unwrap();
            sim.seed_random(0.3).unwrap();
            let grid = sim.snapshot().clone();
            let mut rng = StdRng::seed_from_u64(7);

            let label = format!(
                "{}x{}{}",
                rows,
                cols,
                if team_mode { "-teams" } else { "" }
            );
            group.bench_with_input(BenchmarkId::from_parameter(label), &rows, |b, _| {
                b.iter(|| next_generation(black_box(&grid), team_mode, &mut rng));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_generation_step);
criterion_main!(benches);
