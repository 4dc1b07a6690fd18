//! Benchmarks for the Monte Carlo simulator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use monty_hall::montyhall::{analytic, play_trial, SimulationConfig, Simulator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn single_trial_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("single_trial", |b| {
        b.iter(|| black_box(play_trial(&mut rng)))
    });
}

fn simulation_10k_benchmark(c: &mut Criterion) {
    c.bench_function("simulate_10k_trials", |b| {
        b.iter(|| {
            let config = SimulationConfig::new(black_box(10_000)).with_seed(42);
            Simulator::new(config).run().tally
        })
    });
}

fn analytic_benchmark(c: &mut Criterion) {
    c.bench_function("analytic_calculate", |b| b.iter(analytic::calculate));
}

criterion_group!(
    benches,
    single_trial_benchmark,
    simulation_10k_benchmark,
    analytic_benchmark
);
criterion_main!(benches);
