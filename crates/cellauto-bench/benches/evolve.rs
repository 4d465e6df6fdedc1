//! Criterion benchmarks for whole-generation steps of each built-in rule.

use std::hint::black_box;

use cellauto_bench::{elementary_profile, forest_profile, life_profile, majority_profile};
use cellauto_engine::Automaton;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_elementary_step(c: &mut Criterion) {
    let mut ca = Automaton::new(elementary_profile().unwrap()).unwrap();
    c.bench_function("elementary_rule110_4096", |b| {
        b.iter(|| black_box(ca.step()));
    });
}

/// The forest burns out over time, so each iteration starts from a fresh
/// random forest and runs ten steps.
fn bench_forest_fire_evolve(c: &mut Criterion) {
    let config = forest_profile(42).unwrap();
    c.bench_function("forest_fire_256x256_10_steps", |b| {
        b.iter(|| {
            let mut ca = Automaton::new(config.clone()).unwrap();
            black_box(ca.evolve(10))
        });
    });
}

fn bench_life_step(c: &mut Criterion) {
    let mut ca = Automaton::new(life_profile(42).unwrap()).unwrap();
    c.bench_function("life_256x256", |b| {
        b.iter(|| black_box(ca.step()));
    });
}

fn bench_majority_step(c: &mut Criterion) {
    let mut ca = Automaton::new(majority_profile(42).unwrap()).unwrap();
    c.bench_function("majority_5x5_128x128", |b| {
        b.iter(|| black_box(ca.step()));
    });
}

fn bench_random_initialisation(c: &mut Criterion) {
    let mut ca = Automaton::new(life_profile(7).unwrap()).unwrap();
    c.bench_function("initialize_random_state_256x256", |b| {
        b.iter(|| {
            ca.initialize_random_state();
            black_box(ca.grid().count(1))
        });
    });
}

criterion_group!(
    benches,
    bench_elementary_step,
    bench_forest_fire_evolve,
    bench_life_step,
    bench_majority_step,
    bench_random_initialisation,
);
criterion_main!(benches);
