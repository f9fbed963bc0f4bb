//! Benchmarks for building and printing families

use bloodline::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;

fn benchmark_create_family(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_family");

    for generations in [3u32, 10, 16].iter() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        group.bench_with_input(
            BenchmarkId::new("generations", generations),
            generations,
            |b, &generations| {
                b.iter(|| free_family(Some(create_family(black_box(generations), &mut rng))));
            },
        );
    }

    group.finish();
}

fn benchmark_print_family(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let person = create_family(12, &mut rng);

    c.bench_function("print_family_12", |b| {
        b.iter(|| print_family(&mut io::sink(), Some(black_box(&person)), 0, 4))
    });
}

criterion_group!(benches, benchmark_create_family, benchmark_print_family);
criterion_main!(benches);
