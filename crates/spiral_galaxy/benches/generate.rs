//! Benchmarks for galaxy generation.
//!
//! Run with: `cargo bench -p spiral_galaxy`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spiral_galaxy::{GalaxyParameters, generate, generate_with_rng};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for count in [10_000u32, 50_000, 100_000] {
        let params = GalaxyParameters {
            count,
            ..Default::default()
        };

        group.bench_with_input(BenchmarkId::new("parallel", count), &params, |b, params| {
            b.iter(|| black_box(generate(params)))
        });

        group.bench_with_input(BenchmarkId::new("seeded", count), &params, |b, params| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| black_box(generate_with_rng(params, &mut rng)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
