//! Extraction throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use isomesh::{extract, ScalarGrid};
use isomesh_core::GridDims;

fn sphere_grid(n: usize) -> ScalarGrid {
    let step = 2.0 / (n - 1) as f32;
    ScalarGrid::from_fn(GridDims::new(n, n, n), [-1.0; 3], [step; 3], |p| {
        p.length() - 0.75
    })
    .unwrap()
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for n in [16usize, 32, 64] {
        let grid = sphere_grid(n);
        group.bench_function(format!("sphere_{n}"), |b| {
            b.iter(|| extract(black_box(&grid), black_box(0.0)).unwrap())
        });
    }

    group.finish();
}

fn bench_extract_with_attributes(c: &mut Criterion) {
    let n = 32usize;
    let count = n * n * n;
    let grid = sphere_grid(n)
        .with_attribute((0..count).map(|i| (i % 256) as u8).collect())
        .unwrap()
        .with_attribute(vec![128u8; count])
        .unwrap()
        .with_attribute(vec![255u8; count])
        .unwrap();

    c.bench_function("extract/sphere_32_3ch", |b| {
        b.iter(|| extract(black_box(&grid), black_box(0.0)).unwrap())
    });
}

criterion_group!(benches, bench_extract, bench_extract_with_attributes);
criterion_main!(benches);
