//! Criterion benchmarks for chunked addition and rendering.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use chunknum_core::hex::render;
use chunknum_core::{Number, Word};

fn words(len: usize) -> Vec<Word> {
    (0..len).map(|i| (i as Word).wrapping_mul(0x9e37_79b9)).collect()
}

fn bench_addition(c: &mut Criterion) {
    let sizes: Vec<usize> = vec![16, 256, 4_096, 65_536];

    let mut group = c.benchmark_group("AddEqualLength");
    for &len in &sizes {
        let addend = Number::from_words(&words(len)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let mut acc = Number::from_words(&words(len)).unwrap();
                acc.add(&addend).unwrap();
                acc
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("CarryRipple");
    for &len in &sizes {
        let one = Number::from_words(&[1]).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let mut acc = Number::from_words(&vec![Word::MAX; len]).unwrap();
                acc.add(&one).unwrap();
                acc
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Render");
    for &len in &sizes {
        let n = Number::from_words(&words(len)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &n, |b, n| {
            b.iter(|| render(n));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_addition);
criterion_main!(benches);
