use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use luckdraw::{KeyedSelector, WeightedSelector};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::collections::HashMap;

fn gen_weights(n: usize) -> Vec<f64> {
    let mut rng = Pcg32::seed_from_u64(777);
    (0..n).map(|_| 0.1 + rng.random::<f64>()).collect()
}

fn bench_weighted_build_and_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_build_draw");
    for &n in &[2usize, 8, 64, 256, 1024] {
        let weights = gen_weights(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("fresh_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(999),
                |rng| {
                    let mut sel =
                        WeightedSelector::build_with(0..n, weights.iter().copied(), false, rng)
                            .unwrap();
                    black_box(sel.draw().unwrap())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_trim_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_trim_drain");
    for &n in &[8usize, 64, 256] {
        let weights = gen_weights(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("drain_n={n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = Pcg32::seed_from_u64(1001);
                    WeightedSelector::build_with(0..n, weights.iter().copied(), true, &mut rng)
                        .unwrap()
                },
                |mut sel| {
                    let mut s = 0usize;
                    while let Ok(i) = sel.draw() {
                        s ^= i;
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_keyed_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_build");
    for &n in &[8usize, 64, 256] {
        let dict: HashMap<usize, f64> = gen_weights(n).into_iter().enumerate().collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("hashmap_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(4242),
                |rng| {
                    let sel = KeyedSelector::build_with(&dict, |_, w| *w, false, rng).unwrap();
                    black_box(*sel.peek().unwrap())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    selector,
    bench_weighted_build_and_draw,
    bench_trim_drain,
    bench_keyed_build
);
criterion_main!(selector);
