//! Benchmarks for the culprit strategies.
//!
//! Hidden sets are fixed so every iteration issues the same guesses.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use culprit_core::Oracle;
use culprit_minimizer::{Minimizer, MinimizerConfig, StrategyKind};

fn every_third(n: u32) -> Oracle<u32> {
    let universe: Vec<u32> = (0..n).collect();
    let hidden: Vec<u32> = (0..n).filter(|i| i % 3 == 0).collect();
    Oracle::new(universe, hidden).expect("hidden items are drawn from the universe")
}

fn strategies_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for n in [16u32, 128, 1024] {
        let oracle = every_third(n);
        for kind in StrategyKind::ALL {
            let minimizer = kind.build::<u32>(MinimizerConfig::default());
            group.bench_with_input(BenchmarkId::new(kind.as_str(), n), &oracle, |b, oracle| {
                b.iter(|| {
                    let mut run = oracle.clone();
                    black_box(minimizer.minimize(&mut run).map(|result| result.len()))
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, strategies_benchmark);
criterion_main!(benches);
