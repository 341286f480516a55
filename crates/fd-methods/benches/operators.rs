use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fd_core::DerivativeStrategy;
use fd_math::{sample, Grid};
use fd_methods::{build_difference_operator, build_integration_operator, OperatorApplication};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [50usize, 200, 800] {
        let h = 1.0 / n as f64;
        group.bench_with_input(BenchmarkId::new("difference", n), &n, |b, &n| {
            b.iter(|| build_difference_operator(black_box(h), black_box(n)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("integration", n), &n, |b, &n| {
            b.iter(|| build_integration_operator(black_box(h), black_box(n)).unwrap())
        });
    }
    group.finish();
}

fn bench_nth_derivative(c: &mut Criterion) {
    let grid = Grid::uniform(0.0, 1.0, 200).unwrap();
    let samples = sample(&grid, |x| (5.0 * x).sin());
    let mut group = c.benchmark_group("nth_derivative");
    for (name, strategy) in [
        ("composition", DerivativeStrategy::Composition),
        ("repeated", DerivativeStrategy::RepeatedApplication),
    ] {
        let app = OperatorApplication::with_strategy(strategy);
        for order in [2usize, 4] {
            group.bench_with_input(BenchmarkId::new(name, order), &order, |b, &order| {
                b.iter(|| {
                    app.nth_derivative(grid.clone(), samples.clone(), black_box(order))
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_nth_derivative);
criterion_main!(benches);
