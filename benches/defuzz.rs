//! Benchmarks for membership evaluation, set algebra and defuzzification

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzy_core::algebra::{algebraic_sum_each, union_each};
use fuzzy_core::linspace::universe;
use fuzzy_core::{Curve, Defuzzification, Membership, Shape};

fn membership_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    let shapes = [
        ("triangular", Shape::triangular(0., 50., 100.).unwrap()),
        ("trapezoidal", Shape::trapezoidal(0., 25., 75., 100.).unwrap()),
        ("gaussian", Shape::gaussian(50., 15.).unwrap()),
        ("sigmoid", Shape::sigmoid(0.2, 50.).unwrap()),
    ];

    for (name, shape) in shapes {
        group.bench_with_input(BenchmarkId::new("evaluate", name), &shape, |b, shape| {
            b.iter(|| shape.evaluate(black_box(37.5)))
        });
    }

    let x = universe(0., 100., 0.1).unwrap();
    let tri = Shape::triangular(0., 50., 100.).unwrap();

    group.bench_function("sample_1001", |b| b.iter(|| tri.sample(black_box(&x))));
    group.finish();
}

fn algebra_benchmark(c: &mut Criterion) {
    let x = universe(0., 100., 0.1).unwrap();
    let low = Shape::triangular(0., 0., 50.).unwrap().sample(&x);
    let high = Shape::triangular(50., 100., 100.).unwrap().sample(&x);

    c.bench_function("union_1001", |b| b.iter(|| union_each(black_box(&low), black_box(&high))));
    c.bench_function("algebraic_sum_1001", |b| {
        b.iter(|| algebraic_sum_each(black_box(&low), black_box(&high)))
    });
}

fn defuzz_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("defuzzify");

    for step in [1., 0.1, 0.01] {
        let x = universe(0., 100., step).unwrap();
        let m = Shape::trapezoidal(0., 25., 75., 100.).unwrap().sample(&x);
        let curve = Curve::new(x, m).unwrap();
        let len = curve.domain().len();

        for method in [
            Defuzzification::Centroid,
            Defuzzification::Bisector,
            Defuzzification::MeanOfMaximum,
        ] {
            group.bench_with_input(BenchmarkId::new(format!("{method:?}"), len), &curve, |b, curve| {
                b.iter(|| curve.defuzzify(black_box(method)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, membership_benchmark, algebra_benchmark, defuzz_benchmark);
criterion_main!(benches);
