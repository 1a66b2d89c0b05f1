use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quill_core::shape::{CircleArc, CubicBezierCurve, Line, Shape};
use quill_core::{Animatable, Point, VObject};

fn bench_cubic_bezier_sample_1000(c: &mut Criterion) {
    let curve = CubicBezierCurve::new(
        Point::new(0.0, 0.0),
        Point::new(0.3, 1.0),
        Point::new(0.7, 1.0),
        Point::new(1.0, 0.0),
    );
    c.bench_function("cubic_bezier_sample_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(curve.next_vector(i as f32 / 1000.0));
            }
        });
    });
}

fn bench_split_range_1000(c: &mut Criterion) {
    let curve = CubicBezierCurve::new(
        Point::new(0.0, 0.0),
        Point::new(0.3, 1.0),
        Point::new(0.7, 1.0),
        Point::new(1.0, 0.0),
    );
    c.bench_function("split_range_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(curve.split_range(0.0, i as f32 / 1000.0));
            }
        });
    });
}

fn many_curves() -> VObject {
    let shapes: Vec<Box<dyn Shape>> = (0..100)
        .map(|i| {
            let f = i as f32 / 100.0;
            if i % 2 == 0 {
                Box::new(Line::new(f, f, f + 0.1, f + 0.1)) as Box<dyn Shape>
            } else {
                Box::new(CircleArc::new(Point::new(f, f), 0.1, 0.1, 0.0, std::f32::consts::TAU))
                    as Box<dyn Shape>
            }
        })
        .collect();
    VObject::from_shapes("bench", &shapes)
}

fn bench_pointwise_become_partial(c: &mut Criterion) {
    let source = many_curves();
    let mut target = source.clone();
    c.bench_function("pointwise_become_partial_250_curves", |b| {
        b.iter(|| {
            target.pointwise_become_partial(&source, 0.0, black_box(0.37));
        });
    });
}

fn bench_interpolate(c: &mut Criterion) {
    let start = many_curves();
    let mut end = start.clone();
    end.pointwise_become_partial(&start, 0.2, 0.8);
    let mut target = start.clone();
    c.bench_function("interpolate_250_curves", |b| {
        b.iter(|| {
            target.interpolate(&start, &end, black_box(0.5));
        });
    });
}

fn bench_total_length(c: &mut Criterion) {
    let object = many_curves();
    c.bench_function("total_length_100_shapes", |b| {
        b.iter(|| black_box(object.total_length()));
    });
}

criterion_group!(
    benches,
    bench_cubic_bezier_sample_1000,
    bench_split_range_1000,
    bench_pointwise_become_partial,
    bench_interpolate,
    bench_total_length,
);
criterion_main!(benches);
