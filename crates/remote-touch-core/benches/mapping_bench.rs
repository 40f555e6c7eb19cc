//! Criterion benchmarks for the per-sample input path.
//!
//! Every one-finger drag sample goes through mapping, the throttle, and (if
//! admitted) the codec on the UI thread, so these must stay well under a
//! frame budget.
//!
//! Run with:
//! ```bash
//! cargo bench --package remote-touch-core --bench mapping_bench
//! ```

use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use remote_touch_core::{
    center_point_from_transform, encode_command, fit_viewport, point_to_normalized, Channel,
    Command, CursorOffsets, Point, Size, ThrottleGate, Vector, ViewTransform,
};

fn bench_point_to_normalized(c: &mut Criterion) {
    let offsets = CursorOffsets::default();
    let viewport = Size::new(844.0, 474.75);
    let mut group = c.benchmark_group("point_to_normalized");

    for scale in [1.0_f64, 2.5, 5.0] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| {
                point_to_normalized(
                    black_box(Point::new(421.0, 237.0)),
                    black_box(viewport),
                    &offsets,
                    black_box(scale),
                )
            })
        });
    }
    group.finish();
}

fn bench_center_point(c: &mut Criterion) {
    let mut t = ViewTransform::new();
    t.apply_zoom(3.0);
    t.apply_pan(Vector::new(120.0, -80.0));
    let viewport = Size::new(844.0, 474.75);

    c.bench_function("center_point_from_transform", |b| {
        b.iter(|| center_point_from_transform(black_box(viewport), black_box(&t)))
    });
}

fn bench_fit_viewport(c: &mut Criterion) {
    c.bench_function("fit_viewport", |b| {
        b.iter(|| fit_viewport(black_box(Size::new(390.0, 844.0)), black_box(16.0 / 9.0)))
    });
}

fn bench_throttle_admit(c: &mut Criterion) {
    c.bench_function("throttle_admit_120hz", |b| {
        let mut gate = ThrottleGate::default();
        let t0 = Instant::now();
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            gate.admit(Channel::Move, black_box(t0 + Duration::from_micros(i * 8_333)))
        })
    });
}

fn bench_touch_to_request(c: &mut Criterion) {
    let offsets = CursorOffsets::default();
    let viewport = Size::new(844.0, 474.75);

    c.bench_function("touch_to_move_request", |b| {
        b.iter(|| {
            let mapped =
                point_to_normalized(black_box(Point::new(12.0, 30.0)), viewport, &offsets, 2.0);
            mapped.map(|m| {
                encode_command(&Command::Move {
                    point: m.transmitted,
                    click: false,
                })
            })
        })
    });
}

criterion_group!(
    benches,
    bench_point_to_normalized,
    bench_center_point,
    bench_fit_viewport,
    bench_throttle_admit,
    bench_touch_to_request
);
criterion_main!(benches);
