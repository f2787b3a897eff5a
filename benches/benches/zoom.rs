// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use std::time::Duration;
use understory_zoom::{VelocityTracker, ZoomConfig, ZoomController};

fn zoomed_controller() -> ZoomController {
    let mut zc = ZoomController::new(ZoomConfig::default()).unwrap();
    zc.set_viewport_size(Size::new(1080.0, 1920.0));
    zc.set_content_size(Size::new(4000.0, 3000.0));
    zc.start_gesture();
    zc.apply_gesture(Vec2::ZERO, 3.0, Point::new(540.0, 960.0), 0);
    zc.end_gesture();
    zc
}

fn bench_gesture_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/gesture");

    // A drag or pinch stream of `frames` events at 120 Hz.
    for frames in [16usize, 120, 1_000] {
        group.bench_with_input(BenchmarkId::new("pan", frames), &frames, |b, &frames| {
            b.iter_batched(
                zoomed_controller,
                |mut zc| {
                    zc.start_gesture();
                    for i in 0..frames {
                        let t = i as u64 * 8;
                        let p = Point::new(540.0 - i as f64, 960.0);
                        zc.apply_gesture(Vec2::new(-1.0, 0.5), 1.0, p, t);
                    }
                    black_box(zc.end_gesture());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("pinch", frames), &frames, |b, &frames| {
            b.iter_batched(
                zoomed_controller,
                |mut zc| {
                    zc.start_gesture();
                    for i in 0..frames {
                        let zoom = if i % 2 == 0 { 1.01 } else { 0.995 };
                        let p = Point::new(300.0 + i as f64 * 0.1, 700.0);
                        zc.apply_gesture(Vec2::ZERO, zoom, p, i as u64 * 8);
                    }
                    black_box(zc.end_gesture());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_fling_to_rest(c: &mut Criterion) {
    c.bench_function("zoom/fling_to_rest", |b| {
        b.iter_batched(
            || {
                let mut zc = zoomed_controller();
                zc.start_gesture();
                for i in 0..6_u32 {
                    let p = Point::new(900.0 - f64::from(i) * 30.0, 960.0);
                    zc.apply_gesture(Vec2::new(-30.0, 0.0), 1.0, p, u64::from(i) * 8);
                }
                zc.end_gesture();
                zc
            },
            |mut zc| {
                while zc.advance(Duration::from_millis(8)) {}
                black_box(zc.offset());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_velocity(c: &mut Criterion) {
    let mut tracker = VelocityTracker::default();
    for i in 0..20_u32 {
        let t = f64::from(i);
        tracker.add_position(u64::from(i) * 5, Point::new(t * t, -3.0 * t));
    }
    c.bench_function("zoom/velocity_estimate", |b| {
        b.iter(|| black_box(black_box(&tracker).velocity()));
    });
}

criterion_group!(
    benches,
    bench_gesture_frames,
    bench_fling_to_rest,
    bench_velocity
);
criterion_main!(benches);
