// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use understory_motion::{AnimatedScalar, AnimationSpec, DecaySpec, Easing, Spring};

const FRAME: Duration = Duration::from_millis(8);

fn run_to_rest(mut channel: AnimatedScalar) -> f64 {
    while channel.advance(FRAME) {}
    channel.value()
}

fn bench_animate_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion/animate_to");

    let specs = [
        ("tween_linear", AnimationSpec::Tween {
            duration: Duration::from_millis(300),
            easing: Easing::Linear,
        }),
        ("tween_fast_out_slow_in", AnimationSpec::tween(300)),
        ("spring_default", AnimationSpec::Spring(Spring::DEFAULT)),
        ("spring_bouncy", AnimationSpec::Spring(Spring::BOUNCY)),
    ];
    for (name, spec) in specs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &spec, |b, &spec| {
            b.iter(|| {
                let mut channel = AnimatedScalar::new(1.0);
                channel.animate_to(black_box(4.0), spec);
                black_box(run_to_rest(channel))
            });
        });
    }

    group.finish();
}

fn bench_decay(c: &mut Criterion) {
    c.bench_function("motion/decay", |b| {
        b.iter(|| {
            let mut channel = AnimatedScalar::with_bounds(0.0, -1.0e4, 1.0e4);
            channel.animate_decay(black_box(3_000.0), DecaySpec::exponential());
            black_box(run_to_rest(channel))
        });
    });
}

criterion_group!(benches, bench_animate_to, bench_decay);
criterion_main!(benches);
