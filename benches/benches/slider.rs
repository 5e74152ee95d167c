// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_slider::geometry::TrackGeometry;
use understory_slider::{Handle, Mode, SliderConfig, SliderEngine};

fn pointer_sweep(len: usize, width: f64) -> Vec<f64> {
    // Back-and-forth sweep that overshoots both ends of the track.
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            let tri = if t < 0.5 { t * 2.0 } else { 2.0 - t * 2.0 };
            tri * width * 1.2 - width * 0.1
        })
        .collect()
}

fn bench_value_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/value_at");

    for step in [0.0, 0.5, 7.0] {
        let track = TrackGeometry::new(-250.0, 750.0, step, 640.0);
        let xs = pointer_sweep(4_096, track.width);
        group.throughput(Throughput::Elements(xs.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(step), &xs, |b, xs| {
            b.iter(|| {
                for &x in xs {
                    black_box(track.value_at(black_box(x)));
                }
            });
        });
    }

    group.finish();
}

fn bench_drag_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/drag_sequence");

    // Hypothesis: a move is dominated by snapping; range mode adds only the
    // non-crossing clamp on top.
    for (name, mode, handle) in [
        ("single", Mode::Single, Handle::Single),
        ("range_end", Mode::Range, Handle::End),
    ] {
        let xs = pointer_sweep(1_024, 480.0);
        group.throughput(Throughput::Elements(xs.len() as u64));

        group.bench_with_input(BenchmarkId::new(name, xs.len()), &xs, |b, xs| {
            b.iter_batched(
                || {
                    let config = SliderConfig::new(0.0, 1_000.0).with_step(5.0);
                    let mut engine = SliderEngine::uncontrolled(config, mode);
                    engine.on_layout(480.0);
                    engine
                },
                |mut engine| {
                    engine.drag_start(handle, xs[0]);
                    for &x in xs {
                        black_box(engine.drag_move(handle, x, 0.0));
                    }
                    engine.drag_end();
                    black_box(engine);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_value_at, bench_drag_sequence);
criterion_main!(benches);
