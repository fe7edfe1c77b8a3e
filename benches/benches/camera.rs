// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use vantage_stage::ZoomDirection;
use vantage_stage::zoom::{element_target, zoom_at};
use vantage_view2d::{CameraState, clamp_position, reset_transform, visible_rect};

fn bench_fit_and_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("view2d/fit");
    let bounds = Rect::new(-250.0, 40.0, 1_750.0, 1_040.0);
    let container = Size::new(1280.0, 720.0);

    group.bench_function("reset_transform", |b| {
        b.iter(|| reset_transform(black_box(bounds), black_box(container)));
    });

    group.bench_function("clamp_position", |b| {
        let position = Vec2::new(-420.0, 133.0);
        b.iter(|| {
            clamp_position(
                black_box(position),
                black_box(3.5),
                black_box(container),
                black_box(bounds),
            )
        });
    });

    group.bench_function("visible_rect", |b| {
        b.iter(|| visible_rect(black_box(Vec2::new(-80.0, 25.0)), black_box(2.25), container));
    });

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage/zoom");
    let camera = CameraState::new(1.5, Vec2::new(-120.0, 60.0));

    // A long wheel burst, as a trackpad pinch produces.
    for steps in [16usize, 256] {
        group.bench_with_input(BenchmarkId::new("zoom_at", steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut cam = camera;
                for i in 0..steps {
                    let direction = if i % 3 == 0 {
                        ZoomDirection::Out
                    } else {
                        ZoomDirection::In
                    };
                    cam = zoom_at(cam, Point::new(640.0, 360.0), direction, 12.0, 5.0, 1.0, 100.0);
                }
                black_box(cam)
            });
        });
    }

    group.bench_function("element_target", |b| {
        let target = Rect::new(300.0, 200.0, 420.0, 260.0);
        b.iter(|| {
            element_target(
                black_box(target),
                Size::new(1280.0, 720.0),
                black_box(0.1),
                0.64,
                100.0,
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fit_and_clamp, bench_zoom);
criterion_main!(benches);
