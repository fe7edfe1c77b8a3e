// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Rect, Size};
use vantage_stage::{Drawable, Options, Stage};

#[derive(Clone, Copy)]
struct Node {
    id: u32,
    rect: Rect,
    revision: u64,
}

impl Drawable for Node {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn client_rect(&self) -> Rect {
        self.rect
    }

    fn geometry_revision(&self) -> u64 {
        self.revision
    }
}

fn grid(len: usize) -> Vec<Node> {
    (0..len)
        .map(|i| {
            let x = (i % 64) as f64 * 40.0;
            let y = (i / 64) as f64 * 30.0;
            Node {
                id: i as u32,
                rect: Rect::new(x, y, x + 32.0, y + 24.0),
                revision: 0,
            }
        })
        .collect()
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage/frame");

    for len in [128usize, 2_048, 16_384] {
        let nodes = grid(len);
        group.throughput(Throughput::Elements(len as u64));

        // First frame: every node is new and bounds are measured.
        group.bench_with_input(BenchmarkId::new("initial", len), &nodes, |b, nodes| {
            b.iter_batched(
                || {
                    let mut stage = Stage::<u32>::new(Options::default(), 0);
                    stage.set_container_size(Size::new(1280.0, 720.0));
                    stage
                },
                |mut stage| {
                    stage.frame(16, nodes);
                    black_box(stage.scale());
                },
                BatchSize::LargeInput,
            );
        });

        // Steady state: nothing changed, the scan finds no work.
        group.bench_with_input(BenchmarkId::new("idle", len), &nodes, |b, nodes| {
            let mut stage = Stage::<u32>::new(Options::default(), 0);
            stage.set_container_size(Size::new(1280.0, 720.0));
            stage.frame(0, nodes);
            let mut now = 16;
            b.iter(|| {
                now += 16;
                black_box(stage.frame(now, nodes))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
