// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size, Vec2};
use understory_card_stack::{
    CardStack, CardStackController, SwipeCallbacks, SwipeCard, SwipeCardConfig, layout,
};

const FRAME: u64 = 16_000_000;

fn config() -> SwipeCardConfig {
    SwipeCardConfig::new(Size::new(400.0, 800.0))
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_stack/drag");

    // Every pointer move rederives rotation and scale; this should stay flat per move.
    for moves in [16_usize, 128, 1_024] {
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::new("apply_drag", moves), &moves, |b, &moves| {
            b.iter_batched(
                || CardStackController::new(&config()),
                |mut controller| {
                    for i in 0..moves {
                        let dx = if i % 2 == 0 { 3.0 } else { -1.0 };
                        controller.apply_drag(Vec2::new(dx, 0.5));
                    }
                    black_box(controller.snapshot());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_stack/layout");
    let config = config();
    let controller = CardStackController::new(&config);
    let state = controller.snapshot();

    // Layout only touches the three front cards regardless of stack length.
    for len in [1_usize, 3, 1_000, 100_000] {
        let stack: CardStack<u32> = (0..len as u32).collect();
        group.bench_with_input(BenchmarkId::new("layout", len), &stack, |b, stack| {
            b.iter(|| black_box(layout::layout(stack, &state, &config)));
        });
    }

    group.finish();
}

fn bench_swipe_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_stack/swipe_cycle");

    for len in [3_usize, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("drag_commit_settle", len), &len, |b, &len| {
            b.iter_batched(
                || SwipeCard::new((0..len as u32).collect(), config(), SwipeCallbacks::new()),
                |mut card| {
                    card.pointer_down(Point::new(200.0, 400.0));
                    card.pointer_move(Point::new(380.0, 410.0));
                    card.pointer_up();
                    let mut now = 0;
                    while card.is_animating() {
                        black_box(card.tick(now));
                        now += FRAME;
                    }
                    black_box(card.active().copied());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag, bench_layout, bench_swipe_cycle);
criterion_main!(benches);
