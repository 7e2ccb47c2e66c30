// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a swipe-card stack without a renderer and prints each frame's layout.
//!
//! Run:
//! - `cargo run -p understory_card_stack --example headless_swipe`

use kurbo::{Point, Size, Vec2};
use understory_card_stack::{SwipeCallbacks, SwipeCard, SwipeCardConfig, SwipeDirection};

const FRAME: u64 = 16_666_667;

fn main() {
    let callbacks = SwipeCallbacks::new()
        .on_swipe_left(|item: &&str| println!("  -> swiped left: {item}"))
        .on_swipe_right(|item: &&str| println!("  -> swiped right: {item}"))
        .on_swipe_top(|item: &&str| println!("  -> swiped up: {item}"))
        .on_empty_stack(|| println!("  -> stack is empty"));
    let config = SwipeCardConfig::new(Size::new(360.0, 640.0));
    let mut card = SwipeCard::new(vec!["Berlin", "Lisbon", "Oslo"], config, callbacks);
    let mut now = 0;

    println!("drag 160px right, then release");
    run_drag(&mut card, Vec2::new(160.0, 0.0), &mut now);

    println!("drag 40px right, then release");
    run_drag(&mut card, Vec2::new(40.0, 0.0), &mut now);

    println!("swipe up from a button");
    card.swipe(SwipeDirection::Top);
    settle(&mut card, &mut now);

    println!("final order (active last): {:?}", card.stack().items());
}

fn run_drag(card: &mut SwipeCard<&'static str>, by: Vec2, now: &mut u64) {
    let start = Point::new(180.0, 320.0);
    card.pointer_down(start);
    for step in 1..=4_u32 {
        card.pointer_move(start + by * (f64::from(step) / 4.0));
        print_frame(card);
    }
    println!("  release: {:?}", card.pointer_up());
    settle(card, now);
}

fn settle(card: &mut SwipeCard<&'static str>, now: &mut u64) {
    while card.is_animating() {
        card.tick(*now);
        *now += FRAME;
        print_frame(card);
    }
}

fn print_frame(card: &mut SwipeCard<&'static str>) {
    let state = card.state();
    let Some(layout) = card.layout() else {
        return;
    };
    let names: Vec<_> = layout
        .slots
        .iter()
        .filter_map(|slot| card.stack().get(slot.index))
        .collect();
    println!(
        "  {:?} x={:7.2} rot={:6.2} scale={:.3} layers={names:?}",
        state.phase, state.position.x, state.rotation, state.scale
    );
}
