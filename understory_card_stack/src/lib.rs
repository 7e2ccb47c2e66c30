// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_card_stack --heading-base-level=0

//! Understory Card Stack: a headless swipe-card stack.
//!
//! A stack of layered cards where the front card can be dragged and released
//! to swipe it left/right or up/down. A committed swipe animates the card off
//! screen and cycles it to the back, so the stack never runs out.
//!
//! This crate owns the interaction logic only:
//!
//! - [`normalize`]: min-max range mapping used to derive rotation and scale.
//! - [`anchors`]: the center/right/bottom reference points, thresholds, and exit targets.
//! - [`track`]: animation tracks with cancellable handles, advanced by a host frame clock.
//! - [`CardStackController`]: position, rotation, and scale plus the
//!   commit/return state machine.
//! - [`SwipeGesture`]: pointer tracking and the release threshold decision.
//! - [`CardStack`]: the rotating item sequence, active card last.
//! - [`layout`]: insets, offsets, and rotation for up to three visible layers.
//! - [`SwipeCard`]: all of the above wired together with user callbacks.
//!
//! It does **not** render anything. Hosts are expected to:
//!
//! - Supply viewport metrics at construction and call `set_viewport` on resize.
//! - Forward pointer down/move/up/cancel to [`SwipeCard`] (or to a
//!   [`SwipeGesture`] + [`CardStackController`] pair).
//! - Call `tick` once per frame with a monotonic timestamp in nanoseconds.
//! - Re-read the layout every frame and draw the slots back-to-front.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_card_stack::{SwipeCallbacks, SwipeCard, SwipeCardConfig};
//!
//! let config = SwipeCardConfig::new(Size::new(400.0, 800.0));
//! let mut card = SwipeCard::new(vec!['A', 'B', 'C'], config, SwipeCallbacks::new());
//!
//! // A short drag snaps back.
//! card.pointer_down(Point::new(200.0, 300.0));
//! card.pointer_move(Point::new(230.0, 300.0));
//! card.pointer_up();
//!
//! let mut now = 0;
//! while card.is_animating() {
//!     card.tick(now);
//!     now += 16_000_000;
//! }
//! assert_eq!(card.active(), Some(&'C'));
//!
//! // Draw back-to-front.
//! let layout = card.layout().unwrap();
//! for slot in &layout.slots {
//!     let item = card.stack().get(slot.index).unwrap();
//!     // paint(item, slot.insets, slot.offset, slot.rotation);
//!     let _ = item;
//! }
//! ```
//!
//! ## Logging
//!
//! Phase transitions are logged through the [`log`] facade at `debug`, and
//! ignored input at `trace`. No logger is installed by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod anchors;
pub mod config;
pub mod controller;
pub mod gesture;
pub mod layout;
pub mod normalize;
pub mod stack;
mod swipe_card;
pub mod track;

pub use anchors::{Anchors, SwipeDirection};
pub use config::{Orientation, ShadowSide, SwipeCardConfig, ThresholdConfig};
pub use controller::{CardStackController, CardState, Phase};
pub use gesture::{ReleaseDecision, SwipeGesture, decide_release};
pub use layout::{CardSlot, StackLayout};
pub use stack::CardStack;
pub use swipe_card::{SwipeCallbacks, SwipeCard};
pub use track::{AnimationSpec, Easing};
