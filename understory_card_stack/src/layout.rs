// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry for the up-to-three visible card layers.
//!
//! The layout pass is pure: it reads the stack, a [`CardState`] snapshot, and
//! the configuration, and returns slots a renderer can position directly.
//! Slots are ordered back-to-front so they can be painted in order.
//!
//! Depth padding goes on the configured [`ShadowSide`]. As the next card's
//! scale grows from its resting value toward `1.0`, the cards behind the
//! active one slide into the place of the card in front of them and widen,
//! which is what makes the stack look like it is advancing.
//!
//! ```
//! use kurbo::{Size, Vec2};
//! use understory_card_stack::{CardStack, CardStackController, SwipeCardConfig, layout};
//!
//! let config = SwipeCardConfig::new(Size::new(360.0, 640.0));
//! let controller = CardStackController::new(&config);
//! let stack = CardStack::new(vec!["a", "b", "c"]);
//!
//! let layout = layout::layout(&stack, &controller.snapshot(), &config).unwrap();
//! let order: Vec<_> = layout.slots.iter().map(|s| *stack.get(s.index).unwrap()).collect();
//! assert_eq!(order, ["a", "b", "c"]);
//! assert!(layout.slots.last().unwrap().draggable);
//! ```

use kurbo::{Insets, Vec2};
use smallvec::SmallVec;

use crate::config::{Orientation, ShadowSide, SwipeCardConfig};
use crate::controller::CardState;
use crate::stack::CardStack;

/// Renderer-facing placement of one visible card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardSlot {
    /// Index of the item in the stack.
    pub index: usize,
    /// Distance behind the active card: 0 for the active card, 2 for the back one.
    pub depth: usize,
    /// Padding inside the stack container.
    pub insets: Insets,
    /// Translation applied after padding.
    pub offset: Vec2,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Whether this card receives pointer input.
    pub draggable: bool,
}

/// Result of a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct StackLayout {
    /// Height of the container holding all layers.
    pub container_height: f64,
    /// Visible slots, back-to-front.
    pub slots: SmallVec<[CardSlot; 3]>,
}

impl StackLayout {
    /// The active card's slot.
    #[must_use]
    pub fn active(&self) -> Option<&CardSlot> {
        self.slots.last()
    }
}

/// Lays out the visible cards, or returns `None` when the stack is empty.
///
/// One item shows only the active card, two items add the middle layer, and
/// three or more show all three layers.
#[must_use]
pub fn layout<T>(
    stack: &CardStack<T>,
    state: &CardState,
    config: &SwipeCardConfig,
) -> Option<StackLayout> {
    let active = stack.active_index()?;
    let margin = config.between_margin;
    let grow = growth(state.scale, config.rest_scale);

    let mut slots = SmallVec::new();
    let visible = stack.len().min(3);
    for depth in (1..visible).rev() {
        let Some(index) = stack.index_behind(depth) else {
            continue;
        };
        // Back layer: one margin unit, middle layer: two, both minus the
        // share the next card has not grown yet.
        let layer = 3.0 - depth as f64;
        let edge = (layer - grow) * margin;
        let side = (depth as f64 - 1.0 + grow) * config.side_inset;
        slots.push(CardSlot {
            index,
            depth,
            insets: with_side_insets(shadow_insets(config.shadow_side, edge), side),
            offset: Vec2::ZERO,
            rotation: 0.0,
            draggable: false,
        });
    }

    let offset = match config.orientation {
        Orientation::Horizontal => Vec2::new(state.position.x, 0.0),
        Orientation::Vertical => Vec2::new(0.0, state.position.y),
    };
    slots.push(CardSlot {
        index: active,
        depth: 0,
        insets: shadow_insets(config.shadow_side, 2.0 * margin),
        offset,
        rotation: state.rotation,
        draggable: true,
    });

    Some(StackLayout {
        container_height: config.card_height + 2.5 * margin,
        slots,
    })
}

/// How far the next card still has to grow: `1` at rest, `0` at full scale.
fn growth(scale: f64, rest_scale: f64) -> f64 {
    let span = 1.0 - rest_scale;
    if span <= 0.0 {
        return 0.0;
    }
    ((1.0 - scale) / span).clamp(0.0, 1.0)
}

fn shadow_insets(side: ShadowSide, amount: f64) -> Insets {
    match side {
        ShadowSide::Start => Insets::new(amount, 0.0, 0.0, 0.0),
        ShadowSide::Top => Insets::new(0.0, amount, 0.0, 0.0),
        ShadowSide::End => Insets::new(0.0, 0.0, amount, 0.0),
        ShadowSide::Bottom => Insets::new(0.0, 0.0, 0.0, amount),
    }
}

fn with_side_insets(insets: Insets, amount: f64) -> Insets {
    Insets::new(insets.x0 + amount, insets.y0, insets.x1 + amount, insets.y1)
}
