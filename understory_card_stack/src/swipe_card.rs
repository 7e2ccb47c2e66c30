// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe-card widget: a stack, its controller, a gesture tracker, and callbacks.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Size, Vec2};

use crate::anchors::SwipeDirection;
use crate::config::SwipeCardConfig;
use crate::controller::{CardStackController, CardState};
use crate::gesture::{ReleaseDecision, SwipeGesture};
use crate::layout::{StackLayout, layout};
use crate::stack::CardStack;

type ItemHook<T> = Box<dyn FnMut(&T)>;

/// User hooks fired by a [`SwipeCard`].
///
/// Directional hooks receive the item that was active when the swipe
/// committed. They run after the exit animation finishes and before the stack
/// rotates.
pub struct SwipeCallbacks<T> {
    on_swipe_left: Option<ItemHook<T>>,
    on_swipe_right: Option<ItemHook<T>>,
    on_swipe_top: Option<ItemHook<T>>,
    on_swipe_bottom: Option<ItemHook<T>>,
    on_empty_stack: Option<Box<dyn FnMut()>>,
}

impl<T> SwipeCallbacks<T> {
    /// No hooks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            on_swipe_left: None,
            on_swipe_right: None,
            on_swipe_top: None,
            on_swipe_bottom: None,
            on_empty_stack: None,
        }
    }

    /// Hook for swipes toward the leading edge.
    #[must_use]
    pub fn on_swipe_left(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_swipe_left = Some(Box::new(f));
        self
    }

    /// Hook for swipes toward the trailing edge.
    #[must_use]
    pub fn on_swipe_right(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_swipe_right = Some(Box::new(f));
        self
    }

    /// Hook for upward swipes.
    #[must_use]
    pub fn on_swipe_top(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_swipe_top = Some(Box::new(f));
        self
    }

    /// Hook for downward swipes.
    #[must_use]
    pub fn on_swipe_bottom(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_swipe_bottom = Some(Box::new(f));
        self
    }

    /// Hook fired instead of laying out when there are no items.
    #[must_use]
    pub fn on_empty_stack(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_empty_stack = Some(Box::new(f));
        self
    }

    fn swiped(&mut self, direction: SwipeDirection, item: &T) {
        let hook = match direction {
            SwipeDirection::Start => &mut self.on_swipe_left,
            SwipeDirection::End => &mut self.on_swipe_right,
            SwipeDirection::Top => &mut self.on_swipe_top,
            SwipeDirection::Bottom => &mut self.on_swipe_bottom,
        };
        if let Some(hook) = hook {
            hook(item);
        }
    }

    fn empty(&mut self) {
        if let Some(hook) = &mut self.on_empty_stack {
            hook();
        }
    }
}

impl<T> Default for SwipeCallbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SwipeCallbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeCallbacks")
            .field("on_swipe_left", &self.on_swipe_left.is_some())
            .field("on_swipe_right", &self.on_swipe_right.is_some())
            .field("on_swipe_top", &self.on_swipe_top.is_some())
            .field("on_swipe_bottom", &self.on_swipe_bottom.is_some())
            .field("on_empty_stack", &self.on_empty_stack.is_some())
            .finish()
    }
}

/// A headless swipe-card stack.
///
/// The host forwards pointer events, calls [`tick`](Self::tick) once per
/// frame, and draws whatever [`layout`](Self::layout) returns.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use kurbo::{Point, Size};
/// use understory_card_stack::{SwipeCallbacks, SwipeCard, SwipeCardConfig};
///
/// let swiped = Rc::new(RefCell::new(Vec::new()));
/// let log = swiped.clone();
/// let callbacks = SwipeCallbacks::new().on_swipe_right(move |item: &&str| log.borrow_mut().push(*item));
///
/// let mut card = SwipeCard::new(
///     vec!["A", "B", "C"],
///     SwipeCardConfig::new(Size::new(400.0, 800.0)),
///     callbacks,
/// );
///
/// card.pointer_down(Point::new(100.0, 100.0));
/// card.pointer_move(Point::new(250.0, 100.0));
/// card.pointer_up();
///
/// let mut now = 0;
/// while card.is_animating() {
///     card.tick(now);
///     now += 16_000_000;
/// }
///
/// assert_eq!(*swiped.borrow(), ["C"]);
/// assert_eq!(card.stack().items(), &["C", "A", "B"]);
/// assert_eq!(card.active(), Some(&"B"));
/// ```
#[derive(Debug)]
pub struct SwipeCard<T> {
    stack: CardStack<T>,
    controller: CardStackController,
    gesture: SwipeGesture,
    config: SwipeCardConfig,
    callbacks: SwipeCallbacks<T>,
}

impl<T> SwipeCard<T> {
    /// Creates the widget. Fires the empty-stack hook right away if `items` is empty.
    #[must_use]
    pub fn new(items: Vec<T>, config: SwipeCardConfig, callbacks: SwipeCallbacks<T>) -> Self {
        let mut card = Self {
            stack: CardStack::new(items),
            controller: CardStackController::new(&config),
            gesture: SwipeGesture::default(),
            config,
            callbacks,
        };
        if card.stack.is_empty() {
            log::debug!("swipe card created with no items");
            card.callbacks.empty();
        }
        card
    }

    /// The backing stack.
    #[must_use]
    pub fn stack(&self) -> &CardStack<T> {
        &self.stack
    }

    /// The controller owning the animated values.
    #[must_use]
    pub fn controller(&self) -> &CardStackController {
        &self.controller
    }

    /// The configuration this widget was built with, with the current viewport.
    #[must_use]
    pub fn config(&self) -> &SwipeCardConfig {
        &self.config
    }

    /// The active item.
    #[must_use]
    pub fn active(&self) -> Option<&T> {
        self.stack.active()
    }

    /// Snapshot of the animated values.
    #[must_use]
    pub fn state(&self) -> CardState {
        self.controller.snapshot()
    }

    /// Returns `true` while a commit or return is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Updates viewport metrics.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.config.viewport = viewport;
        self.controller.set_viewport(viewport);
    }

    /// Pointer pressed on the active card. Ignored when the stack is empty.
    pub fn pointer_down(&mut self, pos: Point) -> bool {
        if self.stack.is_empty() {
            return false;
        }
        self.gesture.pointer_down(&mut self.controller, pos)
    }

    /// Pointer moved.
    pub fn pointer_move(&mut self, pos: Point) -> Option<Vec2> {
        self.gesture.pointer_move(&mut self.controller, pos)
    }

    /// Pointer moved by a raw delta.
    pub fn drag_by(&mut self, delta: Vec2) -> bool {
        self.gesture.drag_by(&mut self.controller, delta)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) -> Option<ReleaseDecision> {
        self.gesture.pointer_up(&mut self.controller)
    }

    /// Pointer capture lost.
    pub fn pointer_cancel(&mut self) {
        self.gesture.pointer_cancel(&mut self.controller);
    }

    /// Commits a swipe without a gesture, as a button would.
    pub fn swipe(&mut self, direction: SwipeDirection) -> bool {
        debug_assert!(
            !self.stack.is_empty(),
            "swipe({direction:?}) on an empty card stack"
        );
        if self.stack.is_empty() {
            return false;
        }
        self.controller.commit(direction)
    }

    /// Animates the active card back to rest.
    pub fn return_to_center(&mut self) -> bool {
        self.controller.return_to_center()
    }

    /// Advances animations. When a commit finishes, fires the matching hook
    /// with the item that was active, then rotates the stack.
    pub fn tick(&mut self, now_nanos: u64) -> Option<SwipeDirection> {
        let direction = self.controller.tick(now_nanos)?;
        if let Some(item) = self.stack.active() {
            self.callbacks.swiped(direction, item);
        }
        self.stack.rotate();
        Some(direction)
    }

    /// Lays out the visible cards, or fires the empty-stack hook and returns `None`.
    pub fn layout(&mut self) -> Option<StackLayout> {
        let state = self.controller.snapshot();
        let out = layout(&self.stack, &state, &self.config);
        if out.is_none() {
            self.callbacks.empty();
        }
        out
    }

    /// Replaces the items and puts the active card back at rest.
    pub fn reset(&mut self, items: Vec<T>) {
        self.stack.reset(items);
        self.controller.reset();
        self.gesture = SwipeGesture::default();
        if self.stack.is_empty() {
            self.callbacks.empty();
        }
    }
}
