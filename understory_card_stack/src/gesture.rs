// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer handling for the active card and the release threshold decision.
//!
//! ## Usage
//!
//! 1) Call [`SwipeGesture::pointer_down`] when the pointer lands on the active card.
//! 2) Call [`SwipeGesture::pointer_move`] for every move; the delta since the last
//!    position is applied to the controller.
//! 3) Call [`SwipeGesture::pointer_up`] to let the controller commit or return.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_card_stack::{
//!     CardStackController, ReleaseDecision, SwipeCardConfig, SwipeDirection, SwipeGesture,
//! };
//!
//! let mut controller = CardStackController::new(&SwipeCardConfig::new(Size::new(400.0, 800.0)));
//! let mut gesture = SwipeGesture::default();
//!
//! gesture.pointer_down(&mut controller, Point::new(200.0, 300.0));
//! gesture.pointer_move(&mut controller, Point::new(150.0, 302.0));
//! gesture.pointer_move(&mut controller, Point::new(90.0, 305.0));
//!
//! let decision = gesture.pointer_up(&mut controller);
//! assert_eq!(decision, Some(ReleaseDecision::Commit(SwipeDirection::Start)));
//! ```

use kurbo::{Point, Vec2};

use crate::anchors::SwipeDirection;
use crate::config::Orientation;
use crate::controller::CardStackController;

/// What a released drag resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// Animate off-screen in the given direction.
    Commit(SwipeDirection),
    /// Animate back to the resting position.
    ReturnToCenter,
}

/// Decides between committing and returning for a drag released at `position`.
///
/// Only the axis selected by `orientation` matters. A displacement at or
/// beyond `threshold` on either side commits toward that side; anything
/// strictly inside, including zero, returns to center.
#[must_use]
pub fn decide_release(orientation: Orientation, position: Vec2, threshold: f64) -> ReleaseDecision {
    let (offset, toward_low, toward_high) = match orientation {
        Orientation::Horizontal => (position.x, SwipeDirection::Start, SwipeDirection::End),
        Orientation::Vertical => (position.y, SwipeDirection::Top, SwipeDirection::Bottom),
    };
    if offset == 0.0 {
        ReleaseDecision::ReturnToCenter
    } else if offset < 0.0 {
        if offset <= -threshold {
            ReleaseDecision::Commit(toward_low)
        } else {
            ReleaseDecision::ReturnToCenter
        }
    } else if offset >= threshold {
        ReleaseDecision::Commit(toward_high)
    } else {
        ReleaseDecision::ReturnToCenter
    }
}

/// Tracks one pointer over the active card and forwards its movement.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeGesture {
    /// Where the pointer went down.
    pub start_pos: Option<Point>,
    /// Last pointer position seen while dragging.
    pub last_pos: Option<Point>,
}

impl SwipeGesture {
    /// Starts tracking a pointer at `pos`.
    ///
    /// Returns `false`, without tracking, if the controller is still settling a
    /// previous commit or return.
    pub fn pointer_down(&mut self, controller: &mut CardStackController, pos: Point) -> bool {
        if !controller.begin_drag() {
            return false;
        }
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        true
    }

    /// Applies the movement since the last position and returns it.
    pub fn pointer_move(&mut self, controller: &mut CardStackController, pos: Point) -> Option<Vec2> {
        let last = self.last_pos?;
        let delta = pos - last;
        self.last_pos = Some(pos);
        controller.apply_drag(delta).then_some(delta)
    }

    /// Applies a raw delta, for hosts that report movement rather than positions.
    pub fn drag_by(&mut self, controller: &mut CardStackController, delta: Vec2) -> bool {
        if !self.is_dragging() {
            return false;
        }
        if let Some(last) = self.last_pos {
            self.last_pos = Some(last + delta);
        }
        controller.apply_drag(delta)
    }

    /// Ends the drag and lets the controller commit or return.
    ///
    /// Returns `None` if no drag was being tracked or the controller ignored the release.
    pub fn pointer_up(&mut self, controller: &mut CardStackController) -> Option<ReleaseDecision> {
        if !self.is_dragging() {
            return None;
        }
        self.end();
        controller.release_drag()
    }

    /// Abandons the drag and returns the card to center without a threshold check.
    pub fn pointer_cancel(&mut self, controller: &mut CardStackController) {
        if !self.is_dragging() {
            return;
        }
        self.end();
        controller.return_to_center();
    }

    /// Total movement since the pointer went down.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Returns `true` while a pointer is being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }
}
