// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated state of the active card and the commit/return state machine.
//!
//! [`CardStackController`] is the single owner of the active card's position,
//! rotation, and the next card's scale. Gesture code feeds it drag deltas,
//! the host advances it once per frame with [`CardStackController::tick`], and
//! renderers read a [`CardState`] snapshot.
//!
//! ## Phases
//!
//! ```text
//! Idle ──drag──▶ Dragging ──release──▶ Committing ──position done──▶ Idle
//!                                  └──▶ Returning  ──position done──▶ Idle
//! ```
//!
//! Drag input is ignored while committing or returning. Commands issued while
//! returning cancel the return tracks and replace them. Commands issued while
//! committing are ignored, so every commit completes exactly once.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Size, Vec2};
//! use understory_card_stack::{CardStackController, Phase, SwipeCardConfig, SwipeDirection};
//!
//! let config = SwipeCardConfig::new(Size::new(400.0, 800.0));
//! let mut controller = CardStackController::new(&config);
//!
//! controller.apply_drag(Vec2::new(120.0, 4.0));
//! assert_eq!(controller.phase(), Phase::Dragging);
//! assert!(controller.rotation() > 0.0);
//!
//! // 120px is past the default 20% threshold (80px), so the release commits.
//! controller.release_drag();
//! assert_eq!(controller.phase(), Phase::Committing(SwipeDirection::End));
//!
//! let mut now = 0;
//! let completed = loop {
//!     if let Some(direction) = controller.tick(now) {
//!         break direction;
//!     }
//!     now += 16_000_000;
//! };
//! assert_eq!(completed, SwipeDirection::End);
//! assert_eq!(controller.position(), Vec2::ZERO);
//! assert_eq!(controller.scale(), 0.9);
//! ```

use kurbo::{Size, Vec2};

use crate::anchors::{Anchors, SwipeDirection};
use crate::config::{Orientation, SwipeCardConfig, ThresholdConfig};
use crate::gesture::{ReleaseDecision, decide_release};
use crate::normalize::normalize;
use crate::track::{AnimationHandle, AnimationSpec, Track, TrackTick};

/// Where the controller is in its drag/commit cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No pointer contact and nothing animating.
    #[default]
    Idle,
    /// Drag deltas are being applied.
    Dragging,
    /// The active card is animating off-screen.
    Committing(SwipeDirection),
    /// The active card is animating back to center.
    Returning,
}

impl Phase {
    /// Returns `true` for the animated phases.
    #[must_use]
    pub fn is_settling(self) -> bool {
        matches!(self, Self::Committing(_) | Self::Returning)
    }
}

/// Snapshot of the animated values a renderer reads each frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardState {
    /// Displacement of the active card from its resting position.
    pub position: Vec2,
    /// Rotation of the active card in degrees.
    pub rotation: f64,
    /// Scale of the card behind the active one.
    pub scale: f64,
    /// Current phase.
    pub phase: Phase,
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    handle: AnimationHandle,
    commit: Option<SwipeDirection>,
}

/// Owns the active card's animated state and decides commit versus return.
#[derive(Clone, Debug)]
pub struct CardStackController {
    viewport: Size,
    anchors: Anchors,
    orientation: Orientation,
    threshold_config: ThresholdConfig,
    threshold: f64,
    animation: AnimationSpec,
    max_rotation: f64,
    rest_scale: f64,
    vertical_exit_factor: f64,
    position: Track<Vec2>,
    rotation: Track<f64>,
    scale: Track<f64>,
    phase: Phase,
    pending: Option<Pending>,
    next_handle: u64,
}

impl CardStackController {
    /// Creates a controller at rest.
    ///
    /// # Panics
    ///
    /// Panics if `config.rest_scale` is outside `[0, 1)` or
    /// `config.max_rotation_degrees` is negative.
    #[must_use]
    pub fn new(config: &SwipeCardConfig) -> Self {
        assert!(
            (0.0..1.0).contains(&config.rest_scale),
            "rest scale must be in [0, 1), got {}",
            config.rest_scale
        );
        assert!(
            config.max_rotation_degrees >= 0.0,
            "max rotation must not be negative, got {}",
            config.max_rotation_degrees
        );
        let anchors = Anchors::from_viewport(config.viewport);
        Self {
            viewport: config.viewport,
            anchors,
            orientation: config.orientation,
            threshold_config: config.threshold,
            threshold: anchors.threshold(config.orientation, config.threshold),
            animation: config.animation,
            max_rotation: config.max_rotation_degrees,
            rest_scale: config.rest_scale,
            vertical_exit_factor: config.vertical_exit_factor,
            position: Track::new(Vec2::ZERO),
            rotation: Track::new(0.0),
            scale: Track::new(config.rest_scale),
            phase: Phase::Idle,
            pending: None,
            next_handle: 0,
        }
    }

    /// Updates viewport metrics, recomputing anchors and the threshold.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.anchors = Anchors::from_viewport(viewport);
        self.threshold = self.anchors.threshold(self.orientation, self.threshold_config);
        log::debug!("viewport resized to {viewport:?}, threshold now {}", self.threshold);
    }

    /// Current viewport metrics.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Anchors derived from the viewport.
    #[must_use]
    pub fn anchors(&self) -> Anchors {
        self.anchors
    }

    /// Swipe axis.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Distance from center at or beyond which a release commits.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Displacement of the active card.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position.value()
    }

    /// Rotation of the active card in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation.value()
    }

    /// Scale of the next card.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    /// Resting scale of the next card.
    #[must_use]
    pub fn rest_scale(&self) -> f64 {
        self.rest_scale
    }

    /// Returns `true` while any track is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.position.is_running() || self.rotation.is_running() || self.scale.is_running()
    }

    /// Snapshot for renderers.
    #[must_use]
    pub fn snapshot(&self) -> CardState {
        CardState {
            position: self.position.value(),
            rotation: self.rotation.value(),
            scale: self.scale.value(),
            phase: self.phase,
        }
    }

    /// Marks the start of pointer contact.
    ///
    /// Returns `false`, and stays put, while a commit or return is settling.
    pub fn begin_drag(&mut self) -> bool {
        if self.phase.is_settling() {
            log::trace!("drag start ignored while {:?}", self.phase);
            return false;
        }
        if self.phase == Phase::Idle {
            log::debug!("drag started");
        }
        self.phase = Phase::Dragging;
        true
    }

    /// Adds a pointer delta to the position and rederives rotation and scale.
    ///
    /// Position is not clamped. Returns `false` if the delta was ignored
    /// because a commit or return is settling.
    pub fn apply_drag(&mut self, delta: Vec2) -> bool {
        if !self.begin_drag() {
            return false;
        }
        let position = self.position.value() + delta;
        self.position.snap_to(position);

        let (low, high) = self.anchors.span(self.orientation);
        match self.orientation {
            Orientation::Horizontal => {
                let distance = position.x.abs();
                let rotation = if self.max_rotation > 0.0 {
                    normalize(low, high, distance, 0.0, self.max_rotation)
                } else {
                    0.0
                };
                self.rotation
                    .snap_to(if position.x < 0.0 { -rotation } else { rotation });
                self.scale
                    .snap_to(normalize(low, high / 3.0, distance, self.rest_scale, 1.0));
            }
            Orientation::Vertical => {
                let distance = position.y.abs();
                self.scale
                    .snap_to(normalize(low, high / 3.0, distance, self.rest_scale, 1.0));
            }
        }
        true
    }

    /// Ends pointer contact: commits if past the threshold, otherwise returns to center.
    ///
    /// Returns `None` if a commit or return is already settling.
    pub fn release_drag(&mut self) -> Option<ReleaseDecision> {
        if self.phase.is_settling() {
            log::trace!("release ignored while {:?}", self.phase);
            return None;
        }
        let decision = decide_release(self.orientation, self.position.value(), self.threshold);
        log::debug!(
            "drag released at {:?} (threshold {}): {decision:?}",
            self.position.value(),
            self.threshold
        );
        match decision {
            ReleaseDecision::Commit(direction) => {
                self.commit(direction);
            }
            ReleaseDecision::ReturnToCenter => {
                self.return_to_center();
            }
        }
        Some(decision)
    }

    /// Animates the active card off-screen in `direction`.
    ///
    /// The next card's scale animates to `1.0` alongside. When the position
    /// track finishes, [`tick`](Self::tick) reports the direction once and
    /// snaps everything back to rest. Returns `false` if a commit is already
    /// in flight.
    pub fn commit(&mut self, direction: SwipeDirection) -> bool {
        if let Phase::Committing(current) = self.phase {
            log::trace!("commit {direction:?} ignored while committing {current:?}");
            return false;
        }
        let handle = self.next_handle();
        let target = self.anchors.exit_target(
            direction,
            self.position.value(),
            self.vertical_exit_factor,
        );
        self.position.animate_to(target, self.animation, handle);
        self.scale.animate_to(1.0, self.animation, handle);
        // Rotation holds where the drag left it until the post-commit snap.
        self.rotation.cancel();
        self.pending = Some(Pending {
            handle,
            commit: Some(direction),
        });
        self.phase = Phase::Committing(direction);
        log::debug!("committing {direction:?} toward {target:?}");
        true
    }

    /// Commits toward the leading edge.
    pub fn swipe_left(&mut self) -> bool {
        self.commit(SwipeDirection::Start)
    }

    /// Commits toward the trailing edge.
    pub fn swipe_right(&mut self) -> bool {
        self.commit(SwipeDirection::End)
    }

    /// Commits upward.
    pub fn swipe_top(&mut self) -> bool {
        self.commit(SwipeDirection::Top)
    }

    /// Commits downward.
    pub fn swipe_bottom(&mut self) -> bool {
        self.commit(SwipeDirection::Bottom)
    }

    /// Animates position, rotation, and scale back to rest. Never reports a swipe.
    ///
    /// Returns `false` if a commit is in flight.
    pub fn return_to_center(&mut self) -> bool {
        if self.phase.is_settling() && self.phase != Phase::Returning {
            log::trace!("return ignored while {:?}", self.phase);
            return false;
        }
        let handle = self.next_handle();
        self.position
            .animate_to(self.anchors.center, self.animation, handle);
        self.rotation.animate_to(0.0, self.animation, handle);
        self.scale.animate_to(self.rest_scale, self.animation, handle);
        self.pending = Some(Pending {
            handle,
            commit: None,
        });
        self.phase = Phase::Returning;
        log::debug!("returning to center");
        true
    }

    /// Advances all tracks to `now_nanos`.
    ///
    /// Returns the direction exactly once per commit, on the frame the
    /// off-screen position animation finishes. By then position, rotation,
    /// and scale have been snapped back to rest.
    pub fn tick(&mut self, now_nanos: u64) -> Option<SwipeDirection> {
        let position = self.position.tick(now_nanos);
        self.rotation.tick(now_nanos);
        self.scale.tick(now_nanos);

        let TrackTick::Finished(handle) = position else {
            return None;
        };
        let pending = self.pending.filter(|p| p.handle == handle)?;
        self.pending = None;
        self.phase = Phase::Idle;

        match pending.commit {
            Some(direction) => {
                self.snap_to_rest();
                log::debug!("commit {direction:?} finished");
                Some(direction)
            }
            None => {
                log::trace!("return to center finished");
                None
            }
        }
    }

    /// Cancels everything and snaps to rest without reporting a swipe.
    pub fn reset(&mut self) {
        self.snap_to_rest();
        self.pending = None;
        self.phase = Phase::Idle;
    }

    fn snap_to_rest(&mut self) {
        self.position.snap_to(self.anchors.center);
        self.rotation.snap_to(0.0);
        self.scale.snap_to(self.rest_scale);
    }

    fn next_handle(&mut self) -> AnimationHandle {
        self.next_handle = self.next_handle.wrapping_add(1);
        AnimationHandle::from_raw(self.next_handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const FRAME: u64 = 16_666_667;

    fn horizontal() -> CardStackController {
        CardStackController::new(&SwipeCardConfig::new(Size::new(300.0, 600.0)))
    }

    /// Ticks until nothing is animating, collecting reported swipes.
    fn settle(controller: &mut CardStackController, start: u64) -> (u64, Vec<SwipeDirection>) {
        let mut now = start;
        let mut swipes = Vec::new();
        for _ in 0..64 {
            if let Some(direction) = controller.tick(now) {
                swipes.push(direction);
            }
            if !controller.is_animating() && !controller.phase().is_settling() {
                break;
            }
            now += FRAME;
        }
        (now, swipes)
    }

    #[test]
    fn starts_at_rest() {
        let controller = horizontal();
        let state = controller.snapshot();
        assert_eq!(state.position, Vec2::ZERO);
        assert_eq!(state.rotation, 0.0);
        assert_eq!(state.scale, 0.9);
        assert_eq!(state.phase, Phase::Idle);
        assert!((controller.threshold() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn drag_accumulates_without_clamping() {
        let mut controller = horizontal();
        controller.apply_drag(Vec2::new(200.0, 10.0));
        controller.apply_drag(Vec2::new(250.0, -4.0));
        assert_eq!(controller.position(), Vec2::new(450.0, 6.0));
        // Rotation saturates at the configured maximum.
        assert_eq!(controller.rotation(), 10.0);
    }

    #[test]
    fn drag_left_rotates_negative() {
        let mut controller = horizontal();
        controller.apply_drag(Vec2::new(-150.0, 0.0));
        assert!((controller.rotation() + 5.0).abs() < 1e-9);
    }

    #[test]
    fn scale_reaches_one_at_third_of_right_anchor() {
        let mut controller = horizontal();
        controller.apply_drag(Vec2::new(100.0, 0.0));
        assert_eq!(controller.scale(), 1.0);

        let mut controller = horizontal();
        controller.apply_drag(Vec2::new(50.0, 0.0));
        assert!((controller.scale() - 0.95).abs() < 1e-9);
    }

    #[test]
    fn vertical_drag_scales_without_rotating() {
        let config = SwipeCardConfig::new(Size::new(300.0, 600.0))
            .with_orientation(Orientation::Vertical);
        let mut controller = CardStackController::new(&config);
        controller.apply_drag(Vec2::new(40.0, -100.0));
        assert_eq!(controller.rotation(), 0.0);
        assert!((controller.scale() - 0.95).abs() < 1e-9);
    }

    #[test]
    fn commit_reports_once_then_snaps_to_rest() {
        let mut controller = horizontal();
        controller.apply_drag(Vec2::new(90.0, 0.0));
        assert_eq!(
            controller.release_drag(),
            Some(ReleaseDecision::Commit(SwipeDirection::End))
        );

        // Mid-flight the card is on its way out and the next card grows.
        controller.tick(0);
        controller.tick(FRAME * 2);
        assert!(controller.position().x > 90.0);
        assert!(controller.scale() > 0.9);

        let (_, swipes) = settle(&mut controller, FRAME * 3);
        assert_eq!(swipes, [SwipeDirection::End]);
        assert_eq!(controller.position(), Vec2::ZERO);
        assert_eq!(controller.rotation(), 0.0);
        assert_eq!(controller.scale(), 0.9);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn swipe_is_not_reported_before_position_finishes() {
        let mut controller = horizontal();
        controller.swipe_left();
        assert_eq!(controller.tick(0), None);
        assert_eq!(controller.tick(45_000_000), None);
        assert!(controller.position().x < 0.0 && controller.position().x > -300.0);
        assert_eq!(controller.tick(90_000_000), Some(SwipeDirection::Start));
    }

    #[test]
    fn return_to_center_never_reports() {
        let mut controller = horizontal();
        controller.apply_drag(Vec2::new(30.0, 12.0));
        assert_eq!(
            controller.release_drag(),
            Some(ReleaseDecision::ReturnToCenter)
        );
        assert_eq!(controller.phase(), Phase::Returning);
        let (_, swipes) = settle(&mut controller, 0);
        assert!(swipes.is_empty());
        assert_eq!(controller.position(), Vec2::ZERO);
        assert_eq!(controller.rotation(), 0.0);
        assert_eq!(controller.scale(), 0.9);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn drag_is_ignored_while_committing() {
        let mut controller = horizontal();
        controller.swipe_right();
        controller.tick(0);
        assert!(!controller.apply_drag(Vec2::new(-500.0, 0.0)));
        assert_eq!(controller.release_drag(), None);
        let (_, swipes) = settle(&mut controller, FRAME);
        assert_eq!(swipes, [SwipeDirection::End]);
    }

    #[test]
    fn second_commit_while_committing_is_ignored() {
        let mut controller = horizontal();
        assert!(controller.swipe_right());
        assert!(!controller.swipe_left());
        assert!(!controller.return_to_center());
        let (_, swipes) = settle(&mut controller, 0);
        assert_eq!(swipes, [SwipeDirection::End]);
    }

    #[test]
    fn commit_during_return_replaces_stale_tracks() {
        let mut controller = horizontal();
        controller.apply_drag(Vec2::new(20.0, 0.0));
        controller.release_drag();
        controller.tick(0);
        controller.tick(FRAME);

        assert!(controller.swipe_top());
        assert_eq!(controller.phase(), Phase::Committing(SwipeDirection::Top));
        let (_, swipes) = settle(&mut controller, FRAME * 2);
        // The cancelled return never completes on its own.
        assert_eq!(swipes, [SwipeDirection::Top]);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn vertical_commit_travels_multiple_heights() {
        let config = SwipeCardConfig::new(Size::new(300.0, 100.0))
            .with_orientation(Orientation::Vertical);
        let mut controller = CardStackController::new(&config);
        controller.swipe_bottom();
        controller.tick(0);
        controller.tick(89_000_000);
        assert!(controller.position().y > 100.0, "card should be past one height");
        assert!(controller.position().y <= 600.0);
    }

    #[test]
    fn resize_recomputes_threshold() {
        let mut controller = horizontal();
        controller.set_viewport(Size::new(500.0, 600.0));
        assert!((controller.threshold() - 100.0).abs() < 1e-9);
        assert_eq!(controller.anchors().right, Vec2::new(500.0, 0.0));
    }

    #[test]
    fn fixed_threshold_ignores_viewport() {
        let config = SwipeCardConfig::new(Size::new(1080.0, 1920.0))
            .with_threshold(ThresholdConfig::REFERENCE_FIXED);
        let mut controller = CardStackController::new(&config);
        controller.apply_drag(Vec2::new(-72.0, 0.0));
        assert_eq!(
            controller.release_drag(),
            Some(ReleaseDecision::Commit(SwipeDirection::Start))
        );
    }

    #[test]
    fn reset_clears_pending_commit() {
        let mut controller = horizontal();
        controller.swipe_right();
        controller.tick(0);
        controller.reset();
        let (_, swipes) = settle(&mut controller, FRAME);
        assert!(swipes.is_empty());
        assert_eq!(controller.snapshot().phase, Phase::Idle);
    }
}
