// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation tracks advanced by an external frame clock.
//!
//! A [`Track`] holds one animated value and at most one running animation.
//! The host calls [`Track::tick`] once per frame with a monotonic timestamp in
//! nanoseconds; nothing here reads a clock or schedules work on its own.
//!
//! Every animation started with [`Track::animate_to`] carries an
//! [`AnimationHandle`]. Starting another animation, snapping, or cancelling
//! drops the previous one, and its handle is never reported as finished.
//!
//! ```
//! use understory_card_stack::track::{AnimationHandle, AnimationSpec, Track, TrackTick};
//!
//! let mut scale = Track::new(0.9_f64);
//! let handle = AnimationHandle::from_raw(1);
//! scale.animate_to(1.0, AnimationSpec::linear(100), handle);
//!
//! // The first tick latches the start time.
//! assert_eq!(scale.tick(0), TrackTick::Running);
//! assert_eq!(scale.tick(50_000_000), TrackTick::Running);
//! assert!((scale.value() - 0.95).abs() < 1e-9);
//! assert_eq!(scale.tick(100_000_000), TrackTick::Finished(handle));
//! assert_eq!(scale.value(), 1.0);
//! ```

use kurbo::Vec2;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Values that can be linearly interpolated by a [`Track`].
pub trait Lerp: Copy {
    /// Interpolates between `self` and `target` by `fraction`.
    fn lerp(self, target: Self, fraction: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, target: Self, fraction: f64) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Vec2 {
    fn lerp(self, target: Self, fraction: f64) -> Self {
        Self::lerp(self, target, fraction)
    }
}

/// Easing curves, named after their Material counterparts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic ease in.
    EaseIn,
    /// Cubic ease out.
    EaseOut,
    /// Cubic ease in and out.
    EaseInOut,
    /// Material standard curve.
    #[default]
    FastOutSlowIn,
    /// Material deceleration curve.
    LinearOutSlowIn,
    /// Material acceleration curve.
    FastOutLinearIn,
}

impl Easing {
    /// Maps a linear fraction in `[0, 1]` through the curve.
    #[must_use]
    pub fn transform(self, fraction: f64) -> f64 {
        match self {
            Self::Linear => fraction.clamp(0.0, 1.0),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Self::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Self::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    fn sample(a: f64, b: f64, c: f64, t: f64) -> f64 {
        ((a * t + b) * t + c) * t
    }

    fn slope(a: f64, b: f64, c: f64, t: f64) -> f64 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    // Solve x(t) = fraction with Newton-Raphson, falling back to bisection.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-7 {
            solved = true;
            break;
        }
        let dx = slope(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut lo, mut hi) = (0.0, 1.0);
        t = fraction;
        for _ in 0..32 {
            let x = sample(ax, bx, cx, t) - fraction;
            if x.abs() < 1e-7 {
                break;
            }
            if x > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

/// Duration, easing, and start delay of a tween.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing curve.
    pub easing: Easing,
    /// Delay before the value starts moving, in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Duration of commit and return animations.
    pub const SWIPE_DURATION_MILLIS: u64 = 90;

    /// A tween with the given duration and easing.
    #[must_use]
    pub const fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// A linear tween.
    #[must_use]
    pub const fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Adds a start delay.
    #[must_use]
    pub const fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Eased progress in `[0, 1]` after `elapsed_nanos`, and whether the tween is done.
    fn progress(&self, elapsed_nanos: u64) -> (f64, bool) {
        let delay = self.delay_millis.saturating_mul(NANOS_PER_MILLI);
        if elapsed_nanos < delay {
            return (0.0, false);
        }
        let duration = self.duration_millis.saturating_mul(NANOS_PER_MILLI);
        let active = elapsed_nanos - delay;
        if duration == 0 || active >= duration {
            return (1.0, true);
        }
        let linear = active as f64 / duration as f64;
        (self.easing.transform(linear), false)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(Self::SWIPE_DURATION_MILLIS, Easing::FastOutSlowIn)
    }
}

/// Identifies one animation started on a [`Track`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    /// Wraps a raw generation number.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw generation number.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Outcome of advancing a [`Track`] by one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrackTick {
    /// Nothing was running.
    Idle,
    /// An animation is still in flight.
    Running,
    /// The animation with this handle reached its target on this frame.
    Finished(AnimationHandle),
}

#[derive(Copy, Clone, Debug)]
struct Running<T> {
    from: T,
    to: T,
    spec: AnimationSpec,
    started_at: Option<u64>,
    handle: AnimationHandle,
}

/// An animated value plus its running/idle status.
#[derive(Copy, Clone, Debug)]
pub struct Track<T: Lerp> {
    value: T,
    running: Option<Running<T>>,
}

impl<T: Lerp> Track<T> {
    /// Creates an idle track holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            running: None,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// Value the track is heading to, or the current value when idle.
    #[must_use]
    pub fn target(&self) -> T {
        self.running.as_ref().map_or(self.value, |r| r.to)
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Handle of the running animation, if any.
    #[must_use]
    pub fn handle(&self) -> Option<AnimationHandle> {
        self.running.as_ref().map(|r| r.handle)
    }

    /// Assigns `value` immediately, cancelling any running animation.
    pub fn snap_to(&mut self, value: T) {
        self.running = None;
        self.value = value;
    }

    /// Starts animating from the current value to `target`.
    ///
    /// Any running animation is cancelled and replaced. Returns the handle of
    /// the cancelled animation, if there was one.
    pub fn animate_to(
        &mut self,
        target: T,
        spec: AnimationSpec,
        handle: AnimationHandle,
    ) -> Option<AnimationHandle> {
        let replaced = self.handle();
        self.running = Some(Running {
            from: self.value,
            to: target,
            spec,
            started_at: None,
            handle,
        });
        replaced
    }

    /// Stops the running animation where it is.
    pub fn cancel(&mut self) -> Option<AnimationHandle> {
        self.running.take().map(|r| r.handle)
    }

    /// Advances the running animation to `now_nanos`.
    pub fn tick(&mut self, now_nanos: u64) -> TrackTick {
        let Some(running) = self.running.as_mut() else {
            return TrackTick::Idle;
        };
        let started_at = *running.started_at.get_or_insert(now_nanos);
        let (fraction, done) = running.spec.progress(now_nanos.saturating_sub(started_at));
        if done {
            let handle = running.handle;
            self.value = running.to;
            self.running = None;
            TrackTick::Finished(handle)
        } else {
            self.value = running.from.lerp(running.to, fraction);
            TrackTick::Running
        }
    }
}

impl<T: Lerp + Default> Default for Track<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
