// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference points for drag normalization, release thresholds, and exit targets.

use kurbo::{Size, Vec2};

use crate::config::{Orientation, ThresholdConfig};

/// Direction of a committed swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Toward the leading (left) edge.
    Start,
    /// Toward the trailing (right) edge.
    End,
    /// Upward.
    Top,
    /// Downward.
    Bottom,
}

impl SwipeDirection {
    /// The axis this direction moves along.
    #[must_use]
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Start | Self::End => Orientation::Horizontal,
            Self::Top | Self::Bottom => Orientation::Vertical,
        }
    }
}

/// Anchors derived from the viewport: center, right edge, and bottom edge.
///
/// All three are displacements from the card's resting position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchors {
    /// Resting position.
    pub center: Vec2,
    /// One viewport width to the right.
    pub right: Vec2,
    /// One viewport height down.
    pub bottom: Vec2,
}

impl Anchors {
    /// Builds anchors for a viewport.
    #[must_use]
    pub fn from_viewport(viewport: Size) -> Self {
        Self {
            center: Vec2::ZERO,
            right: Vec2::new(viewport.width, 0.0),
            bottom: Vec2::new(0.0, viewport.height),
        }
    }

    /// The `(low, high)` anchor pair along an axis.
    #[must_use]
    pub fn span(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Horizontal => (self.center.x, self.right.x),
            Orientation::Vertical => (self.center.y, self.bottom.y),
        }
    }

    /// Release threshold along an axis for the given strategy.
    #[must_use]
    pub fn threshold(&self, orientation: Orientation, config: ThresholdConfig) -> f64 {
        let (low, high) = self.span(orientation);
        config.compute(low, high)
    }

    /// Position a committed card animates to.
    ///
    /// Horizontal exits travel one viewport width. Vertical exits travel
    /// `vertical_factor` viewport heights so the card is fully out of view
    /// before the frame that recycles it. The cross-axis component of
    /// `current` is kept.
    #[must_use]
    pub fn exit_target(&self, direction: SwipeDirection, current: Vec2, vertical_factor: f64) -> Vec2 {
        match direction {
            SwipeDirection::Start => Vec2::new(-self.right.x, current.y),
            SwipeDirection::End => Vec2::new(self.right.x, current.y),
            SwipeDirection::Top => Vec2::new(current.x, -self.bottom.y * vertical_factor),
            SwipeDirection::Bottom => Vec2::new(current.x, self.bottom.y * vertical_factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_follow_viewport() {
        let anchors = Anchors::from_viewport(Size::new(360.0, 640.0));
        assert_eq!(anchors.center, Vec2::ZERO);
        assert_eq!(anchors.right, Vec2::new(360.0, 0.0));
        assert_eq!(anchors.bottom, Vec2::new(0.0, 640.0));
        assert_eq!(anchors.span(Orientation::Vertical), (0.0, 640.0));
    }

    #[test]
    fn default_threshold_is_fifth_of_axis() {
        let anchors = Anchors::from_viewport(Size::new(400.0, 800.0));
        let t = ThresholdConfig::default();
        assert!((anchors.threshold(Orientation::Horizontal, t) - 80.0).abs() < 1e-9);
        assert!((anchors.threshold(Orientation::Vertical, t) - 160.0).abs() < 1e-9);
    }

    #[test]
    fn exit_targets_leave_the_viewport() {
        let anchors = Anchors::from_viewport(Size::new(400.0, 100.0));
        let here = Vec2::new(30.0, 5.0);
        assert_eq!(
            anchors.exit_target(SwipeDirection::Start, here, 6.0),
            Vec2::new(-400.0, 5.0)
        );
        assert_eq!(
            anchors.exit_target(SwipeDirection::End, here, 6.0),
            Vec2::new(400.0, 5.0)
        );
        assert_eq!(
            anchors.exit_target(SwipeDirection::Top, here, 6.0),
            Vec2::new(30.0, -600.0)
        );
        assert_eq!(
            anchors.exit_target(SwipeDirection::Bottom, here, 6.0),
            Vec2::new(30.0, 600.0)
        );
    }

    #[test]
    fn direction_axis() {
        assert_eq!(SwipeDirection::Start.orientation(), Orientation::Horizontal);
        assert_eq!(SwipeDirection::Bottom.orientation(), Orientation::Vertical);
    }
}
