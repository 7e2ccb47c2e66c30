// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static configuration for a swipe-card stack.

use kurbo::Size;

use crate::track::AnimationSpec;

/// Axis along which the active card can be swiped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Swipes go left or right.
    #[default]
    Horizontal,
    /// Swipes go up or down.
    Vertical,
}

/// Edge of the stacked-card layout that receives extra padding to suggest depth.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShadowSide {
    /// Leading (left) edge.
    Start,
    /// Trailing (right) edge.
    End,
    /// Top edge.
    Top,
    /// Bottom edge.
    #[default]
    Bottom,
}

/// Strategy for the release threshold between two anchors.
///
/// The result of [`ThresholdConfig::compute`] is a distance measured from the
/// first anchor toward the second.
#[derive(Copy, Clone, Debug)]
pub enum ThresholdConfig {
    /// An absolute distance in pixels.
    Fixed(f64),
    /// A fraction of the distance between the two anchors.
    Fractional(f64),
    /// A caller-provided function of `(from, to)`.
    Custom(fn(f64, f64) -> f64),
}

impl ThresholdConfig {
    /// A fixed 72px threshold, independent of viewport size.
    pub const REFERENCE_FIXED: Self = Self::Fixed(72.0);

    /// Computes the threshold distance between anchors `from` and `to`.
    #[must_use]
    pub fn compute(self, from: f64, to: f64) -> f64 {
        match self {
            Self::Fixed(px) => px,
            Self::Fractional(fraction) => (to - from) * fraction,
            Self::Custom(f) => f(from, to),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::Fractional(0.2)
    }
}

/// Construction-time parameters for a [`SwipeCard`](crate::SwipeCard) and its controller.
///
/// All lengths are in the same units as pointer positions, typically logical pixels.
#[derive(Clone, Debug)]
pub struct SwipeCardConfig {
    /// Viewport metrics used to scale swipe-out distance and normalization ranges.
    pub viewport: Size,
    /// Height of a single card.
    pub card_height: f64,
    /// Margin between stacked cards along the shadow side.
    pub between_margin: f64,
    /// Unit of cross-axis inset applied to cards behind the active one.
    pub side_inset: f64,
    /// Swipe axis.
    pub orientation: Orientation,
    /// Edge receiving the depth padding.
    pub shadow_side: ShadowSide,
    /// Release threshold strategy.
    pub threshold: ThresholdConfig,
    /// Animation used for commit and return-to-center tracks.
    pub animation: AnimationSpec,
    /// Rotation reached when the card is dragged a full viewport width.
    pub max_rotation_degrees: f64,
    /// Scale of the next card while it rests behind the active one.
    pub rest_scale: f64,
    /// Multiple of the viewport height a vertical commit travels.
    pub vertical_exit_factor: f64,
}

impl SwipeCardConfig {
    /// Creates a configuration for the given viewport with default everything else.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Sets the card height.
    #[must_use]
    pub fn with_card_height(mut self, card_height: f64) -> Self {
        self.card_height = card_height;
        self
    }

    /// Sets the margin between stacked cards.
    #[must_use]
    pub fn with_between_margin(mut self, between_margin: f64) -> Self {
        self.between_margin = between_margin;
        self
    }

    /// Sets the cross-axis inset unit.
    #[must_use]
    pub fn with_side_inset(mut self, side_inset: f64) -> Self {
        self.side_inset = side_inset;
        self
    }

    /// Sets the swipe axis.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the shadow side.
    #[must_use]
    pub fn with_shadow_side(mut self, shadow_side: ShadowSide) -> Self {
        self.shadow_side = shadow_side;
        self
    }

    /// Sets the release threshold strategy.
    #[must_use]
    pub fn with_threshold(mut self, threshold: ThresholdConfig) -> Self {
        self.threshold = threshold;
        self
    }

    /// Overrides the animation used for every commit and return.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    /// Sets the rotation reached at a full-width drag.
    #[must_use]
    pub fn with_max_rotation(mut self, degrees: f64) -> Self {
        self.max_rotation_degrees = degrees;
        self
    }

    /// Sets the resting scale of the next card.
    ///
    /// # Panics
    ///
    /// Panics if `rest_scale` is not in `[0, 1)`.
    #[must_use]
    pub fn with_rest_scale(mut self, rest_scale: f64) -> Self {
        assert!(
            (0.0..1.0).contains(&rest_scale),
            "rest scale must be in [0, 1), got {rest_scale}"
        );
        self.rest_scale = rest_scale;
        self
    }
}

impl Default for SwipeCardConfig {
    fn default() -> Self {
        Self {
            viewport: Size::ZERO,
            card_height: 136.0,
            between_margin: 24.0,
            side_inset: 16.0,
            orientation: Orientation::Horizontal,
            shadow_side: ShadowSide::Bottom,
            threshold: ThresholdConfig::default(),
            animation: AnimationSpec::default(),
            max_rotation_degrees: 10.0,
            rest_scale: 0.9,
            vertical_exit_factor: 6.0,
        }
    }
}
