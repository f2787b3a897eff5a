// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;
use understory_motion::{AnimationSpec, DecaySpec};

fn spring_threshold(spec: AnimationSpec) -> Option<f64> {
    match spec {
        AnimationSpec::Spring(spring) => Some(spring.visibility_threshold),
        AnimationSpec::Tween { .. } => None,
    }
}

/// Lowest scale a pinch can reach.
///
/// Slightly under `1.0` so a pinch-in can overshoot before
/// [`ZoomController::end_gesture`](crate::ZoomController::end_gesture)
/// springs it back.
pub const MIN_SCALE: f64 = 0.9;

/// When a one-finger pan on zoomed content is handed to an ancestor
/// scroll container instead of panning the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollGesturePropagation {
    /// Release the pan once the content edge in the drag direction is
    /// already showing, so a pager can take over.
    #[default]
    ContentEdge,
    /// Release the pan only while the content is not zoomed.
    NotZoomed,
}

/// Construction-time configuration for [`ZoomController`](crate::ZoomController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Largest reachable scale. Must be finite and at least `1.0`.
    pub max_scale: f64,
    /// Natural size of the content. Zero means "same as the viewport".
    pub content_size: Size,
    /// Fling parameters applied to the offsets on release.
    pub decay: DecaySpec,
    /// Animation returning the scale to `1.0` after an overshooting pinch.
    pub snap_back: AnimationSpec,
    /// Animation for programmatic zooms that do not supply their own.
    pub zoom_animation: AnimationSpec,
    /// Edge hand-off policy for one-finger pans.
    pub scroll_propagation: ScrollGesturePropagation,
    /// Release velocity is clamped to this many units per second on each axis.
    pub max_fling_velocity: f64,
}

impl ZoomConfig {
    /// Default configuration with the given maximum scale.
    #[must_use]
    pub fn new(max_scale: f64) -> Self {
        Self {
            max_scale,
            ..Self::default()
        }
    }

    /// Sets the maximum scale.
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Sets the initial content size.
    #[must_use]
    pub fn with_content_size(mut self, size: Size) -> Self {
        self.content_size = size;
        self
    }

    /// Sets the fling decay.
    #[must_use]
    pub fn with_decay(mut self, decay: DecaySpec) -> Self {
        self.decay = decay;
        self
    }

    /// Sets the scale snap-back animation.
    #[must_use]
    pub fn with_snap_back(mut self, spec: AnimationSpec) -> Self {
        self.snap_back = spec;
        self
    }

    /// Sets the default programmatic zoom animation.
    #[must_use]
    pub fn with_zoom_animation(mut self, spec: AnimationSpec) -> Self {
        self.zoom_animation = spec;
        self
    }

    /// Sets the edge hand-off policy.
    #[must_use]
    pub fn with_scroll_propagation(mut self, propagation: ScrollGesturePropagation) -> Self {
        self.scroll_propagation = propagation;
        self
    }

    /// Sets the fling velocity cap.
    #[must_use]
    pub fn with_max_fling_velocity(mut self, velocity: f64) -> Self {
        self.max_fling_velocity = velocity;
        self
    }

    /// Checks the configuration for caller mistakes.
    pub fn validate(&self) -> Result<(), ZoomConfigError> {
        if !(self.max_scale.is_finite() && self.max_scale >= 1.0) {
            return Err(ZoomConfigError::InvalidMaxScale(self.max_scale));
        }
        if self.max_fling_velocity.is_nan() || self.max_fling_velocity < 0.0 {
            return Err(ZoomConfigError::InvalidFlingVelocity(
                self.max_fling_velocity,
            ));
        }
        let DecaySpec::Exponential {
            velocity_threshold, ..
        } = self.decay;
        let thresholds = [
            Some(velocity_threshold),
            spring_threshold(self.snap_back),
            spring_threshold(self.zoom_animation),
        ];
        if let Some(bad) = thresholds.into_iter().flatten().find(|t| !t.is_finite()) {
            return Err(ZoomConfigError::InvalidThreshold(bad));
        }
        Ok(())
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_scale: 5.0,
            content_size: Size::ZERO,
            decay: DecaySpec::exponential(),
            snap_back: AnimationSpec::default(),
            zoom_animation: AnimationSpec::tween(700),
            scroll_propagation: ScrollGesturePropagation::default(),
            max_fling_velocity: 8_000.0,
        }
    }
}

/// Error returned when a [`ZoomConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomConfigError {
    /// `max_scale` was below `1.0` or not finite.
    InvalidMaxScale(f64),
    /// `max_fling_velocity` was negative or NaN.
    InvalidFlingVelocity(f64),
    /// A decay velocity threshold or spring visibility threshold was not finite.
    InvalidThreshold(f64),
}

impl fmt::Display for ZoomConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaxScale(v) => {
                write!(f, "max_scale must be finite and at least 1.0, got {v}")
            }
            Self::InvalidFlingVelocity(v) => {
                write!(f, "max_fling_velocity must be non-negative, got {v}")
            }
            Self::InvalidThreshold(v) => {
                write!(f, "animation thresholds must be finite, got {v}")
            }
        }
    }
}

impl core::error::Error for ZoomConfigError {}

#[cfg(test)]
mod tests {
    use understory_motion::{AnimationSpec, DecaySpec, Spring};

    use super::{ZoomConfig, ZoomConfigError};

    #[test]
    fn max_scale_at_or_above_one_is_accepted() {
        for max in [1.0, 1.5, 5.0, 1e6] {
            assert_eq!(ZoomConfig::new(max).validate(), Ok(()), "max_scale {max}");
        }
    }

    #[test]
    fn max_scale_below_one_or_non_finite_is_rejected() {
        for max in [0.99, 0.0, -2.0, f64::NAN, f64::INFINITY] {
            let err = ZoomConfig::new(max).validate().unwrap_err();
            assert!(
                matches!(err, ZoomConfigError::InvalidMaxScale(_)),
                "max_scale {max} gave {err:?}"
            );
        }
    }

    #[test]
    fn negative_fling_cap_is_rejected() {
        let err = ZoomConfig::default()
            .with_max_fling_velocity(-1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err, ZoomConfigError::InvalidFlingVelocity(-1.0));
    }

    #[test]
    fn non_finite_thresholds_are_rejected() {
        let decay = DecaySpec::Exponential {
            friction_multiplier: 1.0,
            velocity_threshold: f64::NAN,
        };
        let err = ZoomConfig::default().with_decay(decay).validate().unwrap_err();
        assert!(matches!(err, ZoomConfigError::InvalidThreshold(t) if t.is_nan()));

        let spring = Spring {
            visibility_threshold: f64::INFINITY,
            ..Spring::DEFAULT
        };
        let err = ZoomConfig::default()
            .with_snap_back(AnimationSpec::Spring(spring))
            .validate()
            .unwrap_err();
        assert_eq!(err, ZoomConfigError::InvalidThreshold(f64::INFINITY));
        assert!(
            ZoomConfig::default()
                .with_zoom_animation(AnimationSpec::Spring(spring))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn zero_decay_threshold_is_accepted() {
        let decay = DecaySpec::Exponential {
            friction_multiplier: 1.0,
            velocity_threshold: 0.0,
        };
        assert_eq!(ZoomConfig::default().with_decay(decay).validate(), Ok(()));
    }
}
