// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameterization of target-driven and velocity-driven motion.

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::easing::Easing;

#[cfg(feature = "std")]
fn exp(x: f64) -> f64 {
    x.exp()
}

// `FloatFuncs` has no `exp`.
#[cfg(not(feature = "std"))]
fn exp(x: f64) -> f64 {
    core::f64::consts::E.powf(x)
}

/// Damped harmonic oscillator with unit mass.
///
/// Springs start from the channel's current value *and velocity*, so
/// retargeting a running spring stays smooth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    /// `1.0` is critically damped, below is bouncy, above is sluggish.
    ///
    /// Values `<= 0` are treated as critically damped.
    pub damping_ratio: f64,
    /// Spring constant; higher is faster. Values `<= 0` snap.
    pub stiffness: f64,
    /// Displacement below which the spring is considered at rest.
    ///
    /// Non-finite values use the default of `0.01`; values are floored at
    /// `1e-6` so the spring always comes to rest.
    pub visibility_threshold: f64,
}

impl Spring {
    const MIN_THRESHOLD: f64 = 1e-6;

    /// Critically damped, fairly stiff. No overshoot.
    pub const DEFAULT: Self = Self::new(1.0, 1500.0);

    /// Visibly bouncy with the same stiffness as [`Spring::DEFAULT`].
    pub const BOUNCY: Self = Self::new(0.5, 1500.0);

    /// Creates a spring with the default visibility threshold of `0.01`.
    #[must_use]
    pub const fn new(damping_ratio: f64, stiffness: f64) -> Self {
        Self {
            damping_ratio,
            stiffness,
            visibility_threshold: 0.01,
        }
    }

    fn threshold(&self) -> f64 {
        let threshold = self.visibility_threshold.abs();
        if threshold.is_finite() {
            threshold.max(Self::MIN_THRESHOLD)
        } else {
            Self::DEFAULT.visibility_threshold
        }
    }

    fn damping(&self) -> f64 {
        if self.damping_ratio > 0.0 {
            self.damping_ratio
        } else {
            1.0
        }
    }

    /// Returns `(displacement, velocity)` at `t` seconds for a spring released
    /// at displacement `x0` from its rest position with velocity `v0`.
    pub(crate) fn evaluate(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let omega = self.stiffness.sqrt();
        let zeta = self.damping();
        if (zeta - 1.0).abs() < 1e-6 {
            let b = v0 + omega * x0;
            let decay = exp(-omega * t);
            ((x0 + b * t) * decay, (v0 - omega * t * b) * decay)
        } else if zeta < 1.0 {
            let a = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + a * x0) / omega_d;
            let decay = exp(-a * t);
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = decay * (x0 * cos + b * sin);
            let v = decay * ((b * omega_d - a * x0) * cos - (a * b + x0 * omega_d) * sin);
            (x, v)
        } else {
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + root;
            let r2 = -zeta * omega - root;
            let c2 = (r1 * x0 - v0) / (r1 - r2);
            let c1 = x0 - c2;
            let e1 = exp(r1 * t);
            let e2 = exp(r2 * t);
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        }
    }

    /// Whether a spring state is close enough to rest to stop.
    ///
    /// Velocity is compared against the speed of an oscillation whose
    /// amplitude equals the visibility threshold.
    pub(crate) fn is_at_rest(&self, displacement: f64, velocity: f64) -> bool {
        let threshold = self.threshold();
        displacement.abs() <= threshold
            && velocity.abs() <= threshold * self.stiffness.max(1.0).sqrt()
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How a channel travels to an explicit target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationSpec {
    /// Fixed-duration interpolation along an easing curve.
    Tween {
        /// Total duration. Zero snaps.
        duration: Duration,
        /// Progress curve.
        easing: Easing,
    },
    /// Physics-based approach; duration follows from the spring parameters.
    Spring(Spring),
}

impl AnimationSpec {
    /// A [`Easing::FastOutSlowIn`] tween lasting `millis` milliseconds.
    #[must_use]
    pub const fn tween(millis: u64) -> Self {
        Self::Tween {
            duration: Duration::from_millis(millis),
            easing: Easing::FastOutSlowIn,
        }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::Spring(Spring::DEFAULT)
    }
}

impl From<Spring> for AnimationSpec {
    fn from(spring: Spring) -> Self {
        Self::Spring(spring)
    }
}

/// How a channel comes to rest from an initial velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecaySpec {
    /// Velocity decays exponentially: `v(t) = v0 · e^(friction · t)` with
    /// `friction = -4.2 · friction_multiplier`.
    Exponential {
        /// Scales the base friction; larger stops sooner. Values `<= 0` or
        /// non-finite use `1`.
        friction_multiplier: f64,
        /// Speed in units per second under which the motion stops.
        ///
        /// Non-finite values use the default of `0.1`; values are floored at
        /// `1e-3`.
        velocity_threshold: f64,
    },
}

impl DecaySpec {
    const BASE_FRICTION: f64 = -4.2;
    const MIN_VELOCITY_THRESHOLD: f64 = 1e-3;

    /// Exponential decay with the default friction and a `0.1` units/s stop threshold.
    #[must_use]
    pub const fn exponential() -> Self {
        Self::Exponential {
            friction_multiplier: 1.0,
            velocity_threshold: 0.1,
        }
    }

    fn friction(self) -> f64 {
        match self {
            Self::Exponential {
                friction_multiplier,
                ..
            } => {
                let multiplier = if friction_multiplier > 0.0 && friction_multiplier.is_finite() {
                    friction_multiplier
                } else {
                    1.0
                };
                Self::BASE_FRICTION * multiplier
            }
        }
    }

    fn velocity_threshold(self) -> f64 {
        match self {
            Self::Exponential {
                velocity_threshold, ..
            } => {
                let threshold = velocity_threshold.abs();
                if threshold.is_finite() {
                    threshold.max(Self::MIN_VELOCITY_THRESHOLD)
                } else {
                    0.1
                }
            }
        }
    }

    /// Seconds until a release at `velocity` drops under the stop threshold.
    #[must_use]
    pub fn duration_secs(self, velocity: f64) -> f64 {
        let threshold = self.velocity_threshold();
        let speed = velocity.abs();
        if speed <= threshold {
            return 0.0;
        }
        (threshold / speed).ln() / self.friction()
    }

    /// Value `t` seconds after releasing at `start` with `velocity`.
    #[must_use]
    pub fn value_at(self, start: f64, velocity: f64, t: f64) -> f64 {
        let friction = self.friction();
        start - velocity / friction + velocity / friction * exp(friction * t)
    }

    /// Velocity `t` seconds after releasing with `velocity`.
    #[must_use]
    pub fn velocity_at(self, velocity: f64, t: f64) -> f64 {
        velocity * exp(self.friction() * t)
    }

    /// Where a release at `start` with `velocity` comes to rest, ignoring bounds.
    #[must_use]
    pub fn target(self, start: f64, velocity: f64) -> f64 {
        self.value_at(start, velocity, self.duration_secs(velocity))
    }
}

impl Default for DecaySpec {
    fn default() -> Self {
        Self::exponential()
    }
}
