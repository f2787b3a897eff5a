// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::easing::Easing;
use crate::spec::{AnimationSpec, DecaySpec, Spring};

/// Identifies one request made on an [`AnimatedScalar`].
///
/// Tickets are only meaningful for the channel that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Progress of the request a [`Ticket`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketStatus {
    /// The request's motion is still in flight.
    Running,
    /// The request reached its end, hit a bound, or was superseded by a newer
    /// request on the same channel.
    Settled,
}

#[derive(Clone, Copy, Debug)]
enum Motion {
    Tween {
        from: f64,
        to: f64,
        duration: f64,
        easing: Easing,
    },
    Spring {
        target: f64,
        x0: f64,
        v0: f64,
        spring: Spring,
    },
    Decay {
        start: f64,
        velocity: f64,
        duration: f64,
        spec: DecaySpec,
    },
}

#[derive(Clone, Copy, Debug)]
struct InFlight {
    motion: Motion,
    elapsed: f64,
}

/// Where a motion is after some elapsed time.
struct Step {
    value: f64,
    velocity: f64,
    done: bool,
}

impl Motion {
    fn step(&self, t: f64, prev: f64, dt: f64) -> Step {
        match *self {
            Self::Tween {
                from,
                to,
                duration,
                easing,
            } => {
                let progress = if duration > 0.0 { t / duration } else { 1.0 };
                if progress >= 1.0 {
                    return Step {
                        value: to,
                        velocity: 0.0,
                        done: true,
                    };
                }
                let value = from + (to - from) * easing.apply(progress);
                let velocity = if dt > 0.0 { (value - prev) / dt } else { 0.0 };
                Step {
                    value,
                    velocity,
                    done: false,
                }
            }
            Self::Spring {
                target,
                x0,
                v0,
                spring,
            } => {
                let (x, v) = spring.evaluate(x0, v0, t);
                if spring.is_at_rest(x, v) || !x.is_finite() {
                    return Step {
                        value: target,
                        velocity: 0.0,
                        done: true,
                    };
                }
                Step {
                    value: target + x,
                    velocity: v,
                    done: false,
                }
            }
            Self::Decay {
                start,
                velocity,
                duration,
                spec,
            } => {
                let t = t.min(duration);
                Step {
                    value: spec.value_at(start, velocity, t),
                    velocity: spec.velocity_at(velocity, t),
                    done: t >= duration,
                }
            }
        }
    }

    fn target(&self) -> f64 {
        match *self {
            Self::Tween { to, .. } => to,
            Self::Spring { target, .. } => target,
            Self::Decay {
                start,
                velocity,
                duration,
                spec,
            } => spec.value_at(start, velocity, duration),
        }
    }
}

/// A single animatable value with mutable bounds.
///
/// The channel keeps at most one motion in flight. [`snap_to`], [`animate_to`]
/// and [`animate_decay`] each replace it wholesale, so a new request always
/// preempts the previous one.
///
/// [`snap_to`]: AnimatedScalar::snap_to
/// [`animate_to`]: AnimatedScalar::animate_to
/// [`animate_decay`]: AnimatedScalar::animate_decay
#[derive(Clone, Debug)]
pub struct AnimatedScalar {
    value: f64,
    velocity: f64,
    lower: f64,
    upper: f64,
    generation: u64,
    in_flight: Option<InFlight>,
}

impl AnimatedScalar {
    /// Creates an unbounded channel at rest at `value`.
    ///
    /// A non-finite `value` starts the channel at `0`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self::with_bounds(value, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Creates a channel at rest at `value`, clamped into `[lower, upper]`.
    ///
    /// The bounds are normalized so that `lower <= upper`; NaN bounds are
    /// treated as unbounded on that side.
    #[must_use]
    pub fn with_bounds(value: f64, lower: f64, upper: f64) -> Self {
        let mut channel = Self {
            value: if value.is_finite() { value } else { 0.0 },
            velocity: 0.0,
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
            generation: 0,
            in_flight: None,
        };
        channel.set_bounds(lower, upper);
        channel
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.upper
    }

    /// Returns where the in-flight motion is heading, clamped to the bounds,
    /// or the current value when at rest.
    #[must_use]
    pub fn target(&self) -> f64 {
        match &self.in_flight {
            Some(in_flight) => self.clamp(in_flight.motion.target()),
            None => self.value,
        }
    }

    /// Returns `true` while a motion is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Reports whether the request identified by `ticket` is still in flight.
    #[must_use]
    pub fn status(&self, ticket: Ticket) -> TicketStatus {
        if ticket.0 == self.generation && self.in_flight.is_some() {
            TicketStatus::Running
        } else {
            TicketStatus::Settled
        }
    }

    /// Replaces the bounds and clamps the current value into them.
    ///
    /// An in-flight motion keeps running; it is clamped on every step and
    /// ends if it reaches a bound.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) {
        let lower = if lower.is_nan() { f64::NEG_INFINITY } else { lower };
        let upper = if upper.is_nan() { f64::INFINITY } else { upper };
        let (lower, upper) = if lower <= upper {
            (lower, upper)
        } else {
            (upper, lower)
        };
        self.lower = lower;
        self.upper = upper;
        self.value = self.clamp(self.value);
    }

    /// Moves to `value` immediately, dropping any in-flight motion.
    ///
    /// The value is clamped into the bounds. A NaN value keeps the current one.
    pub fn snap_to(&mut self, value: f64) -> Ticket {
        let ticket = self.next_ticket();
        self.in_flight = None;
        self.velocity = 0.0;
        if !value.is_nan() {
            self.value = self.clamp(value);
        }
        ticket
    }

    /// Starts moving toward `target` under `spec`, replacing any in-flight motion.
    ///
    /// Springs inherit the current velocity. If the path leaves the bounds the
    /// value stops at the bound. A non-finite target settles in place.
    pub fn animate_to(&mut self, target: f64, spec: AnimationSpec) -> Ticket {
        if !target.is_finite() {
            return self.snap_to(self.value);
        }
        let motion = match spec {
            AnimationSpec::Tween { duration, easing } => {
                let duration = duration.as_secs_f64();
                if duration <= 0.0 {
                    return self.snap_to(target);
                }
                Motion::Tween {
                    from: self.value,
                    to: target,
                    duration,
                    easing,
                }
            }
            AnimationSpec::Spring(spring) => {
                if spring.stiffness <= 0.0 || !spring.stiffness.is_finite() {
                    return self.snap_to(target);
                }
                Motion::Spring {
                    target,
                    x0: self.value - target,
                    v0: self.velocity,
                    spring,
                }
            }
        };
        if self.value == target && self.velocity == 0.0 {
            return self.snap_to(target);
        }
        self.launch(motion)
    }

    /// Releases the channel with `velocity` (units per second) and lets it
    /// come to rest under `spec`, replacing any in-flight motion.
    ///
    /// The motion ends early if it reaches a bound. A non-finite velocity
    /// settles in place.
    pub fn animate_decay(&mut self, velocity: f64, spec: DecaySpec) -> Ticket {
        if !velocity.is_finite() {
            return self.snap_to(self.value);
        }
        let duration = spec.duration_secs(velocity);
        if !duration.is_finite() || duration <= 0.0 {
            return self.snap_to(self.value);
        }
        self.launch(Motion::Decay {
            start: self.value,
            velocity,
            duration,
            spec,
        })
    }

    /// Drops any in-flight motion, leaving the value where it is.
    pub fn stop(&mut self) {
        self.in_flight = None;
        self.velocity = 0.0;
    }

    /// Advances the in-flight motion by `dt`.
    ///
    /// Returns `true` if a motion is still running afterwards.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(mut in_flight) = self.in_flight else {
            return false;
        };
        let dt = dt.as_secs_f64();
        in_flight.elapsed += dt;
        let step = in_flight.motion.step(in_flight.elapsed, self.value, dt);

        let clamped = self.clamp(step.value);
        if clamped != step.value {
            // Hit a bound: pin to it and stop.
            self.value = clamped;
            self.velocity = 0.0;
            self.in_flight = None;
            return false;
        }

        self.value = step.value;
        if step.done {
            self.velocity = 0.0;
            self.in_flight = None;
        } else {
            self.velocity = step.velocity;
            self.in_flight = Some(in_flight);
        }
        self.in_flight.is_some()
    }

    fn launch(&mut self, motion: Motion) -> Ticket {
        let ticket = self.next_ticket();
        self.in_flight = Some(InFlight {
            motion,
            elapsed: 0.0,
        });
        ticket
    }

    fn next_ticket(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }
}

impl Default for AnimatedScalar {
    fn default() -> Self {
        Self::new(0.0)
    }
}
