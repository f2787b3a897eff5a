// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release velocity estimation from timestamped pointer positions.
//!
//! ## Usage
//!
//! 1) Feed every pointer position with its timestamp via [`VelocityTracker::add_position`].
//! 2) On release, call [`VelocityTracker::velocity`] for units per second.
//! 3) Call [`VelocityTracker::reset`] when a new gesture sequence starts.
//!
//! ## Estimator
//!
//! Only samples from the last 100 ms before the newest one are used, and the
//! walk back through history stops at any gap longer than 40 ms (the pointer
//! is assumed to have paused there). Each axis is fit against time by least
//! squares: quadratic when at least three samples span a usable time range,
//! linear otherwise. The slope of the fit at the newest sample is the
//! velocity.
//!
//! ```
//! use kurbo::Point;
//! use understory_zoom::VelocityTracker;
//!
//! let mut tracker = VelocityTracker::default();
//! for i in 0..5_u32 {
//!     // 2 px per ms to the right.
//!     tracker.add_position(u64::from(i) * 10, Point::new(f64::from(i) * 20.0, 0.0));
//! }
//! let v = tracker.velocity();
//! assert!((v.x - 2000.0).abs() < 1e-6);
//! assert!(v.y.abs() < 1e-6);
//! ```

use kurbo::{Point, Vec2};

const HISTORY_SIZE: usize = 20;
const HORIZON_MILLIS: u64 = 100;
const ASSUME_STOPPED_MILLIS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time: u64,
    position: Point,
}

/// Fixed-capacity history of pointer samples.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl VelocityTracker {
    /// Records the pointer at `position` at `time_millis`.
    ///
    /// A timestamp older than the newest sample starts a fresh history.
    /// Non-finite positions are ignored.
    pub fn add_position(&mut self, time_millis: u64, position: Point) {
        if !position.is_finite() {
            return;
        }
        if let Some(last) = self.samples[self.newest] {
            if time_millis < last.time {
                self.reset();
            }
        }
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample {
            time: time_millis,
            position,
        });
    }

    /// Forgets all samples.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }

    /// Estimated velocity at the newest sample, in units per second.
    ///
    /// Returns [`Vec2::ZERO`] with fewer than two usable samples.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        let Some(newest) = self.samples[self.newest] else {
            return Vec2::ZERO;
        };

        let mut t = [0.0_f64; HISTORY_SIZE];
        let mut x = [0.0_f64; HISTORY_SIZE];
        let mut y = [0.0_f64; HISTORY_SIZE];
        let mut count = 0;
        let mut previous_time = newest.time;

        for back in 0..HISTORY_SIZE {
            let index = (self.newest + HISTORY_SIZE - back) % HISTORY_SIZE;
            let Some(sample) = self.samples[index] else {
                break;
            };
            let age = newest.time - sample.time;
            let gap = previous_time - sample.time;
            if age > HORIZON_MILLIS || gap > ASSUME_STOPPED_MILLIS {
                break;
            }
            // Relative times keep the fit well conditioned; the newest sample sits at 0.
            t[count] = -(age as f64);
            x[count] = sample.position.x;
            y[count] = sample.position.y;
            count += 1;
            previous_time = sample.time;
        }

        if count < 2 {
            return Vec2::ZERO;
        }
        let t = &t[..count];
        // Slopes are per millisecond.
        Vec2::new(slope_at_zero(t, &x[..count]), slope_at_zero(t, &y[..count])) * 1000.0
    }
}

/// Least-squares derivative at `t = 0` of `values` sampled at `times`.
fn slope_at_zero(times: &[f64], values: &[f64]) -> f64 {
    if times.len() >= 3 {
        if let Some(slope) = quadratic_slope(times, values) {
            return slope;
        }
    }
    linear_slope(times, values)
}

fn linear_slope(times: &[f64], values: &[f64]) -> f64 {
    let mut s1 = 0.0;
    let mut s2 = 0.0;
    let mut sv = 0.0;
    let mut stv = 0.0;
    for (&t, &v) in times.iter().zip(values) {
        s1 += t;
        s2 += t * t;
        sv += v;
        stv += t * v;
    }
    let n = times.len() as f64;
    let denom = n * s2 - s1 * s1;
    if denom.abs() < 1e-9 {
        return 0.0;
    }
    (n * stv - s1 * sv) / denom
}

/// Fits `a + b·t + c·t²` and returns `b`, or `None` when the system is
/// too close to singular (for example, repeated timestamps).
fn quadratic_slope(times: &[f64], values: &[f64]) -> Option<f64> {
    let mut s = [0.0_f64; 5];
    let mut r = [0.0_f64; 3];
    for (&t, &v) in times.iter().zip(values) {
        let t2 = t * t;
        s[0] += 1.0;
        s[1] += t;
        s[2] += t2;
        s[3] += t2 * t;
        s[4] += t2 * t2;
        r[0] += v;
        r[1] += v * t;
        r[2] += v * t2;
    }
    let m = [[s[0], s[1], s[2]], [s[1], s[2], s[3]], [s[2], s[3], s[4]]];
    let det = det3(m);
    let scale = (s[0] * s[2] * s[4]).abs().max(1.0);
    if det.abs() <= scale * 1e-9 {
        return None;
    }
    // Cramer's rule for the middle coefficient.
    let mb = [[m[0][0], r[0], m[0][2]], [m[1][0], r[1], m[1][2]], [m[2][0], r[2], m[2][2]]];
    Some(det3(mb) / det)
}

fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::VelocityTracker;

    fn feed(tracker: &mut VelocityTracker, samples: &[(u64, f64, f64)]) {
        for &(t, x, y) in samples {
            tracker.add_position(t, Point::new(x, y));
        }
    }

    #[test]
    fn empty_or_single_sample_has_no_velocity() {
        let mut tracker = VelocityTracker::default();
        assert_eq!(tracker.velocity(), Vec2::ZERO);
        tracker.add_position(5, Point::new(1.0, 1.0));
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }

    #[test]
    fn two_samples_use_linear_fit() {
        let mut tracker = VelocityTracker::default();
        feed(&mut tracker, &[(0, 0.0, 0.0), (10, -5.0, 10.0)]);
        let v = tracker.velocity();
        assert!((v.x + 500.0).abs() < 1e-6, "{v:?}");
        assert!((v.y - 1000.0).abs() < 1e-6, "{v:?}");
    }

    #[test]
    fn quadratic_fit_reports_velocity_at_release() {
        // x = t² (t in ms) -> dx/dt = 2t; at t = 40 ms that's 80 px/ms.
        let mut tracker = VelocityTracker::default();
        for t in [0_u32, 10, 20, 30, 40] {
            let tf = f64::from(t);
            tracker.add_position(u64::from(t), Point::new(tf * tf, 0.0));
        }
        let v = tracker.velocity();
        assert!((v.x - 80_000.0).abs() < 1e-3, "{v:?}");
    }

    #[test]
    fn samples_outside_horizon_are_ignored() {
        let mut tracker = VelocityTracker::default();
        // Fast early motion, then a slow steady drag over the last 100 ms.
        feed(&mut tracker, &[(0, 0.0, 0.0), (5, 500.0, 0.0)]);
        for i in 0..=10_u32 {
            let t = 10 + u64::from(i) * 10;
            tracker.add_position(t, Point::new(500.0 + f64::from(i) * 1.0, 0.0));
        }
        let v = tracker.velocity();
        assert!((v.x - 100.0).abs() < 1e-6, "{v:?}");
    }

    #[test]
    fn pause_before_release_stops_the_fling() {
        let mut tracker = VelocityTracker::default();
        feed(
            &mut tracker,
            &[(0, 0.0, 0.0), (10, 10.0, 0.0), (20, 20.0, 0.0), (90, 20.0, 0.0)],
        );
        // Gap of 70 ms before the last sample: only it remains.
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }

    #[test]
    fn history_wraps_around() {
        let mut tracker = VelocityTracker::default();
        for i in 0..50_u32 {
            tracker.add_position(u64::from(i) * 4, Point::new(f64::from(i) * 2.0, 0.0));
        }
        let v = tracker.velocity();
        assert!((v.x - 500.0).abs() < 1e-6, "{v:?}");
    }

    #[test]
    fn reset_and_time_reversal_clear_history() {
        let mut tracker = VelocityTracker::default();
        feed(&mut tracker, &[(100, 0.0, 0.0), (110, 10.0, 0.0)]);
        tracker.reset();
        assert_eq!(tracker.velocity(), Vec2::ZERO);

        feed(&mut tracker, &[(100, 0.0, 0.0), (110, 10.0, 0.0), (5, 0.0, 0.0)]);
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }

    #[test]
    fn repeated_timestamps_do_not_blow_up() {
        let mut tracker = VelocityTracker::default();
        feed(&mut tracker, &[(10, 0.0, 0.0), (10, 5.0, 0.0), (10, 9.0, 0.0)]);
        let v = tracker.velocity();
        assert!(v.is_finite());
        assert_eq!(v, Vec2::ZERO);
    }
}
