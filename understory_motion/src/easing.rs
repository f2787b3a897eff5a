// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Maps linear progress in `[0, 1]` to eased progress for tweens.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow end.
    EaseInOutCubic,
    /// Material "standard" curve, cubic Bézier `(0.4, 0.0, 0.2, 1.0)`.
    ///
    /// Accelerates quickly and spends most of its time settling, which reads
    /// well for zoom transitions.
    #[default]
    FastOutSlowIn,
    /// CSS-style cubic Bézier with endpoints fixed at `(0, 0)` and `(1, 1)`.
    ///
    /// `x1` and `x2` are expected to lie in `[0, 1]` so the curve is a
    /// function of time.
    CubicBezier {
        /// X of the first control point.
        x1: f64,
        /// Y of the first control point.
        y1: f64,
        /// X of the second control point.
        x2: f64,
        /// Y of the second control point.
        y2: f64,
    },
}

impl Easing {
    /// Returns eased progress for linear progress `t`.
    ///
    /// `t` is clamped to `[0, 1]`; NaN is treated as `0`. Every curve maps
    /// `0 → 0` and `1 → 1` exactly.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// One coordinate of a cubic Bézier from 0 to 1 with inner control values `p1`, `p2`.
fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let r = 1.0 - s;
    3.0 * r * r * s * p1 + 3.0 * r * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let r = 1.0 - s;
    3.0 * r * r * p1 + 6.0 * r * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    const EPSILON: f64 = 1e-7;
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // Newton first; it converges in a handful of steps for well-formed curves.
    let mut s = t;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - t;
        if err.abs() < EPSILON {
            return bezier(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
        if !(0.0..=1.0).contains(&s) {
            break;
        }
    }

    // Bisection on the monotonic x(s).
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    s = t;
    for _ in 0..48 {
        let x = bezier(x1, x2, s);
        if (x - t).abs() < EPSILON {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier(y1, y2, s)
}
