// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deciding whether a gesture belongs to the zoomable content or to an ancestor.

use kurbo::Vec2;

use crate::config::ScrollGesturePropagation;

/// A pan counts as horizontal when `|x| / |y|` exceeds this ratio.
const HORIZONTAL_RATIO: f64 = 3.0;
/// A pan counts as vertical when `|x| / |y|` is below this ratio.
const VERTICAL_RATIO: f64 = 0.33;

/// Per-gesture memo of whether the controller claims the pointer stream.
///
/// Reset to [`GestureDecision::Undecided`] by
/// [`ZoomController::start_gesture`](crate::ZoomController::start_gesture);
/// the first evaluated frame of a sequence fixes the decision until the next
/// reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureDecision {
    /// No frame of the current sequence has been evaluated yet.
    #[default]
    Undecided,
    /// The controller handles this sequence.
    Consuming,
    /// The sequence is left to an ancestor.
    NotConsuming,
}

impl GestureDecision {
    /// The memoized answer, if any.
    #[must_use]
    pub fn consumes(self) -> Option<bool> {
        match self {
            Self::Undecided => None,
            Self::Consuming => Some(true),
            Self::NotConsuming => Some(false),
        }
    }
}

impl From<bool> for GestureDecision {
    fn from(consume: bool) -> Self {
        if consume {
            Self::Consuming
        } else {
            Self::NotConsuming
        }
    }
}

/// One offset axis as seen by the edge heuristic.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AxisEdges {
    pub(crate) value: f64,
    pub(crate) lower: f64,
    pub(crate) upper: f64,
}

impl AxisEdges {
    /// Whether dragging by `delta` pushes further past an edge that is
    /// already fully exposed.
    ///
    /// Dragging toward negative while pinned at the lower bound means the
    /// far edge is already showing; likewise for positive and the upper bound.
    fn drags_past_edge(self, delta: f64) -> bool {
        (delta < 0.0 && self.value == self.lower) || (delta > 0.0 && self.value == self.upper)
    }
}

/// Evaluates one gesture frame.
///
/// Pinches (`zoom != 1`) are always consumed. A one-finger pan on unzoomed
/// content is never consumed. A one-finger pan on zoomed content is consumed
/// unless `propagation` hands it off at an exposed edge.
pub(crate) fn should_consume(
    pan: Vec2,
    zoom: f64,
    scale: f64,
    x: AxisEdges,
    y: AxisEdges,
    propagation: ScrollGesturePropagation,
) -> bool {
    if zoom != 1.0 {
        return true;
    }
    if scale == 1.0 {
        return false;
    }
    match propagation {
        ScrollGesturePropagation::NotZoomed => true,
        ScrollGesturePropagation::ContentEdge => {
            // NaN for a zero pan: neither horizontal nor vertical.
            let ratio = pan.x.abs() / pan.y.abs();
            if ratio > HORIZONTAL_RATIO {
                !x.drags_past_edge(pan.x)
            } else if ratio < VERTICAL_RATIO {
                !y.drags_past_edge(pan.y)
            } else {
                true
            }
        }
    }
}
