// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Affine, Point, Size, Vec2};
use understory_motion::{AnimatedScalar, AnimationSpec, Ticket, TicketStatus};

use crate::config::{MIN_SCALE, ZoomConfig, ZoomConfigError};
use crate::consume::{AxisEdges, GestureDecision, should_consume};
use crate::geometry::{fit_content_size, offset_bound};
use crate::velocity::VelocityTracker;

/// Join handle over the channel requests one operation issued.
///
/// Scale, horizontal offset and vertical offset are independent channels.
/// An operation that touches several of them is complete once every
/// request it made has settled; see [`ZoomController::is_complete`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Completion {
    scale: Option<Ticket>,
    offset_x: Option<Ticket>,
    offset_y: Option<Ticket>,
}

impl Completion {
    /// Returns `true` if the operation issued no channel requests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scale.is_none() && self.offset_x.is_none() && self.offset_y.is_none()
    }
}

/// Result of an animated zoom toward a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomToOutcome {
    /// Clamped target offset minus the ideal one, per axis.
    ///
    /// Zero when the requested point could be placed exactly; otherwise how
    /// far the destination had to be pulled back to keep content in bounds.
    pub adjustment: Vec2,
    /// Join over the scale and offset animations.
    pub completion: Completion,
}

/// Bounds to apply once a zoom-out has finished animating.
#[derive(Clone, Copy, Debug)]
struct PendingBounds {
    bound: Vec2,
    completion: Completion,
}

/// Pinch-zoom / pan state for one piece of content inside a fixed viewport.
///
/// The host reports layout via [`set_viewport_size`] and [`set_content_size`],
/// feeds gesture sequences through [`start_gesture`], [`can_consume_gesture`],
/// [`apply_gesture`] and [`end_gesture`], drives animations with
/// [`advance`], and renders the content with [`transform`] (or with
/// [`scale`], [`offset_x`] and [`offset_y`] directly).
///
/// The content is laid out at its fitted size, centered in the viewport,
/// then scaled about its center and translated by the offset.
///
/// [`set_viewport_size`]: ZoomController::set_viewport_size
/// [`set_content_size`]: ZoomController::set_content_size
/// [`start_gesture`]: ZoomController::start_gesture
/// [`can_consume_gesture`]: ZoomController::can_consume_gesture
/// [`apply_gesture`]: ZoomController::apply_gesture
/// [`end_gesture`]: ZoomController::end_gesture
/// [`advance`]: ZoomController::advance
/// [`transform`]: ZoomController::transform
/// [`scale`]: ZoomController::scale
/// [`offset_x`]: ZoomController::offset_x
/// [`offset_y`]: ZoomController::offset_y
#[derive(Clone, Debug)]
pub struct ZoomController {
    config: ZoomConfig,
    scale: AnimatedScalar,
    offset_x: AnimatedScalar,
    offset_y: AnimatedScalar,
    viewport_size: Size,
    content_size: Size,
    fitted_content_size: Size,
    decision: GestureDecision,
    fling_enabled: bool,
    velocity: VelocityTracker,
    pending_bounds: Option<PendingBounds>,
}

impl ZoomController {
    /// Creates a controller at scale `1.0` with zero offsets.
    ///
    /// Fails if `config` does not [`validate`](ZoomConfig::validate).
    pub fn new(config: ZoomConfig) -> Result<Self, ZoomConfigError> {
        if let Err(err) = config.validate() {
            log::debug!("rejecting zoom config: {err}");
            return Err(err);
        }
        Ok(Self {
            scale: AnimatedScalar::with_bounds(1.0, MIN_SCALE, config.max_scale),
            offset_x: AnimatedScalar::with_bounds(0.0, 0.0, 0.0),
            offset_y: AnimatedScalar::with_bounds(0.0, 0.0, 0.0),
            viewport_size: Size::ZERO,
            content_size: config.content_size,
            fitted_content_size: Size::ZERO,
            decision: GestureDecision::Undecided,
            fling_enabled: true,
            velocity: VelocityTracker::default(),
            pending_bounds: None,
            config,
        })
    }

    /// Returns the configuration the controller was built with.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the largest reachable scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.config.max_scale
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    /// Returns the current horizontal offset.
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x.value()
    }

    /// Returns the current vertical offset.
    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y.value()
    }

    /// Returns both offsets.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x.value(), self.offset_y.value())
    }

    /// Returns the current symmetric offset bound per axis.
    ///
    /// Offsets range over `[-bound, bound]`.
    #[must_use]
    pub fn offset_bounds(&self) -> Vec2 {
        Vec2::new(self.offset_x.upper_bound(), self.offset_y.upper_bound())
    }

    /// Returns the viewport size last reported by the host.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Returns the content size last reported by the host.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the content size contain-fitted into the viewport at scale `1.0`.
    #[must_use]
    pub fn fitted_content_size(&self) -> Size {
        self.fitted_content_size
    }

    /// Returns the consumption decision for the current gesture sequence.
    #[must_use]
    pub fn gesture_decision(&self) -> GestureDecision {
        self.decision
    }

    /// Returns `false` once a pinch happened in the current gesture sequence.
    #[must_use]
    pub fn is_fling_enabled(&self) -> bool {
        self.fling_enabled
    }

    /// Returns `true` while any channel is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scale.is_running() || self.offset_x.is_running() || self.offset_y.is_running()
    }

    /// Returns `true` once every request in `completion` has settled.
    #[must_use]
    pub fn is_complete(&self, completion: &Completion) -> bool {
        let settled = |channel: &AnimatedScalar, ticket: Option<Ticket>| {
            ticket.is_none_or(|t| channel.status(t) == TicketStatus::Settled)
        };
        settled(&self.scale, completion.scale)
            && settled(&self.offset_x, completion.offset_x)
            && settled(&self.offset_y, completion.offset_y)
    }

    /// Sets the viewport size reported by layout.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport_size == size {
            return;
        }
        self.viewport_size = size;
        self.refit();
    }

    /// Sets the natural content size. [`Size::ZERO`] means "same as the viewport".
    pub fn set_content_size(&mut self, size: Size) {
        if self.content_size == size {
            return;
        }
        self.content_size = size;
        self.refit();
    }

    /// Begins a gesture sequence (first pointer down).
    ///
    /// Forgets the previous consumption decision and velocity samples.
    pub fn start_gesture(&mut self) {
        self.decision = GestureDecision::Undecided;
        self.velocity.reset();
    }

    /// Whether this controller claims the current gesture sequence.
    ///
    /// The first call after [`start_gesture`](Self::start_gesture) evaluates
    /// `pan` and `zoom`; later calls in the same sequence repeat that answer.
    pub fn can_consume_gesture(&mut self, pan: Vec2, zoom: f64) -> bool {
        if let Some(consume) = self.decision.consumes() {
            return consume;
        }
        let consume = should_consume(
            pan,
            zoom,
            self.scale.value(),
            edges(&self.offset_x),
            edges(&self.offset_y),
            self.config.scroll_propagation,
        );
        self.decision = consume.into();
        log::debug!(
            "gesture decision: consume={consume} (pan={pan:?}, zoom={zoom}, scale={})",
            self.scale.value()
        );
        consume
    }

    /// Applies one gesture frame.
    ///
    /// `pan` is the translation since the previous frame, `zoom` the
    /// multiplicative scale change, and `position` the focal point (pinch
    /// centroid or pointer) in viewport coordinates. The content point under
    /// `position` stays under it while the scale changes. All three channels
    /// are snapped, so the returned [`Completion`] is already complete.
    ///
    /// Call only while [`can_consume_gesture`](Self::can_consume_gesture)
    /// answers `true` for the sequence.
    pub fn apply_gesture(
        &mut self,
        pan: Vec2,
        zoom: f64,
        position: Point,
        time_millis: u64,
    ) -> Completion {
        let pan = if pan.is_finite() { pan } else { Vec2::ZERO };
        let zoom = if zoom.is_finite() && zoom > 0.0 {
            zoom
        } else {
            1.0
        };

        let fitted = self.fitted_content_size;
        let viewport = self.viewport_size;
        let scale = self.scale.value();
        let new_scale = (scale * zoom).clamp(MIN_SCALE, self.config.max_scale);
        let size = fitted * scale;
        let new_size = fitted * new_scale;
        let offset = self.offset();

        let delta = Vec2::new(
            anchor_shift(size.width, new_size.width, viewport.width, offset.x, position.x),
            anchor_shift(size.height, new_size.height, viewport.height, offset.y, position.y),
        );

        // Bounds first so the snaps below clamp against the post-zoom geometry.
        let bound = offset_bound(fitted, new_scale, viewport);
        self.pending_bounds = None;
        self.set_offset_bounds(bound);

        let target = offset + pan + delta;
        let completion = Completion {
            offset_x: Some(self.offset_x.snap_to(target.x)),
            offset_y: Some(self.offset_y.snap_to(target.y)),
            scale: Some(self.scale.snap_to(new_scale)),
        };

        self.velocity.add_position(time_millis, position);
        if zoom != 1.0 {
            self.fling_enabled = false;
        }
        log::trace!(
            "gesture frame @{time_millis}: scale {scale} -> {new_scale}, offset {offset:?} -> {:?}, bound {bound:?}",
            self.offset()
        );
        completion
    }

    /// Ends a gesture sequence (all pointers up).
    ///
    /// Unless the sequence contained a pinch, the offsets fling with the
    /// release velocity under the configured decay, stopping at their bounds.
    /// A scale below `1.0` animates back to `1.0`. Nothing blocks: drive the
    /// animations with [`advance`](Self::advance).
    pub fn end_gesture(&mut self) -> Completion {
        let mut completion = Completion::default();
        if self.fling_enabled {
            let cap = self.config.max_fling_velocity;
            let velocity = self.velocity.velocity();
            let velocity = Vec2::new(velocity.x.clamp(-cap, cap), velocity.y.clamp(-cap, cap));
            log::debug!("fling with velocity {velocity:?}");
            self.pending_bounds = None;
            completion.offset_x = Some(self.offset_x.animate_decay(velocity.x, self.config.decay));
            completion.offset_y = Some(self.offset_y.animate_decay(velocity.y, self.config.decay));
        }
        self.fling_enabled = true;

        if self.scale.value() < 1.0 {
            log::debug!("scale {} below 1.0, snapping back", self.scale.value());
            self.pending_bounds = None;
            completion.scale = Some(self.scale.animate_to(1.0, self.config.snap_back));
        }
        completion
    }

    /// Animates to `scale` with `point`, given in fitted-content coordinates,
    /// centered in the viewport.
    ///
    /// Fitted-content coordinates have their origin at the top-left of the
    /// content laid out at [`fitted_content_size`](Self::fitted_content_size),
    /// before any zoom. `spec` defaults to the configured zoom animation.
    pub fn zoom_to_content_point(
        &mut self,
        point: Point,
        scale: f64,
        spec: Option<AnimationSpec>,
    ) -> ZoomToOutcome {
        let scale = self.clamp_target_scale(scale);
        let center = self.fitted_content_size.to_vec2() * 0.5;
        let ideal = (center - point.to_vec2()) * scale;
        self.animate_transform(scale, ideal, spec)
    }

    /// Animates to `scale` with the content currently under `point`, given in
    /// viewport coordinates, centered in the viewport.
    ///
    /// `spec` defaults to the configured zoom animation.
    pub fn zoom_to_viewport_point(
        &mut self,
        point: Point,
        scale: f64,
        spec: Option<AnimationSpec>,
    ) -> ZoomToOutcome {
        let content = self.viewport_to_content(point);
        self.zoom_to_content_point(content, scale, spec)
    }

    /// Animates to `scale` keeping the content under `anchor` (viewport
    /// coordinates) where it is, as far as the bounds allow.
    ///
    /// This is the usual double-tap zoom. `spec` defaults to the configured
    /// zoom animation.
    pub fn change_scale(
        &mut self,
        scale: f64,
        anchor: Point,
        spec: Option<AnimationSpec>,
    ) -> ZoomToOutcome {
        let scale = self.clamp_target_scale(scale);
        let content = self.viewport_to_content(anchor);
        let center = self.fitted_content_size.to_vec2() * 0.5;
        let ideal =
            anchor.to_vec2() - self.viewport_size.to_vec2() * 0.5 - (content.to_vec2() - center) * scale;
        self.animate_transform(scale, ideal, spec)
    }

    /// Returns to scale `1.0` with zero offsets, immediately.
    pub fn reset(&mut self) -> Completion {
        self.pending_bounds = None;
        let scale = self.scale.snap_to(1.0);
        self.set_offset_bounds(Vec2::ZERO);
        Completion {
            scale: Some(scale),
            offset_x: Some(self.offset_x.snap_to(0.0)),
            offset_y: Some(self.offset_y.snap_to(0.0)),
        }
    }

    /// Steps all running animations by `dt`.
    ///
    /// Returns `true` while anything is still animating, so the host knows to
    /// schedule another frame.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let scale = self.scale.advance(dt);
        let x = self.offset_x.advance(dt);
        let y = self.offset_y.advance(dt);
        if let Some(pending) = self.pending_bounds {
            if self.is_complete(&pending.completion) {
                self.pending_bounds = None;
                self.set_offset_bounds(pending.bound);
            }
        }
        scale || x || y
    }

    /// Maps fitted-content coordinates into viewport coordinates.
    #[must_use]
    pub fn transform(&self) -> Affine {
        let center = self.viewport_size.to_vec2() * 0.5 + self.offset();
        Affine::translate(center)
            * Affine::scale(self.scale.value())
            * Affine::translate(-self.fitted_content_size.to_vec2() * 0.5)
    }

    /// Converts a fitted-content point into viewport coordinates.
    #[must_use]
    pub fn content_to_viewport(&self, point: Point) -> Point {
        let center = self.fitted_content_size.to_vec2() * 0.5;
        let v = self.viewport_size.to_vec2() * 0.5
            + self.offset()
            + (point.to_vec2() - center) * self.scale.value();
        v.to_point()
    }

    /// Converts a viewport point into fitted-content coordinates.
    #[must_use]
    pub fn viewport_to_content(&self, point: Point) -> Point {
        let center = self.fitted_content_size.to_vec2() * 0.5;
        let rel = point.to_vec2() - self.viewport_size.to_vec2() * 0.5 - self.offset();
        (rel / self.scale.value() + center).to_point()
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        ZoomDebugInfo {
            viewport_size: self.viewport_size,
            content_size: self.content_size,
            fitted_content_size: self.fitted_content_size,
            scale: self.scale.value(),
            offset: self.offset(),
            offset_bounds: self.offset_bounds(),
            max_scale: self.config.max_scale,
            decision: self.decision,
            fling_enabled: self.fling_enabled,
            animating: self.is_animating(),
        }
    }

    fn refit(&mut self) {
        self.fitted_content_size = fit_content_size(self.viewport_size, self.content_size);
        // Keep room for an in-flight zoom-in; a zoom-out keeps its wider
        // bounds until it completes.
        let scale = self.scale.value().max(self.scale.target());
        let bound = offset_bound(self.fitted_content_size, scale, self.viewport_size);
        if let Some(pending) = &mut self.pending_bounds {
            pending.bound = offset_bound(
                self.fitted_content_size,
                self.scale.target(),
                self.viewport_size,
            );
        }
        self.set_offset_bounds(bound);
    }

    fn clamp_target_scale(&self, scale: f64) -> f64 {
        if scale.is_finite() {
            scale.clamp(MIN_SCALE, self.config.max_scale)
        } else {
            self.scale.value()
        }
    }

    fn set_offset_bounds(&mut self, bound: Vec2) {
        self.offset_x.set_bounds(-bound.x, bound.x);
        self.offset_y.set_bounds(-bound.y, bound.y);
    }

    /// Animates all three channels toward `scale` and the clamped `ideal` offset.
    fn animate_transform(
        &mut self,
        scale: f64,
        ideal: Vec2,
        spec: Option<AnimationSpec>,
    ) -> ZoomToOutcome {
        let spec = spec.unwrap_or(self.config.zoom_animation);
        let bound = offset_bound(self.fitted_content_size, scale, self.viewport_size);
        let target = Vec2::new(ideal.x.clamp(-bound.x, bound.x), ideal.y.clamp(-bound.y, bound.y));
        let zooming_in = scale >= self.scale.value();

        self.pending_bounds = None;
        if zooming_in {
            self.set_offset_bounds(bound);
        } else {
            // Tightening now would clip the content while it shrinks.
            let current = self.offset_bounds();
            self.set_offset_bounds(Vec2::new(bound.x.max(current.x), bound.y.max(current.y)));
        }

        let completion = Completion {
            scale: Some(self.scale.animate_to(scale, spec)),
            offset_x: Some(self.offset_x.animate_to(target.x, spec)),
            offset_y: Some(self.offset_y.animate_to(target.y, spec)),
        };
        if !zooming_in {
            self.pending_bounds = Some(PendingBounds { bound, completion });
            if self.is_complete(&completion) {
                self.pending_bounds = None;
                self.set_offset_bounds(bound);
            }
        }
        log::debug!("zoom to scale {scale}, offset {target:?} (ideal {ideal:?})");
        ZoomToOutcome {
            adjustment: target - ideal,
            completion,
        }
    }
}

/// Offset change along one axis that keeps the content point under `focal`
/// in place when the scaled content grows from `size` to `new_size`.
fn anchor_shift(size: f64, new_size: f64, viewport: f64, offset: f64, focal: f64) -> f64 {
    if size <= 0.0 || !focal.is_finite() {
        return 0.0;
    }
    let growth = new_size - size;
    // Focal point relative to the scaled content's top-left edge.
    let in_content = focal - offset + (size - viewport) * 0.5;
    growth * 0.5 - growth * in_content / size
}

fn edges(channel: &AnimatedScalar) -> AxisEdges {
    AxisEdges {
        value: channel.value(),
        lower: channel.lower_bound(),
        upper: channel.upper_bound(),
    }
}

/// Debug snapshot of a [`ZoomController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomDebugInfo {
    /// Viewport size reported by the host.
    pub viewport_size: Size,
    /// Content size reported by the host.
    pub content_size: Size,
    /// Content size contain-fitted into the viewport.
    pub fitted_content_size: Size,
    /// Current scale.
    pub scale: f64,
    /// Current offsets.
    pub offset: Vec2,
    /// Current symmetric offset bounds.
    pub offset_bounds: Vec2,
    /// Largest reachable scale.
    pub max_scale: f64,
    /// Consumption decision of the current gesture sequence.
    pub decision: GestureDecision,
    /// Whether releasing now would fling.
    pub fling_enabled: bool,
    /// Whether any channel is animating.
    pub animating: bool,
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Point, Size, Vec2};

    use super::{ZoomController, anchor_shift};
    use crate::config::ZoomConfig;

    fn controller(viewport: Size) -> ZoomController {
        let mut zc = ZoomController::new(ZoomConfig::default()).unwrap();
        zc.set_viewport_size(viewport);
        zc
    }

    fn settle(zc: &mut ZoomController) {
        let mut frames = 0;
        while zc.advance(Duration::from_millis(16)) {
            frames += 1;
            assert!(frames < 2_000, "animations never settled");
        }
    }

    #[test]
    fn anchor_shift_keeps_focal_point() {
        // 300 px content in a 300 px viewport, doubling about x = 250.
        let dx = anchor_shift(300.0, 600.0, 300.0, 0.0, 250.0);
        assert!((dx + 100.0).abs() < 1e-9);
        // Zooming about the center needs no shift.
        assert_eq!(anchor_shift(300.0, 600.0, 300.0, 0.0, 150.0), 0.0);
        // Degenerate content never shifts.
        assert_eq!(anchor_shift(0.0, 0.0, 300.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn focal_point_stays_under_finger() {
        let mut zc = controller(Size::new(300.0, 300.0));
        let focal = Point::new(250.0, 40.0);
        let before = zc.viewport_to_content(focal);
        zc.start_gesture();
        assert!(zc.can_consume_gesture(Vec2::ZERO, 2.0));
        zc.apply_gesture(Vec2::ZERO, 2.0, focal, 0);
        let after = zc.content_to_viewport(before);
        assert!((after.x - focal.x).abs() < 1e-9, "{after:?}");
        assert!((after.y - focal.y).abs() < 1e-9, "{after:?}");
    }

    #[test]
    fn transform_agrees_with_point_conversion() {
        let mut zc = controller(Size::new(400.0, 200.0));
        zc.set_content_size(Size::new(100.0, 100.0));
        zc.start_gesture();
        zc.apply_gesture(Vec2::new(5.0, -3.0), 3.0, Point::new(120.0, 80.0), 0);
        let p = Point::new(30.0, 70.0);
        let via_affine = zc.transform() * p;
        let via_fn = zc.content_to_viewport(p);
        assert!((via_affine - via_fn).hypot() < 1e-9);
        let back = zc.viewport_to_content(via_fn);
        assert!((back - p).hypot() < 1e-9);
    }

    #[test]
    fn non_finite_frame_inputs_are_neutralized() {
        let mut zc = controller(Size::new(100.0, 100.0));
        zc.start_gesture();
        zc.apply_gesture(Vec2::new(f64::NAN, 1.0), f64::INFINITY, Point::new(50.0, 50.0), 0);
        assert_eq!(zc.scale(), 1.0);
        assert_eq!(zc.offset(), Vec2::ZERO);
        zc.apply_gesture(Vec2::ZERO, -2.0, Point::new(f64::NAN, 0.0), 1);
        assert_eq!(zc.scale(), 1.0);
    }

    #[test]
    fn layout_change_rebounds_offsets() {
        let mut zc = controller(Size::new(100.0, 100.0));
        zc.set_content_size(Size::new(100.0, 100.0));
        zc.start_gesture();
        zc.apply_gesture(Vec2::ZERO, 3.0, Point::new(50.0, 50.0), 0);
        zc.apply_gesture(Vec2::new(500.0, 0.0), 1.0, Point::new(50.0, 50.0), 16);
        assert_eq!(zc.offset_x(), 100.0);

        // A wider viewport leaves less overflow at the same scale.
        zc.set_viewport_size(Size::new(200.0, 100.0));
        assert_eq!(zc.fitted_content_size(), Size::new(100.0, 100.0));
        assert_eq!(zc.offset_bounds(), Vec2::new(50.0, 100.0));
        assert_eq!(zc.offset_x(), 50.0);
    }

    #[test]
    fn zoom_out_with_pending_bounds_completes() {
        let mut zc = controller(Size::new(100.0, 100.0));
        zc.zoom_to_content_point(Point::new(0.0, 0.0), 4.0, None);
        settle(&mut zc);
        assert_eq!(zc.offset_bounds(), Vec2::new(150.0, 150.0));

        let out = zc.zoom_to_content_point(Point::new(50.0, 50.0), 2.0, None);
        assert_eq!(zc.offset_bounds(), Vec2::new(150.0, 150.0), "still wide mid-animation");
        settle(&mut zc);
        assert!(zc.is_complete(&out.completion));
        assert_eq!(zc.offset_bounds(), Vec2::new(50.0, 50.0));
        assert_eq!(zc.scale(), 2.0);
        assert_eq!(zc.offset(), Vec2::ZERO);
    }

    #[test]
    fn gesture_preempts_pending_tightening() {
        let mut zc = controller(Size::new(100.0, 100.0));
        zc.zoom_to_content_point(Point::new(0.0, 0.0), 4.0, None);
        settle(&mut zc);
        zc.zoom_to_content_point(Point::new(50.0, 50.0), 2.0, None);
        zc.advance(Duration::from_millis(16));

        zc.start_gesture();
        zc.apply_gesture(Vec2::ZERO, 1.0, Point::new(50.0, 50.0), 0);
        let bounds = zc.offset_bounds();
        settle(&mut zc);
        assert_eq!(zc.offset_bounds(), bounds, "stale zoom-out bounds must not be applied");
    }
}
