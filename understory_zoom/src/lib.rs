// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: pinch-zoom and pan state for a single piece of content.
//!
//! This crate provides [`ZoomController`], a headless model of content shown
//! inside a fixed viewport that the user can pinch to zoom and drag to pan.
//! It focuses on:
//! - Contain-fitting the content into the viewport ([`fit_content_size`]).
//! - Keeping the scale within `[MIN_SCALE, max_scale]` and the offsets within
//!   symmetric bounds derived from the zoomed size ([`offset_bound`]).
//! - Deciding, once per gesture sequence, whether a pan belongs to the content
//!   or should be handed to an ancestor scroll container.
//! - Applying gesture frames around a focal point, flinging on release, and
//!   springing an overshooting pinch back to `1.0`.
//! - Animated programmatic zooms (double-tap, zoom to a point).
//!
//! It does **not** recognize gestures, own a clock, or render anything.
//! Callers are expected to:
//! - Turn raw pointer input into per-frame pan / zoom / focal-point deltas.
//! - Report layout through [`ZoomController::set_viewport_size`] and
//!   [`ZoomController::set_content_size`].
//! - Call [`ZoomController::advance`] every frame while it returns `true`.
//! - Draw the content with [`ZoomController::transform`].
//!
//! Animations are driven by [`understory_motion`] channels. Operations that
//! start animations return a [`Completion`]; poll it with
//! [`ZoomController::is_complete`]. A newer operation on the same channel
//! supersedes an older one, which then counts as complete.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoom::{ZoomConfig, ZoomController};
//!
//! let mut zoom = ZoomController::new(ZoomConfig::default()).unwrap();
//! zoom.set_viewport_size(Size::new(300.0, 300.0));
//! zoom.set_content_size(Size::new(300.0, 600.0));
//! assert_eq!(zoom.fitted_content_size(), Size::new(150.0, 300.0));
//!
//! // A two-finger pinch about the viewport center.
//! zoom.start_gesture();
//! let center = Point::new(150.0, 150.0);
//! if zoom.can_consume_gesture(Vec2::ZERO, 2.0) {
//!     zoom.apply_gesture(Vec2::ZERO, 2.0, center, 0);
//! }
//! zoom.end_gesture();
//! assert_eq!(zoom.scale(), 2.0);
//! assert_eq!(zoom.offset_bounds(), Vec2::new(0.0, 150.0));
//!
//! // Double-tap back out.
//! let out = zoom.change_scale(1.0, center, None);
//! while zoom.advance(Duration::from_millis(16)) {}
//! assert!(zoom.is_complete(&out.completion));
//! assert_eq!(zoom.scale(), 1.0);
//! ```
//!
//! ## Logging
//!
//! Gesture decisions, flings and programmatic zooms are reported through the
//! [`log`] facade at `debug` level, and every gesture frame at `trace` level.
//! The crate installs no logger.
//!
//! This crate is `no_std`; enable either the `std` (default) or the `libm`
//! feature.

#![no_std]

mod config;
mod consume;
mod controller;
mod geometry;
pub mod velocity;

pub use config::{MIN_SCALE, ScrollGesturePropagation, ZoomConfig, ZoomConfigError};
pub use consume::GestureDecision;
pub use controller::{Completion, ZoomController, ZoomDebugInfo, ZoomToOutcome};
pub use geometry::{fit_content_size, offset_bound};
pub use velocity::VelocityTracker;

pub use understory_motion::{AnimationSpec, DecaySpec, Easing, Spring};
