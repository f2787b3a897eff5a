// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the headless zoom demos.
//!
//! The demos script pointer input by hand and print the resulting zoom state,
//! so they run anywhere without a window or renderer.

use std::time::Duration;

use kurbo::{Point, Vec2};
use understory_zoom::ZoomController;

/// Frame interval the demos advance animations by.
pub const FRAME: Duration = Duration::from_millis(16);

/// Installs `env_logger`, defaulting to `debug` for the zoom crate.
///
/// Override with `RUST_LOG`, e.g. `RUST_LOG=understory_zoom=trace`.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("understory_zoom=debug"),
    )
    .try_init();
}

/// Prints one line of controller state.
pub fn print_state(label: &str, zoom: &ZoomController) {
    let offset = zoom.offset();
    let bounds = zoom.offset_bounds();
    println!(
        "{label:<24} scale={:.3} offset=({:.1}, {:.1}) bounds=(±{:.1}, ±{:.1})",
        zoom.scale(),
        offset.x,
        offset.y,
        bounds.x,
        bounds.y,
    );
}

/// Advances `zoom` until its animations settle; returns the number of frames.
pub fn run_until_settled(zoom: &mut ZoomController) -> usize {
    let mut frames = 0;
    while zoom.advance(FRAME) {
        frames += 1;
    }
    frames
}

/// Plays a one-finger drag from `start` by `step` per frame, one frame every
/// 16 ms starting at `t0`. Returns whether the controller claimed it.
pub fn drag(zoom: &mut ZoomController, start: Point, step: Vec2, frames: u32, t0: u64) -> bool {
    zoom.start_gesture();
    if !zoom.can_consume_gesture(step, 1.0) {
        log::info!("drag handed to the parent scroller");
        return false;
    }
    for i in 0..frames {
        let position = start + step * f64::from(i);
        zoom.apply_gesture(step, 1.0, position, t0 + u64::from(i) * 16);
    }
    zoom.end_gesture();
    true
}
