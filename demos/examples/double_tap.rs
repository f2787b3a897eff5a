// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap and programmatic zoom.
//!
//! Toggle between fit and 2.5x about tapped points with `change_scale`, then
//! center a content point with `zoom_to_content_point` and show how much the
//! bounds had to pull the destination back.
//!
//! Run:
//! - `cargo run -p understory_demos --example double_tap`

use kurbo::{Point, Size};
use understory_demos::{FRAME, init_logging, print_state, run_until_settled};
use understory_zoom::{AnimationSpec, Spring, ZoomConfig, ZoomController};

const ZOOMED: f64 = 2.5;

fn double_tap(zoom: &mut ZoomController, at: Point) {
    let target = if zoom.scale() > 1.0 { 1.0 } else { ZOOMED };
    let outcome = zoom.change_scale(target, at, None);
    // Sample the animation halfway through a few frames.
    for _ in 0..10 {
        zoom.advance(FRAME);
    }
    print_state("  mid-animation", zoom);
    run_until_settled(zoom);
    assert!(zoom.is_complete(&outcome.completion));
    println!(
        "  tap at {at:?} -> scale {target}, adjustment {:?}",
        outcome.adjustment
    );
}

fn main() {
    init_logging();

    let mut zoom = ZoomController::new(ZoomConfig::default()).expect("valid config");
    zoom.set_viewport_size(Size::new(800.0, 600.0));
    zoom.set_content_size(Size::new(1600.0, 1200.0));

    for tap in [
        Point::new(200.0, 150.0),
        Point::new(400.0, 300.0),
        Point::new(790.0, 10.0),
        Point::new(790.0, 10.0),
    ] {
        double_tap(&mut zoom, tap);
        print_state("settled", &zoom);
    }

    // Center the top-left corner of the content with a bouncy spring.
    let outcome = zoom.zoom_to_content_point(
        Point::ZERO,
        3.0,
        Some(AnimationSpec::Spring(Spring::BOUNCY)),
    );
    run_until_settled(&mut zoom);
    print_state("corner", &zoom);
    println!("corner adjustment {:?}", outcome.adjustment);

    let content = zoom.viewport_to_content(Point::new(400.0, 300.0));
    println!("viewport center shows content {content:?}");
    zoom.reset();
    print_state("reset", &zoom);
}
