// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pinch / pan / fling session.
//!
//! Drive a `ZoomController` showing a tall photo in a phone-sized viewport:
//! pinch in, pan, fling into the edge, then pinch out past `1.0` and let it
//! spring back.
//!
//! Run:
//! - `cargo run -p understory_demos --example pinch_session`
//! - `RUST_LOG=understory_zoom=trace cargo run -p understory_demos --example pinch_session`

use kurbo::{Point, Size, Vec2};
use understory_demos::{drag, init_logging, print_state, run_until_settled};
use understory_zoom::{ZoomConfig, ZoomController};

fn main() {
    init_logging();

    let mut zoom = ZoomController::new(ZoomConfig::new(4.0)).expect("valid config");
    zoom.set_viewport_size(Size::new(360.0, 640.0));
    zoom.set_content_size(Size::new(3000.0, 4000.0));
    println!("fitted content: {:?}", zoom.fitted_content_size());
    print_state("initial", &zoom);

    // Unzoomed drags belong to the parent (e.g. a pager).
    let claimed = drag(&mut zoom, Point::new(300.0, 320.0), Vec2::new(-12.0, 0.0), 5, 0);
    println!("unzoomed drag claimed: {claimed}");

    // Two-finger pinch about a point near the top-left.
    let focal = Point::new(90.0, 200.0);
    zoom.start_gesture();
    let mut t = 1_000;
    for _ in 0..10 {
        if zoom.can_consume_gesture(Vec2::ZERO, 1.1) {
            zoom.apply_gesture(Vec2::ZERO, 1.1, focal, t);
        }
        t += 16;
    }
    zoom.end_gesture();
    print_state("after pinch", &zoom);

    // A quick flick to the left: flings until the right edge shows.
    let claimed = drag(&mut zoom, Point::new(300.0, 320.0), Vec2::new(-25.0, 4.0), 6, 2_000);
    println!("zoomed drag claimed: {claimed}");
    print_state("released", &zoom);
    let frames = run_until_settled(&mut zoom);
    print_state("fling settled", &zoom);
    println!("fling ran for {frames} frames");

    // Pushing further right-to-left at the edge goes to the parent again.
    let claimed = drag(&mut zoom, Point::new(300.0, 320.0), Vec2::new(-12.0, 0.0), 3, 3_000);
    println!("drag at the edge claimed: {claimed}");

    // Pinch out past 1.0; releasing springs back.
    zoom.start_gesture();
    for i in 0..12_u64 {
        zoom.apply_gesture(Vec2::ZERO, 0.75, Point::new(180.0, 320.0), 4_000 + i * 16);
    }
    print_state("overshoot", &zoom);
    let completion = zoom.end_gesture();
    run_until_settled(&mut zoom);
    assert!(zoom.is_complete(&completion));
    print_state("sprung back", &zoom);
}
