// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider basics.
//!
//! Drive a single-value slider and a controlled range slider with track
//! presses and a native gesture drag using `understory_slider`.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_basics`

use kurbo::Point;
use understory_demos::{init_tracing, render_track};
use understory_slider::adapters::{GestureAdapter, GestureEvent, GesturePhase};
use understory_slider::{Handle, HapticError, HapticFeedback, Mode, SliderConfig, SliderEngine};

fn main() {
    init_tracing();

    // Track starts at window X 40 and is 200px wide.
    let origin = 40.0_f64;
    let config = SliderConfig::new(0.0, 100.0).with_step(5.0);
    let mut volume = SliderEngine::uncontrolled(config, Mode::Single).with_haptics(
        |feedback: HapticFeedback| -> Result<(), HapticError> {
            println!("  haptic: {feedback:?}");
            Ok(())
        },
    );
    println!("before layout: {}", render_track(&volume, 21));
    volume.on_layout(200.0);

    println!("press at window X 150");
    if let Some(change) = volume.track_press(150.0, origin) {
        println!("  value change: {change:?}");
    }
    println!("  {}", render_track(&volume, 21));

    let gestures = GestureAdapter::new(true);
    let pan = |phase, x| GestureEvent {
        handle: Handle::Single,
        phase,
        position: Point::new(x, 12.0),
    };
    println!("pan the handle right, past the end of the track");
    gestures.handle(&mut volume, pan(GesturePhase::Began, 150.0), &origin);
    for x in [180.0, 220.0, 260.0, 300.0] {
        if let Some(change) = gestures.handle(&mut volume, pan(GesturePhase::Changed, x), &origin) {
            println!("  value change: {change:?}");
        }
    }
    gestures.handle(&mut volume, pan(GesturePhase::Ended, 300.0), &origin);
    let state = volume.drag_state();
    println!("  {} ({state:?})", render_track(&volume, 21));

    // Controlled range: the host keeps the value and accepts every request.
    let config = SliderConfig::new(0.0, 1_000.0).with_step(50.0);
    let mut host_value = understory_slider::SliderValue::Range(200.0, 800.0);
    let mut price = SliderEngine::controlled(config, host_value);
    price.on_layout(200.0);

    for press in [60.0, 230.0, 150.0] {
        println!("press range slider at window X {press}");
        if let Some(change) = price.track_press(press, origin) {
            println!("  range change: {change:?}");
            host_value = change;
        }
        price.sync(config, Some(host_value));
        println!("  {}", render_track(&price, 21));
    }
}
