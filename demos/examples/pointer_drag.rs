// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag with scoped global listeners.
//!
//! Shows how the pointer adapter installs global move/up listeners only for
//! the duration of a drag, including when the drag is cancelled or the
//! slider goes away mid-drag.
//!
//! Run:
//! - `cargo run -p understory_demos --example pointer_drag`

use kurbo::Point;
use understory_demos::{init_tracing, render_track};
use understory_slider::adapters::{GlobalListeners, InputAdapter};
use understory_slider::{Handle, Mode, SliderConfig, SliderEngine};

#[derive(Debug)]
struct WindowListeners {
    name: &'static str,
}

impl GlobalListeners for WindowListeners {
    fn install(&mut self) {
        println!("  [{}] add mousemove/mouseup", self.name);
    }

    fn remove(&mut self) {
        println!("  [{}] remove mousemove/mouseup", self.name);
    }
}

fn main() {
    init_tracing();

    let mut engine = SliderEngine::uncontrolled(SliderConfig::new(0.0, 10.0), Mode::Range);
    engine.on_layout(100.0);
    let mut input = InputAdapter::pointer(WindowListeners { name: "window" });
    println!("platform: {:?}", input.platform());
    println!("bindings: {:?}", input.bindings(&engine));

    let InputAdapter::Pointer(pointer) = &mut input else {
        unreachable!("constructed as a pointer adapter");
    };

    // The track scrolls while the user drags; re-measure the origin every move.
    let scroll = std::cell::Cell::new(0.0_f64);
    let origin = || 20.0 - scroll.get();

    println!("drag the end handle left, scrolling as we go");
    pointer.pointer_down(&mut engine, Handle::End, Point::new(120.0, 4.0));
    for (x, scrolled) in [(100.0, 0.0), (90.0, 10.0), (60.0, 10.0), (-30.0, 10.0)] {
        scroll.set(scrolled);
        if let Some(change) = pointer.pointer_move(&mut engine, Point::new(x, 60.0), &origin) {
            println!("  range change: {change:?}");
        }
        if let Some(offset) = engine.drag_offset() {
            println!("  pointer travel: {offset}px");
        }
    }
    pointer.pointer_up(&mut engine);
    println!("  {}", render_track(&engine, 11));

    println!("second handle cannot start while the first drags");
    pointer.pointer_down(&mut engine, Handle::Start, Point::new(20.0, 4.0));
    let refused = pointer.pointer_down(&mut engine, Handle::End, Point::new(30.0, 4.0));
    println!("  end handle accepted: {refused}");
    pointer.cancel(&mut engine);

    println!("slider unmounts mid-drag");
    pointer.pointer_down(&mut engine, Handle::Start, Point::new(20.0, 4.0));
    drop(input);
}
