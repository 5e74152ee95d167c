// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native gesture path: one continuous pan recognizer per handle.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_slider::adapters::{GestureAdapter, GestureEvent, GesturePhase};
//! use understory_slider::{Handle, Mode, SliderConfig, SliderEngine, SliderValue};
//!
//! let mut engine = SliderEngine::uncontrolled(SliderConfig::default(), Mode::Single);
//! engine.on_layout(200.0);
//! let gestures = GestureAdapter::new(true);
//!
//! let at = |phase: GesturePhase, x: f64| GestureEvent {
//!     handle: Handle::Single,
//!     phase,
//!     position: Point::new(x, 8.0),
//! };
//! gestures.handle(&mut engine, at(GesturePhase::Began, 10.0), &10.0_f64);
//! let change = gestures.handle(&mut engine, at(GesturePhase::Changed, 110.0), &10.0_f64);
//! assert_eq!(change, Some(SliderValue::Single(50.0)));
//! gestures.handle(&mut engine, at(GesturePhase::Ended, 110.0), &10.0_f64);
//! assert!(!engine.drag_state().is_dragging());
//! ```

use kurbo::Point;

use super::TrackOrigin;
use crate::config::{Handle, SliderConfig, SliderValue};
use crate::engine::SliderEngine;
use crate::haptics::Haptics;

/// Lifecycle phase reported by a gesture recognizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// The recognizer claimed the gesture.
    Began,
    /// The pointer moved.
    Changed,
    /// The pointer was released.
    Ended,
    /// The platform interrupted the gesture.
    Cancelled,
}

/// One event from a handle's gesture recognizer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureEvent {
    /// Handle the recognizer is bound to.
    pub handle: Handle,
    /// Lifecycle phase.
    pub phase: GesturePhase,
    /// Absolute pointer position.
    pub position: Point,
}

/// Routes native gesture events into a [`SliderEngine`].
#[derive(Copy, Clone, Debug)]
pub struct GestureAdapter {
    supported: bool,
}

impl GestureAdapter {
    /// Creates an adapter; `supported` reports whether the platform has gesture recognizers.
    #[must_use]
    pub const fn new(supported: bool) -> Self {
        Self { supported }
    }

    /// Returns `true` if recognizers should be registered for a slider with `config`.
    #[must_use]
    pub fn is_registered(&self, config: &SliderConfig) -> bool {
        self.supported && !config.disabled
    }

    /// Feeds one recognizer event to `engine`, returning the change notification.
    ///
    /// Release and cancellation always end a drag owned by the event's
    /// handle, even when recognizers are no longer registered, so the engine
    /// can never be left dragging.
    pub fn handle<H: Haptics>(
        &self,
        engine: &mut SliderEngine<H>,
        event: GestureEvent,
        origin: &impl TrackOrigin,
    ) -> Option<SliderValue> {
        let owns_drag = engine.drag_state().active() == Some(event.handle);
        match event.phase {
            GesturePhase::Began => {
                if self.is_registered(engine.config()) {
                    engine.drag_start(event.handle, event.position.x);
                }
                None
            }
            GesturePhase::Changed => {
                if !self.is_registered(engine.config()) {
                    return None;
                }
                engine.drag_move(event.handle, event.position.x, origin.track_origin_x())
            }
            GesturePhase::Ended => {
                if owns_drag {
                    engine.drag_end();
                }
                None
            }
            GesturePhase::Cancelled => {
                if owns_drag {
                    engine.drag_cancel();
                }
                None
            }
        }
    }
}
