// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider engine: value ownership, track presses, drags and increments.
//!
//! [`SliderEngine`] turns three abstract gesture events (drag start, drag move
//! and drag end, each naming a [`Handle`]) plus discrete track presses into
//! value updates. It never branches on the input platform; see
//! [`adapters`](crate::adapters) for the code that translates native gestures
//! and pointer events into these calls.
//!
//! Every mutating operation returns the change notification, if any, as a
//! [`SliderValue`]. A `Single` payload is what a value-change callback should
//! receive and a `Range` payload is what a range-change callback should
//! receive. `None` means nothing changed and no callback should fire.
//!
//! ## Ownership
//!
//! Ownership is decided once, at construction:
//!
//! - [`SliderEngine::controlled`]: the host owns the value. Operations only
//!   return the requested change; the displayed value moves when the host
//!   feeds it back through [`SliderEngine::sync`].
//! - [`SliderEngine::uncontrolled`]: the engine owns the value, seeded to
//!   `min` (single) or `(min, max)` (range), and writes every change itself.
//!   When the step does not divide the range, the range seed ends on the last
//!   step boundary below `max`.
//!
//! Switching ownership or mode after construction is not supported; `sync`
//! ignores such props and logs a warning.
//!
//! ## Range presses
//!
//! A track press in range mode moves the handle nearer to the pressed value.
//! On an exact tie the start handle wins if the press lies below the start
//! value; otherwise the end handle wins.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use smallvec::{SmallVec, smallvec};
use tracing::{debug, warn};

use crate::config::{Handle, Mode, Ownership, SliderConfig, SliderValue};
use crate::drag::{DragState, DragTracker};
use crate::geometry::TrackGeometry;
use crate::haptics::{HapticFeedback, Haptics, ImpactStyle, NoHaptics};

/// Rendering information for one handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandlePosition {
    /// Which handle this is.
    pub handle: Handle,
    /// The handle's current value.
    pub value: f64,
    /// Pixel offset of the handle from the start of the track.
    pub x: f64,
}

/// Slider interaction state machine.
#[derive(Debug)]
pub struct SliderEngine<H = NoHaptics> {
    config: SliderConfig,
    ownership: Ownership,
    mode: Mode,
    /// Engine-owned value when uncontrolled, last host value when controlled.
    current: SliderValue,
    track_width: f64,
    drag: DragTracker,
    haptics: H,
}

impl SliderEngine<NoHaptics> {
    /// Creates an engine whose value is owned by the host.
    ///
    /// The mode is taken from the shape of `value`.
    #[must_use]
    pub fn controlled(config: SliderConfig, value: SliderValue) -> Self {
        Self {
            config,
            ownership: Ownership::Controlled,
            mode: value.mode(),
            current: value,
            track_width: 0.0,
            drag: DragTracker::default(),
            haptics: NoHaptics,
        }
    }

    /// Creates an engine that owns its value, seeded to `min` or `(min, max)`.
    #[must_use]
    pub fn uncontrolled(config: SliderConfig, mode: Mode) -> Self {
        let current = match mode {
            Mode::Single => SliderValue::Single(config.min),
            Mode::Range => SliderValue::Range(config.min, config.geometry(0.0).top()),
        };
        Self {
            config,
            ownership: Ownership::Uncontrolled,
            mode,
            current,
            track_width: 0.0,
            drag: DragTracker::default(),
            haptics: NoHaptics,
        }
    }
}

impl<H: Haptics> SliderEngine<H> {
    /// Replaces the haptics sink.
    #[must_use]
    pub fn with_haptics<H2: Haptics>(self, haptics: H2) -> SliderEngine<H2> {
        SliderEngine {
            config: self.config,
            ownership: self.ownership,
            mode: self.mode,
            current: self.current,
            track_width: self.track_width,
            drag: self.drag,
            haptics,
        }
    }

    /// The haptics sink.
    #[must_use]
    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// Mutable access to the haptics sink.
    pub fn haptics_mut(&mut self) -> &mut H {
        &mut self.haptics
    }

    /// Applies the configuration and host value for a new render.
    ///
    /// `value` is the host-supplied value for controlled engines and `None`
    /// for uncontrolled ones. Props that would change ownership or mode are
    /// ignored. Becoming disabled ends any active drag.
    pub fn sync(&mut self, config: SliderConfig, value: Option<SliderValue>) {
        self.config = config;
        if config.disabled
            && let Some(handle) = self.drag.end()
        {
            debug!(?handle, "slider disabled during drag; drag ended");
        }
        match (self.ownership, value) {
            (Ownership::Controlled, Some(value)) if value.mode() == self.mode => {
                self.current = value;
            }
            (Ownership::Controlled, Some(value)) => {
                warn!(
                    mode = ?self.mode,
                    ?value,
                    "slider mode is fixed at construction; ignoring value of the other mode"
                );
            }
            (Ownership::Controlled, None) => {
                warn!("controlled slider received no value; keeping the last one");
            }
            (Ownership::Uncontrolled, Some(value)) => {
                warn!(
                    ?value,
                    "slider ownership is fixed at construction; ignoring value"
                );
            }
            (Ownership::Uncontrolled, None) => {
                self.current = self.normalized(self.current);
            }
        }
    }

    /// Records the measured track width in pixels.
    ///
    /// Negative or non-finite widths are treated as unmeasured.
    pub fn on_layout(&mut self, width: f64) {
        self.track_width = if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        };
    }

    /// Last measured track width, `0` until the first layout.
    #[must_use]
    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Single or range, fixed at construction.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Who owns the value, fixed at construction.
    #[must_use]
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Returns `true` if the host owns the value.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.ownership == Ownership::Controlled
    }

    /// The value to display.
    #[must_use]
    pub fn value(&self) -> SliderValue {
        self.current
    }

    /// Current drag state, for pressed/active styling.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Drag bookkeeping for the active gesture.
    #[must_use]
    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    /// Pointer travel since the active drag started, `None` while idle.
    ///
    /// Renderers use this to offset a pressed handle's visuals under the
    /// finger, independent of step snapping.
    #[must_use]
    pub fn drag_offset(&self) -> Option<f64> {
        self.drag.offset()
    }

    /// Geometry of the track as last measured.
    #[must_use]
    pub fn geometry(&self) -> TrackGeometry {
        self.config.geometry(self.track_width)
    }

    /// Pixel offset of `value` from the start of the track.
    #[must_use]
    pub fn position_of(&self, value: f64) -> f64 {
        self.geometry().position_of(value)
    }

    /// Step-snapped value under a track-relative pixel offset.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        self.geometry().value_at(x)
    }

    /// Values and pixel offsets of every handle, in track order.
    #[must_use]
    pub fn handle_positions(&self) -> SmallVec<[HandlePosition; 2]> {
        let geometry = self.geometry();
        let at = |handle, value| HandlePosition {
            handle,
            value,
            x: geometry.position_of(value),
        };
        match self.current {
            SliderValue::Single(value) => smallvec![at(Handle::Single, value)],
            SliderValue::Range(start, end) => {
                smallvec![at(Handle::Start, start), at(Handle::End, end)]
            }
        }
    }

    /// Handles a discrete press on the track at absolute `pointer_x`.
    ///
    /// `track_origin_x` is the track's window-relative X. The single handle,
    /// or the nearer range handle, jumps to the pressed value. Ignored while
    /// disabled or before the track is measured.
    pub fn track_press(&mut self, pointer_x: f64, track_origin_x: f64) -> Option<SliderValue> {
        if self.config.disabled {
            debug!("ignoring track press on disabled slider");
            return None;
        }
        let geometry = self.geometry();
        if !geometry.is_measured() {
            debug!("ignoring track press before layout");
            return None;
        }
        let raw = geometry.value_at(pointer_x - track_origin_x);
        let handle = match self.current {
            SliderValue::Single(_) => Handle::Single,
            SliderValue::Range(start, end) => nearer_handle(raw, start, end),
        };
        self.feedback(HapticFeedback::Impact(ImpactStyle::Light));
        self.apply(handle, raw)
    }

    /// Starts dragging `handle` with the pointer at `pointer_x`.
    ///
    /// Returns `false` when the slider is disabled, the handle does not exist
    /// in this mode, or another drag is already active.
    pub fn drag_start(&mut self, handle: Handle, pointer_x: f64) -> bool {
        if self.config.disabled {
            debug!(?handle, "ignoring drag start on disabled slider");
            return false;
        }
        if !handle.belongs_to(self.mode) {
            debug!(
                ?handle,
                mode = ?self.mode,
                "ignoring drag start for foreign handle"
            );
            return false;
        }
        if !self.drag.start(handle, pointer_x) {
            debug!(
                ?handle,
                active = ?self.drag.state().active(),
                "ignoring drag start while another handle is dragging"
            );
            return false;
        }
        self.feedback(HapticFeedback::Selection);
        true
    }

    /// Moves the dragged `handle` to absolute `pointer_x`.
    ///
    /// `track_origin_x` should be re-queried for every move so scrolling or
    /// resizing during the drag is honored. Moves are ignored unless `handle`
    /// is the one being dragged.
    pub fn drag_move(
        &mut self,
        handle: Handle,
        pointer_x: f64,
        track_origin_x: f64,
    ) -> Option<SliderValue> {
        self.drag.update(handle, pointer_x)?;
        let geometry = self.geometry();
        if !geometry.is_measured() {
            return None;
        }
        self.apply(handle, geometry.value_at(pointer_x - track_origin_x))
    }

    /// Ends the active drag on release. Returns the handle that was dragging.
    pub fn drag_end(&mut self) -> Option<Handle> {
        self.drag.end()
    }

    /// Ends the active drag after the platform interrupted the gesture.
    pub fn drag_cancel(&mut self) -> Option<Handle> {
        let handle = self.drag.end();
        if handle.is_some() {
            debug!(?handle, "drag cancelled");
        }
        handle
    }

    /// Moves `handle` by `steps` increments, as keyboard and accessibility actions do.
    ///
    /// Negative `steps` decrement. The result is clamped and respects the
    /// non-crossing constraint. Ignored while disabled.
    pub fn nudge(&mut self, handle: Handle, steps: i32) -> Option<SliderValue> {
        if self.config.disabled {
            return None;
        }
        let value = self.current.get(handle)?;
        let target = self.geometry().offset(value, steps);
        self.apply(handle, target)
    }

    /// Moves `handle` to `raw` under clamp, step and non-crossing rules.
    fn apply(&mut self, handle: Handle, raw: f64) -> Option<SliderValue> {
        let geometry = self.geometry();
        let value = geometry.snap(raw);
        let next = match (self.current, handle) {
            (SliderValue::Single(_), Handle::Single) => SliderValue::Single(value),
            (SliderValue::Range(_, end), Handle::Start) => {
                SliderValue::Range(geometry.clamp_start(value, end), end)
            }
            (SliderValue::Range(start, _), Handle::End) => {
                SliderValue::Range(start, geometry.clamp_end(value, start))
            }
            _ => return None,
        };
        if next == self.current {
            return None;
        }
        if self.ownership == Ownership::Uncontrolled {
            self.current = next;
        }
        Some(next)
    }

    /// Re-snaps an engine-owned value after the configuration changed.
    fn normalized(&self, value: SliderValue) -> SliderValue {
        let geometry = self.geometry();
        match value {
            SliderValue::Single(v) => SliderValue::Single(geometry.snap(v)),
            SliderValue::Range(start, end) => {
                let start = geometry.snap(start);
                SliderValue::Range(start, geometry.snap(end).max(start))
            }
        }
    }

    fn feedback(&mut self, feedback: HapticFeedback) {
        if let Err(err) = self.haptics.trigger(feedback) {
            debug!(?feedback, %err, "haptic feedback dropped");
        }
    }
}

/// Picks the range handle closer to `value`.
fn nearer_handle(value: f64, start: f64, end: f64) -> Handle {
    let to_start = (value - start).abs();
    let to_end = (value - end).abs();
    if to_start < to_end || (to_start == to_end && value < start) {
        Handle::Start
    } else {
        Handle::End
    }
}
