// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: a headless slider interaction engine.
//!
//! This crate owns the stateful part of a slider and nothing else. It maps
//! values to pixel offsets along a measured track and back, runs the drag
//! state machine, enforces min/max/step constraints and keeps range handles
//! from crossing. Rendering, theming and accessibility labels stay with the
//! host; the engine hands back positions, drag state and change notifications.
//!
//! - [`geometry`]: pure value ↔ pixel conversion and step snapping.
//! - [`drag`]: which handle is being dragged, plus pointer deltas.
//! - [`engine`]: [`SliderEngine`], the state machine tying it together.
//! - [`haptics`]: best-effort haptic requests from presses and drag starts.
//! - [`adapters`]: native gesture and pointer adapters that drive the engine.
//!
//! ## Single value
//!
//! ```rust
//! use understory_slider::{Handle, Mode, SliderConfig, SliderEngine, SliderValue};
//!
//! let mut slider = SliderEngine::uncontrolled(SliderConfig::new(0.0, 100.0), Mode::Single);
//!
//! // Nothing is positioned until the host reports the track width.
//! assert_eq!(slider.position_of(40.0), 0.0);
//! slider.on_layout(200.0);
//!
//! // Press at window X 130 on a track whose origin is at window X 30.
//! let change = slider.track_press(130.0, 30.0);
//! assert_eq!(change, Some(SliderValue::Single(50.0)));
//! assert_eq!(slider.handle_positions()[0].x, 100.0);
//!
//! // Drag the handle to the end of the track.
//! assert!(slider.drag_start(Handle::Single, 130.0));
//! slider.drag_move(Handle::Single, 400.0, 30.0);
//! slider.drag_end();
//! assert_eq!(slider.value(), SliderValue::Single(100.0));
//! ```
//!
//! ## Controlled range
//!
//! A controlled engine never writes its own value. It reports the requested
//! change, and the host decides whether to feed it back.
//!
//! ```rust
//! use understory_slider::{SliderConfig, SliderEngine, SliderValue};
//!
//! let config = SliderConfig::new(0.0, 100.0);
//! let mut slider = SliderEngine::controlled(config, SliderValue::Range(20.0, 80.0));
//! slider.on_layout(200.0);
//!
//! // Raw value 15 is nearer the start handle.
//! let change = slider.track_press(30.0, 0.0);
//! assert_eq!(change, Some(SliderValue::Range(15.0, 80.0)));
//! assert_eq!(slider.value(), SliderValue::Range(20.0, 80.0));
//!
//! // The host accepts the change on its next render.
//! slider.sync(config, change);
//! assert_eq!(slider.value(), SliderValue::Range(15.0, 80.0));
//! ```
//!
//! ## Failure behavior
//!
//! No operation panics on malformed input. An unmeasured track, `max <= min`,
//! a non-positive step or out-of-range values all degrade to clamped output
//! or to a no-op. Haptic failures are logged through `tracing` and otherwise
//! ignored.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: `no_std` float math through Kurbo's `libm` support.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod config;
pub mod drag;
pub mod engine;
pub mod geometry;
pub mod haptics;

pub use config::{Handle, Mode, Ownership, SliderConfig, SliderValue};
pub use drag::DragState;
pub use engine::{HandlePosition, SliderEngine};
pub use haptics::{HapticError, HapticFeedback, Haptics, ImpactStyle, NoHaptics};
