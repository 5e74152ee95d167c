// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input adapters: translate platform events into engine calls.
//!
//! Two event sources deliver the same logical drag start, move and end:
//!
//! - [`gesture::GestureAdapter`]: a native continuous gesture recognizer bound
//!   to each handle.
//! - [`pointer::PointerAdapter`]: pointer down on a handle, then move and up
//!   through global listeners that live only as long as the drag.
//!
//! [`InputAdapter`] holds exactly one of them, so the two paths are never live
//! at the same time for one slider. Both query the track origin through
//! [`TrackOrigin`] on every move instead of caching it.

use smallvec::SmallVec;

use crate::config::{Handle, SliderConfig};
use crate::engine::SliderEngine;
use crate::haptics::Haptics;

pub mod gesture;
pub mod pointer;

pub use gesture::{GestureAdapter, GestureEvent, GesturePhase};
pub use pointer::{GlobalListeners, NoListeners, PointerAdapter};

/// Synchronous query for the track's window-relative X origin.
pub trait TrackOrigin {
    /// Current window-relative X of the start of the track.
    fn track_origin_x(&self) -> f64;
}

impl TrackOrigin for f64 {
    fn track_origin_x(&self) -> f64 {
        *self
    }
}

impl<F> TrackOrigin for F
where
    F: Fn() -> f64,
{
    fn track_origin_x(&self) -> f64 {
        self()
    }
}

/// Which event source a runtime uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputPlatform {
    /// Native continuous gesture recognizers.
    NativeGesture,
    /// Pointer down/move/up events with global move and up listeners.
    Pointer,
}

/// Element a handler is attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BindingTarget {
    /// The whole track.
    Track,
    /// One handle.
    Handle(Handle),
}

/// Kind of handler to attach.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BindingKind {
    /// Discrete press, routed to [`SliderEngine::track_press`].
    Press,
    /// Continuous pan gesture, routed to [`GestureAdapter::handle`].
    PanGesture,
    /// Pointer down, routed to [`PointerAdapter::pointer_down`].
    PointerDown,
}

/// A handler the rendering layer should attach.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Element to attach to.
    pub target: BindingTarget,
    /// Handler kind.
    pub kind: BindingKind,
}

/// The one input adapter active for a slider instance.
#[derive(Debug)]
pub enum InputAdapter<L = NoListeners>
where
    L: GlobalListeners,
{
    /// Native gesture path.
    Gesture(GestureAdapter),
    /// Pointer path.
    Pointer(PointerAdapter<L>),
}

impl InputAdapter<NoListeners> {
    /// Native gesture adapter for a platform that supports gesture recognizers.
    #[must_use]
    pub fn native() -> Self {
        Self::Gesture(GestureAdapter::new(true))
    }
}

impl<L: GlobalListeners> InputAdapter<L> {
    /// Pointer adapter that installs global listeners through `listeners`.
    #[must_use]
    pub fn pointer(listeners: L) -> Self {
        Self::Pointer(PointerAdapter::new(listeners))
    }

    /// Event source this adapter handles.
    #[must_use]
    pub fn platform(&self) -> InputPlatform {
        match self {
            Self::Gesture(_) => InputPlatform::NativeGesture,
            Self::Pointer(_) => InputPlatform::Pointer,
        }
    }

    /// Handlers to attach to the track and to each handle of `engine`.
    ///
    /// A disabled slider gets no handlers.
    #[must_use]
    pub fn bindings<H: Haptics>(&self, engine: &SliderEngine<H>) -> SmallVec<[Binding; 3]> {
        let mut out = SmallVec::new();
        let config = engine.config();
        if config.disabled {
            return out;
        }
        out.push(Binding {
            target: BindingTarget::Track,
            kind: BindingKind::Press,
        });
        let Some(kind) = self.handle_binding(config) else {
            return out;
        };
        for &handle in engine.mode().handles() {
            out.push(Binding {
                target: BindingTarget::Handle(handle),
                kind,
            });
        }
        out
    }

    fn handle_binding(&self, config: &SliderConfig) -> Option<BindingKind> {
        match self {
            Self::Gesture(gesture) => gesture
                .is_registered(config)
                .then_some(BindingKind::PanGesture),
            Self::Pointer(_) => Some(BindingKind::PointerDown),
        }
    }
}
