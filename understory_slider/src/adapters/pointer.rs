// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer path: per-handle pointer down, global move and up.
//!
//! A fast drag can carry the pointer outside the handle, so move and up are
//! observed through process-wide listeners. [`PointerAdapter`] installs them
//! when a drag starts and removes them on release, on cancellation, when the
//! engine stops dragging on its own (for example after being disabled), and
//! when the adapter is dropped. Listener registration is therefore scoped to
//! the drag and cannot outlive the slider.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_slider::adapters::{GlobalListeners, PointerAdapter};
//! use understory_slider::{Handle, Mode, SliderConfig, SliderEngine, SliderValue};
//!
//! #[derive(Debug, Default)]
//! struct Document { installed: bool }
//!
//! impl GlobalListeners for Document {
//!     fn install(&mut self) { self.installed = true; }
//!     fn remove(&mut self) { self.installed = false; }
//! }
//!
//! let mut engine = SliderEngine::uncontrolled(SliderConfig::default(), Mode::Single);
//! engine.on_layout(200.0);
//! let mut pointer = PointerAdapter::new(Document::default());
//!
//! pointer.pointer_down(&mut engine, Handle::Single, Point::new(0.0, 0.0));
//! assert!(pointer.listeners().installed);
//!
//! let change = pointer.pointer_move(&mut engine, Point::new(300.0, 40.0), &0.0_f64);
//! assert_eq!(change, Some(SliderValue::Single(100.0)));
//!
//! pointer.pointer_up(&mut engine);
//! assert!(!pointer.listeners().installed);
//! ```

use kurbo::Point;

use super::TrackOrigin;
use crate::config::{Handle, SliderValue};
use crate::engine::SliderEngine;
use crate::haptics::Haptics;

/// Installs and removes the process-wide pointer move and up listeners.
pub trait GlobalListeners {
    /// Starts delivering global pointer move and up events to this slider.
    fn install(&mut self);

    /// Stops delivering global pointer events.
    ///
    /// Must be idempotent: removing listeners that are not installed is a no-op.
    fn remove(&mut self);
}

/// Listener registry for hosts that route global events without registration.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoListeners;

impl GlobalListeners for NoListeners {
    fn install(&mut self) {}

    fn remove(&mut self) {}
}

/// Routes pointer events into a [`SliderEngine`].
#[derive(Debug)]
pub struct PointerAdapter<L: GlobalListeners> {
    listeners: L,
    listening: bool,
}

impl<L: GlobalListeners> PointerAdapter<L> {
    /// Creates an adapter that registers global listeners through `listeners`.
    #[must_use]
    pub const fn new(listeners: L) -> Self {
        Self {
            listeners,
            listening: false,
        }
    }

    /// The listener registry.
    #[must_use]
    pub fn listeners(&self) -> &L {
        &self.listeners
    }

    /// Returns `true` while global listeners are installed.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Pointer pressed on `handle`. Starts a drag and installs global listeners.
    ///
    /// Returns `false` if the engine refused the drag; no listeners are installed then.
    pub fn pointer_down<H: Haptics>(
        &mut self,
        engine: &mut SliderEngine<H>,
        handle: Handle,
        position: Point,
    ) -> bool {
        if !engine.drag_start(handle, position.x) {
            return false;
        }
        self.acquire();
        true
    }

    /// Global pointer move. Ignored unless this adapter started the active drag.
    pub fn pointer_move<H: Haptics>(
        &mut self,
        engine: &mut SliderEngine<H>,
        position: Point,
        origin: &impl TrackOrigin,
    ) -> Option<SliderValue> {
        if !self.listening {
            return None;
        }
        let Some(handle) = engine.drag_state().active() else {
            self.release();
            return None;
        };
        engine.drag_move(handle, position.x, origin.track_origin_x())
    }

    /// Global pointer release. Ends the drag and removes the listeners.
    pub fn pointer_up<H: Haptics>(&mut self, engine: &mut SliderEngine<H>) -> Option<Handle> {
        if !self.listening {
            return None;
        }
        self.release();
        engine.drag_end()
    }

    /// The platform aborted the pointer sequence. Ends the drag and removes the listeners.
    pub fn cancel<H: Haptics>(&mut self, engine: &mut SliderEngine<H>) -> Option<Handle> {
        if !self.listening {
            return None;
        }
        self.release();
        engine.drag_cancel()
    }

    fn acquire(&mut self) {
        if !self.listening {
            self.listeners.install();
            self.listening = true;
        }
    }

    fn release(&mut self) {
        if self.listening {
            self.listeners.remove();
            self.listening = false;
        }
    }
}

impl<L: GlobalListeners> Drop for PointerAdapter<L> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Mode, SliderConfig};
    use crate::drag::DragState;
    use alloc::rc::Rc;
    use core::cell::Cell;

    /// Counts live registrations; shared so it can be observed after drop.
    #[derive(Debug, Default, Clone)]
    struct Registry {
        live: Rc<Cell<i32>>,
        installs: Rc<Cell<u32>>,
    }

    impl GlobalListeners for Registry {
        fn install(&mut self) {
            self.live.set(self.live.get() + 1);
            self.installs.set(self.installs.get() + 1);
        }

        fn remove(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    fn engine(mode: Mode) -> SliderEngine {
        let mut engine = SliderEngine::uncontrolled(SliderConfig::default(), mode);
        engine.on_layout(200.0);
        engine
    }

    fn at(x: f64) -> Point {
        Point::new(x, 0.0)
    }

    #[test]
    fn listeners_live_only_during_drag() {
        let registry = Registry::default();
        let mut adapter = PointerAdapter::new(registry.clone());
        let mut engine = engine(Mode::Single);

        assert_eq!(registry.live.get(), 0);
        assert!(adapter.pointer_down(&mut engine, Handle::Single, at(0.0)));
        assert_eq!(registry.live.get(), 1);

        adapter.pointer_move(&mut engine, at(50.0), &0.0_f64);
        assert_eq!(adapter.pointer_up(&mut engine), Some(Handle::Single));
        assert_eq!(registry.live.get(), 0);
        assert_eq!(engine.drag_state(), DragState::Idle);
    }

    #[test]
    fn moves_without_a_drag_are_ignored() {
        let mut adapter = PointerAdapter::new(NoListeners);
        let mut engine = engine(Mode::Single);
        assert_eq!(adapter.pointer_move(&mut engine, at(100.0), &0.0_f64), None);
        assert_eq!(engine.value(), SliderValue::Single(0.0));
        assert_eq!(adapter.pointer_up(&mut engine), None);
    }

    #[test]
    fn refused_down_installs_nothing() {
        let registry = Registry::default();
        let mut adapter = PointerAdapter::new(registry.clone());
        let mut engine = engine(Mode::Single);
        engine.sync(SliderConfig::default().with_disabled(true), None);

        assert!(!adapter.pointer_down(&mut engine, Handle::Single, at(0.0)));
        assert_eq!(registry.installs.get(), 0);
        assert!(!adapter.is_listening());
    }

    #[test]
    fn second_down_does_not_double_install() {
        let registry = Registry::default();
        let mut adapter = PointerAdapter::new(registry.clone());
        let mut engine = engine(Mode::Range);

        assert!(adapter.pointer_down(&mut engine, Handle::Start, at(0.0)));
        assert!(!adapter.pointer_down(&mut engine, Handle::End, at(200.0)));
        assert_eq!(registry.installs.get(), 1);
        assert_eq!(registry.live.get(), 1);
    }

    #[test]
    fn cancel_releases_listeners() {
        let registry = Registry::default();
        let mut adapter = PointerAdapter::new(registry.clone());
        let mut engine = engine(Mode::Single);

        adapter.pointer_down(&mut engine, Handle::Single, at(0.0));
        assert_eq!(adapter.cancel(&mut engine), Some(Handle::Single));
        assert_eq!(registry.live.get(), 0);
        assert_eq!(adapter.cancel(&mut engine), None);
        assert_eq!(registry.live.get(), 0);
    }

    #[test]
    fn engine_ending_the_drag_releases_on_next_move() {
        let registry = Registry::default();
        let mut adapter = PointerAdapter::new(registry.clone());
        let mut engine = engine(Mode::Single);

        adapter.pointer_down(&mut engine, Handle::Single, at(0.0));
        engine.sync(SliderConfig::default().with_disabled(true), None);
        assert_eq!(adapter.pointer_move(&mut engine, at(80.0), &0.0_f64), None);
        assert_eq!(registry.live.get(), 0);
    }

    #[test]
    fn drop_mid_drag_removes_listeners() {
        let registry = Registry::default();
        let mut engine = engine(Mode::Single);
        {
            let mut adapter = PointerAdapter::new(registry.clone());
            adapter.pointer_down(&mut engine, Handle::Single, at(0.0));
            assert_eq!(registry.live.get(), 1);
        }
        assert_eq!(registry.live.get(), 0);
    }

    #[test]
    fn drop_when_idle_removes_nothing() {
        let registry = Registry::default();
        drop(PointerAdapter::new(registry.clone()));
        assert_eq!(registry.live.get(), 0);
    }
}
