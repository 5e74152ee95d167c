// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: which handle is being dragged, and how far the pointer has moved.
//!
//! ## Usage
//!
//! 1) Start a drag for a handle by calling [`DragTracker::start`] with the initial pointer X.
//! 2) On each move event, call [`DragTracker::update`] to get the movement delta since the last update.
//! 3) Optionally call [`DragTracker::offset`] for the offset from the start position,
//!    or [`DragTracker::moves`] for the number of moves seen so far.
//! 4) End the drag with [`DragTracker::end`], on release and on cancellation alike.
//!
//! Only one handle may drag at a time: starting a second drag while one is
//! active is refused and leaves the active drag untouched.
//!
//! ## Minimal example
//!
//! ```
//! use understory_slider::Handle;
//! use understory_slider::drag::{DragState, DragTracker};
//!
//! let mut drag = DragTracker::default();
//!
//! assert!(drag.start(Handle::Start, 10.0));
//! assert_eq!(drag.state(), DragState::Dragging(Handle::Start));
//!
//! // A second handle cannot take over an active drag.
//! assert!(!drag.start(Handle::End, 90.0));
//!
//! assert_eq!(drag.update(Handle::Start, 15.0), Some(5.0));
//! assert_eq!(drag.offset(), Some(5.0));
//! assert_eq!(drag.total_offset(20.0), Some(10.0));
//! assert_eq!(drag.moves(), 1);
//!
//! assert_eq!(drag.end(), Some(Handle::Start));
//! assert!(!drag.is_dragging());
//! ```

use crate::config::Handle;

/// Drag state exposed to the rendering layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No handle is being dragged.
    #[default]
    Idle,
    /// The given handle is being dragged.
    Dragging(Handle),
}

impl DragState {
    /// Returns the handle being dragged, if any.
    #[must_use]
    pub const fn active(self) -> Option<Handle> {
        match self {
            Self::Idle => None,
            Self::Dragging(handle) => Some(handle),
        }
    }

    /// Returns `true` while a handle is being dragged.
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// Tracks the active drag and its pointer positions along the track axis.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    state: DragState,
    /// Pointer X at drag start.
    start_x: Option<f64>,
    /// Last recorded pointer X during the drag.
    last_x: Option<f64>,
    /// Moves recorded since the drag started.
    moves: u32,
}

impl DragTracker {
    /// Starts dragging `handle` from pointer position `x`.
    ///
    /// Returns `false` and changes nothing if a drag is already active.
    pub fn start(&mut self, handle: Handle, x: f64) -> bool {
        if self.state.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging(handle);
        self.start_x = Some(x);
        self.last_x = Some(x);
        self.moves = 0;
        true
    }

    /// Records a move of `handle` to `x`, returning the delta since the last update.
    ///
    /// Moves for a handle that is not being dragged are ignored.
    pub fn update(&mut self, handle: Handle, x: f64) -> Option<f64> {
        if self.state.active() != Some(handle) {
            return None;
        }
        let delta = self.last_x.map(|last| x - last);
        self.last_x = Some(x);
        self.moves = self.moves.saturating_add(1);
        delta
    }

    /// Offset of `current_x` from the drag start position.
    #[must_use]
    pub fn total_offset(&self, current_x: f64) -> Option<f64> {
        self.start_x.map(|start| current_x - start)
    }

    /// Offset of the last recorded pointer X from the drag start position.
    #[must_use]
    pub fn offset(&self) -> Option<f64> {
        self.last_x.and_then(|x| self.total_offset(x))
    }

    /// Number of moves recorded for the active drag, `0` while idle.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Last pointer X recorded for the active drag.
    #[must_use]
    pub fn last_x(&self) -> Option<f64> {
        self.last_x
    }

    /// Ends the active drag, returning the handle that was being dragged.
    ///
    /// Ending an idle tracker is a no-op.
    pub fn end(&mut self) -> Option<Handle> {
        let handle = self.state.active();
        self.state = DragState::Idle;
        self.start_x = None;
        self.last_x = None;
        self.moves = 0;
        handle
    }

    /// Current drag state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns `true` while a handle is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }
}
