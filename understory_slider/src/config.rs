// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration and value types.

use crate::geometry::TrackGeometry;

/// Per-render slider configuration supplied by the caller.
///
/// `min < max` and `step > 0` are caller contracts. They are not validated;
/// violating them degrades to clamped output rather than panicking.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Lowest selectable value.
    pub min: f64,
    /// Highest selectable value.
    pub max: f64,
    /// Quantization granularity; need not evenly divide `max - min`.
    pub step: f64,
    /// When set, the slider ignores presses, drags and increments.
    pub disabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

impl SliderConfig {
    /// Creates an enabled configuration over `min..=max` with a step of `1`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: 1.0,
            disabled: false,
        }
    }

    /// Returns a copy with the given step.
    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Returns a copy with the given disabled flag.
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Geometry for a track of the given measured width.
    #[must_use]
    pub const fn geometry(&self, width: f64) -> TrackGeometry {
        TrackGeometry::new(self.min, self.max, self.step, width)
    }
}

/// Whether a slider selects one value or a `(start, end)` range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// One handle.
    Single,
    /// Two handles, [`Handle::Start`] and [`Handle::End`].
    Range,
}

impl Mode {
    /// Handles present in this mode, in track order.
    #[must_use]
    pub const fn handles(self) -> &'static [Handle] {
        match self {
            Self::Single => &[Handle::Single],
            Self::Range => &[Handle::Start, Handle::End],
        }
    }
}

/// A draggable endpoint of the selected value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The only handle of a single-value slider.
    Single,
    /// Lower handle of a range slider.
    Start,
    /// Upper handle of a range slider.
    End,
}

impl Handle {
    /// Returns `true` if this handle exists in `mode`.
    #[must_use]
    pub const fn belongs_to(self, mode: Mode) -> bool {
        matches!(
            (self, mode),
            (Self::Single, Mode::Single) | (Self::Start | Self::End, Mode::Range)
        )
    }
}

/// The current selection, tagged by mode.
///
/// This is also the payload of change notifications: `Single` carries what a
/// value-change callback receives, `Range` what a range-change callback receives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SliderValue {
    /// Single-value selection.
    Single(f64),
    /// Range selection as `(start, end)`.
    Range(f64, f64),
}

impl SliderValue {
    /// Mode this value belongs to.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Single(_) => Mode::Single,
            Self::Range(..) => Mode::Range,
        }
    }

    /// Value held by `handle`, if the handle exists in this mode.
    #[must_use]
    pub const fn get(&self, handle: Handle) -> Option<f64> {
        match (*self, handle) {
            (Self::Single(v), Handle::Single) => Some(v),
            (Self::Range(start, _), Handle::Start) => Some(start),
            (Self::Range(_, end), Handle::End) => Some(end),
            _ => None,
        }
    }

    /// The single value, if this is a single-value selection.
    #[must_use]
    pub const fn single(&self) -> Option<f64> {
        match *self {
            Self::Single(v) => Some(v),
            Self::Range(..) => None,
        }
    }

    /// The `(start, end)` pair, if this is a range selection.
    #[must_use]
    pub const fn range(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Range(start, end) => Some((start, end)),
            Self::Single(_) => None,
        }
    }
}

/// Who owns the current value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ownership {
    /// The host supplies the value every render; the engine only requests changes.
    Controlled,
    /// The engine stores the value itself.
    Uncontrolled,
}
