// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track geometry: conversion between value space and pixel space.
//!
//! A [`TrackGeometry`] is a snapshot of everything needed to map a slider value
//! onto the measured track and back: the value bounds, the step, and the last
//! measured track width. All conversions are pure and total. A track that has
//! not been measured yet (width `0`), a non-finite input, or a misconfigured
//! range (`max <= min`) never panics; it degrades to position `0` and value
//! `min`.
//!
//! ## Minimal example
//!
//! ```
//! use understory_slider::geometry::TrackGeometry;
//!
//! let track = TrackGeometry::new(0.0, 100.0, 1.0, 200.0);
//! assert_eq!(track.position_of(50.0), 100.0);
//! assert_eq!(track.value_at(100.0), 50.0);
//!
//! // Unmeasured tracks map everything to the origin.
//! let unmeasured = TrackGeometry::new(0.0, 100.0, 1.0, 0.0);
//! assert_eq!(unmeasured.position_of(75.0), 0.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`, `floor`, `ceil`

/// Relative tolerance used when a snapped value lands a hair above `max`.
const SNAP_EPSILON: f64 = 1e-9;

/// Fraction of the value span used as the increment when no valid step is configured.
const FALLBACK_INCREMENT_FRACTION: f64 = 0.05;

/// Value bounds, step and measured width of a slider track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackGeometry {
    /// Lowest selectable value.
    pub min: f64,
    /// Highest selectable value.
    pub max: f64,
    /// Quantization granularity. Non-positive or non-finite disables snapping.
    pub step: f64,
    /// Last measured width of the interactive track in pixels.
    pub width: f64,
}

impl TrackGeometry {
    /// Creates a geometry snapshot.
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64, width: f64) -> Self {
        Self {
            min,
            max,
            step,
            width,
        }
    }

    /// Returns `true` once the track has a usable, positive width.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.width.is_finite()
    }

    /// Returns `max - min` when the bounds describe a non-empty range.
    fn span(&self) -> Option<f64> {
        let span = self.max - self.min;
        (span > 0.0 && span.is_finite()).then_some(span)
    }

    /// Returns the configured step if it can be used for snapping.
    fn valid_step(&self) -> Option<f64> {
        (self.step > 0.0 && self.step.is_finite()).then_some(self.step)
    }

    /// Normalized position of `value` along the track, in `[0, 1]`.
    #[must_use]
    pub fn fraction_of(&self, value: f64) -> f64 {
        let Some(span) = self.span() else {
            return 0.0;
        };
        let fraction = (value - self.min) / span;
        if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        }
    }

    /// Pixel offset of `value` from the start of the track.
    ///
    /// Returns `0.0` until the track has been measured.
    #[must_use]
    pub fn position_of(&self, value: f64) -> f64 {
        if !self.is_measured() {
            return 0.0;
        }
        self.fraction_of(value) * self.width
    }

    /// Step-snapped value under a track-relative pixel offset.
    ///
    /// Offsets outside the track clamp to its ends. Returns `min` until the
    /// track has been measured.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        if !self.is_measured() {
            return self.min;
        }
        let Some(span) = self.span() else {
            return self.min;
        };
        let fraction = x / self.width;
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.snap(fraction * span + self.min)
    }

    /// Clamps `value` into `[min, max]` and rounds it to the nearest step boundary.
    ///
    /// Step boundaries are counted from `min`. When the step does not evenly
    /// divide the range, a value that would round past `max` settles on the
    /// last boundary below it instead.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        if self.span().is_none() || value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let Some(step) = self.valid_step() else {
            return clamped;
        };
        let steps = ((clamped - self.min) / step).round();
        let snapped = self.boundary(step, steps);
        if snapped <= self.max {
            snapped
        } else if snapped - self.max <= step * SNAP_EPSILON {
            self.max
        } else {
            self.boundary(step, steps - 1.0)
        }
    }

    /// Moves `value` by `steps` whole steps along the grid, then snaps.
    ///
    /// Without a valid step, [`increment`](Self::increment) is used instead.
    #[must_use]
    pub fn offset(&self, value: f64, steps: i32) -> f64 {
        let Some(step) = self.valid_step() else {
            return self.snap(value + f64::from(steps) * self.increment());
        };
        if self.span().is_none() || value.is_nan() {
            return self.min;
        }
        let index = ((value - self.min) / step).round();
        self.snap(self.boundary(step, index + f64::from(steps)))
    }

    /// Highest value a handle can reach.
    ///
    /// This is `max` itself, or the last step boundary below it when the step
    /// does not evenly divide the range.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.snap(self.max)
    }

    /// Value of the `index`-th step boundary above `min`.
    ///
    /// Steps with a whole reciprocal (`0.1`, `0.25`) divide instead of
    /// multiplying, so `7 * 0.1` comes out as `0.7`.
    fn boundary(&self, step: f64, index: f64) -> f64 {
        let per_unit = step.recip();
        let whole = per_unit.round();
        if whole >= 1.0 && (per_unit - whole).abs() <= whole * SNAP_EPSILON {
            self.min + index / whole
        } else {
            self.min + index * step
        }
    }

    /// Largest step boundary at or below `value`.
    fn floor_to_step(&self, value: f64) -> f64 {
        match self.valid_step() {
            Some(step) => {
                let index = ((value - self.min) / step + SNAP_EPSILON).floor();
                self.boundary(step, index)
            }
            None => value,
        }
    }

    /// Smallest step boundary at or above `value`.
    fn ceil_to_step(&self, value: f64) -> f64 {
        match self.valid_step() {
            Some(step) => {
                let index = ((value - self.min) / step - SNAP_EPSILON).ceil();
                self.boundary(step, index)
            }
            None => value,
        }
    }

    /// Minimum distance kept between the two handles of a range.
    #[must_use]
    pub fn separation(&self) -> f64 {
        self.valid_step().unwrap_or(0.0)
    }

    /// Amount a single keyboard or accessibility increment moves a handle.
    #[must_use]
    pub fn increment(&self) -> f64 {
        self.valid_step().unwrap_or_else(|| {
            self.span()
                .map_or(0.0, |span| span * FALLBACK_INCREMENT_FRACTION)
        })
    }

    /// Constrains a proposed start value so it stays at least one step below `end`.
    #[must_use]
    ///
    /// The bound is rounded down to the step grid, so the result stays on it
    /// even when `end` does not.
    #[must_use]
    pub fn clamp_start(&self, value: f64, end: f64) -> f64 {
        value
            .min(self.top())
            .min(self.floor_to_step(end - self.separation()))
            .max(self.min)
    }

    /// Constrains a proposed end value so it stays at least one step above `start`.
    ///
    /// The bound is rounded up to the step grid and capped at [`top`](Self::top).
    #[must_use]
    pub fn clamp_end(&self, value: f64, start: f64) -> f64 {
        value
            .max(self.min)
            .max(self.ceil_to_step(start + self.separation()))
            .min(self.top())
    }
}
