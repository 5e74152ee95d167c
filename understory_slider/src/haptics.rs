// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Haptic feedback sink.
//!
//! The engine asks for a light impact on every track press and a selection
//! tick when a drag starts. Delivery is best-effort: a [`Haptics`]
//! implementation may fail, and the engine only logs the error.

use core::fmt;

/// Strength of an impact effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImpactStyle {
    /// Light tap.
    Light,
    /// Medium tap.
    Medium,
    /// Heavy tap.
    Heavy,
}

/// A haptic effect requested by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HapticFeedback {
    /// Physical impact, used for track presses.
    Impact(ImpactStyle),
    /// Selection change tick, used when a drag starts.
    Selection,
}

/// Why a haptic effect could not be delivered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HapticError {
    /// The platform has no haptic support.
    Unsupported,
    /// The platform reported a failure.
    Failed(&'static str),
}

impl fmt::Display for HapticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => f.write_str("haptic feedback is not supported on this platform"),
            Self::Failed(reason) => write!(f, "haptic feedback failed: {reason}"),
        }
    }
}

impl core::error::Error for HapticError {}

/// Receives haptic requests from the engine.
pub trait Haptics {
    /// Delivers `feedback` to the platform.
    fn trigger(&mut self, feedback: HapticFeedback) -> Result<(), HapticError>;
}

/// Haptics sink that accepts and drops every request.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn trigger(&mut self, _feedback: HapticFeedback) -> Result<(), HapticError> {
        Ok(())
    }
}

impl<F> Haptics for F
where
    F: FnMut(HapticFeedback) -> Result<(), HapticError>,
{
    fn trigger(&mut self, feedback: HapticFeedback) -> Result<(), HapticError> {
        self(feedback)
    }
}
