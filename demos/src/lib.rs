// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the slider demos.

use understory_slider::{Haptics, SliderEngine};

/// Installs a `tracing` subscriber honoring `RUST_LOG` (default `debug`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    // A second demo in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Draws the track as one text row of `columns` cells with a marker per handle.
pub fn render_track<H: Haptics>(engine: &SliderEngine<H>, columns: usize) -> String {
    let mut row = vec!['-'; columns.max(1)];
    let width = engine.track_width();
    for handle in engine.handle_positions() {
        let cell = if width > 0.0 {
            ((handle.x / width) * (row.len() - 1) as f64).round() as usize
        } else {
            0
        };
        let last = row.len() - 1;
        row[cell.min(last)] = 'o';
    }
    let mut out = String::with_capacity(row.len() + 2);
    out.push('[');
    out.extend(row);
    out.push(']');
    out
}
